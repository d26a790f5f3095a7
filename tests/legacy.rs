use uri_grammar::*;

fn legacy(s: &str) -> Result<Components, ParseError> {
    Components::parse(s, Options::new().with_dialect(Dialect::Rfc2396))
}

#[test]
fn registry_authority() {
    let s = "news://a@b@c/path";
    let c = legacy(s).unwrap();
    assert_eq!(c.host().unwrap().slice(s), "a@b@c");
    assert_eq!(c.host_kind(), Some(HostKind::RegName));
    assert_eq!(c.userinfo(), None);
    assert_eq!(c.port(), None);
    assert_eq!(c.authority().unwrap().slice(s), "a@b@c");
    assert_eq!(c.path().slice(s), "/path");
    assert_eq!(c.recompose(s), s);

    let s = "foo://a:b:c?q";
    let c = legacy(s).unwrap();
    assert_eq!(c.host().unwrap().slice(s), "a:b:c");
    assert_eq!(c.query().unwrap().slice(s), "q");

    let s = "//host:port";
    let c = legacy(s).unwrap();
    assert_eq!(c.host().unwrap().slice(s), "host:port");
    assert_eq!(c.port(), None);

    // Both are rejected by RFC 3986.
    assert!(Components::parse("news://a@b@c/path", Options::new()).is_err());
    assert!(Components::parse("//host:port", Options::new()).is_err());
}

#[test]
fn server_authority_is_preferred() {
    let s = "http://user@example.com:80/";
    let c = legacy(s).unwrap();
    assert_eq!(c.userinfo().unwrap().slice(s), "user");
    assert_eq!(c.host().unwrap().slice(s), "example.com");
    assert_eq!(c.port().unwrap().slice(s), "80");
    assert_eq!(c, Components::parse(s, Options::new()).unwrap());

    let s = "http://[::1]:8080";
    let c = legacy(s).unwrap();
    assert_eq!(c.host_kind(), Some(HostKind::Ipv6));
    assert_eq!(c.port().unwrap().slice(s), "8080");
}

#[test]
fn registry_authority_charset() {
    // Characters no authority allows.
    assert!(legacy("//a@b@[c]").is_err());
    assert!(legacy("//a@b@c d").is_err());

    let s = "//$,;:@&=+@!*'()%20";
    let c = legacy(s).unwrap();
    assert_eq!(c.host().unwrap().slice(s), "$,;:@&=+@!*'()%20");
    assert_eq!(c.userinfo(), None);
}
