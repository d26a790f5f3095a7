use uri_grammar::*;

fn parse(s: &str) -> Components {
    Components::parse(s, Options::new()).unwrap()
}

fn text(s: &str, span: Option<Span>) -> Option<&str> {
    span.map(|span| span.slice(s))
}

#[test]
fn parse_absolute() {
    let s = "http://user@example.com:80/foo/bar?attr=val#frag";
    let c = parse(s);
    assert_eq!(text(s, c.scheme()), Some("http"));
    assert_eq!(text(s, c.userinfo()), Some("user"));
    assert_eq!(text(s, c.host()), Some("example.com"));
    assert_eq!(c.host_kind(), Some(HostKind::RegName));
    assert_eq!(text(s, c.port()), Some("80"));
    assert_eq!(c.path().slice(s), "/foo/bar");
    assert_eq!(text(s, c.query()), Some("attr=val"));
    assert_eq!(text(s, c.fragment()), Some("frag"));
    assert_eq!(text(s, c.authority()), Some("user@example.com:80"));
    assert_eq!(
        text(s, c.scheme_specific_part()),
        Some("//user@example.com:80/foo/bar?attr=val")
    );

    let s = "file:///etc/hosts";
    let c = parse(s);
    assert_eq!(text(s, c.scheme()), Some("file"));
    assert_eq!(text(s, c.authority()), Some(""));
    assert_eq!(text(s, c.userinfo()), None);
    assert_eq!(text(s, c.host()), Some(""));
    assert_eq!(c.host_kind(), Some(HostKind::RegName));
    assert_eq!(text(s, c.port()), None);
    assert_eq!(c.path().slice(s), "/etc/hosts");
    assert_eq!(c.query(), None);
    assert_eq!(c.fragment(), None);

    let s = "ldap://[2001:db8::7]/c=GB?objectClass?one";
    let c = parse(s);
    assert_eq!(text(s, c.host()), Some("[2001:db8::7]"));
    assert_eq!(c.host_kind(), Some(HostKind::Ipv6));
    assert_eq!(c.path().slice(s), "/c=GB");
    assert_eq!(text(s, c.query()), Some("objectClass?one"));

    let s = "telnet://192.0.2.16:80/";
    let c = parse(s);
    assert_eq!(text(s, c.host()), Some("192.0.2.16"));
    assert_eq!(c.host_kind(), Some(HostKind::Ipv4));
    assert_eq!(text(s, c.port()), Some("80"));
    assert_eq!(c.path().slice(s), "/");

    let s = "urn:oasis:names:specification:docbook:dtd:xml:4.1.2";
    let c = parse(s);
    assert_eq!(text(s, c.scheme()), Some("urn"));
    assert_eq!(c.authority(), None);
    assert_eq!(c.path().slice(s), "oasis:names:specification:docbook:dtd:xml:4.1.2");

    let s = "foo:";
    let c = parse(s);
    assert_eq!(text(s, c.scheme()), Some("foo"));
    assert!(c.path().is_empty());
    assert_eq!(text(s, c.scheme_specific_part()), Some(""));
}

#[test]
fn parse_rootless_with_at() {
    let s = "mailto:foo@example.com";
    let c = parse(s);
    assert_eq!(text(s, c.scheme()), Some("mailto"));
    assert_eq!(c.authority(), None);
    assert_eq!(c.host(), None);
    assert_eq!(c.userinfo(), None);
    assert_eq!(c.port(), None);
    assert_eq!(c.path().slice(s), "foo@example.com");
}

#[test]
fn parse_relative() {
    let s = "//user@example.com:80/foo/bar?attr=val#frag";
    let c = parse(s);
    assert_eq!(c.scheme(), None);
    assert!(!c.has_scheme());
    assert_eq!(text(s, c.userinfo()), Some("user"));
    assert_eq!(text(s, c.host()), Some("example.com"));
    assert_eq!(text(s, c.port()), Some("80"));
    assert_eq!(c.path().slice(s), "/foo/bar");
    assert_eq!(text(s, c.query()), Some("attr=val"));
    assert_eq!(text(s, c.fragment()), Some("frag"));
    assert_eq!(c.scheme_specific_part(), None);

    let s = "../a/b:c";
    let c = parse(s);
    assert_eq!(c.scheme(), None);
    assert_eq!(c.path().slice(s), "../a/b:c");

    let s = "?q#f";
    let c = parse(s);
    assert!(c.path().is_empty());
    assert_eq!(text(s, c.query()), Some("q"));
    assert_eq!(text(s, c.fragment()), Some("f"));

    let c = parse("");
    assert_eq!(c.scheme(), None);
    assert_eq!(c.authority(), None);
    assert_eq!(c.path(), Span::new(0, 0));
    assert_eq!(c.query(), None);
    assert_eq!(c.fragment(), None);

    // A colon in the first segment makes it a scheme.
    let s = "a:b/c";
    assert_eq!(text(s, parse(s).scheme()), Some("a"));
    // Unless a slash comes first.
    let s = "./a:b";
    assert_eq!(parse(s).scheme(), None);
}

#[test]
fn parse_percent_encoded() {
    let s = "http://user@example.com:80/%7Euser/foo/bar?attr=val";
    let c = parse(s);
    assert_eq!(c.path().slice(s), "/%7Euser/foo/bar");
    assert_eq!(text(s, c.query()), Some("attr=val"));

    let s = "http://%E6%B5%8B@%E8%AF%95/?%20#%23";
    let c = parse(s);
    assert_eq!(text(s, c.userinfo()), Some("%E6%B5%8B"));
    assert_eq!(text(s, c.host()), Some("%E8%AF%95"));
    assert_eq!(text(s, c.query()), Some("%20"));
    assert_eq!(text(s, c.fragment()), Some("%23"));
}

#[test]
fn empty_and_absent_userinfo() {
    let s = "//@host";
    let c = parse(s);
    assert_eq!(c.userinfo(), Some(Span::new(2, 0)));
    assert_eq!(text(s, c.host()), Some("host"));

    let s = "//host";
    let c = parse(s);
    assert_eq!(c.userinfo(), None);
    assert_eq!(text(s, c.host()), Some("host"));

    let s = "//user:pass@host";
    assert_eq!(text(s, parse(s).userinfo()), Some("user:pass"));
}

#[test]
fn empty_and_absent_parts() {
    let s = "http://host:";
    let c = parse(s);
    assert_eq!(text(s, c.port()), Some(""));
    assert_eq!(text(s, c.authority()), Some("host:"));

    let s = "http://host?#";
    let c = parse(s);
    assert_eq!(c.port(), None);
    assert_eq!(text(s, c.query()), Some(""));
    assert_eq!(text(s, c.fragment()), Some(""));

    let s = "http://host#?";
    let c = parse(s);
    assert_eq!(c.query(), None);
    assert_eq!(text(s, c.fragment()), Some("?"));
}

#[test]
fn host_kinds() {
    let kind = |s: &str| parse(s).host_kind();
    assert_eq!(kind("//127.0.0.1"), Some(HostKind::Ipv4));
    assert_eq!(kind("//[::1]"), Some(HostKind::Ipv6));
    assert_eq!(kind("//[v1.x]"), Some(HostKind::IpvFuture));
    assert_eq!(kind("//example.com"), Some(HostKind::RegName));
    // A dotted prefix that does not make up the whole host is a name.
    assert_eq!(kind("//0.0.0.256"), Some(HostKind::RegName));
    assert_eq!(kind("//1.2.3.4.example"), Some(HostKind::RegName));
    assert_eq!(kind("//1.2.3"), Some(HostKind::RegName));
    assert_eq!(kind("//1.2.3.4%20"), Some(HostKind::RegName));
    assert_eq!(kind("//1.2.3.4:80"), Some(HostKind::Ipv4));
    assert_eq!(kind("/path"), None);
}

#[test]
fn absolute_mode() {
    let options = Options::new().with_mode(Mode::Absolute);
    assert!(Components::parse("http://a/b", options).is_ok());
    assert!(Components::parse("foo:", options).is_ok());

    let e = Components::parse("//a/b", options).unwrap_err();
    assert_eq!(e.kind(), ParseErrorKind::InvalidCharacter);
    assert_eq!(e.index(), 0);

    let e = Components::parse("", options).unwrap_err();
    assert_eq!(e.kind(), ParseErrorKind::Incomplete);
    assert_eq!(e.index(), 0);
}

#[test]
fn accepts_bytes() {
    let c = Components::parse(b"http://a/".as_slice(), Options::new()).unwrap();
    assert_eq!(c.path(), Span::new(8, 1));

    let e = Components::parse(b"http://a/\xff".as_slice(), Options::new()).unwrap_err();
    assert_eq!(e.kind(), ParseErrorKind::InvalidCharacter);
    assert_eq!(e.index(), 9);
}
