use std::collections::HashSet;

use uri_grammar::*;

#[test]
fn uri_components() {
    let u = Uri::parse("foo://user@example.com:8042/over/there?name=ferret#nose").unwrap();
    assert_eq!(u.scheme().as_str(), "foo");
    assert_eq!(u.authority(), Some("user@example.com:8042"));
    assert_eq!(u.userinfo(), Some("user"));
    assert_eq!(u.host(), Some("example.com"));
    assert_eq!(u.host_kind(), Some(HostKind::RegName));
    assert_eq!(u.port(), Some("8042"));
    assert_eq!(u.port_to_u16(), Ok(Some(8042)));
    assert_eq!(u.path(), "/over/there");
    assert_eq!(u.query(), Some("name=ferret"));
    assert_eq!(u.fragment(), Some("nose"));
    assert!(u.has_authority());

    let u = Uri::parse("mailto:foo@example.com").unwrap();
    assert_eq!(u.scheme(), Scheme::new("MAILTO").unwrap());
    assert_eq!(u.authority(), None);
    assert_eq!(u.host(), None);
    assert_eq!(u.path(), "foo@example.com");
    assert!(!u.has_authority());
}

#[test]
fn uri_requires_scheme() {
    let e = Uri::parse("//example.com/").unwrap_err();
    assert_eq!(e.kind(), ParseErrorKind::InvalidCharacter);
    assert_eq!(e.index(), 0);

    assert!(UriRef::parse("//example.com/").is_ok());
}

#[test]
fn uri_ref_components() {
    let r = UriRef::parse("//@[::1]:/a?#").unwrap();
    assert!(!r.has_scheme());
    assert_eq!(r.scheme(), None);
    assert_eq!(r.userinfo(), Some(""));
    assert_eq!(r.host(), Some("[::1]"));
    assert_eq!(r.host_kind(), Some(HostKind::Ipv6));
    assert_eq!(r.port(), Some(""));
    assert_eq!(r.port_to_u16(), Ok(None));
    assert_eq!(r.path(), "/a");
    assert_eq!(r.query(), Some(""));
    assert_eq!(r.fragment(), Some(""));

    let r = UriRef::parse("").unwrap();
    assert_eq!(r.path(), "");
    assert_eq!(r.authority(), None);
    assert_eq!(r.components(), Components::parse("", Options::new()).unwrap());
}

#[test]
fn port_overflow() {
    let u = Uri::parse("http://example.com:65536/").unwrap();
    assert_eq!(u.port(), Some("65536"));
    assert!(u.port_to_u16().is_err());

    let u = Uri::parse("http://example.com:00080/").unwrap();
    assert_eq!(u.port_to_u16(), Ok(Some(80)));
}

#[test]
fn owned_and_borrowed() {
    let s = "http://example.com/path";
    let borrowed: Uri<&str> = Uri::parse(s).unwrap();
    let owned: Uri<String> = Uri::parse(s.to_owned()).unwrap();
    assert_eq!(borrowed, owned);
    assert_eq!(owned.borrow(), borrowed);
    assert_eq!(borrowed.to_owned(), owned);
    assert_eq!(owned.borrow().path(), "/path");

    // The borrowed path outlives the `Uri`.
    let path = Uri::parse(s).unwrap().path();
    assert_eq!(path, "/path");

    let from_str: UriRef<String> = "../a?b".parse().unwrap();
    assert_eq!(from_str, "../a?b");
    assert_eq!(from_str.query(), Some("b"));
    assert_eq!(from_str.into_string(), "../a?b");

    let e = Uri::parse(String::from("no scheme")).unwrap_err();
    assert_eq!(e.into_input(), "no scheme");

    let u: Uri<&str> = s.try_into().unwrap();
    assert_eq!(<&str>::from(u), s);
}

#[test]
fn comparison() {
    let a = UriRef::parse("HTTP://example.com/").unwrap();
    let b = UriRef::parse("http://example.com/").unwrap();
    // Schemes compare case-insensitively, references do not.
    assert_eq!(a.scheme(), b.scheme());
    assert_ne!(a, b);
    assert!(a < b);

    let set: HashSet<_> = [a, b, a].into_iter().collect();
    assert_eq!(set.len(), 2);
}

#[test]
fn fmt() {
    let u = Uri::parse("http://example.com/?q").unwrap();
    assert_eq!(u.to_string(), "http://example.com/?q");
    assert_eq!(u.scheme().to_string(), "http");
    assert_eq!(format!("{:?}", u.scheme()), "\"http\"");
    assert_eq!(
        format!("{u:?}"),
        "Uri { scheme: \"http\", authority: Some(\"example.com\"), path: \"/\", \
         query: Some(\"q\"), fragment: None }"
    );
}

#[test]
fn scheme_new() {
    assert!(Scheme::new("a+b-c.d").is_some());
    assert!(Scheme::new("").is_none());
    assert!(Scheme::new("1a").is_none());
    assert!(Scheme::new("a_b").is_none());
}
