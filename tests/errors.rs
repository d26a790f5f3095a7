use uri_grammar::{ParseErrorKind::*, *};

fn err(s: &str) -> (usize, ParseErrorKind) {
    let e = Components::parse(s, Options::new()).unwrap_err();
    (e.index(), e.kind())
}

fn err_absolute(s: &str) -> (usize, ParseErrorKind) {
    let e = Components::parse(s, Options::new().with_mode(Mode::Absolute)).unwrap_err();
    (e.index(), e.kind())
}

#[test]
fn invalid_character() {
    assert_eq!(err("http://a/b c"), (10, InvalidCharacter));
    assert_eq!(err("http://a/\"quoted\""), (9, InvalidCharacter));
    assert_eq!(err("http://a/{x}"), (9, InvalidCharacter));
    assert_eq!(err("\u{e9}"), (0, InvalidCharacter));
    assert_eq!(err("http://a/\u{e9}"), (9, InvalidCharacter));
    assert_eq!(err("a b"), (1, InvalidCharacter));
    assert_eq!(err_absolute("/path"), (0, InvalidCharacter));
    assert_eq!(err_absolute("1http://a"), (0, InvalidCharacter));
}

#[test]
fn unterminated_percent_encoding() {
    assert_eq!(err("http://a/%"), (9, UnterminatedPercentEncoding));
    assert_eq!(err("http://a/%2"), (9, UnterminatedPercentEncoding));
    assert_eq!(err("http://a/%zz"), (9, UnterminatedPercentEncoding));
    assert_eq!(err("http://a%zz@b"), (8, UnterminatedPercentEncoding));
    assert_eq!(err("?q=%G0"), (3, UnterminatedPercentEncoding));
    assert_eq!(err("#%"), (1, UnterminatedPercentEncoding));
    assert_eq!(err("%1"), (0, UnterminatedPercentEncoding));
}

#[test]
fn invalid_host_literal() {
    assert_eq!(err("http://[::1"), (7, InvalidHostLiteral));
    assert_eq!(err("http://[::1/"), (7, InvalidHostLiteral));
    assert_eq!(err("http://[1::2::3]/"), (7, InvalidHostLiteral));
    assert_eq!(err("http://[1.2.3.4]/"), (7, InvalidHostLiteral));
    assert_eq!(err("http://[v1]/"), (7, InvalidHostLiteral));
    assert_eq!(err("//user@[::g]"), (7, InvalidHostLiteral));
}

#[test]
fn incomplete() {
    assert_eq!(err_absolute(""), (0, Incomplete));
    assert_eq!(err_absolute("http"), (4, Incomplete));
    assert_eq!(err_absolute("a+b-c.d"), (7, Incomplete));
}

#[test]
fn trailing_data() {
    assert_eq!(err("http://example.com:80ab"), (21, TrailingData));
    assert_eq!(err("http://[::1]x"), (12, TrailingData));
    assert_eq!(err("http://a:b:c/"), (9, TrailingData));
    assert_eq!(err("http://a@b@c/"), (10, TrailingData));
    assert_eq!(err("//a]"), (3, TrailingData));
    assert_eq!(err("http://a#b#c"), (10, TrailingData));
    assert_eq!(err("/a[b"), (2, TrailingData));
    // Here the scheme rule wanted a colon where the path stopped.
    assert_eq!(err("a[b"), (1, InvalidCharacter));
}

#[test]
fn error_carries_input() {
    let e = UriRef::parse(String::from("http://a/%")).unwrap_err();
    assert_eq!(e.index(), 9);
    assert_eq!(e.kind(), UnterminatedPercentEncoding);
    assert_eq!(e.plain(), Components::parse("http://a/%", Options::new()).unwrap_err());
    assert_eq!(e.to_string(), "unterminated percent-encoded octet at index 9");
    assert_eq!(e.into_input(), "http://a/%");
}

#[test]
fn error_is_std_error() {
    fn assert_error<E: std::error::Error>(_: &E) {}
    let e = Uri::parse("/relative").unwrap_err();
    assert_error(&e);
    assert_eq!(e.to_string(), "invalid character at index 0");
}
