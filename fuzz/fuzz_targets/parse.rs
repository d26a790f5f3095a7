#![no_main]
use libfuzzer_sys::fuzz_target;
use uri_grammar::{Components, Dialect, Options, UriRef};

fuzz_target!(|data: &str| {
    for dialect in [Dialect::Rfc3986, Dialect::Rfc2396] {
        let options = Options::new().with_dialect(dialect);
        let Ok(c) = Components::parse(data, options) else {
            continue;
        };
        let buf = c.recompose(data);
        assert_eq!(data, buf);
        assert_eq!(Components::parse(&buf, options).ok(), Some(c));
    }

    let Ok(r) = UriRef::parse(data) else {
        return;
    };
    let mut buf = String::with_capacity(data.len());
    if let Some(s) = r.scheme() {
        buf.push_str(s.as_str());
        buf.push(':');
    }
    if let Some(a) = r.authority() {
        buf.push_str("//");
        let start = buf.len();
        if let Some(ui) = r.userinfo() {
            buf.push_str(ui);
            buf.push('@');
        }
        buf.push_str(r.host().unwrap());
        if let Some(p) = r.port() {
            buf.push(':');
            buf.push_str(p);
        }
        assert_eq!(&buf[start..], a);
    }
    buf.push_str(r.path());
    if let Some(q) = r.query() {
        buf.push('?');
        buf.push_str(q);
    }
    if let Some(f) = r.fragment() {
        buf.push('#');
        buf.push_str(f);
    }
    assert_eq!(data, buf);
});
