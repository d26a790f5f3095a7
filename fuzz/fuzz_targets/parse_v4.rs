#![no_main]
use libfuzzer_sys::fuzz_target;
use std::net::Ipv4Addr;
use std::str::FromStr;
use uri_grammar::{ip, HostKind, Uri};

fuzz_target!(|data: &str| {
    let valid = ip::validate_ipv4(data);
    assert_eq!(valid, Ipv4Addr::from_str(data).is_ok());
    if data.contains(['/', '?', '#', '@', ':', '%', '[']) {
        return;
    }
    let s = format!("http://user@{data}:81/");
    if let Ok(u) = Uri::parse(s.as_str()) {
        assert_eq!(u.host_kind() == Some(HostKind::Ipv4), valid);
    }
});
