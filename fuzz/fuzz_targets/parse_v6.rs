#![no_main]
use libfuzzer_sys::fuzz_target;
use std::net::Ipv6Addr;
use std::str::FromStr;
use uri_grammar::{ip, HostKind, UriRef};

fuzz_target!(|data: &str| {
    let valid = ip::validate_ipv6(data);
    assert_eq!(valid, Ipv6Addr::from_str(data).is_ok());
    let s = format!("//[{data}]");
    let literal = UriRef::parse(s.as_str()).map_or(false, |r| r.host_kind() == Some(HostKind::Ipv6));
    assert_eq!(literal, valid);
});
