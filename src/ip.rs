//! Validation of host addresses.
//!
//! These functions use the same rules as the host of an authority, but
//! require the whole input to match. An IP literal's brackets are not part
//! of the address.

use crate::parser;

/// Checks whether a string is an `IPv4address`.
///
/// Each of the four octets must be in `0..=255`, written in decimal without
/// leading zeros.
///
/// # Examples
///
/// ```
/// use uri_grammar::ip::validate_ipv4;
///
/// assert!(validate_ipv4("127.0.0.1"));
/// assert!(!validate_ipv4("0.0.0.256"));
/// assert!(!validate_ipv4("01.0.0.1"));
/// ```
#[must_use]
pub fn validate_ipv4(s: &str) -> bool {
    parser::is_ipv4(s.as_bytes())
}

/// Checks whether a string is an `IPv6address`.
///
/// # Examples
///
/// ```
/// use uri_grammar::ip::validate_ipv6;
///
/// assert!(validate_ipv6("::1"));
/// assert!(validate_ipv6("::ffff:127.0.0.1"));
/// assert!(!validate_ipv6("1::2::3"));
/// assert!(!validate_ipv6("[::1]"));
/// ```
#[must_use]
pub fn validate_ipv6(s: &str) -> bool {
    parser::is_ipv6(s.as_bytes())
}

/// Checks whether a string is an `IPvFuture`.
///
/// ```
/// assert!(uri_grammar::ip::validate_ipvfuture("v7.fe80::1"));
/// ```
#[must_use]
pub fn validate_ipvfuture(s: &str) -> bool {
    parser::is_ipv_future(s.as_bytes())
}
