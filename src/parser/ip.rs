//! IP address rules.
//!
//! These rules are silent: they return `None` on mismatch without recording
//! a failure, because a mismatch either falls through to another host form
//! or is reported once for the whole literal by [`Parser::ip_literal`].

use super::{Outcome, Parser};
use crate::{component::HostKind, error::ParseErrorKind, table};

// dec-octet = "25" %x30-35        ; 250-255
//           / "2" %x30-34 DIGIT   ; 200-249
//           / "1" 2DIGIT          ; 100-199
//           / %x31-39 DIGIT       ; 10-99
//           / DIGIT               ; 0-9
//
// The order matters: the first alternative that matches wins, so the
// three-digit forms must come before the shorter ones.
const DEC_OCTET: [&[(u8, u8)]; 5] = [
    &[(b'2', b'2'), (b'5', b'5'), (b'0', b'5')],
    &[(b'2', b'2'), (b'0', b'4'), (b'0', b'9')],
    &[(b'1', b'1'), (b'0', b'9'), (b'0', b'9')],
    &[(b'1', b'9'), (b'0', b'9')],
    &[(b'0', b'9')],
];

/// What follows the explicit groups of an IPv6 form.
#[derive(Clone, Copy)]
enum Tail {
    Ls32,
    H16,
    Nothing,
}

/// One alternative of the `IPv6address` rule.
#[derive(Clone, Copy)]
struct V6Form {
    /// Maximum number of `h16` groups before `"::"`, or `None` if the form
    /// has no `"::"`.
    before: Option<usize>,
    /// Number of `h16 ":"` groups after `"::"` (or from the start).
    after: usize,
    tail: Tail,
}

const fn form(before: Option<usize>, after: usize, tail: Tail) -> V6Form {
    V6Form {
        before,
        after,
        tail,
    }
}

// IPv6address =                            6( h16 ":" ) ls32
//             /                       "::" 5( h16 ":" ) ls32
//             / [               h16 ] "::" 4( h16 ":" ) ls32
//             / [ *1( h16 ":" ) h16 ] "::" 3( h16 ":" ) ls32
//             / [ *2( h16 ":" ) h16 ] "::" 2( h16 ":" ) ls32
//             / [ *3( h16 ":" ) h16 ] "::"    h16 ":"   ls32
//             / [ *4( h16 ":" ) h16 ] "::"              ls32
//             / [ *5( h16 ":" ) h16 ] "::"              h16
//             / [ *6( h16 ":" ) h16 ] "::"
const IPV6_FORMS: [V6Form; 9] = [
    form(None, 6, Tail::Ls32),
    form(Some(0), 5, Tail::Ls32),
    form(Some(1), 4, Tail::Ls32),
    form(Some(2), 3, Tail::Ls32),
    form(Some(3), 2, Tail::Ls32),
    form(Some(4), 1, Tail::Ls32),
    form(Some(5), 0, Tail::Ls32),
    form(Some(6), 0, Tail::H16),
    form(Some(7), 0, Tail::Nothing),
];

impl Parser<'_> {
    /// Matches a sequence of byte ranges.
    fn ranges(&self, pos: usize, ranges: &[(u8, u8)]) -> Option<usize> {
        for (i, &(lo, hi)) in ranges.iter().enumerate() {
            match self.peek(pos + i) {
                Some(x) if (lo..=hi).contains(&x) => {}
                _ => return None,
            }
        }
        Some(pos + ranges.len())
    }

    pub(super) fn dec_octet(&self, pos: usize) -> Option<usize> {
        DEC_OCTET.iter().find_map(|alt| self.ranges(pos, alt))
    }

    /// `IPv4address = dec-octet "." dec-octet "." dec-octet "." dec-octet`
    pub(super) fn ipv4_address(&self, pos: usize) -> Option<usize> {
        let mut p = self.dec_octet(pos)?;
        for _ in 0..3 {
            if !self.at(p, b'.') {
                return None;
            }
            p = self.dec_octet(p + 1)?;
        }
        Some(p)
    }

    /// `h16 = 1*4HEXDIG`
    fn h16(&self, pos: usize) -> Option<usize> {
        let n = (0..4)
            .take_while(|&i| self.peek(pos + i).is_some_and(table::is_hexdig))
            .count();
        (n > 0).then_some(pos + n)
    }

    /// `ls32 = ( h16 ":" h16 ) / IPv4address`
    fn ls32(&self, pos: usize) -> Option<usize> {
        let pair = self
            .h16(pos)
            .filter(|&p| self.at(p, b':'))
            .and_then(|p| self.h16(p + 1));
        pair.or_else(|| self.ipv4_address(pos))
    }

    /// `[ *(max - 1)( h16 ":" ) h16 ] "::"`, with `max == 0` meaning just `"::"`.
    fn compressed_prefix(&self, pos: usize, max: usize) -> Option<usize> {
        let mut p = pos;
        if max > 0 {
            if let Some(end) = self.h16(p) {
                p = end;
                let mut groups = 1;
                // A single colon separates groups; a double colon ends the prefix.
                while groups < max && self.at(p, b':') && !self.at(p + 1, b':') {
                    p = self.h16(p + 1)?;
                    groups += 1;
                }
            }
        }
        (self.at(p, b':') && self.at(p + 1, b':')).then_some(p + 2)
    }

    fn ipv6_form(&self, pos: usize, form: V6Form) -> Option<usize> {
        let mut p = pos;
        if let Some(max) = form.before {
            p = self.compressed_prefix(p, max)?;
        }
        for _ in 0..form.after {
            p = self.h16(p)?;
            if !self.at(p, b':') {
                return None;
            }
            p += 1;
        }
        match form.tail {
            Tail::Ls32 => self.ls32(p),
            Tail::H16 => self.h16(p),
            Tail::Nothing => Some(p),
        }
    }

    /// Tries the nine `IPv6address` forms in order and returns the end of the
    /// first one that is followed by a byte for which `closes` holds.
    pub(super) fn ipv6_address(&self, pos: usize, closes: impl Fn(usize) -> bool) -> Option<usize> {
        IPV6_FORMS
            .iter()
            .filter_map(|&form| self.ipv6_form(pos, form))
            .find(|&end| closes(end))
    }

    /// `IPvFuture = "v" 1*HEXDIG "." 1*( unreserved / sub-delims / ":" )`
    pub(super) fn ipv_future(&self, pos: usize) -> Option<usize> {
        if !matches!(self.peek(pos), Some(b'v' | b'V')) {
            return None;
        }
        let p = self.run(pos + 1, table::HEXDIG);
        if p == pos + 1 || !self.at(p, b'.') {
            return None;
        }
        let end = self.run(p + 1, table::IPV_FUTURE);
        (end > p + 1).then_some(end)
    }

    /// `IP-literal = "[" ( IPv6address / IPvFuture ) "]"`
    ///
    /// On mismatch, records an [`InvalidHostLiteral`] failure at the `"["`.
    ///
    /// [`InvalidHostLiteral`]: ParseErrorKind::InvalidHostLiteral
    pub(super) fn ip_literal(&self, pos: usize) -> Outcome<HostKind> {
        if !self.at(pos, b'[') {
            return Err(self.expected(pos));
        }
        let closes = |end: usize| self.at(end, b']');
        let inner = pos + 1;
        let found = match self.ipv6_address(inner, closes) {
            Some(end) => Some((end, HostKind::Ipv6)),
            None => self
                .ipv_future(inner)
                .filter(|&end| closes(end))
                .map(|end| (end, HostKind::IpvFuture)),
        };
        match found {
            Some((end, kind)) => Ok((end + 1, kind)),
            None => Err(self.fail(pos, ParseErrorKind::InvalidHostLiteral)),
        }
    }
}
