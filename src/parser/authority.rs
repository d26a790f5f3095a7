use super::{trace, Failure, Outcome, Parser};
use crate::{
    component::{AuthorityParts, HostKind, Span},
    error::ParseErrorKind,
    options::Dialect,
    table,
};

impl Parser<'_> {
    /// `host = IP-literal / IPv4address / reg-name`
    pub(super) fn host(&self, pos: usize) -> Outcome<(Span, HostKind)> {
        let (end, kind) = self
            .ip_literal(pos)
            .or_else(|_| self.ipv4_host(pos))
            .or_else(|_| self.reg_name(pos))?;
        Ok((end, (Span::between(pos, end), kind)))
    }

    /// An `IPv4address` that is the whole host.
    ///
    /// A dotted-decimal prefix followed by more `reg-name` characters,
    /// such as `"0.0.0.256"` or `"1.2.3.4.example"`, is a registered name.
    fn ipv4_host(&self, pos: usize) -> Outcome<HostKind> {
        match self.ipv4_address(pos) {
            Some(end) if !self.continues_reg_name(end) => Ok((end, HostKind::Ipv4)),
            _ => Err(Failure {
                index: pos,
                kind: ParseErrorKind::InvalidCharacter,
            }),
        }
    }

    fn continues_reg_name(&self, pos: usize) -> bool {
        self.peek(pos)
            .is_some_and(|x| x == b'%' || table::REG_NAME.allows(x))
    }

    /// `reg-name = *( unreserved / pct-encoded / sub-delims )`
    fn reg_name(&self, pos: usize) -> Outcome<HostKind> {
        Ok((self.run(pos, table::REG_NAME), HostKind::RegName))
    }

    /// `host [ ":" port ]`
    fn host_port(&self, pos: usize, userinfo: Option<Span>) -> Outcome<AuthorityParts> {
        let (p, (host, host_kind)) = self.host(pos)?;
        let (p, port) = if self.at(p, b':') {
            let end = self.run(p + 1, table::PORT);
            (end, Some(Span::between(p + 1, end)))
        } else {
            (p, None)
        };
        let parts = AuthorityParts {
            userinfo,
            host,
            host_kind,
            port,
        };
        Ok((p, parts))
    }

    /// `userinfo "@" host [ ":" port ]`
    fn userinfo_host_port(&self, pos: usize) -> Outcome<AuthorityParts> {
        let end = self.run(pos, table::USERINFO);
        if !self.at(end, b'@') {
            // Not an error yet: the same bytes may be a host and a port.
            return Err(Failure {
                index: end,
                kind: ParseErrorKind::InvalidCharacter,
            });
        }
        self.host_port(end + 1, Some(Span::between(pos, end)))
    }

    /// `authority = [ userinfo "@" ] host [ ":" port ]`
    ///
    /// If the optional userinfo group fails, whether for want of an `"@"` or
    /// because the host after it fails, the whole group is dropped and the
    /// authority is matched again from `pos` without it.
    pub(super) fn authority(&self, pos: usize) -> Outcome<AuthorityParts> {
        let server = self
            .userinfo_host_port(pos)
            .or_else(|_| self.host_port(pos, None));

        if self.options.dialect() == Dialect::Rfc2396 {
            let ends_here = matches!(&server, Ok((end, _)) if self.ends_authority(*end));
            if !ends_here {
                if let Some(registry) = self.registry_authority(pos) {
                    return Ok(registry);
                }
            }
        }
        server
    }

    fn ends_authority(&self, pos: usize) -> bool {
        matches!(self.peek(pos), None | Some(b'/' | b'?' | b'#'))
    }

    /// A registry-based authority from RFC 2396, reported as a host with
    /// no userinfo or port.
    fn registry_authority(&self, pos: usize) -> Option<(usize, AuthorityParts)> {
        let end = self.run(pos, table::LEGACY_REG_NAME);
        if end == pos || !self.ends_authority(end) {
            return None;
        }
        trace!(start = pos, end, "registry-based authority");
        let parts = AuthorityParts {
            userinfo: None,
            host: Span::between(pos, end),
            host_kind: HostKind::RegName,
            port: None,
        };
        Some((end, parts))
    }
}
