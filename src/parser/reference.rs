use super::{debug, trace, Failure, Outcome, Parser};
use crate::{
    component::{AuthorityParts, Components, Span},
    options::Mode,
    table,
};

type HierPart = (Option<AuthorityParts>, Span);
type Tail = (Option<Span>, Option<Span>);

impl Parser<'_> {
    /// `scheme = ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`
    fn scheme(&self, pos: usize) -> Outcome<Span> {
        match self.peek(pos) {
            Some(x) if table::ALPHA.allows(x) => {
                let end = self.run(pos + 1, table::SCHEME);
                Ok((end, Span::between(pos, end)))
            }
            _ => Err(self.expected(pos)),
        }
    }

    /// `"//" authority path-abempty`
    fn authority_and_path(&self, pos: usize) -> Outcome<HierPart> {
        let (p, ()) = self.literal(pos, b"//")?;
        let (p, authority) = self.authority(p)?;
        let (p, path) = self.path_abempty(p)?;
        Ok((p, (Some(authority), path)))
    }

    /// ```text
    /// hier-part = "//" authority path-abempty
    ///           / path-absolute
    ///           / path-rootless
    ///           / path-empty
    /// ```
    fn hier_part(&self, pos: usize) -> Outcome<HierPart> {
        self.authority_and_path(pos).or_else(|_| {
            self.path_absolute(pos)
                .or_else(|_| self.path_rootless(pos))
                .or_else(|_| self.path_empty(pos))
                .map(|(p, path)| (p, (None, path)))
        })
    }

    /// ```text
    /// relative-part = "//" authority path-abempty
    ///               / path-absolute
    ///               / path-noscheme
    ///               / path-empty
    /// ```
    fn relative_part(&self, pos: usize) -> Outcome<HierPart> {
        self.authority_and_path(pos).or_else(|_| {
            self.path_absolute(pos)
                .or_else(|_| self.path_noscheme(pos))
                .or_else(|_| self.path_empty(pos))
                .map(|(p, path)| (p, (None, path)))
        })
    }

    /// `[ "?" query ] [ "#" fragment ]`
    fn query_and_fragment(&self, pos: usize) -> Outcome<Tail> {
        let mut p = pos;
        let mut query = None;
        let mut fragment = None;
        if self.at(p, b'?') {
            let end = self.run(p + 1, table::QUERY);
            query = Some(Span::between(p + 1, end));
            p = end;
        }
        if self.at(p, b'#') {
            let end = self.run(p + 1, table::FRAGMENT);
            fragment = Some(Span::between(p + 1, end));
            p = end;
        }
        Ok((p, (query, fragment)))
    }

    /// `URI = scheme ":" hier-part [ "?" query ] [ "#" fragment ]`
    fn uri(&self, pos: usize) -> Outcome<Components> {
        let (p, scheme) = self.scheme(pos)?;
        let (p, ()) = self.literal(p, b":")?;
        let (p, (authority, path)) = self.hier_part(p)?;
        let (p, (query, fragment)) = self.query_and_fragment(p)?;
        let components = Components {
            scheme: Some(scheme),
            authority,
            path,
            query,
            fragment,
        };
        Ok((p, components))
    }

    /// `relative-ref = relative-part [ "?" query ] [ "#" fragment ]`
    fn relative_ref(&self, pos: usize) -> Outcome<Components> {
        let (p, (authority, path)) = self.relative_part(pos)?;
        let (p, (query, fragment)) = self.query_and_fragment(p)?;
        let components = Components {
            scheme: None,
            authority,
            path,
            query,
            fragment,
        };
        Ok((p, components))
    }

    /// Accepts a match only if it consumed the whole input, otherwise
    /// remembers how far it got.
    fn complete(&self, outcome: Outcome<Components>, stop: &mut usize) -> Option<Components> {
        match outcome {
            Ok((end, components)) if end == self.len() => Some(components),
            Ok((end, _)) => {
                trace!(end, "partial match");
                *stop = (*stop).max(end);
                None
            }
            Err(_) => None,
        }
    }

    /// `URI-reference = URI / relative-ref`, or just `URI` in
    /// [`Mode::Absolute`].
    ///
    /// Each alternative starts from the beginning of the input with nothing
    /// carried over from the ones before it.
    pub(super) fn uri_reference(&self) -> Result<Components, Failure> {
        let mut stop = 0;
        if let Some(components) = self.complete(self.uri(0), &mut stop) {
            trace!("matched URI");
            return Ok(components);
        }
        if self.options.mode() == Mode::Reference {
            if let Some(components) = self.complete(self.relative_ref(0), &mut stop) {
                trace!("matched relative-ref");
                return Ok(components);
            }
        }
        let failure = self.diagnose(stop);
        debug!(index = failure.index, kind = ?failure.kind, "no match");
        Err(failure)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        error::ParseErrorKind,
        options::{Mode, Options},
        parser::Parser,
    };

    fn failure(s: &str, options: Options) -> (usize, ParseErrorKind) {
        let f = Parser::new(s.as_bytes(), options)
            .uri_reference()
            .unwrap_err();
        (f.index, f.kind)
    }

    #[test]
    fn nothing_leaks_from_failed_uri() {
        // The URI alternative reads the scheme "a" before failing to find a
        // colon; the relative-ref alternative must not see it.
        let s = "a/b:c";
        let c = Parser::new(s.as_bytes(), Options::new())
            .uri_reference()
            .unwrap();
        assert_eq!(c.scheme, None);
        assert_eq!(c.path.slice(s), "a/b:c");
    }

    #[test]
    fn deepest_failure_wins() {
        assert_eq!(
            failure("http://example.com:80ab", Options::new()),
            (21, ParseErrorKind::TrailingData)
        );
        assert_eq!(
            failure("http://[::1/", Options::new()),
            (7, ParseErrorKind::InvalidHostLiteral)
        );
        assert_eq!(
            failure("http://a/%2", Options::new()),
            (9, ParseErrorKind::UnterminatedPercentEncoding)
        );
        assert_eq!(
            failure("http", Options::new().with_mode(Mode::Absolute)),
            (4, ParseErrorKind::Incomplete)
        );
        assert_eq!(
            failure("http://a/b c", Options::new()),
            (10, ParseErrorKind::InvalidCharacter)
        );
    }
}
