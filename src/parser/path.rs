use super::{Outcome, Parser};
use crate::{component::Span, table};

impl Parser<'_> {
    /// `path-abempty = *( "/" segment )`
    pub(super) fn path_abempty(&self, pos: usize) -> Outcome<Span> {
        let mut p = pos;
        while self.at(p, b'/') {
            p = self.run(p + 1, table::PCHAR);
        }
        Ok((p, Span::between(pos, p)))
    }

    /// `path-absolute = "/" [ segment-nz *( "/" segment ) ]`
    pub(super) fn path_absolute(&self, pos: usize) -> Outcome<Span> {
        let (p, ()) = self.literal(pos, b"/")?;
        let first = self.run(p, table::PCHAR);
        let end = if first > p {
            self.path_abempty(first)?.0
        } else {
            p
        };
        Ok((end, Span::between(pos, end)))
    }

    /// `path-rootless = segment-nz *( "/" segment )`
    pub(super) fn path_rootless(&self, pos: usize) -> Outcome<Span> {
        let (p, _) = self.run1(pos, table::PCHAR)?;
        let (end, _) = self.path_abempty(p)?;
        Ok((end, Span::between(pos, end)))
    }

    /// `path-noscheme = segment-nz-nc *( "/" segment )`
    pub(super) fn path_noscheme(&self, pos: usize) -> Outcome<Span> {
        let (p, _) = self.run1(pos, table::SEGMENT_NZ_NC)?;
        let (end, _) = self.path_abempty(p)?;
        Ok((end, Span::between(pos, end)))
    }

    /// `path-empty = 0<pchar>`
    pub(super) fn path_empty(&self, pos: usize) -> Outcome<Span> {
        Ok((pos, Span::new(pos, 0)))
    }
}
