#![allow(missing_debug_implementations)]

use crate::{component::Components, error::ParseError, options::Options, parser};
use alloc::string::String;

pub trait RiRef: Sized {
    type Val;

    fn new(val: Self::Val, components: Components) -> Self;

    fn options() -> Options;
}

pub trait Parse {
    type Val;
    type Err;

    fn parse<R: RiRef<Val = Self::Val>>(self) -> Result<R, Self::Err>;
}

impl<'a> Parse for &'a str {
    type Val = &'a str;
    type Err = ParseError;

    fn parse<R: RiRef<Val = Self::Val>>(self) -> Result<R, Self::Err> {
        parser::parse(self.as_bytes(), R::options()).map(|c| R::new(self, c))
    }
}

impl Parse for String {
    type Val = String;
    type Err = ParseError<String>;

    fn parse<R: RiRef<Val = Self::Val>>(self) -> Result<R, Self::Err> {
        match parser::parse(self.as_bytes(), R::options()) {
            Ok(c) => Ok(R::new(self, c)),
            Err(e) => Err(e.with_input(self)),
        }
    }
}
