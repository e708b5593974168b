use std::rc::Rc;

use crate::{Parse, Parser, ParserErr};

impl<T: Parse> Parse for Option<T> {
    fn parse(parser: &mut Parser) -> Result<Self, ParserErr> {
        parser.peek()?;

        if parser.scanner.matches_literal("null") {
            return Ok(None);
        }

        Ok(Some(T::parse(parser)?))
    }
}

impl<T: Parse> Parse for Rc<T> {
    fn parse(parser: &mut Parser) -> Result<Self, ParserErr> {
        T::parse(parser).map(Rc::new)
    }
}
