use crate::{JsonKind, Parse, Parser, ParserErr, ParserErrKind};

impl Parser<'_> {
    /// Walk the elements of an array. `elem` is called once per element and must consume it.
    pub fn parse_elements<F>(&mut self, mut elem: F) -> Result<(), ParserErr>
    where
        F: FnMut(&mut Self) -> Result<(), ParserErr>,
    {
        if !self.check('[')? {
            return Err(self.expected_kind(JsonKind::Array));
        }

        self.enter_container()?;
        self.scanner.advance();

        // Empty array
        if self.matches(']') {
            self.leave_container();
            return Ok(());
        }

        loop {
            elem(self)?;

            if self.matches(',') {
                continue;
            }

            if self.matches(']') {
                break;
            }

            return Err(self.make_err_expected(ParserErrKind::ExpectedCommaOr(']')));
        }

        self.leave_container();
        Ok(())
    }
}

impl<T: Parse> Parse for Vec<T> {
    fn parse(parser: &mut Parser) -> Result<Self, ParserErr> {
        let mut elems = Vec::new();

        parser.parse_elements(|parser| {
            elems.push(T::parse(parser)?);
            Ok(())
        })?;

        Ok(elems)
    }
}
