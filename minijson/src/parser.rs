use thiserror::Error;

use crate::{
    json_value::{JsonKind, JsonValue},
    parse_options::ParseOptions,
    scanner::{Location, Scanner},
};

#[derive(Debug, Clone, PartialEq, Error)]
#[error("{kind} at line {line}, column {column}")]
pub struct ParserErr {
    pub kind: ParserErrKind,
    pub line: usize,
    pub column: usize,
    /// Byte offset into the source
    pub position: usize,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParserErrKind {
    #[error("unexpected end of input")]
    UnexpectedEndOfSource,
    #[error("unterminated string")]
    UnterminatedString,
    #[error("invalid JSON value")]
    InvalidValue,
    #[error("invalid number")]
    InvalidNumber,
    #[error("expected `{0}`")]
    ExpectedChar(char),
    #[error("expected `,` or `{0}`")]
    ExpectedCommaOr(char),
    #[error("expected end of input")]
    ExpectedEndOfSource,
    #[error("expected {0}")]
    ExpectedKind(JsonKind),
    #[error("nesting deeper than {0} levels")]
    NestingTooDeep(usize),
    #[error("missing field `{0}`")]
    MissingField(String),
}

/// A type that can be read straight from JSON text, one grammar production at a time.
pub trait Parse {
    fn parse(parser: &mut Parser) -> Result<Self, ParserErr>
    where
        Self: Sized;
}

#[derive(Debug, Clone)]
pub struct Parser<'a> {
    pub(crate) scanner: Scanner<'a>,
    options: ParseOptions,
    depth: usize,
}

impl<'a> Parser<'a> {
    fn init(source: &'a str, options: &ParseOptions) -> Self {
        Self {
            scanner: Scanner::init(source),
            options: options.clone(),
            depth: 0,
        }
    }

    pub fn parse<T: Parse>(source: &str) -> Result<T, ParserErr> {
        Self::parse_with_options(source, &ParseOptions::default())
    }

    pub fn parse_with_options<T: Parse>(
        source: &str,
        options: &ParseOptions,
    ) -> Result<T, ParserErr> {
        tracing::trace!(len = source.len(), "parsing JSON document");

        let mut parser = Parser::init(source, options);
        let result = T::parse(&mut parser)?;

        if !options.allow_trailing {
            parser.scanner.skip_whitespace();
            if !parser.scanner.is_at_end() {
                return Err(parser.make_err(ParserErrKind::ExpectedEndOfSource));
            }
        }

        Ok(result)
    }

    /// Parse the first value in `source`, ignoring whatever follows it. Also returns the byte
    /// offset just past the value.
    pub fn parse_prefix<T: Parse>(source: &str) -> Result<(T, usize), ParserErr> {
        let options = ParseOptions::default().allow_trailing(true);
        let mut parser = Parser::init(source, &options);
        let result = T::parse(&mut parser)?;

        Ok((result, parser.scanner.position()))
    }

    pub fn location(&self) -> Location {
        self.scanner.location()
    }

    pub fn make_err(&self, kind: ParserErrKind) -> ParserErr {
        self.make_err_at(kind, self.location())
    }

    pub fn make_err_at(&self, kind: ParserErrKind, location: Location) -> ParserErr {
        ParserErr {
            kind,
            line: location.line,
            column: location.column,
            position: location.position,
        }
    }

    /// Like `make_err`, but running out of input is reported as such rather than as `kind`
    pub fn make_err_expected(&self, kind: ParserErrKind) -> ParserErr {
        if self.scanner.is_at_end() {
            return self.make_err(ParserErrKind::UnexpectedEndOfSource);
        }

        self.make_err(kind)
    }

    /// Next non-whitespace char, without consuming it
    pub fn peek(&mut self) -> Result<char, ParserErr> {
        self.scanner.skip_whitespace();
        self.scanner
            .peek()
            .ok_or_else(|| self.make_err(ParserErrKind::UnexpectedEndOfSource))
    }

    pub fn check(&mut self, c: char) -> Result<bool, ParserErr> {
        Ok(self.peek()? == c)
    }

    pub fn consume(&mut self, c: char) -> Result<(), ParserErr> {
        self.scanner.skip_whitespace();
        if self.scanner.matches(c) {
            return Ok(());
        }

        Err(self.make_err_expected(ParserErrKind::ExpectedChar(c)))
    }

    /// Consume `c` if it is the next non-whitespace char
    pub fn matches(&mut self, c: char) -> bool {
        self.scanner.skip_whitespace();
        self.scanner.matches(c)
    }

    /// Error for a value of the wrong kind, pointing at the start of that value
    pub fn expected_kind(&mut self, kind: JsonKind) -> ParserErr {
        self.scanner.skip_whitespace();
        self.make_err_expected(ParserErrKind::ExpectedKind(kind))
    }

    pub(crate) fn enter_container(&mut self) -> Result<(), ParserErr> {
        self.depth += 1;
        if self.depth > self.options.max_depth {
            return Err(self.make_err(ParserErrKind::NestingTooDeep(self.options.max_depth)));
        }

        Ok(())
    }

    pub(crate) fn leave_container(&mut self) {
        self.depth -= 1;
    }
}

/// Parse a complete JSON document. Only whitespace may follow the value.
pub fn parse(source: &str) -> Result<JsonValue, ParserErr> {
    Parser::parse(source)
}

/// Parse the first JSON value in `source`, returning it with the byte offset where it ended.
/// Anything after the value is ignored.
pub fn parse_prefix(source: &str) -> Result<(JsonValue, usize), ParserErr> {
    Parser::parse_prefix(source)
}

impl std::str::FromStr for JsonValue {
    type Err = ParserErr;

    fn from_str(source: &str) -> Result<Self, Self::Err> {
        parse(source)
    }
}
