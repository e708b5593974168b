use crate::{JsonKind, JsonValue, Parse, Parser, ParserErr, ParserErrKind};

/// `-? digit+ ( . digit+ )?` - no exponent and no leading `+`. Returns the number's text.
fn scan_number<'a>(parser: &mut Parser<'a>) -> Result<&'a str, ParserErr> {
    let start = parser.scanner.position();
    parser.scanner.matches('-');

    if parser.scanner.skip_digits() == 0 {
        return Err(parser.make_err(ParserErrKind::InvalidNumber));
    }

    if parser.scanner.matches('.') && parser.scanner.skip_digits() == 0 {
        return Err(parser.make_err(ParserErrKind::InvalidNumber));
    }

    // Exponents, a second `.` or letters glued onto the digits are not part of the grammar
    if matches!(parser.scanner.peek(), Some(c) if c.is_alphanumeric() || c == '.') {
        return Err(parser.make_err(ParserErrKind::InvalidNumber));
    }

    Ok(parser.scanner.slice_from(start))
}

// Integers reject fractional text, as `str::parse` does
macro_rules! impl_parse_number {
    ($($ty:ty),*) => {
        $(
            impl Parse for $ty {
                fn parse(parser: &mut Parser) -> Result<Self, ParserErr> {
                    let start = parser.location();
                    let lexeme = number_lexeme(parser)?;
                    lexeme
                        .parse::<$ty>()
                        .map_err(|_| parser.make_err_at(ParserErrKind::InvalidNumber, start))
                }
            }
        )*
    };
}

// Floats also reject digit strings too long to fit, which `str::parse` turns into infinity
macro_rules! impl_parse_float {
    ($($ty:ty),*) => {
        $(
            impl Parse for $ty {
                fn parse(parser: &mut Parser) -> Result<Self, ParserErr> {
                    let start = parser.location();
                    let lexeme = number_lexeme(parser)?;
                    lexeme
                        .parse::<$ty>()
                        .ok()
                        .filter(|val| val.is_finite())
                        .ok_or_else(|| parser.make_err_at(ParserErrKind::InvalidNumber, start))
                }
            }
        )*
    };
}

fn number_lexeme<'a>(parser: &mut Parser<'a>) -> Result<&'a str, ParserErr> {
    if !matches!(parser.peek()?, '0'..='9' | '-') {
        return Err(parser.expected_kind(JsonKind::Number));
    }

    scan_number(parser)
}

impl_parse_float!(f64, f32);
impl_parse_number!(i128, i64, i32, i16, i8, u128, u64, u32, u16, u8, usize, isize);

impl Parse for bool {
    fn parse(parser: &mut Parser) -> Result<Self, ParserErr> {
        parser.peek()?;

        if parser.scanner.matches_literal("true") {
            return Ok(true);
        }

        if parser.scanner.matches_literal("false") {
            return Ok(false);
        }

        Err(parser.expected_kind(JsonKind::Bool))
    }
}

/// The keyword literals, tried in the order `true`, `false`, `null`. `None` if none match.
pub(crate) fn parse_literal(parser: &mut Parser) -> Result<Option<JsonValue>, ParserErr> {
    parser.peek()?;

    let value = if parser.scanner.matches_literal("true") {
        JsonValue::Bool(true)
    } else if parser.scanner.matches_literal("false") {
        JsonValue::Bool(false)
    } else if parser.scanner.matches_literal("null") {
        JsonValue::Null
    } else {
        return Ok(None);
    };

    Ok(Some(value))
}
