use crate::{JsonKind, Parse, Parser, ParserErr, ParserErrKind};

/// Read a quoted string, starting at its opening quote.
///
/// The short escapes (`\"`, `\\`, `\/`, `\b`, `\f`, `\n`, `\r`, `\t`) are decoded, as is
/// `\u00XX` for a control char (the form the writer emits). Any other escaped char, other
/// `\u` sequences included, is kept as-is without its backslash. Raw chars, newlines
/// included, are copied verbatim.
pub(crate) fn parse_string_literal(parser: &mut Parser) -> Result<String, ParserErr> {
    let start = parser.location();
    parser.scanner.advance();

    let mut str_val = String::new();
    loop {
        let chr = parser
            .scanner
            .advance()
            .ok_or_else(|| parser.make_err_at(ParserErrKind::UnterminatedString, start))?;

        match chr {
            '"' => return Ok(str_val),
            '\\' => {
                let escaped = parser
                    .scanner
                    .advance()
                    .ok_or_else(|| parser.make_err_at(ParserErrKind::UnterminatedString, start))?;

                str_val.push(match escaped {
                    'u' => match control_escape(parser.scanner.rest()) {
                        Some(control) => {
                            for _ in 0..4 {
                                parser.scanner.advance();
                            }
                            control
                        }
                        None => 'u',
                    },
                    'b' => '\x08',
                    'f' => '\x0C',
                    'n' => '\n',
                    'r' => '\r',
                    't' => '\t',
                    other => other,
                });
            }
            _ => str_val.push(chr),
        }
    }
}

/// The control char named by the 4 hex digits at the start of `rest`, if they name one.
fn control_escape(rest: &str) -> Option<char> {
    let hex = rest.get(..4)?;
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let code = u32::from_str_radix(hex, 16).ok()?;
    char::from_u32(code).filter(|c| *c < '\x20')
}

impl Parse for String {
    fn parse(parser: &mut Parser) -> Result<Self, ParserErr> {
        if !parser.check('"')? {
            return Err(parser.expected_kind(JsonKind::String));
        }

        parse_string_literal(parser)
    }
}
