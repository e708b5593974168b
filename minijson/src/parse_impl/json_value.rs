use crate::{
    JsonArray, JsonObject, JsonValue, Parse, Parser, ParserErr, ParserErrKind, parse_impl::primitives,
};

impl Parse for JsonValue {
    fn parse(parser: &mut Parser) -> Result<Self, ParserErr> {
        let value = match parser.peek()? {
            '{' => Self::Object(JsonObject::parse(parser)?),
            '[' => Self::Array(JsonArray::parse(parser)?),
            '"' => Self::String(String::parse(parser)?),
            c if c.is_ascii_digit() || c == '-' => Self::Number(f64::parse(parser)?),
            _ => primitives::parse_literal(parser)?
                .ok_or_else(|| parser.make_err(ParserErrKind::InvalidValue))?,
        };

        Ok(value)
    }
}
