use std::collections::BTreeMap;

use crate::{JsonKind, Parse, Parser, ParserErr, ParserErrKind, parse_impl::strings};

impl Parser<'_> {
    /// Walk the members of an object, handing each key to `member`, which must consume the
    /// value that follows the colon.
    pub fn parse_members<F>(&mut self, mut member: F) -> Result<(), ParserErr>
    where
        F: FnMut(&mut Self, String) -> Result<(), ParserErr>,
    {
        if !self.check('{')? {
            return Err(self.expected_kind(JsonKind::Object));
        }

        self.enter_container()?;
        self.scanner.advance();

        // Empty object
        if self.matches('}') {
            self.leave_container();
            return Ok(());
        }

        loop {
            // Every member, including one after a comma, must start with a key
            if !self.check('"')? {
                return Err(self.make_err(ParserErrKind::ExpectedChar('"')));
            }

            let key = strings::parse_string_literal(self)?;
            self.consume(':')?;
            member(self, key)?;

            if self.matches(',') {
                continue;
            }

            if self.matches('}') {
                break;
            }

            return Err(self.make_err_expected(ParserErrKind::ExpectedCommaOr('}')));
        }

        self.leave_container();
        Ok(())
    }
}

impl<T: Parse> Parse for BTreeMap<String, T> {
    fn parse(parser: &mut Parser) -> Result<Self, ParserErr> {
        let mut props = BTreeMap::new();

        // Map assignment, so the last of several duplicate keys wins
        parser.parse_members(|parser, key| {
            let value = T::parse(parser)?;
            props.insert(key, value);
            Ok(())
        })?;

        Ok(props)
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use crate::{JsonValue, ParseOptions};

    use super::*;

    #[test]
    fn test_empty() {
        let result = Parser::parse::<BTreeMap<String, JsonValue>>("{ \n }");
        assert_eq!(Ok(BTreeMap::new()), result);
    }

    #[test]
    fn test_float_only() {
        let result =
            Parser::parse::<BTreeMap<String, f64>>(r#"{"prop1": 5, "prop2": -2, "prop3": 16.9}"#);

        let expected = BTreeMap::from([
            ("prop1".to_string(), 5.0),
            ("prop2".to_string(), -2.0),
            ("prop3".to_string(), 16.9),
        ]);

        assert_eq!(Ok(expected), result);
    }

    #[test]
    fn test_mixed() {
        let result = Parser::parse::<BTreeMap<String, Rc<JsonValue>>>(
            r#"{"prop1": 5, "prop2": true, "prop3": "test"}"#,
        );

        let expected = BTreeMap::from([
            ("prop1".to_string(), Rc::new(JsonValue::Number(5.0))),
            ("prop2".to_string(), Rc::new(JsonValue::Bool(true))),
            ("prop3".to_string(), Rc::new(JsonValue::String("test".to_string()))),
        ]);

        assert_eq!(Ok(expected), result);
    }

    #[test]
    fn test_keys_iterate_sorted() {
        let result = Parser::parse::<BTreeMap<String, f64>>(r#"{"zeta": 1, "alpha": 2, "mid": 3}"#)
            .expect("valid JSON");

        let keys: Vec<&str> = result.keys().map(String::as_str).collect();
        assert_eq!(vec!["alpha", "mid", "zeta"], keys);
    }

    #[test]
    fn test_prop_no_quotes() {
        let result = Parser::parse::<BTreeMap<String, JsonValue>>(r#"{prop: 5}"#);
        assert_eq!(
            Err(ParserErr {
                kind: ParserErrKind::ExpectedChar('"'),
                line: 1,
                column: 2,
                position: 1,
            }),
            result
        );
    }

    #[test]
    fn test_no_trailing_comma() {
        let result =
            Parser::parse::<BTreeMap<String, JsonValue>>(r#"{"prop1": 5, "prop2": true,}"#);
        assert_eq!(
            Err(ParserErr {
                kind: ParserErrKind::ExpectedChar('"'),
                line: 1,
                column: 28,
                position: 27,
            }),
            result
        );
    }

    #[test]
    fn test_missing_colon() {
        let result = Parser::parse::<BTreeMap<String, JsonValue>>(r#"{"prop" 5}"#);
        assert_eq!(
            Err(ParserErr {
                kind: ParserErrKind::ExpectedChar(':'),
                line: 1,
                column: 9,
                position: 8,
            }),
            result
        );
    }

    #[test]
    fn test_wrong_member_type() {
        let result = Parser::parse::<BTreeMap<String, f64>>(r#"{"a": 1, "b": "two"}"#);
        assert_eq!(
            Err(ParserErrKind::ExpectedKind(JsonKind::Number)),
            result.map_err(|x| x.kind)
        );
    }

    #[test]
    fn test_not_an_object() {
        let result = Parser::parse::<BTreeMap<String, f64>>("[1]");
        assert_eq!(
            Err(ParserErrKind::ExpectedKind(JsonKind::Object)),
            result.map_err(|x| x.kind)
        );
    }

    #[test]
    fn test_depth_limit() {
        let options = ParseOptions::default().with_max_depth(2);

        let ok = Parser::parse_with_options::<JsonValue>(r#"{"a": {"b": 1}}"#, &options);
        assert!(ok.is_ok());

        let result = Parser::parse_with_options::<JsonValue>(r#"{"a": {"b": {}}}"#, &options);
        assert_eq!(
            Err(ParserErrKind::NestingTooDeep(2)),
            result.map_err(|x| x.kind)
        );
    }
}
