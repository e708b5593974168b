/// A point in the source text. `position` is a byte offset, `line` and `column` count from 1
/// (columns in chars).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub position: usize,
    pub line: usize,
    pub column: usize,
}

/// Forward-only cursor over the source text.
#[derive(Debug, Clone)]
pub(crate) struct Scanner<'a> {
    source: &'a str,
    current: usize,
    line: usize,
    column: usize,
}

impl<'a> Scanner<'a> {
    pub(crate) fn init(source: &'a str) -> Self {
        Self {
            source,
            current: 0,
            line: 1,
            column: 1,
        }
    }

    pub(crate) fn location(&self) -> Location {
        Location {
            position: self.current,
            line: self.line,
            column: self.column,
        }
    }

    pub(crate) fn position(&self) -> usize {
        self.current
    }

    pub(crate) fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.current]
    }

    pub(crate) fn rest(&self) -> &'a str {
        &self.source[self.current..]
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    pub(crate) fn peek(&self) -> Option<char> {
        self.source[self.current..].chars().next()
    }

    pub(crate) fn advance(&mut self) -> Option<char> {
        // A char such as an emoji may be more than 1 byte, so move past all of its bytes
        let c = self.peek()?;
        self.current += c.len_utf8();

        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        Some(c)
    }

    pub(crate) fn matches(&mut self, c: char) -> bool {
        if self.peek() == Some(c) {
            self.advance();
            return true;
        }

        false
    }

    /// Consume `literal` if the source continues with it. Literals never contain newlines.
    pub(crate) fn matches_literal(&mut self, literal: &str) -> bool {
        if self.source[self.current..].starts_with(literal) {
            self.current += literal.len();
            self.column += literal.chars().count();
            return true;
        }

        false
    }

    pub(crate) fn skip_digits(&mut self) -> usize {
        let mut count = 0;
        while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
            self.advance();
            count += 1;
        }

        count
    }

    pub(crate) fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(' ' | '\t' | '\r' | '\n')) {
            self.advance();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_multibyte() {
        let mut scanner = Scanner::init("é😄a");
        assert_eq!(Some('é'), scanner.advance());
        assert_eq!(Some('😄'), scanner.advance());
        assert_eq!(6, scanner.position());
        assert_eq!(Some('a'), scanner.advance());
        assert_eq!(None, scanner.advance());
        assert!(scanner.is_at_end());
        assert_eq!(4, scanner.location().column);
    }

    #[test]
    fn test_whitespace_tracks_lines() {
        let mut scanner = Scanner::init(" \t\r\n\n  x");
        scanner.skip_whitespace();

        assert_eq!(Some('x'), scanner.peek());
        assert_eq!(
            Location {
                position: 7,
                line: 3,
                column: 3
            },
            scanner.location()
        );
    }

    #[test]
    fn test_matches_literal() {
        let mut scanner = Scanner::init("nul null");
        assert!(!scanner.matches_literal("null"));
        assert!(scanner.matches_literal("nul"));
        assert!(scanner.matches(' '));
        assert!(scanner.matches_literal("null"));
        assert!(scanner.is_at_end());
    }

    #[test]
    fn test_skip_digits() {
        let mut scanner = Scanner::init("1234.5");
        assert_eq!(4, scanner.skip_digits());
        assert_eq!("1234", scanner.slice_from(0));
        assert_eq!(0, scanner.skip_digits());
        assert_eq!(Some('.'), scanner.peek());
    }
}
