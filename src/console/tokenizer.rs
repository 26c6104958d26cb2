//! Command line tokenizer
//!
//! Splits on single spaces. Consecutive spaces produce empty tokens, and an
//! exhausted line keeps yielding `""`.

/// Take the next token off the front of `remainder`.
///
/// The token is everything before the first `' '`; `remainder` is advanced
/// past it and the separator. Without a space the whole remainder is
/// returned and `remainder` is left empty.
pub fn next_token<'a>(remainder: &mut &'a str) -> &'a str {
    match remainder.find(' ') {
        Some(idx) => {
            let token = &remainder[..idx];
            *remainder = &remainder[idx + 1..];
            token
        }
        None => {
            let token = *remainder;
            *remainder = &remainder[remainder.len()..];
            token
        }
    }
}

/// Token cursor over one command line
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    rest: &'a str,
}

impl<'a> Tokens<'a> {
    pub const fn new(line: &'a str) -> Self {
        Self { rest: line }
    }

    /// Next token, `""` once the line is used up
    pub fn next_token(&mut self) -> &'a str {
        next_token(&mut self.rest)
    }

    /// Next token, or `None` if it is empty
    pub fn next_arg(&mut self) -> Option<&'a str> {
        let token = self.next_token();
        if token.is_empty() {
            None
        } else {
            Some(token)
        }
    }

    /// Unconsumed part of the line
    pub fn rest(&self) -> &'a str {
        self.rest
    }

    pub fn is_exhausted(&self) -> bool {
        self.rest.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_first_space() {
        let mut rest = "direction 4 out";
        assert_eq!(next_token(&mut rest), "direction");
        assert_eq!(rest, "4 out");
    }

    #[test]
    fn test_no_space_consumes_all() {
        let mut rest = "status";
        assert_eq!(next_token(&mut rest), "status");
        assert_eq!(rest, "");
        assert_eq!(next_token(&mut rest), "");
    }

    #[test]
    fn test_double_space_yields_empty_token() {
        let mut tokens = Tokens::new("set  5");
        assert_eq!(tokens.next_token(), "set");
        assert_eq!(tokens.next_arg(), None);
        assert_eq!(tokens.next_token(), "5");
        assert!(tokens.is_exhausted());
    }

    #[test]
    fn test_trailing_space() {
        let mut tokens = Tokens::new("read ");
        assert_eq!(tokens.next_token(), "read");
        assert!(tokens.is_exhausted());
        assert_eq!(tokens.next_token(), "");
    }
}
