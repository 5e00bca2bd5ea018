//! Owned cursor over a token sequence

use crate::lexer::Token;
use std::iter::Peekable;
use std::vec::IntoIter;

/// Cursor that owns the tokens and hands them out one at a time.
///
/// Tokens are moved out as they are consumed, so nothing is retained once
/// parsing finishes.
#[derive(Debug)]
pub struct TokenCursor {
    tokens: Peekable<IntoIter<Token>>,
    consumed: usize,
}

impl TokenCursor {
    pub fn new(tokens: Vec<Token>) -> Self {
        TokenCursor {
            tokens: tokens.into_iter().peekable(),
            consumed: 0,
        }
    }

    /// Current token, if any, without consuming it
    pub fn peek(&mut self) -> Option<&Token> {
        self.tokens.peek()
    }

    /// Consume and return the current token
    pub fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.next();
        if token.is_some() {
            self.consumed += 1;
        }
        token
    }

    pub fn is_exhausted(&mut self) -> bool {
        self.tokens.peek().is_none()
    }

    /// Number of tokens consumed so far
    pub fn consumed(&self) -> usize {
        self.consumed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peek_does_not_consume() {
        let mut cursor = TokenCursor::new(vec![Token::Paren('(')]);
        assert_eq!(cursor.peek(), Some(&Token::Paren('(')));
        assert_eq!(cursor.peek(), Some(&Token::Paren('(')));
        assert_eq!(cursor.consumed(), 0);
    }

    #[test]
    fn test_advance_past_end() {
        let mut cursor = TokenCursor::new(vec![Token::Name("add".to_string())]);
        assert_eq!(cursor.advance(), Some(Token::Name("add".to_string())));
        assert!(cursor.is_exhausted());
        assert_eq!(cursor.advance(), None);
        assert_eq!(cursor.consumed(), 1);
    }
}
