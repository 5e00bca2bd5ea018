//! Token definitions
//!
//! Tokens are defined using the logos derive macro. Whitespace is skipped by
//! the lexer itself and never produces a token.
use logos::Logos;
use serde::{Deserialize, Serialize};
use std::fmt;

/// All possible tokens in the source language
#[derive(Logos, Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
#[logos(skip r"\s+")]
pub enum Token {
    #[token("(", |_| '(')]
    #[token(")", |_| ')')]
    Paren(char),

    #[regex("[a-z]+", |lex| lex.slice().to_owned())]
    Name(String),

    // Kept as text so leading zeros and long runs survive unchanged
    #[regex("[0-9]+", |lex| lex.slice().to_owned())]
    Number(String),
}

impl Token {
    pub fn is_open_paren(&self) -> bool {
        matches!(self, Token::Paren('('))
    }

    pub fn is_close_paren(&self) -> bool {
        matches!(self, Token::Paren(')'))
    }

    pub fn is_name(&self) -> bool {
        matches!(self, Token::Name(_))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Paren(c) => write!(f, "<paren:{c}>"),
            Token::Name(text) => write!(f, "<name:{text}>"),
            Token::Number(text) => write!(f, "<number:{text}>"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parens() {
        let mut lexer = Token::lexer("()");
        assert_eq!(lexer.next(), Some(Ok(Token::Paren('('))));
        assert_eq!(lexer.next(), Some(Ok(Token::Paren(')'))));
        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn test_name_is_maximal_run() {
        let mut lexer = Token::lexer("subtract");
        assert_eq!(lexer.next(), Some(Ok(Token::Name("subtract".to_string()))));
        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn test_number_keeps_leading_zeros() {
        let mut lexer = Token::lexer("007");
        assert_eq!(lexer.next(), Some(Ok(Token::Number("007".to_string()))));
        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn test_whitespace_is_skipped() {
        let mut lexer = Token::lexer(" \t\n add \r\n");
        assert_eq!(lexer.next(), Some(Ok(Token::Name("add".to_string()))));
        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn test_letters_and_digits_split() {
        let mut lexer = Token::lexer("abc123def");
        assert_eq!(lexer.next(), Some(Ok(Token::Name("abc".to_string()))));
        assert_eq!(lexer.next(), Some(Ok(Token::Number("123".to_string()))));
        assert_eq!(lexer.next(), Some(Ok(Token::Name("def".to_string()))));
        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn test_unknown_character_is_an_error() {
        let mut lexer = Token::lexer("#");
        assert_eq!(lexer.next(), Some(Err(())));
        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn test_token_predicates() {
        assert!(Token::Paren('(').is_open_paren());
        assert!(!Token::Paren(')').is_open_paren());
        assert!(Token::Paren(')').is_close_paren());
        assert!(Token::Name("add".to_string()).is_name());
        assert!(!Token::Number("1".to_string()).is_name());
    }

    #[test]
    fn test_token_display() {
        assert_eq!(Token::Paren('(').to_string(), "<paren:(>");
        assert_eq!(Token::Name("add".to_string()).to_string(), "<name:add>");
        assert_eq!(Token::Number("42".to_string()).to_string(), "<number:42>");
    }
}
