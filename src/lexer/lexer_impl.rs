//! Implementation of the lexer
//!
//! This module provides convenience functions for tokenizing source text.
//! The actual tokenization is handled entirely by logos.

use crate::config::UnknownCharacterPolicy;
use crate::error::LexError;
use crate::lexer::tokens::Token;
use logos::Logos;

/// Tokenize a string, silently dropping characters outside the alphabet
pub fn tokenize(source: &str) -> Vec<Token> {
    Token::lexer(source)
        .filter_map(|result| result.ok())
        .collect()
}

/// Tokenize a string, handling unknown characters according to `policy`
pub fn tokenize_with_policy(
    source: &str,
    policy: UnknownCharacterPolicy,
) -> Result<Vec<Token>, LexError> {
    let tokens = tokenize_with_spans(source, policy)?
        .into_iter()
        .map(|(token, _)| token)
        .collect::<Vec<_>>();
    tracing::debug!(token_count = tokens.len(), ?policy, "tokenized source");
    Ok(tokens)
}

/// Tokenize a string and collect tokens with their byte spans
pub fn tokenize_with_spans(
    source: &str,
    policy: UnknownCharacterPolicy,
) -> Result<Vec<(Token, logos::Span)>, LexError> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        match result {
            Ok(token) => tokens.push((token, lexer.span())),
            Err(()) => {
                let character = lexer.slice().chars().next().unwrap_or_default();
                match policy {
                    UnknownCharacterPolicy::Skip => {
                        tracing::trace!(?character, span = ?lexer.span(), "skipping unknown character");
                    }
                    UnknownCharacterPolicy::Reject => {
                        return Err(LexError::UnrecognizedCharacter { character });
                    }
                }
            }
        }
    }

    Ok(tokens)
}
