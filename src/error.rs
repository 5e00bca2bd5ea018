//! Error types for every pipeline stage
//!
//! Each stage fails fast with its own error enum. [CompileError] wraps them and
//! records which stage produced the failure.

use crate::lexer::Token;
use std::fmt;

/// Errors raised while scanning source text.
///
/// Only produced under [UnknownCharacterPolicy::Reject](crate::config::UnknownCharacterPolicy::Reject);
/// the permissive policy skips characters outside the alphabet.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    #[error("unrecognized character {character:?}")]
    UnrecognizedCharacter { character: char },
}

/// Errors raised while building the source tree from tokens.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// An expression was expected but the token sequence was exhausted.
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,

    /// A call never reached its closing parenthesis.
    #[error("call `{name}` is missing its closing parenthesis")]
    UnterminatedCall { name: String },

    /// The token after `(` was not a name.
    #[error("expected a call name after `(`, found {found}")]
    MalformedCallHead { found: Token },

    /// A token that cannot start an expression.
    #[error("unexpected token {found}")]
    UnexpectedToken { found: Token },

    /// Calls are nested deeper than the configured maximum.
    #[error("calls nested deeper than {limit} levels")]
    NestingTooDeep { limit: usize },
}

/// Errors raised while rewriting the source tree into the target tree.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransformError {
    #[error("a Program node may only appear at the root of the tree")]
    NestedProgram,
}

/// Errors raised while rendering the target tree.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerateError {
    #[error("cannot generate code for {kind} nodes")]
    UnsupportedNodeKind { kind: &'static str },

    #[error("failed to escape string literal: {0}")]
    StringEscape(String),
}

/// Pipeline stage that produced a [CompileError].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Lex,
    Parse,
    Transform,
    Generate,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Lex => "lexer",
            Stage::Parse => "parser",
            Stage::Transform => "transformer",
            Stage::Generate => "code generator",
        };
        write!(f, "{name}")
    }
}

/// First error encountered by [compile](crate::compile), tagged with its stage.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompileError {
    #[error("lexer: {0}")]
    Lex(#[from] LexError),

    #[error("parser: {0}")]
    Parse(#[from] ParseError),

    #[error("transformer: {0}")]
    Transform(#[from] TransformError),

    #[error("code generator: {0}")]
    Generate(#[from] GenerateError),
}

impl CompileError {
    pub fn stage(&self) -> Stage {
        match self {
            CompileError::Lex(_) => Stage::Lex,
            CompileError::Parse(_) => Stage::Parse,
            CompileError::Transform(_) => Stage::Transform,
            CompileError::Generate(_) => Stage::Generate,
        }
    }
}
