//! Lexer for the parenthesized call language
//!
//! Tokenization is handled by logos (see [tokens]). The alphabet is small:
//! parentheses, runs of lowercase letters, runs of digits, and whitespace,
//! which is skipped.
//!
//! Unknown Characters
//!
//!     Anything outside the alphabet is dropped by [tokenize]. This is the
//!     permissive policy. [tokenize_with_policy] can instead fail on the first
//!     such character, which is what `lexer.unknown_characters = "reject"`
//!     selects in the configuration.

pub mod lexer_impl;
pub mod tokens;

pub use lexer_impl::{tokenize, tokenize_with_policy, tokenize_with_spans};
pub use tokens::Token;
