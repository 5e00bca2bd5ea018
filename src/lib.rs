//! # parenc
//!
//! A compiler for a parenthesized prefix call language.
//!
//! ```text
//!   (add 2 2)                 add(2, 2)
//!   (subtract 4 2)            subtract(4, 2)
//!   (add 2 (subtract 4 2))    add(2, subtract(4, 2))
//! ```
//!
//! The pipeline runs four stages, each consuming the previous stage's output:
//!
//! 1. [lexer] - source text to tokens
//! 2. [parser] - tokens to the source dialect AST
//! 3. [transformer] - source dialect AST to the target dialect AST
//! 4. [codegen] - target dialect AST to text
//!
//! [compile] runs all of them with the default configuration. Use
//! [pipeline::Compiler] to run them under a loaded [config::CompilerConfig].
//!
//! ## Testing
//!
//! The [testing] module provides fluent assertions over target trees.

pub mod ast;
pub mod codegen;
pub mod config;
pub mod error;
pub mod formats;
pub mod lexer;
pub mod parser;
pub mod pipeline;
pub mod processor;
pub mod testing;
pub mod transformer;

pub use codegen::{generate, generate_program, CodeGenerator};
pub use config::{CompilerConfig, StringLiteralPolicy, UnknownCharacterPolicy};
pub use error::{CompileError, GenerateError, LexError, ParseError, Stage, TransformError};
pub use lexer::{tokenize, tokenize_with_policy, tokenize_with_spans, Token};
pub use parser::{parse, parse_with_max_depth};
pub use pipeline::Compiler;
pub use transformer::{transform, traverse};

/// Compile source text to target syntax with the default configuration.
pub fn compile(source: &str) -> Result<String, CompileError> {
    Compiler::default().compile(source)
}
