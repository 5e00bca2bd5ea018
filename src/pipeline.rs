//! Compiler pipeline
//!
//! Runs lexer, parser, transformer and code generator in order. Each stage
//! fully consumes its input before the next begins; the first failure stops
//! the run and is returned tagged with its stage.

use crate::ast::{source, target};
use crate::codegen::CodeGenerator;
use crate::config::CompilerConfig;
use crate::error::CompileError;
use crate::lexer::{tokenize_with_policy, Token};
use crate::parser::parse_with_max_depth;
use crate::transformer::transform;

/// Runs the four stages under one configuration.
///
/// Holds no per-run state, so a single compiler may be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct Compiler {
    config: CompilerConfig,
}

impl Compiler {
    pub fn new(config: CompilerConfig) -> Self {
        Compiler { config }
    }

    pub fn config(&self) -> &CompilerConfig {
        &self.config
    }

    pub fn tokenize(&self, source: &str) -> Result<Vec<Token>, CompileError> {
        Ok(tokenize_with_policy(
            source,
            self.config.lexer.unknown_characters,
        )?)
    }

    /// Lex and parse into the source dialect
    pub fn parse(&self, source: &str) -> Result<source::Program, CompileError> {
        let tokens = self.tokenize(source)?;
        Ok(parse_with_max_depth(tokens, self.config.parser.max_depth)?)
    }

    /// Lex, parse and transform into the target dialect
    pub fn lower(&self, source: &str) -> Result<target::Program, CompileError> {
        Ok(transform(&self.parse(source)?)?)
    }

    pub fn compile(&self, source: &str) -> Result<String, CompileError> {
        let program = self.lower(source)?;
        let output = CodeGenerator::new(&self.config.codegen).generate_program(&program)?;
        tracing::debug!(
            source_len = source.len(),
            output_len = output.len(),
            "compiled source"
        );
        Ok(output)
    }
}
