//! Code generator for the target dialect
//!
//! Renders a target tree as comma-call text:
//!
//! ```text
//! Program               statements joined by the statement separator ("\n")
//! ExpressionStatement   its call
//! CallExpression        callee(arg1, arg2, ...)
//! Identifier            its name
//! NumberLiteral         its digits, verbatim
//! StringLiteral         rejected, or quoted when configured
//! ```
//!
//! Rendering is pure: every node produces its own string and callers join
//! them, so there is no shared output buffer.

use crate::ast::target::{CallExpression, Node, Program};
use crate::ast::StringLiteral;
use crate::config::{CodegenConfig, StringLiteralPolicy};
use crate::error::GenerateError;

/// Render any target node with the default configuration
pub fn generate(node: &Node) -> Result<String, GenerateError> {
    let config = CodegenConfig::default();
    CodeGenerator::new(&config).generate(node)
}

/// Render a target program with the default configuration
pub fn generate_program(program: &Program) -> Result<String, GenerateError> {
    let config = CodegenConfig::default();
    CodeGenerator::new(&config).generate_program(program)
}

pub struct CodeGenerator<'a> {
    config: &'a CodegenConfig,
}

impl<'a> CodeGenerator<'a> {
    pub fn new(config: &'a CodegenConfig) -> Self {
        CodeGenerator { config }
    }

    pub fn generate(&self, node: &Node) -> Result<String, GenerateError> {
        match node {
            Node::Program(program) => self.generate_program(program),
            Node::ExpressionStatement(statement) => self.generate_call(&statement.expression),
            Node::CallExpression(call) => self.generate_call(call),
            Node::Identifier(identifier) => Ok(identifier.name.clone()),
            Node::NumberLiteral(literal) => Ok(literal.value.clone()),
            Node::StringLiteral(literal) => self.generate_string(literal),
        }
    }

    pub fn generate_program(&self, program: &Program) -> Result<String, GenerateError> {
        let statements = program
            .body
            .iter()
            .map(|node| self.generate(node))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(statements.join(&self.config.statement_separator))
    }

    fn generate_call(&self, call: &CallExpression) -> Result<String, GenerateError> {
        let arguments = call
            .arguments
            .iter()
            .map(|node| self.generate(node))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(format!(
            "{}({})",
            call.callee.name,
            arguments.join(&self.config.argument_separator)
        ))
    }

    fn generate_string(&self, literal: &StringLiteral) -> Result<String, GenerateError> {
        match self.config.string_literals {
            StringLiteralPolicy::Reject => Err(GenerateError::UnsupportedNodeKind {
                kind: "StringLiteral",
            }),
            StringLiteralPolicy::Quote => serde_json::to_string(&literal.value)
                .map_err(|e| GenerateError::StringEscape(e.to_string())),
        }
    }
}
