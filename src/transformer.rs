//! Transformer from the source dialect to the target dialect
//!
//! ```text
//! ----------------------------------------------------------------------------
//!   Source AST                       |   Target AST
//! ----------------------------------------------------------------------------
//!   Program                          |   Program
//!     CallExpression add             |     ExpressionStatement
//!       NumberLiteral 2              |       CallExpression
//!       CallExpression subtract      |         callee: Identifier add
//!         NumberLiteral 4            |         arguments:
//!         NumberLiteral 2            |           NumberLiteral 2
//!                                    |           CallExpression
//!                                    |             callee: Identifier subtract
//!                                    |             arguments:
//!                                    |               NumberLiteral 4
//!                                    |               NumberLiteral 2
//! ----------------------------------------------------------------------------
//! ```
//!
//! The walk itself lives in [traverser]; [CallRewriter] holds the rewrite
//! rules for this dialect pair.

pub mod traverser;

pub use traverser::{traverse, ContextScope, Parent, Visitor};

use crate::ast::source;
use crate::ast::target::{self, CallExpression, Identifier};
use crate::ast::{NumberLiteral, StringLiteral};
use crate::error::TransformError;

/// Rewrite a source program into a target program
pub fn transform(program: &source::Program) -> Result<target::Program, TransformError> {
    let result = traverse(program, &mut CallRewriter)?;
    tracing::debug!(statements = result.body.len(), "transformed program");
    Ok(result)
}

/// Rewrite rules for calls and literals.
///
/// Calls get an [Identifier] callee; calls directly under the program are
/// additionally wrapped in an [ExpressionStatement](target::ExpressionStatement).
/// Literals are copied as they are, wherever they sit.
#[derive(Debug, Clone, Copy, Default)]
pub struct CallRewriter;

/// Scope for a call under construction
#[derive(Debug)]
pub struct CallScope {
    call: CallExpression,
    statement: bool,
}

impl ContextScope for CallScope {
    fn context(&mut self) -> &mut Vec<target::Node> {
        // Children always land in the inner call, never in the statement wrapper
        &mut self.call.arguments
    }

    fn close(self) -> target::Node {
        if self.statement {
            target::Node::ExpressionStatement(self.call.into_statement())
        } else {
            target::Node::CallExpression(self.call)
        }
    }
}

impl Visitor for CallRewriter {
    type Scope = CallScope;

    fn enter_call(
        &mut self,
        call: &source::CallExpression,
        parent: Parent<'_>,
    ) -> Result<CallScope, TransformError> {
        Ok(CallScope {
            call: CallExpression {
                callee: Identifier::new(call.name.as_str()),
                arguments: Vec::with_capacity(call.params.len()),
            },
            statement: parent.is_program(),
        })
    }

    fn number_literal(
        &mut self,
        literal: &NumberLiteral,
        _parent: Parent<'_>,
    ) -> Result<target::Node, TransformError> {
        Ok(target::Node::NumberLiteral(literal.clone()))
    }

    fn string_literal(
        &mut self,
        literal: &StringLiteral,
        _parent: Parent<'_>,
    ) -> Result<target::Node, TransformError> {
        Ok(target::Node::StringLiteral(literal.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;
    use crate::parser::parse;
    use crate::testing::assert_target;

    fn transform_source(source: &str) -> Result<target::Program, TransformError> {
        let program = parse(tokenize(source)).unwrap();
        transform(&program)
    }

    #[test]
    fn test_nested_call() {
        let result = transform_source("(add 2 (subtract 4 2))").unwrap();
        assert_eq!(
            result,
            target::Program::new(vec![target::Node::statement(
                "add",
                vec![
                    target::Node::number("2"),
                    target::Node::call(
                        "subtract",
                        vec![target::Node::number("4"), target::Node::number("2")]
                    ),
                ],
            )])
        );
    }

    #[test]
    fn test_only_top_level_calls_are_wrapped() {
        let result = transform_source("(a (b (c)) (d))").unwrap();
        assert_target(&result).statement_count(1).statement(0, |call| {
            call.callee("a")
                .argument_count(2)
                .argument(0, |arg| {
                    arg.assert_call()
                        .callee("b")
                        .argument(0, |inner| {
                            inner.assert_call().callee("c").argument_count(0);
                        });
                })
                .argument(1, |arg| {
                    arg.assert_call().callee("d");
                });
        });
    }

    #[test]
    fn test_multiple_statements_keep_order() {
        let result = transform_source("(first 1) (second 2) (third 3)").unwrap();
        assert_target(&result)
            .statement_count(3)
            .statement(0, |call| {
                call.callee("first");
            })
            .statement(1, |call| {
                call.callee("second");
            })
            .statement(2, |call| {
                call.callee("third");
            });
    }

    #[test]
    fn test_argument_order_is_preserved() {
        let result = transform_source("(list 5 4 (x) 3 2 1)").unwrap();
        assert_target(&result).statement(0, |call| {
            call.argument_count(6)
                .argument(0, |arg| {
                    arg.assert_number("5");
                })
                .argument(2, |arg| {
                    arg.assert_call().callee("x");
                })
                .argument(5, |arg| {
                    arg.assert_number("1");
                });
        });
    }

    #[test]
    fn test_string_literals_are_copied() {
        let program = source::Program::new(vec![source::Node::call(
            "concat",
            vec![source::Node::string("a"), source::Node::number("1")],
        )]);
        let result = transform(&program).unwrap();
        assert_target(&result).statement(0, |call| {
            call.argument(0, |arg| {
                arg.assert_string("a");
            });
        });
    }

    #[test]
    fn test_top_level_literal_lands_in_program_body() {
        assert_eq!(
            transform_source("(add 1) 42").unwrap(),
            target::Program::new(vec![
                target::Node::statement("add", vec![target::Node::number("1")]),
                target::Node::number("42"),
            ])
        );

        let program = source::Program::new(vec![source::Node::string("loose")]);
        assert_eq!(
            transform(&program).unwrap(),
            target::Program::new(vec![target::Node::string("loose")])
        );
    }

    #[test]
    fn test_nested_program_is_rejected() {
        let program = source::Program::new(vec![source::Node::call(
            "wrap",
            vec![source::Node::Program(source::Program::default())],
        )]);
        assert_eq!(transform(&program), Err(TransformError::NestedProgram));
    }

    #[test]
    fn test_source_tree_is_untouched() {
        let program = parse(tokenize("(add 2 (subtract 4 2))")).unwrap();
        let before = program.clone();
        transform(&program).unwrap();
        assert_eq!(program, before);
    }
}
