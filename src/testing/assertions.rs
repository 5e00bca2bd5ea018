//! Fluent assertion API for target tree nodes

use crate::ast::target::{CallExpression, Node, Program};
use crate::ast::AstNode;

// ============================================================================
// Entry Point
// ============================================================================

/// Create an assertion builder for a target program
pub fn assert_target(program: &Program) -> ProgramAssertion<'_> {
    ProgramAssertion { program }
}

// ============================================================================
// Program Assertions
// ============================================================================

pub struct ProgramAssertion<'a> {
    program: &'a Program,
}

impl<'a> ProgramAssertion<'a> {
    /// Assert the number of statements in the program body
    pub fn statement_count(self, expected: usize) -> Self {
        let actual = self.program.body.len();
        assert_eq!(
            actual,
            expected,
            "Expected {} statements, found {}: [{}]",
            expected,
            actual,
            summarize(&self.program.body)
        );
        self
    }

    /// Assert that body element `index` is an ExpressionStatement and run
    /// `assertion` on its inner call
    pub fn statement<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(CallAssertion<'a>),
    {
        assert!(
            index < self.program.body.len(),
            "Statement index {} out of bounds (program has {} statements)",
            index,
            self.program.body.len()
        );

        let context = format!("body[{}]", index);
        match &self.program.body[index] {
            Node::ExpressionStatement(statement) => assertion(CallAssertion {
                call: &statement.expression,
                context,
            }),
            other => panic!(
                "{}: Expected ExpressionStatement, found {} '{}'",
                context,
                other.node_type(),
                other.display_label()
            ),
        }
        self
    }
}

// ============================================================================
// Call Assertions
// ============================================================================

pub struct CallAssertion<'a> {
    call: &'a CallExpression,
    context: String,
}

impl<'a> CallAssertion<'a> {
    pub fn callee(self, expected: &str) -> Self {
        assert_eq!(
            self.call.callee.name, expected,
            "{}: Expected callee '{}', found '{}'",
            self.context, expected, self.call.callee.name
        );
        self
    }

    pub fn argument_count(self, expected: usize) -> Self {
        let actual = self.call.arguments.len();
        assert_eq!(
            actual,
            expected,
            "{}: Expected {} arguments, found {}: [{}]",
            self.context,
            expected,
            actual,
            summarize(&self.call.arguments)
        );
        self
    }

    pub fn argument<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>),
    {
        assert!(
            index < self.call.arguments.len(),
            "{}: Argument index {} out of bounds (call '{}' has {} arguments)",
            self.context,
            index,
            self.call.callee.name,
            self.call.arguments.len()
        );

        assertion(NodeAssertion {
            node: &self.call.arguments[index],
            context: format!("{}.arguments[{}]", self.context, index),
        });
        self
    }
}

// ============================================================================
// Node Assertions
// ============================================================================

pub struct NodeAssertion<'a> {
    node: &'a Node,
    context: String,
}

impl<'a> NodeAssertion<'a> {
    /// Assert this node is a bare CallExpression (never a statement wrapper)
    pub fn assert_call(self) -> CallAssertion<'a> {
        match self.node {
            Node::CallExpression(call) => CallAssertion {
                call,
                context: self.context,
            },
            other => panic!(
                "{}: Expected CallExpression, found {} '{}'",
                self.context,
                other.node_type(),
                other.display_label()
            ),
        }
    }

    pub fn assert_number(self, expected: &str) {
        match self.node {
            Node::NumberLiteral(literal) => assert_eq!(
                literal.value, expected,
                "{}: Expected number '{}', found '{}'",
                self.context, expected, literal.value
            ),
            other => panic!(
                "{}: Expected NumberLiteral, found {} '{}'",
                self.context,
                other.node_type(),
                other.display_label()
            ),
        }
    }

    pub fn assert_string(self, expected: &str) {
        match self.node {
            Node::StringLiteral(literal) => assert_eq!(
                literal.value, expected,
                "{}: Expected string {:?}, found {:?}",
                self.context, expected, literal.value
            ),
            other => panic!(
                "{}: Expected StringLiteral, found {} '{}'",
                self.context,
                other.node_type(),
                other.display_label()
            ),
        }
    }
}

fn summarize(nodes: &[Node]) -> String {
    nodes
        .iter()
        .map(|node| format!("{}({})", node.node_type(), node.display_label()))
        .collect::<Vec<_>>()
        .join(", ")
}
