//! Target dialect AST
//!
//! The transformer produces this tree and the code generator renders it.
//! Compared to the source dialect:
//!
//! - calls name their target through an [Identifier] callee
//! - operands live in `arguments`
//! - calls directly under the program are wrapped in an [ExpressionStatement]
//!
//! ```text
//! Program
//! └─ ExpressionStatement
//!    └─ CallExpression
//!       ├─ callee: Identifier add
//!       └─ arguments
//!          ├─ NumberLiteral 2
//!          └─ CallExpression ...
//! ```

use super::literals::{NumberLiteral, StringLiteral};
use super::traits::AstNode;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged, from = "TaggedNode")]
pub enum Node {
    Program(Program),
    ExpressionStatement(ExpressionStatement),
    CallExpression(CallExpression),
    Identifier(Identifier),
    NumberLiteral(NumberLiteral),
    StringLiteral(StringLiteral),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", try_from = "TaggedNode")]
pub struct Program {
    pub body: Vec<Node>,
}

/// A call used as a top-level statement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", try_from = "TaggedNode")]
pub struct ExpressionStatement {
    pub expression: CallExpression,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", try_from = "TaggedNode")]
pub struct CallExpression {
    pub callee: Identifier,
    pub arguments: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", try_from = "TaggedNode")]
pub struct Identifier {
    pub name: String,
}

/// Wire form of a node. The `type` field selects the kind, and unknown kinds
/// are rejected.
#[derive(Deserialize)]
#[serde(tag = "type")]
enum TaggedNode {
    Program { body: Vec<Node> },
    ExpressionStatement { expression: CallExpression },
    CallExpression { callee: Identifier, arguments: Vec<Node> },
    Identifier { name: String },
    NumberLiteral { value: String },
    StringLiteral { value: String },
}

impl From<TaggedNode> for Node {
    fn from(node: TaggedNode) -> Self {
        match node {
            TaggedNode::Program { body } => Node::Program(Program { body }),
            TaggedNode::ExpressionStatement { expression } => {
                Node::ExpressionStatement(ExpressionStatement { expression })
            }
            TaggedNode::CallExpression { callee, arguments } => {
                Node::CallExpression(CallExpression { callee, arguments })
            }
            TaggedNode::Identifier { name } => Node::Identifier(Identifier { name }),
            TaggedNode::NumberLiteral { value } => Node::number(value),
            TaggedNode::StringLiteral { value } => Node::string(value),
        }
    }
}

macro_rules! narrow_tagged_node {
    ($($kind:ident),*) => {$(
        impl TryFrom<TaggedNode> for $kind {
            type Error = String;

            fn try_from(node: TaggedNode) -> Result<Self, Self::Error> {
                match Node::from(node) {
                    Node::$kind(inner) => Ok(inner),
                    other => Err(format!(
                        concat!("expected ", stringify!($kind), ", found {}"),
                        other.node_type()
                    )),
                }
            }
        }
    )*};
}

narrow_tagged_node!(Program, ExpressionStatement, CallExpression, Identifier);

impl Program {
    pub fn new(body: Vec<Node>) -> Self {
        Program { body }
    }
}

impl CallExpression {
    pub fn new(callee: impl Into<String>, arguments: Vec<Node>) -> Self {
        CallExpression {
            callee: Identifier::new(callee),
            arguments,
        }
    }

    /// Wrap this call so it can stand directly under a [Program]
    pub fn into_statement(self) -> ExpressionStatement {
        ExpressionStatement { expression: self }
    }
}

impl Identifier {
    pub fn new(name: impl Into<String>) -> Self {
        Identifier { name: name.into() }
    }
}

impl Node {
    pub fn call(callee: impl Into<String>, arguments: Vec<Node>) -> Self {
        Node::CallExpression(CallExpression::new(callee, arguments))
    }

    pub fn statement(callee: impl Into<String>, arguments: Vec<Node>) -> Self {
        Node::ExpressionStatement(CallExpression::new(callee, arguments).into_statement())
    }

    pub fn number(value: impl Into<String>) -> Self {
        Node::NumberLiteral(NumberLiteral::new(value))
    }

    pub fn string(value: impl Into<String>) -> Self {
        Node::StringLiteral(StringLiteral::new(value))
    }
}

impl AstNode for Program {
    fn node_type(&self) -> &'static str {
        "Program"
    }

    fn display_label(&self) -> String {
        format!("{} statement(s)", self.body.len())
    }
}

impl AstNode for ExpressionStatement {
    fn node_type(&self) -> &'static str {
        "ExpressionStatement"
    }

    fn display_label(&self) -> String {
        self.expression.display_label()
    }
}

impl AstNode for CallExpression {
    fn node_type(&self) -> &'static str {
        "CallExpression"
    }

    fn display_label(&self) -> String {
        self.callee.name.clone()
    }
}

impl AstNode for Identifier {
    fn node_type(&self) -> &'static str {
        "Identifier"
    }

    fn display_label(&self) -> String {
        self.name.clone()
    }
}

impl AstNode for Node {
    fn node_type(&self) -> &'static str {
        match self {
            Node::Program(program) => program.node_type(),
            Node::ExpressionStatement(statement) => statement.node_type(),
            Node::CallExpression(call) => call.node_type(),
            Node::Identifier(identifier) => identifier.node_type(),
            Node::NumberLiteral(literal) => literal.node_type(),
            Node::StringLiteral(literal) => literal.node_type(),
        }
    }

    fn display_label(&self) -> String {
        match self {
            Node::Program(program) => program.display_label(),
            Node::ExpressionStatement(statement) => statement.display_label(),
            Node::CallExpression(call) => call.display_label(),
            Node::Identifier(identifier) => identifier.display_label(),
            Node::NumberLiteral(literal) => literal.display_label(),
            Node::StringLiteral(literal) => literal.display_label(),
        }
    }
}
