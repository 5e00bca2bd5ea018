//! Source dialect AST
//!
//! This is the tree the parser builds: calls carry their name as a bare string
//! and their operands as `params`.
//!
//! ```text
//! (add 2 (subtract 4 2))
//!
//! Program
//! └─ CallExpression add
//!    ├─ NumberLiteral 2
//!    └─ CallExpression subtract
//!       ├─ NumberLiteral 4
//!       └─ NumberLiteral 2
//! ```
//!
//! `Display` writes the canonical source text for a tree, which lexes and
//! parses back to the same tree as long as it holds no string literals.

use super::literals::{NumberLiteral, StringLiteral};
use super::traits::AstNode;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged, from = "TaggedNode")]
pub enum Node {
    Program(Program),
    CallExpression(CallExpression),
    NumberLiteral(NumberLiteral),
    StringLiteral(StringLiteral),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", try_from = "TaggedNode")]
pub struct Program {
    pub body: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", try_from = "TaggedNode")]
pub struct CallExpression {
    pub name: String,
    pub params: Vec<Node>,
}

/// Wire form of a node. The `type` field selects the kind, and unknown kinds
/// are rejected.
#[derive(Deserialize)]
#[serde(tag = "type")]
enum TaggedNode {
    Program { body: Vec<Node> },
    CallExpression { name: String, params: Vec<Node> },
    NumberLiteral { value: String },
    StringLiteral { value: String },
}

impl From<TaggedNode> for Node {
    fn from(node: TaggedNode) -> Self {
        match node {
            TaggedNode::Program { body } => Node::Program(Program { body }),
            TaggedNode::CallExpression { name, params } => {
                Node::CallExpression(CallExpression { name, params })
            }
            TaggedNode::NumberLiteral { value } => Node::number(value),
            TaggedNode::StringLiteral { value } => Node::string(value),
        }
    }
}

impl TryFrom<TaggedNode> for Program {
    type Error = String;

    fn try_from(node: TaggedNode) -> Result<Self, Self::Error> {
        match Node::from(node) {
            Node::Program(program) => Ok(program),
            other => Err(format!("expected Program, found {}", other.node_type())),
        }
    }
}

impl TryFrom<TaggedNode> for CallExpression {
    type Error = String;

    fn try_from(node: TaggedNode) -> Result<Self, Self::Error> {
        match Node::from(node) {
            Node::CallExpression(call) => Ok(call),
            other => Err(format!(
                "expected CallExpression, found {}",
                other.node_type()
            )),
        }
    }
}

impl Program {
    pub fn new(body: Vec<Node>) -> Self {
        Program { body }
    }
}

impl CallExpression {
    pub fn new(name: impl Into<String>, params: Vec<Node>) -> Self {
        CallExpression {
            name: name.into(),
            params,
        }
    }
}

impl Node {
    pub fn call(name: impl Into<String>, params: Vec<Node>) -> Self {
        Node::CallExpression(CallExpression::new(name, params))
    }

    pub fn number(value: impl Into<String>) -> Self {
        Node::NumberLiteral(NumberLiteral::new(value))
    }

    pub fn string(value: impl Into<String>) -> Self {
        Node::StringLiteral(StringLiteral::new(value))
    }

    /// Child nodes in order: a program's body or a call's params.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Program(program) => &program.body,
            Node::CallExpression(call) => &call.params,
            Node::NumberLiteral(_) | Node::StringLiteral(_) => &[],
        }
    }
}

impl AstNode for Program {
    fn node_type(&self) -> &'static str {
        "Program"
    }

    fn display_label(&self) -> String {
        format!("{} expression(s)", self.body.len())
    }
}

impl AstNode for CallExpression {
    fn node_type(&self) -> &'static str {
        "CallExpression"
    }

    fn display_label(&self) -> String {
        self.name.clone()
    }
}

impl AstNode for Node {
    fn node_type(&self) -> &'static str {
        match self {
            Node::Program(program) => program.node_type(),
            Node::CallExpression(call) => call.node_type(),
            Node::NumberLiteral(literal) => literal.node_type(),
            Node::StringLiteral(literal) => literal.node_type(),
        }
    }

    fn display_label(&self) -> String {
        match self {
            Node::Program(program) => program.display_label(),
            Node::CallExpression(call) => call.display_label(),
            Node::NumberLiteral(literal) => literal.display_label(),
            Node::StringLiteral(literal) => literal.display_label(),
        }
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, node) in self.body.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{node}")?;
        }
        Ok(())
    }
}

impl fmt::Display for CallExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}", self.name)?;
        for param in &self.params {
            write!(f, " {param}")?;
        }
        write!(f, ")")
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Program(program) => write!(f, "{program}"),
            Node::CallExpression(call) => write!(f, "{call}"),
            Node::NumberLiteral(literal) => write!(f, "{}", literal.value),
            Node::StringLiteral(literal) => write!(f, "{:?}", literal.value),
        }
    }
}
