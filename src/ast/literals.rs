//! Literal leaves shared by the source and target dialects
//!
//! Only serialized directly. Reading them back goes through a dialect's
//! `Node`, whose `type` field decides which literal is built.

use super::traits::AstNode;
use serde::Serialize;

/// A run of digits, kept as written
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub struct NumberLiteral {
    pub value: String,
}

impl NumberLiteral {
    pub fn new(value: impl Into<String>) -> Self {
        NumberLiteral {
            value: value.into(),
        }
    }
}

impl AstNode for NumberLiteral {
    fn node_type(&self) -> &'static str {
        "NumberLiteral"
    }

    fn display_label(&self) -> String {
        self.value.clone()
    }
}

/// A string value. The lexer never produces one; trees built by hand may.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub struct StringLiteral {
    pub value: String,
}

impl StringLiteral {
    pub fn new(value: impl Into<String>) -> Self {
        StringLiteral {
            value: value.into(),
        }
    }
}

impl AstNode for StringLiteral {
    fn node_type(&self) -> &'static str {
        "StringLiteral"
    }

    fn display_label(&self) -> String {
        format!("{:?}", self.value)
    }
}
