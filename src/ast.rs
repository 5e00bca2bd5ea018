//! AST definitions for both dialects
//!
//! The compiler works with two distinct trees:
//!
//! - [source] - the bare-name call tree produced by the parser
//! - [target] - the identifier/callee tree with statement wrappers, produced
//!   by the transformer and rendered by the code generator
//!
//! Literal leaves have the same shape in both dialects and are shared.
//!
//! Every node struct serializes with a `"type"` field naming its kind, e.g.
//! `{"type": "NumberLiteral", "value": "2"}`.

pub mod literals;
pub mod source;
pub mod target;
pub mod traits;

pub use literals::{NumberLiteral, StringLiteral};
pub use traits::AstNode;
