//! Parser module
//!
//! A recursive-descent parser over an explicit [TokenCursor]. There is a single
//! production family, "read one expression":
//!
//! ```text
//! program    := expression*
//! expression := NUMBER | '(' NAME expression* ')'
//! ```
//!
//! The cursor checks bounds before every read, so unbalanced input surfaces as
//! [ParseError](crate::error::ParseError) instead of a truncated tree.

pub mod cursor;
#[allow(clippy::module_inception)]
pub mod parser;

pub use cursor::TokenCursor;
pub use parser::{parse, parse_with_max_depth, Parser, DEFAULT_MAX_DEPTH};
