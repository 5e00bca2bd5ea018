//! Testing utilities for target tree assertions
//!
//! This module provides a fluent API for asserting on target trees, which keeps
//! transformer and pipeline tests readable.
//!
//! # Example
//!
//! ```rust,ignore
//! use parenc::testing::assert_target;
//!
//! let program = transform(&parse(tokenize("(add 2 (neg 1))"))?)?;
//!
//! assert_target(&program)
//!     .statement_count(1)
//!     .statement(0, |call| {
//!         call.callee("add")
//!             .argument_count(2)
//!             .argument(0, |arg| {
//!                 arg.assert_number("2");
//!             });
//!     });
//! ```

mod assertions;

pub use assertions::{assert_target, CallAssertion, NodeAssertion, ProgramAssertion};
