//! Output format implementations for tree inspection
//!
//! - [treeviz] - box-drawing tree views of either dialect

pub mod treeviz;

pub use treeviz::{source_to_treeviz_str, target_to_treeviz_str};
