//! Command implementations
//!
//! Each submodule exposes an `execute` function that takes already-parsed
//! arguments plus the output (and, for browse, input) traits it needs.

pub mod browse;
pub mod labels;
pub mod search;
pub mod vocab;
