//! Configuration options.

pub mod options;
pub use options::{NormalizeOptions, ReadOptions};
