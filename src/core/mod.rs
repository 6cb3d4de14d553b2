//! Core traits and third-party interop.

pub mod traits;
pub mod wrappers;
