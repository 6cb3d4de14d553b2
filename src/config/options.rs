//! Options for normalization and point-stream parsing.
//!
//! Plain structs with `Default`, passed by reference to the `*_with`
//! variants of the operations that consume them.

/// Magnitude at or below which `normalize` returns the zero vector.
pub const DEFAULT_NORMALIZE_TOL: f64 = 1e-5;

/// Normalization parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizeOptions {
    /// Vectors with magnitude `<= tolerance` normalize to zero.
    pub tolerance: f64,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self { tolerance: DEFAULT_NORMALIZE_TOL }
    }
}

/// Point-stream reader limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReadOptions {
    /// Reject streams that declare more points than this.
    pub max_points: Option<usize>,
}
