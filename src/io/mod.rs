//! Input parsing for point data.

pub mod reader;
pub use reader::{read_points, read_points_with, read_row};
