mod assignment;
mod coloring_result;
mod trail;

pub use assignment::Assignment;
pub use coloring_result::ColoringResult;
pub(crate) use trail::Trail;

/// A color is an integer in the range `[1, num_colors]`.
pub type Color = u32;
