//! # Crayon
//! The Crayon graph coloring solver. The search itself lives in [`crayon_core`], which is
//! re-exported as [`core`]; this crate adds the [edge-list][parsers::edge_list] file format and the
//! `crayon-solver` executable.
//!
//! ```rust
//! # use crayon_solver::core::ColoringResult;
//! # use crayon_solver::parsers::edge_list::parse_edge_list;
//! let instance = parse_edge_list(
//!     "colors = 2
//!      A, B
//!      B, C"
//!         .as_bytes(),
//! )
//! .expect("valid instance");
//!
//! let num_colors = instance.num_colors.expect("the instance declares its colors");
//! let result = crayon_solver::core::solve(&instance.graph, num_colors);
//! assert!(result.is_colorable());
//! ```
pub use crayon_core as core;

pub mod parsers;
