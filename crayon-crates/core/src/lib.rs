//! # Crayon
//! Crayon is a solver for the graph coloring problem: given an undirected graph and a number of
//! colors `k`, find an assignment of a color in `[1, k]` to every vertex such that no edge
//! connects two vertices of the same color, or prove that no such assignment exists.
//!
//! The problem is treated as a constraint satisfaction problem with one variable per vertex and an
//! inequality constraint per edge. The [`ColoringSolver`] performs a complete backtracking search
//! which maintains arc consistency (AC-3) after every decision. The order of the search is
//! determined by a [`VariableSelector`][branching::VariableSelector] (by default the minimum
//! remaining values heuristic) and a [`ValueSelector`][branching::ValueSelector] (by default the
//! least constraining value heuristic).
//!
//! # Solving
//! A graph is built using a [`ConstraintGraph`][graph::ConstraintGraph], after which it can be
//! solved with [`solve`]; the found coloring can be checked independently with [`validate`].
//! ```rust
//! # use crayon_core::graph::ConstraintGraph;
//! # use crayon_core::ColoringResult;
//! let mut graph = ConstraintGraph::default();
//! let wa = graph.add_vertex("WA");
//! let nt = graph.add_vertex("NT");
//! let sa = graph.add_vertex("SA");
//! let _ = graph.add_edge(wa, nt);
//! let _ = graph.add_edge(wa, sa);
//! let _ = graph.add_edge(nt, sa);
//!
//! match crayon_core::solve(&graph, 3) {
//!     ColoringResult::Colorable(coloring) => {
//!         assert!(crayon_core::validate(&coloring, &graph, 3));
//!     }
//!     ColoringResult::Uncolorable => panic!("a triangle can be colored with three colors"),
//! }
//!
//! assert_eq!(crayon_core::solve(&graph, 2), ColoringResult::Uncolorable);
//! ```
//!
//! A [`ColoringSolver`] can be configured through [`SolverOptions`], and keeps the statistics of
//! its last solve.
pub mod asserts;
pub mod basic_types;
pub mod branching;
pub mod checking;
pub mod containers;
pub mod engine;
pub mod graph;
pub mod propagation;
pub mod statistics;

pub use basic_types::Assignment;
pub use basic_types::Color;
pub use basic_types::ColoringResult;
pub use checking::validate;
pub use convert_case;
pub use engine::ColoringSolver;
pub use engine::SolverOptions;

use crate::graph::ConstraintGraph;

/// Searches for a coloring of `graph` with `num_colors` colors using the default
/// [`SolverOptions`].
pub fn solve(graph: &ConstraintGraph, num_colors: u32) -> ColoringResult {
    ColoringSolver::default().solve(graph, num_colors)
}
