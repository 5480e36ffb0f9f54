//! Tie-breaking between vertices which score equally during variable selection.
//!
//! A [`TieBreaker`] is fed vertices together with a score, and remembers the vertex with the best
//! score according to its [`Direction`]. When several vertices share the best score, the
//! tie-breaker decides which of them is returned; the [`InOrderTieBreaker`] keeps the one it saw
//! first, which makes the selection follow the order of the instance.
//!
//! ```rust
//! # use crayon_core::branching::tie_breaking::Direction;
//! # use crayon_core::branching::tie_breaking::InOrderTieBreaker;
//! # use crayon_core::branching::tie_breaking::TieBreaker;
//! # use crayon_core::graph::VertexId;
//! let mut breaker = InOrderTieBreaker::new(Direction::Minimum);
//!
//! // Vertices 1 and 2 both have two colors left; vertex 1 was seen first.
//! breaker.consider(VertexId::new(0), 3);
//! breaker.consider(VertexId::new(1), 2);
//! breaker.consider(VertexId::new(2), 2);
//!
//! assert_eq!(breaker.select(), Some(VertexId::new(1)));
//! ```
mod in_order_tie_breaker;

pub use in_order_tie_breaker::InOrderTieBreaker;

/// Selects the best scoring vertex out of those it has been given.
pub trait TieBreaker<Var, Value> {
    fn consider(&mut self, variable: Var, value: Value);

    /// Returns the selected vertex and forgets everything considered so far, so the next
    /// selection does not see stale scores.
    fn select(&mut self) -> Option<Var>;
}

/// Whether a [`TieBreaker`] looks for the highest or the lowest score.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Maximum,
    Minimum,
}
