use thiserror::Error;

use crate::graph::VertexId;

/// Errors related to building a [`ConstraintGraph`][crate::graph::ConstraintGraph].
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A vertex cannot be adjacent to itself; such an edge could never be satisfied.
    #[error("the edge ({0}, {0}) is a self-loop")]
    SelfLoop(VertexId),
    /// The vertex has not been added to the graph.
    #[error("{0} is not a vertex of the graph")]
    UnknownVertex(VertexId),
}
