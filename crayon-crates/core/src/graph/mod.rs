//! The constraint graph of a coloring problem and the handles of its vertices.
mod constraint_graph;
mod graph_error;
mod vertex_id;

pub use constraint_graph::ConstraintGraph;
pub use graph_error::GraphError;
pub use vertex_id::VertexId;
