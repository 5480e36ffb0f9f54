//! An independent check of a produced coloring.
//!
//! The check only looks at the [`Assignment`], the [`ConstraintGraph`] and the number of colors;
//! it shares no state with the search or with propagation, so a defect in either of them cannot
//! cause an invalid coloring to be accepted.
use thiserror::Error;

use crate::basic_types::Assignment;
use crate::basic_types::Color;
use crate::containers::StorageKey;
use crate::graph::ConstraintGraph;
use crate::graph::VertexId;

/// The reason why an [`Assignment`] is not a valid coloring of a graph.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ColoringViolation {
    #[error("{0} is assigned but is not a vertex of the graph")]
    UnknownVertex(VertexId),
    #[error("{0} is not assigned a color")]
    UnassignedVertex(VertexId),
    #[error("both endpoints of the edge ({u}, {v}) are assigned color {color}")]
    ConflictingEdge {
        u: VertexId,
        v: VertexId,
        color: Color,
    },
    #[error("{vertex} is assigned color {color} which is not in [1, {num_colors}]")]
    ColorOutOfRange {
        vertex: VertexId,
        color: Color,
        num_colors: u32,
    },
}

/// Checks that `assignment` assigns every vertex of `graph`, that no edge connects two vertices
/// of the same color, and that every color lies in `[1, num_colors]`.
///
/// Returns the first violation which is found.
pub fn check_coloring(
    assignment: &Assignment,
    graph: &ConstraintGraph,
    num_colors: u32,
) -> Result<(), ColoringViolation> {
    if let Some((vertex, _)) = assignment
        .iter()
        .find(|(vertex, _)| vertex.index() >= graph.num_vertices())
    {
        return Err(ColoringViolation::UnknownVertex(vertex));
    }

    if let Some(vertex) = graph
        .vertices()
        .find(|&vertex| !assignment.is_assigned(vertex))
    {
        return Err(ColoringViolation::UnassignedVertex(vertex));
    }

    for (u, v) in graph.edges() {
        if let (Some(color), Some(other)) = (assignment.color_of(u), assignment.color_of(v)) {
            if color == other {
                return Err(ColoringViolation::ConflictingEdge { u, v, color });
            }
        }
    }

    if let Some((vertex, color)) = assignment
        .iter()
        .find(|&(_, color)| color < 1 || color > num_colors)
    {
        return Err(ColoringViolation::ColorOutOfRange {
            vertex,
            color,
            num_colors,
        });
    }

    Ok(())
}

/// Returns whether `assignment` is a valid coloring of `graph` with `num_colors` colors; see
/// [`check_coloring`] for the reason in case it is not.
pub fn validate(assignment: &Assignment, graph: &ConstraintGraph, num_colors: u32) -> bool {
    check_coloring(assignment, graph, num_colors).is_ok()
}
