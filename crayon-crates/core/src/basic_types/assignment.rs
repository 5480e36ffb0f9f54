use crate::basic_types::Color;
use crate::containers::KeyedVec;
use crate::containers::StorageKey;
use crate::crayon_assert_simple;
use crate::graph::VertexId;

/// A (partial) coloring: the vertices which have been committed to a color, in the order in which
/// they were assigned.
///
/// Lookup of the color of a vertex is constant time; the entries can only be removed in the
/// reverse order of insertion, which is exactly what backtracking requires.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Assignment {
    /// The assigned vertices in the order in which they were assigned.
    entries: Vec<(VertexId, Color)>,
    /// The color of every vertex known to the assignment, [`None`] if it is unassigned.
    colors: KeyedVec<VertexId, Option<Color>>,
}

impl Assignment {
    /// Creates an empty assignment over `num_vertices` vertices.
    pub fn new(num_vertices: usize) -> Self {
        Assignment {
            entries: Vec::with_capacity(num_vertices),
            colors: KeyedVec::filled(num_vertices, None),
        }
    }

    /// Commits `vertex` to `color`.
    ///
    /// The vertex should not already be assigned.
    pub fn assign(&mut self, vertex: VertexId, color: Color) {
        crayon_assert_simple!(
            vertex.index() < self.colors.len(),
            "{vertex} is not known to the assignment"
        );
        crayon_assert_simple!(
            self.colors[vertex].is_none(),
            "{vertex} was assigned twice"
        );

        self.colors[vertex] = Some(color);
        self.entries.push((vertex, color));
    }

    /// Removes the most recently assigned vertex, returning it together with its color.
    pub fn unassign_last(&mut self) -> Option<(VertexId, Color)> {
        let (vertex, color) = self.entries.pop()?;
        self.colors[vertex] = None;
        Some((vertex, color))
    }

    /// Returns the color of `vertex`, or [`None`] if it is unassigned (or unknown).
    pub fn color_of(&self, vertex: VertexId) -> Option<Color> {
        self.colors.get(vertex).copied().flatten()
    }

    pub fn is_assigned(&self, vertex: VertexId) -> bool {
        self.color_of(vertex).is_some()
    }

    /// The number of assigned vertices.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The number of vertices this assignment was created for.
    pub fn num_vertices(&self) -> usize {
        self.colors.len()
    }

    /// Iterates over the assigned vertices in assignment order.
    pub fn iter(&self) -> impl Iterator<Item = (VertexId, Color)> + '_ {
        self.entries.iter().copied()
    }
}
