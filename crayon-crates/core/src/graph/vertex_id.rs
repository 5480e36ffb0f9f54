use crate::containers::StorageKey;

/// The handle of a vertex in a [`ConstraintGraph`][crate::graph::ConstraintGraph].
///
/// It carries no structure beyond identity; the name of the vertex is stored by the graph.
#[derive(Clone, PartialEq, Eq, Copy, Hash, PartialOrd, Ord)]
pub struct VertexId {
    pub id: u32,
}

impl VertexId {
    pub fn new(id: u32) -> Self {
        VertexId { id }
    }
}

impl StorageKey for VertexId {
    fn index(&self) -> usize {
        self.id as usize
    }

    fn create_from_index(index: usize) -> Self {
        VertexId { id: index as u32 }
    }
}

impl std::fmt::Display for VertexId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "v{}", self.id)
    }
}

impl std::fmt::Debug for VertexId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "v{}", self.id)
    }
}
