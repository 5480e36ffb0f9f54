use crate::graph::VertexId;

/// The directed work item `(x, y)` of arc consistency: prune the domain of `x` using the domain of
/// `y` as the source of the inequality constraint between them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Arc {
    pub x: VertexId,
    pub y: VertexId,
}

impl Arc {
    pub fn new(x: VertexId, y: VertexId) -> Self {
        Arc { x, y }
    }
}

impl From<(VertexId, VertexId)> for Arc {
    fn from((x, y): (VertexId, VertexId)) -> Self {
        Arc { x, y }
    }
}

impl std::fmt::Display for Arc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
