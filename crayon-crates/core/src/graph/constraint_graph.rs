use log::warn;

use crate::containers::HashMap;
use crate::containers::HashSet;
use crate::containers::KeyedVec;
use crate::containers::StorageKey;
use crate::graph::GraphError;
use crate::graph::VertexId;

/// The undirected graph whose vertices are to be colored; every edge is an inequality constraint
/// between the colors of its endpoints.
///
/// The adjacency relation is symmetric and free of self-loops by construction. Neighbors are kept
/// in insertion order so that every traversal of the graph is deterministic.
///
/// # Example
/// ```rust
/// # use crayon_core::graph::ConstraintGraph;
/// let mut graph = ConstraintGraph::default();
/// let a = graph.add_vertex("A");
/// let b = graph.add_vertex("B");
///
/// assert_eq!(graph.add_edge(a, b), Ok(true));
/// // The same edge in the other direction is a duplicate.
/// assert_eq!(graph.add_edge(b, a), Ok(false));
///
/// assert_eq!(graph.num_edges(), 1);
/// assert_eq!(graph.neighbors(a), &[b]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ConstraintGraph {
    names: KeyedVec<VertexId, String>,
    vertex_ids: HashMap<String, VertexId>,
    neighbors: KeyedVec<VertexId, Vec<VertexId>>,
    /// Every edge once, with the smallest endpoint first, in insertion order.
    edges: Vec<(VertexId, VertexId)>,
    edge_set: HashSet<(VertexId, VertexId)>,
}

impl ConstraintGraph {
    /// Adds a vertex with the provided name; if a vertex with this name already exists then its
    /// [`VertexId`] is returned instead.
    pub fn add_vertex(&mut self, name: impl Into<String>) -> VertexId {
        let name = name.into();
        if let Some(&vertex) = self.vertex_ids.get(&name) {
            return vertex;
        }

        let vertex = self.names.push(name.clone());
        let _ = self.neighbors.push(Vec::new());
        let _ = self.vertex_ids.insert(name, vertex);

        vertex
    }

    /// Adds the undirected edge between `u` and `v`.
    ///
    /// Returns `Ok(false)` if the edge was already present, in which case the graph is unchanged.
    pub fn add_edge(&mut self, u: VertexId, v: VertexId) -> Result<bool, GraphError> {
        for vertex in [u, v] {
            if vertex.index() >= self.num_vertices() {
                return Err(GraphError::UnknownVertex(vertex));
            }
        }
        if u == v {
            return Err(GraphError::SelfLoop(u));
        }

        let key = (u.min(v), u.max(v));
        if !self.edge_set.insert(key) {
            warn!(
                "Ignoring duplicate edge ({}, {})",
                self.names[u], self.names[v]
            );
            return Ok(false);
        }

        self.neighbors[u].push(v);
        self.neighbors[v].push(u);
        self.edges.push(key);

        Ok(true)
    }

    pub fn num_vertices(&self) -> usize {
        self.names.len()
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Iterates over all vertices in the order in which they were added.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> {
        self.names.keys()
    }

    pub fn neighbors(&self, vertex: VertexId) -> &[VertexId] {
        &self.neighbors[vertex]
    }

    pub fn degree(&self, vertex: VertexId) -> usize {
        self.neighbors[vertex].len()
    }

    pub fn contains_edge(&self, u: VertexId, v: VertexId) -> bool {
        self.edge_set.contains(&(u.min(v), u.max(v)))
    }

    /// Iterates over every undirected edge once.
    pub fn edges(&self) -> impl Iterator<Item = (VertexId, VertexId)> + '_ {
        self.edges.iter().copied()
    }

    /// Iterates over every ordered pair `(u, v)` such that `v` is a neighbor of `u`; each edge
    /// thus occurs in both directions.
    pub fn all_arcs(&self) -> impl Iterator<Item = (VertexId, VertexId)> + '_ {
        self.vertices().flat_map(move |vertex| {
            self.neighbors[vertex]
                .iter()
                .map(move |&neighbor| (vertex, neighbor))
        })
    }

    pub fn name(&self, vertex: VertexId) -> &str {
        &self.names[vertex]
    }

    /// Looks up the vertex with the given name.
    pub fn vertex_id(&self, name: &str) -> Option<VertexId> {
        self.vertex_ids.get(name).copied()
    }
}
