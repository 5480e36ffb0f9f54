use crate::basic_types::Assignment;
use crate::engine::domains::Domain;
use crate::engine::domains::DomainStore;
use crate::graph::ConstraintGraph;
use crate::graph::VertexId;

/// The state of the search provided to the [`VariableSelector`][crate::branching::VariableSelector]
/// and [`ValueSelector`][crate::branching::ValueSelector]; it gives read-only access to the
/// domains, the graph and the current (partial) assignment.
#[derive(Debug, Clone, Copy)]
pub struct SelectionContext<'a> {
    domains: &'a DomainStore,
    graph: &'a ConstraintGraph,
    assignment: &'a Assignment,
}

impl<'a> SelectionContext<'a> {
    pub fn new(
        domains: &'a DomainStore,
        graph: &'a ConstraintGraph,
        assignment: &'a Assignment,
    ) -> Self {
        SelectionContext {
            domains,
            graph,
            assignment,
        }
    }

    pub fn domain(&self, vertex: VertexId) -> &'a Domain {
        self.domains.domain(vertex)
    }

    /// Returns the number of colors which are still in the domain of `vertex`.
    pub fn get_size_of_domain(&self, vertex: VertexId) -> u32 {
        self.domains.domain(vertex).size()
    }

    pub fn neighbors(&self, vertex: VertexId) -> &'a [VertexId] {
        self.graph.neighbors(vertex)
    }

    pub fn degree(&self, vertex: VertexId) -> usize {
        self.graph.degree(vertex)
    }

    pub fn is_assigned(&self, vertex: VertexId) -> bool {
        self.assignment.is_assigned(vertex)
    }

    /// Iterates over the vertices which have not been assigned yet, in vertex order.
    pub fn unassigned_vertices(&self) -> impl Iterator<Item = VertexId> + 'a {
        let assignment = self.assignment;
        self.graph
            .vertices()
            .filter(move |&vertex| !assignment.is_assigned(vertex))
    }
}
