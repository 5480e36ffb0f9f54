use crate::branching::variable_selection::SelectionError;
use crate::branching::variable_selection::VariableSelector;
use crate::branching::SelectionContext;
use crate::graph::VertexId;

/// A [`VariableSelector`] which selects the first vertex which is not assigned given the order in
/// which the vertices were added to the graph.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputOrder;

impl VariableSelector for InputOrder {
    fn select_variable(&mut self, context: &SelectionContext) -> Result<VertexId, SelectionError> {
        context
            .unassigned_vertices()
            .next()
            .ok_or(SelectionError::NoUnassignedVertices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic_types::Assignment;
    use crate::engine::domains::DomainStore;
    use crate::graph::ConstraintGraph;

    #[test]
    fn first_unassigned_vertex_is_selected() {
        let mut graph = ConstraintGraph::default();
        let a = graph.add_vertex("A");
        let b = graph.add_vertex("B");
        let c = graph.add_vertex("C");
        let _ = graph.add_edge(b, c).expect("valid edge");

        let mut domains = DomainStore::initialise(graph.num_vertices(), 3);
        let _ = domains.remove(c, 1);
        let mut assignment = Assignment::new(graph.num_vertices());
        assignment.assign(a, 1);

        let context = SelectionContext::new(&domains, &graph, &assignment);

        assert_eq!(InputOrder.select_variable(&context), Ok(b));
    }

    #[test]
    fn empty_graph_has_nothing_to_select() {
        let graph = ConstraintGraph::default();
        let domains = DomainStore::initialise(0, 3);
        let assignment = Assignment::new(0);

        let context = SelectionContext::new(&domains, &graph, &assignment);

        assert_eq!(
            InputOrder.select_variable(&context),
            Err(SelectionError::NoUnassignedVertices)
        );
    }
}
