use crate::basic_types::Color;
use crate::branching::value_selection::ValueSelector;
use crate::branching::SelectionContext;
use crate::graph::VertexId;

/// A [`ValueSelector`] which tries the colors of the domain in ascending order.
#[derive(Debug, Clone, Copy, Default)]
pub struct InDomainMin;

impl ValueSelector for InDomainMin {
    fn order_values(&mut self, context: &SelectionContext, vertex: VertexId) -> Vec<Color> {
        context.domain(vertex).iter().collect()
    }
}
