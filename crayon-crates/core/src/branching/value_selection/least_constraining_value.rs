use itertools::Itertools;

use crate::basic_types::Color;
use crate::branching::value_selection::ValueSelector;
use crate::branching::SelectionContext;
use crate::graph::VertexId;

/// A [`ValueSelector`] which tries the colors which rule out the fewest options of the unassigned
/// neighbors first.
///
/// The score of a color is the number of unassigned neighbors whose domain still contains it;
/// colors are tried in ascending order of their score, and colors with an equal score in
/// ascending order of color.
#[derive(Debug, Clone, Copy, Default)]
pub struct LeastConstrainingValue;

impl LeastConstrainingValue {
    fn count_conflicts(context: &SelectionContext, vertex: VertexId, color: Color) -> usize {
        context
            .neighbors(vertex)
            .iter()
            .filter(|&&neighbor| {
                !context.is_assigned(neighbor) && context.domain(neighbor).contains(color)
            })
            .count()
    }
}

impl ValueSelector for LeastConstrainingValue {
    fn order_values(&mut self, context: &SelectionContext, vertex: VertexId) -> Vec<Color> {
        context
            .domain(vertex)
            .iter()
            .map(|color| (color, Self::count_conflicts(context, vertex, color)))
            // The sort is stable, ties keep the ascending order of the domain
            .sorted_by_key(|&(_, conflicts)| conflicts)
            .map(|(color, _)| color)
            .collect()
    }
}
