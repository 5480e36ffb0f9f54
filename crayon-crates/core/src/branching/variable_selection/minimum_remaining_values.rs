use std::cmp::Ordering;

use crate::branching::tie_breaking::Direction;
use crate::branching::tie_breaking::InOrderTieBreaker;
use crate::branching::tie_breaking::TieBreaker;
use crate::branching::variable_selection::SelectionError;
use crate::branching::variable_selection::VariableSelector;
use crate::branching::SelectionContext;
use crate::graph::VertexId;

/// A [`VariableSelector`] which selects the unassigned vertex with the smallest domain.
///
/// It breaks ties according to the degree of the vertex (giving priority to vertices with more
/// neighbors), and remaining ties by selecting the first such vertex in vertex order.
#[derive(Debug)]
pub struct MinimumRemainingValues {
    tie_breaker: InOrderTieBreaker<VertexId, MinimumRemainingValuesScore>,
}

impl Default for MinimumRemainingValues {
    fn default() -> Self {
        MinimumRemainingValues {
            tie_breaker: InOrderTieBreaker::new(Direction::Minimum),
        }
    }
}

#[derive(Debug, PartialEq)]
struct MinimumRemainingValuesScore {
    domain_size: u32,
    degree: usize,
}

impl PartialOrd for MinimumRemainingValuesScore {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.domain_size.cmp(&other.domain_size) {
            Ordering::Equal => Some(
                // Note that we are comparing `other` to `self` instead of the normal `self` to
                // `other`, this is because the tie-breaking is minimizing while we want to
                // tie-break in the maximizing direction.
                other.degree.cmp(&self.degree),
            ),
            ordering => Some(ordering),
        }
    }
}

impl VariableSelector for MinimumRemainingValues {
    fn select_variable(&mut self, context: &SelectionContext) -> Result<VertexId, SelectionError> {
        context.unassigned_vertices().for_each(|vertex| {
            self.tie_breaker.consider(
                vertex,
                MinimumRemainingValuesScore {
                    domain_size: context.get_size_of_domain(vertex),
                    degree: context.degree(vertex),
                },
            );
        });

        self.tie_breaker
            .select()
            .ok_or(SelectionError::NoUnassignedVertices)
    }
}
