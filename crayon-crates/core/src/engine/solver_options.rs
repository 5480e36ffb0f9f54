use crate::branching::ValueSelectionStrategy;
use crate::branching::VariableSelectionStrategy;
use crate::engine::domains::RestorationStrategy;

/// Options for the [`ColoringSolver`][crate::ColoringSolver] which determine how it searches.
///
/// The defaults select the unassigned vertex with the minimum remaining values, try its colors
/// least constraining first, restore domains from snapshots and run arc consistency over the whole
/// graph before the search starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverOptions {
    /// How the next vertex to color is chosen.
    pub variable_selection: VariableSelectionStrategy,
    /// The order in which the colors of the chosen vertex are tried.
    pub value_selection: ValueSelectionStrategy,
    /// How the domains are brought back to an earlier state on backtrack.
    pub restoration: RestorationStrategy,
    /// Whether arc consistency is established over every arc before the first decision.
    pub initial_propagation: bool,
}

impl Default for SolverOptions {
    fn default() -> Self {
        SolverOptions {
            variable_selection: VariableSelectionStrategy::default(),
            value_selection: ValueSelectionStrategy::default(),
            restoration: RestorationStrategy::default(),
            initial_propagation: true,
        }
    }
}
