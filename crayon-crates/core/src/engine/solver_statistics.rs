use crate::create_statistics_struct;

create_statistics_struct!(
    /// Statistics of the search performed by the [`ColoringSolver`][crate::ColoringSolver] during
    /// its last solve.
    SearchStatistics {
        /// The number of times a vertex was committed to a color
        num_decisions: u64,
        /// The number of vertices whose colors were all exhausted, undoing the decision before it
        num_backtracks: u64,
        /// The number of candidate colors rejected because an assigned neighbor has that color
        num_neighbor_conflicts: u64,
        /// The number of decisions undone because look-ahead propagation wiped out a domain
        num_failed_lookaheads: u64,
        /// The number of milliseconds spent in the solver
        time_spent_in_solver: u64,
});
