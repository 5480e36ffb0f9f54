use std::time::Instant;

use log::debug;

use crate::basic_types::Assignment;
use crate::basic_types::Color;
use crate::basic_types::ColoringResult;
use crate::branching::SelectionContext;
use crate::branching::ValueSelector;
use crate::branching::VariableSelector;
use crate::checking::validate;
use crate::crayon_assert_advanced;
use crate::crayon_assert_simple;
use crate::engine::domains::Checkpoint;
use crate::engine::domains::DomainStore;
use crate::engine::solver_statistics::SearchStatistics;
use crate::engine::SolverOptions;
use crate::graph::ConstraintGraph;
use crate::graph::VertexId;
use crate::propagation::Arc;
use crate::propagation::ArcConsistency;
use crate::propagation::PropagationStatistics;
use crate::statistics::log_statistic_postfix;
use crate::statistics::should_log_statistics;
use crate::statistics::Statistic;
use crate::statistics::StatisticLogger;

/// A backtracking solver which maintains arc consistency after every decision.
///
/// The solver repeatedly selects an unassigned vertex, commits it to one of its remaining colors
/// and propagates the consequences to the unassigned neighbors. When propagation empties a domain,
/// the commitment is undone and the next color is tried; when all colors of a vertex fail, the
/// decision of the previous vertex is undone instead.
///
/// A solver keeps no state between calls to [`ColoringSolver::solve`] apart from the statistics
/// of the most recent call.
///
/// # Example
/// ```rust
/// # use crayon_core::graph::ConstraintGraph;
/// # use crayon_core::ColoringSolver;
/// let mut graph = ConstraintGraph::default();
/// let a = graph.add_vertex("A");
/// let b = graph.add_vertex("B");
/// let c = graph.add_vertex("C");
/// let _ = graph.add_edge(a, b);
/// let _ = graph.add_edge(b, c);
/// let _ = graph.add_edge(c, a);
///
/// let mut solver = ColoringSolver::default();
///
/// let coloring = solver
///     .solve(&graph, 3)
///     .into_coloring()
///     .expect("a triangle can be colored with three colors");
/// assert_ne!(coloring.color_of(a), coloring.color_of(b));
///
/// assert!(!solver.solve(&graph, 2).is_colorable());
/// ```
#[derive(Debug, Default)]
pub struct ColoringSolver {
    options: SolverOptions,
    statistics: SearchStatistics,
    propagation_statistics: PropagationStatistics,
}

/// A vertex on the search stack together with the colors which are still to be tried.
#[derive(Debug)]
struct SearchFrame {
    vertex: VertexId,
    candidates: Vec<Color>,
    next_candidate: usize,
    /// Present while `vertex` is committed to a color; restores the domains to their state before
    /// the commitment.
    checkpoint: Option<Checkpoint>,
}

impl SearchFrame {
    fn next_candidate(&mut self) -> Option<Color> {
        let color = self.candidates.get(self.next_candidate).copied()?;
        self.next_candidate += 1;
        Some(color)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SearchState {
    /// Select the next vertex, or report the coloring when every vertex is assigned.
    ChooseVertex,
    /// Try the next candidate color of the vertex on top of the stack.
    TryNextColor,
    /// The vertex on top of the stack has no candidates left.
    Backtrack,
}

impl ColoringSolver {
    pub fn with_options(options: SolverOptions) -> Self {
        ColoringSolver {
            options,
            statistics: SearchStatistics::default(),
            propagation_statistics: PropagationStatistics::default(),
        }
    }

    pub fn options(&self) -> SolverOptions {
        self.options
    }

    /// The statistics of the search performed by the last call to [`ColoringSolver::solve`].
    pub fn statistics(&self) -> SearchStatistics {
        self.statistics
    }

    /// The statistics of arc consistency during the last call to [`ColoringSolver::solve`].
    pub fn propagation_statistics(&self) -> PropagationStatistics {
        self.propagation_statistics
    }

    /// Logs the statistics of the last solve, if statistic logging is enabled; see
    /// [`configure_statistic_logging`][crate::statistics::configure_statistic_logging].
    pub fn log_statistics(&self) {
        if should_log_statistics() {
            self.statistics.log(StatisticLogger::new(["search"]));
            self.propagation_statistics
                .log(StatisticLogger::new(["propagation"]));
            log_statistic_postfix();
        }
    }

    /// Searches for an assignment of a color in `[1, num_colors]` to every vertex of `graph` such
    /// that no edge connects two vertices of the same color.
    ///
    /// The search is complete: [`ColoringResult::Uncolorable`] is only returned when no such
    /// coloring exists.
    pub fn solve(&mut self, graph: &ConstraintGraph, num_colors: u32) -> ColoringResult {
        debug!(
            "Solving a graph with {} vertices and {} edges using {num_colors} colors",
            graph.num_vertices(),
            graph.num_edges()
        );

        let start_time = Instant::now();
        self.statistics = SearchStatistics::default();

        let mut arc_consistency = ArcConsistency::default();
        let result = self.search(graph, num_colors, &mut arc_consistency);

        self.propagation_statistics = arc_consistency.statistics();
        self.statistics.time_spent_in_solver =
            u64::try_from(start_time.elapsed().as_millis()).unwrap_or(u64::MAX);

        debug!(
            "Search finished after {} decisions and {} backtracks: {}",
            self.statistics.num_decisions,
            self.statistics.num_backtracks,
            if result.is_colorable() {
                "colorable"
            } else {
                "uncolorable"
            }
        );

        result
    }

    fn search(
        &mut self,
        graph: &ConstraintGraph,
        num_colors: u32,
        arc_consistency: &mut ArcConsistency,
    ) -> ColoringResult {
        let mut domains = DomainStore::with_restoration(
            graph.num_vertices(),
            num_colors,
            self.options.restoration,
        );
        let mut assignment = Assignment::new(graph.num_vertices());

        if let Some(vertex) = domains.find_empty_domain() {
            debug!("{vertex} has no colors to choose from");
            return ColoringResult::Uncolorable;
        }

        if self.options.initial_propagation {
            if let Err(wipeout) = arc_consistency.propagate_all(&mut domains, graph) {
                debug!(
                    "Initial propagation wiped out the domain of {}",
                    wipeout.vertex
                );
                return ColoringResult::Uncolorable;
            }
        }

        let mut variable_selector = self.options.variable_selection.create_selector();
        let mut value_selector = self.options.value_selection.create_selector();

        let mut stack: Vec<SearchFrame> = Vec::new();
        let mut state = SearchState::ChooseVertex;

        loop {
            state = match state {
                SearchState::ChooseVertex => {
                    if assignment.len() == graph.num_vertices() {
                        crayon_assert_advanced!(validate(&assignment, graph, num_colors));
                        return ColoringResult::Colorable(assignment);
                    }

                    stack.push(Self::expand(
                        variable_selector.as_mut(),
                        value_selector.as_mut(),
                        SelectionContext::new(&domains, graph, &assignment),
                    ));
                    SearchState::TryNextColor
                }
                SearchState::TryNextColor => {
                    let Some(frame) = stack.last_mut() else {
                        return ColoringResult::Uncolorable;
                    };
                    crayon_assert_simple!(frame.checkpoint.is_none());

                    let vertex = frame.vertex;
                    match frame.next_candidate() {
                        None => SearchState::Backtrack,
                        Some(color)
                            if has_assigned_neighbor_with(graph, &assignment, vertex, color) =>
                        {
                            self.statistics.num_neighbor_conflicts += 1;
                            SearchState::TryNextColor
                        }
                        Some(color) => {
                            self.statistics.num_decisions += 1;

                            assignment.assign(vertex, color);
                            let checkpoint = domains.checkpoint();
                            domains.fix(vertex, color);

                            let arcs = graph
                                .neighbors(vertex)
                                .iter()
                                .filter(|&&neighbor| !assignment.is_assigned(neighbor))
                                .map(|&neighbor| Arc::new(neighbor, vertex));

                            match arc_consistency.propagate(&mut domains, graph, arcs) {
                                Ok(()) => {
                                    frame.checkpoint = Some(checkpoint);
                                    SearchState::ChooseVertex
                                }
                                Err(_) => {
                                    self.statistics.num_failed_lookaheads += 1;
                                    domains.restore_checkpoint(checkpoint);
                                    let _ = assignment.unassign_last();
                                    SearchState::TryNextColor
                                }
                            }
                        }
                    }
                }
                SearchState::Backtrack => {
                    let _ = stack.pop();
                    self.statistics.num_backtracks += 1;

                    let Some(parent) = stack.last_mut() else {
                        return ColoringResult::Uncolorable;
                    };

                    if let Some(checkpoint) = parent.checkpoint.take() {
                        domains.restore_checkpoint(checkpoint);
                        let undone = assignment.unassign_last();
                        crayon_assert_simple!(
                            undone.map(|(vertex, _)| vertex) == Some(parent.vertex)
                        );
                    }
                    SearchState::TryNextColor
                }
            };
        }
    }

    /// Selects the vertex to color next and the order in which its colors are tried.
    fn expand(
        variable_selector: &mut dyn VariableSelector,
        value_selector: &mut dyn ValueSelector,
        context: SelectionContext<'_>,
    ) -> SearchFrame {
        let vertex = match variable_selector.select_variable(&context) {
            Ok(vertex) => vertex,
            Err(error) => {
                panic!("{variable_selector:?} failed while vertices are unassigned: {error}")
            }
        };
        let candidates = value_selector.order_values(&context, vertex);

        SearchFrame {
            vertex,
            candidates,
            next_candidate: 0,
            checkpoint: None,
        }
    }
}

fn has_assigned_neighbor_with(
    graph: &ConstraintGraph,
    assignment: &Assignment,
    vertex: VertexId,
    color: Color,
) -> bool {
    graph
        .neighbors(vertex)
        .iter()
        .any(|&neighbor| assignment.color_of(neighbor) == Some(color))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branching::ValueSelectionStrategy;
    use crate::branching::VariableSelectionStrategy;
    use crate::checking::check_coloring;
    use crate::engine::domains::RestorationStrategy;

    fn graph_of(num_vertices: u32, edges: &[(u32, u32)]) -> ConstraintGraph {
        let mut graph = ConstraintGraph::default();
        for id in 0..num_vertices {
            let _ = graph.add_vertex(format!("x{id}"));
        }
        for &(u, v) in edges {
            let _ = graph
                .add_edge(VertexId::new(u), VertexId::new(v))
                .expect("valid edge");
        }
        graph
    }

    fn all_options() -> impl Iterator<Item = SolverOptions> {
        let variable_selections = [
            VariableSelectionStrategy::MinimumRemainingValues,
            VariableSelectionStrategy::InputOrder,
        ];
        let value_selections = [
            ValueSelectionStrategy::LeastConstrainingValue,
            ValueSelectionStrategy::InDomainMin,
        ];
        let restorations = [RestorationStrategy::Snapshot, RestorationStrategy::Trail];

        variable_selections.into_iter().flat_map(move |variable_selection| {
            value_selections.into_iter().flat_map(move |value_selection| {
                restorations.into_iter().flat_map(move |restoration| {
                    [true, false]
                        .into_iter()
                        .map(move |initial_propagation| SolverOptions {
                            variable_selection,
                            value_selection,
                            restoration,
                            initial_propagation,
                        })
                })
            })
        })
    }

    #[test]
    fn triangle_with_three_colors_is_colorable() {
        let graph = graph_of(3, &[(0, 1), (1, 2), (2, 0)]);

        for options in all_options() {
            let result = ColoringSolver::with_options(options).solve(&graph, 3);
            let coloring = result.into_coloring().expect("triangle is 3-colorable");

            assert_eq!(check_coloring(&coloring, &graph, 3), Ok(()), "{options:?}");
        }
    }

    #[test]
    fn triangle_with_two_colors_is_uncolorable() {
        let graph = graph_of(3, &[(0, 1), (1, 2), (2, 0)]);

        for options in all_options() {
            let result = ColoringSolver::with_options(options).solve(&graph, 2);
            assert_eq!(result, ColoringResult::Uncolorable, "{options:?}");
        }
    }

    #[test]
    fn zero_colors_only_color_the_empty_graph() {
        assert!(ColoringSolver::default()
            .solve(&ConstraintGraph::default(), 0)
            .is_colorable());
        assert!(!ColoringSolver::default()
            .solve(&graph_of(1, &[]), 0)
            .is_colorable());
    }

    #[test]
    fn look_ahead_alone_colors_a_cycle_with_a_chord() {
        let graph = graph_of(5, &[(0, 1), (1, 2), (2, 3), (3, 4), (4, 0), (0, 2)]);
        let options = SolverOptions {
            variable_selection: VariableSelectionStrategy::InputOrder,
            value_selection: ValueSelectionStrategy::InDomainMin,
            restoration: RestorationStrategy::Trail,
            initial_propagation: false,
        };

        let mut solver = ColoringSolver::with_options(options);
        let coloring = solver
            .solve(&graph, 3)
            .into_coloring()
            .expect("graph is 3-colorable");

        assert!(validate(&coloring, &graph, 3));
        assert!(solver.statistics().num_decisions >= 5);
        assert!(solver.propagation_statistics().num_calls > 0);
    }

    #[test]
    fn statistics_are_reset_between_solves() {
        let graph = graph_of(4, &[(0, 1), (1, 2), (2, 3), (3, 0), (0, 2), (1, 3)]);
        let mut solver = ColoringSolver::default();

        assert!(!solver.solve(&graph, 3).is_colorable());
        let first = solver.statistics();

        assert!(!solver.solve(&graph, 3).is_colorable());
        let second = solver.statistics();

        assert_eq!(first.num_decisions, second.num_decisions);
        assert_eq!(first.num_backtracks, second.num_backtracks);
        assert!(second.time_spent_in_solver < 60_000);
    }

    #[test]
    fn isolated_vertices_receive_a_color() {
        let graph = graph_of(3, &[]);
        let coloring = ColoringSolver::default()
            .solve(&graph, 1)
            .into_coloring()
            .expect("isolated vertices need a single color");

        assert_eq!(coloring.len(), 3);
        assert!(graph.vertices().all(|vertex| coloring.color_of(vertex) == Some(1)));
    }
}
