use std::collections::VecDeque;

use log::debug;
use log::trace;

use crate::create_statistics_struct;
use crate::engine::domains::DomainStore;
use crate::graph::ConstraintGraph;
use crate::graph::VertexId;
use crate::propagation::Arc;

/// The result of arc consistency: either a fixed point was reached, or the domain of a vertex was
/// wiped out.
pub type PropagationStatus = Result<(), DomainWipeout>;

/// Signals that the domain of `vertex` became empty during propagation, which proves that the
/// current partial assignment cannot be extended to a coloring.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DomainWipeout {
    pub vertex: VertexId,
}

create_statistics_struct!(
    /// The statistics gathered by [`ArcConsistency`] over all of its calls.
    PropagationStatistics {
        /// The number of calls to [`ArcConsistency::propagate`]
        num_calls: u64,
        /// The number of arcs which have been revised
        num_arc_revisions: u64,
        /// The number of colors which have been removed from a domain
        num_values_removed: u64,
        /// The number of calls which ended in a domain wipeout
        num_wipeouts: u64,
});

/// The AC-3 algorithm specialised to the inequality constraints of graph coloring.
///
/// For the constraint `x != y` the revision of the arc `(x, y)` can only remove a color `c` from
/// the domain of `x` when the domain of `y` is exactly `{c}`; every other color of `x` is
/// supported by some color of `y`. Whenever the domain of `x` changes, the arcs `(z, x)` of all
/// neighbors `z` of `x` (apart from `y`) are revised again, until no arc can remove a color.
///
/// # Example
/// ```rust
/// # use crayon_core::engine::domains::DomainStore;
/// # use crayon_core::graph::ConstraintGraph;
/// # use crayon_core::propagation::Arc;
/// # use crayon_core::propagation::ArcConsistency;
/// let mut graph = ConstraintGraph::default();
/// let a = graph.add_vertex("A");
/// let b = graph.add_vertex("B");
/// let _ = graph.add_edge(a, b);
///
/// let mut domains = DomainStore::initialise(graph.num_vertices(), 2);
/// domains.fix(a, 1);
///
/// let mut arc_consistency = ArcConsistency::default();
/// let status = arc_consistency.propagate(&mut domains, &graph, [Arc::new(b, a)]);
///
/// assert!(status.is_ok());
/// assert_eq!(domains.domain(b).singleton_value(), Some(2));
/// ```
#[derive(Debug, Default)]
pub struct ArcConsistency {
    /// The arcs which still have to be revised; reused between calls.
    worklist: VecDeque<Arc>,
    statistics: PropagationStatistics,
}

impl ArcConsistency {
    /// Revises the provided arcs, and every arc affected by the resulting removals, until either
    /// a fixed point is reached or a domain is wiped out.
    pub fn propagate(
        &mut self,
        domains: &mut DomainStore,
        graph: &ConstraintGraph,
        arcs: impl IntoIterator<Item = Arc>,
    ) -> PropagationStatus {
        self.statistics.num_calls += 1;

        self.worklist.clear();
        self.worklist.extend(arcs);

        while let Some(arc) = self.worklist.pop_front() {
            if !self.revise(domains, arc) {
                continue;
            }

            if domains.domain(arc.x).is_empty() {
                debug!("Domain of {} was wiped out while revising {arc}", arc.x);
                self.worklist.clear();
                self.statistics.num_wipeouts += 1;
                return Err(DomainWipeout { vertex: arc.x });
            }

            self.worklist.extend(
                graph
                    .neighbors(arc.x)
                    .iter()
                    .filter(|&&neighbor| neighbor != arc.y)
                    .map(|&neighbor| Arc::new(neighbor, arc.x)),
            );
        }

        Ok(())
    }

    /// Propagates every arc of the graph, in both directions.
    pub fn propagate_all(
        &mut self,
        domains: &mut DomainStore,
        graph: &ConstraintGraph,
    ) -> PropagationStatus {
        self.propagate(domains, graph, graph.all_arcs().map(Arc::from))
    }

    pub fn statistics(&self) -> PropagationStatistics {
        self.statistics
    }

    /// Removes the colors of `arc.x` which have no support in the domain of `arc.y`; returns
    /// whether the domain of `arc.x` changed.
    fn revise(&mut self, domains: &mut DomainStore, arc: Arc) -> bool {
        self.statistics.num_arc_revisions += 1;
        trace!("Revising {arc}");

        let Some(color) = domains.domain(arc.y).singleton_value() else {
            return false;
        };

        let removed = domains.remove(arc.x, color);
        if removed {
            self.statistics.num_values_removed += 1;
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::domains::Domain;

    fn path(num_vertices: u32) -> (ConstraintGraph, Vec<VertexId>) {
        let mut graph = ConstraintGraph::default();
        let vertices = (0..num_vertices)
            .map(|index| graph.add_vertex(format!("v{index}")))
            .collect::<Vec<_>>();
        for pair in vertices.windows(2) {
            let _ = graph.add_edge(pair[0], pair[1]).expect("valid edge");
        }
        (graph, vertices)
    }

    fn triangle() -> (ConstraintGraph, Vec<VertexId>) {
        let (mut graph, vertices) = path(3);
        let _ = graph
            .add_edge(vertices[2], vertices[0])
            .expect("valid edge");
        (graph, vertices)
    }

    fn snapshot_sizes(domains: &DomainStore, vertices: &[VertexId]) -> Vec<u32> {
        vertices
            .iter()
            .map(|&vertex| domains.domain(vertex).size())
            .collect()
    }

    #[test]
    fn full_domains_are_already_arc_consistent() {
        let (graph, vertices) = triangle();
        let mut domains = DomainStore::initialise(graph.num_vertices(), 3);

        let mut arc_consistency = ArcConsistency::default();
        assert_eq!(arc_consistency.propagate_all(&mut domains, &graph), Ok(()));

        for vertex in vertices {
            assert_eq!(domains.domain(vertex), &Domain::full(3));
        }
        assert_eq!(arc_consistency.statistics().num_arc_revisions, 6);
        assert_eq!(arc_consistency.statistics().num_values_removed, 0);
    }

    #[test]
    fn removals_propagate_along_a_path() {
        let (graph, vertices) = path(4);
        let mut domains = DomainStore::initialise(graph.num_vertices(), 2);
        domains.fix(vertices[0], 1);

        let mut arc_consistency = ArcConsistency::default();
        let status =
            arc_consistency.propagate(&mut domains, &graph, [Arc::new(vertices[1], vertices[0])]);

        assert_eq!(status, Ok(()));
        let values = vertices
            .iter()
            .map(|&vertex| domains.domain(vertex).singleton_value())
            .collect::<Vec<_>>();
        assert_eq!(values, vec![Some(1), Some(2), Some(1), Some(2)]);
    }

    #[test]
    fn single_edge_with_one_color_is_wiped_out() {
        let (graph, vertices) = path(2);
        let mut domains = DomainStore::initialise(graph.num_vertices(), 1);

        let mut arc_consistency = ArcConsistency::default();
        let status = arc_consistency.propagate_all(&mut domains, &graph);

        assert_eq!(
            status,
            Err(DomainWipeout {
                vertex: vertices[0]
            })
        );
        assert_eq!(arc_consistency.statistics().num_wipeouts, 1);
    }

    #[test]
    fn triangle_with_two_colors_is_wiped_out_after_a_fix() {
        let (graph, vertices) = triangle();
        let mut domains = DomainStore::initialise(graph.num_vertices(), 2);
        domains.fix(vertices[0], 1);

        let mut arc_consistency = ArcConsistency::default();
        let arcs = graph
            .neighbors(vertices[0])
            .iter()
            .map(|&neighbor| Arc::new(neighbor, vertices[0]))
            .collect::<Vec<_>>();

        assert!(arc_consistency
            .propagate(&mut domains, &graph, arcs)
            .is_err());
    }

    #[test]
    fn propagating_again_after_a_fixed_point_removes_nothing() {
        let (graph, vertices) = path(5);
        let mut domains = DomainStore::initialise(graph.num_vertices(), 3);
        domains.fix(vertices[0], 1);
        domains.fix(vertices[1], 2);

        let mut arc_consistency = ArcConsistency::default();
        assert!(arc_consistency.propagate_all(&mut domains, &graph).is_ok());

        let before = domains.snapshot();
        let removed_before = arc_consistency.statistics().num_values_removed;
        assert!(arc_consistency.propagate_all(&mut domains, &graph).is_ok());

        assert_eq!(domains.snapshot(), before);
        assert_eq!(
            arc_consistency.statistics().num_values_removed,
            removed_before
        );
    }

    #[test]
    fn domains_never_grow_during_propagation() {
        let (graph, vertices) = path(6);
        let mut domains = DomainStore::initialise(graph.num_vertices(), 2);
        let initial = snapshot_sizes(&domains, &vertices);
        domains.fix(vertices[2], 2);

        let mut arc_consistency = ArcConsistency::default();
        assert!(arc_consistency.propagate_all(&mut domains, &graph).is_ok());

        let after = snapshot_sizes(&domains, &vertices);
        assert!(after
            .iter()
            .zip(initial.iter())
            .all(|(after, before)| after <= before));
        assert!(after.iter().all(|&size| size == 1));
    }

    #[test]
    fn worklist_is_empty_after_a_wipeout() {
        let (graph, _) = path(3);
        let mut domains = DomainStore::initialise(graph.num_vertices(), 1);

        let mut arc_consistency = ArcConsistency::default();
        assert!(arc_consistency.propagate_all(&mut domains, &graph).is_err());
        assert!(arc_consistency.worklist.is_empty());
    }
}
