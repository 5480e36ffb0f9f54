#![cfg(test)] // workaround for https://github.com/rust-lang/rust-clippy/issues/11024

use crayon_core::branching::ValueSelectionStrategy;
use crayon_core::branching::VariableSelectionStrategy;
use crayon_core::checking::check_coloring;
use crayon_core::engine::domains::RestorationStrategy;
use crayon_core::graph::ConstraintGraph;
use crayon_core::ColoringSolver;
use crayon_core::SolverOptions;
use rand::rngs::SmallRng;
use rand::Rng;
use rand::SeedableRng;

const NUM_INSTANCES: usize = 60;

fn random_graph(rng: &mut SmallRng) -> ConstraintGraph {
    let num_vertices = rng.gen_range(1..=7);
    let edge_probability = rng.gen_range(0.2..0.8);

    let mut graph = ConstraintGraph::default();
    let vertices = (0..num_vertices)
        .map(|id| graph.add_vertex(format!("x{id}")))
        .collect::<Vec<_>>();
    for (index, &u) in vertices.iter().enumerate() {
        for &v in &vertices[index + 1..] {
            if rng.gen_bool(edge_probability) {
                let _ = graph.add_edge(u, v).expect("valid edge");
            }
        }
    }
    graph
}

/// Enumerates every assignment of colors to the vertices, returning whether any of them is a
/// proper coloring.
fn brute_force_colorable(graph: &ConstraintGraph, num_colors: u32) -> bool {
    fn extend(graph: &ConstraintGraph, num_colors: u32, colors: &mut Vec<u32>) -> bool {
        if colors.len() == graph.num_vertices() {
            return graph
                .edges()
                .all(|(u, v)| colors[u.id as usize] != colors[v.id as usize]);
        }

        for color in 1..=num_colors {
            colors.push(color);
            let found = extend(graph, num_colors, colors);
            let _ = colors.pop();
            if found {
                return true;
            }
        }
        false
    }

    extend(graph, num_colors, &mut Vec::new())
}

fn all_options() -> Vec<SolverOptions> {
    let mut options = Vec::new();
    for variable_selection in [
        VariableSelectionStrategy::MinimumRemainingValues,
        VariableSelectionStrategy::InputOrder,
    ] {
        for value_selection in [
            ValueSelectionStrategy::LeastConstrainingValue,
            ValueSelectionStrategy::InDomainMin,
        ] {
            for restoration in [RestorationStrategy::Snapshot, RestorationStrategy::Trail] {
                for initial_propagation in [true, false] {
                    options.push(SolverOptions {
                        variable_selection,
                        value_selection,
                        restoration,
                        initial_propagation,
                    });
                }
            }
        }
    }
    options
}

#[test]
fn solver_agrees_with_brute_force_on_random_graphs() {
    let mut rng = SmallRng::seed_from_u64(42);

    for _ in 0..NUM_INSTANCES {
        let graph = random_graph(&mut rng);

        for num_colors in 1..=4 {
            let expected = brute_force_colorable(&graph, num_colors);

            for options in all_options() {
                let result = ColoringSolver::with_options(options).solve(&graph, num_colors);

                assert_eq!(
                    result.is_colorable(),
                    expected,
                    "{options:?} with {num_colors} colors on {:?}",
                    graph.edges().collect::<Vec<_>>()
                );

                if let Some(coloring) = result.into_coloring() {
                    assert_eq!(
                        check_coloring(&coloring, &graph, num_colors),
                        Ok(()),
                        "{options:?} produced an invalid coloring"
                    );
                }
            }
        }
    }
}

#[test]
fn restoration_strategies_explore_the_same_search_tree() {
    let mut rng = SmallRng::seed_from_u64(7);

    for _ in 0..NUM_INSTANCES {
        let graph = random_graph(&mut rng);
        let num_colors = rng.gen_range(2..=3);

        let mut snapshot_solver = ColoringSolver::with_options(SolverOptions {
            restoration: RestorationStrategy::Snapshot,
            ..Default::default()
        });
        let mut trail_solver = ColoringSolver::with_options(SolverOptions {
            restoration: RestorationStrategy::Trail,
            ..Default::default()
        });

        let snapshot_result = snapshot_solver.solve(&graph, num_colors);
        let trail_result = trail_solver.solve(&graph, num_colors);

        assert_eq!(snapshot_result, trail_result);
        assert_eq!(
            snapshot_solver.statistics().num_decisions,
            trail_solver.statistics().num_decisions
        );
        assert_eq!(
            snapshot_solver.statistics().num_backtracks,
            trail_solver.statistics().num_backtracks
        );
    }
}

