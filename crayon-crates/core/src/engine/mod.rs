//! The search of the [`ColoringSolver`], together with the domains it operates on.
mod coloring_solver;
pub mod domains;
mod solver_options;
mod solver_statistics;

pub use coloring_solver::ColoringSolver;
pub use solver_options::SolverOptions;
pub use solver_statistics::SearchStatistics;
