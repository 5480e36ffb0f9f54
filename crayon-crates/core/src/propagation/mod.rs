//! Constraint propagation for the inequality constraints of the graph; see [`ArcConsistency`].
mod arc;
mod arc_consistency;

pub use arc::Arc;
pub use arc_consistency::ArcConsistency;
pub use arc_consistency::DomainWipeout;
pub use arc_consistency::PropagationStatistics;
pub use arc_consistency::PropagationStatus;
