//! The domains of the vertices and the means to restore them on backtrack.
mod domain;
mod domain_store;

pub use domain::Domain;
pub use domain_store::Checkpoint;
pub use domain_store::DomainSnapshot;
pub use domain_store::DomainStore;
pub use domain_store::RestorationStrategy;
