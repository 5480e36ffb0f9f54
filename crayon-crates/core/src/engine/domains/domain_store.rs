use log::trace;

use crate::basic_types::Color;
use crate::basic_types::Trail;
use crate::containers::KeyedVec;
use crate::crayon_assert_moderate;
use crate::crayon_assert_simple;
use crate::engine::domains::Domain;
use crate::graph::VertexId;

/// How a [`DomainStore`] returns to an earlier state when the search backtracks.
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum RestorationStrategy {
    /// Every checkpoint takes a deep copy of all domains.
    #[default]
    Snapshot,
    /// Every removal is recorded on a trail; backtracking re-inserts the removed colors.
    Trail,
}

impl std::fmt::Display for RestorationStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RestorationStrategy::Snapshot => write!(f, "snapshot"),
            RestorationStrategy::Trail => write!(f, "trail"),
        }
    }
}

/// An independent deep copy of all domains of a [`DomainStore`], see [`DomainStore::snapshot`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DomainSnapshot {
    domains: KeyedVec<VertexId, Domain>,
}

impl DomainSnapshot {
    pub fn domain(&self, vertex: VertexId) -> &Domain {
        &self.domains[vertex]
    }
}

/// A point the [`DomainStore`] can be brought back to using [`DomainStore::restore_checkpoint`].
///
/// Checkpoints should be restored in the reverse order in which they were created.
#[derive(Debug)]
pub enum Checkpoint {
    Snapshot(DomainSnapshot),
    TrailLevel(usize),
}

/// A change to the domain of a vertex, as recorded on the trail.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum DomainChange {
    Removed { vertex: VertexId, color: Color },
    Inserted { vertex: VertexId, color: Color },
}

/// The admissible colors of every vertex.
///
/// Domains only shrink through [`DomainStore::remove`] and [`DomainStore::fix`]; the only way for
/// a domain to grow again is by restoring a snapshot or checkpoint.
#[derive(Clone, Debug)]
pub struct DomainStore {
    domains: KeyedVec<VertexId, Domain>,
    num_colors: u32,
    restoration: RestorationStrategy,
    trail: Trail<DomainChange>,
}

impl DomainStore {
    /// Creates a store where the domain of each of the `num_vertices` vertices is
    /// `{1, ..., num_colors}`.
    pub fn initialise(num_vertices: usize, num_colors: u32) -> Self {
        DomainStore::with_restoration(num_vertices, num_colors, RestorationStrategy::default())
    }

    /// Creates a store like [`DomainStore::initialise`] which uses the provided strategy for its
    /// checkpoints.
    pub fn with_restoration(
        num_vertices: usize,
        num_colors: u32,
        restoration: RestorationStrategy,
    ) -> Self {
        DomainStore {
            domains: KeyedVec::filled(num_vertices, Domain::full(num_colors)),
            num_colors,
            restoration,
            trail: Trail::default(),
        }
    }

    pub fn num_vertices(&self) -> usize {
        self.domains.len()
    }

    pub fn domain(&self, vertex: VertexId) -> &Domain {
        &self.domains[vertex]
    }

    /// Returns the vertex with an empty domain, if there is any.
    pub fn find_empty_domain(&self) -> Option<VertexId> {
        self.domains
            .keys()
            .find(|&vertex| self.domains[vertex].is_empty())
    }

    /// Removes `color` from the domain of `vertex`, returning whether the domain changed.
    pub fn remove(&mut self, vertex: VertexId, color: Color) -> bool {
        if !self.domains[vertex].remove(color) {
            return false;
        }

        trace!("Removed {color} from the domain of {vertex}");
        if self.restoration == RestorationStrategy::Trail {
            self.trail.push(DomainChange::Removed { vertex, color });
        }
        true
    }

    /// Reduces the domain of `vertex` to the singleton `{color}`.
    ///
    /// The color should be part of the domain.
    pub fn fix(&mut self, vertex: VertexId, color: Color) {
        crayon_assert_simple!(
            self.domains[vertex].contains(color),
            "{vertex} cannot be fixed to {color} since it is not in its domain"
        );

        let others = self.domains[vertex]
            .iter()
            .filter(|&other| other != color)
            .collect::<Vec<_>>();
        for other in others {
            let _ = self.remove(vertex, other);
        }

        crayon_assert_moderate!(self.domains[vertex].singleton_value() == Some(color));
    }

    /// Takes an independent deep copy of every domain.
    pub fn snapshot(&self) -> DomainSnapshot {
        DomainSnapshot {
            domains: self.domains.clone(),
        }
    }

    /// Replaces every domain by its value in `snapshot`.
    ///
    /// With the [`RestorationStrategy::Trail`] every color which differs from the snapshot is
    /// recorded on the trail, so checkpoints created before the restore can still be restored
    /// afterwards.
    pub fn restore(&mut self, snapshot: &DomainSnapshot) {
        crayon_assert_simple!(snapshot.domains.len() == self.domains.len());

        match self.restoration {
            RestorationStrategy::Snapshot => self.domains.clone_from_other(&snapshot.domains),
            RestorationStrategy::Trail => {
                let vertices = self.domains.keys().collect::<Vec<_>>();
                for vertex in vertices {
                    for color in 1..=self.num_colors {
                        let saved = snapshot.domains[vertex].contains(color);

                        if self.domains[vertex].contains(color) && !saved {
                            let _ = self.domains[vertex].remove(color);
                            self.trail.push(DomainChange::Removed { vertex, color });
                        } else if !self.domains[vertex].contains(color) && saved {
                            let _ = self.domains[vertex].insert(color);
                            self.trail.push(DomainChange::Inserted { vertex, color });
                        }
                    }
                }

                crayon_assert_moderate!(self.domains == snapshot.domains);
            }
        }
    }

    /// Creates a checkpoint according to the [`RestorationStrategy`] of the store.
    pub fn checkpoint(&mut self) -> Checkpoint {
        match self.restoration {
            RestorationStrategy::Snapshot => Checkpoint::Snapshot(self.snapshot()),
            RestorationStrategy::Trail => {
                let level = self.trail.get_decision_level();
                self.trail.increase_decision_level();
                Checkpoint::TrailLevel(level)
            }
        }
    }

    /// Brings every domain back to its value at the time `checkpoint` was created.
    pub fn restore_checkpoint(&mut self, checkpoint: Checkpoint) {
        match checkpoint {
            Checkpoint::Snapshot(snapshot) => self.restore(&snapshot),
            Checkpoint::TrailLevel(level) => {
                for change in self.trail.synchronise(level) {
                    match change {
                        DomainChange::Removed { vertex, color } => {
                            let _ = self.domains[vertex].insert(color);
                        }
                        DomainChange::Inserted { vertex, color } => {
                            let _ = self.domains[vertex].remove(color);
                        }
                    }
                }
            }
        }
    }
}
