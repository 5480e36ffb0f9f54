use std::iter::Rev;
use std::ops::Deref;
use std::vec::Drain;

use crate::crayon_assert_simple;

/// An undo log for the [`DomainStore`][crate::engine::domains::DomainStore].
///
/// Every domain change is pushed onto the trail. Opening a checkpoint starts a new level; going
/// back to a level drains every change recorded since, newest first, so that the store can revert
/// them one by one.
#[derive(Clone, Debug)]
pub(crate) struct Trail<T> {
    /// The number of levels which are currently open.
    num_levels: usize,
    /// For every open level, the length of the trail at the moment it was opened.
    level_starts: Vec<usize>,
    changes: Vec<T>,
}

// Implemented by hand so that `T` is not required to implement `Default`.
impl<T> Default for Trail<T> {
    fn default() -> Self {
        Trail {
            num_levels: 0,
            level_starts: Vec::new(),
            changes: Vec::new(),
        }
    }
}

impl<T> Trail<T> {
    pub(crate) fn increase_decision_level(&mut self) {
        self.num_levels += 1;
        self.level_starts.push(self.changes.len());
    }

    pub(crate) fn get_decision_level(&self) -> usize {
        self.num_levels
    }

    /// Closes every level above `level` and hands back the changes recorded in them, the most
    /// recent change first.
    pub(crate) fn synchronise(&mut self, level: usize) -> Rev<Drain<'_, T>> {
        crayon_assert_simple!(
            level < self.num_levels,
            "cannot go back to level {level} while only {} levels are open",
            self.num_levels
        );

        let first_undone = self.level_starts[level];

        self.num_levels = level;
        self.level_starts.truncate(level);
        self.changes.drain(first_undone..).rev()
    }

    pub(crate) fn push(&mut self, change: T) {
        self.changes.push(change)
    }
}

impl<T> Deref for Trail<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.changes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Changes are (vertex, removed color) pairs.
    #[test]
    fn changes_before_the_first_level_are_kept() {
        let mut trail = Trail::default();
        trail.push((0, 1));

        trail.increase_decision_level();
        trail.push((1, 2));
        trail.push((1, 3));

        let undone = trail.synchronise(0).collect::<Vec<_>>();

        assert_eq!(undone, vec![(1, 3), (1, 2)]);
        assert_eq!(trail.deref(), &[(0, 1)]);
        assert_eq!(trail.get_decision_level(), 0);
    }

    #[test]
    fn going_back_several_levels_undoes_all_of_them() {
        let mut trail = Trail::default();

        for vertex in 0..3 {
            trail.increase_decision_level();
            trail.push((vertex, 1));
        }

        let undone = trail.synchronise(1).collect::<Vec<_>>();

        assert_eq!(undone, vec![(2, 1), (1, 1)]);
        assert_eq!(trail.deref(), &[(0, 1)]);
        assert_eq!(trail.get_decision_level(), 1);
    }

    #[test]
    fn empty_levels_undo_nothing() {
        let mut trail: Trail<(u32, u32)> = Trail::default();
        trail.increase_decision_level();
        trail.increase_decision_level();

        assert_eq!(trail.synchronise(1).count(), 0);
        assert_eq!(trail.synchronise(0).count(), 0);
        assert!(trail.is_empty());
    }
}
