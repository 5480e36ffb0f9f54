use crate::basic_types::Color;

/// The colors which are still admissible for a single vertex.
///
/// Membership and size are answered in constant time; iteration yields the colors in ascending
/// order, which makes every ordering derived from a domain deterministic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Domain {
    /// At index `c - 1` is whether color `c` is in the domain.
    present: Vec<bool>,
    size: u32,
}

impl Domain {
    /// Creates the full domain `{1, ..., num_colors}`.
    pub fn full(num_colors: u32) -> Self {
        Domain {
            present: vec![true; num_colors as usize],
            size: num_colors,
        }
    }

    pub fn contains(&self, color: Color) -> bool {
        color >= 1
            && self
                .present
                .get(color as usize - 1)
                .copied()
                .unwrap_or(false)
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// If the domain consists of exactly one color then that color is returned.
    pub fn singleton_value(&self) -> Option<Color> {
        if self.size == 1 {
            self.iter().next()
        } else {
            None
        }
    }

    /// Iterates over the colors in the domain in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = Color> + '_ {
        self.present
            .iter()
            .enumerate()
            .filter(|(_, &present)| present)
            .map(|(index, _)| index as Color + 1)
    }

    /// Removes `color` from the domain, returning whether the domain changed.
    pub(crate) fn remove(&mut self, color: Color) -> bool {
        if !self.contains(color) {
            return false;
        }

        self.present[color as usize - 1] = false;
        self.size -= 1;
        true
    }

    /// Adds `color` back to the domain, returning whether the domain changed.
    pub(crate) fn insert(&mut self, color: Color) -> bool {
        if color == 0 || color as usize > self.present.len() || self.contains(color) {
            return false;
        }

        self.present[color as usize - 1] = true;
        self.size += 1;
        true
    }
}
