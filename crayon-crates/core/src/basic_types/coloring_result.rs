use crate::basic_types::Assignment;

/// The outcome of a solve.
///
/// An uncolorable instance is a regular outcome rather than an error; it states that no coloring
/// with the given number of colors exists.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColoringResult {
    /// A complete and consistent coloring was found.
    Colorable(Assignment),
    /// The search space was exhausted without finding a coloring.
    Uncolorable,
}

impl ColoringResult {
    pub fn is_colorable(&self) -> bool {
        matches!(self, ColoringResult::Colorable(_))
    }

    /// Converts the result into the found coloring, if any.
    pub fn into_coloring(self) -> Option<Assignment> {
        match self {
            ColoringResult::Colorable(assignment) => Some(assignment),
            ColoringResult::Uncolorable => None,
        }
    }
}
