//! Provides the [`VariableSelector`] trait which is required for variable selectors to implement;
//! the main method in this trait is [`VariableSelector::select_variable`].
//!
//! Furthermore, it defines several implementations of the [`VariableSelector`] trait. The default
//! is [`MinimumRemainingValues`]; [`InputOrder`] is a static alternative.
mod input_order;
mod minimum_remaining_values;

pub use input_order::InputOrder;
pub use minimum_remaining_values::MinimumRemainingValues;
use thiserror::Error;

use crate::branching::SelectionContext;
use crate::graph::VertexId;

/// A trait containing the interface for [`VariableSelector`]s, specifying the method required
/// for selecting the next vertex to color.
pub trait VariableSelector: std::fmt::Debug {
    /// Determines which unassigned vertex to color next.
    ///
    /// It is the responsibility of the caller to check whether any vertex is unassigned; if none
    /// is then [`SelectionError::NoUnassignedVertices`] is returned.
    fn select_variable(&mut self, context: &SelectionContext) -> Result<VertexId, SelectionError>;
}

/// Errors related to selecting the next vertex to color.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum SelectionError {
    /// Selection was requested when every vertex is already assigned.
    #[error("a vertex was selected while every vertex is assigned")]
    NoUnassignedVertices,
}

/// The strategy used for choosing the next vertex to color.
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum VariableSelectionStrategy {
    /// See [`MinimumRemainingValues`].
    #[default]
    #[cfg_attr(feature = "clap", value(alias = "mrv"))]
    MinimumRemainingValues,
    /// See [`InputOrder`].
    InputOrder,
}

impl VariableSelectionStrategy {
    pub fn create_selector(self) -> Box<dyn VariableSelector> {
        match self {
            VariableSelectionStrategy::MinimumRemainingValues => {
                Box::new(MinimumRemainingValues::default())
            }
            VariableSelectionStrategy::InputOrder => Box::new(InputOrder),
        }
    }
}

impl std::fmt::Display for VariableSelectionStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VariableSelectionStrategy::MinimumRemainingValues => {
                write!(f, "minimum-remaining-values")
            }
            VariableSelectionStrategy::InputOrder => write!(f, "input-order"),
        }
    }
}
