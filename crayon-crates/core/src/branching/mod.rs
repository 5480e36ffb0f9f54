//! Contains the heuristics which guide the search: a [`VariableSelector`] decides which vertex is
//! colored next, after which a [`ValueSelector`] decides in which order its colors are tried.
//!
//! Both receive a [`SelectionContext`] which borrows the current state of the search; neither
//! keeps a reference to that state between calls.
mod selection_context;
pub mod tie_breaking;
pub mod value_selection;
pub mod variable_selection;

pub use selection_context::SelectionContext;
pub use value_selection::ValueSelectionStrategy;
pub use value_selection::ValueSelector;
pub use variable_selection::SelectionError;
pub use variable_selection::VariableSelectionStrategy;
pub use variable_selection::VariableSelector;
