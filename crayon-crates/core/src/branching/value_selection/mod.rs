//! Provides the [`ValueSelector`] trait which is required for value selectors to implement; the
//! main method in this trait is [`ValueSelector::order_values`].
//!
//! Furthermore, it defines several implementations of the [`ValueSelector`] trait. The default is
//! [`LeastConstrainingValue`]; [`InDomainMin`] is a static alternative.
mod in_domain_min;
mod least_constraining_value;

pub use in_domain_min::InDomainMin;
pub use least_constraining_value::LeastConstrainingValue;

use crate::basic_types::Color;
use crate::branching::SelectionContext;
use crate::graph::VertexId;

/// A trait containing the interface for [`ValueSelector`]s, specifying the method required for
/// ordering the candidate colors of the selected vertex.
pub trait ValueSelector: std::fmt::Debug {
    /// Returns every color in the domain of `vertex`, in the order in which the search should try
    /// them. The ordering should be deterministic.
    fn order_values(&mut self, context: &SelectionContext, vertex: VertexId) -> Vec<Color>;
}

/// The strategy used for ordering the colors of the selected vertex.
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ValueSelectionStrategy {
    /// See [`LeastConstrainingValue`].
    #[default]
    #[cfg_attr(feature = "clap", value(alias = "lcv"))]
    LeastConstrainingValue,
    /// See [`InDomainMin`].
    InDomainMin,
}

impl ValueSelectionStrategy {
    pub fn create_selector(self) -> Box<dyn ValueSelector> {
        match self {
            ValueSelectionStrategy::LeastConstrainingValue => Box::new(LeastConstrainingValue),
            ValueSelectionStrategy::InDomainMin => Box::new(InDomainMin),
        }
    }
}

impl std::fmt::Display for ValueSelectionStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValueSelectionStrategy::LeastConstrainingValue => {
                write!(f, "least-constraining-value")
            }
            ValueSelectionStrategy::InDomainMin => write!(f, "in-domain-min"),
        }
    }
}
