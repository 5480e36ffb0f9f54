use std::path::Path;

use crayon_solver::core::checking::ColoringViolation;
use crayon_solver::parsers::edge_list::EdgeListParseError;
use thiserror::Error;

pub(crate) type CrayonResult<T> = Result<T, CrayonError>;

#[derive(Error, Debug)]
pub(crate) enum CrayonError {
    #[error("IO error, more details: {0}")]
    IOError(#[from] std::io::Error),
    #[error("The instance {path} is invalid, more details: {source}")]
    InvalidInstance {
        path: String,
        source: EdgeListParseError,
    },
    #[error("The instance {0} does not declare a number of colors and none was provided with '--colors'.")]
    MissingColorCount(String),
    #[error("The coloring found for {path} is invalid, more details: {violation}")]
    InvalidColoring {
        path: String,
        violation: ColoringViolation,
    },
}

impl CrayonError {
    pub(crate) fn invalid_instance(path: &Path, source: EdgeListParseError) -> Self {
        Self::InvalidInstance {
            path: path.display().to_string(),
            source,
        }
    }

    pub(crate) fn missing_color_count(path: &Path) -> Self {
        Self::MissingColorCount(path.display().to_string())
    }

    pub(crate) fn invalid_coloring(path: &Path, violation: ColoringViolation) -> Self {
        Self::InvalidColoring {
            path: path.display().to_string(),
            violation,
        }
    }
}
