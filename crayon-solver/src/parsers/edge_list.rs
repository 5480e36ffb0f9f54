//! A parser for the edge-list format of graph coloring instances.
//!
//! The format is line-based:
//!  - blank lines and lines starting with `#` are ignored,
//!  - a line starting with `colors` (in any case) declares the number of colors as
//!    `colors = <number>`,
//!  - a line `u, v` declares an (undirected) edge between the vertices named `u` and `v`,
//!  - a line with a single name declares a vertex without declaring an edge.
//!
//! Vertices are identified in the order in which their names first occur. An edge which is
//! declared twice is only added once.
//!
//! ```text
//! # Australia
//! colors = 3
//! WA, NT
//! WA, SA
//! NT, SA
//! TAS
//! ```
use std::io::BufRead;
use std::io::BufReader;
use std::io::Read;

use crayon_core::graph::ConstraintGraph;
use crayon_core::graph::GraphError;
use log::debug;
use thiserror::Error;

/// A parsed edge-list instance.
#[derive(Debug, Clone, Default)]
pub struct EdgeListInstance {
    /// The number of colors declared by the instance, if any.
    pub num_colors: Option<u32>,
    pub graph: ConstraintGraph,
}

#[derive(Debug, Error)]
pub enum EdgeListParseError {
    #[error("failed to read the instance")]
    Io(#[from] std::io::Error),

    #[error("line {line}: '{content}' is an invalid color declaration, expected 'colors = <number>'")]
    InvalidColorDeclaration { line: usize, content: String },

    #[error("line {line}: the number of colors should be positive")]
    ZeroColors { line: usize },

    #[error("line {line}: the number of colors is declared more than once")]
    DuplicateColorDeclaration { line: usize },

    #[error("line {line}: expected either 'u, v' or a single vertex name, but found {num_fields} fields")]
    InvalidFieldCount { line: usize, num_fields: usize },

    #[error("line {line}: vertex names cannot be empty")]
    EmptyVertexName { line: usize },

    #[error("line {line}: vertex '{name}' cannot be adjacent to itself")]
    SelfLoop { line: usize, name: String },

    #[error("line {line}: invalid edge, more details: {source}")]
    InvalidEdge { line: usize, source: GraphError },
}

/// Parses an edge-list instance from `source`.
///
/// The number of colors is not required to be declared, in which case
/// [`EdgeListInstance::num_colors`] is [`None`] and the caller is expected to supply it.
pub fn parse_edge_list(source: impl Read) -> Result<EdgeListInstance, EdgeListParseError> {
    let reader = BufReader::new(source);
    let mut instance = EdgeListInstance::default();

    for (index, line) in reader.lines().enumerate() {
        let line_number = index + 1;
        let line = line?;
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if line.to_lowercase().starts_with("colors") {
            let num_colors = parse_color_declaration(line, line_number)?;

            if instance.num_colors.replace(num_colors).is_some() {
                return Err(EdgeListParseError::DuplicateColorDeclaration { line: line_number });
            }
            continue;
        }

        parse_graph_line(&mut instance.graph, line, line_number)?;
    }

    debug!(
        "Parsed an instance with {} vertices and {} edges",
        instance.graph.num_vertices(),
        instance.graph.num_edges()
    );

    Ok(instance)
}

fn parse_color_declaration(line: &str, line_number: usize) -> Result<u32, EdgeListParseError> {
    let invalid_declaration = || EdgeListParseError::InvalidColorDeclaration {
        line: line_number,
        content: line.to_owned(),
    };

    let (_, value) = line.split_once('=').ok_or_else(invalid_declaration)?;
    let num_colors = value
        .trim()
        .parse::<u32>()
        .map_err(|_| invalid_declaration())?;

    if num_colors == 0 {
        return Err(EdgeListParseError::ZeroColors { line: line_number });
    }

    Ok(num_colors)
}

fn parse_graph_line(
    graph: &mut ConstraintGraph,
    line: &str,
    line_number: usize,
) -> Result<(), EdgeListParseError> {
    let names = line.split(',').map(str::trim).collect::<Vec<_>>();

    if names.iter().any(|name| name.is_empty()) {
        return Err(EdgeListParseError::EmptyVertexName { line: line_number });
    }

    match names.as_slice() {
        [name] => {
            let _ = graph.add_vertex(*name);
        }
        [u, v] => {
            if u == v {
                return Err(EdgeListParseError::SelfLoop {
                    line: line_number,
                    name: (*u).to_owned(),
                });
            }

            let u = graph.add_vertex(*u);
            let v = graph.add_vertex(*v);
            let _ = graph
                .add_edge(u, v)
                .map_err(|source| EdgeListParseError::InvalidEdge {
                    line: line_number,
                    source,
                })?;
        }
        _ => {
            return Err(EdgeListParseError::InvalidFieldCount {
                line: line_number,
                num_fields: names.len(),
            })
        }
    }

    Ok(())
}
