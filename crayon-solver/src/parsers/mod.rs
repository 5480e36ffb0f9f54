//! Parsers for the instance formats which can be solved by Crayon.
pub mod edge_list;
