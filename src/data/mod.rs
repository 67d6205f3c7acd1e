//! Graph input module

pub mod parser;

pub use parser::{load_graph_definition, parse_graph_definition, parse_graph_str};
