//! Line-oriented record parsing.

pub use parser::{parse_count, parse_edge, parse_member};

pub(crate) use parser::RecordRule;

pub mod error;

mod parser;
