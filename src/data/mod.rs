//! The link graph input data.

pub use edges::EdgeRecord;
pub use league::League;

mod edges;
mod league;
