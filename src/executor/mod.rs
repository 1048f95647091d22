//! The two-stage aggregation pipeline.

pub use count::{count_links, count_map, count_reduce};
pub use rank::{rank_league, rank_map, rank_reduce};

mod count;
mod rank;
