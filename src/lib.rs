//! Popularity league ranking over page link graphs.

pub mod data;
pub mod error;
pub mod executor;
pub mod front_end;
pub mod task;
pub mod types;
