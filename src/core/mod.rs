pub mod config;
pub mod export;
pub mod query;
pub mod summarizer;
pub mod summary;

pub use summarizer::{checked_sum_range, compute_bounds, format_hm, sum_range};
