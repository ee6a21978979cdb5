//! Shared building blocks for the per-bank rules.

pub mod matcher;
pub mod normalize;

pub use matcher::Alternatives;
pub use normalize::{clean_amount, format_date};
