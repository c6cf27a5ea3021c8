//! Core trait definitions shared across BookHub crates.

pub mod cache;

pub use cache::CacheProvider;
