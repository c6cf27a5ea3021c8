//! Book review services.

pub mod service;

pub use service::{NewReview, ReviewService};
