//! # bookhub-api
//!
//! HTTP API layer for BookHub built on Axum.
//!
//! Provides the REST endpoints, extractors, DTOs, and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod router;
pub mod state;

pub use app::run_server;
pub use router::build_router;
pub use state::AppState;
