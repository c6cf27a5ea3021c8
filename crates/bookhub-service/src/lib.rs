//! # bookhub-service
//!
//! Business logic service layer for BookHub. Each service orchestrates
//! repositories and authentication primitives to implement
//! application-level use cases.
//!
//! Services follow constructor injection — all dependencies are provided
//! at construction time via `Arc` references.

pub mod auth;
pub mod book;
pub mod review;

pub use auth::AuthService;
pub use book::BookService;
pub use review::ReviewService;
