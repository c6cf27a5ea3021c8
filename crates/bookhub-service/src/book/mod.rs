//! Book catalogue services.

pub mod service;

pub use service::BookService;
