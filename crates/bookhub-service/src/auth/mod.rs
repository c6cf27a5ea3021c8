//! Account and token lifecycle services.

pub mod service;
pub mod store;

pub use service::{AuthService, LoginOutcome, SignupData};
pub use store::UserStore;
