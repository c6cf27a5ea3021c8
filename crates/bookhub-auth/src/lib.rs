//! # bookhub-auth
//!
//! Authentication and authorization primitives for BookHub.
//!
//! ## Modules
//!
//! - `password` — Argon2id password hashing and verification
//! - `token` — JWT issuance and signature/expiry verification
//! - `revocation` — cache-backed token blocklist
//! - `guard` — composed token admission for protected endpoints
//! - `rbac` — role gates for endpoint authorization

pub mod guard;
pub mod password;
pub mod rbac;
pub mod revocation;
pub mod token;

pub use guard::TokenGuard;
pub use password::PasswordHasher;
pub use rbac::RoleGate;
pub use revocation::RevocationList;
pub use token::{TokenClaims, TokenClass, TokenIssuer, TokenPair, TokenVerifier};
