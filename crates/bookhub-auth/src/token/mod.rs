//! JWT token issuance and verification.

pub mod claims;
pub mod issuer;
pub mod verifier;

pub use claims::{TokenClaims, TokenClass};
pub use issuer::{TokenIssuer, TokenPair};
pub use verifier::TokenVerifier;

use jsonwebtoken::Algorithm;

use bookhub_core::error::AppError;

/// Maps the configured algorithm name to a `jsonwebtoken` algorithm.
fn signing_algorithm(name: &str) -> Result<Algorithm, AppError> {
    match name {
        "HS256" => Ok(Algorithm::HS256),
        "HS384" => Ok(Algorithm::HS384),
        "HS512" => Ok(Algorithm::HS512),
        other => Err(AppError::configuration(format!(
            "Unsupported JWT algorithm: '{other}'"
        ))),
    }
}
