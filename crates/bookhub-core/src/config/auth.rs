//! Authentication configuration.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Authentication and token configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for JWT signing.
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// HMAC signing algorithm: `"HS256"`, `"HS384"`, or `"HS512"`.
    #[serde(default = "default_jwt_algorithm")]
    pub jwt_algorithm: String,
    /// Access token TTL in minutes.
    #[serde(default = "default_access_ttl")]
    pub access_ttl_minutes: u64,
    /// Refresh token TTL in days.
    #[serde(default = "default_refresh_ttl")]
    pub refresh_ttl_days: u64,
    /// Minimum TTL for a revocation entry in seconds.
    ///
    /// A token revoked moments before its natural expiry still gets at
    /// least this long on the blocklist, covering clock skew between
    /// issuer and verifier.
    #[serde(default = "default_revocation_floor")]
    pub revocation_floor_seconds: u64,
}

impl AuthConfig {
    /// Validate invariants that cannot be expressed through serde defaults.
    ///
    /// The refresh-token lifetime must exceed the access-token lifetime,
    /// and the signing algorithm must be one of the supported HMAC variants.
    pub fn validate(&self) -> Result<(), AppError> {
        let access_secs = self.access_ttl_minutes * 60;
        let refresh_secs = self.refresh_ttl_days * 86_400;
        if refresh_secs <= access_secs {
            return Err(AppError::configuration(format!(
                "Refresh token TTL ({} days) must exceed access token TTL ({} minutes)",
                self.refresh_ttl_days, self.access_ttl_minutes
            )));
        }

        match self.jwt_algorithm.as_str() {
            "HS256" | "HS384" | "HS512" => Ok(()),
            other => Err(AppError::configuration(format!(
                "Unsupported JWT algorithm: '{other}'. Expected one of: HS256, HS384, HS512"
            ))),
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            jwt_algorithm: default_jwt_algorithm(),
            access_ttl_minutes: default_access_ttl(),
            refresh_ttl_days: default_refresh_ttl(),
            revocation_floor_seconds: default_revocation_floor(),
        }
    }
}

fn default_jwt_secret() -> String {
    "CHANGE_ME_IN_PRODUCTION".to_string()
}

fn default_jwt_algorithm() -> String {
    "HS256".to_string()
}

fn default_access_ttl() -> u64 {
    15
}

fn default_refresh_ttl() -> u64 {
    2
}

fn default_revocation_floor() -> u64 {
    60
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(AuthConfig::default().validate().is_ok());
    }

    #[test]
    fn test_refresh_must_outlive_access() {
        let config = AuthConfig {
            access_ttl_minutes: 3 * 24 * 60,
            refresh_ttl_days: 2,
            ..AuthConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_algorithm_rejected() {
        let config = AuthConfig {
            jwt_algorithm: "RS256".to_string(),
            ..AuthConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
