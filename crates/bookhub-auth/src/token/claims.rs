//! JWT claims structure used in access and refresh tokens.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bookhub_entity::user::UserRole;

/// JWT claims payload embedded in every token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject — the user ID.
    pub sub: Uuid,
    /// User email at the time of token issuance.
    pub email: String,
    /// User role at the time of token issuance.
    pub role: UserRole,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
    /// JWT ID, unique per issued token, used for revocation tracking.
    pub jti: Uuid,
    /// Whether this is a refresh token.
    pub refresh: bool,
}

/// The class of token an endpoint expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenClass {
    /// Short-lived access token for API requests.
    Access,
    /// Long-lived refresh token for obtaining new access tokens.
    Refresh,
}

impl TokenClaims {
    /// Returns the user ID from the subject claim.
    pub fn user_id(&self) -> Uuid {
        self.sub
    }

    /// Returns the class of this token.
    pub fn class(&self) -> TokenClass {
        if self.refresh {
            TokenClass::Refresh
        } else {
            TokenClass::Access
        }
    }

    /// Returns the expiration as a `DateTime<Utc>`.
    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or_else(Utc::now)
    }

    /// Returns the remaining lifetime in seconds (0 if expired).
    pub fn remaining_ttl_seconds(&self) -> u64 {
        let remaining = self.exp - Utc::now().timestamp();
        if remaining > 0 { remaining as u64 } else { 0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims(refresh: bool, exp_offset_secs: i64) -> TokenClaims {
        let now = Utc::now().timestamp();
        TokenClaims {
            sub: Uuid::new_v4(),
            email: "reader@example.com".to_string(),
            role: UserRole::User,
            iat: now,
            exp: now + exp_offset_secs,
            jti: Uuid::new_v4(),
            refresh,
        }
    }

    #[test]
    fn test_class_follows_refresh_flag() {
        assert_eq!(claims(false, 60).class(), TokenClass::Access);
        assert_eq!(claims(true, 60).class(), TokenClass::Refresh);
    }

    #[test]
    fn test_remaining_ttl_floors_at_zero() {
        assert_eq!(claims(false, -30).remaining_ttl_seconds(), 0);
        let live = claims(false, 120).remaining_ttl_seconds();
        assert!(live > 100 && live <= 120);
    }
}
