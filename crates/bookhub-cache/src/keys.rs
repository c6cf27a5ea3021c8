//! Cache key builders for all BookHub cache entries.
//!
//! Centralising key construction prevents typos and makes it easy
//! to find every key the application uses. Keys are logical; the
//! deployment-wide prefix is applied by the Redis provider.

use uuid::Uuid;

/// Cache key for a revoked token, keyed by its JWT ID.
pub fn token_blocklist(jti: Uuid) -> String {
    format!("jwt:blocklist:{jti}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blocklist_key() {
        let jti = Uuid::nil();
        assert_eq!(
            token_blocklist(jti),
            "jwt:blocklist:00000000-0000-0000-0000-000000000000"
        );
    }
}
