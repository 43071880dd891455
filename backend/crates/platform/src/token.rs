//! Bearer Token Signing and Verification
//!
//! Short-lived JWTs signed with a shared HMAC secret.
//!
//! ## Token contract
//! - Issued with `HS256`
//! - Claims: `user_id`, `iat`, `exp` (unix seconds)
//! - Lifetime: 24 hours
//! - Verification accepts only the HMAC family (`HS256`/`HS384`/`HS512`)
//!   and requires an unexpired `exp` with no leeway

use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

// ============================================================================
// Constants
// ============================================================================

/// Token lifetime in seconds (24 hours)
pub const TOKEN_TTL_SECS: i64 = 24 * 60 * 60;

/// Algorithms accepted when verifying a token
const ACCEPTED_ALGORITHMS: [Algorithm; 3] = [Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];

// ============================================================================
// Error Types
// ============================================================================

/// Token signing/verification errors
#[derive(Debug, Error)]
pub enum TokenError {
    /// No signing secret configured
    #[error("Token secret is not configured")]
    MissingSecret,

    /// Signing failed
    #[error("Token signing failed: {0}")]
    Signing(#[source] jsonwebtoken::errors::Error),

    /// Malformed, expired, tampered, or otherwise rejected token
    #[error("Token rejected: {0}")]
    Rejected(#[source] jsonwebtoken::errors::Error),
}

// ============================================================================
// Claims
// ============================================================================

/// Claims carried by an issued token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub user_id: i64,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    /// Claims for `user_id`, issued at `issued_at` and expiring one TTL later
    pub fn new(user_id: i64, issued_at: DateTime<Utc>) -> Self {
        let iat = issued_at.timestamp();
        Self {
            user_id,
            iat,
            exp: iat + TOKEN_TTL_SECS,
        }
    }

    /// Claims issued now
    pub fn issue_now(user_id: i64) -> Self {
        Self::new(user_id, Utc::now())
    }
}

/// Sign claims with `HS256`
pub fn sign(claims: &Claims, secret: &str) -> Result<String, TokenError> {
    if secret.is_empty() {
        return Err(TokenError::MissingSecret);
    }

    encode(
        &Header::new(Algorithm::HS256),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(TokenError::Signing)
}

// ============================================================================
// Verification
// ============================================================================

/// A token whose signature and expiry have been checked
///
/// The payload is kept as loose JSON; callers decide how strictly to
/// interpret individual claims.
#[derive(Debug, Clone)]
pub struct VerifiedToken {
    claims: Map<String, Value>,
}

impl VerifiedToken {
    /// The `user_id` claim as a positive integer
    ///
    /// Integral JSON floats (e.g. `7.0`) are accepted. Anything else,
    /// including a missing claim, yields `None`.
    pub fn user_id(&self) -> Option<i64> {
        match self.claims.get("user_id")? {
            Value::Number(n) => n
                .as_i64()
                .or_else(|| {
                    n.as_f64()
                        .filter(|f| f.fract() == 0.0 && *f < i64::MAX as f64)
                        .map(|f| f as i64)
                })
                .filter(|id| *id > 0),
            _ => None,
        }
    }
}

/// Verify signature, algorithm family and expiry
///
/// A token without an `exp` claim is rejected, not treated as non-expiring.
pub fn verify(token: &str, secret: &str) -> Result<VerifiedToken, TokenError> {
    if secret.is_empty() {
        return Err(TokenError::MissingSecret);
    }

    let mut validation = Validation::new(Algorithm::HS256);
    validation.algorithms = ACCEPTED_ALGORITHMS.to_vec();
    validation.leeway = 0;
    validation.validate_exp = true;
    validation.set_required_spec_claims(&["exp"]);

    let data = decode::<Map<String, Value>>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(TokenError::Rejected)?;

    Ok(VerifiedToken {
        claims: data.claims,
    })
}

// ============================================================================
// Tests
// ============================================================================
