//! Capability token issuance and verification.
//!
//! Wire format: `base64url(JSON{rid,exp}) + "." + base64url(HMAC-SHA256)`.
//! The MAC is computed over the UTF-8 bytes of the *encoded* payload string,
//! not the raw JSON, so the base64url encoding is part of the signing
//! contract and must stay bit-exact.

use std::time::{SystemTime, UNIX_EPOCH};

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use crate::state::security_config::SecurityConfig;
use crate::AppError;

type HmacSha256 = Hmac<Sha256>;

/// Fixed token lifetime. Tokens are reissued on demand, never refreshed.
pub const TOKEN_TTL_MS: i64 = 60_000;

/// Signed payload of a capability token.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AccessClaims {
    /// Opaque identifier of the gated resource.
    pub rid: String,
    /// Absolute expiry instant, epoch milliseconds.
    pub exp: i64,
}

/// base64url without padding: standard base64 with `+` → `-`, `/` → `_`
/// and trailing `=` stripped.
pub fn b64url_encode(bytes: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(bytes)
}

pub fn b64url_decode(encoded: &str) -> Result<Vec<u8>, AppError> {
    URL_SAFE_NO_PAD
        .decode(encoded)
        .map_err(|_| AppError::unauthorized_invalid_signature())
}

fn unix_millis(now: SystemTime) -> Result<i64, AppError> {
    now.duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .map_err(|_| AppError::internal("system clock is before the Unix epoch".to_string()))
}

fn mac_over(message: &[u8], secret: &[u8]) -> Result<Vec<u8>, AppError> {
    let mut mac = HmacSha256::new_from_slice(secret)
        .map_err(|_| AppError::internal("failed to initialize HMAC".to_string()))?;
    mac.update(message);
    Ok(mac.finalize().into_bytes().to_vec())
}

/// Mint a signed capability token for `rid`, valid for [`TOKEN_TTL_MS`]
/// from `now`.
pub fn issue_token(
    rid: &str,
    now: SystemTime,
    security: &SecurityConfig,
) -> Result<String, AppError> {
    if rid.trim().is_empty() {
        return Err(AppError::bad_request(
            "MISSING_RID",
            "Resource id is required".to_string(),
        ));
    }
    if security.gate_secret.is_empty() {
        return Err(AppError::config("token signing secret is not set".to_string()));
    }

    let claims = AccessClaims {
        rid: rid.to_string(),
        exp: unix_millis(now)? + TOKEN_TTL_MS,
    };

    let payload_json = serde_json::to_vec(&claims)
        .map_err(|e| AppError::internal(format!("failed to serialize claims: {e}")))?;
    let payload = b64url_encode(&payload_json);
    let signature = b64url_encode(&mac_over(payload.as_bytes(), &security.gate_secret)?);

    Ok(format!("{payload}.{signature}"))
}

/// Verify a capability token and return its claims.
///
/// The signature is recomputed over the payload segment and compared in
/// constant time before the payload is parsed. A token is accepted up to
/// and *including* its `exp` instant; only `now > exp` is expired.
pub fn verify_token(
    token: &str,
    now: SystemTime,
    security: &SecurityConfig,
) -> Result<AccessClaims, AppError> {
    if security.gate_secret.is_empty() {
        return Err(AppError::config("token signing secret is not set".to_string()));
    }

    // Split on the last '.' so a payload containing dots can never confuse
    // the signature boundary.
    let (payload, signature) = token
        .rsplit_once('.')
        .ok_or_else(AppError::unauthorized_invalid_signature)?;

    let provided = b64url_decode(signature)?;
    let expected = mac_over(payload.as_bytes(), &security.gate_secret)?;
    if provided.ct_eq(expected.as_slice()).unwrap_u8() != 1 {
        return Err(AppError::unauthorized_invalid_signature());
    }

    let claims: AccessClaims = serde_json::from_slice(&b64url_decode(payload)?)
        .map_err(|_| AppError::unauthorized_invalid_signature())?;

    if unix_millis(now)? > claims.exp {
        return Err(AppError::unauthorized_expired_token());
    }

    Ok(claims)
}
