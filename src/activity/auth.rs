//! HS256 verification of `/execute` bodies.
//!
//! The orchestrator posts the claims as a compact JWS
//! (`base64url(header).base64url(payload).base64url(signature)`) signed with
//! the shared activity secret. Nothing in the payload is looked at until the
//! signature over `header.payload` has been checked.

use super::SignedClaims;
use crate::config::Config;
use crate::error::{AuthError, ConfigError};
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use hmac::{Hmac, Mac};
use serde::Deserialize;
use sha2::Sha256;
use std::borrow::Cow;

type HmacSha256 = Hmac<Sha256>;

const SUPPORTED_ALGORITHM: &str = "HS256";

#[derive(Debug, Deserialize)]
struct JwsHeader {
    alg: String,
}

/// Verifies signed claims against the process-wide signing secret.
pub struct RequestAuthenticator {
    secret: Vec<u8>,
    leeway_secs: i64,
}

impl RequestAuthenticator {
    pub fn new(secret: &str, leeway_secs: u64) -> Self {
        Self {
            secret: secret.as_bytes().to_vec(),
            leeway_secs: i64::try_from(leeway_secs).unwrap_or(i64::MAX),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        Ok(Self::new(config.jwt_secret()?, config.auth.leeway_secs))
    }

    /// Verify `body` and decode its claims.
    pub fn verify(&self, body: &[u8]) -> Result<SignedClaims, AuthError> {
        self.verify_at(body, chrono::Utc::now().timestamp())
    }

    fn verify_at(&self, body: &[u8], now: i64) -> Result<SignedClaims, AuthError> {
        let token = extract_token(body)?;

        let mut segments = token.split('.');
        let (Some(header_b64), Some(payload_b64), Some(signature_b64), None) = (
            segments.next(),
            segments.next(),
            segments.next(),
            segments.next(),
        ) else {
            return Err(AuthError::Malformed);
        };

        let header: JwsHeader = decode_json(header_b64, "header")?;
        if header.alg != SUPPORTED_ALGORITHM {
            return Err(AuthError::Algorithm(header.alg));
        }

        let signature = decode_segment(signature_b64, "signature")?;
        let mut mac =
            HmacSha256::new_from_slice(&self.secret).map_err(|e| AuthError::Key(e.to_string()))?;
        mac.update(header_b64.as_bytes());
        mac.update(b".");
        mac.update(payload_b64.as_bytes());
        // Constant-time comparison
        mac.verify_slice(&signature)
            .map_err(|_| AuthError::Signature)?;

        let claims: SignedClaims = decode_json(payload_b64, "payload")?;
        self.check_time_claims(&claims, now)?;
        Ok(claims)
    }

    fn check_time_claims(&self, claims: &SignedClaims, now: i64) -> Result<(), AuthError> {
        if let Some(exp) = claims.exp
            && now > exp.saturating_add(self.leeway_secs)
        {
            return Err(AuthError::Expired { exp });
        }
        if let Some(nbf) = claims.nbf
            && now < nbf.saturating_sub(self.leeway_secs)
        {
            return Err(AuthError::NotYetValid { nbf });
        }
        Ok(())
    }
}

/// The raw body is the token; a JSON string literal wrapping it is accepted too.
fn extract_token(body: &[u8]) -> Result<Cow<'_, str>, AuthError> {
    let text = std::str::from_utf8(body)
        .map_err(|_| AuthError::Malformed)?
        .trim();
    if text.starts_with('"') {
        let unwrapped: String = serde_json::from_str(text).map_err(|_| AuthError::Malformed)?;
        return Ok(Cow::Owned(unwrapped.trim().to_string()));
    }
    if text.is_empty() {
        return Err(AuthError::Malformed);
    }
    Ok(Cow::Borrowed(text))
}

fn decode_segment(segment: &str, name: &'static str) -> Result<Vec<u8>, AuthError> {
    URL_SAFE_NO_PAD
        .decode(segment.trim_end_matches('='))
        .map_err(|_| AuthError::Encoding { segment: name })
}

fn decode_json<T: serde::de::DeserializeOwned>(
    segment: &str,
    name: &'static str,
) -> Result<T, AuthError> {
    let bytes = decode_segment(segment, name)?;
    serde_json::from_slice(&bytes).map_err(|e| AuthError::Json {
        segment: name,
        message: e.to_string(),
    })
}
