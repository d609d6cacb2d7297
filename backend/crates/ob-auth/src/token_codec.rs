//! Compact HS256 token codec.
//!
//! Format: `b64(header) "." b64(payload) "." b64(HMAC-SHA256(secret, b64(header) "." b64(payload)))`,
//! every segment base64url without padding. The header is fixed and never
//! parsed on decode.
//!
//! Decoding verifies the MAC over the segments exactly as received before the
//! payload is looked at, so a tampered payload is never partially trusted.

use crate::claims::{SubjectSource, WireClaims};
use crate::{TokenClaims, TokenError, TokenResult};

use std::fmt;
use std::panic::Location;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::Utc;
use error_location::ErrorLocation;
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

const HEADER_JSON: &str = r#"{"alg":"HS256","typ":"JWT"}"#;

/// Issues and verifies signed tokens with a process-wide secret.
#[derive(Clone)]
pub struct TokenCodec {
    mac: HmacSha256,
}

impl TokenCodec {
    #[track_caller]
    pub fn new(secret: &[u8]) -> TokenResult<Self> {
        if secret.is_empty() {
            return Err(TokenError::InvalidSecret {
                message: "secret must not be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let mac = HmacSha256::new_from_slice(secret).map_err(|e| TokenError::InvalidSecret {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

        Ok(Self { mac })
    }

    /// Sign `claims` into a compact token.
    ///
    /// `expires_at` must be later than `issued_at`; anything else is an
    /// [`TokenError::Encode`]. A zero expiry is only ever accepted on decode.
    #[track_caller]
    pub fn issue(&self, claims: &TokenClaims) -> TokenResult<String> {
        if claims.expires_at <= claims.issued_at {
            return Err(TokenError::Encode {
                message: format!(
                    "expires_at {} is not after issued_at {}",
                    claims.expires_at, claims.issued_at
                ),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let payload =
            serde_json::to_vec(&WireClaims::from(claims)).map_err(|e| TokenError::Encode {
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        let signing_input = format!(
            "{}.{}",
            URL_SAFE_NO_PAD.encode(HEADER_JSON),
            URL_SAFE_NO_PAD.encode(payload)
        );
        let signature = URL_SAFE_NO_PAD.encode(self.sign(signing_input.as_bytes()));

        Ok(format!("{}.{}", signing_input, signature))
    }

    /// Decode against the wall clock.
    #[track_caller]
    pub fn decode(&self, token: &str) -> TokenResult<TokenClaims> {
        self.decode_at(token, Utc::now().timestamp())
    }

    /// Decode as if the current unix time were `now`.
    #[track_caller]
    pub fn decode_at(&self, token: &str, now: i64) -> TokenResult<TokenClaims> {
        let segments: Vec<&str> = token.split('.').collect();
        let &[header, payload, signature] = segments.as_slice() else {
            return Err(TokenError::malformed(format!(
                "expected 3 segments, found {}",
                segments.len()
            )));
        };

        let signature = URL_SAFE_NO_PAD
            .decode(signature)
            .map_err(|e| TokenError::malformed(format!("signature: {}", e)))?;

        let signing_input = &token[..header.len() + 1 + payload.len()];
        let mut mac = self.mac.clone();
        mac.update(signing_input.as_bytes());
        mac.verify_slice(&signature)
            .map_err(|_| TokenError::BadSignature {
                location: ErrorLocation::from(Location::caller()),
            })?;

        let payload = URL_SAFE_NO_PAD
            .decode(payload)
            .map_err(|e| TokenError::malformed(format!("payload: {}", e)))?;
        let wire = parse_claims(&payload)?;

        let subject_id =
            SubjectSource::resolve(&wire).ok_or_else(|| TokenError::MissingSubject {
                location: ErrorLocation::from(Location::caller()),
            })?;

        let expires_at = wire.exp();
        if expires_at != 0 && now > expires_at {
            return Err(TokenError::Expired {
                expires_at,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(TokenClaims {
            subject_id,
            tenant_id: wire.restaurant_id(),
            issued_at: wire.iat(),
            expires_at,
        })
    }

    fn sign(&self, input: &[u8]) -> Vec<u8> {
        let mut mac = self.mac.clone();
        mac.update(input);
        mac.finalize().into_bytes().to_vec()
    }
}

/// The payload must be a JSON object; a derived struct alone would also
/// accept an array.
#[track_caller]
fn parse_claims(payload: &[u8]) -> TokenResult<WireClaims> {
    let value: serde_json::Value = serde_json::from_slice(payload)
        .map_err(|e| TokenError::malformed(format!("claims: {}", e)))?;
    if !value.is_object() {
        return Err(TokenError::malformed("claims: payload is not a JSON object"));
    }
    serde_json::from_value(value).map_err(|e| TokenError::malformed(format!("claims: {}", e)))
}

impl fmt::Debug for TokenCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenCodec")
            .field("algorithm", &"HS256")
            .finish_non_exhaustive()
    }
}
