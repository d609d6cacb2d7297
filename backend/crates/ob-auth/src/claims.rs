use serde::{Deserialize, Serialize};

/// Decoded token payload.
///
/// Timestamps are unix seconds. `expires_at == 0` is accepted by the decoder
/// and never expires; the issuer always writes a positive value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenClaims {
    pub subject_id: i64,
    /// Informational only, the account record decides the tenant
    pub tenant_id: i64,
    pub issued_at: i64,
    pub expires_at: i64,
}

/// Payload as written on the wire. Field order is the serialization order.
///
/// On decode a missing or `null` integer claim reads as zero.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct WireClaims {
    pub exp: Option<i64>,
    pub iat: Option<i64>,
    pub restaurant_id: Option<i64>,
    pub sub: Option<String>,
    pub user_id: Option<i64>,
}

impl WireClaims {
    pub fn exp(&self) -> i64 {
        self.exp.unwrap_or_default()
    }

    pub fn iat(&self) -> i64 {
        self.iat.unwrap_or_default()
    }

    pub fn restaurant_id(&self) -> i64 {
        self.restaurant_id.unwrap_or_default()
    }

    pub fn user_id(&self) -> i64 {
        self.user_id.unwrap_or_default()
    }
}

impl From<&TokenClaims> for WireClaims {
    fn from(claims: &TokenClaims) -> Self {
        Self {
            exp: Some(claims.expires_at),
            iat: Some(claims.issued_at),
            restaurant_id: Some(claims.tenant_id),
            sub: Some(claims.subject_id.to_string()),
            user_id: Some(claims.subject_id),
        }
    }
}

/// Where a subject id may be read from, tried in [`SubjectSource::ORDERED`] order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubjectSource {
    /// Numeric `user_id` claim
    UserId,
    /// Decimal string `sub` claim
    Sub,
}

impl SubjectSource {
    pub const ORDERED: [SubjectSource; 2] = [SubjectSource::UserId, SubjectSource::Sub];

    /// Zero counts as absent.
    pub(crate) fn extract(self, claims: &WireClaims) -> Option<i64> {
        let id = match self {
            Self::UserId => claims.user_id(),
            Self::Sub => claims.sub.as_deref()?.parse::<i64>().ok()?,
        };
        (id != 0).then_some(id)
    }

    pub(crate) fn resolve(claims: &WireClaims) -> Option<i64> {
        Self::ORDERED
            .iter()
            .find_map(|source| source.extract(claims))
    }
}
