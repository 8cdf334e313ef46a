use crate::domain::errors::{DomainError, DomainResult};
use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::{DateTime, SubsecRound, Utc};

/// Digits kept after the second. Matches Postgres `timestamptz`.
pub const STORE_SUBSEC_DIGITS: u16 = 6;

const MAX_TOKEN_LEN: usize = 64;

/// Truncate `t` to the precision the store persists.
pub fn to_store_precision(t: DateTime<Utc>) -> DateTime<Utc> {
    t.trunc_subsecs(STORE_SUBSEC_DIGITS)
}

/// Keyset position in the article listing.
///
/// The wire form is the `created_at` value as microseconds since the Unix
/// epoch, base64url-encoded without padding, so it is safe in query strings
/// and header values alike. The empty token is the start of the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArticleCursor {
    pub created_at: DateTime<Utc>,
}

impl ArticleCursor {
    pub fn new(created_at: DateTime<Utc>) -> Self {
        Self { created_at }
    }

    pub fn start() -> Self {
        Self::new(DateTime::<Utc>::MIN_UTC)
    }

    pub fn is_start(&self) -> bool {
        self.created_at == DateTime::<Utc>::MIN_UTC
    }

    pub fn encode(&self) -> String {
        let micros = self.created_at.timestamp_micros();
        URL_SAFE_NO_PAD.encode(micros.to_string().as_bytes())
    }

    pub fn decode(token: &str) -> DomainResult<Self> {
        if token.is_empty() {
            return Ok(Self::start());
        }
        if token.len() > MAX_TOKEN_LEN {
            return Err(invalid(token));
        }

        let bytes = URL_SAFE_NO_PAD.decode(token).map_err(|_| invalid(token))?;
        let raw = std::str::from_utf8(&bytes).map_err(|_| invalid(token))?;
        let micros = raw.parse::<i64>().map_err(|_| invalid(token))?;
        let created_at =
            DateTime::<Utc>::from_timestamp_micros(micros).ok_or_else(|| invalid(token))?;
        Ok(Self::new(created_at))
    }
}

fn invalid(token: &str) -> DomainError {
    DomainError::bad_param(format!("invalid cursor token {token:?}"))
}
