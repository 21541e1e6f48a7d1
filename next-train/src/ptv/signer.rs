//! Request signing for the PTV Timetable API.
//!
//! Every request carries the developer id and an HMAC-SHA1 signature of its
//! path and query string, keyed by the shared secret:
//!
//! ```text
//! https://<host>/v3/routes?devid=3000165&signature=<40 lowercase hex chars>
//! ```
//!
//! The signed bytes are the ISO-8859-1 encoding of `path?query&devid=<id>`.

use std::fmt;

use hmac::{Hmac, Mac};
use sha1::Sha1;

type HmacSha1 = Hmac<Sha1>;

/// Errors raised while preparing a signed request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SignError {
    /// A credential is absent or empty
    #[error("missing credential: {0}")]
    MissingCredential(&'static str),

    /// The text cannot be encoded one byte per character
    #[error("cannot sign {ch:?}: outside ISO-8859-1")]
    NotLatin1 { ch: char },

    /// The MAC rejected the key. HMAC takes keys of any length, so this
    /// only surfaces if the hash primitive changes.
    #[error("invalid signing key: {message}")]
    InvalidKey { message: String },
}

/// Developer credentials issued by PTV.
///
/// `Debug` never prints the key.
#[derive(Clone)]
pub struct Credentials {
    dev_id: String,
    key: String,
    endpoint: String,
}

impl Credentials {
    /// Create credentials. Every part must be non-empty.
    pub fn new(
        dev_id: impl Into<String>,
        key: impl Into<String>,
        endpoint: impl Into<String>,
    ) -> Result<Self, SignError> {
        let dev_id = required(dev_id.into(), "id")?;
        let key = required(key.into(), "key")?;
        let endpoint = required(endpoint.into(), "endpoint")?;
        Ok(Self {
            dev_id,
            key,
            endpoint,
        })
    }

    pub fn dev_id(&self) -> &str {
        &self.dev_id
    }

    /// API host name, without scheme.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("dev_id", &self.dev_id)
            .field("key", &"<redacted>")
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

fn required(value: String, name: &'static str) -> Result<String, SignError> {
    if value.trim().is_empty() {
        Err(SignError::MissingCredential(name))
    } else {
        Ok(value)
    }
}

/// A fully-qualified, signed request URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedRequest {
    url: String,
}

impl SignedRequest {
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for SignedRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

/// Turns path fragments into signed URLs.
#[derive(Debug, Clone)]
pub struct RequestSigner {
    credentials: Credentials,
    base_url: String,
}

impl RequestSigner {
    /// Create a signer targeting `https://<endpoint>`.
    pub fn new(credentials: Credentials) -> Self {
        let base_url = format!("https://{}", credentials.endpoint);
        Self {
            credentials,
            base_url,
        }
    }

    /// Send requests to a different scheme and host (for testing).
    ///
    /// The signature only covers the path and query, so it is unchanged.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Sign a path and optional query, e.g. `/v3/routes?route_types=0`.
    pub fn sign(&self, fragment: &str) -> Result<SignedRequest, SignError> {
        let separator = if fragment.contains('?') { '&' } else { '?' };
        let raw = format!("{fragment}{separator}devid={}", self.credentials.dev_id);
        let signature = signature(&self.credentials.key, &raw)?;

        Ok(SignedRequest {
            url: format!("{}{raw}&signature={signature}", self.base_url),
        })
    }
}

/// Lowercase hex HMAC-SHA1 of `message` under `key`, both encoded as
/// ISO-8859-1.
pub fn signature(key: &str, message: &str) -> Result<String, SignError> {
    let mut mac = HmacSha1::new_from_slice(&latin1(key)?)
        .map_err(|e| SignError::InvalidKey {
            message: e.to_string(),
        })?;
    mac.update(&latin1(message)?);
    Ok(hex::encode(mac.finalize().into_bytes()))
}

fn latin1(s: &str) -> Result<Vec<u8>, SignError> {
    s.chars()
        .map(|ch| u8::try_from(u32::from(ch)).map_err(|_| SignError::NotLatin1 { ch }))
        .collect()
}
