//! PTV client error types.

use super::signer::SignError;

/// Errors from the PTV HTTP client.
#[derive(Debug, thiserror::Error)]
pub enum PtvError {
    /// HTTP request failed (connection refused, DNS, TLS, ...)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API answered with something other than 200 OK
    #[error("API error {status}")]
    Status { status: u16 },

    /// API answered 200 but the body is not a usable departure board
    #[error("malformed payload: {message}")]
    MalformedPayload { message: String },

    /// The request could not be signed
    #[error(transparent)]
    Sign(#[from] SignError),
}

impl PtvError {
    /// True when the failure only means "no departure data right now".
    ///
    /// Signing failures are configuration problems and do not count.
    pub const fn is_no_data(&self) -> bool {
        !matches!(self, Self::Sign(_))
    }
}
