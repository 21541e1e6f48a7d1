//! PTV Timetable API (v3) client.
//!
//! This module provides a signed HTTP client for Public Transport Victoria's
//! timetable API, which serves real-time departure boards.
//!
//! Key characteristics of the API:
//! - Every request must carry `devid` and an HMAC-SHA1 `signature` of the
//!   path and query
//! - Times are ISO 8601 in UTC; estimates are `null` when no live data exists
//! - Departures are filtered by route type, stop, route and direction

mod client;
mod convert;
mod error;
mod signer;
mod types;

pub use client::{DEFAULT_MAX_RESULTS, DepartureSource, PtvClient, PtvConfig, departures_path};
pub use convert::{ConversionError, convert_departures};
pub use error::PtvError;
pub use signer::{Credentials, RequestSigner, SignError, SignedRequest, signature};
pub use types::{DepartureDto, DeparturesResponse};
