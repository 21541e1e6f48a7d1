//! PTV Timetable API HTTP client.
//!
//! Fetches the departure board for a catalog stop. Every request is signed
//! afresh; nothing is cached and failed requests are not retried.

use std::future::Future;

use tracing::{debug, trace};

use crate::domain::{DepartureBoard, StopRecord};

use super::convert::convert_departures;
use super::error::PtvError;
use super::signer::{Credentials, RequestSigner, SignedRequest};
use super::types::DeparturesResponse;

/// Default number of departures to request: the next train, plus the one
/// after it for when the next is about to leave.
pub const DEFAULT_MAX_RESULTS: u8 = 2;

/// Configuration for the PTV client.
#[derive(Debug, Clone)]
pub struct PtvConfig {
    /// Developer id, signing key and API host
    pub credentials: Credentials,
    /// Scheme and host override (for testing)
    pub base_url: Option<String>,
    /// Departures requested per board
    pub max_results: u8,
}

impl PtvConfig {
    /// Create a new config with the given credentials.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            base_url: None,
            max_results: DEFAULT_MAX_RESULTS,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set how many departures to request.
    pub fn with_max_results(mut self, n: u8) -> Self {
        self.max_results = n;
        self
    }
}

/// Anything that can produce a departure board for a stop.
///
/// An `Err` that [`PtvError::is_no_data`] is the "no data" signal; callers
/// degrade gracefully on it.
pub trait DepartureSource {
    fn departures(
        &self,
        stop: &StopRecord,
    ) -> impl Future<Output = Result<DepartureBoard, PtvError>> + Send;
}

/// PTV Timetable API client.
#[derive(Debug, Clone)]
pub struct PtvClient {
    http: reqwest::Client,
    signer: RequestSigner,
    max_results: u8,
}

impl PtvClient {
    /// Create a new PTV client with the given configuration.
    pub fn new(config: PtvConfig) -> Result<Self, PtvError> {
        // Transport defaults throughout, including the timeout
        let http = reqwest::Client::builder().build()?;

        let mut signer = RequestSigner::new(config.credentials);
        if let Some(base_url) = config.base_url {
            signer = signer.with_base_url(base_url);
        }

        Ok(Self {
            http,
            signer,
            max_results: config.max_results,
        })
    }

    /// Build the signed departures request for a stop.
    pub fn departures_request(&self, stop: &StopRecord) -> Result<SignedRequest, PtvError> {
        let path = departures_path(stop, self.max_results);
        Ok(self.signer.sign(&path)?)
    }

    /// Get the departure board for a stop's configured route and direction.
    pub async fn get_departures(&self, stop: &StopRecord) -> Result<DepartureBoard, PtvError> {
        let request = self.departures_request(stop)?;
        trace!(url = %request, "requesting departures");

        let response = self.http.get(request.url()).send().await?;
        let status = response.status();

        if status != reqwest::StatusCode::OK {
            debug!(status = status.as_u16(), stop = %stop.name, "departures request refused");
            return Err(PtvError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        trace!(body = %body, "departures response");

        let parsed: DeparturesResponse =
            serde_json::from_str(&body).map_err(|e| PtvError::MalformedPayload {
                message: e.to_string(),
            })?;

        convert_departures(&parsed).map_err(|e| PtvError::MalformedPayload {
            message: e.to_string(),
        })
    }
}

impl DepartureSource for PtvClient {
    fn departures(
        &self,
        stop: &StopRecord,
    ) -> impl Future<Output = Result<DepartureBoard, PtvError>> + Send {
        self.get_departures(stop)
    }
}

/// Path and query for a stop's departures, before signing.
pub fn departures_path(stop: &StopRecord, max_results: u8) -> String {
    format!(
        "/v3/departures/route_type/{}/stop/{}/route/{}?direction_id={}&max_results={}&include_cancelled=false",
        stop.route_type, stop.stop_id, stop.route_id, stop.direction_id, max_results
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials() -> Credentials {
        Credentials::new("3000165", "secret", "timetableapi.ptv.vic.gov.au").unwrap()
    }

    fn mckinnon() -> StopRecord {
        StopRecord {
            name: "McKinnon".to_string(),
            latitude: -37.9110,
            longitude: 145.0380,
            stop_id: "1119".to_string(),
            route_type: "0".to_string(),
            route_id: "6".to_string(),
            direction_id: "1".to_string(),
        }
    }

    #[test]
    fn config_builder() {
        let config = PtvConfig::new(credentials())
            .with_base_url("http://localhost:8080")
            .with_max_results(1);

        assert_eq!(config.base_url.as_deref(), Some("http://localhost:8080"));
        assert_eq!(config.max_results, 1);
    }

    #[test]
    fn config_defaults() {
        let config = PtvConfig::new(credentials());

        assert_eq!(config.base_url, None);
        assert_eq!(config.max_results, DEFAULT_MAX_RESULTS);
    }

    #[test]
    fn client_creation() {
        let client = PtvClient::new(PtvConfig::new(credentials()));
        assert!(client.is_ok());
    }

    #[test]
    fn path_for_stop() {
        assert_eq!(
            departures_path(&mckinnon(), 2),
            "/v3/departures/route_type/0/stop/1119/route/6?direction_id=1&max_results=2&include_cancelled=false"
        );
    }

    #[test]
    fn request_for_stop_is_signed() {
        let client = PtvClient::new(PtvConfig::new(credentials())).unwrap();
        let request = client.departures_request(&mckinnon()).unwrap();

        assert!(request.url().starts_with(
            "https://timetableapi.ptv.vic.gov.au/v3/departures/route_type/0/stop/1119/route/6?"
        ));
        assert!(request.url().contains("&devid=3000165&signature="));
        assert!(!request.url().contains("secret"));
    }
}
