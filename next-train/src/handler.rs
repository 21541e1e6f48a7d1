//! Per-request orchestration: nearest stop, then departures, then message.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use tracing::{debug, info, warn};

use crate::domain::{Coordinate, InvalidCoordinate};
use crate::geo::NearestStopResolver;
use crate::message::{departure_message, too_far_message};
use crate::ptv::{DepartureSource, PtvError};

/// Callers further than this from every stop get a "too far" reply.
pub const DEFAULT_MAX_DISTANCE_KM: f64 = 100.0;

/// Failures that stop a request from producing a message at all.
///
/// Upstream outages and distant callers are not errors: they produce
/// informational messages.
#[derive(Debug, thiserror::Error)]
pub enum HandlerError {
    /// The caller's position could not be read
    #[error(transparent)]
    InvalidCoordinate(#[from] InvalidCoordinate),

    /// The upstream request could not be made at all, e.g. unsigned
    #[error(transparent)]
    Upstream(#[from] PtvError),
}

/// Answers "when is the next train from my nearest station?".
#[derive(Debug)]
pub struct NextTrain<S> {
    resolver: NearestStopResolver,
    source: S,
    timezone: Tz,
    max_distance_km: f64,
}

impl<S: DepartureSource> NextTrain<S> {
    pub fn new(resolver: NearestStopResolver, source: S, timezone: Tz) -> Self {
        Self {
            resolver,
            source,
            timezone,
            max_distance_km: DEFAULT_MAX_DISTANCE_KM,
        }
    }

    /// Set the service radius.
    pub fn with_max_distance_km(mut self, km: f64) -> Self {
        self.max_distance_km = km;
        self
    }

    /// Answer for raw latitude/longitude strings, as of now.
    pub async fn respond(&self, latitude: &str, longitude: &str) -> Result<String, HandlerError> {
        let origin = Coordinate::parse(latitude, longitude)?;
        self.respond_at(origin, Utc::now()).await
    }

    /// Answer for a parsed position as of `now`.
    pub async fn respond_at(
        &self,
        origin: Coordinate,
        now: DateTime<Utc>,
    ) -> Result<String, HandlerError> {
        let nearest = self.resolver.resolve(origin);
        let stop = nearest.stop;
        debug!(
            stop = %stop.name,
            distance_km = nearest.distance_km,
            "resolved nearest stop"
        );

        if nearest.distance_km > self.max_distance_km {
            info!(
                stop = %stop.name,
                distance_km = nearest.distance_km,
                "caller outside service radius"
            );
            return Ok(too_far_message(&stop.name, nearest.distance_km));
        }

        let board = match self.source.departures(stop).await {
            Ok(board) => Some(board),
            Err(e) if e.is_no_data() => {
                warn!(stop = %stop.name, error = %e, "no departure data");
                None
            }
            Err(e) => return Err(e.into()),
        };

        let now = now.with_timezone(&self.timezone);
        Ok(departure_message(&stop.name, board.as_ref(), &now))
    }
}
