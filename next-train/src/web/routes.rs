//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::get,
};
use tracing::{debug, error, warn};

use crate::domain::{Axis, InvalidCoordinate};
use crate::handler::HandlerError;

use super::dto::InvocationResponse;
use super::state::AppState;

/// Header carrying the caller's latitude in decimal degrees.
pub const LATITUDE_HEADER: &str = "location-lat";

/// Header carrying the caller's longitude in decimal degrees.
pub const LONGITUDE_HEADER: &str = "location-long";

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(next_train))
        .route("/next-train", get(next_train))
        .route("/health", get(health))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Next departure from the station nearest the caller.
async fn next_train(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<InvocationResponse>, AppError> {
    let latitude = header(&headers, LATITUDE_HEADER, Axis::Latitude)?;
    let longitude = header(&headers, LONGITUDE_HEADER, Axis::Longitude)?;
    debug!(latitude, longitude, "next train request");

    let body = state.next_train.respond(latitude, longitude).await?;
    Ok(Json(InvocationResponse::ok(body)))
}

/// Read a coordinate header as text.
fn header<'a>(
    headers: &'a HeaderMap,
    name: &str,
    axis: Axis,
) -> Result<&'a str, InvalidCoordinate> {
    let value = headers.get(name).ok_or(InvalidCoordinate::Missing(axis))?;
    value
        .to_str()
        .map_err(|_| InvalidCoordinate::Unparseable {
            axis,
            value: String::from_utf8_lossy(value.as_bytes()).into_owned(),
        })
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Internal { message: String },
}

impl From<InvalidCoordinate> for AppError {
    fn from(e: InvalidCoordinate) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl From<HandlerError> for AppError {
    fn from(e: HandlerError) -> Self {
        match e {
            HandlerError::InvalidCoordinate(e) => e.into(),
            HandlerError::Upstream(_) => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => {
                warn!(%message, "rejected request");
                (StatusCode::BAD_REQUEST, message)
            }
            AppError::Internal { message } => {
                error!(%message, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };

        let body = Json(InvocationResponse {
            status_code: status.as_u16(),
            body: message,
        });
        (status, body).into_response()
    }
}
