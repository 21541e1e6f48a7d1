//! Web layer for the next-train service.
//!
//! Reads the caller's position from request headers and answers with the
//! `{statusCode, body}` envelope.

mod dto;
mod routes;
mod state;

pub use dto::InvocationResponse;
pub use routes::{AppError, LATITUDE_HEADER, LONGITUDE_HEADER, create_router};
pub use state::{AppState, StartupError};
