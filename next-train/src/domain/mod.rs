//! Domain types for the next-train service.
//!
//! Caller positions, catalog stops and departure boards. Types enforce
//! their invariants at construction time, so code that receives them can
//! trust their validity.

mod coordinate;
mod departure;
mod error;
mod stop;

pub use coordinate::Coordinate;
pub use departure::{DepartureBoard, DepartureEntry};
pub use error::{Axis, InvalidCoordinate};
pub use stop::{ResolvedStop, StopRecord};
