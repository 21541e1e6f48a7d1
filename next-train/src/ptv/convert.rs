//! Conversion from PTV DTOs to domain types.

use chrono::{DateTime, Utc};

use crate::domain::{DepartureBoard, DepartureEntry};

use super::types::{DepartureDto, DeparturesResponse};

/// Reasons a well-formed JSON response cannot become a departure board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    #[error("response has no departures list")]
    MissingDepartures,

    #[error("departure {index} has no departure time")]
    MissingTime { index: usize },

    #[error("departure {index} has an invalid time {value:?}")]
    InvalidTime { index: usize, value: String },
}

/// Convert a departures response into a board, keeping upstream order.
pub fn convert_departures(response: &DeparturesResponse) -> Result<DepartureBoard, ConversionError> {
    let departures = response
        .departures
        .as_ref()
        .ok_or(ConversionError::MissingDepartures)?;

    let entries = departures
        .iter()
        .enumerate()
        .map(|(index, dto)| convert_departure(index, dto))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(DepartureBoard::new(entries))
}

fn convert_departure(index: usize, dto: &DepartureDto) -> Result<DepartureEntry, ConversionError> {
    // Live estimate when there is one, otherwise the timetable
    let raw = dto
        .estimated_departure_utc
        .as_deref()
        .or(dto.scheduled_departure_utc.as_deref())
        .ok_or(ConversionError::MissingTime { index })?;

    let departure_utc = parse_utc(raw).ok_or_else(|| ConversionError::InvalidTime {
        index,
        value: raw.to_string(),
    })?;

    Ok(DepartureEntry::new(departure_utc, dto.platform_number.clone()))
}

/// Parse an ISO 8601 timestamp with offset, normalising to UTC.
fn parse_utc(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw.trim())
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn dto(estimated: Option<&str>, scheduled: Option<&str>, platform: Option<&str>) -> DepartureDto {
        DepartureDto {
            scheduled_departure_utc: scheduled.map(str::to_string),
            estimated_departure_utc: estimated.map(str::to_string),
            platform_number: platform.map(str::to_string),
        }
    }

    fn response(departures: Vec<DepartureDto>) -> DeparturesResponse {
        DeparturesResponse {
            departures: Some(departures),
        }
    }

    #[test]
    fn prefers_estimate() {
        let board = convert_departures(&response(vec![dto(
            Some("2024-05-01T09:05:00Z"),
            Some("2024-05-01T09:04:00Z"),
            Some("2"),
        )]))
        .unwrap();

        let first = board.first().unwrap();
        assert_eq!(first.departure_utc, Utc.with_ymd_and_hms(2024, 5, 1, 9, 5, 0).unwrap());
        assert_eq!(first.platform.as_deref(), Some("2"));
    }

    #[test]
    fn falls_back_to_schedule() {
        let board = convert_departures(&response(vec![dto(
            None,
            Some("2024-05-01T09:04:00Z"),
            None,
        )]))
        .unwrap();

        let first = board.first().unwrap();
        assert_eq!(first.departure_utc, Utc.with_ymd_and_hms(2024, 5, 1, 9, 4, 0).unwrap());
        assert_eq!(first.platform, None);
    }

    #[test]
    fn offsets_are_normalised() {
        let board = convert_departures(&response(vec![dto(
            Some("2024-05-01T19:05:00+10:00"),
            None,
            None,
        )]))
        .unwrap();

        assert_eq!(
            board.first().unwrap().departure_utc,
            Utc.with_ymd_and_hms(2024, 5, 1, 9, 5, 0).unwrap()
        );
    }

    #[test]
    fn keeps_order() {
        let board = convert_departures(&response(vec![
            dto(Some("2024-05-01T09:20:00Z"), None, Some("1")),
            dto(Some("2024-05-01T09:05:00Z"), None, Some("2")),
        ]))
        .unwrap();

        assert_eq!(board.len(), 2);
        assert_eq!(board.first().unwrap().platform.as_deref(), Some("1"));
        assert_eq!(board.second().unwrap().platform.as_deref(), Some("2"));
    }

    #[test]
    fn empty_list_is_an_empty_board() {
        let board = convert_departures(&response(Vec::new())).unwrap();
        assert!(board.is_empty());
    }

    #[test]
    fn missing_list() {
        let err = convert_departures(&DeparturesResponse { departures: None }).unwrap_err();
        assert_eq!(err, ConversionError::MissingDepartures);
    }

    #[test]
    fn missing_time() {
        let err = convert_departures(&response(vec![
            dto(Some("2024-05-01T09:05:00Z"), None, None),
            dto(None, None, Some("1")),
        ]))
        .unwrap_err();
        assert_eq!(err, ConversionError::MissingTime { index: 1 });
    }

    #[test]
    fn invalid_time() {
        let err = convert_departures(&response(vec![dto(Some("soon"), None, None)])).unwrap_err();
        assert_eq!(
            err,
            ConversionError::InvalidTime {
                index: 0,
                value: "soon".into(),
            }
        );
    }
}
