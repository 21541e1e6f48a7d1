//! Human-readable departure messages.
//!
//! Turns a departure board into one sentence about the next train:
//!
//! - `The next McKinnon train is departing at 9:05 AM in 3 minutes from platform 2`
//! - `The next McKinnon train departed 5 minutes ago at 8:57 AM`
//!
//! When the next train is at most [`IMMINENT_MINUTES`] away and the board has
//! another departure, the train after it is appended:
//!
//! - `... in 1 minute from platform 2. The following train departs at 9:11 AM in 6 minutes`
//!
//! Minute counts are rounded half away from zero.

use chrono::{DateTime, TimeZone, Utc};

use crate::domain::{DepartureBoard, DepartureEntry};

/// A next train this close (in minutes) also gets the following train
/// mentioned.
pub const IMMINENT_MINUTES: i64 = 2;

/// Message for a board with at least one entry, or the "no information"
/// message otherwise.
///
/// `now` fixes both the reference instant and the zone times are shown in.
pub fn departure_message<Tz>(
    stop_name: &str,
    board: Option<&DepartureBoard>,
    now: &DateTime<Tz>,
) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let Some(next) = board.and_then(DepartureBoard::first) else {
        return no_departures_message(stop_name);
    };

    let minutes_away = minutes_until(next.departure_utc, now);
    let mut message = if minutes_away < 0 {
        format!(
            "The next {stop_name} train departed {} ago at {}",
            minutes(-minutes_away),
            clock(next, now)
        )
    } else {
        format!(
            "The next {stop_name} train is departing at {} in {}",
            clock(next, now),
            minutes(minutes_away)
        )
    };
    push_platform(&mut message, next);

    if (0..=IMMINENT_MINUTES).contains(&minutes_away) {
        // An out-of-order board can list an already departed train second
        let following = board
            .and_then(DepartureBoard::second)
            .map(|entry| (entry, minutes_until(entry.departure_utc, now)))
            .filter(|&(_, mins)| mins >= 0);
        if let Some((following, mins)) = following {
            message.push_str(&format!(
                ". The following train departs at {} in {}",
                clock(following, now),
                minutes(mins)
            ));
            push_platform(&mut message, following);
        }
    }

    message
}

/// Message for when the board is empty or could not be fetched.
pub fn no_departures_message(stop_name: &str) -> String {
    format!("Sorry, no departure information is currently available for {stop_name} station.")
}

/// Message for when the caller is beyond the service radius.
pub fn too_far_message(stop_name: &str, distance_km: f64) -> String {
    format!(
        "You don't seem to be close enough to any station. \
         The closest station is {stop_name} which is {distance_km:.1} km away."
    )
}

/// Whole minutes from `now` until `departure`, negative once it has left.
pub fn minutes_until<Tz: TimeZone>(departure: DateTime<Utc>, now: &DateTime<Tz>) -> i64 {
    let millis = departure.signed_duration_since(now).num_milliseconds();
    // Exact for any realistic board; round() takes .5 away from zero
    (millis as f64 / 60_000.0).round() as i64
}

/// 12-hour clock time in `now`'s zone, e.g. "9:05 AM".
fn clock<Tz>(entry: &DepartureEntry, now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    entry
        .departure_utc
        .with_timezone(&now.timezone())
        .format("%-I:%M %p")
        .to_string()
}

fn minutes(n: i64) -> String {
    if n == 1 {
        "1 minute".to_string()
    } else {
        format!("{n} minutes")
    }
}

fn push_platform(message: &mut String, entry: &DepartureEntry) {
    if let Some(platform) = &entry.platform {
        message.push_str(" from platform ");
        message.push_str(platform);
    }
}
