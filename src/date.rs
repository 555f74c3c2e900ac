//! Date input parsing.
//!
//! Form fields accept two textual formats, ISO `YYYY-MM-DD` and US
//! `MM/DD/YYYY`. Both normalize to the same calendar date before
//! validation and storage; anything else is rejected.

use chrono::{NaiveDate, NaiveTime};

use crate::error::{Result, TimelineError};

const ISO_FORMAT: &str = "%Y-%m-%d";
const US_FORMAT: &str = "%m/%d/%Y";

/// Parse a form date field.
///
/// Field widths are strict: a four-digit year and two-digit month and
/// day, so `2024-3-5` and `3/5/2024` are rejected.
///
/// # Errors
///
/// Returns `InvalidDate` if the value matches neither accepted format.
pub fn parse(value: &str) -> Result<NaiveDate> {
    let trimmed = value.trim();
    let format = if matches_shape(trimmed, "NNNN-NN-NN") {
        ISO_FORMAT
    } else if matches_shape(trimmed, "NN/NN/NNNN") {
        US_FORMAT
    } else {
        return Err(TimelineError::InvalidDate {
            value: value.to_string(),
        });
    };
    NaiveDate::parse_from_str(trimmed, format).map_err(|_| TimelineError::InvalidDate {
        value: value.to_string(),
    })
}

/// Check `value` against a shape where `N` is a digit and anything else
/// is a literal. Chrono's numeric specifiers accept one or two digits,
/// so the width check has to happen before parsing.
fn matches_shape(value: &str, shape: &str) -> bool {
    value.len() == shape.len()
        && value.bytes().zip(shape.bytes()).all(|(c, p)| match p {
            b'N' => c.is_ascii_digit(),
            _ => c == p,
        })
}

/// Render a stored date back into the ISO text the draft fields use.
#[must_use]
pub fn to_field(date: NaiveDate) -> String {
    date.format(ISO_FORMAT).to_string()
}

/// Convert a calendar date to UTC-midnight epoch milliseconds, the
/// comparable instant the chart renderer plots on its time axis.
#[must_use]
pub fn epoch_ms(date: NaiveDate) -> i64 {
    date.and_time(NaiveTime::MIN).and_utc().timestamp_millis()
}
