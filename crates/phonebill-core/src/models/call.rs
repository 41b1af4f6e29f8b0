//! Call record model
//!
//! One line of the call log, parsed into the caller's number and the call's
//! start and end instants.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ParseError;

/// Timestamp layout used by the call log (`dd-MM-yyyy HH:mm:ss`)
pub const TIMESTAMP_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

/// Number of comma-separated fields in a call log line
const FIELD_COUNT: usize = 3;

/// Call record
///
/// Immutable once parsed. `end` is never earlier than `start`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallRecord {
    /// Caller number
    pub phone_number: String,

    /// Call start instant
    pub start: NaiveDateTime,

    /// Call end instant
    pub end: NaiveDateTime,
}

impl CallRecord {
    /// Parse one call log line: `<phone>,<start>,<end>`
    ///
    /// Fields are trimmed before parsing, so `\r\n` line endings and padding
    /// around the commas are tolerated.
    ///
    /// # Errors
    /// - `ParseError::FieldCount` if the line does not have exactly 3 fields
    /// - `ParseError::EmptyPhoneNumber` if the first field is blank
    /// - `ParseError::MalformedTimestamp` if a timestamp is not exactly `dd-MM-yyyy HH:mm:ss`
    /// - `ParseError::InvalidTimestamp` if it has that shape but is not a real date/time
    /// - `ParseError::EndBeforeStart` if the call ends before it starts
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        if fields.len() != FIELD_COUNT {
            return Err(ParseError::FieldCount {
                found: fields.len(),
            });
        }

        let phone_number = fields[0];
        if phone_number.is_empty() {
            return Err(ParseError::EmptyPhoneNumber);
        }

        let start = parse_timestamp(fields[1])?;
        let end = parse_timestamp(fields[2])?;
        if end < start {
            return Err(ParseError::EndBeforeStart { start, end });
        }

        Ok(Self {
            phone_number: phone_number.to_string(),
            start,
            end,
        })
    }

    /// Call duration in whole seconds
    #[inline]
    pub fn duration_seconds(&self) -> i64 {
        (self.end - self.start).num_seconds()
    }

    /// Billable duration: seconds rounded up to the next whole minute
    #[inline]
    pub fn billable_minutes(&self) -> i64 {
        let seconds = self.duration_seconds();
        (seconds + 59) / 60
    }
}

impl FromStr for CallRecord {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Byte layout of `dd-MM-yyyy HH:mm:ss`; `d` marks a digit position
const TIMESTAMP_SHAPE: &[u8; 19] = b"dd-dd-dddd dd:dd:dd";

/// chrono accepts single digits, short or signed years and any whitespace
/// run for this format, so the exact shape is checked first.
fn has_timestamp_shape(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == TIMESTAMP_SHAPE.len()
        && bytes
            .iter()
            .zip(TIMESTAMP_SHAPE.iter())
            .all(|(&byte, &expected)| match expected {
                b'd' => byte.is_ascii_digit(),
                separator => byte == separator,
            })
}

fn parse_timestamp(value: &str) -> Result<NaiveDateTime, ParseError> {
    if !has_timestamp_shape(value) {
        return Err(ParseError::MalformedTimestamp {
            value: value.to_string(),
        });
    }

    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT).map_err(|source| {
        ParseError::InvalidTimestamp {
            value: value.to_string(),
            source,
        }
    })
}
