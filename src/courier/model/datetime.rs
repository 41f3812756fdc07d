//! Delivery date and time handling.
//!
//! A [`DeliveryDateTime`] is built from two user-entered strings: a `d/M/yyyy`
//! date (`2/12/2019`) and a four-digit 24-hour time (`1800`). Both are
//! resolved strictly against the calendar, so `31/2/2019` and `2460` are
//! rejected at construction.
//!
//! The raw strings are preserved exactly as entered. They drive display of the
//! original input, persistence, and date searching, while equality, ordering,
//! and hashing all go through the resolved instant. `1/1/2020 0900` entered as
//! `01/01/2020 0900` is the same moment but a different search key.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use super::FieldError;

const DATE_FORMAT: &str = "%d/%m/%Y";
const TIME_FORMAT: &str = "%H%M";

#[derive(Debug, Clone)]
pub struct DeliveryDateTime {
    date: String,
    time: String,
    instant: NaiveDateTime,
}

impl DeliveryDateTime {
    pub fn parse(date: &str, time: &str) -> Result<Self, FieldError> {
        let date = date.trim();
        let time = time.trim();
        let day = parse_date(date)?;
        let tod = parse_time(time)?;
        Ok(Self {
            date: date.to_string(),
            time: time.to_string(),
            instant: day.and_time(tod),
        })
    }

    /// Checks that `input` is a well-formed `d/M/yyyy` calendar date.
    pub fn validate_date(input: &str) -> Result<(), FieldError> {
        parse_date(input.trim()).map(|_| ())
    }

    /// The date exactly as the user entered it.
    pub fn date_text(&self) -> &str {
        &self.date
    }

    /// The time exactly as the user entered it.
    pub fn time_text(&self) -> &str {
        &self.time
    }

    pub fn is_before(&self, other: &Self) -> bool {
        self.instant < other.instant
    }

    pub fn is_after(&self, other: &Self) -> bool {
        self.instant > other.instant
    }
}

fn parse_date(input: &str) -> Result<NaiveDate, FieldError> {
    NaiveDate::parse_from_str(input, DATE_FORMAT).map_err(|_| FieldError::Date)
}

fn parse_time(input: &str) -> Result<NaiveTime, FieldError> {
    // %H%M alone would accept shorter forms like "800"; the contract is
    // exactly four digits.
    if input.len() != 4 || !input.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FieldError::Time);
    }
    NaiveTime::parse_from_str(input, TIME_FORMAT).map_err(|_| FieldError::Time)
}

impl fmt::Display for DeliveryDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}hrs", self.instant.format("%-d %B %Y %H%M"))
    }
}

impl PartialEq for DeliveryDateTime {
    fn eq(&self, other: &Self) -> bool {
        self.instant == other.instant
    }
}

impl Eq for DeliveryDateTime {}

impl PartialOrd for DeliveryDateTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DeliveryDateTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.instant.cmp(&other.instant)
    }
}

impl Hash for DeliveryDateTime {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.instant.hash(state);
    }
}
