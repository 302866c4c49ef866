//! Calendar-date handling for the Redmine wire format.
//!
//! Redmine exchanges spent-on dates as quoted `YYYY-MM-DD` strings and sends
//! `null` for entries without a date. [`SpentOn`] wraps a [`NaiveDate`] with
//! serde implementations for that format, accepts the symbolic CLI tokens
//! `today` and `yesterday` next to literal dates, and renders the relative
//! form used in time entry tables.

use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::de::{self, Visitor};
use serde::{ser, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Wire format for spent-on dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Format used when a date is displayed together with its weekday.
pub const DAY_DATE_FORMAT: &str = "%a, %Y-%m-%d";

/// A calendar date without a time component.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct SpentOn(pub NaiveDate);

impl SpentOn {
    /// Resolves a date expression against a reference date.
    ///
    /// Accepts `today`, `yesterday` or a literal date in the wire format.
    pub fn parse(text: &str, reference: NaiveDate) -> Result<Self> {
        match text {
            "today" => Ok(Self(reference)),
            "yesterday" => Ok(Self(reference - Duration::days(1))),
            _ => NaiveDate::parse_from_str(text, DATE_FORMAT)
                .map(Self)
                .map_err(|_| msg_error_anyhow!(Message::InvalidDateFormat(DATE_FORMAT.to_string()))),
        }
    }

    /// Formats the date together with its weekday.
    pub fn day_date(&self) -> String {
        self.0.format(DAY_DATE_FORMAT).to_string()
    }

    /// Renders the date relative to a reference moment.
    ///
    /// The day delta is the hour difference between the reference moment and
    /// the date's midnight, divided by 24 with truncation. An entry logged
    /// today therefore stays "today" until a full 24 hours have passed since
    /// its midnight, independent of calendar boundaries.
    pub fn relative(&self, reference: NaiveDateTime) -> String {
        let midnight = self.0.and_time(NaiveTime::MIN);
        let days = reference.signed_duration_since(midnight).num_hours() / 24;
        let date = self.day_date();

        match days {
            d if d < 0 => date,
            0 => format!("today ({})", date),
            1 => format!("yesterday ({})", date),
            d => format!("{} days ago ({})", d, date),
        }
    }
}

impl fmt::Display for SpentOn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl Serialize for SpentOn {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let year = self.0.year();
        if !(0..=9999).contains(&year) {
            return Err(ser::Error::custom("date year outside of range [0,9999]"));
        }

        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for SpentOn {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(SpentOnVisitor)
    }
}

struct SpentOnVisitor;

impl<'de> Visitor<'de> for SpentOnVisitor {
    type Value = SpentOn;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a date string in {} format or null", DATE_FORMAT)
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        NaiveDate::parse_from_str(value, DATE_FORMAT)
            .map(SpentOn)
            .map_err(|_| E::custom(format!("invalid date format (use '{}' instead)", DATE_FORMAT)))
    }

    // Entries without a date come over the wire as null.
    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(SpentOn::default())
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(SpentOn::default())
    }
}

/// Returns the last second of the given date, the reference moment for
/// relative rendering.
pub fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN) + Duration::hours(24) - Duration::seconds(1)
}
