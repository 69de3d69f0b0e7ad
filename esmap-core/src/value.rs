//! Runtime property values handed to and returned by converters

use crate::types::TemporalKind;
use chrono::{
    DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Offset, SecondsFormat, Utc,
};
use std::fmt;
use std::time::SystemTime;

/// A calendar/date-time value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemporalValue {
    LocalDate(NaiveDate),
    LocalTime(NaiveTime),
    LocalDateTime(NaiveDateTime),
    OffsetDateTime(DateTime<FixedOffset>),
    Instant(DateTime<Utc>),
}

impl TemporalValue {
    pub fn kind(&self) -> TemporalKind {
        match self {
            TemporalValue::LocalDate(_) => TemporalKind::LocalDate,
            TemporalValue::LocalTime(_) => TemporalKind::LocalTime,
            TemporalValue::LocalDateTime(_) => TemporalKind::LocalDateTime,
            TemporalValue::OffsetDateTime(_) => TemporalKind::OffsetDateTime,
            TemporalValue::Instant(_) => TemporalKind::Instant,
        }
    }

    /// Split into the components a formatter renders.
    ///
    /// Naive values carry no offset and render at UTC.
    pub fn parts(&self) -> (Option<NaiveDate>, Option<NaiveTime>, FixedOffset) {
        let utc = Utc.fix();
        match self {
            TemporalValue::LocalDate(date) => (Some(*date), None, utc),
            TemporalValue::LocalTime(time) => (None, Some(*time), utc),
            TemporalValue::LocalDateTime(dt) => (Some(dt.date()), Some(dt.time()), utc),
            TemporalValue::OffsetDateTime(dt) => {
                let local = dt.naive_local();
                (Some(local.date()), Some(local.time()), *dt.offset())
            }
            TemporalValue::Instant(dt) => (Some(dt.date_naive()), Some(dt.time()), utc),
        }
    }
}

impl fmt::Display for TemporalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemporalValue::LocalDate(date) => write!(f, "{}", date),
            TemporalValue::LocalTime(time) => write!(f, "{}", time),
            TemporalValue::LocalDateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%dT%H:%M:%S%.f")),
            TemporalValue::OffsetDateTime(dt) => {
                write!(f, "{}", dt.to_rfc3339_opts(SecondsFormat::AutoSi, false))
            }
            TemporalValue::Instant(dt) => write!(f, "{}", dt.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
        }
    }
}

/// Any value a property can hold
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Temporal(TemporalValue),
    LegacyDate(SystemTime),
    /// Everything else, in its JSON form
    Other(serde_json::Value),
}

impl PropertyValue {
    pub fn as_temporal(&self) -> Option<&TemporalValue> {
        match self {
            PropertyValue::Temporal(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_legacy_date(&self) -> Option<SystemTime> {
        match self {
            PropertyValue::LegacyDate(value) => Some(*value),
            _ => None,
        }
    }
}

/// Default string representation, used when no formatter applies
impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Temporal(value) => write!(f, "{}", value),
            PropertyValue::LegacyDate(value) => {
                let dt: DateTime<Utc> = (*value).into();
                write!(f, "{}", dt.to_rfc3339_opts(SecondsFormat::Millis, true))
            }
            PropertyValue::Other(serde_json::Value::String(text)) => f.write_str(text),
            PropertyValue::Other(value) => write!(f, "{}", value),
        }
    }
}

impl From<TemporalValue> for PropertyValue {
    fn from(value: TemporalValue) -> Self {
        PropertyValue::Temporal(value)
    }
}

impl From<NaiveDate> for PropertyValue {
    fn from(value: NaiveDate) -> Self {
        PropertyValue::Temporal(TemporalValue::LocalDate(value))
    }
}

impl From<NaiveTime> for PropertyValue {
    fn from(value: NaiveTime) -> Self {
        PropertyValue::Temporal(TemporalValue::LocalTime(value))
    }
}

impl From<NaiveDateTime> for PropertyValue {
    fn from(value: NaiveDateTime) -> Self {
        PropertyValue::Temporal(TemporalValue::LocalDateTime(value))
    }
}

impl From<DateTime<FixedOffset>> for PropertyValue {
    fn from(value: DateTime<FixedOffset>) -> Self {
        PropertyValue::Temporal(TemporalValue::OffsetDateTime(value))
    }
}

impl From<DateTime<Utc>> for PropertyValue {
    fn from(value: DateTime<Utc>) -> Self {
        PropertyValue::Temporal(TemporalValue::Instant(value))
    }
}

impl From<SystemTime> for PropertyValue {
    fn from(value: SystemTime) -> Self {
        PropertyValue::LegacyDate(value)
    }
}

impl From<serde_json::Value> for PropertyValue {
    fn from(value: serde_json::Value) -> Self {
        PropertyValue::Other(value)
    }
}
