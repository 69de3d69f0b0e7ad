//! Property value converters

use crate::date::DateFormatter;
use crate::error::ConversionResult;
use crate::types::TemporalKind;
use crate::value::PropertyValue;
use std::fmt::Debug;

/// Converts a property value to and from its stored text form
pub trait PropertyConverter: Debug + Send + Sync {
    fn write(&self, value: &PropertyValue) -> ConversionResult<String>;

    fn read(&self, text: &str) -> ConversionResult<PropertyValue>;
}

/// Converter for date-typed properties
///
/// Holds the formatter compiled when the property was mapped together with
/// what the property was declared as, so every read parses into the declared
/// type.
#[derive(Debug, Clone)]
pub struct DateConverter {
    formatter: DateFormatter,
    /// Set when the property is declared with a temporal type
    temporal: Option<TemporalKind>,
    legacy_date: bool,
}

impl DateConverter {
    pub fn temporal(formatter: DateFormatter, kind: TemporalKind) -> Self {
        Self { formatter, temporal: Some(kind), legacy_date: false }
    }

    pub fn legacy_date(formatter: DateFormatter) -> Self {
        Self { formatter, temporal: None, legacy_date: true }
    }

    pub fn formatter(&self) -> &DateFormatter {
        &self.formatter
    }

    pub fn temporal_kind(&self) -> Option<TemporalKind> {
        self.temporal
    }
}

impl PropertyConverter for DateConverter {
    fn write(&self, value: &PropertyValue) -> ConversionResult<String> {
        match value {
            PropertyValue::Temporal(temporal) if self.temporal.is_some() => self.formatter.format(temporal),
            PropertyValue::LegacyDate(time) if self.legacy_date => self.formatter.format_system_time(*time),
            other => Ok(other.to_string()),
        }
    }

    fn read(&self, text: &str) -> ConversionResult<PropertyValue> {
        match self.temporal {
            Some(kind) => self.formatter.parse(text, kind).map(PropertyValue::Temporal),
            None => self.formatter.parse_system_time(text).map(PropertyValue::LegacyDate),
        }
    }
}
