//! Reusable date formatter built from a named format or a custom pattern

use super::format::{DateFormat, NamedRule};
use super::pattern::{CompiledPattern, PatternError};
use crate::error::{ConversionError, ConversionResult};
use crate::types::TemporalKind;
use crate::value::TemporalValue;
use chrono::format::{self, DelayedFormat, Parsed};
use chrono::{
    DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeZone, Utc, Weekday,
};
use std::fmt::Write as _;
use std::time::SystemTime;

#[derive(Debug, Clone)]
enum Rule {
    /// Alternatives in priority order, never empty
    Patterns(Vec<CompiledPattern>),
    EpochMillis,
    EpochSecond,
}

/// Fully resolved point read from text
#[derive(Debug, Clone, Copy)]
struct Resolved {
    date: Option<NaiveDate>,
    time: NaiveTime,
    offset: FixedOffset,
}

/// Formats and parses date values with one compiled rule
///
/// Building a formatter compiles its layout; after that `format` and `parse`
/// only walk the compiled items.
#[derive(Debug, Clone)]
pub struct DateFormatter {
    name: String,
    rule: Rule,
}

impl DateFormatter {
    /// Formatter for a named format
    ///
    /// Returns `None` for the `none` and `custom` sentinels, which have no
    /// layout of their own.
    pub fn of(format: DateFormat) -> Option<Self> {
        let rule = match format.rule()? {
            NamedRule::Layout(layout) => Rule::Patterns(vec![CompiledPattern::compile(layout).ok()?]),
            NamedRule::Layouts(layouts) => {
                let patterns = layouts
                    .iter()
                    .map(|layout| CompiledPattern::compile(layout).ok())
                    .collect::<Option<Vec<_>>>()?;
                if patterns.is_empty() {
                    return None;
                }
                Rule::Patterns(patterns)
            }
            NamedRule::EpochMillis => Rule::EpochMillis,
            NamedRule::EpochSecond => Rule::EpochSecond,
        };
        Some(Self { name: format.name().to_string(), rule })
    }

    /// Formatter for a literal custom pattern
    pub fn for_pattern(pattern: &str) -> Result<Self, PatternError> {
        let compiled = CompiledPattern::compile(pattern)?;
        Ok(Self { name: format!("'{}'", pattern), rule: Rule::Patterns(vec![compiled]) })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn format(&self, value: &TemporalValue) -> ConversionResult<String> {
        let (date, time, offset) = value.parts();
        self.render(date, time, offset)
    }

    pub fn format_system_time(&self, value: SystemTime) -> ConversionResult<String> {
        let dt: DateTime<Utc> = value.into();
        self.format(&TemporalValue::Instant(dt))
    }

    /// Parse into exactly the requested temporal kind
    pub fn parse(&self, text: &str, kind: TemporalKind) -> ConversionResult<TemporalValue> {
        let resolved = self.resolve(text)?;

        let value = match kind {
            TemporalKind::LocalDate => TemporalValue::LocalDate(self.require_date(text, &resolved)?),
            TemporalKind::LocalTime => TemporalValue::LocalTime(resolved.time),
            TemporalKind::LocalDateTime => {
                let date = self.require_date(text, &resolved)?;
                TemporalValue::LocalDateTime(NaiveDateTime::new(date, resolved.time))
            }
            TemporalKind::OffsetDateTime => {
                TemporalValue::OffsetDateTime(self.to_offset_date_time(text, &resolved)?)
            }
            TemporalKind::Instant => {
                TemporalValue::Instant(self.to_offset_date_time(text, &resolved)?.with_timezone(&Utc))
            }
        };

        Ok(value)
    }

    /// Parse into the legacy point-in-time representation
    pub fn parse_system_time(&self, text: &str) -> ConversionResult<SystemTime> {
        let resolved = self.resolve(text)?;
        let dt = self.to_offset_date_time(text, &resolved)?;
        Ok(SystemTime::from(dt))
    }

    fn render(
        &self,
        date: Option<NaiveDate>,
        time: Option<NaiveTime>,
        offset: FixedOffset,
    ) -> ConversionResult<String> {
        match &self.rule {
            Rule::Patterns(patterns) => {
                // First layout whose components the value can fill
                for pattern in patterns {
                    let delayed = DelayedFormat::new_with_offset(date, time, &offset, pattern.items().iter());
                    let mut out = String::new();
                    if write!(out, "{}", delayed).is_ok() {
                        return Ok(out);
                    }
                }
                Err(ConversionError::Format {
                    format: self.name.clone(),
                    reason: "value lacks a component the format renders".to_string(),
                })
            }
            Rule::EpochMillis => Ok(self.instant(date, time, offset)?.timestamp_millis().to_string()),
            Rule::EpochSecond => Ok(self.instant(date, time, offset)?.timestamp().to_string()),
        }
    }

    fn instant(
        &self,
        date: Option<NaiveDate>,
        time: Option<NaiveTime>,
        offset: FixedOffset,
    ) -> ConversionResult<DateTime<FixedOffset>> {
        let date = date.ok_or_else(|| ConversionError::Format {
            format: self.name.clone(),
            reason: "an epoch value needs a date".to_string(),
        })?;
        let local = NaiveDateTime::new(date, time.unwrap_or(NaiveTime::MIN));
        offset
            .from_local_datetime(&local)
            .single()
            .ok_or_else(|| ConversionError::OutOfRange(local.to_string()))
    }

    fn resolve(&self, text: &str) -> ConversionResult<Resolved> {
        match &self.rule {
            Rule::Patterns(patterns) => {
                let mut first_error = None;
                for pattern in patterns {
                    match self.resolve_pattern(pattern, text) {
                        Ok(resolved) => return Ok(resolved),
                        Err(e) => {
                            first_error.get_or_insert(e);
                        }
                    }
                }
                Err(first_error.unwrap_or_else(|| self.parse_error(text, "format has no layout".to_string())))
            }
            Rule::EpochMillis => {
                let millis = self.parse_epoch(text)?;
                let dt = DateTime::from_timestamp_millis(millis)
                    .ok_or_else(|| ConversionError::OutOfRange(text.to_string()))?;
                Ok(Resolved { date: Some(dt.date_naive()), time: dt.time(), offset: Utc.fix() })
            }
            Rule::EpochSecond => {
                let seconds = self.parse_epoch(text)?;
                let dt = DateTime::from_timestamp(seconds, 0)
                    .ok_or_else(|| ConversionError::OutOfRange(text.to_string()))?;
                Ok(Resolved { date: Some(dt.date_naive()), time: dt.time(), offset: Utc.fix() })
            }
        }
    }

    fn resolve_pattern(&self, pattern: &CompiledPattern, text: &str) -> ConversionResult<Resolved> {
        let mut parsed = Parsed::new();
        format::parse(&mut parsed, text, pattern.items().iter())
            .map_err(|e| self.parse_error(text, e.to_string()))?;

        // Missing components default the way Elasticsearch resolves dates:
        // first day of the period, midnight, UTC. Two-digit years land in
        // 2000-2099.
        let c = pattern.components();
        let defaulted = (|| -> format::ParseResult<()> {
            if c.two_digit_year {
                if c.year {
                    parsed.set_year_div_100(20)?;
                }
                if c.iso_year {
                    parsed.set_isoyear_div_100(20)?;
                }
            }
            if c.iso_year && !c.iso_week {
                parsed.set_isoweek(1)?;
            }
            if (c.iso_year || c.iso_week) && !c.weekday {
                parsed.set_weekday(Weekday::Mon)?;
            }
            if c.year && !c.month && !c.day && !c.ordinal {
                parsed.set_month(1)?;
                parsed.set_day(1)?;
            }
            if c.month && !c.day {
                parsed.set_day(1)?;
            }
            if !c.hour {
                parsed.set_hour(0)?;
            }
            if !c.minute {
                parsed.set_minute(0)?;
            }
            Ok(())
        })();
        defaulted.map_err(|e| self.parse_error(text, e.to_string()))?;

        let date = if c.has_date() {
            Some(parsed.to_naive_date().map_err(|e| self.parse_error(text, e.to_string()))?)
        } else {
            None
        };
        let time = parsed.to_naive_time().map_err(|e| self.parse_error(text, e.to_string()))?;
        let offset = if c.offset {
            parsed.to_fixed_offset().map_err(|e| self.parse_error(text, e.to_string()))?
        } else {
            Utc.fix()
        };

        Ok(Resolved { date, time, offset })
    }

    fn parse_epoch(&self, text: &str) -> ConversionResult<i64> {
        text.trim().parse::<i64>().map_err(|e| self.parse_error(text, e.to_string()))
    }

    fn require_date(&self, text: &str, resolved: &Resolved) -> ConversionResult<NaiveDate> {
        resolved.date.ok_or_else(|| self.parse_error(text, "format carries no date".to_string()))
    }

    fn to_offset_date_time(
        &self,
        text: &str,
        resolved: &Resolved,
    ) -> ConversionResult<DateTime<FixedOffset>> {
        let date = self.require_date(text, resolved)?;
        resolved
            .offset
            .from_local_datetime(&NaiveDateTime::new(date, resolved.time))
            .single()
            .ok_or_else(|| ConversionError::OutOfRange(text.to_string()))
    }

    fn parse_error(&self, text: &str, reason: String) -> ConversionError {
        ConversionError::Parse { input: text.to_string(), format: self.name.clone(), reason }
    }
}
