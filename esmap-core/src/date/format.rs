//! Elasticsearch built-in date formats

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a named format renders and parses values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamedRule {
    /// A Java-style layout, see [`crate::date::pattern`]
    Layout(&'static str),
    /// Alternative layouts: parsing tries each in order, rendering uses the
    /// first one the value fills
    Layouts(&'static [&'static str]),
    /// Milliseconds since the Unix epoch
    EpochMillis,
    /// Seconds since the Unix epoch
    EpochSecond,
}

macro_rules! date_formats {
    ($($variant:ident => $name:literal, $rule:expr;)*) => {
        /// Date format declared on a date-typed field
        ///
        /// `None` is the "no format declared" sentinel and `Custom` means the
        /// field carries its own pattern.
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum DateFormat {
            #[default]
            #[serde(rename = "none")]
            None,
            #[serde(rename = "custom")]
            Custom,
            $(
                #[serde(rename = $name)]
                $variant,
            )*
        }

        impl DateFormat {
            /// Every named (table-backed) format
            pub const NAMED: &'static [DateFormat] = &[$(DateFormat::$variant,)*];

            pub fn name(&self) -> &'static str {
                match self {
                    DateFormat::None => "none",
                    DateFormat::Custom => "custom",
                    $(DateFormat::$variant => $name,)*
                }
            }

            /// Rule for a named format; `None` and `Custom` have none
            pub fn rule(&self) -> Option<NamedRule> {
                match self {
                    DateFormat::None | DateFormat::Custom => None,
                    $(DateFormat::$variant => Some($rule),)*
                }
            }
        }
    };
}

use NamedRule::{EpochMillis, EpochSecond, Layout, Layouts};

/// `date_optional_time`: a date, optionally followed by a time and offset
const OPTIONAL_TIME: &[&str] = &[
    "uuuu-MM-dd'T'HH:mm:ss.SSSXXX",
    "uuuu-MM-dd'T'HH:mm:ssXXX",
    "uuuu-MM-dd'T'HH:mmXXX",
    "uuuu-MM-dd'T'HH:mm:ss.SSS",
    "uuuu-MM-dd'T'HH:mm:ss",
    "uuuu-MM-dd'T'HH:mm",
    "uuuu-MM-dd'T'HH",
    "uuuu-MM-dd",
    "uuuu-MM",
    "uuuu",
];

date_formats! {
    BasicDate => "basic_date", Layout("uuuuMMdd");
    BasicDateTime => "basic_date_time", Layout("uuuuMMdd'T'HHmmss.SSSZ");
    BasicDateTimeNoMillis => "basic_date_time_no_millis", Layout("uuuuMMdd'T'HHmmssZ");
    BasicOrdinalDate => "basic_ordinal_date", Layout("uuuuDDD");
    BasicOrdinalDateTime => "basic_ordinal_date_time", Layout("uuuuDDD'T'HHmmss.SSSZ");
    BasicOrdinalDateTimeNoMillis => "basic_ordinal_date_time_no_millis", Layout("uuuuDDD'T'HHmmssZ");
    BasicTime => "basic_time", Layout("HHmmss.SSSZ");
    BasicTimeNoMillis => "basic_time_no_millis", Layout("HHmmssZ");
    BasicTTime => "basic_t_time", Layout("'T'HHmmss.SSSZ");
    BasicTTimeNoMillis => "basic_t_time_no_millis", Layout("'T'HHmmssZ");
    BasicWeekDate => "basic_week_date", Layout("YYYY'W'wwe");
    BasicWeekDateTime => "basic_week_date_time", Layout("YYYY'W'wwe'T'HHmmss.SSSZ");
    BasicWeekDateTimeNoMillis => "basic_week_date_time_no_millis", Layout("YYYY'W'wwe'T'HHmmssZ");
    Date => "date", Layout("uuuu-MM-dd");
    DateHour => "date_hour", Layout("uuuu-MM-dd'T'HH");
    DateHourMinute => "date_hour_minute", Layout("uuuu-MM-dd'T'HH:mm");
    DateHourMinuteSecond => "date_hour_minute_second", Layout("uuuu-MM-dd'T'HH:mm:ss");
    DateHourMinuteSecondFraction => "date_hour_minute_second_fraction", Layout("uuuu-MM-dd'T'HH:mm:ss.SSS");
    DateHourMinuteSecondMillis => "date_hour_minute_second_millis", Layout("uuuu-MM-dd'T'HH:mm:ss.SSS");
    DateOptionalTime => "date_optional_time", Layouts(OPTIONAL_TIME);
    DateTime => "date_time", Layout("uuuu-MM-dd'T'HH:mm:ss.SSSXXX");
    DateTimeNoMillis => "date_time_no_millis", Layout("uuuu-MM-dd'T'HH:mm:ssXXX");
    EpochMillisFormat => "epoch_millis", EpochMillis;
    EpochSecondFormat => "epoch_second", EpochSecond;
    Hour => "hour", Layout("HH");
    HourMinute => "hour_minute", Layout("HH:mm");
    HourMinuteSecond => "hour_minute_second", Layout("HH:mm:ss");
    HourMinuteSecondFraction => "hour_minute_second_fraction", Layout("HH:mm:ss.SSS");
    HourMinuteSecondMillis => "hour_minute_second_millis", Layout("HH:mm:ss.SSS");
    OrdinalDate => "ordinal_date", Layout("uuuu-DDD");
    OrdinalDateTime => "ordinal_date_time", Layout("uuuu-DDD'T'HH:mm:ss.SSSXXX");
    OrdinalDateTimeNoMillis => "ordinal_date_time_no_millis", Layout("uuuu-DDD'T'HH:mm:ssXXX");
    Time => "time", Layout("HH:mm:ss.SSSXXX");
    TimeNoMillis => "time_no_millis", Layout("HH:mm:ssXXX");
    TTime => "t_time", Layout("'T'HH:mm:ss.SSSXXX");
    TTimeNoMillis => "t_time_no_millis", Layout("'T'HH:mm:ssXXX");
    WeekDate => "week_date", Layout("YYYY-'W'ww-e");
    WeekDateTime => "week_date_time", Layout("YYYY-'W'ww-e'T'HH:mm:ss.SSSXXX");
    WeekDateTimeNoMillis => "week_date_time_no_millis", Layout("YYYY-'W'ww-e'T'HH:mm:ssXXX");
    Weekyear => "weekyear", Layout("YYYY");
    WeekyearWeek => "weekyear_week", Layout("YYYY-'W'ww");
    WeekyearWeekDay => "weekyear_week_day", Layout("YYYY-'W'ww-e");
    Year => "year", Layout("uuuu");
    YearMonth => "year_month", Layout("uuuu-MM");
    YearMonthDay => "year_month_day", Layout("uuuu-MM-dd");
    StrictDate => "strict_date", Layout("uuuu-MM-dd");
    StrictDateHour => "strict_date_hour", Layout("uuuu-MM-dd'T'HH");
    StrictDateHourMinute => "strict_date_hour_minute", Layout("uuuu-MM-dd'T'HH:mm");
    StrictDateHourMinuteSecond => "strict_date_hour_minute_second", Layout("uuuu-MM-dd'T'HH:mm:ss");
    StrictDateHourMinuteSecondFraction => "strict_date_hour_minute_second_fraction", Layout("uuuu-MM-dd'T'HH:mm:ss.SSS");
    StrictDateHourMinuteSecondMillis => "strict_date_hour_minute_second_millis", Layout("uuuu-MM-dd'T'HH:mm:ss.SSS");
    StrictDateOptionalTime => "strict_date_optional_time", Layouts(OPTIONAL_TIME);
    StrictDateTime => "strict_date_time", Layout("uuuu-MM-dd'T'HH:mm:ss.SSSXXX");
    StrictDateTimeNoMillis => "strict_date_time_no_millis", Layout("uuuu-MM-dd'T'HH:mm:ssXXX");
    StrictHourMinuteSecond => "strict_hour_minute_second", Layout("HH:mm:ss");
    StrictTime => "strict_time", Layout("HH:mm:ss.SSSXXX");
    StrictYear => "strict_year", Layout("uuuu");
    StrictYearMonth => "strict_year_month", Layout("uuuu-MM");
    StrictYearMonthDay => "strict_year_month_day", Layout("uuuu-MM-dd");
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DateFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(DateFormat::None),
            "custom" => Ok(DateFormat::Custom),
            _ => DateFormat::NAMED
                .iter()
                .find(|format| format.name() == s)
                .copied()
                .ok_or_else(|| format!("Unknown date format: {}", s)),
        }
    }
}
