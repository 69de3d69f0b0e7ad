use chrono::{DateTime, NaiveDate, Utc};
use cucumber::{given, then};
use cucumber_tests::MappingWorld;
use cucumber_tests::parse_date_format;
use esmap_core::prelude::*;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

fn date(text: &str) -> NaiveDate {
    NaiveDate::parse_from_str(text, "%Y-%m-%d").expect("Invalid date in feature file")
}

fn instant(text: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(text).expect("Invalid instant in feature file").with_timezone(&Utc)
}

#[given(expr = "the property has a date field annotation with format {word}")]
fn given_date_format(world: &mut MappingWorld, format: String) {
    world.metadata_mut().field = Some(FieldAnnotation::date(parse_date_format(&format)));
}

#[given(expr = "the property has a custom date field annotation with pattern {string}")]
fn given_date_pattern(world: &mut MappingWorld, pattern: String) {
    world.metadata_mut().field = Some(FieldAnnotation::date_pattern(pattern));
}

#[then("the property has a converter")]
fn then_has_converter(world: &mut MappingWorld) {
    assert!(world.descriptor().has_property_converter());
}

#[then("the property has no converter")]
fn then_has_no_converter(world: &mut MappingWorld) {
    let descriptor = world.descriptor();
    assert!(!descriptor.has_property_converter());
    assert!(descriptor.property_converter().is_none());
}

#[then(expr = "writing the date {string} gives {string}")]
fn then_write_date(world: &mut MappingWorld, value: String, expected: String) {
    let written = world.converter().write(&date(&value).into()).expect("Write failed");
    assert_eq!(written, expected);
    world.last_written = Some(written);
}

#[then(expr = "writing the instant {string} gives {string}")]
fn then_write_instant(world: &mut MappingWorld, value: String, expected: String) {
    let written = world.converter().write(&instant(&value).into()).expect("Write failed");
    assert_eq!(written, expected);
    world.last_written = Some(written);
}

#[then(expr = "writing the epoch millisecond {int} gives {string}")]
fn then_write_epoch(world: &mut MappingWorld, millis: u64, expected: String) {
    let time = UNIX_EPOCH + Duration::from_millis(millis);
    let written = world.converter().write(&time.into()).expect("Write failed");
    assert_eq!(written, expected);
    world.last_written = Some(written);
}

#[then(expr = "reading {string} gives the date {string}")]
fn then_read_date(world: &mut MappingWorld, text: String, expected: String) {
    let value = world.converter().read(&text).expect("Read failed");
    assert_eq!(value.as_temporal(), Some(&TemporalValue::LocalDate(date(&expected))));
}

#[then(expr = "reading {string} gives the instant {string}")]
fn then_read_instant(world: &mut MappingWorld, text: String, expected: String) {
    let value = world.converter().read(&text).expect("Read failed");
    assert_eq!(value.as_temporal(), Some(&TemporalValue::Instant(instant(&expected))));
}

#[then(expr = "reading {string} gives the epoch millisecond {int}")]
fn then_read_epoch(world: &mut MappingWorld, text: String, millis: u64) {
    let value = world.converter().read(&text).expect("Read failed");
    let expected: SystemTime = UNIX_EPOCH + Duration::from_millis(millis);
    assert_eq!(value.as_legacy_date(), Some(expected));
}

#[then(expr = "reading {string} fails")]
fn then_read_fails(world: &mut MappingWorld, text: String) {
    let result = world.converter().read(&text);
    assert!(result.is_err(), "Expected '{}' to be rejected, got {:?}", text, result);
    world.last_read = Some(result);
}
