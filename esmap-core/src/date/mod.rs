//! Date formats, layout compilation and formatting
//!
//! Date-typed document fields are stored in Elasticsearch as text rendered
//! with either a built-in named format ([`DateFormat`]) or a custom Java-style
//! layout. [`DateFormatter`] compiles either once and is then reused for every
//! value of the field.

pub mod format;
pub mod formatter;
pub mod pattern;

pub use format::{DateFormat, NamedRule};
pub use formatter::DateFormatter;
pub use pattern::{CompiledPattern, Components, PatternError};
