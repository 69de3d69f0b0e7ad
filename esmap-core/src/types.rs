//! Declared property types
//!
//! A statically-typed description of what a document field holds. The builder
//! never inspects live values to classify a property, only this description.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Calendar/date-time value types distinct from the legacy date representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemporalKind {
    /// `chrono::NaiveDate`
    LocalDate,
    /// `chrono::NaiveTime`
    LocalTime,
    /// `chrono::NaiveDateTime`
    LocalDateTime,
    /// `chrono::DateTime<FixedOffset>`
    OffsetDateTime,
    /// `chrono::DateTime<Utc>`
    Instant,
}

impl TemporalKind {
    pub fn name(&self) -> &'static str {
        match self {
            TemporalKind::LocalDate => "LocalDate",
            TemporalKind::LocalTime => "LocalTime",
            TemporalKind::LocalDateTime => "LocalDateTime",
            TemporalKind::OffsetDateTime => "OffsetDateTime",
            TemporalKind::Instant => "Instant",
        }
    }
}

/// Declared type of a document property
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyType {
    Bool,
    /// 32-bit signed integer
    Int,
    /// 64-bit signed integer
    Long,
    /// 32-bit float
    Float,
    Double,
    /// UTF-8 string
    Text,
    Temporal(TemporalKind),
    /// Legacy point-in-time (`std::time::SystemTime`)
    LegacyDate,
    /// Elasticsearch sequence number / primary term pair, held as a
    /// [`crate::seq_no::SeqNoPrimaryTerm`] value
    SeqNoPrimaryTerm,
    /// Nested object of the named document type
    Object(String),
    /// Boxed/nullable form of the inner type
    Optional(Box<PropertyType>),
    /// Multi-valued property; the element type is the actual type
    Collection(Box<PropertyType>),
}

impl PropertyType {
    pub fn optional(inner: PropertyType) -> Self {
        PropertyType::Optional(Box::new(inner))
    }

    pub fn collection(element: PropertyType) -> Self {
        PropertyType::Collection(Box::new(element))
    }

    /// The declared type with `Optional` wrappers removed
    pub fn raw_type(&self) -> &PropertyType {
        match self {
            PropertyType::Optional(inner) => inner.raw_type(),
            other => other,
        }
    }

    /// The raw type with collection wrappers removed as well
    pub fn actual_type(&self) -> &PropertyType {
        match self.raw_type() {
            PropertyType::Collection(element) => element.actual_type(),
            other => other,
        }
    }

    pub fn is_long(&self) -> bool {
        matches!(self.raw_type(), PropertyType::Long)
    }

    pub fn is_float(&self) -> bool {
        matches!(self.raw_type(), PropertyType::Float)
    }

    pub fn is_text(&self) -> bool {
        matches!(self.raw_type(), PropertyType::Text)
    }

    pub fn is_seq_no_primary_term(&self) -> bool {
        matches!(self.raw_type(), PropertyType::SeqNoPrimaryTerm)
    }

    /// Temporal kind of the actual type, if any
    pub fn temporal_kind(&self) -> Option<TemporalKind> {
        match self.actual_type() {
            PropertyType::Temporal(kind) => Some(*kind),
            _ => None,
        }
    }

    pub fn is_legacy_date(&self) -> bool {
        matches!(self.actual_type(), PropertyType::LegacyDate)
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyType::Bool => write!(f, "bool"),
            PropertyType::Int => write!(f, "i32"),
            PropertyType::Long => write!(f, "i64"),
            PropertyType::Float => write!(f, "f32"),
            PropertyType::Double => write!(f, "f64"),
            PropertyType::Text => write!(f, "String"),
            PropertyType::Temporal(kind) => write!(f, "{}", kind.name()),
            PropertyType::LegacyDate => write!(f, "SystemTime"),
            PropertyType::SeqNoPrimaryTerm => write!(f, "SeqNoPrimaryTerm"),
            PropertyType::Object(name) => write!(f, "{}", name),
            PropertyType::Optional(inner) => write!(f, "Option<{}>", inner),
            PropertyType::Collection(element) => write!(f, "Vec<{}>", element),
        }
    }
}
