//! Field metadata records
//!
//! The input of the descriptor builder. Mapping annotations are plain typed
//! fields here: a property either carries a `FieldAnnotation` or it doesn't,
//! and the marker annotations are booleans.

use crate::date::DateFormat;
use crate::types::PropertyType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Elasticsearch field datatype declared on a field annotation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    /// Let the mapping layer infer the datatype
    #[default]
    Auto,
    Text,
    Keyword,
    Long,
    Integer,
    Short,
    Byte,
    Double,
    Float,
    HalfFloat,
    ScaledFloat,
    Date,
    DateNanos,
    Boolean,
    Binary,
    IntegerRange,
    FloatRange,
    LongRange,
    DoubleRange,
    DateRange,
    IpRange,
    Object,
    Nested,
    Ip,
    TokenCount,
    Percolator,
    Flattened,
    SearchAsYouType,
}

impl FieldType {
    /// Name as written in the `FieldType` enumeration of mapping annotations
    pub fn name(&self) -> &'static str {
        match self {
            FieldType::Auto => "Auto",
            FieldType::Text => "Text",
            FieldType::Keyword => "Keyword",
            FieldType::Long => "Long",
            FieldType::Integer => "Integer",
            FieldType::Short => "Short",
            FieldType::Byte => "Byte",
            FieldType::Double => "Double",
            FieldType::Float => "Float",
            FieldType::HalfFloat => "Half_Float",
            FieldType::ScaledFloat => "Scaled_Float",
            FieldType::Date => "Date",
            FieldType::DateNanos => "Date_Nanos",
            FieldType::Boolean => "Boolean",
            FieldType::Binary => "Binary",
            FieldType::IntegerRange => "Integer_Range",
            FieldType::FloatRange => "Float_Range",
            FieldType::LongRange => "Long_Range",
            FieldType::DoubleRange => "Double_Range",
            FieldType::DateRange => "Date_Range",
            FieldType::IpRange => "Ip_Range",
            FieldType::Object => "Object",
            FieldType::Nested => "Nested",
            FieldType::Ip => "Ip",
            FieldType::TokenCount => "TokenCount",
            FieldType::Percolator => "Percolator",
            FieldType::Flattened => "Flattened",
            FieldType::SearchAsYouType => "Search_As_You_Type",
        }
    }

    /// Datatype name used in an Elasticsearch index mapping
    pub fn mapping_type(&self) -> Option<&'static str> {
        let name = match self {
            FieldType::Auto => return None,
            FieldType::Text => "text",
            FieldType::Keyword => "keyword",
            FieldType::Long => "long",
            FieldType::Integer => "integer",
            FieldType::Short => "short",
            FieldType::Byte => "byte",
            FieldType::Double => "double",
            FieldType::Float => "float",
            FieldType::HalfFloat => "half_float",
            FieldType::ScaledFloat => "scaled_float",
            FieldType::Date => "date",
            FieldType::DateNanos => "date_nanos",
            FieldType::Boolean => "boolean",
            FieldType::Binary => "binary",
            FieldType::IntegerRange => "integer_range",
            FieldType::FloatRange => "float_range",
            FieldType::LongRange => "long_range",
            FieldType::DoubleRange => "double_range",
            FieldType::DateRange => "date_range",
            FieldType::IpRange => "ip_range",
            FieldType::Object => "object",
            FieldType::Nested => "nested",
            FieldType::Ip => "ip",
            FieldType::TokenCount => "token_count",
            FieldType::Percolator => "percolator",
            FieldType::Flattened => "flattened",
            FieldType::SearchAsYouType => "search_as_you_type",
        };
        Some(name)
    }

    pub fn is_date(&self) -> bool {
        matches!(self, FieldType::Date | FieldType::DateNanos)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Single-field mapping annotation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldAnnotation {
    /// Field name in the stored document; blank keeps the property name
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub format: DateFormat,
    /// Layout for `DateFormat::Custom`
    pub pattern: String,
    pub index: bool,
    pub store: bool,
    pub analyzer: Option<String>,
    pub search_analyzer: Option<String>,
    pub normalizer: Option<String>,
    pub copy_to: Vec<String>,
}

impl Default for FieldAnnotation {
    fn default() -> Self {
        Self {
            name: String::new(),
            field_type: FieldType::Auto,
            format: DateFormat::None,
            pattern: String::new(),
            index: true,
            store: false,
            analyzer: None,
            search_analyzer: None,
            normalizer: None,
            copy_to: Vec::new(),
        }
    }
}

impl FieldAnnotation {
    pub fn new(field_type: FieldType) -> Self {
        Self { field_type, ..Default::default() }
    }

    /// Date field with a named format
    pub fn date(format: DateFormat) -> Self {
        Self { field_type: FieldType::Date, format, ..Default::default() }
    }

    /// Date field with a custom layout
    pub fn date_pattern(pattern: impl Into<String>) -> Self {
        Self {
            field_type: FieldType::Date,
            format: DateFormat::Custom,
            pattern: pattern.into(),
            ..Default::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_format(mut self, format: DateFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = pattern.into();
        self
    }

    pub fn with_analyzer(mut self, analyzer: impl Into<String>) -> Self {
        self.analyzer = Some(analyzer.into());
        self
    }

    pub fn not_indexed(mut self) -> Self {
        self.index = false;
        self
    }

    pub fn stored(mut self) -> Self {
        self.store = true;
        self
    }
}

/// Additional sub-field of a multi-field mapping
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InnerField {
    /// Sub-field suffix, e.g. `keyword` for `title.keyword`
    pub suffix: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(default)]
    pub analyzer: Option<String>,
    #[serde(default)]
    pub normalizer: Option<String>,
}

impl InnerField {
    pub fn new(suffix: impl Into<String>, field_type: FieldType) -> Self {
        Self { suffix: suffix.into(), field_type, analyzer: None, normalizer: None }
    }
}

/// Multi-field mapping annotation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MultiFieldAnnotation {
    pub main_field: FieldAnnotation,
    pub other_fields: Vec<InnerField>,
}

impl MultiFieldAnnotation {
    pub fn new(main_field: FieldAnnotation) -> Self {
        Self { main_field, other_fields: Vec::new() }
    }

    pub fn with_inner_field(mut self, inner: InnerField) -> Self {
        self.other_fields.push(inner);
        self
    }
}

/// Everything known about one property before it is mapped
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMetadata {
    /// Property name as declared on the document type
    pub name: String,
    #[serde(rename = "type")]
    pub declared_type: PropertyType,
    #[serde(default)]
    pub field: Option<FieldAnnotation>,
    #[serde(default)]
    pub multi_field: Option<MultiFieldAnnotation>,
    /// Explicit identifier marker
    #[serde(default)]
    pub id: bool,
    #[serde(default)]
    pub version: bool,
    #[serde(default)]
    pub score: bool,
    #[serde(default)]
    pub parent: bool,
    #[serde(default)]
    pub transient: bool,
    #[serde(default)]
    pub read_only: bool,
}

impl FieldMetadata {
    pub fn new(name: impl Into<String>, declared_type: PropertyType) -> Self {
        Self {
            name: name.into(),
            declared_type,
            field: None,
            multi_field: None,
            id: false,
            version: false,
            score: false,
            parent: false,
            transient: false,
            read_only: false,
        }
    }

    pub fn with_field(mut self, field: FieldAnnotation) -> Self {
        self.field = Some(field);
        self
    }

    pub fn with_multi_field(mut self, multi_field: MultiFieldAnnotation) -> Self {
        self.multi_field = Some(multi_field);
        self
    }

    pub fn with_id(mut self) -> Self {
        self.id = true;
        self
    }

    pub fn with_version(mut self) -> Self {
        self.version = true;
        self
    }

    pub fn with_score(mut self) -> Self {
        self.score = true;
        self
    }

    pub fn with_parent(mut self) -> Self {
        self.parent = true;
        self
    }

    pub fn with_transient(mut self) -> Self {
        self.transient = true;
        self
    }

    pub fn with_read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    /// Name override declared by the field or multi-field annotation
    pub fn annotated_field_name(&self) -> Option<&str> {
        let name = if let Some(field) = &self.field {
            field.name.as_str()
        } else if let Some(multi_field) = &self.multi_field {
            multi_field.main_field.name.as_str()
        } else {
            ""
        };

        if name.trim().is_empty() {
            None
        } else {
            Some(name)
        }
    }
}
