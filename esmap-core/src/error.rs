//! Error types for property mapping and value conversion

/// Mapping result type
pub type MappingResult<T> = Result<T, MappingError>;

/// Raised while building a property or entity descriptor.
///
/// Every variant is a mapping-configuration defect: it surfaces when a document
/// type is registered, never per request.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MappingError {
    #[error("Version property {property} must be of type Long!")]
    VersionType { property: String },
    #[error("Score property {property} must be either of type float or Float!")]
    ScoreType { property: String },
    #[error("Parent property {property} must be of type String!")]
    ParentType { property: String },
    #[error("@Field annotation must not be used on a @MultiField property ({property}).")]
    FieldAndMultiField { property: String },
    #[error("Property {property} is annotated with FieldType.{field_type} but has no DateFormat defined")]
    MissingDateFormat { property: String, field_type: String },
    #[error("Property {property} is annotated with FieldType.{field_type} and a custom format but has no pattern defined")]
    MissingDatePattern { property: String, field_type: String },
    #[error("Property {property} declares an invalid date pattern '{pattern}': {reason}")]
    InvalidDatePattern { property: String, pattern: String, reason: String },
    #[error("Attempt to add {kind} property {property} but already have property {existing} registered as {kind} on {entity}")]
    DuplicateSpecialProperty { entity: String, kind: &'static str, property: String, existing: String },
    #[error("Entity {entity} maps both {first} and {second} to field name '{field_name}'")]
    DuplicateFieldName { entity: String, field_name: String, first: String, second: String },
    #[error("Invalid entity definition: {0}")]
    InvalidDefinition(String),
}

/// Raised by a date converter when a value cannot be rendered or parsed.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    #[error("Cannot parse '{input}' with format {format}: {reason}")]
    Parse { input: String, format: String, reason: String },
    #[error("Cannot format value with format {format}: {reason}")]
    Format { format: String, reason: String },
    #[error("Value out of range: {0}")]
    OutOfRange(String),
}

/// Conversion result type
pub type ConversionResult<T> = Result<T, ConversionError>;
