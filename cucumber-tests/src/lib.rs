//! Cucumber BDD suite for esmap
//!
//! Feature files live in `features/`, step definitions in `tests/steps/`.
//! This crate only holds the shared [`MappingWorld`] and a few parsing helpers
//! used by the steps.

use cucumber::World;
use esmap_core::prelude::*;
use std::str::FromStr;

#[derive(Debug, Default, World)]
pub struct MappingWorld {
    /// Property being declared by the current scenario
    pub metadata: Option<FieldMetadata>,
    pub config: MappingConfig,
    pub owner: String,
    pub last_result: Option<Result<PropertyDescriptor, MappingError>>,
    pub previous_result: Option<Result<PropertyDescriptor, MappingError>>,
    pub entity_fields: Vec<FieldMetadata>,
    pub entity_result: Option<Result<EntityDescriptor, MappingError>>,
    pub last_written: Option<String>,
    pub last_read: Option<Result<PropertyValue, ConversionError>>,
}

impl MappingWorld {
    pub fn metadata_mut(&mut self) -> &mut FieldMetadata {
        self.metadata.as_mut().expect("No property declared in this scenario")
    }

    pub fn descriptor(&self) -> &PropertyDescriptor {
        match self.last_result.as_ref().expect("The property was not built") {
            Ok(descriptor) => descriptor,
            Err(e) => panic!("The property build failed: {}", e),
        }
    }

    pub fn build(&mut self) {
        let metadata = self.metadata.as_ref().expect("No property declared in this scenario");
        let owner = if self.owner.is_empty() { "Document" } else { self.owner.as_str() };
        let result = PropertyDescriptor::build_with(metadata, owner, &self.config);
        self.previous_result = self.last_result.replace(result);
    }

    pub fn entity(&self) -> &EntityDescriptor {
        match self.entity_result.as_ref().expect("No entity was registered") {
            Ok(entity) => entity,
            Err(e) => panic!("Entity registration failed: {}", e),
        }
    }

    pub fn converter(&self) -> &dyn PropertyConverter {
        self.descriptor().property_converter().expect("The property has no converter")
    }
}

/// Parses the type names used in feature files, e.g. `Long`, `Option<Float>`,
/// `Vec<LocalDate>` or `SystemTime`.
pub fn parse_property_type(name: &str) -> PropertyType {
    let name = name.trim();
    if let Some(inner) = name.strip_prefix("Option<").and_then(|rest| rest.strip_suffix('>')) {
        return PropertyType::optional(parse_property_type(inner));
    }
    if let Some(inner) = name.strip_prefix("Vec<").and_then(|rest| rest.strip_suffix('>')) {
        return PropertyType::collection(parse_property_type(inner));
    }

    match name {
        "bool" | "Boolean" => PropertyType::Bool,
        "i32" | "Int" | "Integer" => PropertyType::Int,
        "i64" | "Long" => PropertyType::Long,
        "f32" | "Float" => PropertyType::Float,
        "f64" | "Double" => PropertyType::Double,
        "String" | "Text" => PropertyType::Text,
        "LocalDate" => PropertyType::Temporal(TemporalKind::LocalDate),
        "LocalTime" => PropertyType::Temporal(TemporalKind::LocalTime),
        "LocalDateTime" => PropertyType::Temporal(TemporalKind::LocalDateTime),
        "OffsetDateTime" => PropertyType::Temporal(TemporalKind::OffsetDateTime),
        "Instant" => PropertyType::Temporal(TemporalKind::Instant),
        "SystemTime" | "Date" => PropertyType::LegacyDate,
        "SeqNoPrimaryTerm" => PropertyType::SeqNoPrimaryTerm,
        other => PropertyType::Object(other.to_string()),
    }
}

pub fn parse_date_format(name: &str) -> DateFormat {
    DateFormat::from_str(name).unwrap_or_else(|e| panic!("{}", e))
}

pub fn parse_field_type(name: &str) -> FieldType {
    match name {
        "Auto" => FieldType::Auto,
        "Text" => FieldType::Text,
        "Keyword" => FieldType::Keyword,
        "Long" => FieldType::Long,
        "Integer" => FieldType::Integer,
        "Float" => FieldType::Float,
        "Date" => FieldType::Date,
        "Date_Nanos" => FieldType::DateNanos,
        other => panic!("Unsupported field type in feature file: {}", other),
    }
}
