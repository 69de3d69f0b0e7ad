//! Elasticsearch property descriptors
//!
//! A [`PropertyDescriptor`] is built once per document property when its
//! document type is registered. Construction validates the mapping rules and
//! fails with the first violation; a descriptor that exists is valid and never
//! changes afterwards.
//!
//! # Example
//!
//! ```rust,ignore
//! use esmap_core::prelude::*;
//! use chrono::NaiveDate;
//!
//! let metadata = FieldMetadata::new("published", PropertyType::Temporal(TemporalKind::LocalDate))
//!     .with_field(FieldAnnotation::date_pattern("yyyy/MM/dd"));
//!
//! let property = PropertyDescriptor::build(&metadata, "Article")?;
//! let converter = property.property_converter().unwrap();
//!
//! let date = NaiveDate::from_ymd_opt(2020, 10, 15).unwrap();
//! assert_eq!(converter.write(&date.into())?, "2020/10/15");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::config::{MappingConfig, DEFAULT_IDENTIFIER_NAMES};
use crate::converter::{DateConverter, PropertyConverter};
use crate::date::{DateFormat, DateFormatter};
use crate::error::{MappingError, MappingResult};
use crate::metadata::{FieldAnnotation, FieldMetadata, MultiFieldAnnotation};
use crate::types::PropertyType;
use serde_json::{json, Map, Value};

/// Mapped view of one document property
#[derive(Debug, Clone)]
pub struct PropertyDescriptor {
    name: String,
    owner: String,
    declared_type: PropertyType,
    field_name: String,
    explicit_id: bool,
    is_id: bool,
    is_version: bool,
    is_score: bool,
    is_parent: bool,
    is_seq_no_primary_term: bool,
    is_transient: bool,
    is_read_only: bool,
    field: Option<FieldAnnotation>,
    multi_field: Option<MultiFieldAnnotation>,
    converter: Option<DateConverter>,
}

impl PropertyDescriptor {
    /// Build a descriptor using the built-in identifier names (`id`, `document`)
    pub fn build(metadata: &FieldMetadata, owner: &str) -> MappingResult<Self> {
        Self::build_with_identifier_names(metadata, owner, |name| DEFAULT_IDENTIFIER_NAMES.contains(&name))
    }

    /// Build a descriptor using the identifier names of `config`
    pub fn build_with(metadata: &FieldMetadata, owner: &str, config: &MappingConfig) -> MappingResult<Self> {
        Self::build_with_identifier_names(metadata, owner, |name| config.is_identifier_name(name))
    }

    fn build_with_identifier_names(
        metadata: &FieldMetadata,
        owner: &str,
        is_identifier_name: impl Fn(&str) -> bool,
    ) -> MappingResult<Self> {
        let name = metadata.name.clone();
        let declared_type = metadata.declared_type.clone();

        let field_name = metadata.annotated_field_name().unwrap_or(&metadata.name).to_string();
        // Implicit identifier names match the property name, not the field name
        let is_id = metadata.id || is_identifier_name(&metadata.name);
        let is_score = metadata.score;
        let is_parent = metadata.parent;
        let is_seq_no_primary_term = declared_type.is_seq_no_primary_term();
        let qualified = || format!("{}.{}", owner, name);

        if metadata.version && !declared_type.is_long() {
            return Err(MappingError::VersionType { property: qualified() });
        }

        if is_score && !declared_type.is_float() {
            return Err(MappingError::ScoreType { property: qualified() });
        }

        if is_parent && !declared_type.is_text() {
            return Err(MappingError::ParentType { property: qualified() });
        }

        if metadata.field.is_some() && metadata.multi_field.is_some() {
            return Err(MappingError::FieldAndMultiField { property: qualified() });
        }

        let converter = select_date_converter(metadata, owner)?;

        log::debug!(
            "Mapped property {}.{} ({}) to field '{}' [id={}, version={}, score={}, parent={}, seq_no={}, converter={}]",
            owner,
            name,
            declared_type,
            field_name,
            is_id,
            metadata.version,
            is_score,
            is_parent,
            is_seq_no_primary_term,
            converter.is_some()
        );

        Ok(Self {
            name,
            owner: owner.to_string(),
            declared_type,
            field_name,
            explicit_id: metadata.id,
            is_id,
            is_version: metadata.version,
            is_score,
            is_parent,
            is_seq_no_primary_term,
            is_transient: metadata.transient,
            is_read_only: metadata.read_only,
            field: metadata.field.clone(),
            multi_field: metadata.multi_field.clone(),
            converter,
        })
    }

    /// Property name as declared on the document type
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name of the owning document type
    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn declared_type(&self) -> &PropertyType {
        &self.declared_type
    }

    /// Field name in the stored document
    pub fn field_name(&self) -> &str {
        &self.field_name
    }

    pub fn is_id_property(&self) -> bool {
        self.is_id
    }

    /// Whether the identifier flag comes from an explicit marker rather than
    /// the property name
    pub fn is_explicit_id_property(&self) -> bool {
        self.explicit_id
    }

    pub fn is_version_property(&self) -> bool {
        self.is_version
    }

    pub fn is_score_property(&self) -> bool {
        self.is_score
    }

    pub fn is_parent_property(&self) -> bool {
        self.is_parent
    }

    pub fn is_seq_no_primary_term_property(&self) -> bool {
        self.is_seq_no_primary_term
    }

    pub fn is_transient(&self) -> bool {
        self.is_transient
    }

    pub fn is_writable(&self) -> bool {
        !self.is_transient && !self.is_read_only && !self.is_seq_no_primary_term
    }

    pub fn is_readable(&self) -> bool {
        !self.is_transient && !self.is_seq_no_primary_term
    }

    pub fn is_immutable(&self) -> bool {
        false
    }

    /// Associations between documents are not mapped
    pub fn is_association(&self) -> bool {
        false
    }

    pub fn has_property_converter(&self) -> bool {
        self.converter.is_some()
    }

    pub fn property_converter(&self) -> Option<&dyn PropertyConverter> {
        self.converter.as_ref().map(|converter| converter as &dyn PropertyConverter)
    }

    pub fn date_converter(&self) -> Option<&DateConverter> {
        self.converter.as_ref()
    }

    /// Mapping of this property in an Elasticsearch index mapping
    ///
    /// `None` when the property is not stored (transient, score, seq-no/primary
    /// term) or carries no annotation to derive a mapping from.
    pub fn mapping(&self) -> Option<Value> {
        if !self.is_readable() || self.is_score {
            return None;
        }

        let main = self.field.as_ref().or(self.multi_field.as_ref().map(|multi| &multi.main_field))?;
        let mut mapping = field_mapping(main);

        if let Some(multi) = &self.multi_field {
            let mut fields = Map::new();
            for inner in &multi.other_fields {
                let mut inner_mapping = Map::new();
                if let Some(ty) = inner.field_type.mapping_type() {
                    inner_mapping.insert("type".to_string(), json!(ty));
                }
                if let Some(analyzer) = &inner.analyzer {
                    inner_mapping.insert("analyzer".to_string(), json!(analyzer));
                }
                if let Some(normalizer) = &inner.normalizer {
                    inner_mapping.insert("normalizer".to_string(), json!(normalizer));
                }
                fields.insert(inner.suffix.clone(), Value::Object(inner_mapping));
            }
            if !fields.is_empty() {
                mapping.insert("fields".to_string(), Value::Object(fields));
            }
        }

        Some(Value::Object(mapping))
    }
}

fn field_mapping(field: &FieldAnnotation) -> Map<String, Value> {
    let mut mapping = Map::new();

    if let Some(ty) = field.field_type.mapping_type() {
        mapping.insert("type".to_string(), json!(ty));
    }

    if field.field_type.is_date() {
        match field.format {
            DateFormat::None => {}
            DateFormat::Custom => {
                mapping.insert("format".to_string(), json!(field.pattern));
            }
            named => {
                mapping.insert("format".to_string(), json!(named.name()));
            }
        }
    }

    if !field.index {
        mapping.insert("index".to_string(), json!(false));
    }
    if field.store {
        mapping.insert("store".to_string(), json!(true));
    }
    if let Some(analyzer) = &field.analyzer {
        mapping.insert("analyzer".to_string(), json!(analyzer));
    }
    if let Some(search_analyzer) = &field.search_analyzer {
        mapping.insert("search_analyzer".to_string(), json!(search_analyzer));
    }
    if let Some(normalizer) = &field.normalizer {
        mapping.insert("normalizer".to_string(), json!(normalizer));
    }
    if !field.copy_to.is_empty() {
        mapping.insert("copy_to".to_string(), json!(field.copy_to));
    }

    mapping
}

/// Pick a date converter for date-typed fields that declare a date format.
///
/// Fields that are not date fields, or whose actual type is neither temporal
/// nor a legacy date, get no converter.
fn select_date_converter(metadata: &FieldMetadata, owner: &str) -> MappingResult<Option<DateConverter>> {
    let field = match &metadata.field {
        Some(field) if field.field_type.is_date() => field,
        _ => return Ok(None),
    };

    let temporal = metadata.declared_type.temporal_kind();
    let legacy_date = metadata.declared_type.is_legacy_date();
    if temporal.is_none() && !legacy_date {
        return Ok(None);
    }

    let property = format!("{}.{}", owner, metadata.name);

    let formatter = match field.format {
        DateFormat::None => {
            return Err(MappingError::MissingDateFormat {
                property,
                field_type: field.field_type.name().to_string(),
            });
        }
        DateFormat::Custom => {
            if field.pattern.is_empty() {
                return Err(MappingError::MissingDatePattern {
                    property,
                    field_type: field.field_type.name().to_string(),
                });
            }
            DateFormatter::for_pattern(&field.pattern).map_err(|e| MappingError::InvalidDatePattern {
                property,
                pattern: field.pattern.clone(),
                reason: e.to_string(),
            })?
        }
        named => DateFormatter::of(named).ok_or_else(|| MappingError::InvalidDatePattern {
            property,
            pattern: named.name().to_string(),
            reason: "no formatter for named format".to_string(),
        })?,
    };

    Ok(Some(match temporal {
        Some(kind) => DateConverter::temporal(formatter, kind),
        None => DateConverter::legacy_date(formatter),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::{FieldType, InnerField};
    use crate::types::TemporalKind;
    use crate::value::PropertyValue;
    use chrono::NaiveDate;

    fn build(metadata: FieldMetadata) -> MappingResult<PropertyDescriptor> {
        PropertyDescriptor::build(&metadata, "Article")
    }

    #[test]
    fn test_field_name_resolution() {
        let plain = build(FieldMetadata::new("title", PropertyType::Text)).unwrap();
        assert_eq!(plain.field_name(), "title");

        let renamed = build(
            FieldMetadata::new("title", PropertyType::Text)
                .with_field(FieldAnnotation::new(FieldType::Text).with_name("headline")),
        )
        .unwrap();
        assert_eq!(renamed.field_name(), "headline");
        assert_eq!(renamed.name(), "title");
    }

    #[test]
    fn test_identifier_names_use_property_name() {
        let id = build(
            FieldMetadata::new("id", PropertyType::Text)
                .with_field(FieldAnnotation::new(FieldType::Keyword).with_name("_key")),
        )
        .unwrap();
        assert!(id.is_id_property());
        assert!(!id.is_explicit_id_property());
        assert_eq!(id.field_name(), "_key");

        let renamed_to_id = build(
            FieldMetadata::new("key", PropertyType::Text)
                .with_field(FieldAnnotation::new(FieldType::Keyword).with_name("id")),
        )
        .unwrap();
        assert!(!renamed_to_id.is_id_property());

        assert!(build(FieldMetadata::new("document", PropertyType::Text)).unwrap().is_id_property());
        assert!(build(FieldMetadata::new("uid", PropertyType::Text).with_id()).unwrap().is_id_property());
    }

    #[test]
    fn test_configured_identifier_names() {
        let config = MappingConfig { identifier_names: vec!["uid".to_string()], ..Default::default() };
        let uid = PropertyDescriptor::build_with(&FieldMetadata::new("uid", PropertyType::Text), "Article", &config)
            .unwrap();
        let id = PropertyDescriptor::build_with(&FieldMetadata::new("id", PropertyType::Text), "Article", &config)
            .unwrap();

        assert!(uid.is_id_property());
        assert!(!id.is_id_property());
    }

    #[test]
    fn test_version_must_be_long() {
        let err = build(FieldMetadata::new("version", PropertyType::Int).with_version()).unwrap_err();
        assert_eq!(err, MappingError::VersionType { property: "Article.version".to_string() });
        assert_eq!(err.to_string(), "Version property Article.version must be of type Long!");

        let ok = build(FieldMetadata::new("version", PropertyType::optional(PropertyType::Long)).with_version());
        assert!(ok.unwrap().is_version_property());
    }

    #[test]
    fn test_score_must_be_float() {
        assert!(build(FieldMetadata::new("score", PropertyType::Float).with_score()).is_ok());
        assert!(build(FieldMetadata::new("score", PropertyType::optional(PropertyType::Float)).with_score()).is_ok());
        assert!(matches!(
            build(FieldMetadata::new("score", PropertyType::Double).with_score()),
            Err(MappingError::ScoreType { .. })
        ));
    }

    #[test]
    fn test_parent_must_be_text() {
        assert!(build(FieldMetadata::new("parent", PropertyType::Text).with_parent()).unwrap().is_parent_property());
        assert!(matches!(
            build(FieldMetadata::new("parent", PropertyType::Long).with_parent()),
            Err(MappingError::ParentType { .. })
        ));
    }

    #[test]
    fn test_rules_are_checked_in_order() {
        // Version is reported before the field/multi-field conflict
        let metadata = FieldMetadata::new("version", PropertyType::Text)
            .with_version()
            .with_field(FieldAnnotation::new(FieldType::Text))
            .with_multi_field(MultiFieldAnnotation::default());
        assert!(matches!(build(metadata), Err(MappingError::VersionType { .. })));
    }

    #[test]
    fn test_field_and_multi_field_conflict() {
        let metadata = FieldMetadata::new("title", PropertyType::Text)
            .with_field(FieldAnnotation::new(FieldType::Text))
            .with_multi_field(MultiFieldAnnotation::new(FieldAnnotation::new(FieldType::Text)));
        assert!(matches!(build(metadata), Err(MappingError::FieldAndMultiField { .. })));
    }

    #[test]
    fn test_date_without_format_fails_with_owner_in_message() {
        let metadata = FieldMetadata::new("published", PropertyType::Temporal(TemporalKind::LocalDate))
            .with_field(FieldAnnotation::new(FieldType::DateNanos));
        let err = build(metadata).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Property Article.published is annotated with FieldType.Date_Nanos but has no DateFormat defined"
        );
    }

    #[test]
    fn test_custom_format_needs_pattern() {
        let metadata = FieldMetadata::new("published", PropertyType::LegacyDate)
            .with_field(FieldAnnotation::date(DateFormat::Custom));
        assert!(matches!(build(metadata), Err(MappingError::MissingDatePattern { .. })));
    }

    #[test]
    fn test_invalid_custom_pattern_fails_at_build_time() {
        let metadata = FieldMetadata::new("published", PropertyType::LegacyDate)
            .with_field(FieldAnnotation::date_pattern("yyyy-QQ"));
        assert!(matches!(build(metadata), Err(MappingError::InvalidDatePattern { .. })));
    }

    #[test]
    fn test_no_converter_without_date_semantics() {
        // Date annotation on a non-date type
        let text = build(
            FieldMetadata::new("published", PropertyType::Text).with_field(FieldAnnotation::date(DateFormat::None)),
        )
        .unwrap();
        assert!(!text.has_property_converter());

        // Temporal type without a date annotation
        let keyword = build(
            FieldMetadata::new("published", PropertyType::Temporal(TemporalKind::Instant))
                .with_field(FieldAnnotation::new(FieldType::Keyword)),
        )
        .unwrap();
        assert!(!keyword.has_property_converter());

        // Multi-field main fields never select a converter
        let multi = build(
            FieldMetadata::new("published", PropertyType::Temporal(TemporalKind::Instant))
                .with_multi_field(MultiFieldAnnotation::new(FieldAnnotation::date(DateFormat::None))),
        )
        .unwrap();
        assert!(!multi.has_property_converter());
    }

    #[test]
    fn test_collection_of_dates_gets_element_converter() {
        let metadata = FieldMetadata::new(
            "history",
            PropertyType::collection(PropertyType::Temporal(TemporalKind::LocalDate)),
        )
        .with_field(FieldAnnotation::date(DateFormat::BasicDate));
        let property = build(metadata).unwrap();

        let converter = property.property_converter().unwrap();
        let value = PropertyValue::from(NaiveDate::from_ymd_opt(2020, 10, 15).unwrap());
        assert_eq!(converter.write(&value).unwrap(), "20201015");
        assert_eq!(converter.read("20201015").unwrap(), value);
    }

    #[test]
    fn test_seq_no_primary_term_is_neither_readable_nor_writable() {
        let property = build(FieldMetadata::new("seqNoPrimaryTerm", PropertyType::SeqNoPrimaryTerm)).unwrap();
        assert!(property.is_seq_no_primary_term_property());
        assert!(!property.is_readable());
        assert!(!property.is_writable());
        assert!(!property.is_transient());
    }

    #[test]
    fn test_transient_and_read_only() {
        let transient = build(FieldMetadata::new("cache", PropertyType::Text).with_transient()).unwrap();
        assert!(!transient.is_readable());
        assert!(!transient.is_writable());

        let read_only = build(FieldMetadata::new("computed", PropertyType::Text).with_read_only()).unwrap();
        assert!(read_only.is_readable());
        assert!(!read_only.is_writable());
    }

    #[test]
    fn test_mapping_for_custom_date() {
        let property = build(
            FieldMetadata::new("published", PropertyType::Temporal(TemporalKind::LocalDate))
                .with_field(FieldAnnotation::date_pattern("yyyy/MM/dd").stored()),
        )
        .unwrap();
        assert_eq!(
            property.mapping().unwrap(),
            json!({ "type": "date", "format": "yyyy/MM/dd", "store": true })
        );
    }

    #[test]
    fn test_mapping_for_multi_field() {
        let multi = MultiFieldAnnotation::new(FieldAnnotation::new(FieldType::Text).with_analyzer("standard"))
            .with_inner_field(InnerField::new("keyword", FieldType::Keyword));
        let property = build(FieldMetadata::new("title", PropertyType::Text).with_multi_field(multi)).unwrap();

        assert_eq!(
            property.mapping().unwrap(),
            json!({
                "type": "text",
                "analyzer": "standard",
                "fields": { "keyword": { "type": "keyword" } }
            })
        );
    }

    #[test]
    fn test_no_mapping_for_unstored_properties() {
        let score = build(FieldMetadata::new("score", PropertyType::Float).with_score()).unwrap();
        assert!(score.mapping().is_none());

        let plain = build(FieldMetadata::new("title", PropertyType::Text)).unwrap();
        assert!(plain.mapping().is_none());
    }
}
