//! Document type descriptors
//!
//! Registers every property of one document type and enforces the rules that
//! span properties: one identifier, one version, one score, one parent, one
//! seq-no/primary-term property, and unique stored field names.

use crate::config::MappingConfig;
use crate::error::{MappingError, MappingResult};
use crate::metadata::FieldMetadata;
use crate::property::PropertyDescriptor;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Declarative description of a document type
///
/// ```toml
/// name = "Article"
///
/// [[property]]
/// name = "id"
/// type = "text"
///
/// [[property]]
/// name = "published"
/// type = { temporal = "local_date" }
/// field = { type = "date", format = "custom", pattern = "yyyy/MM/dd" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityDefinition {
    pub name: String,
    #[serde(default, rename = "property")]
    pub properties: Vec<FieldMetadata>,
}

/// Mapped view of one document type
#[derive(Debug, Clone)]
pub struct EntityDescriptor {
    type_name: String,
    properties: Vec<PropertyDescriptor>,
    by_name: HashMap<String, usize>,
    by_field_name: HashMap<String, usize>,
    id: Option<usize>,
    version: Option<usize>,
    score: Option<usize>,
    parent: Option<usize>,
    seq_no_primary_term: Option<usize>,
}

impl EntityDescriptor {
    pub fn build(type_name: &str, fields: &[FieldMetadata]) -> MappingResult<Self> {
        Self::build_with(type_name, fields, &MappingConfig::default())
    }

    pub fn build_with(type_name: &str, fields: &[FieldMetadata], config: &MappingConfig) -> MappingResult<Self> {
        let mut entity = Self {
            type_name: type_name.to_string(),
            properties: Vec::with_capacity(fields.len()),
            by_name: HashMap::new(),
            by_field_name: HashMap::new(),
            id: None,
            version: None,
            score: None,
            parent: None,
            seq_no_primary_term: None,
        };

        for metadata in fields {
            let property = PropertyDescriptor::build_with(metadata, type_name, config)?;
            entity.add_property(property)?;
        }

        if entity.id.is_none() {
            log::warn!("Entity {} has no identifier property", type_name);
        }

        log::debug!("Registered entity {} with {} properties", type_name, entity.properties.len());

        Ok(entity)
    }

    pub fn from_definition(definition: &EntityDefinition, config: &MappingConfig) -> MappingResult<Self> {
        Self::build_with(&definition.name, &definition.properties, config)
    }

    /// Build from a TOML [`EntityDefinition`]
    pub fn from_toml(source: &str, config: &MappingConfig) -> MappingResult<Self> {
        let definition: EntityDefinition =
            toml::from_str(source).map_err(|e| MappingError::InvalidDefinition(e.to_string()))?;
        Self::from_definition(&definition, config)
    }

    fn add_property(&mut self, property: PropertyDescriptor) -> MappingResult<()> {
        let index = self.properties.len();

        if self.by_name.contains_key(property.name()) {
            return Err(MappingError::InvalidDefinition(format!(
                "Entity {} declares property {} twice",
                self.type_name,
                property.name()
            )));
        }

        if property.is_readable() {
            if let Some(&existing) = self.by_field_name.get(property.field_name()) {
                return Err(MappingError::DuplicateFieldName {
                    entity: self.type_name.clone(),
                    field_name: property.field_name().to_string(),
                    first: self.properties[existing].name().to_string(),
                    second: property.name().to_string(),
                });
            }
        }

        if property.is_id_property() {
            self.register_id(index, &property)?;
        }
        if property.is_version_property() {
            self.version = Some(self.register_unique("version", self.version, index, &property)?);
        }
        if property.is_score_property() {
            self.score = Some(self.register_unique("score", self.score, index, &property)?);
        }
        if property.is_parent_property() {
            self.parent = Some(self.register_unique("parent", self.parent, index, &property)?);
        }
        if property.is_seq_no_primary_term_property() {
            self.seq_no_primary_term =
                Some(self.register_unique("seq_no_primary_term", self.seq_no_primary_term, index, &property)?);
        }

        self.by_name.insert(property.name().to_string(), index);
        if property.is_readable() {
            self.by_field_name.insert(property.field_name().to_string(), index);
        }
        self.properties.push(property);

        Ok(())
    }

    /// An explicitly marked identifier wins over one derived from the
    /// property name; two candidates of the same kind are a conflict.
    fn register_id(&mut self, index: usize, property: &PropertyDescriptor) -> MappingResult<()> {
        match self.id {
            None => self.id = Some(index),
            Some(existing) => {
                let current = &self.properties[existing];
                match (current.is_explicit_id_property(), property.is_explicit_id_property()) {
                    (false, true) => {
                        log::debug!(
                            "{}: explicit id property {} replaces implicit id property {}",
                            self.type_name,
                            property.name(),
                            current.name()
                        );
                        self.id = Some(index);
                    }
                    (true, false) => {}
                    _ => {
                        return Err(MappingError::DuplicateSpecialProperty {
                            entity: self.type_name.clone(),
                            kind: "id",
                            property: property.name().to_string(),
                            existing: current.name().to_string(),
                        });
                    }
                }
            }
        }
        Ok(())
    }

    fn register_unique(
        &self,
        kind: &'static str,
        current: Option<usize>,
        index: usize,
        property: &PropertyDescriptor,
    ) -> MappingResult<usize> {
        match current {
            None => Ok(index),
            Some(existing) => Err(MappingError::DuplicateSpecialProperty {
                entity: self.type_name.clone(),
                kind,
                property: property.name().to_string(),
                existing: self.properties[existing].name().to_string(),
            }),
        }
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn properties(&self) -> &[PropertyDescriptor] {
        &self.properties
    }

    pub fn property(&self, name: &str) -> Option<&PropertyDescriptor> {
        self.by_name.get(name).map(|&index| &self.properties[index])
    }

    /// Property stored under `field_name` in the document source
    pub fn property_by_field_name(&self, field_name: &str) -> Option<&PropertyDescriptor> {
        self.by_field_name.get(field_name).map(|&index| &self.properties[index])
    }

    pub fn id_property(&self) -> Option<&PropertyDescriptor> {
        self.id.map(|index| &self.properties[index])
    }

    pub fn version_property(&self) -> Option<&PropertyDescriptor> {
        self.version.map(|index| &self.properties[index])
    }

    pub fn score_property(&self) -> Option<&PropertyDescriptor> {
        self.score.map(|index| &self.properties[index])
    }

    pub fn parent_property(&self) -> Option<&PropertyDescriptor> {
        self.parent.map(|index| &self.properties[index])
    }

    pub fn seq_no_primary_term_property(&self) -> Option<&PropertyDescriptor> {
        self.seq_no_primary_term.map(|index| &self.properties[index])
    }

    /// Index mapping with every property that has one
    pub fn mapping(&self) -> Value {
        let mut properties = Map::new();
        for property in &self.properties {
            if let Some(mapping) = property.mapping() {
                properties.insert(property.field_name().to_string(), mapping);
            }
        }

        let mut mapping = Map::new();
        mapping.insert("properties".to_string(), Value::Object(properties));
        Value::Object(mapping)
    }
}
