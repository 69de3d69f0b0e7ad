//! esmap - Core
//!
//! Elasticsearch property mapping for Rust document types.
//!
//! # Overview
//!
//! A document type is described property by property with [`FieldMetadata`]:
//! the declared type plus the mapping annotations (field, multi-field, score,
//! parent, version, ...). esmap turns each record into an immutable
//! [`PropertyDescriptor`] that knows the stored field name, whether the
//! property is the identifier, score, parent or seq-no/primary-term property,
//! whether it is read and written, and, for date fields, how values are
//! rendered to and parsed from text.
//!
//! Mapping rules are checked when the descriptor is built. A bad mapping is a
//! configuration defect and surfaces as a [`MappingError`] at registration time,
//! never while documents are read or written.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use esmap_core::prelude::*;
//!
//! let article = EntityDescriptor::build(
//!     "Article",
//!     &[
//!         FieldMetadata::new("id", PropertyType::Text),
//!         FieldMetadata::new("version", PropertyType::Long).with_version(),
//!         FieldMetadata::new("published", PropertyType::Temporal(TemporalKind::LocalDate))
//!             .with_field(FieldAnnotation::date_pattern("yyyy/MM/dd")),
//!     ],
//! )?;
//!
//! let published = article.property("published").unwrap();
//! let text = published.property_converter().unwrap().write(&date.into())?;
//! ```
//!
//! # Architecture
//!
//! - [`property`] - Property descriptor builder and mapping rules
//! - [`entity`] - Per-document-type registration and cross-property rules
//! - [`date`] - Named date formats, layout compiler and formatter
//! - [`converter`] - Value converters attached to date properties
//! - [`config`] - Configuration with TOML and environment support
//! - [`logging`] - `log` facade bootstrap

pub mod config; // Configuration system with TOML support
pub mod converter;
pub mod date;
pub mod entity;
pub mod error;
pub mod logging;
pub mod metadata; // Typed mapping annotations
pub mod property;
pub mod seq_no;
pub mod types;
pub mod value;

// Prelude module for convenient imports
pub mod prelude;

// Re-exports of main types and traits
pub use config::MappingConfig;
pub use converter::{DateConverter, PropertyConverter};
pub use entity::{EntityDefinition, EntityDescriptor};
pub use error::{ConversionError, MappingError};
pub use metadata::{FieldAnnotation, FieldMetadata, FieldType, InnerField, MultiFieldAnnotation};
pub use property::PropertyDescriptor;
pub use seq_no::{SeqNoPrimaryTerm, SeqNoPrimaryTermError};
pub use types::{PropertyType, TemporalKind};
pub use value::{PropertyValue, TemporalValue};
