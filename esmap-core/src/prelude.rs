//! Prelude module for convenient imports.
//!
//! ```rust,ignore
//! use esmap_core::prelude::*;
//! ```

// === Descriptors ===
pub use crate::entity::{EntityDefinition, EntityDescriptor};
pub use crate::property::PropertyDescriptor;

// === Input metadata ===
pub use crate::metadata::{FieldAnnotation, FieldMetadata, FieldType, InnerField, MultiFieldAnnotation};
pub use crate::seq_no::SeqNoPrimaryTerm;
pub use crate::types::{PropertyType, TemporalKind};

// === Dates and conversion ===
pub use crate::converter::{DateConverter, PropertyConverter};
pub use crate::date::{DateFormat, DateFormatter};
pub use crate::value::{PropertyValue, TemporalValue};

// === Errors ===
pub use crate::error::{ConversionError, MappingError};

// === Configuration ===
pub use crate::config::MappingConfig;
pub use crate::logging::{init_logging, LoggingConfig};
