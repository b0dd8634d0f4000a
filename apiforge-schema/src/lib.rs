//! Raw schema types, parsing, and validation.
//!
//! The shape here mirrors schema.json exactly; nothing is normalized at this
//! layer. `type` and relation kinds stay raw strings so the validator owns
//! those diagnostics and can name the offending table, field, or relation.

mod error;
mod parse;
mod validate;

pub use error::{Error, Result};
pub use validate::validate;

use serde::Deserialize;

/// Root of a schema.json document.
#[derive(Debug, Clone, Deserialize)]
pub struct Schema {
    /// Schema version string, required and non-empty.
    #[serde(default)]
    pub version: String,

    /// Table definitions, in declaration order.
    #[serde(default)]
    pub tables: Vec<Table>,

    /// Relations between declared tables.
    #[serde(default)]
    pub relations: Vec<Relation>,
}

/// One table definition.
#[derive(Debug, Clone, Deserialize)]
pub struct Table {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub description: String,

    /// Name of the primary-key field; must be declared in `fields` if set.
    #[serde(default, rename = "primaryKey")]
    pub primary_key: String,

    #[serde(default)]
    pub fields: Vec<Field>,
}

/// One field of a table.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Field {
    #[serde(default)]
    pub name: String,

    /// One of: number, string, boolean, text, date, float.
    #[serde(default, rename = "type")]
    pub ty: String,

    /// Maximum length for bounded string fields (0 = unbounded).
    #[serde(default)]
    pub length: u32,

    /// Semantic format hint: email, url, uuid.
    #[serde(default)]
    pub format: String,

    #[serde(default)]
    pub required: bool,

    #[serde(default)]
    pub unique: bool,

    #[serde(default, rename = "autoIncrement")]
    pub auto_increment: bool,

    /// Declared default value, carried as-is.
    #[serde(default)]
    pub default: Option<serde_json::Value>,

    #[serde(default)]
    pub comment: String,

    /// Declared enum values, carried as-is.
    #[serde(default, rename = "enum")]
    pub enum_values: Vec<serde_json::Value>,
}

/// A relation between two declared tables.
#[derive(Debug, Clone, Deserialize)]
pub struct Relation {
    #[serde(default)]
    pub from: String,

    #[serde(default)]
    pub to: String,

    /// One of: one-to-one, one-to-many, many-to-many.
    #[serde(default, rename = "type")]
    pub kind: String,

    #[serde(default, rename = "foreignKey")]
    pub foreign_key: String,

    #[serde(default, rename = "referenceKey")]
    pub reference_key: String,
}

impl Table {
    /// Total number of declared (business) fields.
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }
}
