//! Intermediate representation for the apiforge backend generator.
//!
//! One [`Entity`] per table, built once per generation run from a validated
//! schema and immutable afterwards. Every emission stage consumes this
//! representation and nothing else, which is what keeps the generated model,
//! repository, handler, and router files agreeing on names, types, and tags.

mod column;
mod lower;

pub use column::{ColumnSpec, validation_rule};
pub use lower::lower;

use apiforge_core::RelationKind;

/// A fully lowered schema: entities in table declaration order, plus
/// relation metadata.
#[derive(Debug, Clone)]
pub struct Project {
    pub entities: Vec<Entity>,
    pub relations: Vec<Relation>,
}

/// The normalized representation of one table.
#[derive(Debug, Clone)]
pub struct Entity {
    /// PascalCase type name (e.g. "Product").
    pub name: String,
    /// Original table name, used as the storage identifier.
    pub table_name: String,
    pub description: String,
    /// PascalCase name of the declared primary-key field; empty if none.
    pub primary_key: String,
    /// Business fields in declared order, then the two audit fields.
    pub fields: Vec<FieldIr>,
    /// Whether any field maps to time.Time (always true once the audit
    /// fields are injected); drives the time import in emitted models.
    pub has_time: bool,
}

/// One normalized field of an entity.
#[derive(Debug, Clone)]
pub struct FieldIr {
    /// PascalCase field name (e.g. "UserID").
    pub name: String,
    /// Storage column / wire name (the original field name).
    pub column: String,
    /// Go runtime type in emitted code.
    pub go_type: &'static str,
    /// Storage-column descriptor.
    pub spec: ColumnSpec,
    /// Validation rule string for the create request shape; may be empty.
    pub validate: String,
    pub comment: String,
    /// True for the injected created_at/updated_at fields.
    pub audit: bool,
}

impl FieldIr {
    /// Strings are passed plainly in update shapes (empty means absent);
    /// everything else gets a pointer wrapper so that "omitted" and
    /// "set to zero" stay distinguishable.
    pub fn needs_pointer_in_update(&self) -> bool {
        self.go_type != "string"
    }
}

/// Relation metadata between two entities. Lowered and carried for
/// reporting, but consumed by no emission stage; no join logic or
/// foreign-key wiring is generated from it.
#[derive(Debug, Clone)]
pub struct Relation {
    /// PascalCase source entity name.
    pub from: String,
    /// PascalCase target entity name.
    pub to: String,
    pub kind: RelationKind,
    /// PascalCase foreign-key field name.
    pub foreign_key: String,
    /// PascalCase reference-key field name.
    pub reference_key: String,
}

impl Entity {
    /// Declared fields, excluding the injected audit fields.
    pub fn business_fields(&self) -> impl Iterator<Item = &FieldIr> {
        self.fields.iter().filter(|f| !f.audit)
    }

    /// Fields of the create request shape: business fields minus
    /// auto-increment primary keys.
    pub fn create_fields(&self) -> impl Iterator<Item = &FieldIr> {
        self.business_fields().filter(|f| !f.spec.auto_increment)
    }

    /// Fields of the update request shape: business fields minus the
    /// primary key.
    pub fn update_fields(&self) -> impl Iterator<Item = &FieldIr> {
        self.business_fields().filter(|f| !f.spec.primary_key)
    }

    /// Storage columns searched by the list keyword filter: every
    /// string-typed business field.
    pub fn search_columns(&self) -> Vec<&str> {
        self.business_fields()
            .filter(|f| f.go_type == "string")
            .map(|f| f.column.as_str())
            .collect()
    }

    /// Storage column of the primary key, defaulting to "id" when the
    /// table declares none.
    pub fn primary_key_column(&self) -> &str {
        self.fields
            .iter()
            .find(|f| f.spec.primary_key)
            .map(|f| f.column.as_str())
            .unwrap_or("id")
    }
}
