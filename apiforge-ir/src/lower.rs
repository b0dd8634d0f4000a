//! Lowering from a validated schema to the intermediate representation.

use apiforge_core::{FieldType, RelationKind, go_type, to_pascal_case};
use apiforge_schema::Schema;

use crate::{ColumnSpec, Entity, FieldIr, Project, Relation, validation_rule};

/// Lower a validated schema into entities and relation metadata.
///
/// Deterministic and order preserving: entities come out in table
/// declaration order, fields in declared order followed by the two injected
/// audit fields. The input must already have passed
/// [`apiforge_schema::validate`]; unknown field types fall back to the
/// string runtime type rather than failing here.
pub fn lower(schema: &Schema) -> Project {
    let entities = schema
        .tables
        .iter()
        .map(|table| {
            let mut has_time = false;
            let mut fields: Vec<FieldIr> = table
                .fields
                .iter()
                .map(|field| {
                    let ty = FieldType::parse(&field.ty).unwrap_or(FieldType::String);
                    let go_type = go_type(ty);
                    if go_type == "time.Time" {
                        has_time = true;
                    }
                    FieldIr {
                        name: to_pascal_case(&field.name),
                        column: field.name.clone(),
                        go_type,
                        spec: ColumnSpec::build(field, &table.primary_key),
                        validate: validation_rule(field),
                        comment: field.comment.clone(),
                        audit: false,
                    }
                })
                .collect();

            fields.push(audit_field("CreatedAt", "created_at", ColumnSpec::auto_create(), "creation time"));
            fields.push(audit_field("UpdatedAt", "updated_at", ColumnSpec::auto_update(), "last update time"));
            has_time = true;

            Entity {
                name: to_pascal_case(&table.name),
                table_name: table.name.clone(),
                description: table.description.clone(),
                primary_key: to_pascal_case(&table.primary_key),
                fields,
                has_time,
            }
        })
        .collect();

    let relations = schema
        .relations
        .iter()
        .map(|rel| Relation {
            from: to_pascal_case(&rel.from),
            to: to_pascal_case(&rel.to),
            // Validation guarantees a known kind; fall back defensively.
            kind: RelationKind::parse(&rel.kind).unwrap_or(RelationKind::OneToOne),
            foreign_key: to_pascal_case(&rel.foreign_key),
            reference_key: to_pascal_case(&rel.reference_key),
        })
        .collect();

    Project {
        entities,
        relations,
    }
}

fn audit_field(name: &str, column: &str, spec: ColumnSpec, comment: &str) -> FieldIr {
    FieldIr {
        name: name.to_string(),
        column: column.to_string(),
        go_type: "time.Time",
        spec,
        validate: String::new(),
        comment: comment.to_string(),
        audit: true,
    }
}
