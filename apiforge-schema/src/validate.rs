//! Structural validation of a parsed schema.
//!
//! Single pass, fail-fast: the first rule violation aborts with a diagnostic
//! naming the offending table, field, or relation and its 1-based position.
//! Nothing downstream ever sees a schema that fails any rule here.

use std::collections::HashSet;

use apiforge_core::{FieldType, RelationKind};

use crate::{Error, Result, Schema};

/// Validate a schema for structural well-formedness and referential
/// integrity.
pub fn validate(schema: &Schema) -> Result<()> {
    if schema.version.is_empty() {
        return Err(Box::new(Error::MissingVersion));
    }
    if schema.tables.is_empty() {
        return Err(Box::new(Error::NoTables));
    }

    let mut table_names: HashSet<&str> = HashSet::new();
    for (i, table) in schema.tables.iter().enumerate() {
        if table.name.is_empty() {
            return Err(Box::new(Error::TableMissingName { index: i + 1 }));
        }
        if !table_names.insert(&table.name) {
            return Err(Box::new(Error::DuplicateTable {
                name: table.name.clone(),
                index: i + 1,
            }));
        }

        if table.fields.is_empty() {
            return Err(Box::new(Error::TableWithoutFields {
                table: table.name.clone(),
            }));
        }

        if !table.primary_key.is_empty()
            && !table.fields.iter().any(|f| f.name == table.primary_key)
        {
            return Err(Box::new(Error::UnknownPrimaryKey {
                table: table.name.clone(),
                key: table.primary_key.clone(),
            }));
        }

        let mut field_names: HashSet<&str> = HashSet::new();
        for (j, field) in table.fields.iter().enumerate() {
            if field.name.is_empty() {
                return Err(Box::new(Error::FieldMissingName {
                    table: table.name.clone(),
                    index: j + 1,
                }));
            }
            if !field_names.insert(&field.name) {
                return Err(Box::new(Error::DuplicateField {
                    table: table.name.clone(),
                    name: field.name.clone(),
                }));
            }

            if field.ty.is_empty() {
                return Err(Box::new(Error::FieldMissingType {
                    table: table.name.clone(),
                    field: field.name.clone(),
                }));
            }
            if FieldType::parse(&field.ty).is_none() {
                return Err(Box::new(Error::InvalidFieldType {
                    table: table.name.clone(),
                    field: field.name.clone(),
                    ty: field.ty.clone(),
                }));
            }
        }
    }

    for (i, rel) in schema.relations.iter().enumerate() {
        if rel.from.is_empty() || rel.to.is_empty() {
            return Err(Box::new(Error::RelationMissingEndpoint { index: i + 1 }));
        }
        for endpoint in [&rel.from, &rel.to] {
            if !table_names.contains(endpoint.as_str()) {
                return Err(Box::new(Error::UnknownRelationTable {
                    index: i + 1,
                    table: endpoint.clone(),
                }));
            }
        }
        if RelationKind::parse(&rel.kind).is_none() {
            return Err(Box::new(Error::InvalidRelationKind {
                index: i + 1,
                kind: rel.kind.clone(),
            }));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::{Field, Relation, Table};

    use super::*;

    fn table(name: &str, fields: Vec<Field>) -> Table {
        Table {
            name: name.to_string(),
            description: String::new(),
            primary_key: String::new(),
            fields,
        }
    }

    fn field(name: &str, ty: &str) -> Field {
        Field {
            name: name.to_string(),
            ty: ty.to_string(),
            ..Field::default()
        }
    }

    fn schema_with_tables(tables: Vec<Table>) -> Schema {
        Schema {
            version: "1.0".to_string(),
            tables,
            relations: Vec::new(),
        }
    }

    #[test]
    fn test_missing_version() {
        let mut schema = schema_with_tables(vec![table("user", vec![field("id", "number")])]);
        schema.version = String::new();
        assert!(matches!(*validate(&schema).unwrap_err(), Error::MissingVersion));
    }

    #[test]
    fn test_zero_tables() {
        let schema = schema_with_tables(Vec::new());
        assert!(matches!(*validate(&schema).unwrap_err(), Error::NoTables));
    }

    #[test]
    fn test_duplicate_table_name() {
        let schema = schema_with_tables(vec![
            table("user", vec![field("id", "number")]),
            table("user", vec![field("id", "number")]),
        ]);
        let err = validate(&schema).unwrap_err();
        assert!(matches!(
            *err,
            Error::DuplicateTable { ref name, index: 2 } if name == "user"
        ));
    }

    #[test]
    fn test_table_without_fields() {
        let schema = schema_with_tables(vec![table("user", Vec::new())]);
        assert!(matches!(
            *validate(&schema).unwrap_err(),
            Error::TableWithoutFields { .. }
        ));
    }

    #[test]
    fn test_primary_key_not_declared() {
        let mut t = table("user", vec![field("name", "string")]);
        t.primary_key = "id".to_string();
        let err = validate(&schema_with_tables(vec![t])).unwrap_err();
        assert!(matches!(
            *err,
            Error::UnknownPrimaryKey { ref key, .. } if key == "id"
        ));
    }

    #[test]
    fn test_duplicate_field_name() {
        let schema = schema_with_tables(vec![table(
            "user",
            vec![field("name", "string"), field("name", "string")],
        )]);
        assert!(matches!(
            *validate(&schema).unwrap_err(),
            Error::DuplicateField { .. }
        ));
    }

    #[test]
    fn test_invalid_field_type() {
        let schema = schema_with_tables(vec![table("user", vec![field("age", "integer")])]);
        let err = validate(&schema).unwrap_err();
        assert!(matches!(
            *err,
            Error::InvalidFieldType { ref ty, .. } if ty == "integer"
        ));
    }

    #[test]
    fn test_relation_unknown_table() {
        let mut schema = schema_with_tables(vec![table("user", vec![field("id", "number")])]);
        schema.relations.push(Relation {
            from: "user".to_string(),
            to: "order".to_string(),
            kind: "one-to-many".to_string(),
            foreign_key: String::new(),
            reference_key: String::new(),
        });
        let err = validate(&schema).unwrap_err();
        assert!(matches!(
            *err,
            Error::UnknownRelationTable { index: 1, ref table } if table == "order"
        ));
    }

    #[test]
    fn test_relation_invalid_kind() {
        let mut schema = schema_with_tables(vec![
            table("user", vec![field("id", "number")]),
            table("order", vec![field("id", "number")]),
        ]);
        schema.relations.push(Relation {
            from: "user".to_string(),
            to: "order".to_string(),
            kind: "has-many".to_string(),
            foreign_key: String::new(),
            reference_key: String::new(),
        });
        assert!(matches!(
            *validate(&schema).unwrap_err(),
            Error::InvalidRelationKind { .. }
        ));
    }

    #[test]
    fn test_valid_schema_passes() {
        let mut t = table(
            "product",
            vec![field("sku", "string"), field("price", "float")],
        );
        t.primary_key = String::new();
        let schema = schema_with_tables(vec![t]);
        assert!(validate(&schema).is_ok());
    }
}
