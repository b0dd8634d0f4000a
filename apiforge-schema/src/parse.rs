//! Schema parsing from files and strings.

use std::{path::Path, str::FromStr};

use crate::{Error, Result, Schema, validate};

impl FromStr for Schema {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_schema(s, "schema.json")
    }
}

impl Schema {
    /// Parse and validate a schema.json file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_schema(&content, &path.display().to_string())
    }
}

/// Parse a schema from content with the given filename for error reporting.
///
/// Validation runs before the schema is returned; a schema that parses but
/// violates a structural rule never reaches the caller.
pub fn parse_schema(content: &str, filename: &str) -> Result<Schema> {
    let schema: Schema =
        serde_json::from_str(content).map_err(|e| Error::parse(e, content, filename))?;
    validate(&schema)?;
    Ok(schema)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PRODUCT_SCHEMA: &str = r#"{
        "version": "1.0",
        "tables": [
            {
                "name": "product",
                "description": "product catalog",
                "primaryKey": "id",
                "fields": [
                    {"name": "id", "type": "number", "autoIncrement": true},
                    {"name": "sku", "type": "string", "length": 64, "unique": true, "required": true},
                    {"name": "price", "type": "float", "required": true}
                ]
            }
        ]
    }"#;

    #[test]
    fn test_parse_valid_schema() {
        let schema: Schema = PRODUCT_SCHEMA.parse().unwrap();
        assert_eq!(schema.version, "1.0");
        assert_eq!(schema.tables.len(), 1);
        assert_eq!(schema.tables[0].name, "product");
        assert_eq!(schema.tables[0].primary_key, "id");
        assert_eq!(schema.tables[0].field_count(), 3);
        assert!(schema.tables[0].fields[1].unique);
        assert_eq!(schema.tables[0].fields[1].length, 64);
    }

    #[test]
    fn test_parse_malformed_json() {
        let err = "{ not json".parse::<Schema>().unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_parse_runs_validation() {
        let err = r#"{"version": "1.0", "tables": []}"#
            .parse::<Schema>()
            .unwrap_err();
        assert!(matches!(*err, Error::NoTables));
    }

    #[test]
    fn test_from_file_missing() {
        let err = Schema::from_file("does/not/exist.json").unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }
}
