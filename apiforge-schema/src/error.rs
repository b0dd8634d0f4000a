use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for schema operations (boxed to reduce size on stack).
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(code(apiforge::io_error))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse schema")]
    #[diagnostic(code(apiforge::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_json::Error,
    },

    #[error("schema is missing a version")]
    #[diagnostic(
        code(apiforge::missing_version),
        help("add a top-level \"version\" string, e.g. \"1.0\"")
    )]
    MissingVersion,

    #[error("schema declares no tables")]
    #[diagnostic(code(apiforge::no_tables))]
    NoTables,

    #[error("table #{index} has no name")]
    #[diagnostic(code(apiforge::table_missing_name))]
    TableMissingName { index: usize },

    #[error("duplicate table name '{name}' (table #{index})")]
    #[diagnostic(code(apiforge::duplicate_table))]
    DuplicateTable { name: String, index: usize },

    #[error("table '{table}' declares no fields")]
    #[diagnostic(code(apiforge::table_without_fields))]
    TableWithoutFields { table: String },

    #[error("primary key '{key}' of table '{table}' is not among its fields")]
    #[diagnostic(
        code(apiforge::unknown_primary_key),
        help("primaryKey must name one of the table's declared fields")
    )]
    UnknownPrimaryKey { table: String, key: String },

    #[error("field #{index} of table '{table}' has no name")]
    #[diagnostic(code(apiforge::field_missing_name))]
    FieldMissingName { table: String, index: usize },

    #[error("duplicate field name '{name}' in table '{table}'")]
    #[diagnostic(code(apiforge::duplicate_field))]
    DuplicateField { table: String, name: String },

    #[error("field '{field}' of table '{table}' has no type")]
    #[diagnostic(code(apiforge::field_missing_type))]
    FieldMissingType { table: String, field: String },

    #[error("field '{field}' of table '{table}' has invalid type '{ty}'")]
    #[diagnostic(
        code(apiforge::invalid_field_type),
        help("valid types are: number, string, boolean, text, date, float")
    )]
    InvalidFieldType {
        table: String,
        field: String,
        ty: String,
    },

    #[error("relation #{index} is missing 'from' or 'to'")]
    #[diagnostic(code(apiforge::relation_missing_endpoint))]
    RelationMissingEndpoint { index: usize },

    #[error("relation #{index} references undeclared table '{table}'")]
    #[diagnostic(code(apiforge::unknown_relation_table))]
    UnknownRelationTable { index: usize, table: String },

    #[error("relation #{index} has invalid type '{kind}'")]
    #[diagnostic(
        code(apiforge::invalid_relation_kind),
        help("valid relation types are: one-to-one, one-to-many, many-to-many")
    )]
    InvalidRelationKind { index: usize, kind: String },
}

impl Error {
    /// Create a parse error, locating the span from serde_json's
    /// line/column position in `src`.
    pub fn parse(source: serde_json::Error, src: &str, filename: &str) -> Box<Self> {
        let span = offset_of(src, source.line(), source.column()).map(SourceSpan::from);
        Box::new(Error::Parse {
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }
}

/// Byte offset of a 1-based line/column position, if it lies within `src`.
fn offset_of(src: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }
    let mut offset = 0;
    for (i, l) in src.split('\n').enumerate() {
        if i + 1 == line {
            let col = column.saturating_sub(1).min(l.len());
            return Some(offset + col);
        }
        offset += l.len() + 1;
    }
    None
}
