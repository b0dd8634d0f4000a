//! Storage-column descriptors and validation rules.

use apiforge_core::FieldType;
use apiforge_schema::Field;

/// Storage-column descriptor for one field, rendered into the emitted
/// model's gorm tag.
///
/// Annotation order is fixed: primaryKey, column, type affinity,
/// autoIncrement, uniqueIndex, not null, comment. The rendered form is
/// parseable back into an equal `ColumnSpec`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnSpec {
    pub primary_key: bool,
    pub column: Option<String>,
    /// Type affinity, e.g. "varchar(64)", "text", "integer", "real",
    /// "boolean", "datetime". Unbounded plain strings carry none.
    pub affinity: Option<String>,
    pub auto_increment: bool,
    pub unique: bool,
    pub not_null: bool,
    pub auto_create_time: bool,
    pub auto_update_time: bool,
    pub comment: Option<String>,
}

impl ColumnSpec {
    /// Build the descriptor for a declared field. `primary_key` is the
    /// table's declared primary-key field name.
    pub fn build(field: &Field, primary_key: &str) -> Self {
        let ty = FieldType::parse(&field.ty).unwrap_or(FieldType::String);

        let affinity = match ty {
            FieldType::String if field.length > 0 => Some(format!("varchar({})", field.length)),
            FieldType::String => None,
            FieldType::Text => Some("text".to_string()),
            FieldType::Number => Some("integer".to_string()),
            FieldType::Float => Some("real".to_string()),
            FieldType::Boolean => Some("boolean".to_string()),
            FieldType::Date => Some("datetime".to_string()),
        };

        Self {
            primary_key: !primary_key.is_empty() && field.name == primary_key,
            column: Some(field.name.clone()),
            affinity,
            auto_increment: field.auto_increment,
            unique: field.unique,
            not_null: field.required,
            auto_create_time: false,
            auto_update_time: false,
            comment: (!field.comment.is_empty()).then(|| field.comment.clone()),
        }
    }

    /// Descriptor for the injected creation-timestamp field.
    pub fn auto_create() -> Self {
        Self {
            auto_create_time: true,
            ..Self::default()
        }
    }

    /// Descriptor for the injected update-timestamp field.
    pub fn auto_update() -> Self {
        Self {
            auto_update_time: true,
            ..Self::default()
        }
    }

    /// Render the annotation list as it appears in the gorm tag.
    pub fn render(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        if self.primary_key {
            parts.push("primaryKey".to_string());
        }
        if let Some(column) = &self.column {
            parts.push(format!("column:{column}"));
        }
        if let Some(affinity) = &self.affinity {
            parts.push(format!("type:{affinity}"));
        }
        if self.auto_increment {
            parts.push("autoIncrement".to_string());
        }
        if self.unique {
            parts.push("uniqueIndex".to_string());
        }
        if self.not_null {
            parts.push("not null".to_string());
        }
        if self.auto_create_time {
            parts.push("autoCreateTime".to_string());
        }
        if self.auto_update_time {
            parts.push("autoUpdateTime".to_string());
        }
        if let Some(comment) = &self.comment {
            parts.push(format!("comment:{comment}"));
        }
        parts.join(";")
    }

    /// Parse a rendered annotation list back into a descriptor.
    pub fn parse(s: &str) -> Self {
        let mut spec = Self::default();
        for part in s.split(';').filter(|p| !p.is_empty()) {
            match part {
                "primaryKey" => spec.primary_key = true,
                "autoIncrement" => spec.auto_increment = true,
                "uniqueIndex" => spec.unique = true,
                "not null" => spec.not_null = true,
                "autoCreateTime" => spec.auto_create_time = true,
                "autoUpdateTime" => spec.auto_update_time = true,
                _ => {
                    if let Some(column) = part.strip_prefix("column:") {
                        spec.column = Some(column.to_string());
                    } else if let Some(affinity) = part.strip_prefix("type:") {
                        spec.affinity = Some(affinity.to_string());
                    } else if let Some(comment) = part.strip_prefix("comment:") {
                        spec.comment = Some(comment.to_string());
                    }
                }
            }
        }
        spec
    }
}

/// Assemble the validation rule string for a field's create shape, in
/// order: presence, format, maximum length. Empty when nothing applies.
///
/// Auto-increment fields are never required from the caller, even when the
/// schema marks them required.
pub fn validation_rule(field: &Field) -> String {
    let mut parts: Vec<String> = Vec::new();

    if field.required && !field.auto_increment {
        parts.push("required".to_string());
    }
    match field.format.as_str() {
        "email" => parts.push("email".to_string()),
        "url" => parts.push("url".to_string()),
        "uuid" => parts.push("uuid".to_string()),
        _ => {}
    }
    if field.length > 0 && field.ty == "string" {
        parts.push(format!("max={}", field.length));
    }

    parts.join(",")
}
