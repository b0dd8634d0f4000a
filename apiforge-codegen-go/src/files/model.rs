use std::path::{Path, PathBuf};

use apiforge_core::{CodeBuilder, GeneratedFile};
use apiforge_ir::{Entity, FieldIr};

/// One entity's model file (models/<table>.go): the storage-bound struct,
/// the create/update request shapes, and the query parameters.
pub struct ModelGo<'a> {
    pub entity: &'a Entity,
}

impl<'a> ModelGo<'a> {
    pub fn new(entity: &'a Entity) -> Self {
        Self { entity }
    }

    fn field_tags(field: &FieldIr) -> String {
        let mut parts = vec![format!("json:\"{}\"", field.column)];
        let gorm = field.spec.render();
        if !gorm.is_empty() {
            parts.push(format!("gorm:\"{gorm}\""));
        }
        if !field.validate.is_empty() {
            parts.push(format!("binding:\"{}\"", field.validate));
        }
        format!("`{}`", parts.join(" "))
    }

    fn struct_fields<'f>(
        mut b: CodeBuilder,
        fields: impl Iterator<Item = &'f FieldIr>,
    ) -> CodeBuilder {
        b = b.indent();
        for field in fields {
            if !field.comment.is_empty() {
                b = b.line(format!("// {}", field.comment));
            }
            b = b.line(format!(
                "{} {} {}",
                field.name,
                field.go_type,
                Self::field_tags(field)
            ));
        }
        b.dedent()
    }

    fn render_entity(&self, mut b: CodeBuilder) -> CodeBuilder {
        let entity = self.entity;
        if !entity.description.is_empty() {
            b = b.line(format!("// {} {}", entity.name, entity.description));
        }
        b = b.line(format!("type {} struct {{", entity.name));
        b = Self::struct_fields(b, entity.fields.iter());
        b.line("}")
            .blank()
            .line("// TableName pins the storage table name.")
            .line(format!("func ({}) TableName() string {{", entity.name))
            .indent()
            .line(format!("return \"{}\"", entity.table_name))
            .dedent()
            .line("}")
    }

    fn render_create_request(&self, mut b: CodeBuilder) -> CodeBuilder {
        let entity = self.entity;
        b = b
            .line(format!(
                "// Create{}Request is the create payload; audit fields are managed by the store.",
                entity.name
            ))
            .line(format!("type Create{}Request struct {{", entity.name));
        b = Self::struct_fields(b, entity.create_fields());
        b.line("}")
    }

    fn render_update_request(&self, mut b: CodeBuilder) -> CodeBuilder {
        let entity = self.entity;
        b = b
            .line(format!(
                "// Update{}Request is the partial-update payload; omitted fields stay unchanged.",
                entity.name
            ))
            .line(format!("type Update{}Request struct {{", entity.name))
            .indent();
        for field in entity.update_fields() {
            let go_type = if field.needs_pointer_in_update() {
                format!("*{}", field.go_type)
            } else {
                field.go_type.to_string()
            };
            b = b.line(format!(
                "{} {} `json:\"{}\"`",
                field.name, go_type, field.column
            ));
        }
        b = b.dedent().line("}").blank();

        b = b
            .line("// Changes returns the sparse column map for this update; omitted")
            .line("// fields do not appear in it.")
            .line(format!(
                "func (r *Update{}Request) Changes() map[string]any {{",
                entity.name
            ))
            .indent()
            .line("changes := make(map[string]any)");
        for field in entity.update_fields() {
            if field.needs_pointer_in_update() {
                b = b
                    .line(format!("if r.{} != nil {{", field.name))
                    .indent()
                    .line(format!("changes[\"{}\"] = *r.{}", field.column, field.name))
                    .dedent()
                    .line("}");
            } else {
                b = b
                    .line(format!("if r.{} != \"\" {{", field.name))
                    .indent()
                    .line(format!("changes[\"{}\"] = r.{}", field.column, field.name))
                    .dedent()
                    .line("}");
            }
        }
        b.line("return changes").dedent().line("}")
    }

    fn render_query_params(&self, b: CodeBuilder) -> CodeBuilder {
        let entity = self.entity;
        b.line(format!(
            "// Query{}Params are the list parameters for {}.",
            entity.name, entity.table_name
        ))
        .line(format!("type Query{}Params struct {{", entity.name))
        .indent()
        .lines([
            "Page     int    `form:\"page\" json:\"page\"`",
            "PageSize int    `form:\"page_size\" json:\"page_size\"`",
            "OrderBy  string `form:\"order_by\" json:\"order_by\"`",
            "Order    string `form:\"order\" json:\"order\"`",
            "Keyword  string `form:\"keyword\" json:\"keyword\"`",
        ])
        .dedent()
        .line("}")
        .blank()
        .line("// Normalize applies the paging defaults: page at least 1, page size")
        .line("// defaulted to 20 and clamped to [1,100].")
        .line(format!(
            "func (p *Query{}Params) Normalize() {{",
            entity.name
        ))
        .indent()
        .line("if p.Page < 1 {")
        .indent()
        .line("p.Page = 1")
        .dedent()
        .line("}")
        .line("if p.PageSize < 1 {")
        .indent()
        .line("p.PageSize = 20")
        .dedent()
        .line("}")
        .line("if p.PageSize > 100 {")
        .indent()
        .line("p.PageSize = 100")
        .dedent()
        .line("}")
        .dedent()
        .line("}")
    }
}

impl GeneratedFile for ModelGo<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("models")
            .join(format!("{}.go", self.entity.table_name.to_lowercase()))
    }

    fn render(&self) -> String {
        let mut b = CodeBuilder::go().line("package models").blank();
        if self.entity.has_time {
            b = b.line("import \"time\"").blank();
        }
        b = self.render_entity(b).blank();
        b = self.render_create_request(b).blank();
        b = self.render_update_request(b).blank();
        b = self.render_query_params(b);
        b.build()
    }
}
