use std::path::{Path, PathBuf};

use apiforge_core::{CodeBuilder, GeneratedFile};
use apiforge_ir::Entity;

/// One entity's persistence operations (database/<table>_repo.go).
pub struct RepositoryGo<'a> {
    pub entity: &'a Entity,
    pub module: &'a str,
}

impl<'a> RepositoryGo<'a> {
    pub fn new(entity: &'a Entity, module: &'a str) -> Self {
        Self { entity, module }
    }

    fn render_header(&self) -> String {
        let entity = self.entity;
        let describe = if entity.description.is_empty() {
            entity.table_name.clone()
        } else {
            entity.description.clone()
        };
        format!(
            r#"package database

import (
	"errors"
	"fmt"

	"gorm.io/gorm"

	"{module}/models"
)

// {name}Repository is the data access layer for {describe}.
type {name}Repository struct {{
	db *gorm.DB
}}

// New{name}Repository binds a repository to the injected handle.
func New{name}Repository(db *gorm.DB) *{name}Repository {{
	return &{name}Repository{{db: db}}
}}

// Create inserts one {table}.
func (r *{name}Repository) Create(entity *models.{name}) error {{
	if err := r.db.Create(entity).Error; err != nil {{
		return fmt.Errorf("create {table}: %w", err)
	}}
	return nil
}}

// GetByID loads one {table} by primary key.
func (r *{name}Repository) GetByID(id int64) (*models.{name}, error) {{
	var entity models.{name}
	if err := r.db.First(&entity, id).Error; err != nil {{
		if errors.Is(err, gorm.ErrRecordNotFound) {{
			return nil, ErrNotFound
		}}
		return nil, fmt.Errorf("get {table}: %w", err)
	}}
	return &entity, nil
}}

"#,
            module = self.module,
            name = entity.name,
            table = entity.table_name,
            describe = describe,
        )
    }

    fn render_list(&self) -> String {
        let entity = self.entity;
        let mut b = CodeBuilder::go()
            .line(format!(
                "// List returns one page of {} rows plus the total count.",
                entity.table_name
            ))
            .line(format!(
                "func (r *{name}Repository) List(params models.Query{name}Params) ([]models.{name}, int64, error) {{",
                name = entity.name
            ))
            .indent()
            .line("params.Normalize()")
            .blank()
            .line(format!("var entities []models.{}", entity.name))
            .line("var total int64")
            .blank()
            .line(format!("query := r.db.Model(&models.{}{{}})", entity.name))
            .blank();

        let search = entity.search_columns();
        if !search.is_empty() {
            let conditions = search
                .iter()
                .map(|c| format!("{c} LIKE ?"))
                .collect::<Vec<_>>()
                .join(" OR ");
            let args = vec!["keyword"; search.len()].join(", ");
            b = b
                .line("if params.Keyword != \"\" {")
                .indent()
                .line("keyword := \"%\" + params.Keyword + \"%\"")
                .line(format!("query = query.Where(\"{conditions}\", {args})"))
                .dedent()
                .line("}")
                .blank();
        }

        b.line("if err := query.Count(&total).Error; err != nil {")
            .indent()
            .line(format!(
                "return nil, 0, fmt.Errorf(\"count {}: %w\", err)",
                entity.table_name
            ))
            .dedent()
            .line("}")
            .blank()
            .line("if params.OrderBy != \"\" {")
            .indent()
            .line("order := params.OrderBy")
            .line("if params.Order == \"desc\" {")
            .indent()
            .line("order += \" DESC\"")
            .dedent()
            .line("}")
            .line("query = query.Order(order)")
            .dedent()
            .line("} else {")
            .indent()
            .line(format!(
                "query = query.Order(\"{} DESC\")",
                entity.primary_key_column()
            ))
            .dedent()
            .line("}")
            .blank()
            .line("offset := (params.Page - 1) * params.PageSize")
            .line("if err := query.Offset(offset).Limit(params.PageSize).Find(&entities).Error; err != nil {")
            .indent()
            .line(format!(
                "return nil, 0, fmt.Errorf(\"list {}: %w\", err)",
                entity.table_name
            ))
            .dedent()
            .line("}")
            .blank()
            .line("return entities, total, nil")
            .dedent()
            .line("}")
            .build()
    }

    fn render_mutations(&self) -> String {
        let entity = self.entity;
        format!(
            r#"// Update applies a sparse column map to one row.
func (r *{name}Repository) Update(id int64, changes map[string]any) error {{
	result := r.db.Model(&models.{name}{{}}).Where("{pk} = ?", id).Updates(changes)
	if result.Error != nil {{
		return fmt.Errorf("update {table}: %w", result.Error)
	}}
	if result.RowsAffected == 0 {{
		return ErrNotFound
	}}
	return nil
}}

// Delete removes one row by primary key.
func (r *{name}Repository) Delete(id int64) error {{
	result := r.db.Delete(&models.{name}{{}}, id)
	if result.Error != nil {{
		return fmt.Errorf("delete {table}: %w", result.Error)
	}}
	if result.RowsAffected == 0 {{
		return ErrNotFound
	}}
	return nil
}}

// BatchDelete removes every listed id, best effort.
func (r *{name}Repository) BatchDelete(ids []int64) error {{
	if err := r.db.Delete(&models.{name}{{}}, ids).Error; err != nil {{
		return fmt.Errorf("batch delete {table}: %w", err)
	}}
	return nil
}}
"#,
            name = entity.name,
            table = entity.table_name,
            pk = entity.primary_key_column(),
        )
    }
}

impl GeneratedFile for RepositoryGo<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("database").join(format!(
            "{}_repo.go",
            self.entity.table_name.to_lowercase()
        ))
    }

    fn render(&self) -> String {
        let mut out = self.render_header();
        out.push_str(&self.render_list());
        out.push('\n');
        out.push_str(&self.render_mutations());
        out
    }
}
