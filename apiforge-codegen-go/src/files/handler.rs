use std::path::{Path, PathBuf};

use apiforge_core::{CodeBuilder, GeneratedFile};
use apiforge_ir::Entity;

/// One entity's HTTP handlers (handlers/<table>_handler.go), wrapping each
/// repository operation with request decoding, not-found mapping, and the
/// uniform response envelope.
pub struct HandlerGo<'a> {
    pub entity: &'a Entity,
    pub module: &'a str,
}

impl<'a> HandlerGo<'a> {
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
            r#"package handlers

import (
	"errors"
	"strconv"

	"github.com/gin-gonic/gin"
	"gorm.io/gorm"

	"{module}/database"
	"{module}/models"
)

// {name}Handler serves the HTTP endpoints for {describe}.
type {name}Handler struct {{
	repo *database.{name}Repository
}}

// New{name}Handler wires the handler to the injected database handle.
func New{name}Handler(db *gorm.DB) *{name}Handler {{
	return &{name}Handler{{
		repo: database.New{name}Repository(db),
	}}
}}

"#,
            module = self.module,
            name = entity.name,
            describe = describe,
        )
    }

    fn render_create(&self) -> String {
        let entity = self.entity;
        let mut b = CodeBuilder::go()
            .line(format!(
                "// Create handles POST /{}s.",
                entity.table_name
            ))
            .line(format!(
                "func (h *{name}Handler) Create(c *gin.Context) {{",
                name = entity.name
            ))
            .indent()
            .line(format!("var req models.Create{}Request", entity.name))
            .line("if err := c.ShouldBindJSON(&req); err != nil {")
            .indent()
            .line("BadRequest(c, \"invalid payload: \"+err.Error())")
            .line("return")
            .dedent()
            .line("}")
            .blank()
            .line(format!("entity := models.{}{{", entity.name))
            .indent();
        for field in entity.create_fields() {
            b = b.line(format!("{name}: req.{name},", name = field.name));
        }
        b.dedent()
            .line("}")
            .blank()
            .line("if err := h.repo.Create(&entity); err != nil {")
            .indent()
            .line("InternalError(c, err.Error())")
            .line("return")
            .dedent()
            .line("}")
            .blank()
            .line("Success(c, entity)")
            .dedent()
            .line("}")
            .build()
    }

    fn render_get_and_list(&self) -> String {
        let entity = self.entity;
        format!(
            r#"// GetByID handles GET /{table}s/:id.
func (h *{name}Handler) GetByID(c *gin.Context) {{
	id, err := strconv.ParseInt(c.Param("id"), 10, 64)
	if err != nil {{
		BadRequest(c, "invalid id")
		return
	}}

	entity, err := h.repo.GetByID(id)
	if err != nil {{
		if errors.Is(err, database.ErrNotFound) {{
			NotFound(c, "{table} not found")
			return
		}}
		InternalError(c, err.Error())
		return
	}}

	Success(c, entity)
}}

// List handles GET /{table}s.
func (h *{name}Handler) List(c *gin.Context) {{
	var params models.Query{name}Params
	if err := c.ShouldBindQuery(&params); err != nil {{
		BadRequest(c, "invalid query: "+err.Error())
		return
	}}
	params.Normalize()

	entities, total, err := h.repo.List(params)
	if err != nil {{
		InternalError(c, err.Error())
		return
	}}

	SuccessPage(c, entities, total, params.Page, params.PageSize)
}}

"#,
            name = entity.name,
            table = entity.table_name,
        )
    }

    fn render_mutations(&self) -> String {
        let entity = self.entity;
        format!(
            r#"// Update handles PUT /{table}s/:id.
func (h *{name}Handler) Update(c *gin.Context) {{
	id, err := strconv.ParseInt(c.Param("id"), 10, 64)
	if err != nil {{
		BadRequest(c, "invalid id")
		return
	}}

	var req models.Update{name}Request
	if err := c.ShouldBindJSON(&req); err != nil {{
		BadRequest(c, "invalid payload: "+err.Error())
		return
	}}

	changes := req.Changes()
	if len(changes) == 0 {{
		BadRequest(c, "no fields to update")
		return
	}}

	if err := h.repo.Update(id, changes); err != nil {{
		if errors.Is(err, database.ErrNotFound) {{
			NotFound(c, "{table} not found")
			return
		}}
		InternalError(c, err.Error())
		return
	}}

	SuccessMessage(c, "updated")
}}

// Delete handles DELETE /{table}s/:id.
func (h *{name}Handler) Delete(c *gin.Context) {{
	id, err := strconv.ParseInt(c.Param("id"), 10, 64)
	if err != nil {{
		BadRequest(c, "invalid id")
		return
	}}

	if err := h.repo.Delete(id); err != nil {{
		if errors.Is(err, database.ErrNotFound) {{
			NotFound(c, "{table} not found")
			return
		}}
		InternalError(c, err.Error())
		return
	}}

	SuccessMessage(c, "deleted")
}}

// BatchDelete handles POST /{table}s/batch-delete.
func (h *{name}Handler) BatchDelete(c *gin.Context) {{
	var req struct {{
		IDs []int64 `json:"ids" binding:"required"`
	}}
	if err := c.ShouldBindJSON(&req); err != nil {{
		BadRequest(c, "invalid payload: "+err.Error())
		return
	}}

	if err := h.repo.BatchDelete(req.IDs); err != nil {{
		InternalError(c, err.Error())
		return
	}}

	SuccessMessage(c, "deleted")
}}
"#,
            name = entity.name,
            table = entity.table_name,
        )
    }
}

impl GeneratedFile for HandlerGo<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("handlers").join(format!(
            "{}_handler.go",
            self.entity.table_name.to_lowercase()
        ))
    }

    fn render(&self) -> String {
        let mut out = self.render_header();
        out.push_str(&self.render_create());
        out.push('\n');
        out.push_str(&self.render_get_and_list());
        out.push_str(&self.render_mutations());
        out
    }
}
