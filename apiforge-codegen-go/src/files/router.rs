use std::path::{Path, PathBuf};

use apiforge_core::{CodeBuilder, GeneratedFile, to_camel_case};
use apiforge_ir::Entity;

/// The route table (router/router.go): per-entity CRUD routes under a
/// pluralized path segment, plus the health check.
pub struct RouterGo<'a> {
    pub entities: &'a [Entity],
    pub module: &'a str,
}

impl<'a> RouterGo<'a> {
    pub fn new(entities: &'a [Entity], module: &'a str) -> Self {
        Self { entities, module }
    }
}

impl GeneratedFile for RouterGo<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("router").join("router.go")
    }

    fn render(&self) -> String {
        let mut b = CodeBuilder::go().raw(format!(
            r#"package router

import (
	"github.com/gin-gonic/gin"
	"gorm.io/gorm"

	"{module}/handlers"
	"{module}/middleware"
)

// Setup builds the engine with every entity's routes registered against
// the injected database handle.
func Setup(db *gorm.DB) *gin.Engine {{
	r := gin.New()

	r.Use(gin.Recovery())
	r.Use(middleware.Logger())
	r.Use(middleware.Cors())

	api := r.Group("/api/v1")
	{{
"#,
            module = self.module
        ));

        b = b.indent().indent();
        for entity in self.entities {
            let table = entity.table_name.to_lowercase();
            let handle = to_camel_case(&entity.table_name);
            if !entity.description.is_empty() {
                b = b.line(format!("// {}", entity.description));
            }
            b = b
                .line(format!(
                    "{handle}Handler := handlers.New{}Handler(db)",
                    entity.name
                ))
                .line(format!("{handle}Group := api.Group(\"/{table}s\")"))
                .line("{")
                .indent()
                .line(format!("{handle}Group.POST(\"\", {handle}Handler.Create)"))
                .line(format!("{handle}Group.GET(\"\", {handle}Handler.List)"))
                .line(format!("{handle}Group.GET(\"/:id\", {handle}Handler.GetByID)"))
                .line(format!("{handle}Group.PUT(\"/:id\", {handle}Handler.Update)"))
                .line(format!("{handle}Group.DELETE(\"/:id\", {handle}Handler.Delete)"))
                .line(format!(
                    "{handle}Group.POST(\"/batch-delete\", {handle}Handler.BatchDelete)"
                ))
                .dedent()
                .line("}")
                .blank();
        }
        b = b.dedent().dedent();

        b.raw(
            r#"	}

	// Health check
	r.GET("/health", func(c *gin.Context) {
		c.JSON(200, gin.H{"status": "ok"})
	})

	return r
}
"#,
        )
        .build()
    }
}
