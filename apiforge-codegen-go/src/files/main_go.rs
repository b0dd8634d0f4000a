use std::path::{Path, PathBuf};

use apiforge_core::{CodeBuilder, GeneratedFile};
use apiforge_ir::Entity;

/// The entrypoint (main.go): command-line port and storage path, database
/// bootstrap, route installation, listener start.
pub struct MainGo<'a> {
    pub entities: &'a [Entity],
    pub module: &'a str,
}

impl<'a> MainGo<'a> {
    pub fn new(entities: &'a [Entity], module: &'a str) -> Self {
        Self { entities, module }
    }
}

impl GeneratedFile for MainGo<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("main.go")
    }

    fn render(&self) -> String {
        let mut b = CodeBuilder::go().raw(format!(
            r#"package main

import (
	"flag"
	"fmt"
	"log"

	"{module}/database"
	"{module}/router"
)

func main() {{
	port := flag.String("port", "8080", "listen port")
	dbPath := flag.String("db", "data.db", "SQLite database file")
	flag.Parse()

	db, err := database.Open(*dbPath)
	if err != nil {{
		log.Fatalf("database: %v", err)
	}}

	r := router.Setup(db)

	addr := fmt.Sprintf(":%s", *port)
	log.Printf("listening on http://localhost:%s", *port)
	log.Printf("health check: http://localhost:%s/health", *port)
"#,
            module = self.module
        ));

        b = b.indent();
        for entity in self.entities {
            let label = if entity.description.is_empty() {
                &entity.table_name
            } else {
                &entity.description
            };
            b = b.line(format!(
                "log.Printf(\"  {}: /api/v1/{}s\")",
                label, entity.table_name
            ));
        }
        b = b.dedent();

        b.raw(
            r#"
	if err := r.Run(addr); err != nil {
		log.Fatalf("server: %v", err)
	}
}
"#,
        )
        .build()
    }
}
