use std::path::{Path, PathBuf};

use apiforge_core::{CodeBuilder, GeneratedFile};
use apiforge_ir::Entity;

/// The persistence bootstrap (database/database.go): opens the SQLite
/// store, migrates every entity, and defines the shared not-found error.
///
/// The handle is returned to the caller and threaded through constructors;
/// the emitted project has no package-level database state.
pub struct DatabaseGo<'a> {
    pub entities: &'a [Entity],
    pub module: &'a str,
}

impl<'a> DatabaseGo<'a> {
    pub fn new(entities: &'a [Entity], module: &'a str) -> Self {
        Self { entities, module }
    }
}

impl GeneratedFile for DatabaseGo<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("database").join("database.go")
    }

    fn render(&self) -> String {
        let mut b = CodeBuilder::go().raw(format!(
            r#"package database

import (
	"errors"
	"fmt"
	"log"
	"os"
	"time"

	"github.com/glebarez/sqlite"
	"gorm.io/gorm"
	"gorm.io/gorm/logger"

	"{}/models"
)

// ErrNotFound reports that no row matched the requested primary key.
var ErrNotFound = errors.New("record not found")

// Open opens the SQLite database at path and migrates every model.
// The handle is handed to repositories and handlers explicitly; nothing
// in this package keeps a global instance.
func Open(path string) (*gorm.DB, error) {{
	newLogger := logger.New(
		log.New(os.Stdout, "\r\n", log.LstdFlags),
		logger.Config{{
			SlowThreshold:             time.Second,
			LogLevel:                  logger.Warn,
			IgnoreRecordNotFoundError: true,
			Colorful:                  true,
		}},
	)

	db, err := gorm.Open(sqlite.Open(path), &gorm.Config{{Logger: newLogger}})
	if err != nil {{
		return nil, fmt.Errorf("open database: %w", err)
	}}

	if err := autoMigrate(db); err != nil {{
		return nil, fmt.Errorf("migrate database: %w", err)
	}}

	return db, nil
}}

func autoMigrate(db *gorm.DB) error {{
	return db.AutoMigrate(
"#,
            self.module
        ));
        b = b.indent().indent();
        for entity in self.entities {
            b = b.line(format!("&models.{}{{}},", entity.name));
        }
        b = b.dedent().dedent();
        b.raw("\t)\n}\n").build()
    }
}
