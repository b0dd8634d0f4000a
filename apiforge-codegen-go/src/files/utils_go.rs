use std::path::{Path, PathBuf};

use apiforge_core::GeneratedFile;

/// Shared helpers for the emitted project (utils/utils.go).
pub struct UtilsGo;

impl GeneratedFile for UtilsGo {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("utils").join("utils.go")
    }

    fn render(&self) -> String {
        r#"package utils

import (
	"crypto/rand"
	"fmt"
)

// GenerateUUID returns a random UUID v4 string.
func GenerateUUID() string {
	b := make([]byte, 16)
	_, _ = rand.Read(b)
	b[6] = (b[6] & 0x0f) | 0x40
	b[8] = (b[8] & 0x3f) | 0x80
	return fmt.Sprintf("%08x-%04x-%04x-%04x-%012x",
		b[0:4], b[4:6], b[6:8], b[8:10], b[10:16])
}
"#
        .to_string()
    }
}
