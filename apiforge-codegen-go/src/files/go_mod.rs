use std::path::{Path, PathBuf};

use apiforge_core::GeneratedFile;

/// The go.mod project manifest.
///
/// Only the three direct dependencies are declared; transitive versions are
/// left for `go mod tidy` to resolve.
pub struct GoMod<'a> {
    pub module: &'a str,
}

impl<'a> GoMod<'a> {
    pub fn new(module: &'a str) -> Self {
        Self { module }
    }
}

impl GeneratedFile for GoMod<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("go.mod")
    }

    fn render(&self) -> String {
        format!(
            r#"module {}

go 1.22

require (
	github.com/gin-gonic/gin v1.10.0
	github.com/glebarez/sqlite v1.11.0
	gorm.io/gorm v1.25.12
)
"#,
            self.module
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declares_exactly_three_requires() {
        let out = GoMod::new("example-api").render();
        assert!(out.starts_with("module example-api\n"));
        assert_eq!(out.matches("\n\tgithub.com/").count(), 2);
        assert_eq!(out.matches("\n\tgorm.io/").count(), 1);
    }
}
