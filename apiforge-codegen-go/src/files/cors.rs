use std::path::{Path, PathBuf};

use apiforge_core::GeneratedFile;

/// The CORS middleware (middleware/cors.go).
pub struct CorsGo;

impl GeneratedFile for CorsGo {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("middleware").join("cors.go")
    }

    fn render(&self) -> String {
        r#"package middleware

import (
	"net/http"

	"github.com/gin-gonic/gin"
)

// Cors allows any origin and short-circuits preflight requests.
func Cors() gin.HandlerFunc {
	return func(c *gin.Context) {
		c.Header("Access-Control-Allow-Origin", "*")
		c.Header("Access-Control-Allow-Methods", "GET, POST, PUT, PATCH, DELETE, OPTIONS")
		c.Header("Access-Control-Allow-Headers", "Origin, Content-Type, Accept, Authorization")
		c.Header("Access-Control-Expose-Headers", "Content-Length")
		c.Header("Access-Control-Allow-Credentials", "true")

		if c.Request.Method == http.MethodOptions {
			c.AbortWithStatus(http.StatusNoContent)
			return
		}

		c.Next()
	}
}
"#
        .to_string()
    }
}
