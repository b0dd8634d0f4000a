use std::path::{Path, PathBuf};

use apiforge_core::GeneratedFile;

/// The request-logging middleware (middleware/logger.go).
pub struct LoggerGo;

impl GeneratedFile for LoggerGo {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("middleware").join("logger.go")
    }

    fn render(&self) -> String {
        r#"package middleware

import (
	"log"
	"time"

	"github.com/gin-gonic/gin"
)

// Logger records method, path, status, latency, and client address.
func Logger() gin.HandlerFunc {
	return func(c *gin.Context) {
		start := time.Now()
		path := c.Request.URL.Path

		c.Next()

		latency := time.Since(start)
		statusCode := c.Writer.Status()
		method := c.Request.Method
		clientIP := c.ClientIP()

		log.Printf("[API] %3d | %13v | %15s | %-7s %s",
			statusCode, latency, clientIP, method, path)
	}
}
"#
        .to_string()
    }
}
