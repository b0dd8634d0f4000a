//! Go project emitter: renders a lowered schema into a complete
//! Gin + GORM + SQLite backend.
//!
//! Every output file is a named artifact struct carrying its typed inputs
//! and implementing [`apiforge_core::GeneratedFile`]; the [`Generator`]
//! orchestrates the fixed stage order and nothing else.

mod generator;

pub mod files;

pub use apiforge_core::{GeneratedFile, PreviewFile};
pub use generator::Generator;
