//! Core utilities and types for the apiforge backend generator.
//!
//! This crate provides the building blocks shared by the schema, IR, and
//! codegen crates: identifier normalization, field-type mapping, an
//! indentation-aware code builder, and the generated-file abstraction.

mod builder;
mod file;
mod naming;
mod type_mapper;
mod types;

// Code building
pub use builder::{CodeBuilder, Indent};
// File operations
pub use file::{GeneratedFile, PreviewFile, write_file};
// Fundamental types
pub use type_mapper::{FieldType, go_type};
pub use types::RelationKind;
// String utilities
pub use naming::{to_camel_case, to_pascal_case};
