//! # Storage Layer
//!
//! File formats for shape collections and configuration.
//!
//! ## Storage Formats
//!
//! | Data | Format | Location |
//! |------|--------|----------|
//! | Shapes | JSON array (or YAML sequence) of `{kind, ...}` mappings | any path |
//! | Reports | Plain text or JSON | `--output` path |
//! | Config | TOML | `--config`, `$GEOMETRY_CONFIG`, or the user config dir |
//!
//! All writes are atomic (temp file + rename).
//!
//! ## Key Types
//!
//! - [`ShapeFile`] - Read/write a sequence of serialized shapes
//! - [`Config`] - User configuration

mod shape_file;
mod config;

pub use shape_file::{parse_shapes, write_atomic, FileFormat, ShapeFile};
pub use config::{Config, ConfigError, OutputFormat, MAX_PRECISION};
