//! Domain models for geometry utilities
//!
//! Contains the shape model, measurements and reports without any I/O
//! concerns.

pub mod constants;
mod shape;
mod collection;
mod report;

pub use shape::{Length, Shape, ShapeKind, ValidationError, KIND_KEY};
pub use collection::{largest, sort_by_area, total_area, total_perimeter, CollectionError};
pub use report::{generate_report, Report, ReportEntry, DEFAULT_PRECISION};
