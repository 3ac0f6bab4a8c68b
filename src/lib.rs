//! Geometry utilities - shape measurements, serialization and reports
//!
//! Shapes (circles, rectangles, squares) are validated on construction and
//! immutable afterwards. Each one exposes its area and perimeter, converts
//! to and from a plain `{kind, ...dimensions}` mapping, and collections of
//! shapes can be summarized in a text or JSON report.

pub mod domain;
pub mod storage;
pub mod cli;

pub use domain::{generate_report, Report, Shape, ShapeKind, ValidationError};
