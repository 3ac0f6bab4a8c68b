//! Shape reports
//!
//! A [`Report`] captures per-shape measurements and totals for an ordered
//! sequence of shapes. It renders to text at a caller-chosen precision or
//! serializes to JSON as-is.

use serde::Serialize;

use super::collection::{total_area, total_perimeter};
use super::shape::{Shape, ShapeKind};

/// Decimal places used when no precision is configured
pub const DEFAULT_PRECISION: usize = 2;

const HEADER_RULE_WIDTH: usize = 40;
const ENTRY_RULE_WIDTH: usize = 20;

/// Measurements for a single shape in a report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportEntry {
    /// 1-based position in the input
    pub index: usize,
    pub shape: Shape,
    pub area: f64,
    pub perimeter: f64,
}

impl ReportEntry {
    pub fn kind(&self) -> ShapeKind {
        self.shape.kind()
    }
}

/// Aggregated measurements for a sequence of shapes
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub entries: Vec<ReportEntry>,
    pub total_shapes: usize,
    pub total_area: f64,
    pub total_perimeter: f64,
}

impl Report {
    /// Measures every shape, keeping input order
    pub fn build(shapes: &[Shape]) -> Self {
        let entries = shapes
            .iter()
            .enumerate()
            .map(|(i, shape)| ReportEntry {
                index: i + 1,
                shape: *shape,
                area: shape.area(),
                perimeter: shape.perimeter(),
            })
            .collect();

        Self {
            entries,
            total_shapes: shapes.len(),
            total_area: total_area(shapes),
            total_perimeter: total_perimeter(shapes),
        }
    }

    /// Renders the report as text with `precision` decimal places
    pub fn render(&self, precision: usize) -> String {
        let mut lines = vec![
            "Shape Report".to_string(),
            "=".repeat(HEADER_RULE_WIDTH),
        ];

        for entry in &self.entries {
            lines.push(String::new());
            lines.push(format!("Shape {}:", entry.index));
            lines.push(format!("Type: {}", entry.kind().label()));
            lines.push(format!("Area: {:.*}", precision, entry.area));
            lines.push(format!("Perimeter: {:.*}", precision, entry.perimeter));
            lines.push("-".repeat(ENTRY_RULE_WIDTH));
        }

        lines.push(String::new());
        lines.push(format!("Total Shapes: {}", self.total_shapes));
        lines.push(format!("Total Area: {:.*}", precision, self.total_area));
        lines.push(format!("Total Perimeter: {:.*}", precision, self.total_perimeter));

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }
}

/// Generates the text report for `shapes` in input order
pub fn generate_report(shapes: &[Shape], precision: usize) -> String {
    Report::build(shapes).render(precision)
}
