//! Commands over shape files (report, largest)

use std::path::Path;

use anyhow::{Context, Result};

use super::output::Output;
use super::shape_cmd::measured;
use crate::domain::{largest, sort_by_area, Report, Shape};
use crate::storage::{write_atomic, ShapeFile};

fn load(output: &Output, context: &str, file: &Path) -> Result<Vec<Shape>> {
    let shape_file = ShapeFile::new(file);
    output.verbose_ctx(
        context,
        &format!("Reading {:?} shape file: {}", shape_file.format(), file.display()),
    );

    let shapes = shape_file.read_all()?;
    output.verbose_ctx(context, &format!("Loaded {} shapes", shapes.len()));
    Ok(shapes)
}

/// Generates a report for the shapes in `file`
pub fn report(
    output: &Output,
    file: &Path,
    destination: Option<&Path>,
    sort: bool,
    precision: usize,
) -> Result<()> {
    let mut shapes = load(output, "report", file)?;

    if sort {
        output.verbose_ctx("report", "Sorting shapes by area");
        shapes = sort_by_area(&shapes);
    }

    let report = Report::build(&shapes);

    match destination {
        Some(path) => {
            let content = if output.is_json() {
                let mut json =
                    serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
                json.push('\n');
                json
            } else {
                report.render(precision)
            };
            write_atomic(path, &content)?;
            output.success(&format!("Report written to {}", path.display()));
        }
        None if output.is_json() => output.data(&report),
        None => print!("{}", report.render(precision)),
    }

    Ok(())
}

/// Prints the shape with the largest area in `file`
pub fn largest_shape(output: &Output, file: &Path, precision: usize) -> Result<()> {
    let shapes = load(output, "largest", file)?;
    let shape = largest(&shapes).with_context(|| format!("No shapes in {}", file.display()))?;

    if output.is_json() {
        output.data(&measured(shape));
    } else {
        println!("Largest: {}", shape);
        println!("Area: {:.*}", precision, shape.area());
    }

    Ok(())
}
