//! Single-shape commands (circle, rectangle, square, export)

use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;

use super::output::Output;
use crate::domain::{Shape, ShapeKind};
use crate::storage::{write_atomic, FileFormat};

/// Prints a shape with its area and perimeter
pub fn show(output: &Output, shape: &Shape, precision: usize) -> Result<()> {
    output.verbose_ctx(shape.kind().as_str(), &format!("Constructed {}", shape));

    if output.is_json() {
        output.data(&measured(shape));
    } else {
        println!("Shape: {}", shape);
        println!("Area: {:.*}", precision, shape.area());
        println!("Perimeter: {:.*}", precision, shape.perimeter());
    }

    Ok(())
}

/// Builds a shape from a JSON parameter object and prints or writes its
/// serialized form
pub fn export(output: &Output, kind: ShapeKind, params: &str, path: Option<&Path>) -> Result<()> {
    output.verbose_ctx("export", &format!("Parsing {} params: {}", kind, params));

    let params: Value = serde_json::from_str(params).context("Invalid --params JSON")?;
    let params = params
        .as_object()
        .ok_or_else(|| anyhow::anyhow!("--params must be a JSON object, got {}", params))?;

    let shape = Shape::construct(kind, params)?;

    match path {
        Some(path) => {
            let content = match FileFormat::from_path(path) {
                FileFormat::Json => {
                    let mut json = serde_json::to_string_pretty(&shape)
                        .context("Failed to serialize shape")?;
                    json.push('\n');
                    json
                }
                FileFormat::Yaml => {
                    serde_yaml::to_string(&shape).context("Failed to serialize shape")?
                }
            };
            write_atomic(path, &content)?;
            output.verbose_ctx("export", &format!("Wrote {} bytes", content.len()));
            output.success(&format!("Shape data written to {}", path.display()));
        }
        None => output.data(&shape),
    }

    Ok(())
}

/// Serialized shape plus its area and perimeter
pub(super) fn measured(shape: &Shape) -> Value {
    let mut value = shape.to_value();
    if let Value::Object(map) = &mut value {
        map.insert("area".to_string(), Value::from(shape.area()));
        map.insert("perimeter".to_string(), Value::from(shape.perimeter()));
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measured_adds_derived_fields() {
        let value = measured(&Shape::rectangle(4.0, 3.0).unwrap());
        assert_eq!(value["kind"], "rectangle");
        assert_eq!(value["area"], 12.0);
        assert_eq!(value["perimeter"], 14.0);

        // derived fields do not interfere with parsing
        assert_eq!(
            Shape::from_value(&value).unwrap(),
            Shape::rectangle(4.0, 3.0).unwrap()
        );
    }
}
