//! Shape files
//!
//! A shape file holds a sequence of serialized shapes, one mapping per
//! element. JSON is the default; `.yaml`/`.yml` files are read as YAML.

use std::fs::{self, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::Value;

use crate::domain::{Shape, ShapeKind, ValidationError};

/// Text format of a shape file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Json,
    Yaml,
}

impl FileFormat {
    /// Picks the format from the file extension (JSON unless `.yaml`/`.yml`)
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase)
            .as_deref()
        {
            Some("yaml") | Some("yml") => FileFormat::Yaml,
            _ => FileFormat::Json,
        }
    }
}

/// A file of serialized shapes
pub struct ShapeFile {
    path: PathBuf,
    format: FileFormat,
}

impl ShapeFile {
    /// Opens a shape file, detecting the format from its extension
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let format = FileFormat::from_path(&path);
        Self { path, format }
    }

    pub fn format(&self) -> FileFormat {
        self.format
    }

    /// Reads every shape in file order
    pub fn read_all(&self) -> Result<Vec<Shape>> {
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read shape file: {}", self.path.display()))?;

        parse_shapes(&content, self.format)
            .with_context(|| format!("Invalid shape file: {}", self.path.display()))
    }
}

/// Parses a sequence of serialized shapes.
///
/// Each element is validated independently; the first invalid element
/// fails the whole parse with its 1-based position.
pub fn parse_shapes(content: &str, format: FileFormat) -> Result<Vec<Shape>> {
    let values: Vec<Value> = match format {
        FileFormat::Json => {
            serde_json::from_str(content).context("Expected a JSON array of shapes")?
        }
        FileFormat::Yaml => {
            let documents: Vec<serde_yaml::Value> =
                serde_yaml::from_str(content).context("Expected a YAML sequence of shapes")?;
            documents
                .iter()
                .enumerate()
                .map(|(i, document)| {
                    yaml_to_json(document)
                        .with_context(|| format!("Invalid shape at position {}", i + 1))
                })
                .collect::<Result<_>>()?
        }
    };

    values
        .iter()
        .enumerate()
        .map(|(i, value)| {
            Shape::from_value(value).with_context(|| format!("Invalid shape at position {}", i + 1))
        })
        .collect()
}

/// Converts one YAML shape to its JSON form.
///
/// JSON cannot carry `.nan`/`.inf`, so non-finite dimensions are rejected
/// here instead of silently becoming `null`.
fn yaml_to_json(document: &serde_yaml::Value) -> Result<Value> {
    if let serde_yaml::Value::Mapping(mapping) = document {
        for (key, value) in mapping {
            let (Some(field), Some(number)) = (key.as_str(), value.as_f64()) else {
                continue;
            };
            let is_dimension = ShapeKind::all()
                .iter()
                .any(|kind| kind.fields().contains(&field));
            if is_dimension && !number.is_finite() {
                return Err(ValidationError::NotFinite {
                    field: field.to_string(),
                    value: number,
                }
                .into());
            }
        }
    }

    serde_json::to_value(document).context("Unsupported YAML value")
}

/// Writes `content` to `path` through a temp file and rename
pub fn write_atomic(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let mut temp_name = path.as_os_str().to_owned();
    temp_name.push(".tmp");
    let temp_path = PathBuf::from(temp_name);

    let result = write_then_rename(&temp_path, path, content);
    if result.is_err() && temp_path.exists() {
        let _ = fs::remove_file(&temp_path);
    }
    result
}

fn write_then_rename(temp_path: &Path, path: &Path, content: &str) -> Result<()> {
    {
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(temp_path)
            .with_context(|| format!("Failed to create temp file: {}", temp_path.display()))?;

        let mut writer = BufWriter::new(&file);
        writer
            .write_all(content.as_bytes())
            .with_context(|| format!("Failed to write {}", temp_path.display()))?;
        writer.flush().context("Failed to flush output")?;
    }

    fs::rename(temp_path, path).with_context(|| {
        format!(
            "Failed to rename {} to {}",
            temp_path.display(),
            path.display()
        )
    })
}
