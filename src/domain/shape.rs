//! Shape domain model
//!
//! Shapes are a closed set of variants (circle, rectangle, square). Every
//! dimension is a validated [`Length`], so a constructed [`Shape`] always
//! satisfies the strictly-positive invariant and never changes afterwards.
//!
//! The plain data form of a shape is a mapping with a `kind` discriminator
//! followed by the kind's dimension fields:
//!
//! ```json
//! {"kind": "rectangle", "width": 4.0, "height": 3.0}
//! ```

use std::fmt;
use std::str::FromStr;

use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use thiserror::Error;

use super::constants::PI;

/// Key carrying the shape discriminator
pub const KIND_KEY: &str = "kind";

/// Discriminator key used by files written with the older `type` layout
const LEGACY_KIND_KEY: &str = "type";

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    #[error("Shape data must be a mapping, got {0}")]
    NotAMapping(String),

    #[error("Missing shape kind: expected a 'kind' field")]
    MissingKind,

    #[error("Unknown shape kind: '{0}' (expected circle, rectangle or square)")]
    UnknownKind(String),

    #[error("Missing required field '{field}' for {kind}")]
    MissingField { kind: ShapeKind, field: &'static str },

    #[error("Field '{field}' must be a number, got {value}")]
    NotNumeric { field: String, value: String },

    #[error("Field '{field}' must be a finite number, got {value}")]
    NotFinite { field: String, value: f64 },

    #[error("Field '{field}' must be positive, got {value}")]
    NotPositive { field: String, value: f64 },

    #[error("Dimensions too large: {kind} {measure} is not a finite number")]
    Overflow { kind: ShapeKind, measure: &'static str },
}

/// The kind of a shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Circle,
    Rectangle,
    Square,
}

impl ShapeKind {
    /// Returns all shape kinds
    pub fn all() -> &'static [ShapeKind] {
        &[ShapeKind::Circle, ShapeKind::Rectangle, ShapeKind::Square]
    }

    /// Dimension fields for this kind, in serialization order
    pub fn fields(&self) -> &'static [&'static str] {
        match self {
            ShapeKind::Circle => &["radius"],
            ShapeKind::Rectangle => &["width", "height"],
            ShapeKind::Square => &["side"],
        }
    }

    /// Lowercase identifier used in serialized data
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::Circle => "circle",
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Square => "square",
        }
    }

    /// Capitalized name used in reports
    pub fn label(&self) -> &'static str {
        match self {
            ShapeKind::Circle => "Circle",
            ShapeKind::Rectangle => "Rectangle",
            ShapeKind::Square => "Square",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShapeKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "circle" => Ok(ShapeKind::Circle),
            "rectangle" => Ok(ShapeKind::Rectangle),
            "square" => Ok(ShapeKind::Square),
            _ => Err(ValidationError::UnknownKind(s.to_string())),
        }
    }
}

/// A strictly positive, finite dimension
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Length(f64);

impl Length {
    /// Validates a raw value for the named field
    pub fn new(field: &str, value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() {
            return Err(ValidationError::NotFinite {
                field: field.to_string(),
                value,
            });
        }
        if value <= 0.0 {
            return Err(ValidationError::NotPositive {
                field: field.to_string(),
                value,
            });
        }
        Ok(Self(value))
    }

    pub fn get(&self) -> f64 {
        self.0
    }
}

/// A geometric shape
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Circle { radius: Length },
    Rectangle { width: Length, height: Length },
    Square { side: Length },
}

impl Shape {
    /// Creates a circle
    pub fn circle(radius: f64) -> Result<Self, ValidationError> {
        Shape::Circle {
            radius: Length::new("radius", radius)?,
        }
        .measurable()
    }

    /// Creates a rectangle
    pub fn rectangle(width: f64, height: f64) -> Result<Self, ValidationError> {
        Shape::Rectangle {
            width: Length::new("width", width)?,
            height: Length::new("height", height)?,
        }
        .measurable()
    }

    /// Creates a square
    pub fn square(side: f64) -> Result<Self, ValidationError> {
        Shape::Square {
            side: Length::new("side", side)?,
        }
        .measurable()
    }

    /// Rejects shapes whose area or perimeter overflows `f64`
    fn measurable(self) -> Result<Self, ValidationError> {
        let measure = if !self.area().is_finite() {
            "area"
        } else if !self.perimeter().is_finite() {
            "perimeter"
        } else {
            return Ok(self);
        };
        Err(ValidationError::Overflow {
            kind: self.kind(),
            measure,
        })
    }

    /// Builds a shape of the given kind from named parameters.
    ///
    /// Keys that are not dimensions of `kind` are ignored.
    pub fn construct(kind: ShapeKind, params: &Map<String, Value>) -> Result<Self, ValidationError> {
        let dim = |field: &'static str| -> Result<f64, ValidationError> {
            let value = params
                .get(field)
                .ok_or(ValidationError::MissingField { kind, field })?;
            value.as_f64().ok_or_else(|| ValidationError::NotNumeric {
                field: field.to_string(),
                value: value.to_string(),
            })
        };

        match kind {
            ShapeKind::Circle => Self::circle(dim("radius")?),
            ShapeKind::Rectangle => Self::rectangle(dim("width")?, dim("height")?),
            ShapeKind::Square => Self::square(dim("side")?),
        }
    }

    /// Returns the kind of this shape
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Circle { .. } => ShapeKind::Circle,
            Shape::Rectangle { .. } => ShapeKind::Rectangle,
            Shape::Square { .. } => ShapeKind::Square,
        }
    }

    pub fn area(&self) -> f64 {
        match self {
            Shape::Circle { radius } => PI * radius.get().powi(2),
            Shape::Rectangle { width, height } => width.get() * height.get(),
            Shape::Square { side } => side.get().powi(2),
        }
    }

    /// Perimeter (circumference for circles)
    pub fn perimeter(&self) -> f64 {
        match self {
            Shape::Circle { radius } => 2.0 * PI * radius.get(),
            Shape::Rectangle { width, height } => 2.0 * (width.get() + height.get()),
            Shape::Square { side } => 4.0 * side.get(),
        }
    }

    /// Dimension fields and their values, in serialization order
    pub fn dimensions(&self) -> Vec<(&'static str, f64)> {
        match self {
            Shape::Circle { radius } => vec![("radius", radius.get())],
            Shape::Rectangle { width, height } => {
                vec![("width", width.get()), ("height", height.get())]
            }
            Shape::Square { side } => vec![("side", side.get())],
        }
    }

    /// Serializes to the plain mapping form
    pub fn to_value(&self) -> Value {
        let mut map = Map::new();
        map.insert(KIND_KEY.to_string(), Value::from(self.kind().as_str()));
        for (field, value) in self.dimensions() {
            map.insert(field.to_string(), Value::from(value));
        }
        Value::Object(map)
    }

    /// Parses the plain mapping form produced by [`Shape::to_value`].
    ///
    /// Also accepts the discriminator under `type`; derived keys such as
    /// `area` or `perimeter` are ignored.
    pub fn from_value(value: &Value) -> Result<Self, ValidationError> {
        let map = value
            .as_object()
            .ok_or_else(|| ValidationError::NotAMapping(value_type_name(value).to_string()))?;

        let kind = map
            .get(KIND_KEY)
            .or_else(|| map.get(LEGACY_KIND_KEY))
            .ok_or(ValidationError::MissingKind)?;

        let kind: ShapeKind = match kind {
            Value::String(s) => s.parse()?,
            other => return Err(ValidationError::UnknownKind(other.to_string())),
        };

        Self::construct(kind, map)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind())?;
        let dims: Vec<String> = self
            .dimensions()
            .into_iter()
            .map(|(field, value)| format!("{}={}", field, value))
            .collect();
        write!(f, "({})", dims.join(", "))
    }
}

impl Serialize for Shape {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let dims = self.dimensions();
        let mut map = serializer.serialize_map(Some(dims.len() + 1))?;
        map.serialize_entry(KIND_KEY, self.kind().as_str())?;
        for (field, value) in dims {
            map.serialize_entry(field, &value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Shape {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Shape::from_value(&value).map_err(serde::de::Error::custom)
    }
}

fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "a mapping",
    }
}
