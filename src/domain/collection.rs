//! Aggregate operations over collections of shapes

use thiserror::Error;

use super::shape::Shape;

#[derive(Debug, Error, PartialEq)]
pub enum CollectionError {
    #[error("Empty shape list")]
    Empty,
}

/// Sum of all areas (positive zero for an empty slice)
pub fn total_area(shapes: &[Shape]) -> f64 {
    shapes.iter().fold(0.0, |total, shape| total + shape.area())
}

/// Sum of all perimeters (0 for an empty slice)
pub fn total_perimeter(shapes: &[Shape]) -> f64 {
    shapes.iter().fold(0.0, |total, shape| total + shape.perimeter())
}

/// Returns the shapes ordered by ascending area.
///
/// The sort is stable: shapes with equal areas keep their input order.
pub fn sort_by_area(shapes: &[Shape]) -> Vec<Shape> {
    let mut sorted = shapes.to_vec();
    sorted.sort_by(|a, b| a.area().total_cmp(&b.area()));
    sorted
}

/// Returns the shape with the largest area (the first one on ties)
pub fn largest(shapes: &[Shape]) -> Result<&Shape, CollectionError> {
    shapes
        .iter()
        .reduce(|best, shape| if shape.area() > best.area() { shape } else { best })
        .ok_or(CollectionError::Empty)
}
