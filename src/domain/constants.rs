//! Mathematical constants used in geometric calculations

use std::f64::consts;

pub const PI: f64 = consts::PI;

/// Full circle in radians
pub const TAU: f64 = consts::TAU;

pub const GOLDEN_RATIO: f64 = 1.618_033_988_749_895;
pub const SQRT_2: f64 = consts::SQRT_2;
pub const SQRT_3: f64 = 1.732_050_807_568_877_2;

pub const DEGREES_TO_RADIANS: f64 = PI / 180.0;
pub const RADIANS_TO_DEGREES: f64 = 180.0 / PI;

/// Tolerance for floating point comparisons
pub const EPSILON: f64 = 1e-10;

/// Returns every named constant, in display order
pub fn all() -> &'static [(&'static str, f64)] {
    &[
        ("pi", PI),
        ("tau", TAU),
        ("golden_ratio", GOLDEN_RATIO),
        ("sqrt_2", SQRT_2),
        ("sqrt_3", SQRT_3),
        ("deg_to_rad", DEGREES_TO_RADIANS),
        ("rad_to_deg", RADIANS_TO_DEGREES),
        ("epsilon", EPSILON),
    ]
}

/// Looks up a constant by name (case-insensitive)
pub fn lookup(name: &str) -> Option<f64> {
    let name = name.trim().to_lowercase();
    all()
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, value)| *value)
}
