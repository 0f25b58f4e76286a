//! Closed-form area formulas.
//!
//! Dimensions are not validated: a negative radius or height silently
//! produces a negative or zero area. The shell prompts do not constrain
//! sign either, so the formulas stay faithful to their inputs.

use std::f64::consts::PI;

/// `π · radius²`
pub fn circle_area(radius: f64) -> f64 {
    PI * radius * radius
}

/// `length · width`
pub fn rectangle_area(length: f64, width: f64) -> f64 {
    length * width
}

/// `0.5 · base · height`
pub fn triangle_area(base: f64, height: f64) -> f64 {
    0.5 * base * height
}
