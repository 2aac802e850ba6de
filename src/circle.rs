use std::f64::consts::PI;

use serde::{Serialize, Deserialize};

pub const DEFAULT_RADIUS: f64 = 1.0;

/// A circle described only by its radius.
///
/// Area and perimeter are derived on every call, never cached, so they always
/// follow the current radius. Negative, zero and NaN radii are accepted as-is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    radius: f64,
}

impl Default for Circle {
    fn default() -> Self {
        Circle { radius: DEFAULT_RADIUS }
    }
}

impl Circle {
    pub fn new(radius: f64) -> Self {
        Circle { radius }
    }

    /// π·r²
    pub fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    /// 2·π·r
    pub fn perimeter(&self) -> f64 {
        2.0 * PI * self.radius
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn set_radius(&mut self, radius: f64) {
        self.radius = radius;
    }
}
