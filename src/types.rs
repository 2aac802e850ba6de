use serde::{Serialize, Deserialize};

use crate::circle::Circle;

/// Snapshot of one circle's values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircleReport {
    pub label: String,
    pub radius: f64,
    pub area: f64,
    pub perimeter: f64,
}

impl CircleReport {
    pub fn from_circle(label: impl Into<String>, circle: &Circle) -> Self {
        CircleReport {
            label: label.into(),
            radius: circle.radius(),
            area: circle.area(),
            perimeter: circle.perimeter(),
        }
    }
}

/// Everything the demo prints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub animal_name: String,
    #[serde(default)]
    pub circles: Vec<CircleReport>,
}
