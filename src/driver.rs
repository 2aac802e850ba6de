use log::debug;

use crate::animal::Animal;
use crate::circle::Circle;
use crate::types::{CircleReport, Report};

/// Radii used for the sample circles; `None` means the default constructor.
pub const SAMPLE_RADII: [Option<f64>; 3] = [None, Some(25.0), Some(125.0)];

// Build the sample objects and collect what gets printed
pub fn build_report() -> Report {
    let animal = Animal::new("Fred", 10, true);
    debug!("constructed {:?}", animal);

    // Only constructed, never printed
    let unnamed = Animal::default();
    debug!("constructed {:?}", unnamed);

    let circles = SAMPLE_RADII
        .iter()
        .enumerate()
        .map(|(i, radius)| {
            let circle = match radius {
                Some(r) => Circle::new(*r),
                None => Circle::default(),
            };
            debug!("constructed {:?}", circle);
            CircleReport::from_circle(format!("Circle{}", i + 1), &circle)
        })
        .collect();

    Report {
        animal_name: animal.name,
        circles,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_starts_with_fred() {
        let report = build_report();
        assert_eq!(report.animal_name, "Fred");
    }

    #[test]
    fn circles_are_labelled_in_order() {
        let labels: Vec<_> = build_report()
            .circles
            .into_iter()
            .map(|c| c.label)
            .collect();
        assert_eq!(labels, vec!["Circle1", "Circle2", "Circle3"]);
    }

    #[test]
    fn first_circle_uses_default_radius() {
        let report = build_report();
        assert_eq!(report.circles[0].radius, crate::circle::DEFAULT_RADIUS);
        assert_eq!(report.circles[1].radius, 25.0);
        assert_eq!(report.circles[2].radius, 125.0);
    }
}
