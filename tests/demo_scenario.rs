use std::f64::consts::PI;

use oops::driver::build_report;
use oops::output::{circle_line, write_text};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-12 * a.abs().max(b.abs()).max(1.0)
}

#[test]
fn sample_circles_have_expected_areas_and_perimeters() {
    let report = build_report();
    let expected = [
        (1.0, PI, 2.0 * PI),
        (25.0, 625.0 * PI, 50.0 * PI),
        (125.0, 15625.0 * PI, 250.0 * PI),
    ];

    assert_eq!(report.circles.len(), expected.len());
    for (circle, (radius, area, perimeter)) in report.circles.iter().zip(expected) {
        assert_eq!(circle.radius, radius);
        assert!(close(circle.area, area), "{}: area {}", circle.label, circle.area);
        assert!(
            close(circle.perimeter, perimeter),
            "{}: perimeter {}",
            circle.label,
            circle.perimeter
        );
    }
}

#[test]
fn text_output_prints_name_before_circles() {
    let report = build_report();
    let mut buf = Vec::new();
    write_text(&mut buf, &report, false).unwrap();
    let text = String::from_utf8(buf).unwrap();
    let lines: Vec<_> = text.lines().collect();

    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "Fred");
    assert_eq!(report.animal_name, "Fred");
    for (line, circle) in lines[1..].iter().zip(&report.circles) {
        assert_eq!(*line, circle_line(circle));
    }
    assert!(lines[1].starts_with("Circle1: Radius = 1.0, Area = 3.14159265"));
    assert!(lines[2].starts_with("Circle2: Radius = 25.0, Area = "));
    assert!(lines[3].starts_with("Circle3: Radius = 125.0, Area = "));
}
