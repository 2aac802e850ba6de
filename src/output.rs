use std::io::{self, Write};

use anyhow::Result;
use colored::*;

use crate::types::{CircleReport, Report};

// Output the report as JSON
pub fn output_json(report: &Report) -> Result<()> {
    let stdout = io::stdout();
    write_json(&mut stdout.lock(), report)
}

pub fn write_json<W: Write>(out: &mut W, report: &Report) -> Result<()> {
    let json = ::serde_json::to_string_pretty(report)?;
    writeln!(out, "{}", json)?;
    Ok(())
}

// Output the report as text lines, optionally colored
pub fn output_text(report: &Report, color: bool) -> Result<()> {
    let stdout = io::stdout();
    write_text(&mut stdout.lock(), report, color)
}

pub fn write_text<W: Write>(out: &mut W, report: &Report, color: bool) -> Result<()> {
    if color {
        writeln!(out, "{}", report.animal_name.green().bold())?;
    } else {
        writeln!(out, "{}", report.animal_name)?;
    }

    for circle in &report.circles {
        if color {
            writeln!(out, "{}", colored_circle_line(circle))?;
        } else {
            writeln!(out, "{}", circle_line(circle))?;
        }
    }

    Ok(())
}

/// Plain line for one circle, e.g. `Circle2: Radius = 25.0, Area = ..., Perimeter = ...`.
///
/// Floats use the shortest representation that round-trips, keeping `.0` on
/// whole numbers.
pub fn circle_line(circle: &CircleReport) -> String {
    format!(
        "{}: Radius = {:?}, Area = {:?}, Perimeter = {:?}",
        circle.label, circle.radius, circle.area, circle.perimeter
    )
}

fn colored_circle_line(circle: &CircleReport) -> String {
    format!(
        "{}: Radius = {}, Area = {}, Perimeter = {}",
        circle.label.cyan().bold(),
        format!("{:?}", circle.radius).yellow(),
        format!("{:?}", circle.area).yellow(),
        format!("{:?}", circle.perimeter).yellow(),
    )
}
