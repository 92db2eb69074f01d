//! Presentation sink: per-shape reports in text or JSON form.

use std::io::{self, Write};

use serde::Serialize;

use shapeforge_core::Shape;

use crate::container::ShapeContainer;

/// Snapshot of what gets reported for one shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShapeReport {
    pub variant: &'static str,
    pub width: u32,
    pub height: u32,
    pub area: u64,
    pub rotations: u32,
    pub rows: Vec<String>,
}

impl ShapeReport {
    pub fn of(shape: &dyn Shape) -> Self {
        let dimensions = shape.dimensions();
        Self {
            variant: shape.variant(),
            width: dimensions.width(),
            height: dimensions.height(),
            area: dimensions.area(),
            rotations: shape.rotation_count(),
            rows: shape.render().collect(),
        }
    }
}

impl core::fmt::Display for ShapeReport {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for row in &self.rows {
            writeln!(f, "{row}")?;
        }
        writeln!(f, "Area: {}x{} = {}", self.width, self.height, self.area)?;
        write!(f, "Rotations: {}", self.rotations)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// Rendered rows, area and rotation lines, blank line between shapes.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

impl ReportFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Write one report per shape in `container`, in order.
pub fn write_report<W: Write>(
    out: &mut W,
    container: &ShapeContainer,
    format: ReportFormat,
) -> io::Result<()> {
    for shape in container {
        let report = ShapeReport::of(&*shape.borrow());
        match format {
            ReportFormat::Text => writeln!(out, "{report}\n")?,
            ReportFormat::Json => {
                serde_json::to_writer(&mut *out, &report)?;
                writeln!(out)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filled::FilledRectangle;
    use crate::rectangle::Rectangle;
    use shapeforge_core::FillSymbol;

    fn container() -> ShapeContainer {
        ShapeContainer::new(vec![
            Box::new(Rectangle::new(3, 2).unwrap()),
            Box::new(FilledRectangle::new(2, 2, FillSymbol::new('*').unwrap()).unwrap()),
        ])
    }

    #[test]
    fn report_captures_dimensions_and_history() {
        let mut rect = Rectangle::new(2, 3).unwrap();
        rect.rotate();

        let report = ShapeReport::of(&rect);
        assert_eq!(report.variant, "rectangle");
        assert_eq!((report.width, report.height, report.area), (3, 2, 6));
        assert_eq!(report.rotations, 1);
        assert_eq!(report.rows, vec!["+-+", "+-+"]);
    }

    #[test]
    fn text_report_lists_area_and_rotations() {
        let mut out = Vec::new();
        write_report(&mut out, &container(), ReportFormat::Text).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "+-+\n+-+\nArea: 3x2 = 6\nRotations: 0\n\n**\n**\nArea: 2x2 = 4\nRotations: 0\n\n"
        );
    }

    #[test]
    fn json_report_is_one_object_per_line() {
        let container = container();
        container.to_portrait();

        let mut out = Vec::new();
        write_report(&mut out, &container, ReportFormat::Json).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<serde_json::Value> = text
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["variant"], "rectangle");
        assert_eq!(lines[0]["width"], 2);
        assert_eq!(lines[0]["rotations"], 1);
        assert_eq!(lines[1]["rows"], serde_json::json!(["**", "**"]));
    }

    #[test]
    fn format_parsing_is_case_insensitive() {
        assert_eq!(ReportFormat::parse("JSON"), Some(ReportFormat::Json));
        assert_eq!(ReportFormat::parse(" text "), Some(ReportFormat::Text));
        assert_eq!(ReportFormat::parse("yaml"), None);
    }
}
