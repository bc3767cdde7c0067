//! Closed set of figure kinds and their point-count requirements.

use std::fmt;
use std::str::FromStr;

use super::FigureError;

/// Figure variant tag.
///
/// Rhombus, Rectangle and Square carry no formulas of their own; they share
/// the quadrilateral table in `metrics`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FigureKind {
    Line,
    Triangle,
    Quadrilateral,
    Rhombus,
    Rectangle,
    Square,
    Unknown,
}

impl FigureKind {
    pub const ALL: [FigureKind; 7] = [
        FigureKind::Line,
        FigureKind::Triangle,
        FigureKind::Quadrilateral,
        FigureKind::Rhombus,
        FigureKind::Rectangle,
        FigureKind::Square,
        FigureKind::Unknown,
    ];

    /// Exact point count, or `None` when unconstrained.
    #[inline]
    pub fn required_points(self) -> Option<usize> {
        match self {
            FigureKind::Line => Some(2),
            FigureKind::Triangle => Some(3),
            FigureKind::Quadrilateral
            | FigureKind::Rhombus
            | FigureKind::Rectangle
            | FigureKind::Square => Some(4),
            FigureKind::Unknown => None,
        }
    }

    #[inline]
    pub fn is_quadrilateral(self) -> bool {
        matches!(
            self,
            FigureKind::Quadrilateral
                | FigureKind::Rhombus
                | FigureKind::Rectangle
                | FigureKind::Square
        )
    }

    pub fn default_name(self) -> &'static str {
        match self {
            FigureKind::Line => "Line",
            FigureKind::Triangle => "Triangle",
            FigureKind::Quadrilateral => "Quadrilateral",
            FigureKind::Rhombus => "Rhombus",
            FigureKind::Rectangle => "Rectangle",
            FigureKind::Square => "Square",
            FigureKind::Unknown => "UnknownFigure",
        }
    }

    fn tag(self) -> &'static str {
        match self {
            FigureKind::Line => "line",
            FigureKind::Triangle => "triangle",
            FigureKind::Quadrilateral => "quadrilateral",
            FigureKind::Rhombus => "rhombus",
            FigureKind::Rectangle => "rectangle",
            FigureKind::Square => "square",
            FigureKind::Unknown => "unknown",
        }
    }
}

impl fmt::Display for FigureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for FigureKind {
    type Err = FigureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        FigureKind::ALL
            .into_iter()
            .find(|k| k.tag().eq_ignore_ascii_case(needle))
            .ok_or_else(|| FigureError::UnknownKind(needle.to_string()))
    }
}
