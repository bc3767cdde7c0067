//! Figures: an ordered point list tagged with its kind.
//!
//! Purpose
//! - One concrete `Figure` type over the closed `FigureKind` set; area and
//!   perimeter dispatch on the tag.
//! - Construction is strict: a kind with a fixed point count rejects any other
//!   count with `FigureError::InvalidGeometry`. Array constructors make the
//!   count a type-level fact and cannot fail.
//!
//! Figures are immutable once built. Replacement happens wholesale through
//! the owning registry.

mod kind;
mod metrics;

pub use kind::FigureKind;

use crate::primitives::Point;

/// Figure construction errors.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FigureError {
    #[error("invalid geometry for {kind}: expected {expected} points, got {got}")]
    InvalidGeometry {
        kind: FigureKind,
        expected: usize,
        got: usize,
    },
    #[error("unknown figure kind `{0}`")]
    UnknownKind(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Figure {
    kind: FigureKind,
    points: Vec<Point>,
    name: Option<String>,
}

impl Figure {
    /// Validated constructor for any kind.
    pub fn new(
        kind: FigureKind,
        points: Vec<Point>,
        name: Option<String>,
    ) -> Result<Self, FigureError> {
        if let Some(expected) = kind.required_points() {
            if points.len() != expected {
                return Err(FigureError::InvalidGeometry {
                    kind,
                    expected,
                    got: points.len(),
                });
            }
        }
        Ok(Self { kind, points, name })
    }

    pub fn line(a: Point, b: Point) -> Self {
        Self::from_parts(FigureKind::Line, vec![a, b])
    }

    pub fn triangle(points: [Point; 3]) -> Self {
        Self::from_parts(FigureKind::Triangle, points.to_vec())
    }

    pub fn quadrilateral(points: [Point; 4]) -> Self {
        Self::from_parts(FigureKind::Quadrilateral, points.to_vec())
    }

    pub fn rhombus(points: [Point; 4]) -> Self {
        Self::from_parts(FigureKind::Rhombus, points.to_vec())
    }

    pub fn rectangle(points: [Point; 4]) -> Self {
        Self::from_parts(FigureKind::Rectangle, points.to_vec())
    }

    pub fn square(points: [Point; 4]) -> Self {
        Self::from_parts(FigureKind::Square, points.to_vec())
    }

    /// Placeholder shape with any number of points; its metrics are zero.
    pub fn unknown(points: Vec<Point>) -> Self {
        Self::from_parts(FigureKind::Unknown, points)
    }

    #[inline]
    fn from_parts(kind: FigureKind, points: Vec<Point>) -> Self {
        Self {
            kind,
            points,
            name: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[inline]
    pub fn kind(&self) -> FigureKind {
        self.kind
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The explicit name, or `"Figure"` if none was given.
    #[inline]
    pub fn display_name(&self) -> &str {
        self.name().unwrap_or("Figure")
    }

    pub fn area(&self) -> f64 {
        match self.kind {
            FigureKind::Triangle => match self.points.as_slice() {
                [a, b, c] => metrics::heron_area(&[*a, *b, *c]),
                _ => 0.0,
            },
            k if k.is_quadrilateral() => metrics::shoelace_area(&self.points),
            _ => 0.0,
        }
    }

    pub fn perimeter(&self) -> f64 {
        match self.kind {
            FigureKind::Line => self.points[0].distance(&self.points[1]),
            FigureKind::Triangle => metrics::closed_perimeter(&self.points),
            k if k.is_quadrilateral() => metrics::closed_perimeter(&self.points),
            _ => 0.0,
        }
    }
}
