//! Human-readable one-line figure descriptions.

use std::fmt;

use crate::figure::Figure;

/// `"{name} with {n} points, perimeter: {p}, area: {a}"`.
///
/// Metrics are recomputed on every call. Floats use `f64`'s `Display`, which
/// prints the shortest form that round-trips (`12.0` renders as `12`).
pub fn description(figure: &Figure) -> String {
    figure.to_string()
}

impl fmt::Display for Figure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} with {} points, perimeter: {}, area: {}",
            self.display_name(),
            self.point_count(),
            self.perimeter(),
            self.area()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::Point;

    #[test]
    fn unnamed_triangle() {
        let t = Figure::triangle([
            Point::new(0.0, 0.0),
            Point::new(3.0, 0.0),
            Point::new(3.0, 4.0),
        ]);
        assert_eq!(
            description(&t),
            "Figure with 3 points, perimeter: 12, area: 6"
        );
    }

    #[test]
    fn named_line_with_fraction() {
        let l = Figure::line(Point::new(0.0, 0.0), Point::new(0.5, 0.0)).with_name("Line");
        assert_eq!(
            description(&l),
            "Line with 2 points, perimeter: 0.5, area: 0"
        );
    }
}
