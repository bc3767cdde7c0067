//! Seeded random figures (replay tokens).
//!
//! Purpose
//! - Deterministic sample figures for benches and the CLI `random` command.
//!   Each draw is addressed by `(seed, index)` so a single figure can be
//!   reproduced without replaying the whole sequence.
//!
//! Model
//! - Lines, triangles, quadrilaterals: independent uniform points in
//!   `[-range, range]^2`.
//! - Rectangle: axis-aligned from a corner and two side lengths.
//! - Square: a corner, a side length and a rotation angle.
//! - Rhombus: a center, two half-diagonals and a rotation angle.

use ::rand::rngs::StdRng;
use ::rand::{Rng, SeedableRng};

use crate::figure::{Figure, FigureKind};
use crate::primitives::Point;

/// Sampler configuration.
#[derive(Clone, Debug)]
pub struct RandomFiguresCfg {
    /// Kinds drawn uniformly per figure. An empty list draws quadrilaterals.
    pub kinds: Vec<FigureKind>,
    /// Coordinates lie in `[-coord_range, coord_range]`.
    pub coord_range: f64,
}

impl Default for RandomFiguresCfg {
    fn default() -> Self {
        Self {
            kinds: vec![
                FigureKind::Line,
                FigureKind::Triangle,
                FigureKind::Quadrilateral,
                FigureKind::Rhombus,
                FigureKind::Rectangle,
                FigureKind::Square,
            ],
            coord_range: 10.0,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

fn point<R: Rng>(rng: &mut R, range: f64) -> Point {
    Point::new(rng.gen_range(-range..=range), rng.gen_range(-range..=range))
}

fn rotated(center: Point, dx: f64, dy: f64, theta: f64) -> Point {
    let (s, c) = theta.sin_cos();
    Point::new(center.x + c * dx - s * dy, center.y + s * dx + c * dy)
}

/// Draw one figure for `tok`. Unknown kinds in `cfg.kinds` yield an empty
/// placeholder figure.
pub fn draw_figure(cfg: &RandomFiguresCfg, tok: ReplayToken) -> Figure {
    let mut rng = tok.to_std_rng();
    let r = cfg.coord_range.abs().max(1e-9);
    let kind = if cfg.kinds.is_empty() {
        FigureKind::Quadrilateral
    } else {
        cfg.kinds[rng.gen_range(0..cfg.kinds.len())]
    };
    let pt = |rng: &mut StdRng| point(rng, r);
    match kind {
        FigureKind::Line => Figure::line(pt(&mut rng), pt(&mut rng)),
        FigureKind::Triangle => Figure::triangle([pt(&mut rng), pt(&mut rng), pt(&mut rng)]),
        FigureKind::Quadrilateral => Figure::quadrilateral([
            pt(&mut rng),
            pt(&mut rng),
            pt(&mut rng),
            pt(&mut rng),
        ]),
        FigureKind::Rectangle => {
            let o = pt(&mut rng);
            let w = rng.gen_range(0.0..=r);
            let h = rng.gen_range(0.0..=r);
            Figure::rectangle([
                o,
                Point::new(o.x + w, o.y),
                Point::new(o.x + w, o.y + h),
                Point::new(o.x, o.y + h),
            ])
        }
        FigureKind::Square => {
            let o = pt(&mut rng);
            let side = rng.gen_range(0.0..=r);
            let th = rng.gen_range(0.0..std::f64::consts::TAU);
            Figure::square([
                o,
                rotated(o, side, 0.0, th),
                rotated(o, side, side, th),
                rotated(o, 0.0, side, th),
            ])
        }
        FigureKind::Rhombus => {
            let c = pt(&mut rng);
            let p = rng.gen_range(0.0..=r) / 2.0;
            let q = rng.gen_range(0.0..=r) / 2.0;
            let th = rng.gen_range(0.0..std::f64::consts::TAU);
            Figure::rhombus([
                rotated(c, p, 0.0, th),
                rotated(c, 0.0, q, th),
                rotated(c, -p, 0.0, th),
                rotated(c, 0.0, -q, th),
            ])
        }
        FigureKind::Unknown => Figure::unknown(Vec::new()),
    }
}

/// Draw `count` figures with tokens `(seed, 0..count)`.
pub fn draw_figures(cfg: &RandomFiguresCfg, seed: u64, count: usize) -> Vec<Figure> {
    (0..count as u64)
        .map(|index| draw_figure(cfg, ReplayToken { seed, index }))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replay_is_deterministic() {
        let cfg = RandomFiguresCfg::default();
        let a = draw_figures(&cfg, 7, 12);
        let b = draw_figures(&cfg, 7, 12);
        assert_eq!(a, b);
        let tok = ReplayToken { seed: 7, index: 5 };
        assert_eq!(draw_figure(&cfg, tok), a[5]);
    }

    #[test]
    fn drawn_kinds_have_their_geometry() {
        let cfg = RandomFiguresCfg {
            kinds: vec![FigureKind::Square],
            coord_range: 5.0,
        };
        for f in draw_figures(&cfg, 1, 20) {
            let side = f.points()[0].distance(&f.points()[1]);
            assert!((f.area() - side * side).abs() < 1e-9);
            assert!((f.perimeter() - 4.0 * side).abs() < 1e-9);
        }
        let cfg = RandomFiguresCfg {
            kinds: vec![FigureKind::Rhombus],
            coord_range: 5.0,
        };
        for f in draw_figures(&cfg, 2, 20) {
            let d1 = f.points()[0].distance(&f.points()[2]);
            let d2 = f.points()[1].distance(&f.points()[3]);
            assert!((f.area() - d1 * d2 / 2.0).abs() < 1e-9);
        }
    }

    #[test]
    fn points_stay_in_range() {
        let cfg = RandomFiguresCfg {
            kinds: vec![FigureKind::Line, FigureKind::Triangle, FigureKind::Quadrilateral],
            coord_range: 2.0,
        };
        for f in draw_figures(&cfg, 3, 50) {
            assert!(f.points().iter().all(|p| p.x.abs() <= 2.0 && p.y.abs() <= 2.0));
        }
    }
}
