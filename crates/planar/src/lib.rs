//! Planar figures: primitives, figure kinds, and the aggregation registry.
//!
//! Layout
//! - `primitives`: `Point`, `Vector` value types backed by nalgebra.
//! - `figure`: closed set of figure kinds with shared metric formulas.
//! - `describe`: one-line textual description per figure.
//! - `mathematics`: registry, extremal queries, and off-thread representation
//!   statistics delivered on the owning context.
//! - `rand`: seeded figure sampler for benches and the CLI.
//!
//! API Policy
//! - This crate is project-internal. There is no stable public API.

pub mod describe;
pub mod figure;
pub mod mathematics;
pub mod primitives;
pub mod rand;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use describe::description;
pub use figure::{Figure, FigureError, FigureKind};
pub use mathematics::{
    total_area, MathError, Mathematics, MathematicsCfg, Representations, RepresentationObserver,
    RequestState, ResultHandler, Ticket,
};
pub use primitives::{distance, Point, Vector};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::describe::description;
    pub use crate::figure::{Figure, FigureError, FigureKind};
    pub use crate::mathematics::{
        total_area, MathError, Mathematics, MathematicsCfg, Representations,
        RepresentationObserver, RequestState, Ticket,
    };
    pub use crate::primitives::{distance, Point, Vector};
    pub use crate::rand::{draw_figure, draw_figures, RandomFiguresCfg, ReplayToken};
}
