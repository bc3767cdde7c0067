//! Figure registry and aggregation engine.
//!
//! Purpose
//! - Own an ordered list of figures with indexed get/set.
//! - Answer extremal queries by area and perimeter (first element wins ties).
//! - Compute description statistics off-thread and deliver them, in issue
//!   order, through a result handler and a weak observer on the context that
//!   owns the registry.
//!
//! Concurrency contract
//! - `find_figure_representations` snapshots the figure list at call time, so
//!   later `add`/`set` calls never race with in-flight work.
//! - Results surface only when the owner calls `deliver_ready` or `wait_all`.
//!   The registry is intentionally `!Send`: handlers and the observer slot
//!   live on the owning context.
//!
//! Code cross-refs: `stats::{select_first, total_area, Representations}`,
//! `delivery::Delivery`.

mod cfg;
mod delivery;
mod stats;

pub use cfg::MathematicsCfg;
pub use delivery::{RepresentationObserver, RequestState, ResultHandler, Ticket};
pub use stats::{total_area, Representations};

use std::rc::{Rc, Weak};

use crate::figure::Figure;
use delivery::Delivery;
use stats::select_first;

/// Registry errors.
#[derive(Debug, thiserror::Error)]
pub enum MathError {
    #[error("index {index} out of range for {len} figures")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("failed to build worker pool: {0}")]
    Pool(#[from] rayon::ThreadPoolBuildError),
}

pub struct Mathematics {
    figures: Vec<Figure>,
    delivery: Delivery,
}

impl Mathematics {
    /// Empty registry whose background work runs on rayon's global pool.
    pub fn new() -> Self {
        Self {
            figures: Vec::new(),
            delivery: Delivery::global(),
        }
    }

    /// Empty registry configured by `cfg`. Fails only if a dedicated pool
    /// cannot be built.
    pub fn with_cfg(cfg: MathematicsCfg) -> Result<Self, MathError> {
        Ok(Self {
            figures: Vec::new(),
            delivery: Delivery::new(cfg)?,
        })
    }

    pub fn add(&mut self, figure: Figure) {
        tracing::debug!(
            kind = %figure.kind(),
            index = self.figures.len(),
            "figure added"
        );
        self.figures.push(figure);
    }

    pub fn get(&self, index: usize) -> Result<&Figure, MathError> {
        self.figures.get(index).ok_or(MathError::IndexOutOfRange {
            index,
            len: self.figures.len(),
        })
    }

    /// Replace the figure at `index`, returning the previous one. The
    /// collection is untouched on error.
    pub fn set(&mut self, index: usize, figure: Figure) -> Result<Figure, MathError> {
        let len = self.figures.len();
        let slot = self
            .figures
            .get_mut(index)
            .ok_or(MathError::IndexOutOfRange { index, len })?;
        tracing::debug!(kind = %figure.kind(), index, "figure replaced");
        Ok(std::mem::replace(slot, figure))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.figures.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.figures.is_empty()
    }

    #[inline]
    pub fn figures(&self) -> &[Figure] {
        &self.figures
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Figure> {
        self.figures.iter()
    }

    pub fn max_area_figure(&self) -> Option<&Figure> {
        select_first(&self.figures, |c, b| c.area() > b.area())
    }

    pub fn min_area_figure(&self) -> Option<&Figure> {
        select_first(&self.figures, |c, b| c.area() < b.area())
    }

    pub fn max_perimeter_figure(&self) -> Option<&Figure> {
        select_first(&self.figures, |c, b| c.perimeter() > b.perimeter())
    }

    pub fn min_perimeter_figure(&self) -> Option<&Figure> {
        select_first(&self.figures, |c, b| c.perimeter() < b.perimeter())
    }

    /// `total_area` over the registry's own figures.
    pub fn total_area_all(&self) -> f64 {
        total_area(&self.figures)
    }

    /// Handler used when `find_figure_representations` is called without one.
    pub fn set_default_handler(&mut self, handler: ResultHandler) {
        self.delivery.default_handler = Some(handler);
    }

    pub fn clear_default_handler(&mut self) {
        self.delivery.default_handler = None;
    }

    /// Register `observer` without taking ownership. If it is dropped before a
    /// delivery, that notification is skipped.
    pub fn set_observer<O: RepresentationObserver + 'static>(&mut self, observer: &Rc<O>) {
        let weak: Weak<O> = Rc::downgrade(observer);
        self.delivery.observer = Some(weak);
    }

    pub fn clear_observer(&mut self) {
        self.delivery.observer = None;
    }

    /// Start computing the longest/shortest/largest/smallest description of
    /// the current figures on the worker pool.
    ///
    /// `handler` takes precedence over the default handler for this call. The
    /// result is delivered by a later `deliver_ready` or `wait_all`.
    pub fn find_figure_representations(&mut self, handler: Option<ResultHandler>) -> Ticket {
        self.delivery.submit(self.figures.clone(), handler)
    }

    pub fn status(&self, ticket: Ticket) -> RequestState {
        self.delivery.status(ticket)
    }

    /// Tickets issued but not yet delivered.
    pub fn pending(&self) -> usize {
        self.delivery.pending()
    }

    /// Deliver finished results without blocking; returns the number
    /// delivered.
    pub fn deliver_ready(&mut self) -> usize {
        self.delivery.deliver_ready()
    }

    /// Block until every issued ticket is delivered; returns the number
    /// delivered.
    pub fn wait_all(&mut self) -> usize {
        self.delivery.wait_all()
    }
}

impl Default for Mathematics {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a Mathematics {
    type Item = &'a Figure;
    type IntoIter = std::slice::Iter<'a, Figure>;

    fn into_iter(self) -> Self::IntoIter {
        self.figures.iter()
    }
}
