//! Background representation work and in-order delivery on the owning context.
//!
//! Model
//! - `submit` snapshots the figures, issues a `Ticket`, and spawns the
//!   description + reduction work on the worker pool. The worker sends
//!   `(Ticket, Representations)` back over a single-consumer channel.
//! - Nothing user-visible happens on a worker. Handlers and the observer run
//!   only inside `deliver_ready` / `wait_all`, on whichever context owns the
//!   registry.
//! - Tickets are delivered strictly in issue order: a result that arrives
//!   early is parked until every earlier ticket has been delivered.
//!
//! A worker whose send fails (registry already dropped) discards its result.

use std::collections::BTreeMap;
use std::rc::Weak;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

use super::cfg::MathematicsCfg;
use super::stats::Representations;
use super::MathError;
use crate::figure::Figure;

/// Result sink invoked on the delivery context.
pub type ResultHandler = Box<dyn FnMut(&Representations)>;

/// Listener notified with the longest description of each delivered ticket.
pub trait RepresentationObserver {
    fn on_representation_found(&self, longest: &str);
}

/// Handle for one `find_figure_representations` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(pub(crate) u64);

impl Ticket {
    #[inline]
    pub fn id(self) -> u64 {
        self.0
    }
}

/// Per-ticket lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RequestState {
    /// Not issued by this registry (yet).
    Idle,
    Computing,
    Delivered,
}

enum Executor {
    Global,
    Dedicated(rayon::ThreadPool),
}

impl Executor {
    fn spawn<F: FnOnce() + Send + 'static>(&self, job: F) {
        match self {
            Executor::Global => rayon::spawn(job),
            Executor::Dedicated(pool) => pool.spawn(job),
        }
    }
}

pub(crate) struct Delivery {
    executor: Executor,
    tx: Sender<(Ticket, Representations)>,
    rx: Receiver<(Ticket, Representations)>,
    next_ticket: u64,
    next_delivery: u64,
    handlers: BTreeMap<Ticket, Option<ResultHandler>>,
    ready: BTreeMap<Ticket, Representations>,
    pub(crate) default_handler: Option<ResultHandler>,
    pub(crate) observer: Option<Weak<dyn RepresentationObserver>>,
}

impl Delivery {
    pub(crate) fn global() -> Self {
        Self::with_executor(Executor::Global)
    }

    pub(crate) fn new(cfg: MathematicsCfg) -> Result<Self, MathError> {
        if cfg.worker_threads == 0 {
            return Ok(Self::global());
        }
        let prefix = cfg.thread_name;
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(cfg.worker_threads)
            .thread_name(move |i| format!("{prefix}-{i}"))
            .build()?;
        Ok(Self::with_executor(Executor::Dedicated(pool)))
    }

    fn with_executor(executor: Executor) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            executor,
            tx,
            rx,
            next_ticket: 0,
            next_delivery: 0,
            handlers: BTreeMap::new(),
            ready: BTreeMap::new(),
            default_handler: None,
            observer: None,
        }
    }

    pub(crate) fn submit(
        &mut self,
        snapshot: Vec<Figure>,
        handler: Option<ResultHandler>,
    ) -> Ticket {
        let ticket = Ticket(self.next_ticket);
        self.next_ticket += 1;
        self.handlers.insert(ticket, handler);
        let tx = self.tx.clone();
        tracing::debug!(
            ticket = ticket.0,
            figures = snapshot.len(),
            "representations submitted"
        );
        self.executor.spawn(move || {
            let reps = Representations::of_figures(&snapshot);
            let _ = tx.send((ticket, reps));
        });
        ticket
    }

    pub(crate) fn status(&self, ticket: Ticket) -> RequestState {
        if ticket.0 < self.next_delivery {
            RequestState::Delivered
        } else if ticket.0 < self.next_ticket {
            RequestState::Computing
        } else {
            RequestState::Idle
        }
    }

    #[inline]
    pub(crate) fn pending(&self) -> usize {
        (self.next_ticket - self.next_delivery) as usize
    }

    /// Deliver every result that is ready without blocking. Returns how many
    /// tickets were delivered.
    pub(crate) fn deliver_ready(&mut self) -> usize {
        loop {
            match self.rx.try_recv() {
                Ok((ticket, reps)) => {
                    self.ready.insert(ticket, reps);
                }
                // `self.tx` keeps the channel open, so Disconnected cannot occur.
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        self.flush_in_order()
    }

    /// Block until every issued ticket has been delivered.
    pub(crate) fn wait_all(&mut self) -> usize {
        let mut delivered = self.deliver_ready();
        while self.pending() > 0 {
            match self.rx.recv() {
                Ok((ticket, reps)) => {
                    self.ready.insert(ticket, reps);
                }
                Err(_) => break,
            }
            delivered += self.flush_in_order();
        }
        delivered
    }

    fn flush_in_order(&mut self) -> usize {
        let mut delivered = 0;
        while let Some(reps) = self.ready.remove(&Ticket(self.next_delivery)) {
            let ticket = Ticket(self.next_delivery);
            let handler = self.handlers.remove(&ticket).flatten();
            self.dispatch(ticket, handler, &reps);
            self.next_delivery += 1;
            delivered += 1;
        }
        delivered
    }

    fn dispatch(
        &mut self,
        ticket: Ticket,
        handler: Option<ResultHandler>,
        reps: &Representations,
    ) {
        tracing::debug!(ticket = ticket.0, longest = %reps.longest, "representations delivered");
        match handler {
            Some(mut h) => h(reps),
            None => {
                if let Some(h) = self.default_handler.as_mut() {
                    h(reps);
                }
            }
        }
        match self.observer.as_ref().and_then(Weak::upgrade) {
            Some(obs) => obs.on_representation_found(&reps.longest),
            None if self.observer.is_some() => {
                tracing::trace!(ticket = ticket.0, "observer gone; notification skipped");
            }
            None => {}
        }
    }
}
