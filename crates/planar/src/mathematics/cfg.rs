//! Registry configuration.
//!
//! Policy
//! - `worker_threads == 0` runs representation work on rayon's global pool.
//!   Any other value builds a dedicated pool owned by the registry.

/// Worker pool settings for `Mathematics`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MathematicsCfg {
    pub worker_threads: usize,
    /// Thread name prefix for a dedicated pool; threads are `{prefix}-{i}`.
    pub thread_name: &'static str,
}

impl Default for MathematicsCfg {
    fn default() -> Self {
        Self {
            worker_threads: 0,
            thread_name: "planar-worker",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_shared_pool() {
        let cfg = MathematicsCfg::default();
        assert_eq!(cfg.worker_threads, 0);
        assert_eq!(cfg.thread_name, "planar-worker");
    }
}
