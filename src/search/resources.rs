//! Node budgets for the game-tree search.
//!
//! The tree grows exponentially with board area. Callers that cannot afford an
//! unbounded search pass a [`ResourceTracker`]; everything else uses
//! [`Unlimited`], whose error type is uninhabited so the unbounded entry points
//! stay infallible.
//!
//! Budgets are checked once per visited state, on entry to the node and before
//! its moves are generated.

use std::convert::Infallible;

use crate::scenario::{ResourceCounts, ResourceLimits, SearchError};

/// Something the search consults on every visited state.
pub trait NodeBudget {
    type Error;

    fn visit_state(&mut self, stage: &'static str) -> Result<(), Self::Error>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Unlimited;

impl NodeBudget for Unlimited {
    type Error = Infallible;

    #[inline]
    fn visit_state(&mut self, _stage: &'static str) -> Result<(), Infallible> {
        Ok(())
    }
}

#[derive(Debug, Clone)]
/// Tracks budgets/counters during a search.
pub struct ResourceTracker {
    limits: ResourceLimits,
    counts: ResourceCounts,
}

impl ResourceTracker {
    #[inline]
    pub fn new(limits: ResourceLimits) -> Self {
        Self {
            limits,
            counts: ResourceCounts::default(),
        }
    }

    #[inline]
    pub fn counts(&self) -> ResourceCounts {
        self.counts
    }

    #[inline]
    pub fn bump_states(&mut self, stage: &'static str, delta: u64) -> Result<(), SearchError> {
        let limit = self.limits.max_states;
        self.bump(stage, "states", delta, limit, |c| &mut c.states)
    }

    fn bump(
        &mut self,
        stage: &'static str,
        metric: &'static str,
        delta: u64,
        limit: u64,
        field: impl FnOnce(&mut ResourceCounts) -> &mut u64,
    ) -> Result<(), SearchError> {
        let observed = {
            let v = field(&mut self.counts);
            *v = v.saturating_add(delta);
            *v
        };

        if observed > limit {
            return Err(SearchError::LimitExceeded {
                stage,
                metric,
                limit,
                observed,
                counts: self.counts,
            });
        }

        Ok(())
    }
}

impl NodeBudget for ResourceTracker {
    type Error = SearchError;

    #[inline]
    fn visit_state(&mut self, stage: &'static str) -> Result<(), SearchError> {
        self.bump_states(stage, 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracker_fails_once_limit_is_crossed() {
        let mut t = ResourceTracker::new(ResourceLimits { max_states: 2 });
        assert!(t.visit_state("test").is_ok());
        assert!(t.visit_state("test").is_ok());
        let err = t.visit_state("test").unwrap_err();
        match err {
            SearchError::LimitExceeded {
                metric,
                limit,
                observed,
                ..
            } => {
                assert_eq!(metric, "states");
                assert_eq!(limit, 2);
                assert_eq!(observed, 3);
            }
        }
        assert_eq!(t.counts().states, 3);
    }
}
