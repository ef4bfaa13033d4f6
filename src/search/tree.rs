use crate::error::Result;
use crate::graph::check_vertex;
use crate::search::{AccumulatedCost, PathStep, INF};
use crate::state::{state_count, State};
use crate::transport::{Cost, TransportMode, MODES};

use itertools::Itertools;
use log::{debug, trace};
use std::collections::VecDeque;

/// Per-state distance and predecessor tables produced by one search.
///
/// Both tables hold one entry per `(vertex, mode)` state and are sized
/// once, on construction. A search strategy mutates the tree only through
/// [`SearchTree::relax`] while it runs; afterwards the tree is read-only.
///
/// The search starts from `(source, Feet)`, the origin state. A state
/// with no predecessor holds `None`, which cannot be confused with any
/// encoded state.
#[derive(Debug, Clone)]
pub struct SearchTree {
    dist: Vec<AccumulatedCost>,
    prev: Vec<Option<State>>,
    origin: State,
    vertex_count: usize,
}

impl SearchTree {
    pub(crate) fn new(vertex_count: usize, source: usize) -> Result<Self> {
        check_vertex(source, vertex_count)?;

        let states = state_count(vertex_count);
        let origin = State::encode(source, TransportMode::Feet);

        let mut dist = vec![AccumulatedCost::UNREACHED; states];
        dist[origin.index()] = AccumulatedCost::ZERO;

        Ok(SearchTree {
            dist,
            prev: vec![None; states],
            origin,
            vertex_count,
        })
    }

    #[inline]
    pub fn source(&self) -> usize {
        self.origin.vertex()
    }

    #[inline]
    pub fn origin(&self) -> State {
        self.origin
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    #[inline]
    pub fn state_count(&self) -> usize {
        self.dist.len()
    }

    #[inline]
    pub fn cost(&self, state: State) -> AccumulatedCost {
        self.dist
            .get(state.index())
            .copied()
            .unwrap_or(AccumulatedCost::UNREACHED)
    }

    #[inline]
    pub fn predecessor(&self, state: State) -> Option<State> {
        self.prev.get(state.index()).copied().flatten()
    }

    /// Offers `to` the path through `from` with one more step of `step`.
    /// Returns whether `to` improved. Unrepresentable totals are skipped.
    pub(crate) fn relax(&mut self, from: State, to: State, step: Cost) -> bool {
        let Some(candidate) = self.cost(from).extend(step) else {
            return false;
        };

        match self.dist.get_mut(to.index()) {
            Some(current) if candidate < *current => {
                trace!("Relaxed {to} via {from}: {current} -> {candidate}");
                *current = candidate;
                self.prev[to.index()] = Some(from);
                true
            }
            _ => false,
        }
    }

    /// The cheapest reached state at `target`. Ties prefer arriving on
    /// [`TransportMode::Feet`], then the lowest mode index.
    pub fn best_state(&self, target: usize) -> Result<Option<State>> {
        check_vertex(target, self.vertex_count)?;

        Ok(MODES
            .into_iter()
            .map(|mode| State::encode(target, mode))
            .filter(|state| self.cost(*state).is_reached())
            .min_by_key(|state| (self.cost(*state), state.mode() != TransportMode::Feet)))
    }

    pub fn reached(&self, target: usize) -> Result<bool> {
        Ok(self.best_state(target)?.is_some())
    }

    pub fn distance(&self, target: usize) -> Result<Cost> {
        Ok(self
            .best_state(target)?
            .map_or(INF, |state| self.cost(state).value()))
    }

    /// The distance of a single `(vertex, mode)` state.
    pub fn state_distance(&self, state: State) -> Cost {
        self.cost(state).value()
    }

    pub fn shortest_path(&self, target: usize) -> Result<Option<Vec<usize>>> {
        Ok(self.shortest_path_with_transfers(target)?.map(|steps| {
            steps
                .into_iter()
                .map(|step| step.vertex)
                .dedup()
                .collect()
        }))
    }

    pub fn shortest_path_with_transfers(&self, target: usize) -> Result<Option<Vec<PathStep>>> {
        let Some(best) = self.best_state(target)? else {
            return Ok(None);
        };

        Ok(self.walk_back(best).map(|chain| {
            let mut previous: Option<TransportMode> = None;
            chain
                .into_iter()
                .map(|state| {
                    let (vertex, mode) = state.decode();
                    let is_transfer = previous.is_some_and(|last| last != mode);
                    previous = Some(mode);

                    PathStep {
                        vertex,
                        mode,
                        is_transfer,
                    }
                })
                .collect()
        }))
    }

    /// Follows predecessors from `state` back to the origin. A chain that
    /// ends elsewhere, or runs longer than the state space, yields `None`
    /// rather than a partial path.
    fn walk_back(&self, state: State) -> Option<VecDeque<State>> {
        let mut chain = VecDeque::from([state]);
        let mut cursor = state;

        while cursor != self.origin {
            if chain.len() > self.state_count() {
                debug!("Predecessor chain from {state} loops, discarding path");
                return None;
            }

            let Some(previous) = self.predecessor(cursor) else {
                debug!("Predecessor chain from {state} breaks at {cursor}, discarding path");
                return None;
            };

            chain.push_front(previous);
            cursor = previous;
        }

        Some(chain)
    }

    /// Overwrites a predecessor entry directly.
    #[cfg(test)]
    pub(crate) fn set_predecessor(&mut self, state: State, previous: Option<State>) {
        self.prev[state.index()] = previous;
    }

    /// Overwrites a distance entry directly.
    #[cfg(test)]
    pub(crate) fn set_cost(&mut self, state: State, cost: AccumulatedCost) {
        self.dist[state.index()] = cost;
    }
}
