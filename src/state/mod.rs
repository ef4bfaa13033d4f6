//! Encoding of the `(vertex, mode)` search state into a single index.
//!
//! A state is stored as `vertex * MODE_COUNT + mode.index()`, so the states
//! of a graph with `n` vertices occupy exactly `0..n * MODE_COUNT` and can
//! address flat distance and predecessor tables.

use crate::transport::{TransportMode, MODES, MODE_COUNT};
use std::fmt::{Display, Formatter};

#[cfg(test)]
mod test;

/// Number of search states for a graph of `vertex_count` vertices.
#[inline]
pub const fn state_count(vertex_count: usize) -> usize {
    vertex_count * MODE_COUNT
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct State(usize);

impl State {
    #[inline]
    pub const fn encode(vertex: usize, mode: TransportMode) -> Self {
        State(vertex * MODE_COUNT + mode.index())
    }

    #[inline]
    pub const fn vertex(self) -> usize {
        self.0 / MODE_COUNT
    }

    #[inline]
    pub const fn mode(self) -> TransportMode {
        MODES[self.0 % MODE_COUNT]
    }

    #[inline]
    pub const fn decode(self) -> (usize, TransportMode) {
        (self.vertex(), self.mode())
    }

    /// Position of the state within a per-state table.
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }

    /// Inverse of [`State::index`], rejecting indices outside the state
    /// space of a graph with `vertex_count` vertices.
    pub const fn from_index(index: usize, vertex_count: usize) -> Option<Self> {
        if index < state_count(vertex_count) {
            Some(State(index))
        } else {
            None
        }
    }

    /// Every state of a graph with `vertex_count` vertices, in index order.
    pub fn all(vertex_count: usize) -> impl Iterator<Item = State> {
        (0..state_count(vertex_count)).map(State)
    }
}

impl Display for State {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.vertex(), self.mode())
    }
}
