use crate::error::Result;
use crate::search::SearchTree;
use crate::transport::{Cost, TransportMode};

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// One state along a reconstructed path.
///
/// `is_transfer` is set when the step arrives in a different mode than the
/// previous step, whether the switch happened in place at a vertex or while
/// traversing an arc. The first step never is a transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PathStep {
    pub vertex: usize,
    pub mode: TransportMode,
    pub is_transfer: bool,
}

impl Display for PathStep {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.is_transfer {
            write!(f, "{} [{}*]", self.vertex, self.mode)
        } else {
            write!(f, "{} [{}]", self.vertex, self.mode)
        }
    }
}

/// Queries answered by a completed single-source search.
///
/// Implementors run the entire search on construction and keep only the
/// resulting [`SearchTree`]; every query is a read of that tree. Targets
/// outside the graph fail with [`Error::OutOfRange`](crate::Error::OutOfRange).
pub trait ShortestPaths {
    fn tree(&self) -> &SearchTree;

    fn source(&self) -> usize {
        self.tree().source()
    }

    /// The cheapest cost to `target` over all arrival modes, or
    /// [`INF`](crate::INF) if it was never reached.
    fn distance(&self, target: usize) -> Result<Cost> {
        self.tree().distance(target)
    }

    /// The vertices along the cheapest path to `target`. In-place mode
    /// transfers collapse into a single entry.
    fn shortest_path(&self, target: usize) -> Result<Option<Vec<usize>>> {
        self.tree().shortest_path(target)
    }

    /// The full state trace of the cheapest path to `target`, including
    /// in-place transfers.
    fn shortest_path_with_transfers(&self, target: usize) -> Result<Option<Vec<PathStep>>> {
        self.tree().shortest_path_with_transfers(target)
    }
}
