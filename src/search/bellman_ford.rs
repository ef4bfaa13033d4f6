use crate::error::{Error, Result};
use crate::graph::Network;
use crate::search::successors::successors;
use crate::search::{SearchTree, ShortestPaths};
use crate::state::State;

use log::{debug, warn};
use std::time::Instant;
#[cfg(feature = "tracing")]
use tracing::Level;

/// Relaxation by iteration over `(vertex, mode)` states.
///
/// Sweeps every reached state up to `state_count - 1` times, relaxing the
/// same transitions as [`Dijkstra`](crate::Dijkstra), and stops early once
/// a sweep changes nothing. Negative arcs and transfers are accepted.
///
/// If the bounded sweeps never settle, one further sweep checks for a
/// negative cycle reachable from the source; finding one fails with
/// [`Error::NegativeCycle`]. Negative cycles the source cannot reach are
/// never visited and do not affect the result.
#[derive(Debug, Clone)]
pub struct BellmanFord {
    tree: SearchTree,
}

impl BellmanFord {
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, level = Level::INFO))]
    pub fn new<N>(network: &N, source: usize) -> Result<Self>
    where
        N: Network,
    {
        let start_time = Instant::now();
        let mut tree = SearchTree::new(network.vertex_count(), source)?;
        debug!(
            "Bellman-Ford from {} over {} states",
            tree.origin(),
            tree.state_count()
        );

        let max_passes = tree.state_count().saturating_sub(1);
        let mut passes = 0;
        let mut converged = false;

        while passes < max_passes {
            passes += 1;
            if !BellmanFord::sweep(network, &mut tree)? {
                converged = true;
                break;
            }
        }

        if !converged && BellmanFord::sweep(network, &mut tree)? {
            warn!("Negative cycle reachable from vertex {source} after {passes} passes");
            return Err(Error::NegativeCycle { origin: source });
        }

        debug!(
            "Bellman-Ford settled after {passes} passes in {:?}",
            start_time.elapsed()
        );

        Ok(BellmanFord { tree })
    }

    /// One pass over every reached state. Returns whether any state improved.
    fn sweep<N>(network: &N, tree: &mut SearchTree) -> Result<bool>
    where
        N: Network,
    {
        let mut updated = false;

        for state in State::all(tree.vertex_count()) {
            if !tree.cost(state).is_reached() {
                continue;
            }

            for (next, step) in successors(network, state)? {
                updated |= tree.relax(state, next, step);
            }
        }

        Ok(updated)
    }
}

impl ShortestPaths for BellmanFord {
    fn tree(&self) -> &SearchTree {
        &self.tree
    }
}
