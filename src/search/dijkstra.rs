use crate::error::{Error, Result};
use crate::graph::Network;
use crate::search::successors::successors;
use crate::search::{AccumulatedCost, SearchTree, ShortestPaths};
use crate::state::State;

use log::{debug, warn};
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::time::Instant;
#[cfg(feature = "tracing")]
use tracing::Level;

#[derive(Debug)]
struct SmallestHolder {
    cost: AccumulatedCost,
    state: State,
}

impl PartialEq for SmallestHolder {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost && self.state == other.state
    }
}

impl Eq for SmallestHolder {}

impl PartialOrd for SmallestHolder {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SmallestHolder {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.state.cmp(&self.state))
    }
}

/// Relaxation by selection over `(vertex, mode)` states.
///
/// Repeatedly finalizes the cheapest state not yet finalized and relaxes
/// its in-place transfers and arc traversals. Requires every reachable
/// transition to be non-negative: discovering a negative one while
/// relaxing out of a finalized state aborts with
/// [`Error::NegativeWeight`], since it could lower a distance already
/// proven minimal.
///
/// ```rust
/// use modal_routes::{DirectedGraph, Dijkstra, Network, ShortestPaths};
///
/// let graph = DirectedGraph::from_edges(3, [(0, 1, 2), (1, 2, 2), (0, 2, 5)])?;
/// let search = Dijkstra::new(&graph, 0)?;
///
/// assert_eq!(search.distance(2)?, 4);
/// assert_eq!(search.shortest_path(2)?, Some(vec![0, 1, 2]));
/// # Ok::<(), modal_routes::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Dijkstra {
    tree: SearchTree,
}

impl Dijkstra {
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, level = Level::INFO))]
    pub fn new<N>(network: &N, source: usize) -> Result<Self>
    where
        N: Network,
    {
        let start_time = Instant::now();
        let mut tree = SearchTree::new(network.vertex_count(), source)?;
        debug!(
            "Dijkstra from {} over {} states",
            tree.origin(),
            tree.state_count()
        );

        let mut finalized = vec![false; tree.state_count()];
        let mut to_see: BinaryHeap<SmallestHolder> =
            BinaryHeap::with_capacity(tree.state_count().min(256));
        to_see.push(SmallestHolder {
            cost: AccumulatedCost::ZERO,
            state: tree.origin(),
        });

        let mut settled = 0usize;
        while let Some(SmallestHolder { cost, state }) = to_see.pop() {
            // Stale entry, superseded by a cheaper push.
            if finalized[state.index()] || cost > tree.cost(state) {
                continue;
            }

            finalized[state.index()] = true;
            settled += 1;

            for (next, step) in successors(network, state)? {
                if step < 0 {
                    warn!("Negative transition {state} -> {next} costs {step}, aborting search");
                    return Err(Error::NegativeWeight {
                        from: state,
                        to: next,
                        cost: step,
                    });
                }

                if tree.relax(state, next, step) {
                    to_see.push(SmallestHolder {
                        cost: tree.cost(next),
                        state: next,
                    });
                }
            }
        }

        debug!(
            "Dijkstra settled {settled} of {} states in {:?}",
            tree.state_count(),
            start_time.elapsed()
        );

        Ok(Dijkstra { tree })
    }
}

impl ShortestPaths for Dijkstra {
    fn tree(&self) -> &SearchTree {
        &self.tree
    }
}
