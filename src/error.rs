use crate::state::State;
use crate::transport::Cost;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("vertex {vertex} is out of range for a graph of {vertex_count} vertices")]
    OutOfRange { vertex: usize, vertex_count: usize },

    #[error("transition {from} -> {to} costs {cost}, dijkstra requires non-negative costs")]
    NegativeWeight { from: State, to: State, cost: Cost },

    #[error("negative cycle reachable from vertex {origin}")]
    NegativeCycle { origin: usize },

    #[error("arc from vertex {from} targets vertex {target}, which is not in the graph")]
    DanglingArc { from: usize, target: usize },
}
