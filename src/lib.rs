#![doc = include_str!("../README.md")]

#[doc(hidden)]
pub mod error;
pub mod graph;
pub mod search;
pub mod state;
pub mod transport;

#[doc(inline)]
pub use error::{Error, Result};
#[doc(inline)]
pub use graph::{Arc, DirectedGraph, Edge, Network, UndirectedGraph, Vertex};
#[doc(inline)]
pub use search::{AccumulatedCost, BellmanFord, Dijkstra, PathStep, SearchTree, ShortestPaths, INF};
#[doc(inline)]
pub use state::{state_count, State};
#[doc(inline)]
pub use transport::{Cost, TransferMatrix, TransportMode, MODE_COUNT, NO_TRANSFER};
