pub mod bellman_ford;
pub mod cost;
pub mod definition;
pub mod dijkstra;
pub mod successors;
pub mod tree;


#[doc(inline)]
pub use bellman_ford::BellmanFord;
#[doc(inline)]
pub use cost::{AccumulatedCost, INF};
#[doc(inline)]
pub use definition::{PathStep, ShortestPaths};
#[doc(inline)]
pub use dijkstra::Dijkstra;
#[doc(inline)]
pub use tree::SearchTree;
