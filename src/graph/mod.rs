#[doc(hidden)]
pub mod arena;
#[doc(hidden)]
pub mod directed;
#[doc(hidden)]
pub mod item;
#[doc(hidden)]
pub mod network;
#[doc(hidden)]
pub mod undirected;

#[cfg(test)]
mod test;

pub(crate) use arena::check_vertex;
#[doc(inline)]
pub use arena::GraphStructure;
#[doc(inline)]
pub use directed::DirectedGraph;
#[doc(inline)]
pub use item::{Arc, Edge, Vertex};
#[doc(inline)]
pub use network::Network;
#[doc(inline)]
pub use undirected::UndirectedGraph;
