use crate::error::Result;
use crate::graph::{Edge, Vertex};
use crate::transport::TransferMatrix;

use log::debug;

/// Capability interface consumed by the search strategies.
///
/// A network owns its vertices; lookups hand out borrowed [`Vertex`] views
/// whose arcs refer to other vertices by index. Every id must be below
/// [`Network::vertex_count`], otherwise the call fails with
/// [`Error::OutOfRange`](crate::Error::OutOfRange).
pub trait Network {
    /// Creates a network of `vertex_count` isolated vertices.
    fn with_vertices(vertex_count: usize) -> Self
    where
        Self: Sized;

    fn vertex_count(&self) -> usize;

    /// Number of edges added, counting an undirected edge once.
    fn edge_count(&self) -> usize;

    fn vertex(&self, id: usize) -> Result<Vertex<'_>>;

    fn add_edge(&mut self, edge: Edge) -> Result<()>;

    /// Replaces the in-place transfer costs of `vertex`.
    fn set_transfers(&mut self, vertex: usize, transfers: TransferMatrix) -> Result<()>;

    fn connect(
        &mut self,
        source: usize,
        target: usize,
        costs: impl Into<TransferMatrix>,
    ) -> Result<()>
    where
        Self: Sized,
    {
        self.add_edge(Edge::new(source, target, costs))
    }

    /// Builds a network from an edge list, failing on the first edge with
    /// an endpoint outside `0..vertex_count`.
    fn from_edges<I>(vertex_count: usize, edges: I) -> Result<Self>
    where
        Self: Sized,
        I: IntoIterator,
        I::Item: Into<Edge>,
    {
        let mut network = Self::with_vertices(vertex_count);
        for edge in edges {
            network.add_edge(edge.into())?;
        }

        debug!(
            "Built network of {} vertices and {} edges",
            network.vertex_count(),
            network.edge_count()
        );

        Ok(network)
    }
}
