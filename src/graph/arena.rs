use crate::error::{Error, Result};
use crate::graph::Vertex;
use crate::transport::TransferMatrix;

use log::trace;
use petgraph::graph::{DiGraph, NodeIndex};

/// Vertices carry their in-place [`TransferMatrix`], arcs carry the
/// matrix priced on traversal. Vertex ids are the node indices.
pub type GraphStructure = DiGraph<TransferMatrix, TransferMatrix, u32>;

/// Checks `vertex` against a graph of `vertex_count` vertices.
pub(crate) fn check_vertex(vertex: usize, vertex_count: usize) -> Result<()> {
    if vertex < vertex_count {
        Ok(())
    } else {
        Err(Error::OutOfRange {
            vertex,
            vertex_count,
        })
    }
}

/// Storage shared by the graph variants: an arena of vertices addressed
/// by dense integer id, arcs holding plain indices.
#[derive(Debug, Clone, Default)]
pub(crate) struct Arena {
    graph: GraphStructure,
}

impl Arena {
    pub fn new(vertex_count: usize) -> Self {
        let mut graph = GraphStructure::with_capacity(vertex_count, vertex_count);
        for _ in 0..vertex_count {
            graph.add_node(TransferMatrix::diagonal(0));
        }

        Arena { graph }
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    #[inline]
    pub fn arc_count(&self) -> usize {
        self.graph.edge_count()
    }

    fn node(&self, vertex: usize) -> Result<NodeIndex> {
        check_vertex(vertex, self.vertex_count())?;
        Ok(NodeIndex::new(vertex))
    }

    pub fn vertex(&self, id: usize) -> Result<Vertex<'_>> {
        self.node(id)?;
        Ok(Vertex::new(id, &self.graph))
    }

    /// Appends a single directed arc. Both endpoints are validated before
    /// anything is inserted.
    pub fn insert_arc(&mut self, source: usize, target: usize, costs: TransferMatrix) -> Result<()> {
        let (from, to) = (self.node(source)?, self.node(target)?);
        trace!("Inserting arc {source} -> {target}");

        self.graph.add_edge(from, to, costs);
        Ok(())
    }

    pub fn set_transfers(&mut self, vertex: usize, transfers: TransferMatrix) -> Result<()> {
        let node = self.node(vertex)?;
        self.graph[node] = transfers;
        Ok(())
    }
}
