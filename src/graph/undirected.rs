use crate::error::Result;
use crate::graph::arena::Arena;
use crate::graph::{Edge, Network, Vertex};
use crate::transport::TransferMatrix;

use std::fmt::{Debug, Formatter};

/// A network where every edge is traversable both ways. Each edge is
/// stored as two arcs sharing the same costs.
#[derive(Clone, Default)]
pub struct UndirectedGraph {
    arena: Arena,
    edges: usize,
}

impl Debug for UndirectedGraph {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "UndirectedGraph with Vertices: {}, Edges: {}",
            self.vertex_count(),
            self.edges
        )
    }
}

impl UndirectedGraph {
    pub fn new(vertex_count: usize) -> Self {
        UndirectedGraph {
            arena: Arena::new(vertex_count),
            edges: 0,
        }
    }
}

impl Network for UndirectedGraph {
    fn with_vertices(vertex_count: usize) -> Self {
        UndirectedGraph::new(vertex_count)
    }

    fn vertex_count(&self) -> usize {
        self.arena.vertex_count()
    }

    fn edge_count(&self) -> usize {
        self.edges
    }

    fn vertex(&self, id: usize) -> Result<Vertex<'_>> {
        self.arena.vertex(id)
    }

    fn add_edge(&mut self, edge: Edge) -> Result<()> {
        // The first insertion validates both ends, so the second cannot fail.
        self.arena.insert_arc(edge.source, edge.target, edge.costs)?;
        self.arena.insert_arc(edge.target, edge.source, edge.costs)?;
        self.edges += 1;

        Ok(())
    }

    fn set_transfers(&mut self, vertex: usize, transfers: TransferMatrix) -> Result<()> {
        self.arena.set_transfers(vertex, transfers)
    }
}
