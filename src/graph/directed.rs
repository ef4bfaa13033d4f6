use crate::error::Result;
use crate::graph::arena::Arena;
use crate::graph::{Edge, Network, Vertex};
use crate::transport::TransferMatrix;

use std::fmt::{Debug, Formatter};

/// A network where every edge is a single arc from `source` to `target`.
#[derive(Clone, Default)]
pub struct DirectedGraph {
    arena: Arena,
}

impl Debug for DirectedGraph {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "DirectedGraph with Vertices: {}, Edges: {}",
            self.vertex_count(),
            self.edge_count()
        )
    }
}

impl DirectedGraph {
    pub fn new(vertex_count: usize) -> Self {
        DirectedGraph {
            arena: Arena::new(vertex_count),
        }
    }
}

impl Network for DirectedGraph {
    fn with_vertices(vertex_count: usize) -> Self {
        DirectedGraph::new(vertex_count)
    }

    fn vertex_count(&self) -> usize {
        self.arena.vertex_count()
    }

    fn edge_count(&self) -> usize {
        self.arena.arc_count()
    }

    fn vertex(&self, id: usize) -> Result<Vertex<'_>> {
        self.arena.vertex(id)
    }

    fn add_edge(&mut self, edge: Edge) -> Result<()> {
        self.arena.insert_arc(edge.source, edge.target, edge.costs)
    }

    fn set_transfers(&mut self, vertex: usize, transfers: TransferMatrix) -> Result<()> {
        self.arena.set_transfers(vertex, transfers)
    }
}
