use crate::graph::GraphStructure;
use crate::transport::{Cost, TransferMatrix};

use petgraph::graph::{EdgeReference, NodeIndex};
use petgraph::visit::EdgeRef;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt::{Debug, Formatter};

/// An edge as supplied when building a graph.
///
/// Scalar weights convert into a [diagonal](TransferMatrix::diagonal)
/// matrix, so `(0, 1, 5)` means "from 0 to 1 for 5, staying in mode".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub source: usize,
    pub target: usize,
    pub costs: TransferMatrix,
}

impl Edge {
    pub fn new(source: usize, target: usize, costs: impl Into<TransferMatrix>) -> Self {
        Edge {
            source,
            target,
            costs: costs.into(),
        }
    }
}

impl From<(usize, usize, Cost)> for Edge {
    fn from((source, target, weight): (usize, usize, Cost)) -> Self {
        Edge::new(source, target, weight)
    }
}

/// A directed relation out of a vertex, referring to its target by index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arc<'a> {
    target: usize,
    costs: &'a TransferMatrix,
}

impl<'a> Arc<'a> {
    #[inline]
    pub fn target(&self) -> usize {
        self.target
    }

    #[inline]
    pub fn costs(&self) -> &'a TransferMatrix {
        self.costs
    }
}

/// A borrowed view of one vertex: its in-place transfer costs and its
/// outgoing arcs.
#[derive(Clone, Copy)]
pub struct Vertex<'a> {
    id: usize,
    graph: &'a GraphStructure,
}

impl Debug for Vertex<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Vertex {}, Arcs: {}", self.id, self.arcs().count())
    }
}

impl<'a> Vertex<'a> {
    pub(crate) fn new(id: usize, graph: &'a GraphStructure) -> Self {
        Vertex { id, graph }
    }

    #[inline]
    fn node(&self) -> NodeIndex {
        NodeIndex::new(self.id)
    }

    #[inline]
    pub fn id(&self) -> usize {
        self.id
    }

    /// Cost of switching mode while staying at this vertex.
    #[inline]
    pub fn transfers(&self) -> &'a TransferMatrix {
        &self.graph[self.node()]
    }

    /// Outgoing arcs in insertion order.
    pub fn arcs(&self) -> impl Iterator<Item = Arc<'a>> + 'a {
        // petgraph links a node's edges newest-first.
        let edges = self
            .graph
            .edges(self.node())
            .collect::<SmallVec<[EdgeReference<'a, TransferMatrix>; 8]>>();

        edges.into_iter().rev().map(|edge| Arc {
            target: edge.target().index(),
            costs: edge.weight(),
        })
    }
}
