//! Dense matrix view of an [`AdjacencyList`](super::AdjacencyList).

use super::NodeId;

/// `V x V` weight matrix with `f64::INFINITY` for missing edges.
///
/// Rows and columns follow ascending node id; `ids[i]` is the node behind row/column `i`. The
/// diagonal is only finite for self-loops.
#[derive(Debug, Clone, PartialEq)]
pub struct AdjacencyMatrix {
    ids: Vec<NodeId>,
    weights: Vec<Vec<f64>>,
}

impl AdjacencyMatrix {
    pub(super) fn new(ids: Vec<NodeId>, weights: Vec<Vec<f64>>) -> Self {
        Self { ids, weights }
    }

    pub fn ids(&self) -> &[NodeId] {
        &self.ids
    }

    pub fn index_of(&self, id: NodeId) -> Option<usize> {
        self.ids.binary_search(&id).ok()
    }

    pub fn weights(&self) -> &[Vec<f64>] {
        &self.weights
    }

    pub fn get(&self, from: NodeId, to: NodeId) -> Option<f64> {
        let row = self.index_of(from)?;
        let col = self.index_of(to)?;
        Some(self.weights[row][col])
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
