//! Weighted adjacency-list graph keyed by integer node ids.
//!
//! Nodes are allocated from a monotonic counter, so ids stay stable across deletions. Every node
//! owns an ordered neighbor map (`neighbor -> weight`); undirected graphs store each edge in
//! both endpoints' maps.

mod matrix;
mod options;

pub use matrix::AdjacencyMatrix;
pub use options::GraphOptions;

use crate::error::{Error, Result};
use std::collections::BTreeMap;

pub type NodeId = usize;

#[derive(Debug, Clone, Default)]
struct NodeEntry {
    edges: BTreeMap<NodeId, f64>,
}

/// Directed or undirected weighted graph.
///
/// Iteration is deterministic: nodes ascend by id and so do each node's neighbors.
#[derive(Debug, Clone)]
pub struct AdjacencyList {
    options: GraphOptions,
    nodes: BTreeMap<NodeId, NodeEntry>,
    next_id: NodeId,
}

impl Default for AdjacencyList {
    fn default() -> Self {
        Self::new(GraphOptions::default())
    }
}

impl AdjacencyList {
    pub fn new(options: GraphOptions) -> Self {
        let nodes = (0..options.node_count)
            .map(|id| (id, NodeEntry::default()))
            .collect();
        Self {
            options,
            nodes,
            next_id: options.node_count,
        }
    }

    pub fn directed() -> Self {
        Self::new(GraphOptions::default())
    }

    pub fn undirected() -> Self {
        Self::new(GraphOptions {
            directed: false,
            ..Default::default()
        })
    }

    pub fn options(&self) -> GraphOptions {
        self.options
    }

    pub fn is_directed(&self) -> bool {
        self.options.directed
    }

    fn entry(&self, id: NodeId) -> Result<&NodeEntry> {
        self.nodes.get(&id).ok_or(Error::NodeNotFound { id })
    }

    fn ensure_endpoints(&self, from: NodeId, to: NodeId) -> Result<()> {
        self.entry(from)?;
        self.entry(to)?;
        Ok(())
    }

    pub fn add_node(&mut self) -> NodeId {
        let id = self.next_id;
        self.next_id += 1;
        self.nodes.insert(id, NodeEntry::default());
        id
    }

    pub fn has_node(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Removes `id` together with every edge that references it.
    ///
    /// Incoming edges of a directed graph are found by scanning every remaining node, so this is
    /// O(V) map lookups.
    pub fn delete_node(&mut self, id: NodeId) -> Result<()> {
        if self.nodes.remove(&id).is_none() {
            return Err(Error::NodeNotFound { id });
        }
        let mut dropped = 0usize;
        for node in self.nodes.values_mut() {
            if node.edges.remove(&id).is_some() {
                dropped += 1;
            }
        }
        tracing::trace!(node = id, incoming = dropped, "deleted node");
        Ok(())
    }

    pub fn add_edge(&mut self, from: NodeId, to: NodeId) -> Result<&mut Self> {
        self.add_edge_with_weight(from, to, 1.0)
    }

    /// Sets the weight of `from -> to`, overwriting any previous weight. Undirected graphs also
    /// set `to -> from`.
    pub fn add_edge_with_weight(
        &mut self,
        from: NodeId,
        to: NodeId,
        weight: f64,
    ) -> Result<&mut Self> {
        self.ensure_endpoints(from, to)?;
        if let Some(node) = self.nodes.get_mut(&from) {
            node.edges.insert(to, weight);
        }
        if !self.options.directed {
            if let Some(node) = self.nodes.get_mut(&to) {
                node.edges.insert(from, weight);
            }
        }
        Ok(self)
    }

    /// Adds a unit-weight edge between each consecutive pair in `nodes`.
    pub fn add_path(&mut self, nodes: &[NodeId]) -> Result<&mut Self> {
        for pair in nodes.windows(2) {
            self.add_edge(pair[0], pair[1])?;
        }
        Ok(self)
    }

    /// Removes `from -> to` (and the mirrored entry for undirected graphs), returning its weight.
    pub fn delete_edge(&mut self, from: NodeId, to: NodeId) -> Result<f64> {
        self.ensure_endpoints(from, to)?;
        let weight = self
            .nodes
            .get_mut(&from)
            .and_then(|node| node.edges.remove(&to))
            .ok_or(Error::EdgeNotFound { from, to })?;
        if !self.options.directed {
            if let Some(node) = self.nodes.get_mut(&to) {
                node.edges.remove(&from);
            }
        }
        Ok(weight)
    }

    pub fn has_edge(&self, from: NodeId, to: NodeId) -> bool {
        self.weight(from, to).is_some()
    }

    pub fn weight(&self, from: NodeId, to: NodeId) -> Option<f64> {
        self.nodes.get(&from)?.edges.get(&to).copied()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Counts edges by summing out-degrees.
    ///
    /// Undirected edges are stored twice, except self-loops which occupy a single map entry.
    pub fn edge_count(&self) -> usize {
        let mut degree_sum = 0usize;
        let mut self_loops = 0usize;
        for (&id, node) in &self.nodes {
            degree_sum += node.edges.len();
            if node.edges.contains_key(&id) {
                self_loops += 1;
            }
        }
        if self.options.directed {
            degree_sum
        } else {
            (degree_sum + self_loops) / 2
        }
    }

    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.keys().copied()
    }

    pub fn neighbors(&self, id: NodeId) -> Result<impl Iterator<Item = (NodeId, f64)> + '_> {
        Ok(self.entry(id)?.edges.iter().map(|(&to, &w)| (to, w)))
    }

    pub fn edges_of(&self, id: NodeId) -> Result<Vec<(NodeId, f64)>> {
        Ok(self.neighbors(id)?.collect())
    }

    /// All edges as `(from, to, weight)`. Undirected edges are reported once with `from <= to`.
    pub fn edges(&self) -> Vec<(NodeId, NodeId, f64)> {
        let mut out = Vec::new();
        for (&from, node) in &self.nodes {
            for (&to, &w) in &node.edges {
                if self.options.directed || from <= to {
                    out.push((from, to, w));
                }
            }
        }
        out
    }

    /// In-degree of every node. For undirected graphs this equals the degree.
    pub fn in_degrees(&self) -> BTreeMap<NodeId, usize> {
        let mut out: BTreeMap<NodeId, usize> = self.nodes.keys().map(|&id| (id, 0)).collect();
        for node in self.nodes.values() {
            for to in node.edges.keys() {
                if let Some(d) = out.get_mut(to) {
                    *d += 1;
                }
            }
        }
        out
    }

    pub fn adjacency_matrix(&self) -> AdjacencyMatrix {
        let ids: Vec<NodeId> = self.nodes.keys().copied().collect();
        let mut weights = vec![vec![f64::INFINITY; ids.len()]; ids.len()];
        for (row, node) in self.nodes.values().enumerate() {
            for (to, &w) in &node.edges {
                if let Ok(col) = ids.binary_search(to) {
                    weights[row][col] = w;
                }
            }
        }
        AdjacencyMatrix::new(ids, weights)
    }
}
