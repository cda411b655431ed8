//! Capacity graph for max-flow algorithms.
//!
//! Every edge added with [`FlowGraph::add_edge`] is stored next to a zero-capacity reverse edge,
//! so edge `e` and `e ^ 1` are residual twins. Pushing flow along one subtracts it from the other.

use crate::error::{Error, Result};
use crate::graph::NodeId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowEdge {
    pub from: NodeId,
    pub to: NodeId,
    pub capacity: i64,
    pub flow: i64,
}

impl FlowEdge {
    pub fn residual(&self) -> i64 {
        self.capacity - self.flow
    }
}

#[derive(Debug, Clone, Default)]
pub struct FlowGraph {
    edges: Vec<FlowEdge>,
    adjacency: Vec<Vec<usize>>,
}

impl FlowGraph {
    pub fn new(node_count: usize) -> Self {
        Self {
            edges: Vec::new(),
            adjacency: vec![Vec::new(); node_count],
        }
    }

    pub fn add_node(&mut self) -> NodeId {
        self.adjacency.push(Vec::new());
        self.adjacency.len() - 1
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn check_node(&self, id: NodeId) -> Result<()> {
        if id < self.adjacency.len() {
            Ok(())
        } else {
            Err(Error::OutOfRange {
                index: id,
                len: self.adjacency.len(),
            })
        }
    }

    /// Adds `from -> to` with `capacity` plus its zero-capacity reverse edge. Returns the index
    /// of the forward edge.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, capacity: i64) -> Result<usize> {
        self.check_node(from)?;
        self.check_node(to)?;
        if capacity < 0 {
            return Err(Error::InvalidArgument {
                message: format!("negative capacity {capacity} on edge {from} -> {to}"),
            });
        }
        let forward = self.edges.len();
        self.edges.push(FlowEdge {
            from,
            to,
            capacity,
            flow: 0,
        });
        self.edges.push(FlowEdge {
            from: to,
            to: from,
            capacity: 0,
            flow: 0,
        });
        self.adjacency[from].push(forward);
        self.adjacency[to].push(forward + 1);
        Ok(forward)
    }

    pub fn edge(&self, index: usize) -> Option<&FlowEdge> {
        self.edges.get(index)
    }

    pub fn edges(&self) -> &[FlowEdge] {
        &self.edges
    }

    /// Edge indices leaving `node`, residual twins included.
    pub fn out_edges(&self, node: NodeId) -> &[usize] {
        self.adjacency.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Forward edges sit at even indices, their implicit reverse edges at odd ones.
    pub fn is_forward(index: usize) -> bool {
        index % 2 == 0
    }

    /// Pushes `amount` units along edge `index`, mirroring it on the residual twin.
    pub fn augment(&mut self, index: usize, amount: i64) {
        debug_assert!(amount <= self.edges[index].residual());
        self.edges[index].flow += amount;
        self.edges[index ^ 1].flow -= amount;
    }

    /// Clears the flow on every edge, keeping the capacities.
    pub fn reset(&mut self) {
        for e in &mut self.edges {
            e.flow = 0;
        }
    }

    /// Net flow leaving `node`: forward flow out minus forward flow in. Incoming flow shows up
    /// as negative flow on the reverse twins stored in `node`'s adjacency.
    pub fn outflow(&self, node: NodeId) -> i64 {
        self.out_edges(node).iter().map(|&e| self.edges[e].flow).sum()
    }

    /// Nodes reachable from `source` through edges with remaining capacity. After a max-flow run
    /// this is the source side of a minimum cut.
    pub fn min_cut(&self, source: NodeId) -> Result<Vec<bool>> {
        self.check_node(source)?;
        let mut seen = vec![false; self.adjacency.len()];
        let mut stack = vec![source];
        seen[source] = true;
        while let Some(v) = stack.pop() {
            for &e in &self.adjacency[v] {
                let edge = &self.edges[e];
                if edge.residual() > 0 && !seen[edge.to] {
                    seen[edge.to] = true;
                    stack.push(edge.to);
                }
            }
        }
        Ok(seen)
    }
}
