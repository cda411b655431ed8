//! Minimum spanning tree (eager Prim over an indexed priority queue).

use super::{HashSet, require_undirected};
use crate::data::indexed_pq::IndexedPriorityQueue;
use crate::error::Result;
use crate::graphlib::{AdjacencyList, NodeId};

/// Fringe node -> `(weight, tree endpoint)` of its cheapest edge into the tree.
type Fringe = IndexedPriorityQueue<NodeId, (f64, NodeId)>;

#[derive(Debug, Clone, PartialEq)]
pub struct SpanningTree {
    pub cost: f64,
    /// Tree edges as `(parent, child, weight)` in the order they were added.
    pub edges: Vec<(NodeId, NodeId, f64)>,
}

/// Builds a minimum spanning tree rooted at the lowest node id.
///
/// The queue holds, per fringe node, the cheapest known edge into the tree; relaxing a node
/// updates its entry in place instead of queueing duplicates. Returns `Ok(None)` when the graph
/// is disconnected.
pub fn prim(g: &AdjacencyList) -> Result<Option<SpanningTree>> {
    require_undirected(g, "prim")?;

    let mut tree = SpanningTree {
        cost: 0.0,
        edges: Vec::new(),
    };
    let Some(root) = g.nodes().next() else {
        return Ok(Some(tree));
    };

    let mut in_tree: HashSet<NodeId> = HashSet::default();
    let mut fringe: Fringe =
        IndexedPriorityQueue::with_comparator(|a: &(f64, NodeId), b: &(f64, NodeId)| {
            a.0.total_cmp(&b.0)
        });

    visit(g, root, &mut in_tree, &mut fringe)?;
    while let Some((v, (weight, parent))) = fringe.poll() {
        tree.edges.push((parent, v, weight));
        tree.cost += weight;
        visit(g, v, &mut in_tree, &mut fringe)?;
    }

    if tree.edges.len() + 1 != g.node_count() {
        return Ok(None);
    }
    Ok(Some(tree))
}

fn visit(
    g: &AdjacencyList,
    v: NodeId,
    in_tree: &mut HashSet<NodeId>,
    fringe: &mut Fringe,
) -> Result<()> {
    in_tree.insert(v);
    for (w, weight) in g.neighbors(v)? {
        if in_tree.contains(&w) {
            continue;
        }
        if fringe.get(&w).is_none_or(|&(best, _)| weight < best) {
            fringe.add(w, (weight, v));
        }
    }
    Ok(())
}
