//! Single-source shortest paths for non-negative edge weights.
//!
//! Negative weights are a precondition violation: they are not detected and produce undefined
//! (usually wrong) distances.

use super::{HashMap, HashSet, reconstruct_path, require_node};
use crate::data::indexed_pq::IndexedPriorityQueue;
use crate::error::Result;
use crate::graphlib::{AdjacencyList, NodeId};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPaths {
    source: NodeId,
    distances: BTreeMap<NodeId, f64>,
    previous: BTreeMap<NodeId, NodeId>,
}

impl ShortestPaths {
    pub fn source(&self) -> NodeId {
        self.source
    }

    /// Distance from the source, `None` if `node` is unreachable.
    pub fn distance(&self, node: NodeId) -> Option<f64> {
        self.distances.get(&node).copied()
    }

    pub fn distances(&self) -> &BTreeMap<NodeId, f64> {
        &self.distances
    }

    pub fn path_to(&self, target: NodeId) -> Option<Vec<NodeId>> {
        if !self.distances.contains_key(&target) {
            return None;
        }
        reconstruct_path(self.source, target, |v| self.previous.get(&v).copied())
    }
}

pub fn dijkstra(g: &AdjacencyList, start: NodeId) -> Result<ShortestPaths> {
    run(g, start, None)
}

/// Cheapest path from `start` to `target` as `(distance, nodes)`. Stops as soon as `target` is
/// settled.
pub fn shortest_path(
    g: &AdjacencyList,
    start: NodeId,
    target: NodeId,
) -> Result<Option<(f64, Vec<NodeId>)>> {
    require_node(g, target)?;
    let paths = run(g, start, Some(target))?;
    Ok(paths.distance(target).zip(paths.path_to(target)))
}

fn run(g: &AdjacencyList, start: NodeId, target: Option<NodeId>) -> Result<ShortestPaths> {
    require_node(g, start)?;

    let mut distances: HashMap<NodeId, f64> = HashMap::default();
    let mut previous: BTreeMap<NodeId, NodeId> = BTreeMap::new();
    let mut settled: HashSet<NodeId> = HashSet::default();
    let mut pq: IndexedPriorityQueue<NodeId, f64> =
        IndexedPriorityQueue::with_comparator(f64::total_cmp);
    pq.reserve(g.node_count());

    distances.insert(start, 0.0);
    pq.add(start, 0.0);

    while let Some((v, dist)) = pq.poll() {
        settled.insert(v);
        if Some(v) == target {
            break;
        }
        for (w, weight) in g.neighbors(v)? {
            if settled.contains(&w) {
                continue;
            }
            let candidate = dist + weight;
            if distances.get(&w).is_none_or(|&cur| candidate < cur) {
                distances.insert(w, candidate);
                previous.insert(w, v);
                pq.add(w, candidate);
            }
        }
    }

    tracing::debug!(source = start, settled = settled.len(), "dijkstra finished");

    Ok(ShortestPaths {
        source: start,
        distances: distances.into_iter().collect(),
        previous,
    })
}
