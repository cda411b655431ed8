//! Unweighted shortest path by breadth-first search.

use super::{HashMap, HashSet, reconstruct_path, require_node};
use crate::data::list::List;
use crate::error::Result;
use crate::graphlib::{AdjacencyList, NodeId};

/// Fewest-edge path from `start` to `target`, ignoring weights.
///
/// Neighbors are expanded in ascending id order, so ties between equally short paths always
/// resolve the same way. Returns `Ok(None)` when `target` is unreachable.
pub fn shortest_path(
    g: &AdjacencyList,
    start: NodeId,
    target: NodeId,
) -> Result<Option<Vec<NodeId>>> {
    require_node(g, start)?;
    require_node(g, target)?;

    let mut previous: HashMap<NodeId, NodeId> = HashMap::default();
    let mut visited: HashSet<NodeId> = HashSet::default();
    let mut queue: List<NodeId> = List::new();
    visited.insert(start);
    queue.push_back(start);

    while let Some(v) = queue.pop_front() {
        if v == target {
            break;
        }
        for (w, _) in g.neighbors(v)? {
            if visited.insert(w) {
                previous.insert(w, v);
                queue.push_back(w);
            }
        }
    }

    if !visited.contains(&target) {
        return Ok(None);
    }
    Ok(reconstruct_path(start, target, |v| previous.get(&v).copied()))
}
