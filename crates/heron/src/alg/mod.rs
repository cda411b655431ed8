//! Graph algorithms over [`AdjacencyList`] and [`FlowGraph`](crate::graphlib::FlowGraph).

pub mod bfs;
pub mod cuts;
pub mod dijkstra;
pub mod flow;
pub mod mst;
pub mod scc;
pub mod topo;

use crate::error::{Error, Result};
use crate::graphlib::{AdjacencyList, NodeId};
use rustc_hash::FxBuildHasher;

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;
type HashSet<T> = hashbrown::HashSet<T, FxBuildHasher>;

fn require_node(g: &AdjacencyList, id: NodeId) -> Result<()> {
    if g.has_node(id) {
        Ok(())
    } else {
        Err(crate::graphlib::Error::NodeNotFound { id }.into())
    }
}

fn require_undirected(g: &AdjacencyList, algorithm: &str) -> Result<()> {
    if g.is_directed() {
        return Err(Error::InvalidArgument {
            message: format!("{algorithm} requires an undirected graph"),
        });
    }
    Ok(())
}

/// Walks `previous` links back from `target` to `source`.
fn reconstruct_path<F>(source: NodeId, target: NodeId, previous: F) -> Option<Vec<NodeId>>
where
    F: Fn(NodeId) -> Option<NodeId>,
{
    let mut path = vec![target];
    let mut cur = target;
    while cur != source {
        cur = previous(cur)?;
        path.push(cur);
    }
    path.reverse();
    Some(path)
}
