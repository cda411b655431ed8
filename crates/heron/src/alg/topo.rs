//! Topological ordering of directed acyclic graphs (Kahn's algorithm).

use crate::data::list::List;
use crate::error::{Error, Result};
use crate::graphlib::{AdjacencyList, NodeId};

/// Orders nodes so that every edge points forward.
///
/// Ready nodes are processed first-in first-out, seeded in ascending id order. Fails with
/// [`Error::NotADag`] if the graph has a cycle (self-loops included).
pub fn topological_sort(g: &AdjacencyList) -> Result<Vec<NodeId>> {
    if !g.is_directed() {
        return Err(Error::InvalidArgument {
            message: "topological sort requires a directed graph".to_string(),
        });
    }

    let mut in_degree = g.in_degrees();
    let mut ready: List<NodeId> = in_degree
        .iter()
        .filter(|&(_, &d)| d == 0)
        .map(|(&id, _)| id)
        .collect();
    let mut order: Vec<NodeId> = Vec::with_capacity(g.node_count());

    while let Some(v) = ready.pop_front() {
        order.push(v);
        for (w, _) in g.neighbors(v)? {
            let Some(d) = in_degree.get_mut(&w) else {
                debug_assert!(false, "edge to a node without an in-degree entry");
                continue;
            };
            *d -= 1;
            if *d == 0 {
                ready.push_back(w);
            }
        }
    }

    if order.len() != g.node_count() {
        return Err(Error::NotADag);
    }
    Ok(order)
}
