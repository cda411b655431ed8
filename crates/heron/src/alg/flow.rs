//! Maximum flow by augmenting paths over a [`FlowGraph`]'s residual edges.

use crate::data::list::List;
use crate::error::{Error, Result};
use crate::graphlib::{FlowGraph, NodeId};

fn check_terminals(g: &FlowGraph, source: NodeId, sink: NodeId) -> Result<()> {
    g.check_node(source)?;
    g.check_node(sink)?;
    if source == sink {
        return Err(Error::InvalidArgument {
            message: format!("source and sink are both node {source}"),
        });
    }
    Ok(())
}

/// Ford-Fulkerson with depth-first augmenting paths. Flow already present in `g` is kept and
/// built upon; the return value is the flow added by this call.
pub fn ford_fulkerson(g: &mut FlowGraph, source: NodeId, sink: NodeId) -> Result<i64> {
    check_terminals(g, source, sink)?;

    let mut total = 0i64;
    let mut parent_edge: Vec<Option<usize>> = vec![None; g.node_count()];
    let mut visited = vec![false; g.node_count()];
    loop {
        parent_edge.fill(None);
        visited.fill(false);
        if !dfs_path(g, source, sink, &mut parent_edge, &mut visited) {
            break;
        }
        let pushed = push_along(g, &parent_edge, source, sink)?;
        if pushed == 0 {
            break;
        }
        tracing::trace!(bottleneck = pushed, "augmented along dfs path");
        total += pushed;
    }
    tracing::debug!(source, sink, flow = total, "ford-fulkerson finished");
    Ok(total)
}

/// Depth-first search for a residual path on an explicit stack, recording the edge used to reach
/// each node. Returns whether `sink` was reached.
fn dfs_path(
    g: &FlowGraph,
    source: NodeId,
    sink: NodeId,
    parent_edge: &mut [Option<usize>],
    visited: &mut [bool],
) -> bool {
    let mut stack = vec![source];
    visited[source] = true;
    while let Some(v) = stack.pop() {
        if v == sink {
            return true;
        }
        for &e in g.out_edges(v) {
            let edge = g.edges()[e];
            if edge.residual() > 0 && !visited[edge.to] {
                visited[edge.to] = true;
                parent_edge[edge.to] = Some(e);
                stack.push(edge.to);
            }
        }
    }
    false
}

/// Pushes the bottleneck amount along the recorded path and returns it.
fn push_along(
    g: &mut FlowGraph,
    parent_edge: &[Option<usize>],
    source: NodeId,
    sink: NodeId,
) -> Result<i64> {
    let path = path_edges(g, parent_edge, source, sink)?;
    let bottleneck = path
        .iter()
        .map(|&e| g.edges()[e].residual())
        .min()
        .unwrap_or(0);
    for &e in &path {
        g.augment(e, bottleneck);
    }
    Ok(bottleneck)
}

/// Edmonds-Karp: augments along shortest (fewest-edge) residual paths found by BFS.
pub fn edmonds_karp(g: &mut FlowGraph, source: NodeId, sink: NodeId) -> Result<i64> {
    check_terminals(g, source, sink)?;

    let mut total = 0i64;
    let mut parent_edge: Vec<Option<usize>> = vec![None; g.node_count()];
    loop {
        parent_edge.fill(None);
        let mut queue: List<NodeId> = List::new();
        queue.push_back(source);
        let mut reached = false;
        while let Some(v) = queue.pop_front() {
            if v == sink {
                reached = true;
                break;
            }
            for &e in g.out_edges(v) {
                let edge = g.edges()[e];
                if edge.residual() > 0 && edge.to != source && parent_edge[edge.to].is_none() {
                    parent_edge[edge.to] = Some(e);
                    queue.push_back(edge.to);
                }
            }
        }
        if !reached {
            break;
        }

        let bottleneck = push_along(g, &parent_edge, source, sink)?;
        if bottleneck == 0 {
            break;
        }
        tracing::trace!(bottleneck, "augmented along bfs path");
        total += bottleneck;
    }
    tracing::debug!(source, sink, flow = total, "edmonds-karp finished");
    Ok(total)
}

fn path_edges(
    g: &FlowGraph,
    parent_edge: &[Option<usize>],
    source: NodeId,
    sink: NodeId,
) -> Result<Vec<usize>> {
    let mut path = Vec::new();
    let mut v = sink;
    while v != source {
        let Some(e) = parent_edge[v] else {
            return Err(Error::InvariantViolation {
                message: format!("bfs reached node {v} without a parent edge"),
            });
        };
        path.push(e);
        v = g.edges()[e].from;
    }
    Ok(path)
}
