//! Bridges and articulation points of undirected graphs.
//!
//! Both come from one DFS that tracks discovery times and low-links: the edge `v - w` to a DFS
//! child is a bridge when `low[w] > tin[v]`, and `v` is a cut vertex when `low[w] >= tin[v]` (or,
//! for a DFS root, when it has more than one child).

use super::require_undirected;
use crate::error::Result;
use crate::graphlib::{AdjacencyList, NodeId};
use std::collections::{BTreeMap, BTreeSet};

/// Edges whose removal disconnects their component, as `(min, max)` pairs in ascending order.
pub fn bridges(g: &AdjacencyList) -> Result<Vec<(NodeId, NodeId)>> {
    require_undirected(g, "bridge search")?;
    let mut cuts = Cuts::run(g)?;
    cuts.bridges.sort_unstable();
    Ok(cuts.bridges)
}

/// Nodes whose removal disconnects their component, ascending.
pub fn articulation_points(g: &AdjacencyList) -> Result<Vec<NodeId>> {
    require_undirected(g, "articulation point search")?;
    Ok(Cuts::run(g)?.points.into_iter().collect())
}

struct Frame {
    v: NodeId,
    parent: Option<NodeId>,
    tin: usize,
    neighbors: Vec<NodeId>,
    next: usize,
    children: usize,
}

struct Cuts<'a> {
    g: &'a AdjacencyList,
    timer: usize,
    tin: BTreeMap<NodeId, usize>,
    low: BTreeMap<NodeId, usize>,
    bridges: Vec<(NodeId, NodeId)>,
    points: BTreeSet<NodeId>,
}

impl<'a> Cuts<'a> {
    fn run(g: &'a AdjacencyList) -> Result<Self> {
        let mut cuts = Cuts {
            g,
            timer: 0,
            tin: BTreeMap::new(),
            low: BTreeMap::new(),
            bridges: Vec::new(),
            points: BTreeSet::new(),
        };
        for v in g.nodes() {
            if !cuts.tin.contains_key(&v) {
                cuts.dfs(v)?;
            }
        }
        Ok(cuts)
    }

    fn enter(&mut self, v: NodeId, parent: Option<NodeId>) -> Result<Frame> {
        let tin_v = self.timer;
        self.timer += 1;
        self.tin.insert(v, tin_v);
        self.low.insert(v, tin_v);
        let neighbors: Vec<NodeId> = self.g.neighbors(v)?.map(|(w, _)| w).collect();
        Ok(Frame {
            v,
            parent,
            tin: tin_v,
            neighbors,
            next: 0,
            children: 0,
        })
    }

    /// Depth-first walk from `root` on an explicit frame stack.
    fn dfs(&mut self, root: NodeId) -> Result<()> {
        let mut frames = vec![self.enter(root, None)?];
        while let Some(frame) = frames.last_mut() {
            let (v, parent) = (frame.v, frame.parent);
            if let Some(&w) = frame.neighbors.get(frame.next) {
                frame.next += 1;
                if w == v || Some(w) == parent {
                    continue;
                }
                if let Some(&tin_w) = self.tin.get(&w) {
                    self.lower(v, tin_w);
                    continue;
                }
                frame.children += 1;
                let child = self.enter(w, Some(v))?;
                frames.push(child);
                continue;
            }

            let Some(done) = frames.pop() else {
                break;
            };
            if done.parent.is_none() && done.children > 1 {
                self.points.insert(done.v);
            }
            let Some(up) = frames.last() else {
                continue;
            };
            let Some(low_v) = self.low.get(&done.v).copied() else {
                debug_assert!(false, "low-link missing for visited node");
                continue;
            };
            self.lower(up.v, low_v);
            if low_v > up.tin {
                self.bridges.push((up.v.min(done.v), up.v.max(done.v)));
            }
            if up.parent.is_some() && low_v >= up.tin {
                self.points.insert(up.v);
            }
        }
        Ok(())
    }

    fn lower(&mut self, v: NodeId, candidate: usize) {
        if let Some(low) = self.low.get_mut(&v) {
            *low = (*low).min(candidate);
        }
    }
}
