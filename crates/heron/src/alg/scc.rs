//! Strongly connected components (Tarjan).
//!
//! The depth-first walk keeps its own stack of frames, so path length is bounded by heap memory
//! rather than the thread stack.

use crate::error::Result;
use crate::graphlib::{AdjacencyList, NodeId};
use std::collections::{BTreeMap, BTreeSet};

/// Partitions the nodes into strongly connected components.
///
/// Components come out in the order Tarjan completes them (reverse topological order of the
/// condensation); nodes inside a component are sorted by id. For undirected graphs the result is
/// the connected components.
pub fn strongly_connected_components(g: &AdjacencyList) -> Result<Vec<Vec<NodeId>>> {
    struct Frame {
        v: NodeId,
        successors: Vec<NodeId>,
        next: usize,
    }

    struct Tarjan<'a> {
        g: &'a AdjacencyList,
        index: usize,
        stack: Vec<NodeId>,
        on_stack: BTreeSet<NodeId>,
        indices: BTreeMap<NodeId, usize>,
        lowlink: BTreeMap<NodeId, usize>,
        sccs: Vec<Vec<NodeId>>,
    }

    impl Tarjan<'_> {
        fn enter(&mut self, v: NodeId) -> Result<Frame> {
            self.indices.insert(v, self.index);
            self.lowlink.insert(v, self.index);
            self.index += 1;
            self.stack.push(v);
            self.on_stack.insert(v);

            let successors: Vec<NodeId> = self.g.neighbors(v)?.map(|(w, _)| w).collect();
            Ok(Frame {
                v,
                successors,
                next: 0,
            })
        }

        fn strongconnect(&mut self, root: NodeId) -> Result<()> {
            let mut frames = vec![self.enter(root)?];
            while let Some(frame) = frames.last_mut() {
                let v = frame.v;
                if let Some(&w) = frame.successors.get(frame.next) {
                    frame.next += 1;
                    if !self.indices.contains_key(&w) {
                        let child = self.enter(w)?;
                        frames.push(child);
                    } else if self.on_stack.contains(&w) {
                        let Some(w_idx) = self.indices.get(&w).copied() else {
                            debug_assert!(false, "tarjan index missing for w");
                            continue;
                        };
                        self.lower(v, w_idx);
                    }
                    continue;
                }

                frames.pop();
                if self.lowlink.get(&v) == self.indices.get(&v) {
                    self.emit(v);
                }
                if let Some(parent) = frames.last() {
                    let Some(v_low) = self.lowlink.get(&v).copied() else {
                        debug_assert!(false, "tarjan lowlink missing for v");
                        continue;
                    };
                    self.lower(parent.v, v_low);
                }
            }
            Ok(())
        }

        fn emit(&mut self, v: NodeId) {
            let mut scc: Vec<NodeId> = Vec::new();
            loop {
                let Some(w) = self.stack.pop() else {
                    debug_assert!(false, "tarjan stack underflow");
                    break;
                };
                self.on_stack.remove(&w);
                scc.push(w);
                if w == v {
                    break;
                }
            }
            scc.sort_unstable();
            self.sccs.push(scc);
        }

        fn lower(&mut self, v: NodeId, candidate: usize) {
            if let Some(low) = self.lowlink.get_mut(&v) {
                *low = (*low).min(candidate);
            }
        }
    }

    let mut tarjan = Tarjan {
        g,
        index: 0,
        stack: Vec::new(),
        on_stack: BTreeSet::new(),
        indices: BTreeMap::new(),
        lowlink: BTreeMap::new(),
        sccs: Vec::new(),
    };

    for v in g.nodes() {
        if !tarjan.indices.contains_key(&v) {
            tarjan.strongconnect(v)?;
        }
    }

    Ok(tarjan.sccs)
}
