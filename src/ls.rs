//! Link-State engine: all-pairs shortest paths via Dijkstra, with the
//! canonical tie-break rule folded directly into predecessor selection.
//!
//! The source's `graph.rs::pathfind` runs a heap-optimized Dijkstra with
//! `priority_queue::PriorityQueue`, pushing each node's negated distance so
//! the max-priority pop is the min-distance node; it returns only *a*
//! shortest path, with no tie-break. Since node ids are unique and Dijkstra
//! finalizes nodes in non-decreasing distance order, picking the
//! smallest-id predecessor at each relaxation is provably equivalent to the
//! full reverse-lexicographic rule over whole paths (see DESIGN.md) — so the
//! tie-break collapses into a single extra comparison in the inner loop, no
//! predecessor sets required.

use std::cmp::Reverse;
use std::collections::HashMap;

use priority_queue::PriorityQueue;

use crate::engine::RoutingEngine;
use crate::graph::{Cost, Graph, NodeId};

const UNREACHABLE: Cost = -1;

#[derive(Default)]
pub struct LsEngine {
    graph: Graph,
}

impl LsEngine {
    pub fn new() -> Self {
        Self { graph: Graph::new() }
    }

    /// Single-source Dijkstra from `src`. Returns, for every reachable node,
    /// `(dist, predecessor)`; `src` maps to `(0, src)`.
    fn dijkstra(&self, src: NodeId) -> HashMap<NodeId, (Cost, NodeId)> {
        let mut best: HashMap<NodeId, (Cost, NodeId)> = HashMap::new();
        best.insert(src, (0, src));

        // Priority is Reverse(dist): the queue pops the greatest priority
        // first, so wrapping distance in `Reverse` makes that pop the node
        // with the smallest distance — a min-heap by distance.
        let mut q: PriorityQueue<NodeId, Reverse<Cost>> = PriorityQueue::new();
        q.push(src, Reverse(0));

        while let Some((u, Reverse(d))) = q.pop() {
            if best.get(&u).map_or(true, |&(bd, _)| d > bd) {
                continue; // stale heap entry
            }
            for (v, w) in self.graph.neighbors_of(u) {
                let nd = d + w;
                match best.get(&v) {
                    Some(&(bd, _)) if nd > bd => {}
                    Some(&(bd, bp)) if nd == bd => {
                        if u < bp {
                            best.insert(v, (bd, u));
                        }
                    }
                    _ => {
                        best.insert(v, (nd, u));
                        q.push(v, Reverse(nd));
                    }
                }
            }
        }
        best
    }

    /// Canonical shortest path from `src` to `dst`, or an empty vector if
    /// `dst` is unreachable.
    pub fn shortest_path(&self, src: NodeId, dst: NodeId) -> Vec<NodeId> {
        if !self.graph.has_node(src) || !self.graph.has_node(dst) {
            return Vec::new();
        }
        if src == dst {
            return vec![src];
        }
        let best = self.dijkstra(src);
        if !best.contains_key(&dst) {
            return Vec::new();
        }
        let mut path = vec![dst];
        let mut cur = dst;
        while cur != src {
            let (_, pred) = best[&cur];
            path.push(pred);
            cur = pred;
        }
        path.reverse();
        path
    }

    pub fn path_cost(&self, path: &[NodeId]) -> Cost {
        if path.is_empty() {
            return UNREACHABLE;
        }
        path.windows(2)
            .map(|w| self.graph.cost_of(w[0], w[1]).unwrap_or(0))
            .sum()
    }
}

impl RoutingEngine for LsEngine {
    fn add_node(&mut self, id: NodeId) -> bool {
        self.graph.add_node(id)
    }

    fn add_edge(&mut self, a: NodeId, b: NodeId, cost: Cost) -> bool {
        self.graph.add_edge(a, b, cost)
    }

    fn change_cost(&mut self, a: NodeId, b: NodeId, cost: Cost) -> bool {
        self.graph.change_cost(a, b, cost)
    }

    fn remove_edge(&mut self, a: NodeId, b: NodeId) -> bool {
        self.graph.remove_edge(a, b)
    }

    fn has_edge(&self, a: NodeId, b: NodeId) -> bool {
        self.graph.has_edge(a, b)
    }

    fn nodes(&self) -> Vec<NodeId> {
        self.graph.nodes()
    }

    fn shortest_path(&self, src: NodeId, dst: NodeId) -> Vec<NodeId> {
        self.shortest_path(src, dst)
    }

    fn path_cost(&self, path: &[NodeId]) -> Cost {
        self.path_cost(path)
    }

    fn forwarding_table(&self, s: NodeId) -> Vec<(NodeId, NodeId, Cost)> {
        let mut table = Vec::new();
        for dest in self.graph.nodes() {
            if dest == s {
                table.push((dest, s, 0));
                continue;
            }
            let path = self.shortest_path(s, dest);
            if path.is_empty() {
                continue;
            }
            let next_hop = path[1];
            table.push((dest, next_hop, self.path_cost(&path)));
        }
        table
    }
}
