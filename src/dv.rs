//! Distance-Vector engine: per-node DV tables maintained incrementally by a
//! work-queue propagation routine, reworked from
//! `original_source/src/dv_graph.py`'s `DVGraph`/`propagate_change`.

use std::collections::{HashMap, HashSet, VecDeque};

use crate::engine::RoutingEngine;
use crate::graph::{Cost, Graph, NodeId};
use crate::tie_break::prefers;

/// A node's distance vector: destination -> (canonical path from this node, cost).
type DvTable = HashMap<NodeId, (Vec<NodeId>, Cost)>;

#[derive(Default)]
pub struct DvEngine {
    graph: Graph,
    dv: HashMap<NodeId, DvTable>,
}

impl DvEngine {
    pub fn new() -> Self {
        Self::default()
    }

    fn ensure_self_entry(&mut self, id: NodeId) {
        self.dv.entry(id).or_insert_with(HashMap::new).insert(id, (vec![id], 0));
    }

    /// BFS over the live neighbor relation, starting from `source`. Matches
    /// `construct_connected_nodes_queue`: it walks the current adjacency, not
    /// pre-existing DV destinations, so a freshly-added node is reachable
    /// from itself even before it has any DV entries beyond its self-entry.
    fn reachable_from(&self, source: NodeId) -> HashSet<NodeId> {
        let mut visited = HashSet::new();
        visited.insert(source);
        let mut queue = VecDeque::new();
        queue.push_back(source);
        while let Some(u) = queue.pop_front() {
            for (v, _) in self.graph.neighbors_of(u) {
                if visited.insert(v) {
                    queue.push_back(v);
                }
            }
        }
        visited
    }

    /// Work-queue relaxation to fixpoint, starting from `source`'s connected
    /// component (spec §4.3, "Edge add / cost change — propagate(source_id)").
    fn propagate(&mut self, source: NodeId) {
        let mut queue: VecDeque<NodeId> = self.reachable_from(source).into_iter().collect();

        while let Some(u) = queue.pop_front() {
            let neighbors: Vec<(NodeId, Cost)> = self.graph.neighbors_of(u).collect();
            let entries: Vec<(NodeId, Vec<NodeId>, Cost)> = self
                .dv
                .get(&u)
                .map(|t| t.iter().map(|(&d, (p, c))| (d, p.clone(), *c)).collect())
                .unwrap_or_default();

            for (v, w_uv) in neighbors {
                for (dest, path_u, cost_u) in &entries {
                    if *dest == v {
                        continue; // the neighbor is the destination itself
                    }
                    let mut candidate_path = Vec::with_capacity(path_u.len() + 1);
                    candidate_path.push(v);
                    candidate_path.extend_from_slice(path_u);
                    let candidate_cost = cost_u + w_uv;

                    let v_table = self.dv.entry(v).or_insert_with(HashMap::new);
                    match v_table.get(dest) {
                        None => {
                            v_table.insert(*dest, (candidate_path, candidate_cost));
                            queue.push_back(v);
                        }
                        Some((existing_path, existing_cost)) => {
                            if candidate_cost < *existing_cost {
                                v_table.insert(*dest, (candidate_path, candidate_cost));
                                queue.push_back(v);
                            } else if candidate_cost == *existing_cost
                                && candidate_path != *existing_path
                                && prefers(&candidate_path, existing_path)
                            {
                                v_table.insert(*dest, (candidate_path, candidate_cost));
                                queue.push_back(v);
                            }
                        }
                    }
                }
            }
        }
    }

    /// Removes every DV entry, on every node, whose path traverses `(a, b)`
    /// in either direction (spec §4.3, "Edge removal").
    fn invalidate_paths_through(&mut self, a: NodeId, b: NodeId) {
        for table in self.dv.values_mut() {
            table.retain(|_, (path, _)| {
                !path.windows(2).any(|w| (w[0], w[1]) == (a, b) || (w[0], w[1]) == (b, a))
            });
        }
        if let Some(t) = self.dv.get_mut(&a) {
            t.remove(&b);
        }
        if let Some(t) = self.dv.get_mut(&b) {
            t.remove(&a);
        }
    }
}

impl RoutingEngine for DvEngine {
    fn add_node(&mut self, id: NodeId) -> bool {
        let added = self.graph.add_node(id);
        self.ensure_self_entry(id);
        added
    }

    fn add_edge(&mut self, a: NodeId, b: NodeId, cost: Cost) -> bool {
        if !self.graph.add_edge(a, b, cost) {
            return false;
        }
        self.propagate(a);
        self.propagate(b);
        true
    }

    fn change_cost(&mut self, a: NodeId, b: NodeId, cost: Cost) -> bool {
        if !self.graph.change_cost(a, b, cost) {
            return false;
        }
        self.propagate(a);
        self.propagate(b);
        true
    }

    fn remove_edge(&mut self, a: NodeId, b: NodeId) -> bool {
        if !self.graph.remove_edge(a, b) {
            return false;
        }
        self.invalidate_paths_through(a, b);
        self.propagate(a);
        self.propagate(b);
        true
    }

    fn has_edge(&self, a: NodeId, b: NodeId) -> bool {
        self.graph.has_edge(a, b)
    }

    fn nodes(&self) -> Vec<NodeId> {
        self.graph.nodes()
    }

    fn shortest_path(&self, src: NodeId, dst: NodeId) -> Vec<NodeId> {
        self.dv
            .get(&src)
            .and_then(|t| t.get(&dst))
            .map(|(p, _)| p.clone())
            .unwrap_or_default()
    }

    fn path_cost(&self, path: &[NodeId]) -> Cost {
        if path.len() < 2 {
            return if path.is_empty() { -1 } else { 0 };
        }
        self.dv
            .get(&path[0])
            .and_then(|t| t.get(&path[path.len() - 1]))
            .map(|(_, c)| *c)
            .unwrap_or(-1)
    }

    fn forwarding_table(&self, s: NodeId) -> Vec<(NodeId, NodeId, Cost)> {
        let mut table = Vec::new();
        for dest in self.graph.nodes() {
            if dest == s {
                table.push((dest, s, 0));
                continue;
            }
            if let Some((path, cost)) = self.dv.get(&s).and_then(|t| t.get(&dest)) {
                table.push((dest, path[1], *cost));
            }
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canonical_five_node() -> DvEngine {
        let mut e = DvEngine::new();
        for id in 1..=5 {
            e.add_node(id);
        }
        e.add_edge(1, 2, 8);
        e.add_edge(2, 3, 3);
        e.add_edge(2, 5, 4);
        e.add_edge(4, 1, 1);
        e.add_edge(4, 5, 1);
        e
    }

    #[test]
    fn self_entry_is_always_present() {
        let e = canonical_five_node();
        assert_eq!(e.dv[&3][&3], (vec![3], 0));
    }

    #[test]
    fn canonical_path_one_to_three() {
        let e = canonical_five_node();
        assert_eq!(e.shortest_path(1, 3), vec![1, 4, 5, 2, 3]);
        assert_eq!(e.path_cost(&[1, 4, 5, 2, 3]), 9);
    }

    #[test]
    fn forwarding_table_from_node_one_matches_ls() {
        let e = canonical_five_node();
        assert_eq!(
            e.forwarding_table(1),
            vec![(1, 1, 0), (2, 4, 6), (3, 4, 9), (4, 4, 1), (5, 4, 2)]
        );
    }

    #[test]
    fn removal_invalidates_paths_through_the_edge() {
        let mut e = canonical_five_node();
        e.remove_edge(2, 5);
        for table in e.dv.values() {
            for (path, _) in table.values() {
                assert!(!path.windows(2).any(|w| (w[0], w[1]) == (2, 5) || (w[0], w[1]) == (5, 2)));
            }
        }
        assert_eq!(e.shortest_path(1, 3), vec![1, 2, 3]);
        assert_eq!(e.path_cost(&[1, 2, 3]), 11);
    }

    #[test]
    fn cheaper_new_edge_is_adopted() {
        let mut e = canonical_five_node();
        e.add_edge(3, 4, 2);
        assert_eq!(e.shortest_path(1, 3), vec![1, 4, 3]);
        assert_eq!(e.path_cost(&[1, 4, 3]), 3);
    }

    #[test]
    fn removing_a_non_adjacent_pair_is_a_no_op() {
        let mut e = canonical_five_node();
        assert!(!e.remove_edge(1, 3));
    }

    #[test]
    fn propagation_is_idempotent() {
        let mut e = canonical_five_node();
        let before = e.forwarding_table(1);
        e.propagate(1);
        e.propagate(2);
        assert_eq!(e.forwarding_table(1), before);
    }

    #[test]
    fn newly_added_node_gets_entries_once_propagated() {
        let mut e = canonical_five_node();
        e.add_node(6);
        e.add_edge(6, 3, 1);
        assert_eq!(e.shortest_path(1, 6), vec![1, 4, 5, 2, 3, 6]);
    }
}
