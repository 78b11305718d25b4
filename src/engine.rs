//! The `RoutingEngine` trait lets the simulation driver treat LS and DV as
//! interchangeable backends — the natural Rust expression of the spec's
//! requirement that both report "identical results ... on identical inputs".

use crate::graph::{Cost, NodeId};

pub trait RoutingEngine {
    fn add_node(&mut self, id: NodeId) -> bool;
    fn add_edge(&mut self, a: NodeId, b: NodeId, cost: Cost) -> bool;
    fn change_cost(&mut self, a: NodeId, b: NodeId, cost: Cost) -> bool;
    fn remove_edge(&mut self, a: NodeId, b: NodeId) -> bool;
    fn has_edge(&self, a: NodeId, b: NodeId) -> bool;
    fn nodes(&self) -> Vec<NodeId>;

    /// Canonical path from `src` to `dst`, empty if unreachable.
    fn shortest_path(&self, src: NodeId, dst: NodeId) -> Vec<NodeId>;
    fn path_cost(&self, path: &[NodeId]) -> Cost;

    /// Ordered `(dest, next_hop, cost)` triples, ascending by destination.
    fn forwarding_table(&self, s: NodeId) -> Vec<(NodeId, NodeId, Cost)>;

    /// Applies one changes-file line, per spec §4.4 step 4: ensure both
    /// nodes exist, then add/update/remove the edge as appropriate.
    ///
    /// `cost == -999` on a pair with no existing edge is a no-op (spec §8,
    /// "A change line with cost == -999 on a non-adjacent pair is a
    /// no-op") — the sentinel only ever means "remove", never "create with
    /// this cost".
    fn apply_change(&mut self, a: NodeId, b: NodeId, cost: Cost) {
        self.add_node(a);
        self.add_node(b);
        if !self.has_edge(a, b) {
            if cost != -999 {
                self.add_edge(a, b, cost);
            }
        } else if cost == -999 {
            self.remove_edge(a, b);
        } else {
            self.change_cost(a, b, cost);
        }
    }
}
