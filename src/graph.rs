//! The undirected weighted graph shared by both routing engines.
//!
//! The solver's original road-graph code kept a fully generic
//! `Graph<NId, N, E>` parameterized over an `Edge` trait; routing nodes here
//! carry nothing but an id and an integer link cost, so the generic machinery
//! is dropped in favor of a direct `id -> (neighbor -> cost)` adjacency.

use indexmap::IndexMap;

/// A positive link cost. The sentinel `-999` used in changes files to mean
/// "remove this edge" is handled one layer up, in [`crate::parse`] — by the
/// time a cost reaches the graph it is always a real edge weight.
pub type Cost = i64;
pub type NodeId = u32;

/// Undirected weighted graph over integer node ids.
///
/// Nodes are kept in an [`IndexMap`] so that insertion order survives, though
/// every consumer in this crate re-sorts ids before emitting, per the output
/// format's ascending-id requirement.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    neighbors: IndexMap<NodeId, IndexMap<NodeId, Cost>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node with an empty neighbor set. Returns `true` if it is new.
    pub fn add_node(&mut self, id: NodeId) -> bool {
        if self.neighbors.contains_key(&id) {
            return false;
        }
        self.neighbors.insert(id, IndexMap::new());
        true
    }

    /// Adds an edge `(a, b)` with the given cost. Both nodes must already
    /// exist and no edge may already connect them.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId, cost: Cost) -> bool {
        if a == b || !self.neighbors.contains_key(&a) || !self.neighbors.contains_key(&b) {
            return false;
        }
        if self.has_edge(a, b) {
            return false;
        }
        self.neighbors.get_mut(&a).unwrap().insert(b, cost);
        self.neighbors.get_mut(&b).unwrap().insert(a, cost);
        true
    }

    /// Updates the cost of an existing edge on both sides.
    pub fn change_cost(&mut self, a: NodeId, b: NodeId, new_cost: Cost) -> bool {
        if !self.has_edge(a, b) {
            return false;
        }
        self.neighbors.get_mut(&a).unwrap().insert(b, new_cost);
        self.neighbors.get_mut(&b).unwrap().insert(a, new_cost);
        true
    }

    /// Removes an edge from both sides.
    pub fn remove_edge(&mut self, a: NodeId, b: NodeId) -> bool {
        if !self.has_edge(a, b) {
            return false;
        }
        self.neighbors.get_mut(&a).unwrap().shift_remove(&b);
        self.neighbors.get_mut(&b).unwrap().shift_remove(&a);
        true
    }

    pub fn has_node(&self, id: NodeId) -> bool {
        self.neighbors.contains_key(&id)
    }

    pub fn has_edge(&self, a: NodeId, b: NodeId) -> bool {
        self.neighbors.get(&a).map_or(false, |n| n.contains_key(&b))
    }

    pub fn cost_of(&self, a: NodeId, b: NodeId) -> Option<Cost> {
        self.neighbors.get(&a).and_then(|n| n.get(&b)).copied()
    }

    /// Node ids, in ascending order.
    pub fn nodes(&self) -> Vec<NodeId> {
        let mut ids: Vec<_> = self.neighbors.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    pub fn neighbors_of(&self, id: NodeId) -> impl Iterator<Item = (NodeId, Cost)> + '_ {
        self.neighbors
            .get(&id)
            .into_iter()
            .flat_map(|n| n.iter().map(|(&nb, &c)| (nb, c)))
    }

    pub fn node_count(&self) -> usize {
        self.neighbors.len()
    }
}
