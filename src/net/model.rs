//! Adjacency model: per-node preset/postset over the bipartite graph.
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::net::element::ElementId;

/// Preset/postset storage. Nodes in workflow models rarely touch more
/// than a handful of neighbours, so rows stay inline.
pub type AdjacencySet = SmallVec<[ElementId; 4]>;

/// A place together with the transitions around it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Place {
    /// Transitions with an arc ending at this place.
    pub incoming: AdjacencySet,
    /// Transitions this place has an arc to.
    pub outgoing: AdjacencySet,
}

/// A transition together with the places around it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    /// Input places of this transition.
    pub incoming: AdjacencySet,
    /// Output places of this transition.
    pub outgoing: AdjacencySet,
}

impl Place {
    pub fn link_incoming(&mut self, transition: &ElementId) {
        insert_unique(&mut self.incoming, transition);
    }

    pub fn link_outgoing(&mut self, transition: &ElementId) {
        insert_unique(&mut self.outgoing, transition);
    }

    /// A source place has no predecessor transition.
    pub fn is_source(&self) -> bool {
        self.incoming.is_empty()
    }

    /// A sink place has no successor transition.
    pub fn is_sink(&self) -> bool {
        self.outgoing.is_empty()
    }
}

impl Transition {
    pub fn link_incoming(&mut self, place: &ElementId) {
        insert_unique(&mut self.incoming, place);
    }

    pub fn link_outgoing(&mut self, place: &ElementId) {
        insert_unique(&mut self.outgoing, place);
    }
}

/// The in-memory net, keyed by the host-assigned element ids.
///
/// Built once per classification run and never mutated afterwards; the
/// two maps stay symmetric by construction (each arc updates both of
/// its endpoint sets in the same step).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NetModel {
    pub places: IndexMap<ElementId, Place>,
    pub transitions: IndexMap<ElementId, Transition>,
}

impl NetModel {
    pub fn places_len(&self) -> usize {
        self.places.len()
    }

    pub fn transitions_len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty() && self.transitions.is_empty()
    }
}

/// Parallel arcs between the same pair of nodes collapse; adjacency
/// rows behave as sets with stable insertion order.
fn insert_unique(set: &mut AdjacencySet, id: &ElementId) {
    if !set.iter().any(|existing| existing == id) {
        set.push(id.clone());
    }
}
