//! Two-phase construction of the adjacency model from an element list.
use std::fmt;

use indexmap::IndexMap;
use log::debug;
use thiserror::Error;

use crate::net::element::{ElementId, GraphElement};
use crate::net::model::{NetModel, Place, Transition};

/// The two node kinds an arc endpoint may resolve to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Place,
    Transition,
}

impl NodeKind {
    pub fn other(self) -> Self {
        match self {
            NodeKind::Place => NodeKind::Transition,
            NodeKind::Transition => NodeKind::Place,
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::Place => write!(f, "place"),
            NodeKind::Transition => write!(f, "transition"),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BuildError {
    #[error("arc {arc:?} references unknown {expected} {id:?}")]
    MalformedReference {
        arc: ElementId,
        expected: NodeKind,
        id: ElementId,
    },
    #[error("arc {arc:?} endpoint {id:?} is a {actual}, expected a {expected}")]
    InvalidArcEndpoints {
        arc: ElementId,
        expected: NodeKind,
        actual: NodeKind,
        id: ElementId,
    },
}

/// Builds a [`NetModel`] out of the flat element list.
///
/// Construction runs in two passes: node entries first, arcs second.
/// Arcs may reference nodes that appear later in the input sequence,
/// so every node entry must exist before any arc is linked.
#[derive(Debug, Clone, Copy, Default)]
pub struct NetModelBuilder {
    strict: bool,
}

impl NetModelBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// In strict mode an arc endpoint that resolves to the wrong node
    /// kind is reported as [`BuildError::InvalidArcEndpoints`] instead
    /// of a plain missing reference.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn build(&self, elements: &[GraphElement]) -> Result<NetModel, BuildError> {
        let mut places: IndexMap<ElementId, Place> = IndexMap::new();
        let mut transitions: IndexMap<ElementId, Transition> = IndexMap::new();

        for element in elements {
            match element {
                GraphElement::Place { id } => {
                    places.entry(id.clone()).or_default();
                }
                GraphElement::Transition { id } => {
                    transitions.entry(id.clone()).or_default();
                }
                _ => {}
            }
        }
        debug!(
            "collected {} places, {} transitions and {} arcs",
            places.len(),
            transitions.len(),
            elements.iter().filter(|element| element.is_arc()).count()
        );

        for element in elements {
            match element {
                GraphElement::ArcPlaceToTransition {
                    id,
                    source,
                    destination,
                } => {
                    self.check_endpoint(&places, &transitions, id, source, NodeKind::Place)?;
                    self.check_endpoint(
                        &transitions,
                        &places,
                        id,
                        destination,
                        NodeKind::Transition,
                    )?;
                    if let Some(place) = places.get_mut(source) {
                        place.link_outgoing(destination);
                    }
                    if let Some(transition) = transitions.get_mut(destination) {
                        transition.link_incoming(source);
                    }
                }
                // Convention for this arc kind: `source` is the
                // transition, `destination` is the place.
                GraphElement::ArcTransitionToPlace {
                    id,
                    source,
                    destination,
                } => {
                    self.check_endpoint(&transitions, &places, id, source, NodeKind::Transition)?;
                    self.check_endpoint(&places, &transitions, id, destination, NodeKind::Place)?;
                    if let Some(place) = places.get_mut(destination) {
                        place.link_incoming(source);
                    }
                    if let Some(transition) = transitions.get_mut(source) {
                        transition.link_outgoing(destination);
                    }
                }
                _ => {}
            }
        }

        Ok(NetModel {
            places,
            transitions,
        })
    }

    fn check_endpoint<E, O>(
        &self,
        expected_map: &IndexMap<ElementId, E>,
        other_map: &IndexMap<ElementId, O>,
        arc: &ElementId,
        id: &ElementId,
        expected: NodeKind,
    ) -> Result<(), BuildError> {
        if expected_map.contains_key(id) {
            return Ok(());
        }
        if self.strict && other_map.contains_key(id) {
            return Err(BuildError::InvalidArcEndpoints {
                arc: arc.clone(),
                expected,
                actual: expected.other(),
                id: id.clone(),
            });
        }
        Err(BuildError::MalformedReference {
            arc: arc.clone(),
            expected,
            id: id.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(id: &str) -> GraphElement {
        GraphElement::Place { id: id.into() }
    }

    fn transition(id: &str) -> GraphElement {
        GraphElement::Transition { id: id.into() }
    }

    fn arc_pt(id: &str, source: &str, destination: &str) -> GraphElement {
        GraphElement::ArcPlaceToTransition {
            id: id.into(),
            source: source.into(),
            destination: destination.into(),
        }
    }

    fn arc_tp(id: &str, source: &str, destination: &str) -> GraphElement {
        GraphElement::ArcTransitionToPlace {
            id: id.into(),
            source: source.into(),
            destination: destination.into(),
        }
    }

    #[test]
    fn arcs_may_precede_their_endpoints() {
        let elements = vec![
            arc_pt("a0", "p0", "t0"),
            arc_tp("a1", "t0", "p0"),
            place("p0"),
            transition("t0"),
        ];
        let model = NetModelBuilder::new().build(&elements).unwrap();

        assert_eq!(model.places["p0"].outgoing.as_slice(), ["t0".to_string()]);
        assert_eq!(model.places["p0"].incoming.as_slice(), ["t0".to_string()]);
        assert_eq!(
            model.transitions["t0"].incoming.as_slice(),
            ["p0".to_string()]
        );
        assert_eq!(
            model.transitions["t0"].outgoing.as_slice(),
            ["p0".to_string()]
        );
    }

    #[test]
    fn parallel_arcs_collapse() {
        let elements = vec![
            place("p0"),
            transition("t0"),
            arc_pt("a0", "p0", "t0"),
            arc_pt("a1", "p0", "t0"),
        ];
        let model = NetModelBuilder::new().build(&elements).unwrap();

        assert_eq!(model.places["p0"].outgoing.len(), 1);
        assert_eq!(model.transitions["t0"].incoming.len(), 1);
    }

    #[test]
    fn duplicate_node_elements_are_idempotent() {
        let elements = vec![
            place("p0"),
            place("p0"),
            transition("t0"),
            transition("t0"),
            arc_pt("a0", "p0", "t0"),
        ];
        let model = NetModelBuilder::new().build(&elements).unwrap();

        assert_eq!(model.places_len(), 1);
        assert_eq!(model.transitions_len(), 1);
        assert_eq!(model.places["p0"].outgoing.len(), 1);
    }

    #[test]
    fn unknown_elements_are_ignored() {
        let elements = vec![place("p0"), GraphElement::Unknown, transition("t0")];
        let model = NetModelBuilder::new().build(&elements).unwrap();

        assert_eq!(model.places_len(), 1);
        assert_eq!(model.transitions_len(), 1);
    }

    #[test]
    fn dangling_arc_source_is_malformed() {
        let elements = vec![transition("t0"), arc_pt("a0", "missing", "t0")];
        let err = NetModelBuilder::new().build(&elements).unwrap_err();

        assert_eq!(
            err,
            BuildError::MalformedReference {
                arc: "a0".into(),
                expected: NodeKind::Place,
                id: "missing".into(),
            }
        );
    }

    #[test]
    fn dangling_arc_destination_is_malformed() {
        let elements = vec![
            place("p0"),
            transition("t0"),
            arc_tp("a0", "t0", "missing"),
        ];
        let err = NetModelBuilder::new().build(&elements).unwrap_err();

        assert_eq!(
            err,
            BuildError::MalformedReference {
                arc: "a0".into(),
                expected: NodeKind::Place,
                id: "missing".into(),
            }
        );
    }

    #[test]
    fn wrong_kind_endpoint_is_malformed_by_default() {
        // The arc names a transition where a place is expected; the
        // default diagnosis stays a missing reference.
        let elements = vec![
            transition("t0"),
            transition("t1"),
            arc_pt("a0", "t1", "t0"),
        ];
        let err = NetModelBuilder::new().build(&elements).unwrap_err();

        assert!(matches!(err, BuildError::MalformedReference { .. }));
    }

    #[test]
    fn wrong_kind_endpoint_is_refined_in_strict_mode() {
        let elements = vec![
            transition("t0"),
            transition("t1"),
            arc_pt("a0", "t1", "t0"),
        ];
        let err = NetModelBuilder::new()
            .strict(true)
            .build(&elements)
            .unwrap_err();

        assert_eq!(
            err,
            BuildError::InvalidArcEndpoints {
                arc: "a0".into(),
                expected: NodeKind::Place,
                actual: NodeKind::Transition,
                id: "t1".into(),
            }
        );
    }
}
