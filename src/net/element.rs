//! Raw graph elements handed over by the hosting model repository.
use serde::{Deserialize, Serialize};

/// Stable element identifier assigned by the hosting repository.
pub type ElementId = String;

/// One entry of the flat element list a host exports for a net.
///
/// The list carries node elements, the two directed arc kinds and
/// possibly element kinds unrelated to the net; unrecognized kinds
/// collapse into [`GraphElement::Unknown`] so a host can pass its
/// full sub-tree without pre-filtering.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(tag = "kind")]
pub enum GraphElement {
    Place {
        id: ElementId,
    },
    Transition {
        id: ElementId,
    },
    /// Arc from a place (`source`) to a transition (`destination`).
    ArcPlaceToTransition {
        id: ElementId,
        source: ElementId,
        destination: ElementId,
    },
    /// Arc from a transition (`source`) to a place (`destination`).
    ArcTransitionToPlace {
        id: ElementId,
        source: ElementId,
        destination: ElementId,
    },
    #[serde(other)]
    Unknown,
}

impl GraphElement {
    pub fn id(&self) -> Option<&ElementId> {
        match self {
            GraphElement::Place { id }
            | GraphElement::Transition { id }
            | GraphElement::ArcPlaceToTransition { id, .. }
            | GraphElement::ArcTransitionToPlace { id, .. } => Some(id),
            GraphElement::Unknown => None,
        }
    }

    pub fn is_arc(&self) -> bool {
        matches!(
            self,
            GraphElement::ArcPlaceToTransition { .. } | GraphElement::ArcTransitionToPlace { .. }
        )
    }
}
