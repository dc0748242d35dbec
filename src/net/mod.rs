//! # Petri net structural classes (Place/Transition nets)
//!
//! Let `P` be the place set and `T` the transition set of a net, and
//! write `•x` / `x•` for the preset and postset of a node `x`. The
//! classifier evaluates four structural predicates over the static
//! topology, never over markings or firing semantics:
//!
//! * **state machine** — `∀t ∈ T: |•t| = |t•| = 1`;
//! * **marked graph** — `∀p ∈ P: |•p| = |p•| = 1`;
//! * **free choice** — approximated by counting distinct presets:
//!   `|{•t : t ∈ T}| + 1 = |T|`;
//! * **workflow net** — the counts of source places (`•p = ∅`) and
//!   sink places (`p• = ∅`) are both odd.
//!
//! ## Example
//!
//! ```rust
//! use pn_classify::net::*;
//!
//! let elements = vec![
//!     GraphElement::Place { id: "p0".into() },
//!     GraphElement::Transition { id: "t0".into() },
//!     GraphElement::ArcPlaceToTransition {
//!         id: "a0".into(),
//!         source: "p0".into(),
//!         destination: "t0".into(),
//!     },
//!     GraphElement::ArcTransitionToPlace {
//!         id: "a1".into(),
//!         source: "t0".into(),
//!         destination: "p0".into(),
//!     },
//! ];
//!
//! let model = NetModelBuilder::new().build(&elements).unwrap();
//! let result = classify(&model);
//! assert!(result.is_state_machine);
//! assert!(result.is_marked_graph);
//! assert!(!result.is_free_choice);
//! assert!(!result.is_workflow_net);
//! ```

pub mod builder;
pub mod classify;
pub mod element;
pub mod io;
pub mod model;

pub use builder::{BuildError, NetModelBuilder, NodeKind};
pub use classify::{classify, Classification};
pub use element::{ElementId, GraphElement};
pub use io::IoError;
pub use model::{AdjacencySet, NetModel, Place, Transition};
