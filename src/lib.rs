//! Structural classification of Petri net models.
//!
//! The crate consumes the flat element list a hosting model repository
//! exports for a net, rebuilds the bipartite adjacency structure and
//! reports whether the net is free-choice, a state machine, a marked
//! graph and/or a workflow net. See [`net`] for the predicates.
#![warn(non_snake_case)]

pub mod config;
pub mod net;
pub mod report;

pub use net::builder::{BuildError, NetModelBuilder};
pub use net::classify::{classify, Classification};
pub use net::element::GraphElement;
pub use net::model::NetModel;
pub use report::ClassificationReport;
