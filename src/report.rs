//! Classification report for the user-facing reporting channel.
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::net::classify::Classification;
use crate::net::model::NetModel;

/// Structured result of one classification run, ready for rendering
/// or JSON export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationReport {
    pub net_name: String,
    pub places: usize,
    pub transitions: usize,
    pub classification: Classification,
}

impl ClassificationReport {
    pub fn new(
        net_name: impl Into<String>,
        model: &NetModel,
        classification: Classification,
    ) -> Self {
        Self {
            net_name: net_name.into(),
            places: model.places_len(),
            transitions: model.transitions_len(),
            classification,
        }
    }

    /// One affirmative or negative statement per structural class.
    pub fn statements(&self) -> [String; 4] {
        [
            verdict(self.classification.is_free_choice, "Free Choice"),
            verdict(self.classification.is_state_machine, "State Machine"),
            verdict(self.classification.is_marked_graph, "Marked Graph"),
            verdict(self.classification.is_workflow_net, "Workflow Net"),
        ]
    }
}

fn verdict(holds: bool, class_name: &str) -> String {
    if holds {
        format!("It is a {} Petri Net", class_name)
    } else {
        format!("It is NOT a {} Petri Net", class_name)
    }
}

impl fmt::Display for ClassificationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Classification of '{}'", self.net_name)?;
        writeln!(
            f,
            "{} places, {} transitions",
            self.places, self.transitions
        )?;
        for statement in self.statements() {
            writeln!(f, "{}", statement)?;
        }
        Ok(())
    }
}
