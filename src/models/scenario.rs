use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::step::Step;

/// An ordered sequence of steps exercising one path through a functionality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct Scenario {
    /// Unique among the scenarios of the owning functionality.
    pub id: i64,
    pub name: String,
    /// Steps in execution order. Required on input, may be empty.
    pub steps: Vec<Step>,
}

impl Scenario {
    /// Create a scenario with no steps yet.
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self::with_steps(id, name, Vec::new())
    }

    pub fn with_steps(id: i64, name: impl Into<String>, steps: Vec<Step>) -> Self {
        Self {
            id,
            name: name.into(),
            steps,
        }
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }
}
