use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::scenario::Scenario;

/// A capability under test, grouping the scenarios that cover it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct Functionality {
    /// Unique among the functionalities of the owning test plan.
    pub id: i64,
    pub name: String,
    pub scenarios: Vec<Scenario>,
}

impl Functionality {
    /// Create a functionality with no scenarios yet.
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self::with_scenarios(id, name, Vec::new())
    }

    pub fn with_scenarios(id: i64, name: impl Into<String>, scenarios: Vec<Scenario>) -> Self {
        Self {
            id,
            name: name.into(),
            scenarios,
        }
    }

    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }
}
