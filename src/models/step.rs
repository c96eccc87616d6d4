use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A single action inside a scenario.
///
/// Steps are the leaves of the hierarchy. Their position within the parent
/// [`Scenario`](super::Scenario) is their execution order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct Step {
    /// Unique among the steps of the owning scenario.
    pub id: i64,
    pub name: String,
}

impl Step {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
