use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::functionality::Functionality;

/// A test plan: the top level of the four-level hierarchy.
///
/// A plan exclusively owns its functionalities, which own their scenarios,
/// which own their steps. Nothing is shared between parents.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct TestPlan {
    /// Unique among the plans of the enclosing [`HierarchyModel`](super::HierarchyModel).
    pub id: i64,
    pub name: String,
    pub functionalities: Vec<Functionality>,
}

impl TestPlan {
    /// Create a plan with no functionalities yet.
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self::with_functionalities(id, name, Vec::new())
    }

    pub fn with_functionalities(
        id: i64,
        name: impl Into<String>,
        functionalities: Vec<Functionality>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            functionalities,
        }
    }

    pub fn functionalities(&self) -> &[Functionality] {
        &self.functionalities
    }
}
