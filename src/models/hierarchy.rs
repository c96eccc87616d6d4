use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::test_plan::TestPlan;

/// Optional root wrapping a collection of test plans.
///
/// Serialized with the camelCase field name `testPlans`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct HierarchyModel {
    pub id: i64,
    pub name: String,
    pub test_plans: Vec<TestPlan>,
}

impl HierarchyModel {
    /// Create a root with no test plans yet.
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self::with_test_plans(id, name, Vec::new())
    }

    pub fn with_test_plans(id: i64, name: impl Into<String>, test_plans: Vec<TestPlan>) -> Self {
        Self {
            id,
            name: name.into(),
            test_plans,
        }
    }

    pub fn test_plans(&self) -> &[TestPlan] {
        &self.test_plans
    }
}
