//! Sibling id audit.
//!
//! Records never enforce id uniqueness themselves. This walk reports any
//! sibling group where an id repeats, which is the rule consumers are expected
//! to uphold. The same id under different parents, or on different levels, is
//! fine and is not reported.

use std::collections::BTreeMap;
use std::fmt;

use crate::models::HierarchyModel;

/// The kind of record a sibling group is made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    TestPlan,
    Functionality,
    Scenario,
    Step,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TestPlan => "test plan",
            Self::Functionality => "functionality",
            Self::Scenario => "scenario",
            Self::Step => "step",
        }
    }
}

/// One id that occurs more than once among siblings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateId {
    pub kind: EntityKind,
    pub id: i64,
    pub occurrences: usize,
    /// Names from the root down to the parent owning the sibling group.
    pub path: Vec<String>,
}

impl fmt::Display for DuplicateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} id {} appears {} times under {}",
            self.kind.as_str(),
            self.id,
            self.occurrences,
            self.path.join(" / ")
        )
    }
}

/// Report every repeated id within a sibling group, in depth-first order.
pub fn duplicate_sibling_ids(model: &HierarchyModel) -> Vec<DuplicateId> {
    let mut found = Vec::new();
    let mut path = vec![model.name.clone()];

    check_group(
        &mut found,
        EntityKind::TestPlan,
        &path,
        model.test_plans.iter().map(|p| p.id),
    );
    for plan in &model.test_plans {
        path.push(plan.name.clone());
        check_group(
            &mut found,
            EntityKind::Functionality,
            &path,
            plan.functionalities.iter().map(|f| f.id),
        );
        for functionality in &plan.functionalities {
            path.push(functionality.name.clone());
            check_group(
                &mut found,
                EntityKind::Scenario,
                &path,
                functionality.scenarios.iter().map(|s| s.id),
            );
            for scenario in &functionality.scenarios {
                path.push(scenario.name.clone());
                check_group(
                    &mut found,
                    EntityKind::Step,
                    &path,
                    scenario.steps.iter().map(|s| s.id),
                );
                path.pop();
            }
            path.pop();
        }
        path.pop();
    }

    found
}

fn check_group(
    found: &mut Vec<DuplicateId>,
    kind: EntityKind,
    path: &[String],
    ids: impl Iterator<Item = i64>,
) {
    // Keyed by first appearance so reports follow sibling order.
    let mut counts: BTreeMap<i64, (usize, usize)> = BTreeMap::new();
    for (position, id) in ids.enumerate() {
        counts.entry(id).or_insert((position, 0)).1 += 1;
    }

    let mut repeated: Vec<_> = counts
        .into_iter()
        .filter(|(_, (_, count))| *count > 1)
        .collect();
    repeated.sort_by_key(|(_, (first, _))| *first);

    for (id, (_, occurrences)) in repeated {
        found.push(DuplicateId {
            kind,
            id,
            occurrences,
            path: path.to_vec(),
        });
    }
}
