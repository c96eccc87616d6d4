//! Record kinds of the test hierarchy.
//!
//! # Shape
//!
//! - [`HierarchyModel`]: optional root holding test plans.
//! - [`TestPlan`]: owns an ordered list of functionalities.
//! - [`Functionality`]: owns an ordered list of scenarios.
//! - [`Scenario`]: owns an ordered list of steps.
//! - [`Step`]: leaf.
//!
//! Every parent owns its children outright and keeps them in insertion order.
//! Ids only need to be unique among siblings; see [`crate::audit`] for a check.

mod functionality;
mod hierarchy;
mod scenario;
mod step;
mod test_plan;

pub use functionality::*;
pub use hierarchy::*;
pub use scenario::*;
pub use step::*;
pub use test_plan::*;
