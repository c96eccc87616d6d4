//! ASCII tree rendering for test hierarchies.

use crate::models::{Functionality, HierarchyModel, Scenario, TestPlan};

const PLAN: char = '■';
const FUNCTIONALITY: char = '◆';
const SCENARIO: char = '○';
const STEP: char = '•';

/// Options controlling tree output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Append `#id` after each name.
    pub show_ids: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { show_ids: true }
    }
}

/// Borrowed view of one level, so every record kind renders through one path.
struct Node<'a> {
    symbol: char,
    id: i64,
    name: &'a str,
    children: Vec<Node<'a>>,
}

impl<'a> Node<'a> {
    fn plan(plan: &'a TestPlan) -> Self {
        Self {
            symbol: PLAN,
            id: plan.id,
            name: &plan.name,
            children: plan.functionalities.iter().map(Self::functionality).collect(),
        }
    }

    fn functionality(functionality: &'a Functionality) -> Self {
        Self {
            symbol: FUNCTIONALITY,
            id: functionality.id,
            name: &functionality.name,
            children: functionality.scenarios.iter().map(Self::scenario).collect(),
        }
    }

    fn scenario(scenario: &'a Scenario) -> Self {
        Self {
            symbol: SCENARIO,
            id: scenario.id,
            name: &scenario.name,
            children: scenario
                .steps
                .iter()
                .map(|step| Self {
                    symbol: STEP,
                    id: step.id,
                    name: &step.name,
                    children: Vec::new(),
                })
                .collect(),
        }
    }
}

/// Render a hierarchy as ASCII art with a marker per level.
///
/// Example output with ids hidden:
/// ```text
/// Root
/// └── ■ Plan A
///     └── ◆ Login
///         └── ○ Valid login
///             ├── • Enter username
///             └── • Submit
/// ```
///
/// Control characters in names (newlines, tabs) are written escaped, so every
/// record stays on one line.
pub fn render_model(model: &HierarchyModel, options: &RenderOptions) -> String {
    let mut output = String::new();
    push_label(&mut output, &model.name, model.id, options);

    let plans: Vec<Node<'_>> = model.test_plans.iter().map(Node::plan).collect();
    for (i, plan) in plans.iter().enumerate() {
        let is_last = i == plans.len() - 1;
        render_node(&mut output, plan, "", is_last, options);
    }
    output
}

fn render_node(
    output: &mut String,
    node: &Node<'_>,
    prefix: &str,
    is_last: bool,
    options: &RenderOptions,
) {
    let branch = if is_last { "└── " } else { "├── " };
    output.push_str(prefix);
    output.push_str(branch);
    output.push(node.symbol);
    output.push(' ');
    push_label(output, node.name, node.id, options);

    let continuation = if is_last { "    " } else { "│   " };
    let child_prefix = format!("{}{}", prefix, continuation);

    for (i, child) in node.children.iter().enumerate() {
        let child_is_last = i == node.children.len() - 1;
        render_node(output, child, &child_prefix, child_is_last, options);
    }
}

fn push_label(output: &mut String, name: &str, id: i64, options: &RenderOptions) {
    // Names are free-form; a raw newline would break the branch layout.
    for c in name.chars() {
        if c.is_control() {
            output.extend(c.escape_default());
        } else {
            output.push(c);
        }
    }
    if options.show_ids {
        output.push_str(&format!(" #{}", id));
    }
    output.push('\n');
}
