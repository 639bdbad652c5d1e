//! Static template types that drive task generation.

use std::borrow::Cow;

use super::Priority;

/// Blueprint for a single task inside a phase.
///
/// `ratio` is a relative weight in `(0, 1]`; ratios within one phase need not
/// sum to 1.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskTemplate {
    pub name: Cow<'static, str>,
    pub description: Cow<'static, str>,
    pub ratio: f64,
    pub priority: Priority,
}

impl TaskTemplate {
    /// Builds a template from static strings, usable in `const` tables.
    pub const fn fixed(
        name: &'static str,
        description: &'static str,
        ratio: f64,
        priority: Priority,
    ) -> Self {
        Self {
            name: Cow::Borrowed(name),
            description: Cow::Borrowed(description),
            ratio,
            priority,
        }
    }
}

/// An ordered list of task templates scoped to a phase name.
#[derive(Debug, Clone, PartialEq)]
pub struct PhaseTemplate {
    pub name: Cow<'static, str>,
    pub tasks: Cow<'static, [TaskTemplate]>,
}

impl PhaseTemplate {
    /// Synthetic two-task template for phase names with no registered tasks.
    pub fn generic(name: &str) -> Self {
        Self {
            name: Cow::Owned(name.to_string()),
            tasks: Cow::Owned(vec![
                TaskTemplate {
                    name: Cow::Owned(format!("{name} Task 1")),
                    description: Cow::Owned(format!("Complete first task of {name}")),
                    ratio: 0.5,
                    priority: Priority::High,
                },
                TaskTemplate {
                    name: Cow::Owned(format!("{name} Task 2")),
                    description: Cow::Owned(format!("Complete second task of {name}")),
                    ratio: 0.5,
                    priority: Priority::Medium,
                },
            ]),
        }
    }

    /// Relative weights of the tasks, in template order.
    pub fn ratios(&self) -> Vec<f64> {
        self.tasks.iter().map(|task| task.ratio).collect()
    }
}
