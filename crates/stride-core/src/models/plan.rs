//! Plan and phase model definitions.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::{ProjectType, Task};

/// A named stage of a plan with its scheduled tasks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Phase {
    /// Phase name, e.g. `Testing`
    #[serde(rename = "phase")]
    pub name: String,

    /// Days allocated to the phase
    pub duration: u32,

    /// First day of the phase
    pub start_date: Date,

    /// Scheduled tasks in template order (zero-day tasks are omitted)
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl Phase {
    /// Date the phase finishes: the last task's end date, or the phase start
    /// date when the phase emitted no tasks.
    pub fn completion_date(&self) -> Date {
        self.tasks
            .last()
            .map_or(self.start_date, |task| task.end_date)
    }
}

/// Represents a complete generated plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Plan {
    /// The free-text goal the plan was generated from
    pub goal: String,

    /// Classified project type
    pub project_type: ProjectType,

    /// Requested total length of the plan in days
    pub total_duration: u32,

    /// First day of the plan
    pub start_date: Date,

    /// Last day of the plan, always `start_date + total_duration - 1`
    pub end_date: Date,

    /// Ordered phases
    pub phases: Vec<Phase>,

    /// Completion markers for the first, middle and last phases
    pub milestones: Vec<String>,

    /// Summary sentence, with the advisory text appended when present
    pub remarks: String,

    /// Decorative text from the advisory collaborator (possibly empty)
    #[serde(default)]
    pub advisory: String,

    /// Whether an advisory collaborator was configured
    #[serde(default)]
    pub ai_enhanced: bool,
}
