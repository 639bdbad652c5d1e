//! Task model definition and related functionality.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::Priority;

/// Represents a scheduled unit of work within a phase.
///
/// Tasks are produced once by the sequencer and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    /// Name of the task, unique within its phase
    #[serde(rename = "task_name")]
    pub name: String,

    /// What the task involves
    pub description: String,

    /// Length of the task in days (always at least 1 for emitted tasks)
    pub duration: u32,

    /// First day of work (inclusive)
    pub start_date: Date,

    /// Last day of work (inclusive)
    pub end_date: Date,

    /// Name of the preceding task in the same phase, if any
    #[serde(default)]
    pub dependencies: Vec<String>,

    /// Priority carried over from the task template
    pub priority: Priority,
}
