//! Turns per-task day counts into contiguous date ranges.

use jiff::{ToSpan, civil::Date};
use log::debug;

use crate::{
    error::{DateResultExt, PlannerError, Result},
    models::{PhaseTemplate, Task},
};

/// Scheduled tasks of one phase plus the day the next phase starts on.
#[derive(Debug, Clone, PartialEq)]
pub struct SequencedPhase {
    pub tasks: Vec<Task>,
    pub next_start: Date,
}

/// Lays out the tasks of `template` back to back starting at `phase_start`.
///
/// Tasks with a zero-day allocation are skipped entirely: they get no dates
/// and no later task depends on them. Each emitted task depends on the
/// nearest preceding emitted task.
///
/// # Errors
///
/// Returns [`PlannerError::Allocation`] if `durations` does not have one
/// entry per task template, and [`PlannerError::DateOutOfRange`] if a date
/// falls outside the supported calendar.
pub fn sequence(
    template: &PhaseTemplate,
    durations: &[u32],
    phase_start: Date,
) -> Result<SequencedPhase> {
    if durations.len() != template.tasks.len() {
        return Err(PlannerError::Allocation {
            message: format!(
                "phase {} has {} task templates but {} durations",
                template.name,
                template.tasks.len(),
                durations.len()
            ),
        });
    }

    let mut cursor = phase_start;
    let mut tasks: Vec<Task> = Vec::with_capacity(durations.len());

    for (task_template, &duration) in template.tasks.iter().zip(durations) {
        if duration == 0 {
            debug!("Omitting zero-day task {}", task_template.name);
            continue;
        }

        let start_date = cursor;
        let end_date = start_date
            .checked_add(i64::from(duration - 1).days())
            .date_context("computing task end date")?;
        cursor = end_date
            .checked_add(1.day())
            .date_context("advancing past task end date")?;

        let dependencies = tasks
            .last()
            .map(|previous| vec![previous.name.clone()])
            .unwrap_or_default();

        tasks.push(Task {
            name: task_template.name.to_string(),
            description: task_template.description.to_string(),
            duration,
            start_date,
            end_date,
            dependencies,
            priority: task_template.priority,
        });
    }

    Ok(SequencedPhase {
        tasks,
        next_start: cursor,
    })
}
