//! Plan generation operations for the Planner.

use jiff::{Zoned, civil::Date};
use log::{debug, info};

use super::{
    Planner,
    allocator::{allocate_phase_durations, allocate_task_durations},
    assembler::{Assembly, assemble},
    interpreter::{classify, extract_duration},
    sequencer::sequence,
};
use crate::{
    advisor::{self, MIN_SUGGESTION_INPUT_CHARS, SUGGESTIONS_UNAVAILABLE},
    catalog,
    error::{PlannerError, Result},
    models::{Phase, Plan, ProjectType, ServiceStatus},
};

/// Allocates and sequences every phase of `project_type`, chaining each
/// phase's start date from the previous phase's end.
///
/// # Errors
///
/// Returns an internal error if allocation breaks its invariants or a date
/// leaves the supported calendar.
pub fn schedule_phases(
    project_type: ProjectType,
    total_duration: u32,
    start_date: Date,
) -> Result<Vec<Phase>> {
    let names = catalog::phase_names(project_type);
    let phase_durations = allocate_phase_durations(project_type, total_duration)?;

    let mut cursor = start_date;
    let mut phases = Vec::with_capacity(names.len());
    for (name, &duration) in names.iter().zip(&phase_durations) {
        let template = catalog::phase_template(name);
        let task_durations = allocate_task_durations(&template, duration)?;
        let sequenced = sequence(&template, &task_durations, cursor)?;
        debug!(
            "Scheduled phase {name}: {duration} days, {} tasks from {cursor}",
            sequenced.tasks.len()
        );

        phases.push(Phase {
            name: (*name).to_string(),
            duration,
            start_date: cursor,
            tasks: sequenced.tasks,
        });
        cursor = sequenced.next_start;
    }

    Ok(phases)
}

/// Rejects missing or blank goals.
fn validate_goal(goal: &str) -> Result<()> {
    if goal.trim().is_empty() {
        return Err(PlannerError::invalid_input("goal").with_reason("Goal is required"));
    }
    Ok(())
}

impl Planner {
    /// Generates a plan starting today in the system time zone.
    pub async fn generate_plan(&self, goal: &str) -> Result<Plan> {
        let today = Zoned::now().date();
        self.generate_plan_from(goal, today).await
    }

    /// Generates a plan for `goal` starting on `start_date`.
    ///
    /// Generation is all-or-nothing: on error no partial plan is returned.
    /// Advisory text failures never cause an error.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::InvalidInput` for an empty goal, and an
    /// internal error if scheduling fails.
    pub async fn generate_plan_from(&self, goal: &str, start_date: Date) -> Result<Plan> {
        validate_goal(goal)?;

        let project_type = classify(goal);
        let total_duration = extract_duration(goal);
        info!(
            "Generating {} plan of {total_duration} days starting {start_date}",
            project_type.as_str()
        );

        let phases = schedule_phases(project_type, total_duration, start_date)?;
        let advisory = self
            .plan_insight(goal, phases.len(), total_duration)
            .await;

        assemble(Assembly {
            goal: goal.to_string(),
            project_type,
            total_duration,
            start_date,
            phases,
            advisory,
            ai_enhanced: self.ai_available(),
        })
    }

    /// Advisory insight for a plan, or an empty string.
    async fn plan_insight(&self, goal: &str, phase_count: usize, total_duration: u32) -> String {
        match &self.advisor {
            Some(generator) => {
                let prompt = advisor::insight_prompt(goal, phase_count, total_duration);
                advisor::advise(generator.as_ref(), &prompt).await
            }
            None => String::new(),
        }
    }

    /// Suggests a complete goal for partially typed text.
    ///
    /// Never fails: without an advisory service a fixed hint is returned, and
    /// short input or service failures give an empty suggestion.
    pub async fn suggest_goal(&self, partial_goal: &str) -> String {
        let Some(generator) = &self.advisor else {
            return SUGGESTIONS_UNAVAILABLE.to_string();
        };
        if partial_goal.chars().count() < MIN_SUGGESTION_INPUT_CHARS {
            return String::new();
        }

        let prompt = advisor::suggestion_prompt(partial_goal);
        let raw = advisor::advise(generator.as_ref(), &prompt).await;
        advisor::truncate_advisory(&advisor::clean_suggestion(&raw))
    }

    /// Reports service health and capabilities.
    pub fn status(&self) -> ServiceStatus {
        ServiceStatus::online(self.ai_available())
    }
}
