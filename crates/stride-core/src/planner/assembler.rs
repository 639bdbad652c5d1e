//! Composes scheduled phases into the final plan document.

use jiff::{ToSpan, civil::Date};

use crate::{
    error::{DateResultExt, Result},
    models::{Phase, Plan, ProjectType},
};

/// Everything the assembler needs to produce a [`Plan`].
#[derive(Debug, Clone)]
pub struct Assembly {
    pub goal: String,
    pub project_type: ProjectType,
    pub total_duration: u32,
    pub start_date: Date,
    pub phases: Vec<Phase>,
    pub advisory: String,
    pub ai_enhanced: bool,
}

/// Builds the plan document.
///
/// The end date comes from the requested duration, never from the scheduled
/// phases, so `end_date - start_date + 1 == total_duration` always holds.
pub fn assemble(assembly: Assembly) -> Result<Plan> {
    let Assembly {
        goal,
        project_type,
        total_duration,
        start_date,
        phases,
        advisory,
        ai_enhanced,
    } = assembly;

    let end_date = start_date
        .checked_add(i64::from(total_duration.saturating_sub(1)).days())
        .date_context("computing plan end date")?;
    let milestones = milestones(&phases);
    let remarks = remarks(project_type, phases.len(), total_duration, &advisory);

    Ok(Plan {
        goal,
        project_type,
        total_duration,
        start_date,
        end_date,
        phases,
        milestones,
        remarks,
        advisory,
        ai_enhanced,
    })
}

/// Milestones for the first, middle and last phases, in that order.
///
/// With two or fewer phases the indices coincide and the duplicate entries
/// are kept.
pub fn milestones(phases: &[Phase]) -> Vec<String> {
    let Some(last) = phases.len().checked_sub(1) else {
        return Vec::new();
    };
    [0, phases.len() / 2, last]
        .into_iter()
        .map(|index| {
            let phase = &phases[index];
            format!("{} Complete ({})", phase.name, phase.completion_date())
        })
        .collect()
}

/// Summary sentence, with the advisory text appended when present.
pub fn remarks(
    project_type: ProjectType,
    phase_count: usize,
    total_duration: u32,
    advisory: &str,
) -> String {
    let base = format!(
        "Optimized {} plan with {phase_count} phases across {total_duration} days. \
         Timeline accounts for dependencies and realistic task allocation.",
        project_type.title()
    );
    if advisory.is_empty() {
        base
    } else {
        format!("{base} {advisory}")
    }
}
