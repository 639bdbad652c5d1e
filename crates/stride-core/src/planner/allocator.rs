//! Duration allocation across phases and tasks.
//!
//! Both levels use [`distribute_exactly`]: round each weighted share half up,
//! enforce a per-item floor, then correct the rounding drift one day at a time
//! until the parts sum to the whole. Only the choice of which item to adjust
//! differs between the two levels (see [`Correction`]).
//!
//! When the budget cannot give every item its floor, exact-sum wins: the
//! first items in order receive the floor and the rest receive zero. A
//! zero-day phase emits no tasks and a zero-day task is omitted from its
//! phase.

use std::cmp::Ordering;

use log::debug;

use crate::{
    catalog,
    error::{PlannerError, Result},
    models::{PhaseTemplate, ProjectType},
};

/// Strategy for choosing which item absorbs each day of rounding drift.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Correction {
    /// Adjust items in index order `i % len`, skipping items already at the
    /// floor when removing days.
    RoundRobin,
    /// Add days to the item with the highest weight, remove days from the
    /// item with the highest current allocation. Ties go to the first item.
    Extremal,
}

/// Splits `total` into one non-negative count per weight so that the counts
/// sum exactly to `total`.
///
/// Every item receives at least `floor` when `total` allows it. Otherwise the
/// first `total / floor` items receive `floor` (the last of them possibly
/// less) and the remaining items receive zero.
///
/// The correction loop runs at most once per day of drift, and each step
/// finds its target in at most `weights.len()` probes.
///
/// # Examples
///
/// ```rust
/// use stride_core::planner::allocator::{distribute_exactly, Correction};
///
/// let parts = distribute_exactly(&[0.5, 0.5], 3, 1, Correction::Extremal);
/// assert_eq!(parts.iter().sum::<u32>(), 3);
///
/// let parts = distribute_exactly(&[0.3, 0.35, 0.35], 2, 1, Correction::Extremal);
/// assert_eq!(parts, vec![1, 1, 0]);
/// ```
pub fn distribute_exactly(
    weights: &[f64],
    total: u32,
    floor: u32,
    correction: Correction,
) -> Vec<u32> {
    let count = weights.len();
    if count == 0 {
        return Vec::new();
    }

    if u64::from(total) < u64::from(floor) * count as u64 {
        let mut remaining = total;
        return weights
            .iter()
            .map(|_| {
                let share = remaining.min(floor);
                remaining -= share;
                share
            })
            .collect();
    }

    let mut parts: Vec<u32> = weights
        .iter()
        .map(|weight| {
            // Float-to-int casts saturate, so negative or NaN weights give 0.
            let raw = (f64::from(total) * weight).round() as u32;
            raw.max(floor)
        })
        .collect();

    let assigned: u64 = parts.iter().map(|&part| u64::from(part)).sum();
    match assigned.cmp(&u64::from(total)) {
        Ordering::Less => {
            let missing = u64::from(total) - assigned;
            for step in 0..missing {
                let index = match correction {
                    Correction::RoundRobin => (step % count as u64) as usize,
                    Correction::Extremal => heaviest_weight(weights, &parts),
                };
                parts[index] += 1;
            }
        }
        Ordering::Greater => {
            let excess = assigned - u64::from(total);
            let mut cursor = 0;
            for _ in 0..excess {
                let target = match correction {
                    Correction::RoundRobin => next_above_floor(&parts, floor, &mut cursor),
                    Correction::Extremal => largest_above_floor(&parts, floor),
                };
                // Floors sum to at most `total`, so an excess always leaves
                // some item above the floor.
                let Some(index) = target else { break };
                parts[index] -= 1;
            }
        }
        Ordering::Equal => {}
    }

    parts
}

/// Index of the highest weight among items with a non-zero allocation (or
/// among all items if none is non-zero), first maximum wins.
fn heaviest_weight(weights: &[f64], parts: &[u32]) -> usize {
    let any_allocated = parts.iter().any(|&part| part > 0);
    let mut best: Option<usize> = None;
    for (index, weight) in weights.iter().enumerate() {
        if any_allocated && parts[index] == 0 {
            continue;
        }
        match best {
            Some(current) if weights[current] >= *weight => {}
            _ => best = Some(index),
        }
    }
    best.unwrap_or(0)
}

/// Index of the largest allocation still above the floor, first maximum wins.
fn largest_above_floor(parts: &[u32], floor: u32) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (index, &part) in parts.iter().enumerate() {
        if part <= floor {
            continue;
        }
        match best {
            Some(current) if parts[current] >= part => {}
            _ => best = Some(index),
        }
    }
    best
}

/// Next index in round-robin order whose allocation is above the floor.
fn next_above_floor(parts: &[u32], floor: u32, cursor: &mut usize) -> Option<usize> {
    for _ in 0..parts.len() {
        let index = *cursor % parts.len();
        *cursor += 1;
        if parts[index] > floor {
            return Some(index);
        }
    }
    None
}

/// Weight vector for a project's phases: the hand-tuned vector when its length
/// matches the phase count, otherwise a uniform split.
pub fn phase_weight_vector(weights: Option<&[f64]>, phase_count: usize) -> Vec<f64> {
    match weights {
        Some(weights) if weights.len() == phase_count => weights.to_vec(),
        _ => vec![1.0 / phase_count as f64; phase_count],
    }
}

/// Computes one day count per phase of `project_type`, summing exactly to
/// `total_duration`.
///
/// Each phase gets at least one day whenever `total_duration` is at least the
/// number of phases. Below that, the first `total_duration` phases get one day
/// each and the rest get zero.
pub fn allocate_phase_durations(project_type: ProjectType, total_duration: u32) -> Result<Vec<u32>> {
    let phase_count = catalog::phase_names(project_type).len();
    let weights = phase_weight_vector(catalog::phase_weights(project_type), phase_count);
    let durations = distribute_exactly(&weights, total_duration, 1, Correction::RoundRobin);
    debug!(
        "Allocated {total_duration} days across {} phases: {durations:?}",
        project_type.as_str()
    );
    ensure_exact_sum(&durations, total_duration, "phase")?;
    Ok(durations)
}

/// Computes one day count per task template in `template`, summing exactly to
/// `phase_duration`.
///
/// When the phase has fewer days than tasks, the first `phase_duration` tasks
/// get one day each and later tasks get zero, which drops them from the plan.
pub fn allocate_task_durations(template: &PhaseTemplate, phase_duration: u32) -> Result<Vec<u32>> {
    let durations = distribute_exactly(
        &template.ratios(),
        phase_duration,
        1,
        Correction::Extremal,
    );
    debug!(
        "Allocated {phase_duration} days across tasks of {}: {durations:?}",
        template.name
    );
    ensure_exact_sum(&durations, phase_duration, "task")?;
    Ok(durations)
}

fn ensure_exact_sum(parts: &[u32], expected: u32, level: &str) -> Result<()> {
    let actual: u64 = parts.iter().map(|&part| u64::from(part)).sum();
    if actual != u64::from(expected) {
        return Err(PlannerError::Allocation {
            message: format!("{level} durations sum to {actual}, expected {expected}"),
        });
    }
    Ok(())
}
