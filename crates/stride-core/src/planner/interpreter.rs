//! Goal interpretation: project-type classification and duration extraction.
//!
//! Both functions are pure and never fail. Unrecognized text classifies as
//! [`ProjectType::General`] and yields [`DEFAULT_DURATION_DAYS`].

use std::sync::LazyLock;

use log::debug;
use regex::Regex;

use crate::models::ProjectType;

/// Duration used when the goal names no recognizable length.
pub const DEFAULT_DURATION_DAYS: u32 = 14;

/// Upper bound on an extracted duration (ten years).
pub const MAX_DURATION_DAYS: u32 = 3650;

/// Keyword sets in priority order; the first set with any hit wins.
const KEYWORD_SETS: &[(ProjectType, &[&str])] = &[
    (ProjectType::ProductLaunch, &["product", "launch", "release"]),
    (
        ProjectType::AppDevelopment,
        &["app", "application", "software", "website"],
    ),
    (
        ProjectType::MarketingCampaign,
        &["marketing", "campaign", "promotion"],
    ),
    (ProjectType::EventPlanning, &["event", "conference", "meetup"]),
];

/// Unit families in priority order with their length in days.
const UNITS: &[(&str, u64)] = &[("day", 1), ("week", 7), ("month", 30)];

static DURATION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)([0-9]+)\s*(day|week|month)s?").expect("duration pattern is valid")
});

/// Classifies a goal into a project type by case-insensitive keyword
/// matching.
///
/// # Examples
///
/// ```rust
/// use stride_core::{models::ProjectType, planner::interpreter::classify};
///
/// assert_eq!(classify("Launch a product in 6 weeks"), ProjectType::ProductLaunch);
/// assert_eq!(classify("Build an app"), ProjectType::AppDevelopment);
/// assert_eq!(classify("Paint the fence"), ProjectType::General);
/// ```
pub fn classify(goal: &str) -> ProjectType {
    let goal = goal.to_lowercase();
    let project_type = KEYWORD_SETS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|keyword| goal.contains(keyword)))
        .map_or(ProjectType::General, |(project_type, _)| *project_type);
    debug!("Classified goal as {}", project_type.as_str());
    project_type
}

/// Extracts the total plan length in days from a goal.
///
/// Day counts take precedence over weeks, weeks over months, regardless of
/// where they appear in the text. Within a family the first non-zero match
/// wins. Results are clamped to [`MAX_DURATION_DAYS`].
///
/// # Examples
///
/// ```rust
/// use stride_core::planner::interpreter::extract_duration;
///
/// assert_eq!(extract_duration("Launch a product in 6 weeks"), 42);
/// assert_eq!(extract_duration("Ship in 2 months or 10 days"), 10);
/// assert_eq!(extract_duration("Build an app"), 14);
/// ```
pub fn extract_duration(goal: &str) -> u32 {
    let matches: Vec<(u64, String)> = DURATION_PATTERN
        .captures_iter(goal)
        .map(|caps| {
            // ASCII digits only, so parsing fails only on overflow.
            let count = caps[1].parse::<u64>().unwrap_or(u64::MAX);
            (count, caps[2].to_lowercase())
        })
        .filter(|(count, _)| *count > 0)
        .collect();

    for (unit, days_per_unit) in UNITS {
        if let Some((count, _)) = matches.iter().find(|(_, found)| found == unit) {
            let days = count.saturating_mul(*days_per_unit);
            let days = u32::try_from(days.min(u64::from(MAX_DURATION_DAYS)))
                .unwrap_or(MAX_DURATION_DAYS);
            debug!("Extracted duration of {days} days from {count} {unit}(s)");
            return days;
        }
    }

    debug!("No duration found in goal, using default of {DEFAULT_DURATION_DAYS} days");
    DEFAULT_DURATION_DAYS
}
