//! Display implementations for domain models.
//!
//! This module contains all Display trait implementations for the core domain
//! models, separated from the model definitions to maintain clean separation of
//! concerns.
//!
//! The Display implementations provide:
//! - Markdown-formatted output for rich terminal display
//! - Consistent date formatting and priority icons
//! - Compact task lines nested under phase headers

use std::fmt;

use super::datetime::{CalendarDate, DayCount};
use crate::models::{Phase, Plan, Priority, ProjectType, Task};

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "- **{}** ({}) {} → {} ({})",
            self.name,
            self.priority.with_icon(),
            CalendarDate(&self.start_date),
            CalendarDate(&self.end_date),
            DayCount(self.duration)
        )?;
        writeln!(f, "  {}", self.description)?;
        if !self.dependencies.is_empty() {
            writeln!(f, "  After: {}", self.dependencies.join(", "))?;
        }
        Ok(())
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {} ({})", self.name, DayCount(self.duration))?;
        writeln!(f)?;

        if self.tasks.is_empty() {
            writeln!(f, "No tasks scheduled in this phase.")?;
        } else {
            for task in &self.tasks {
                write!(f, "{task}")?;
            }
        }
        writeln!(f)?;

        Ok(())
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.goal)?;
        writeln!(f)?;

        // Metadata section
        writeln!(f, "- Type: {}", self.project_type.title())?;
        writeln!(f, "- Duration: {}", DayCount(self.total_duration))?;
        writeln!(f, "- Start: {}", CalendarDate(&self.start_date))?;
        writeln!(f, "- End: {}", CalendarDate(&self.end_date))?;
        writeln!(f)?;

        for phase in &self.phases {
            write!(f, "{phase}")?;
        }

        if !self.milestones.is_empty() {
            writeln!(f, "## Milestones")?;
            writeln!(f)?;
            for milestone in &self.milestones {
                writeln!(f, "- {milestone}")?;
            }
            writeln!(f)?;
        }

        writeln!(f, "## Summary")?;
        writeln!(f)?;
        writeln!(f, "{}", self.remarks)?;

        Ok(())
    }
}
