//! High-level planner API for turning goals into plans.
//!
//! This module provides the main [`Planner`] interface. The planner runs the
//! generation pipeline and owns the optional advisory text collaborator.
//!
//! # Architecture Overview
//!
//! ```text
//! ┌─────────────┐   ┌─────────────┐   ┌─────────────┐   ┌─────────────┐
//! │ Interpreter │──▶│  Allocator  │──▶│  Sequencer  │──▶│  Assembler  │
//! │ type + days │   │ phase/task  │   │ dates, deps │   │ milestones  │
//! └─────────────┘   └─────────────┘   └─────────────┘   └─────────────┘
//!                                       once per phase        ▲
//!                                                             │
//!                                                   advisory text (optional)
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`Planner`] instances with configuration
//! - [`interpreter`]: Project-type classification and duration extraction
//! - [`allocator`]: Exact-sum day allocation for phases and tasks
//! - [`sequencer`]: Contiguous date ranges and dependency chains
//! - [`assembler`]: Plan document, milestones and remarks
//! - [`generate`]: The end-to-end pipeline on [`Planner`]
//!
//! Generation is synchronous apart from the single advisory call. The start
//! date is read once per request and held for the whole pipeline.
//!
//! # Usage Examples
//!
//! ```rust
//! use jiff::civil::date;
//! use stride_core::PlannerBuilder;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = PlannerBuilder::new().build()?;
//!
//! let plan = planner
//!     .generate_plan_from("Launch a product in 6 weeks", date(2024, 3, 1))
//!     .await?;
//! assert_eq!(plan.total_duration, 42);
//! assert_eq!(plan.end_date, date(2024, 4, 11));
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use crate::advisor::TextGenerator;

// Module declarations
pub mod allocator;
pub mod assembler;
pub mod builder;
pub mod generate;
pub mod interpreter;
pub mod sequencer;

#[cfg(test)]
mod tests;

// Re-export the main types
pub use builder::PlannerBuilder;
pub use generate::schedule_phases;

/// Main planner interface for generating plans.
///
/// A planner holds no mutable state, so one instance can serve any number of
/// concurrent requests.
#[derive(Clone)]
pub struct Planner {
    pub(crate) advisor: Option<Arc<dyn TextGenerator>>,
}

impl Planner {
    /// Creates a new planner with an optional advisory collaborator.
    pub(crate) fn new(advisor: Option<Arc<dyn TextGenerator>>) -> Self {
        Self { advisor }
    }

    /// Whether advisory text is available.
    pub fn ai_available(&self) -> bool {
        self.advisor.is_some()
    }
}
