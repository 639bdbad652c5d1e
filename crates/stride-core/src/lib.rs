//! Core library for the Stride project planner.
//!
//! This crate turns a free-text project goal ("launch a product in 6 weeks")
//! into a structured plan: ordered phases, each broken into dependent tasks
//! with computed start/end dates, priorities and milestones.
//!
//! # Generation Pipeline
//!
//! - **Goal interpretation** ([`planner::interpreter`]): keyword
//!   classification into a [`ProjectType`] and duration extraction
//! - **Allocation** ([`planner::allocator`]): exact-sum distribution of days
//!   across phases and, within each phase, across tasks
//! - **Sequencing** ([`planner::sequencer`]): contiguous, gap-free date
//!   ranges and single-predecessor dependency chains
//! - **Assembly** ([`planner::assembler`]): the [`Plan`] document with
//!   milestones, remarks and an optional advisory annotation
//!
//! Static phase and task tables live in [`catalog`]. The advisory annotation
//! comes from an external text-generation service behind
//! [`advisor::TextGenerator`] and never affects the plan's structure.
//!
//! # Quick Start
//!
//! ```rust
//! use jiff::civil::date;
//! use stride_core::PlannerBuilder;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = PlannerBuilder::new().build()?;
//!
//! let plan = planner
//!     .generate_plan_from("Build an app", date(2024, 1, 1))
//!     .await?;
//! println!("{}", plan);
//!
//! for phase in &plan.phases {
//!     println!("{}: {} days", phase.name, phase.duration);
//! }
//! # Ok(())
//! # }
//! ```

pub mod advisor;
pub mod catalog;
pub mod display;
pub mod error;
pub mod models;
pub mod planner;

// Re-export commonly used types
pub use advisor::{AdvisorConfig, AdvisorError, TextGenerator};
pub use display::{CalendarDate, DayCount};
pub use error::{PlannerError, Result};
pub use models::{Phase, PhaseTemplate, Plan, Priority, ProjectType, ServiceStatus, Task, TaskTemplate};
pub use planner::{Planner, PlannerBuilder};
