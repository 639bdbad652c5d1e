//! Display formatting for plans.
//!
//! Domain models implement [`std::fmt::Display`] directly and produce
//! markdown, which the CLI renders in the terminal. Small wrapper types cover
//! values that need consistent formatting across models.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │    Wrappers     │    │   Formatted     │
//! │ (Plan, Phase,   │───▶│ (CalendarDate,  │───▶│    Output       │
//! │  Task)          │    │  DayCount)      │    │   (Terminal)    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`datetime`]: Date and day-count formatting utilities
//! - [`models`]: Display implementations for domain models
//!
//! ## Usage Examples
//!
//! ```rust
//! use jiff::civil::date;
//! use stride_core::display::{CalendarDate, DayCount};
//!
//! let day = date(2024, 3, 1);
//! assert_eq!(format!("{}", CalendarDate(&day)), "Fri, 2024-03-01");
//! assert_eq!(format!("{}", DayCount(3)), "3 days");
//! ```

pub mod datetime;
pub mod models;

// Re-export commonly used types for convenience
pub use datetime::{CalendarDate, DayCount};
