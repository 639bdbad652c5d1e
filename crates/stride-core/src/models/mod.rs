//! Data models for generated plans and the templates behind them.
//!
//! Runtime models ([`Plan`], [`Phase`], [`Task`]) are produced once by the
//! engine and are immutable afterwards. Template models ([`PhaseTemplate`],
//! [`TaskTemplate`]) are static lookup data provided by [`crate::catalog`].
//! Display implementations for these models live in
//! [`crate::display::models`].
//!
//! # Examples
//!
//! ```rust
//! use jiff::civil::date;
//! use stride_core::models::{Priority, Task};
//!
//! let task = Task {
//!     name: "Unit Testing".to_string(),
//!     description: "Test individual components".to_string(),
//!     duration: 3,
//!     start_date: date(2024, 3, 1),
//!     end_date: date(2024, 3, 3),
//!     dependencies: vec![],
//!     priority: Priority::High,
//! };
//! println!("{}", task); // Markdown line with dates and priority
//! ```

pub mod plan;
pub mod service;
pub mod status;
pub mod task;
pub mod template;


pub use plan::{Phase, Plan};
pub use service::ServiceStatus;
pub use status::{Priority, ProjectType};
pub use task::Task;
pub use template::{PhaseTemplate, TaskTemplate};
