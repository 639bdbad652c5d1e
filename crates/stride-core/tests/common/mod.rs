use jiff::civil::{Date, date};
use stride_core::{Planner, PlannerBuilder};

/// Fixed start date so generated plans are reproducible.
pub const START: Date = date(2024, 3, 1);

/// Helper function to create a planner without advisory text
pub fn create_test_planner() -> Planner {
    PlannerBuilder::new()
        .build()
        .expect("Failed to create planner")
}
