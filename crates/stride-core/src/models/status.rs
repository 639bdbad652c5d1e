//! Enumerations for project types and task priorities.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of the project categories a goal can be classified
/// into.
///
/// The project type selects the ordered phase sequence and the phase weight
/// vector used by the allocator.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProjectType {
    /// Shipping a product to market
    ProductLaunch,

    /// Building an application, website or other software
    AppDevelopment,

    /// Running a marketing or promotional campaign
    MarketingCampaign,

    /// Organizing an event, conference or meetup
    EventPlanning,

    /// Anything that matched no keyword set
    #[default]
    #[serde(rename = "default")]
    General,
}

impl FromStr for ProjectType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "product_launch" => Ok(ProjectType::ProductLaunch),
            "app_development" => Ok(ProjectType::AppDevelopment),
            "marketing_campaign" => Ok(ProjectType::MarketingCampaign),
            "event_planning" => Ok(ProjectType::EventPlanning),
            "default" | "general" => Ok(ProjectType::General),
            _ => Err(format!("Invalid project type: {s}")),
        }
    }
}

impl ProjectType {
    /// Every project type, in keyword priority order followed by the fallback.
    pub const ALL: [ProjectType; 5] = [
        ProjectType::ProductLaunch,
        ProjectType::AppDevelopment,
        ProjectType::MarketingCampaign,
        ProjectType::EventPlanning,
        ProjectType::General,
    ];

    /// Wire representation of the project type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectType::ProductLaunch => "product_launch",
            ProjectType::AppDevelopment => "app_development",
            ProjectType::MarketingCampaign => "marketing_campaign",
            ProjectType::EventPlanning => "event_planning",
            ProjectType::General => "default",
        }
    }

    /// Human-readable title, e.g. `Product Launch`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stride_core::models::ProjectType;
    ///
    /// assert_eq!(ProjectType::ProductLaunch.title(), "Product Launch");
    /// assert_eq!(ProjectType::General.title(), "Default");
    /// ```
    pub fn title(&self) -> String {
        self.as_str()
            .split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Type-safe enumeration of task priorities.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "high" => Ok(Priority::High),
            "medium" => Ok(Priority::Medium),
            "low" => Ok(Priority::Low),
            _ => Err(format!("Invalid priority: {s}")),
        }
    }
}

impl Priority {
    /// Wire representation of the priority.
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }

    /// Get the priority with an icon for display.
    ///
    /// # Icons Used
    /// - `▲ High`
    /// - `● Medium`
    /// - `▽ Low`
    pub fn with_icon(&self) -> &'static str {
        match self {
            Priority::High => "▲ High",
            Priority::Medium => "● Medium",
            Priority::Low => "▽ Low",
        }
    }
}
