//! Static planning tables: phase sequences, phase weights and task templates.
//!
//! Phase names are shared across project types and always resolve to the same
//! task list. A project type that needed its own variant of, say, `Planning`
//! would need a different keying scheme than the global by-name lookup here.

use std::borrow::Cow;

use crate::models::{
    PhaseTemplate, Priority::{High, Low, Medium}, ProjectType, TaskTemplate,
};

/// Ordered phase names for a project type.
pub fn phase_names(project_type: ProjectType) -> &'static [&'static str] {
    match project_type {
        ProjectType::ProductLaunch => &[
            "Planning",
            "Design",
            "Development",
            "Testing",
            "Marketing",
            "Deployment",
        ],
        ProjectType::AppDevelopment => &[
            "Planning",
            "UI/UX Design",
            "Frontend Development",
            "Backend Development",
            "Testing",
            "Deployment",
        ],
        ProjectType::MarketingCampaign => &[
            "Research",
            "Strategy",
            "Content Creation",
            "Channel Setup",
            "Execution",
            "Analysis",
        ],
        ProjectType::EventPlanning => &[
            "Concept",
            "Planning",
            "Logistics",
            "Marketing",
            "Execution",
            "Follow-up",
        ],
        ProjectType::General => &["Planning", "Execution", "Review", "Completion"],
    }
}

/// Hand-tuned phase weights, or `None` for a uniform split.
pub fn phase_weights(project_type: ProjectType) -> Option<&'static [f64]> {
    match project_type {
        // Planning, Design, Development, Testing, Marketing, Deployment
        ProjectType::ProductLaunch => Some(&[0.12, 0.15, 0.28, 0.18, 0.15, 0.12]),
        // Planning, UI/UX, Frontend, Backend, Testing, Deployment
        ProjectType::AppDevelopment => Some(&[0.10, 0.15, 0.25, 0.25, 0.15, 0.10]),
        // Research, Strategy, Content, Channels, Execution, Analysis
        ProjectType::MarketingCampaign => Some(&[0.15, 0.15, 0.25, 0.15, 0.20, 0.10]),
        // Concept, Planning, Logistics, Marketing, Execution, Follow-up
        ProjectType::EventPlanning => Some(&[0.12, 0.18, 0.25, 0.15, 0.20, 0.10]),
        ProjectType::General => None,
    }
}

/// Resolves a phase name to its task template, falling back to a generic
/// two-task template for unknown names.
pub fn phase_template(name: &str) -> PhaseTemplate {
    match registered_tasks(name) {
        Some(tasks) => PhaseTemplate {
            name: Cow::Owned(name.to_string()),
            tasks: Cow::Borrowed(tasks),
        },
        None => PhaseTemplate::generic(name),
    }
}

fn registered_tasks(name: &str) -> Option<&'static [TaskTemplate]> {
    let tasks: &'static [TaskTemplate] = match name {
        "Planning" => PLANNING,
        "Design" => DESIGN,
        "UI/UX Design" => UI_UX_DESIGN,
        "Development" => DEVELOPMENT,
        "Frontend Development" => FRONTEND_DEVELOPMENT,
        "Backend Development" => BACKEND_DEVELOPMENT,
        "Testing" => TESTING,
        "Marketing" => MARKETING,
        "Deployment" => DEPLOYMENT,
        "Research" => RESEARCH,
        "Strategy" => STRATEGY,
        "Content Creation" => CONTENT_CREATION,
        "Channel Setup" => CHANNEL_SETUP,
        "Execution" => EXECUTION,
        "Analysis" => ANALYSIS,
        "Concept" => CONCEPT,
        "Logistics" => LOGISTICS,
        "Follow-up" => FOLLOW_UP,
        "Review" => REVIEW,
        "Completion" => COMPLETION,
        _ => return None,
    };
    Some(tasks)
}

const PLANNING: &[TaskTemplate] = &[
    TaskTemplate::fixed("Market Research", "Analyze competitors and target audience", 0.3, High),
    TaskTemplate::fixed("Define Requirements", "Document features and specifications", 0.35, High),
    TaskTemplate::fixed("Create Project Roadmap", "Set milestones and timeline", 0.35, Medium),
];

const DESIGN: &[TaskTemplate] = &[
    TaskTemplate::fixed("Wireframing", "Create low-fidelity layouts", 0.25, High),
    TaskTemplate::fixed("UI Design", "Design high-fidelity mockups", 0.45, High),
    TaskTemplate::fixed("Design Review", "Review and refine designs", 0.3, Medium),
];

const UI_UX_DESIGN: &[TaskTemplate] = &[
    TaskTemplate::fixed("User Research", "Understand user needs and behavior", 0.25, High),
    TaskTemplate::fixed("Wireframes & Prototypes", "Create interactive prototypes", 0.4, High),
    TaskTemplate::fixed("Visual Design", "Apply branding and polish UI", 0.35, Medium),
];

const DEVELOPMENT: &[TaskTemplate] = &[
    TaskTemplate::fixed("Setup Development Environment", "Configure tools and frameworks", 0.15, High),
    TaskTemplate::fixed("Core Feature Development", "Build main functionality", 0.6, High),
    TaskTemplate::fixed("Integration & Bug Fixes", "Integrate components and fix issues", 0.25, High),
];

const FRONTEND_DEVELOPMENT: &[TaskTemplate] = &[
    TaskTemplate::fixed("Component Architecture", "Set up component structure", 0.2, High),
    TaskTemplate::fixed("UI Implementation", "Build user interface", 0.5, High),
    TaskTemplate::fixed("State Management", "Implement data flow", 0.3, Medium),
];

const BACKEND_DEVELOPMENT: &[TaskTemplate] = &[
    TaskTemplate::fixed("Database Design", "Design schema and relationships", 0.25, High),
    TaskTemplate::fixed("API Development", "Build REST/GraphQL endpoints", 0.5, High),
    TaskTemplate::fixed("Security & Authentication", "Implement auth and security", 0.25, High),
];

const TESTING: &[TaskTemplate] = &[
    TaskTemplate::fixed("Unit Testing", "Test individual components", 0.3, High),
    TaskTemplate::fixed("Integration Testing", "Test system integration", 0.35, High),
    TaskTemplate::fixed("User Acceptance Testing", "Get user feedback", 0.35, Medium),
];

const MARKETING: &[TaskTemplate] = &[
    TaskTemplate::fixed("Create Marketing Materials", "Design promotional content", 0.4, High),
    TaskTemplate::fixed("Social Media Campaign", "Launch social media presence", 0.35, Medium),
    TaskTemplate::fixed("PR & Outreach", "Contact media and influencers", 0.25, Medium),
];

const DEPLOYMENT: &[TaskTemplate] = &[
    TaskTemplate::fixed("Prepare Production Environment", "Setup servers and infrastructure", 0.3, High),
    TaskTemplate::fixed("Deploy to Production", "Launch the application", 0.4, High),
    TaskTemplate::fixed("Monitor & Optimize", "Track performance and fix issues", 0.3, High),
];

const RESEARCH: &[TaskTemplate] = &[
    TaskTemplate::fixed("Market Analysis", "Study market trends and opportunities", 0.5, High),
    TaskTemplate::fixed("Competitor Research", "Analyze competitor strategies", 0.5, High),
];

const STRATEGY: &[TaskTemplate] = &[
    TaskTemplate::fixed("Define Target Audience", "Identify and segment audience", 0.4, High),
    TaskTemplate::fixed("Set Campaign Goals", "Define KPIs and objectives", 0.6, High),
];

const CONTENT_CREATION: &[TaskTemplate] = &[
    TaskTemplate::fixed("Content Planning", "Plan content calendar", 0.3, Medium),
    TaskTemplate::fixed("Create Content", "Write, design, and produce content", 0.7, High),
];

const CHANNEL_SETUP: &[TaskTemplate] = &[
    TaskTemplate::fixed("Setup Social Media", "Configure social media accounts", 0.4, High),
    TaskTemplate::fixed("Setup Analytics", "Configure tracking and analytics", 0.3, Medium),
    TaskTemplate::fixed("Test Channels", "Verify all channels are working", 0.3, High),
];

const EXECUTION: &[TaskTemplate] = &[
    TaskTemplate::fixed("Implementation", "Execute planned activities", 0.7, High),
    TaskTemplate::fixed("Monitoring", "Track progress and adjust", 0.3, Medium),
];

const ANALYSIS: &[TaskTemplate] = &[
    TaskTemplate::fixed("Collect Data", "Gather performance metrics", 0.3, High),
    TaskTemplate::fixed("Analyze Results", "Evaluate campaign effectiveness", 0.4, High),
    TaskTemplate::fixed("Report Findings", "Create performance report", 0.3, Medium),
];

const CONCEPT: &[TaskTemplate] = &[
    TaskTemplate::fixed("Define Event Vision", "Establish event goals and theme", 0.5, High),
    TaskTemplate::fixed("Budget Planning", "Create initial budget estimate", 0.5, High),
];

const LOGISTICS: &[TaskTemplate] = &[
    TaskTemplate::fixed("Venue Selection", "Research and book venue", 0.35, High),
    TaskTemplate::fixed("Vendor Coordination", "Contract with suppliers and vendors", 0.35, High),
    TaskTemplate::fixed("Timeline Creation", "Develop detailed event schedule", 0.3, Medium),
];

const FOLLOW_UP: &[TaskTemplate] = &[
    TaskTemplate::fixed("Thank You Communications", "Send thank you messages to attendees", 0.3, Medium),
    TaskTemplate::fixed("Collect Feedback", "Gather and analyze attendee feedback", 0.4, High),
    TaskTemplate::fixed("Final Report", "Create event summary and learnings", 0.3, Medium),
];

const REVIEW: &[TaskTemplate] = &[
    TaskTemplate::fixed("Evaluate Results", "Analyze outcomes and metrics", 0.6, High),
    TaskTemplate::fixed("Document Learnings", "Record insights and improvements", 0.4, Medium),
];

const COMPLETION: &[TaskTemplate] = &[
    TaskTemplate::fixed("Final Delivery", "Complete and deliver project", 0.6, High),
    TaskTemplate::fixed("Post-Project Review", "Review and close project", 0.4, Low),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_vectors_match_phase_counts() {
        for project_type in ProjectType::ALL {
            if let Some(weights) = phase_weights(project_type) {
                assert_eq!(
                    weights.len(),
                    phase_names(project_type).len(),
                    "weight vector length for {}",
                    project_type.as_str()
                );
            }
        }
    }

    #[test]
    fn test_every_registered_phase_resolves() {
        for project_type in ProjectType::ALL {
            for name in phase_names(project_type) {
                let template = phase_template(name);
                assert_eq!(template.name, *name);
                assert!(
                    !template.tasks.is_empty(),
                    "phase {name} should have tasks"
                );
                assert!(
                    template.tasks.iter().all(|t| t.ratio > 0.0 && t.ratio <= 1.0),
                    "phase {name} has a ratio outside (0, 1]"
                );
            }
        }
    }

    #[test]
    fn test_shared_phase_names_share_tasks() {
        let planning = phase_template("Planning");
        assert_eq!(planning.tasks.len(), 3);
        assert_eq!(planning.tasks[0].name, "Market Research");
    }

    #[test]
    fn test_unknown_phase_falls_back_to_generic() {
        let template = phase_template("Celebration");
        assert_eq!(template.tasks.len(), 2);
        assert_eq!(template.tasks[0].name, "Celebration Task 1");
        assert_eq!(template.tasks[1].name, "Celebration Task 2");
        assert_eq!(template.tasks[0].priority, High);
        assert_eq!(template.tasks[1].priority, Medium);
    }
}
