//! Advisory text collaborator.
//!
//! Plans may carry a short decorative annotation produced by an external
//! text-generation service. The annotation never influences dates, durations
//! or structure, and any failure to obtain it degrades to an empty string.
//!
//! The service is reached through the [`TextGenerator`] trait so the planner
//! can run against the real [`GeminiClient`], a test double, or nothing at
//! all.

use async_trait::async_trait;
use log::warn;

mod config;
mod error;
mod gemini;

pub use config::{AdvisorConfig, DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_TIMEOUT_MS};
pub use error::AdvisorError;
pub use gemini::GeminiClient;

/// Longest annotation kept, in characters, including the ellipsis.
pub const MAX_ADVISORY_CHARS: usize = 150;

const ELLIPSIS: &str = "...";

/// Shortest partial goal worth asking the service about.
pub const MIN_SUGGESTION_INPUT_CHARS: usize = 5;

/// Suggestion returned when no service is configured.
pub const SUGGESTIONS_UNAVAILABLE: &str = "AI suggestions require Google API setup";

/// A text-generation service. Each call is independent.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate text for a prompt.
    async fn generate(&self, prompt: &str) -> Result<String, AdvisorError>;
}

/// Caps text at [`MAX_ADVISORY_CHARS`] characters, replacing the tail with
/// `...` when it is longer. Counts characters, not bytes.
///
/// # Examples
///
/// ```rust
/// use stride_core::advisor::truncate_advisory;
///
/// assert_eq!(truncate_advisory("short"), "short");
/// let long = "x".repeat(200);
/// let capped = truncate_advisory(&long);
/// assert_eq!(capped.chars().count(), 150);
/// assert!(capped.ends_with("..."));
/// ```
pub fn truncate_advisory(text: &str) -> String {
    if text.chars().count() <= MAX_ADVISORY_CHARS {
        return text.to_string();
    }
    let kept: String = text
        .chars()
        .take(MAX_ADVISORY_CHARS - ELLIPSIS.len())
        .collect();
    format!("{kept}{ELLIPSIS}")
}

/// Prompt asking for one insight about a generated plan.
pub fn insight_prompt(goal: &str, phase_count: usize, total_duration: u32) -> String {
    format!(
        "Given this project goal: \"{goal}\"\n\n\
         With {phase_count} phases over {total_duration} days, provide ONE brief, actionable \
         insight or recommendation (max 20 words) to ensure project success. Focus on \
         potential risks or optimization opportunities."
    )
}

/// Prompt asking for a complete goal based on what the user typed so far.
pub fn suggestion_prompt(partial_goal: &str) -> String {
    format!(
        "User is typing a project goal: \"{partial_goal}\"\n\n\
         Suggest a complete, specific project goal with a realistic timeline. \
         Format: \"Action + deliverable + timeline\"\n\
         Example: \"Build a mobile app in 3 weeks\" or \"Launch a marketing campaign in 2 weeks\"\n\n\
         Provide ONE suggestion only (max 15 words):"
    )
}

/// Requests advisory text, absorbing every failure into an empty string.
pub async fn advise(generator: &dyn TextGenerator, prompt: &str) -> String {
    match generator.generate(prompt).await {
        Ok(text) => truncate_advisory(text.trim()),
        Err(e) => {
            warn!("Advisory text generation failed: {e}");
            String::new()
        }
    }
}

/// Strips whitespace and surrounding quote characters from a suggestion.
pub fn clean_suggestion(text: &str) -> String {
    text.trim()
        .trim_matches('"')
        .trim_matches('\'')
        .trim()
        .to_string()
}

#[cfg(test)]
pub(crate) mod mock {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    /// Test double returning a fixed reply or failing every call.
    pub struct ScriptedGenerator {
        reply: Option<String>,
        calls: AtomicUsize,
    }

    impl ScriptedGenerator {
        pub fn replying(text: &str) -> Self {
            Self {
                reply: Some(text.to_string()),
                calls: AtomicUsize::new(0),
            }
        }

        pub fn failing() -> Self {
            Self {
                reply: None,
                calls: AtomicUsize::new(0),
            }
        }

        pub fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl TextGenerator for ScriptedGenerator {
        async fn generate(&self, _prompt: &str) -> Result<String, AdvisorError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.reply
                .clone()
                .ok_or_else(|| AdvisorError::InvalidResponse("scripted failure".to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{mock::ScriptedGenerator, *};

    #[test]
    fn test_truncate_respects_char_boundaries() {
        let text = "é".repeat(160);
        let capped = truncate_advisory(&text);
        assert_eq!(capped.chars().count(), MAX_ADVISORY_CHARS);
        assert!(capped.starts_with("ééé"));
        assert!(capped.ends_with("..."));
    }

    #[test]
    fn test_truncate_keeps_text_at_limit() {
        let text = "a".repeat(MAX_ADVISORY_CHARS);
        assert_eq!(truncate_advisory(&text), text);
    }

    #[test]
    fn test_prompts_embed_inputs() {
        let prompt = insight_prompt("Host a meetup", 6, 30);
        assert!(prompt.contains("\"Host a meetup\""));
        assert!(prompt.contains("With 6 phases over 30 days"));

        let prompt = suggestion_prompt("build a");
        assert!(prompt.contains("\"build a\""));
        assert!(prompt.contains("max 15 words"));
    }

    #[test]
    fn test_clean_suggestion_strips_quotes() {
        assert_eq!(
            clean_suggestion("  \"Build a mobile app in 3 weeks\"\n"),
            "Build a mobile app in 3 weeks"
        );
        assert_eq!(clean_suggestion("'Ship v2 in 10 days'"), "Ship v2 in 10 days");
    }

    #[tokio::test]
    async fn test_advise_trims_and_caps() {
        let generator = ScriptedGenerator::replying(&format!("  {}  ", "y".repeat(400)));
        let text = advise(&generator, "prompt").await;
        assert_eq!(text.chars().count(), MAX_ADVISORY_CHARS);
        assert_eq!(generator.call_count(), 1);
    }

    #[tokio::test]
    async fn test_advise_swallows_failures() {
        let generator = ScriptedGenerator::failing();
        assert_eq!(advise(&generator, "prompt").await, "");
    }
}
