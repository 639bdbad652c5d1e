use clap::{Parser, Subcommand};
use jiff::civil::Date;
use stride_core::advisor::{AdvisorConfig, DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_TIMEOUT_MS};

/// Turns a free-text project goal into a dated, phased project plan
///
/// Stride classifies the goal, extracts a duration ("in 6 weeks"), splits the
/// days across phases and tasks, and lays them out on the calendar. Plans can
/// be printed in the terminal, emitted as JSON, or served over HTTP.
#[derive(Parser)]
#[command(version, about, name = "stride")]
pub struct Args {
    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(flatten)]
    pub advisor: AdvisorArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Connection settings for the optional advisory text service
#[derive(clap::Args)]
pub struct AdvisorArgs {
    /// Gemini API key; advisory text is disabled without it
    #[arg(long, env = "GEMINI_API_KEY", global = true, hide_env_values = true)]
    pub api_key: Option<String>,

    /// Model used for advisory text
    #[arg(long, env = "STRIDE_AI_MODEL", global = true, default_value = DEFAULT_MODEL)]
    pub ai_model: String,

    /// Base URL of the advisory text API
    #[arg(long, env = "STRIDE_AI_BASE_URL", global = true, default_value = DEFAULT_BASE_URL)]
    pub ai_base_url: String,

    /// Advisory request timeout in milliseconds
    #[arg(long, env = "STRIDE_AI_TIMEOUT_MS", global = true, default_value_t = DEFAULT_TIMEOUT_MS)]
    pub ai_timeout_ms: u64,
}

impl From<AdvisorArgs> for AdvisorConfig {
    fn from(val: AdvisorArgs) -> Self {
        AdvisorConfig {
            api_key: val.api_key,
            model: val.ai_model,
            base_url: val.ai_base_url,
            timeout_ms: val.ai_timeout_ms,
        }
    }
}

/// Available commands for the Stride CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Generate a plan for a goal
    #[command(alias = "p")]
    Plan(PlanArgs),
    /// Suggest a complete goal from partial text
    Suggest {
        /// Partially typed goal
        #[arg(required = true, num_args = 1..)]
        goal: Vec<String>,
    },
    /// Serve the planning HTTP API
    Serve(ServeArgs),
    /// Print service status as JSON
    Status,
}

#[derive(clap::Args)]
pub struct PlanArgs {
    /// Free-text goal, e.g. "Launch a product in 6 weeks"
    #[arg(required = true, num_args = 1..)]
    pub goal: Vec<String>,

    /// Print the plan as JSON instead of markdown
    #[arg(long)]
    pub json: bool,

    /// First day of the plan (YYYY-MM-DD); defaults to today
    #[arg(long)]
    pub start: Option<Date>,
}

#[derive(clap::Args)]
pub struct ServeArgs {
    /// Address to bind
    #[arg(long, env = "STRIDE_BIND", default_value = "127.0.0.1")]
    pub bind: String,

    /// Port to listen on
    #[arg(long, env = "STRIDE_PORT", default_value_t = 5000)]
    pub port: u16,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use jiff::civil::date;

    use super::*;

    #[test]
    fn test_args_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_plan_args_parse_goal_words_and_start() {
        let args = Args::try_parse_from([
            "stride",
            "plan",
            "Launch",
            "a",
            "product",
            "--start",
            "2024-03-01",
            "--json",
        ])
        .unwrap();

        let Commands::Plan(plan) = args.command else {
            panic!("expected plan command");
        };
        assert_eq!(plan.goal.join(" "), "Launch a product");
        assert_eq!(plan.start, Some(date(2024, 3, 1)));
        assert!(plan.json);
    }

    #[test]
    fn test_invalid_start_date_is_rejected() {
        let result = Args::try_parse_from(["stride", "plan", "Build an app", "--start", "soon"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_advisor_flags_map_to_config() {
        let args = Args::try_parse_from([
            "stride",
            "status",
            "--api-key",
            "secret",
            "--ai-timeout-ms",
            "250",
        ])
        .unwrap();

        let config = AdvisorConfig::from(args.advisor);
        assert_eq!(config.api_key.as_deref(), Some("secret"));
        assert_eq!(config.timeout_ms, 250);
        assert_eq!(config.model, DEFAULT_MODEL);
    }
}
