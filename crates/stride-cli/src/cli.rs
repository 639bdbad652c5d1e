//! Command handlers for the terminal surface.
//!
//! Each handler runs one planner operation and hands the result to the
//! [`TerminalRenderer`]: plans as markdown (or JSON with `--json`), status as
//! JSON, suggestions as a single plain line.

use anyhow::Result;
use log::debug;
use stride_core::Planner;

use crate::{args::PlanArgs, renderer::TerminalRenderer};

/// CLI handler
pub struct Cli {
    planner: Planner,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(planner: Planner, renderer: TerminalRenderer) -> Self {
        Self { planner, renderer }
    }

    /// Generates and prints a plan.
    pub async fn generate_plan(&self, args: PlanArgs) -> Result<()> {
        let goal = args.goal.join(" ");
        debug!("Planning goal {goal:?} from {:?}", args.start);

        let plan = match args.start {
            Some(start_date) => self.planner.generate_plan_from(&goal, start_date).await?,
            None => self.planner.generate_plan(&goal).await?,
        };

        if args.json {
            self.renderer.render_json(&plan)
        } else {
            self.renderer.render(&plan.to_string());
            Ok(())
        }
    }

    /// Prints a goal suggestion, which may be empty.
    pub async fn suggest(&self, partial_goal: &[String]) -> Result<()> {
        let suggestion = self.planner.suggest_goal(&partial_goal.join(" ")).await;
        println!("{suggestion}");
        Ok(())
    }

    /// Prints the service status document.
    pub fn status(&self) -> Result<()> {
        self.renderer.render_json(&self.planner.status())
    }
}
