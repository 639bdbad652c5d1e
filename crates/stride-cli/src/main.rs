//! Stride CLI Application
//!
//! Command-line and HTTP front end for the stride plan generator.

mod args;
mod cli;
mod renderer;
mod server;

use Commands::*;
use anyhow::{Context, Result};
use args::{Args, Commands, ServeArgs};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use server::run_serve;
use stride_core::PlannerBuilder;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        no_color,
        advisor,
        command,
    } = Args::parse();

    let planner = PlannerBuilder::new()
        .with_advisor_config(advisor.into())
        .build()
        .context("Failed to initialize planner")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!(
        "Stride started (advisory text {})",
        if planner.ai_available() { "enabled" } else { "disabled" }
    );

    match command {
        Plan(args) => Cli::new(planner, renderer).generate_plan(args).await,
        Suggest { goal } => Cli::new(planner, renderer).suggest(&goal).await,
        Serve(ServeArgs { bind, port }) => run_serve(planner, &bind, port)
            .await
            .context("HTTP server failed"),
        Status => Cli::new(planner, renderer).status(),
    }
}
