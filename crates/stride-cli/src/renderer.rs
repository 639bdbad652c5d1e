//! Terminal rendering for plans.
//!
//! Markdown produced by the core `Display` impls is styled with termimad, or
//! passed through untouched when color is disabled. JSON output bypasses
//! styling entirely so it stays machine-readable.

use anyhow::{Context, Result};
use serde::Serialize;
use termimad::{MadSkin, crossterm::style::Color};

const HEADER_STYLE: &str = "\x1b[1;34m";
const RESET: &str = "\x1b[0m";

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Styles markdown for the terminal.
    ///
    /// Header lines keep their `#` markers so the plan outline stays visible;
    /// other lines get inline styling (bold task names, italics).
    pub fn format(&self, markdown: &str) -> String {
        if !self.rich_enabled {
            return markdown.to_string();
        }

        let mut output = String::with_capacity(markdown.len() * 2);
        for line in markdown.lines() {
            if line.starts_with('#') {
                output.push_str(HEADER_STYLE);
                output.push_str(line);
                output.push_str(RESET);
            } else {
                output.push_str(&self.skin.inline(line).to_string());
            }
            output.push('\n');
        }
        output
    }

    /// Render markdown text to the terminal
    pub fn render(&self, markdown: &str) {
        print!("{}", self.format(markdown));
    }

    /// Print a value as pretty JSON
    pub fn render_json<T: Serialize>(&self, value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
        println!("{json}");
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
