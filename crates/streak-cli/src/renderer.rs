//! Terminal rendering of markdown output.
//!
//! Uses termimad for styled output, with a plain text fallback for
//! `--no-color`.

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

/// Prints markdown either styled through termimad or as plain text.
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.set_headers_fg(Color::Green);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Render markdown text to the terminal
    pub fn render(&self, markdown: &str) -> Result<()> {
        if !self.rich_enabled {
            print!("{markdown}");
            return Ok(());
        }

        for line in markdown.lines() {
            // Headers keep their hashes so day and challenge titles stand out
            if line.starts_with('#') {
                println!("\x1b[32m{line}\x1b[0m");
            } else if let Some(task) = line.strip_prefix("- [x] ") {
                println!("\x1b[32m✓\x1b[0m {task}");
            } else if let Some(task) = line.strip_prefix("- [ ] ") {
                println!("\x1b[90m○\x1b[0m {task}");
            } else {
                self.skin.print_inline(line);
                println!();
            }
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
