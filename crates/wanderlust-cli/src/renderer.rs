//! Terminal rendering for markdown output
//!
//! Uses termimad for styled output, with a plain-text mode for pipes and
//! `--no-color`.

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Cyan);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Green);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Render markdown text to the terminal.
    pub fn render(&self, markdown: &str) -> Result<()> {
        if self.rich_enabled {
            for line in markdown.lines() {
                match line {
                    header if header.starts_with('#') => println!("\x1b[36m{header}\x1b[0m"),
                    warning if warning.starts_with("Warning:") => {
                        println!("\x1b[33m{warning}\x1b[0m")
                    }
                    _ => {
                        self.skin.print_inline(line);
                        println!();
                    }
                }
            }
        } else {
            print!("{markdown}");
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
