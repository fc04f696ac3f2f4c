//! Terminal rendering module for rich markdown output
//!
//! Renders the core's markdown with termimad, falling back to the raw text
//! when color is disabled.

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);

        Self { rich_enabled, skin }
    }

    /// Render markdown text to terminal
    pub fn render(&self, markdown: &str) -> Result<()> {
        if !self.rich_enabled {
            print!("{markdown}");
            return Ok(());
        }

        // Tables need every row at once; other lines render one by one so
        // headers keep their hash symbols.
        let mut table = Vec::new();
        for line in markdown.lines() {
            if line.starts_with('|') {
                table.push(line);
                continue;
            }
            self.flush_table(&mut table);
            if line.starts_with('#') {
                println!("\x1b[34m{line}\x1b[0m");
            } else {
                self.skin.print_inline(line);
                println!();
            }
        }
        self.flush_table(&mut table);
        Ok(())
    }

    fn flush_table(&self, rows: &mut Vec<&str>) {
        if rows.is_empty() {
            return;
        }
        self.skin.print_text(&rows.join("\n"));
        rows.clear();
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
