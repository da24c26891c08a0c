//! Terminal rendering for markdown plan output
//!
//! Uses termimad for inline styling. Plain mode (`--no-color`) passes the
//! markdown through untouched so it can be piped into other tools.

use std::fmt::Write;

use anyhow::Result;
use termimad::{MadSkin, crossterm::style::Color};

const HEADER_STYLE: &str = "\x1b[34m";
const RESET: &str = "\x1b[0m";

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Style markdown for the terminal.
    ///
    /// Header lines keep their `#` markers so priority groups stay visible;
    /// other lines get termimad's inline styling (bold labels, code).
    pub fn style(&self, markdown: &str) -> String {
        if !self.rich_enabled {
            return markdown.to_string();
        }

        let mut out = String::with_capacity(markdown.len());
        for line in markdown.lines() {
            if line.starts_with('#') {
                let _ = writeln!(out, "{HEADER_STYLE}{line}{RESET}");
            } else {
                let _ = writeln!(out, "{}", self.skin.inline(line));
            }
        }
        out
    }

    /// Render markdown text to stdout
    pub fn render(&self, markdown: &str) -> Result<()> {
        print!("{}", self.style(markdown));
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAN: &str = "# Plan 1a2b3c4d: Ship it\n\n## High priority\n\n- **Duration**: 2 days\n";

    #[test]
    fn test_plain_renderer_passes_markdown_through() {
        let renderer = TerminalRenderer::new(false);
        assert!(!renderer.rich_enabled);
        assert_eq!(renderer.style(PLAN), PLAN);
    }

    #[test]
    fn test_rich_renderer_colors_headers() {
        let renderer = TerminalRenderer::default();
        assert!(renderer.rich_enabled);

        let styled = renderer.style(PLAN);
        assert!(styled.contains("\x1b[34m## High priority\x1b[0m"));
        assert!(styled.contains("Duration"));
        assert_eq!(styled.lines().count(), PLAN.lines().count());
    }
}
