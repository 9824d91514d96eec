//! Terminal output for availability summaries and trip listings.
//!
//! The core display wrappers produce markdown. Rich output styles it line by
//! line: headings and the pager footer get their own colours, summary lines
//! are highlighted, everything else goes through a termimad skin. Plain
//! output (`--no-color`) prints the text unchanged.

use anyhow::Result;
use termimad::{
    crossterm::style::{Color, Stylize},
    MadSkin,
};

/// Kinds of line the listing and range output is made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineKind {
    /// `# Trips`, `## Safari (ID: 42)`
    Heading,
    /// `Page 2 of 7: 1 [2] 3 4 5`
    Pager,
    Markdown,
}

impl LineKind {
    fn of(line: &str) -> Self {
        if line.starts_with('#') {
            LineKind::Heading
        } else if line.starts_with("Page ") && line.contains(" of ") && line.contains(':') {
            LineKind::Pager
        } else {
            LineKind::Markdown
        }
    }
}

/// Prints command output, styled or plain.
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);

        Self { rich_enabled, skin }
    }

    /// Prints markdown produced by the display wrappers.
    pub fn render(&self, markdown: &str) -> Result<()> {
        if self.rich_enabled {
            for line in markdown.lines() {
                println!("{}", self.style_line(line));
            }
        } else {
            print!("{markdown}");
        }
        Ok(())
    }

    /// Prints a single availability summary line.
    pub fn summary(&self, line: &str) -> Result<()> {
        if self.rich_enabled {
            println!("{}", line.green());
        } else {
            println!("{line}");
        }
        Ok(())
    }

    fn style_line(&self, line: &str) -> String {
        match LineKind::of(line) {
            LineKind::Heading => line.cyan().bold().to_string(),
            LineKind::Pager => style_pager(line),
            LineKind::Markdown => self.skin.inline(line).to_string(),
        }
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Dims the pager label and highlights the current page link.
fn style_pager(line: &str) -> String {
    let Some((label, links)) = line.split_once(':') else {
        return line.dark_grey().to_string();
    };

    let links: Vec<String> = links
        .split_whitespace()
        .map(|link| {
            if link.starts_with('[') {
                link.yellow().bold().to_string()
            } else {
                link.to_string()
            }
        })
        .collect();
    format!("{}: {}", label.dark_grey(), links.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_kinds() {
        assert_eq!(LineKind::of("# Trips"), LineKind::Heading);
        assert_eq!(LineKind::of("## Safari (ID: 2)"), LineKind::Heading);
        assert_eq!(LineKind::of("Page 2 of 7: 1 [2] 3"), LineKind::Pager);
        assert_eq!(LineKind::of("- **Price**: 40 USD"), LineKind::Markdown);
        assert_eq!(LineKind::of("Page views"), LineKind::Markdown);
    }

    #[test]
    fn test_pager_keeps_page_numbers() {
        let styled = style_pager("Page 2 of 3: 1 [2] 3");
        assert!(styled.contains("Page 2 of 3"));
        assert!(styled.contains("[2]"));
        assert!(styled.ends_with(" 3"));
    }

    #[test]
    fn test_heading_keeps_hash_marks() {
        let renderer = TerminalRenderer::new(true);
        let styled = renderer.style_line("## Safari (ID: 2)");
        assert!(styled.contains("## Safari (ID: 2)"));
    }

    #[test]
    fn test_default_is_rich() {
        assert!(TerminalRenderer::default().rich_enabled);
        assert!(!TerminalRenderer::new(false).rich_enabled);
    }
}
