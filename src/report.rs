use colored::{Color, Colorize};
use std::io::Write;

/// Colorized single-line status output.
///
/// The color decision is made once at startup (terminal detection plus
/// `--no-color`) and carried here explicitly, so non-interactive runs get
/// plain, parseable lines.
#[derive(Debug, Clone, Copy)]
pub struct Reporter {
    color: bool,
}

impl Reporter {
    pub fn new(color: bool) -> Self {
        Reporter { color }
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.color {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn paint_bold(&self, text: &str, color: Color) -> String {
        if self.color {
            text.color(color).bold().to_string()
        } else {
            text.to_string()
        }
    }

    /// Opening banner, e.g. `=== PHP project setup ===`
    pub fn banner(&self, msg: &str) {
        println!("{}", self.paint_bold(msg, Color::Blue));
    }

    /// Section header, e.g. `Available Licenses:`
    pub fn section(&self, msg: &str) {
        println!("{}", self.paint_bold(msg, Color::Cyan));
    }

    pub fn ok(&self, msg: &str) {
        println!("{} {}", self.paint("✓", Color::Green), msg);
    }

    pub fn info(&self, msg: &str) {
        println!("{} {}", self.paint("•", Color::Cyan), msg);
    }

    pub fn warn(&self, msg: &str) {
        println!("{} {}", self.paint("⚠", Color::Yellow), msg);
    }

    /// Closing line after a successful run
    pub fn done(&self, msg: &str) {
        println!("{}", self.paint_bold(msg, Color::Green));
    }

    /// One numbered license catalog row: `[ 1] MIT → https://…`
    pub fn catalog_entry(&self, number: usize, id: &str, url: &str) {
        let tag = format!("[{:>2}]", number);
        println!("{} {} → {}", self.paint(&tag, Color::Yellow), id, url);
    }

    /// Question prefix, left open for the answer on the same line
    pub fn prompt(&self, question: &str, default: Option<&str>) {
        let suffix = match default {
            Some(d) => format!(" [{}]", d),
            None => String::new(),
        };
        print!("{}{}{}: ", self.paint("?> ", Color::Magenta), question, suffix);
        let _ = std::io::stdout().flush();
    }

    pub fn blank_line(&self) {
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paint_plain_when_color_disabled() {
        let reporter = Reporter::new(false);
        assert_eq!(reporter.paint("hello", Color::Green), "hello");
        assert_eq!(reporter.paint_bold("hello", Color::Blue), "hello");
    }

    #[test]
    fn test_paint_passes_text_through() {
        // With color enabled the text itself must survive untouched; the
        // escape framing depends on the environment, so only check content.
        let reporter = Reporter::new(true);
        assert!(reporter.paint("hello", Color::Green).contains("hello"));
    }
}
