use crate::core::session::HistoryEntry;
use crate::core::theme::{Rgb, Theme};
use colored::*;

trait Paint {
    fn paint(self, rgb: Rgb) -> ColoredString;
}

impl Paint for &str {
    fn paint(self, rgb: Rgb) -> ColoredString {
        self.truecolor(rgb.0, rgb.1, rgb.2)
    }
}

pub fn prompt(prompt: &str, theme: &Theme) -> String {
    format!("{} ", prompt.paint(theme.accent).bold())
}

/// One scrollback entry: the command line (unless suppressed) then its output.
pub fn entry(entry: &HistoryEntry, prompt_text: &str, theme: &Theme) -> String {
    let mut out = String::new();
    if entry.show_prompt {
        out.push_str(&prompt(prompt_text, theme));
        out.push_str(&entry.command.as_str().paint(theme.text).to_string());
        out.push('\n');
    }
    out.push_str(&output(entry, theme));
    out
}

/// Just the output block of an entry, followed by a spacer line.
pub fn output(entry: &HistoryEntry, theme: &Theme) -> String {
    if entry.output.is_empty() {
        return String::new();
    }
    let mut out = String::new();
    for line in entry.output.lines() {
        out.push_str(&line.paint(theme.text).to_string());
        out.push('\n');
    }
    out.push('\n');
    out
}

pub fn scrollback(entries: &[HistoryEntry], prompt_text: &str, theme: &Theme) -> String {
    entries
        .iter()
        .map(|e| entry(e, prompt_text, theme))
        .collect()
}

/// OSC 11: asks the terminal to repaint its background in the theme colour.
pub fn background(theme: &Theme) -> String {
    format!("\x1b]11;{}\x07", theme.background)
}

/// OSC 111: restores the terminal's own background.
pub fn reset_background() -> &'static str {
    "\x1b]111\x07"
}
