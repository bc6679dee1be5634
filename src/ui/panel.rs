//! ui::panel
//!
//! Titled boxes around command results.

use owo_colors::OwoColorize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Footer shown in the bottom border of every panel.
pub const SUBTITLE: &str = "Sudoscientific Doc Tool";

/// Render `body` inside a rounded box with `title` in the top border.
///
/// # Example
///
/// ```
/// use sdt::ui::panel::panel;
///
/// let rendered = panel("Entries", "hello", false);
/// assert!(rendered.starts_with("╭─ Entries "));
/// assert!(rendered.contains("│ hello"));
/// ```
pub fn panel(title: &str, body: &str, color: bool) -> String {
    let lines: Vec<&str> = body.lines().collect();
    let inner = lines
        .iter()
        .map(|line| visible_width(line))
        .chain([title.width() + 3, SUBTITLE.width() + 3])
        .max()
        .unwrap_or(0);

    let top = format!(
        "╭─ {} {}╮",
        title,
        "─".repeat(inner - title.width() - 1)
    );
    let bottom = format!(
        "╰{} {} ─╯",
        "─".repeat(inner - SUBTITLE.width() - 1),
        SUBTITLE
    );

    let border = |s: &str| {
        if color {
            s.blue().to_string()
        } else {
            s.to_string()
        }
    };

    let mut out = vec![border(&top)];
    for line in &lines {
        let pad = " ".repeat(inner - visible_width(line));
        out.push(format!("{} {}{} {}", border("│"), line, pad, border("│")));
    }
    out.push(border(&bottom));
    out.join("\n")
}

/// Terminal columns taken by `s`, ignoring ANSI escape sequences.
///
/// Wide characters (CJK, most emoji) take two columns.
pub fn visible_width(s: &str) -> usize {
    let mut width = 0;
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\u{1b}' {
            // CSI: ESC '[' params... final byte in '@'..='~'
            if chars.next() == Some('[') {
                for c in chars.by_ref() {
                    if ('@'..='~').contains(&c) {
                        break;
                    }
                }
            }
        } else {
            width += c.width().unwrap_or(0);
        }
    }
    width
}
