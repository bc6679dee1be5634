//! ui::table
//!
//! Plain-text tables for entry listings and staleness reports.
//!
//! Rendering is a pure function of the table data. Colors are applied only
//! when asked for, and never affect column widths.

use owo_colors::OwoColorize;
use unicode_width::UnicodeWidthStr;

/// Foreground color of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Plain,
    Green,
    Cyan,
    Yellow,
    Magenta,
}

impl Tone {
    fn paint(self, text: &str) -> String {
        match self {
            Tone::Plain => text.to_string(),
            Tone::Green => text.green().to_string(),
            Tone::Cyan => text.cyan().to_string(),
            Tone::Yellow => text.yellow().to_string(),
            Tone::Magenta => text.magenta().to_string(),
        }
    }
}

/// A table cell. Text may span several lines.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Cell {
    pub text: String,
    pub tone: Tone,
}

impl Cell {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: Tone::Plain,
        }
    }

    pub fn toned(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }

    fn lines(&self) -> Vec<&str> {
        if self.text.is_empty() {
            vec![""]
        } else {
            self.text.lines().collect()
        }
    }

    fn width(&self) -> usize {
        self.lines()
            .iter()
            .map(|line| line.width())
            .max()
            .unwrap_or(0)
    }
}

/// A table with a header row.
#[derive(Debug, Clone, Default)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<Cell>>,
    /// Draw a rule between rows.
    pub show_lines: bool,
}

impl Table {
    /// Create a table with the given column headers.
    pub fn new<S: Into<String>>(headers: impl IntoIterator<Item = S>) -> Self {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
            show_lines: false,
        }
    }

    /// Append a row. Missing cells render empty; extra cells are dropped.
    pub fn add_row(&mut self, mut cells: Vec<Cell>) {
        cells.resize(self.headers.len(), Cell::default());
        self.rows.push(cells);
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render the table.
    ///
    /// # Example
    ///
    /// ```
    /// use sdt::ui::table::{Cell, Table};
    ///
    /// let mut table = Table::new(["ID", "Paths"]);
    /// table.add_row(vec![Cell::new("docname"), Cell::new("a.txt\nb.txt")]);
    ///
    /// assert_eq!(
    ///     table.render(false),
    ///     "ID      | Paths\n\
    ///      --------+------\n\
    ///      docname | a.txt\n        \
    ///              | b.txt"
    /// );
    /// ```
    pub fn render(&self, color: bool) -> String {
        let widths: Vec<usize> = self
            .headers
            .iter()
            .enumerate()
            .map(|(i, header)| {
                self.rows
                    .iter()
                    .map(|row| row[i].width())
                    .chain(std::iter::once(header.width()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let rule = widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("-+-");

        let header_cells: Vec<Cell> = self.headers.iter().map(Cell::new).collect();
        let mut out = vec![render_row(&header_cells, &widths, false), rule.clone()];

        for (i, row) in self.rows.iter().enumerate() {
            if self.show_lines && i > 0 {
                out.push(rule.clone());
            }
            out.push(render_row(row, &widths, color));
        }

        out.join("\n")
    }
}

fn render_row(cells: &[Cell], widths: &[usize], color: bool) -> String {
    let cell_lines: Vec<Vec<&str>> = cells.iter().map(Cell::lines).collect();
    let height = cell_lines.iter().map(Vec::len).max().unwrap_or(1);

    (0..height)
        .map(|line| {
            let rendered = cells
                .iter()
                .zip(&cell_lines)
                .zip(widths)
                .map(|((cell, lines), width)| {
                    let text = lines.get(line).copied().unwrap_or("");
                    let pad = " ".repeat(width - text.width());
                    if color {
                        format!("{}{}", cell.tone.paint(text), pad)
                    } else {
                        format!("{}{}", text, pad)
                    }
                })
                .collect::<Vec<_>>()
                .join(" | ");
            rendered.trim_end().to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
