//! # Boxtable - Rounded Console Tables
//!
//! A small table renderer for interactive CLIs: columns are sized to their widest
//! cell (Unicode-aware), framed with rounded box-drawing characters, and styled
//! through named styles with automatic terminal capability detection.
//!
//! ## Quick Example
//!
//! ```rust
//! use boxtable::{Table, Theme};
//! use console::Style;
//!
//! let theme = Theme::new().add("header", Style::new().bold());
//!
//! let mut table = Table::new().header_style("header");
//! table.add_column("Name");
//! table.add_column("Phone number");
//! table.add_row(["John", "1234567890"]);
//!
//! let output = table.render_with_color(&theme, false);
//! assert_eq!(
//!     output,
//!     "╭──────┬──────────────╮\n\
//!      │ Name │ Phone number │\n\
//!      ├──────┼──────────────┤\n\
//!      │ John │ 1234567890   │\n\
//!      ╰──────┴──────────────╯\n"
//! );
//! ```
//!
//! ## Styling
//!
//! Styles are `console::Style` values registered by name in a [`Theme`]. A table
//! refers to them by name: one for the header row and, optionally, one per column.
//! Column widths come from the plain rendering of each cell, including the
//! missing-style indicator, so ANSI codes never disturb the alignment.
//!
//! ## Terminal Detection
//!
//! [`stdout_supports_color`] asks `console` whether stdout can show colours; pass the
//! answer (combined with any `--no-color` flag) to [`Table::render_with_color`].

use console::{Style, Term};
use std::collections::HashMap;
use unicode_width::UnicodeWidthStr;

/// Prefix shown when a style name is not found.
pub const MISSING_STYLE_INDICATOR: &str = "(!?)";

/// A collection of named styles.
///
/// When a style name is not found, [`MISSING_STYLE_INDICATOR`] is prepended to the
/// text to help catch typos.
///
/// ```rust
/// use boxtable::Styles;
/// use console::Style;
///
/// let styles = Styles::new().add("dim", Style::new().dim());
/// let unknown = styles.apply("typo", "Hello");
/// assert!(unknown.starts_with("(!?)"));
/// ```
#[derive(Clone, Default)]
pub struct Styles {
    styles: HashMap<String, Style>,
}

impl Styles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a named style, replacing any style with the same name.
    pub fn add(mut self, name: &str, style: Style) -> Self {
        self.styles.insert(name.to_string(), style);
        self
    }

    /// Applies a named style to text, with ANSI codes.
    pub fn apply(&self, name: &str, text: &str) -> String {
        match self.styles.get(name) {
            Some(style) => style.apply_to(text).to_string(),
            None => missing(text),
        }
    }

    /// Checks the style name but returns the text without ANSI codes.
    pub fn apply_plain(&self, name: &str, text: &str) -> String {
        if self.styles.contains_key(name) {
            text.to_string()
        } else {
            missing(text)
        }
    }
}

fn missing(text: &str) -> String {
    format!("{} {}", MISSING_STYLE_INDICATOR, text)
}

/// A named collection of styles used when rendering tables.
#[derive(Clone, Default)]
pub struct Theme {
    styles: Styles,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a named style, returning an updated theme for chaining.
    pub fn add(mut self, name: &str, style: Style) -> Self {
        self.styles = self.styles.add(name, style);
        self
    }

    /// Styles `text` with the named style, or checks the name only when colours are off.
    pub fn paint(&self, name: &str, text: &str, use_color: bool) -> String {
        if use_color {
            self.styles.apply(name, text)
        } else {
            self.styles.apply_plain(name, text)
        }
    }
}

/// Returns whether stdout can display colours.
pub fn stdout_supports_color() -> bool {
    Term::stdout().features().colors_supported()
}

/// Box-drawing characters for one frame.
struct Border {
    top: [char; 4],
    divider: [char; 4],
    bottom: [char; 4],
    vertical: char,
}

/// `[left, fill, junction, right]` per horizontal rule.
const ROUNDED: Border = Border {
    top: ['╭', '─', '┬', '╮'],
    divider: ['├', '─', '┼', '┤'],
    bottom: ['╰', '─', '┴', '╯'],
    vertical: '│',
};

#[derive(Debug, Clone)]
struct Column {
    header: String,
    style: Option<String>,
}

/// A table of text cells.
///
/// Rows shorter than the column count are padded with empty cells; extra cells are
/// dropped.
#[derive(Debug, Clone, Default)]
pub struct Table {
    columns: Vec<Column>,
    rows: Vec<Vec<String>>,
    header_style: Option<String>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the style applied to every header cell.
    pub fn header_style(mut self, name: &str) -> Self {
        self.header_style = Some(name.to_string());
        self
    }

    pub fn add_column(&mut self, header: &str) -> &mut Self {
        self.columns.push(Column {
            header: header.to_string(),
            style: None,
        });
        self
    }

    /// Adds a column whose body cells are rendered with the named style.
    pub fn add_styled_column(&mut self, header: &str, style: &str) -> &mut Self {
        self.columns.push(Column {
            header: header.to_string(),
            style: Some(style.to_string()),
        });
        self
    }

    pub fn add_row<I, S>(&mut self, cells: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut row: Vec<String> = cells
            .into_iter()
            .take(self.columns.len())
            .map(Into::into)
            .collect();
        row.resize(self.columns.len(), String::new());
        self.rows.push(row);
        self
    }

    /// Renders with explicit colour control. Every line ends with a newline.
    pub fn render_with_color(&self, theme: &Theme, use_color: bool) -> String {
        if self.columns.is_empty() {
            return String::new();
        }

        let header_style = self.header_style.as_deref();
        let header: Vec<Cell> = self
            .columns
            .iter()
            .map(|c| Cell::new(&c.header, header_style, theme, use_color))
            .collect();
        let body: Vec<Vec<Cell>> = self
            .rows
            .iter()
            .map(|row| {
                row.iter()
                    .zip(&self.columns)
                    .map(|(text, c)| Cell::new(text, c.style.as_deref(), theme, use_color))
                    .collect()
            })
            .collect();

        let widths: Vec<usize> = (0..self.columns.len())
            .map(|i| {
                body.iter()
                    .map(|row| row[i].width)
                    .chain(std::iter::once(header[i].width))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let mut out = String::new();
        push_rule(&mut out, &ROUNDED.top, &widths);
        push_cells(&mut out, &header, &widths);
        if !body.is_empty() {
            push_rule(&mut out, &ROUNDED.divider, &widths);
            for row in &body {
                push_cells(&mut out, row, &widths);
            }
        }
        push_rule(&mut out, &ROUNDED.bottom, &widths);
        out
    }
}

/// A cell's output text and the display width of its plain form.
struct Cell {
    text: String,
    width: usize,
}

impl Cell {
    fn new(raw: &str, style: Option<&str>, theme: &Theme, use_color: bool) -> Self {
        match style {
            Some(name) => Self {
                text: theme.paint(name, raw, use_color),
                width: theme.paint(name, raw, false).width(),
            },
            None => Self {
                text: raw.to_string(),
                width: raw.width(),
            },
        }
    }
}

fn push_rule(out: &mut String, chars: &[char; 4], widths: &[usize]) {
    let [left, fill, junction, right] = *chars;
    out.push(left);
    for (i, width) in widths.iter().enumerate() {
        if i > 0 {
            out.push(junction);
        }
        out.extend(std::iter::repeat(fill).take(width + 2));
    }
    out.push(right);
    out.push('\n');
}

fn push_cells(out: &mut String, cells: &[Cell], widths: &[usize]) {
    out.push(ROUNDED.vertical);
    for (cell, width) in cells.iter().zip(widths) {
        out.push(' ');
        out.push_str(&cell.text);
        out.push_str(&" ".repeat(width.saturating_sub(cell.width) + 1));
        out.push(ROUNDED.vertical);
    }
    out.push('\n');
}
