use super::colors::*;
use super::formatting::wrap_text;
use crate::constants::ui::{CONTENT_MARGIN, PAGE_WIDTH, STAT_LABEL_WIDTH};
use crate::error::AppError;
use std::io::Write;

/// One logical line of page content.
#[derive(Debug, Clone, PartialEq)]
pub enum PageRow {
    SectionHeader(String),
    Text(String),
    /// Label/value pair rendered as an aligned two-column line
    Stat {
        label: String,
        value: String,
    },
    Highlight(String),
    ErrorMessage(String),
    Spacer,
}

impl PageRow {
    /// Row text without colour codes.
    pub fn plain_text(&self) -> String {
        match self {
            PageRow::SectionHeader(text) => text.to_uppercase(),
            PageRow::Text(text) | PageRow::Highlight(text) | PageRow::ErrorMessage(text) => {
                text.clone()
            }
            PageRow::Stat { label, value } => {
                format!("{label:<STAT_LABEL_WIDTH$}{value}")
            }
            PageRow::Spacer => String::new(),
        }
    }
}

/// A teletext-style page: coloured header bar followed by content rows.
#[derive(Debug, Clone)]
pub struct TextPage {
    page_number: u16,
    title: String,
    subheader: String,
    content_rows: Vec<PageRow>,
    plain: bool,
    width: usize,
}

impl TextPage {
    /// Creates an empty page.
    ///
    /// # Arguments
    /// * `page_number` - Teletext page number shown in the header
    /// * `title` - Left part of the header bar
    /// * `subheader` - Right part of the header bar
    /// * `plain` - Skip ANSI colour codes when rendering
    pub fn new(page_number: u16, title: impl Into<String>, subheader: impl Into<String>, plain: bool) -> Self {
        Self {
            page_number,
            title: title.into(),
            subheader: subheader.into(),
            content_rows: Vec::new(),
            plain,
            width: PAGE_WIDTH,
        }
    }

    pub fn page_number(&self) -> u16 {
        self.page_number
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn subheader(&self) -> &str {
        &self.subheader
    }

    pub fn rows(&self) -> &[PageRow] {
        &self.content_rows
    }

    /// Columns available for text after the left and right margins.
    pub fn content_width(&self) -> usize {
        self.width.saturating_sub(CONTENT_MARGIN * 2)
    }

    pub fn add_section_header(&mut self, text: impl Into<String>) {
        if !self.content_rows.is_empty() {
            self.content_rows.push(PageRow::Spacer);
        }
        self.content_rows.push(PageRow::SectionHeader(text.into()));
    }

    pub fn add_text(&mut self, text: impl Into<String>) {
        self.content_rows.push(PageRow::Text(text.into()));
    }

    /// Adds wrapped text, one row per wrapped line.
    pub fn add_paragraph(&mut self, text: &str) {
        for line in wrap_text(text, self.content_width()) {
            self.content_rows.push(PageRow::Text(line));
        }
    }

    pub fn add_stat(&mut self, label: impl Into<String>, value: impl Into<String>) {
        self.content_rows.push(PageRow::Stat {
            label: label.into(),
            value: value.into(),
        });
    }

    pub fn add_highlight(&mut self, text: impl Into<String>) {
        self.content_rows.push(PageRow::Highlight(text.into()));
    }

    pub fn add_error_message(&mut self, message: &str) {
        self.content_rows.push(PageRow::ErrorMessage(message.to_string()));
    }

    pub fn add_spacer(&mut self) {
        self.content_rows.push(PageRow::Spacer);
    }

    pub fn has_error_messages(&self) -> bool {
        self.content_rows
            .iter()
            .any(|row| matches!(row, PageRow::ErrorMessage(_)))
    }

    /// Every row as plain text, header excluded.
    pub fn plain_lines(&self) -> Vec<String> {
        self.content_rows.iter().map(PageRow::plain_text).collect()
    }

    /// True if any row contains `needle`.
    pub fn contains_text(&self, needle: &str) -> bool {
        self.plain_lines().iter().any(|line| line.contains(needle))
    }

    fn header_line(&self) -> String {
        let left = format!(" {} {}", self.page_number, self.title);
        let right_width = self.width.saturating_sub(left.chars().count());
        if self.plain {
            return format!("{left}{:>right_width$}", self.subheader);
        }
        format!(
            "\x1b[48;5;{}m\x1b[38;5;{}m{left}\x1b[48;5;{}m\x1b[38;5;{}m{:>right_width$}\x1b[0m",
            get_ansi_code(title_bg(), 46),
            get_ansi_code(title_fg(), 21),
            get_ansi_code(header_bg(), 21),
            get_ansi_code(header_fg(), 231),
            self.subheader,
        )
    }

    fn row_line(&self, row: &PageRow) -> String {
        let margin = " ".repeat(CONTENT_MARGIN);
        if self.plain {
            let text = row.plain_text();
            return if text.is_empty() { text } else { format!("{margin}{text}") };
        }

        let colored = |color, fallback, text: &str| {
            format!("{margin}\x1b[38;5;{}m{text}\x1b[0m", get_ansi_code(color, fallback))
        };

        match row {
            PageRow::SectionHeader(text) => colored(subheader_fg(), 46, &text.to_uppercase()),
            PageRow::Text(text) => colored(text_fg(), 231, text),
            PageRow::Highlight(text) => colored(highlight_fg(), 226, text),
            PageRow::ErrorMessage(text) => colored(error_fg(), 196, text),
            PageRow::Stat { label, value } => format!(
                "{margin}\x1b[38;5;{}m{label:<STAT_LABEL_WIDTH$}\x1b[38;5;{}m{value}\x1b[0m",
                get_ansi_code(text_fg(), 231),
                get_ansi_code(stat_value_fg(), 51),
            ),
            PageRow::Spacer => String::new(),
        }
    }

    /// Renders the whole page into one buffer and writes it in a single call.
    pub fn render_buffered<W: Write>(&self, out: &mut W) -> Result<(), AppError> {
        let mut buffer = String::with_capacity((self.content_rows.len() + 2) * (self.width + 16));
        buffer.push_str(&self.header_line());
        buffer.push('\n');
        buffer.push('\n');
        for row in &self.content_rows {
            buffer.push_str(&self.row_line(row));
            buffer.push('\n');
        }
        out.write_all(buffer.as_bytes())?;
        out.flush()?;
        Ok(())
    }
}
