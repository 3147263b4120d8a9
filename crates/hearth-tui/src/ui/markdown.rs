//! Markdown to styled terminal lines, used by the hunt detail view.
//!
//! Hunt write-ups are mostly headings, paragraphs, bullet lists and the
//! single pipe table that carries the hunt row, so those get the most care.

use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

use crate::ui::theme;

const INDENT_UNIT: &str = "  ";
const LIST_BULLET: &str = "• ";
const RULE_WIDTH: usize = 60;

/// Inline styles nest; the bottom entry is never popped
struct StyleStack(Vec<Style>);

impl StyleStack {
    fn new() -> Self {
        Self(vec![theme::text_primary()])
    }

    fn current(&self) -> Style {
        self.0.last().copied().unwrap_or_default()
    }

    fn push(&mut self, f: impl FnOnce(Style) -> Style) {
        let next = f(self.current());
        self.0.push(next);
    }

    fn pop(&mut self) {
        if self.0.len() > 1 {
            self.0.pop();
        }
    }
}

#[derive(Default)]
struct TableBuffer {
    rows: Vec<Vec<String>>,
    row: Vec<String>,
    cell: String,
}

impl TableBuffer {
    fn end_cell(&mut self) {
        self.row.push(self.cell.trim().to_string());
        self.cell.clear();
    }

    fn end_row(&mut self) {
        if !self.row.is_empty() {
            self.rows.push(std::mem::take(&mut self.row));
        }
    }

    fn render(self, out: &mut Vec<Line<'static>>) {
        let columns = self.rows.iter().map(Vec::len).max().unwrap_or(0);
        if columns == 0 {
            return;
        }
        let mut widths = vec![0usize; columns];
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(cell.width());
            }
        }

        let border = |left: &str, mid: &str, right: &str| {
            let body = widths
                .iter()
                .map(|w| "─".repeat(w + 2))
                .collect::<Vec<_>>()
                .join(mid);
            Line::from(Span::styled(format!("{left}{body}{right}"), theme::text_dim()))
        };

        out.push(border("┌", "┬", "┐"));
        for (index, row) in self.rows.iter().enumerate() {
            let cell_style = if index == 0 {
                theme::text_primary().add_modifier(Modifier::BOLD)
            } else {
                theme::text_primary()
            };
            let mut spans = vec![Span::styled("│", theme::text_dim())];
            for (i, width) in widths.iter().enumerate() {
                let cell = row.get(i).map(String::as_str).unwrap_or("");
                let pad = width.saturating_sub(cell.width());
                spans.push(Span::styled(
                    format!(" {}{} ", cell, " ".repeat(pad)),
                    cell_style,
                ));
                spans.push(Span::styled("│", theme::text_dim()));
            }
            out.push(Line::from(spans));
            if index == 0 {
                out.push(border("├", "┼", "┤"));
            }
        }
        out.push(border("└", "┴", "┘"));
        out.push(Line::default());
    }
}

struct Renderer {
    lines: Vec<Line<'static>>,
    current: Vec<Span<'static>>,
    styles: StyleStack,
    list_depth: usize,
    code_block: Option<Vec<String>>,
    table: Option<TableBuffer>,
}

impl Renderer {
    fn new() -> Self {
        Self {
            lines: Vec::new(),
            current: Vec::new(),
            styles: StyleStack::new(),
            list_depth: 0,
            code_block: None,
            table: None,
        }
    }

    fn flush(&mut self) {
        if !self.current.is_empty() {
            self.lines.push(Line::from(std::mem::take(&mut self.current)));
        }
    }

    fn blank(&mut self) {
        self.flush();
        self.lines.push(Line::default());
    }

    fn start(&mut self, tag: Tag) {
        match tag {
            Tag::Heading { level, .. } => {
                self.flush();
                let marker = match level {
                    HeadingLevel::H1 => "# ",
                    HeadingLevel::H2 => "## ",
                    _ => "### ",
                };
                self.current
                    .push(Span::styled(marker, theme::text_dim()));
                self.styles.push(|s| s.fg(theme::ACCENT_PRIMARY).add_modifier(Modifier::BOLD));
            }
            Tag::BlockQuote(_) => {
                self.styles
                    .push(|s| s.fg(theme::TEXT_MUTED).add_modifier(Modifier::ITALIC));
            }
            Tag::CodeBlock(_) => self.code_block = Some(Vec::new()),
            Tag::List(_) => {
                self.flush();
                self.list_depth += 1;
            }
            Tag::Item => {
                let indent = INDENT_UNIT.repeat(self.list_depth.saturating_sub(1));
                self.current
                    .push(Span::styled(format!("{indent}{LIST_BULLET}"), theme::text_muted()));
            }
            Tag::Emphasis => self.styles.push(|s| s.add_modifier(Modifier::ITALIC)),
            Tag::Strong => self.styles.push(|s| s.add_modifier(Modifier::BOLD)),
            Tag::Link { .. } => self.styles.push(|_| theme::link()),
            Tag::Table(_) => {
                self.flush();
                self.table = Some(TableBuffer::default());
            }
            _ => {}
        }
    }

    fn end(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Paragraph => {
                if self.list_depth == 0 {
                    self.blank();
                } else {
                    self.flush();
                }
            }
            TagEnd::Heading(_) | TagEnd::BlockQuote(_) => {
                self.styles.pop();
                self.blank();
            }
            TagEnd::CodeBlock => {
                for line in self.code_block.take().unwrap_or_default() {
                    self.lines.push(Line::from(Span::styled(
                        format!("{INDENT_UNIT}{line}"),
                        Style::default().fg(theme::ACCENT_SUCCESS),
                    )));
                }
                self.lines.push(Line::default());
            }
            TagEnd::List(_) => {
                self.flush();
                self.list_depth = self.list_depth.saturating_sub(1);
                if self.list_depth == 0 {
                    self.lines.push(Line::default());
                }
            }
            TagEnd::Item => self.flush(),
            TagEnd::Emphasis | TagEnd::Strong | TagEnd::Link => self.styles.pop(),
            TagEnd::TableCell => {
                if let Some(table) = self.table.as_mut() {
                    table.end_cell();
                }
            }
            TagEnd::TableHead | TagEnd::TableRow => {
                if let Some(table) = self.table.as_mut() {
                    table.end_row();
                }
            }
            TagEnd::Table => {
                if let Some(table) = self.table.take() {
                    table.render(&mut self.lines);
                }
            }
            _ => {}
        }
    }

    fn text(&mut self, text: &str) {
        if let Some(block) = self.code_block.as_mut() {
            block.extend(text.lines().map(str::to_string));
        } else if let Some(table) = self.table.as_mut() {
            table.cell.push_str(text);
        } else {
            self.current
                .push(Span::styled(text.to_string(), self.styles.current()));
        }
    }

    fn code(&mut self, code: &str) {
        if let Some(table) = self.table.as_mut() {
            table.cell.push_str(code);
        } else {
            self.current.push(Span::styled(
                code.to_string(),
                Style::default().fg(theme::ACCENT_SUCCESS),
            ));
        }
    }

    fn finish(mut self) -> Vec<Line<'static>> {
        self.flush();
        while self.lines.last().is_some_and(|line| line.spans.is_empty()) {
            self.lines.pop();
        }
        self.lines
    }
}

pub fn render_markdown(text: &str) -> Vec<Line<'static>> {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let mut renderer = Renderer::new();
    for event in Parser::new_ext(text, options) {
        match event {
            Event::Start(tag) => renderer.start(tag),
            Event::End(tag) => renderer.end(tag),
            Event::Text(text) => renderer.text(&text),
            Event::Code(code) => renderer.code(&code),
            Event::SoftBreak => renderer.text(" "),
            Event::HardBreak => renderer.flush(),
            Event::Rule => {
                renderer.flush();
                renderer
                    .lines
                    .push(Line::from(Span::styled("─".repeat(RULE_WIDTH), theme::text_dim())));
                renderer.lines.push(Line::default());
            }
            _ => {}
        }
    }

    let lines = renderer.finish();
    if lines.is_empty() && !text.trim().is_empty() {
        return text.lines().map(|l| Line::from(l.to_string())).collect();
    }
    lines
}
