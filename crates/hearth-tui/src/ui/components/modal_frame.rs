use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Widget},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::ui::{layout, theme};

/// Modal sizing relative to the terminal
pub struct ModalSize {
    /// Capped at terminal width - 4
    pub max_width: u16,
    /// Fraction of terminal height, 0.0 - 1.0
    pub height_percent: f32,
}

impl Default for ModalSize {
    fn default() -> Self {
        Self {
            max_width: layout::MODAL_DEFAULT_WIDTH,
            height_percent: layout::MODAL_DEFAULT_HEIGHT_PERCENT,
        }
    }
}

impl ModalSize {
    pub fn detail() -> Self {
        Self {
            max_width: layout::MODAL_DETAIL_WIDTH,
            height_percent: layout::MODAL_DETAIL_HEIGHT_PERCENT,
        }
    }
}

/// Centered popup rectangle
pub fn modal_area(terminal_area: Rect, size: &ModalSize) -> Rect {
    let width = size.max_width.min(terminal_area.width.saturating_sub(4));
    let height = ((terminal_area.height as f32 * size.height_percent) as u16).max(3);
    let height = height.min(terminal_area.height);
    let x = terminal_area.x + terminal_area.width.saturating_sub(width) / 2;
    let y = terminal_area.y + terminal_area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width, height)
}

/// Dims whatever is already drawn underneath a modal
struct DimOverlay;

impl Widget for DimOverlay {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = Style::default()
            .add_modifier(Modifier::DIM)
            .bg(theme::BG_MODAL_OVERLAY);
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_style(style);
                }
            }
        }
    }
}

pub fn render_modal_overlay(f: &mut Frame, terminal_area: Rect) {
    f.render_widget(DimOverlay, terminal_area);
}

pub fn render_modal_background(f: &mut Frame, area: Rect) {
    f.render_widget(Clear, area);
    f.render_widget(
        Block::default().style(Style::default().bg(theme::BG_MODAL)),
        area,
    );
}

/// Title on the left, key hint on the right; returns the area below
pub fn render_modal_header(f: &mut Frame, area: Rect, title: &str, hint: &str) -> Rect {
    let [header, rest] =
        Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(area);
    let header = layout::with_modal_padding(header);

    let spacing = (header.width as usize).saturating_sub(title.width() + hint.width());
    let line = Line::from(vec![
        Span::styled(title.to_string(), theme::modal_title()),
        Span::raw(" ".repeat(spacing)),
        Span::styled(hint.to_string(), theme::modal_hint()),
    ]);
    f.render_widget(Paragraph::new(line), header);
    rest
}

/// One selectable row in a modal list; `detail` is right-aligned
pub struct ModalItem {
    pub label: String,
    pub detail: String,
    pub selected: bool,
}

/// Keeps the selected item on screen by scrolling the window
pub fn render_modal_items(f: &mut Frame, area: Rect, items: &[ModalItem]) {
    let area = layout::with_modal_padding(area);
    let visible = area.height as usize;
    if visible == 0 {
        return;
    }
    let selected = items.iter().position(|i| i.selected).unwrap_or(0);
    let offset = selected.saturating_sub(visible - 1);

    for (row, item) in items.iter().skip(offset).take(visible).enumerate() {
        let (label_style, detail_style) = if item.selected {
            (
                theme::modal_item_selected(),
                theme::modal_item_detail_selected(),
            )
        } else {
            (theme::modal_item(), theme::modal_item_detail())
        };
        let label = format!(" {}", item.label);
        let detail = format!("{} ", item.detail);
        let gap = (area.width as usize).saturating_sub(label.width() + detail.width());
        let line = Line::from(vec![
            Span::styled(label, label_style),
            Span::styled(" ".repeat(gap), label_style),
            Span::styled(detail, detail_style),
        ]);
        let row_area = Rect::new(area.x, area.y + row as u16, area.width, 1);
        f.render_widget(Paragraph::new(line), row_area);
    }
}
