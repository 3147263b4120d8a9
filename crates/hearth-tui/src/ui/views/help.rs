use hearth_core::constants::links;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::ui::components::{
    modal_area, render_modal_background, render_modal_header, render_modal_overlay, ModalSize,
};
use crate::ui::{layout, theme};

const BINDINGS: &[(&str, &str)] = &[
    ("/", "search (live)"),
    ("ctrl+u", "clear search"),
    ("j / k", "move selection"),
    ("g / G", "first / last"),
    ("enter", "open hunt"),
    ("y", "copy hunt markdown (in detail)"),
    ("t", "filter by tag"),
    ("1-5", "sort by column, again to reverse"),
    ("s", "sort by next column"),
    ("r", "reset search and tag"),
    ("?", "this help"),
    ("q / ctrl+c ×2", "quit"),
];

const LINKS: &[(&str, &str)] = &[
    ("Submit a hunt", links::SUBMIT_HUNT),
    ("Forge", links::FORGE),
    ("Resources", links::RESOURCES),
];

fn help_lines() -> Vec<Line<'static>> {
    let mut lines: Vec<Line<'static>> = BINDINGS
        .iter()
        .map(|(key, action)| {
            Line::from(vec![
                Span::styled(format!("{key:<16}"), theme::title()),
                Span::styled(*action, theme::text_primary()),
            ])
        })
        .collect();
    lines.push(Line::default());
    lines.extend(LINKS.iter().map(|(name, url)| {
        Line::from(vec![
            Span::styled(format!("{name:<16}"), theme::label()),
            Span::styled(*url, theme::link()),
        ])
    }));
    lines
}

pub fn render_help(f: &mut Frame, area: Rect) {
    render_modal_overlay(f, area);
    let popup = modal_area(
        area,
        &ModalSize {
            max_width: 90,
            height_percent: 0.6,
        },
    );
    render_modal_background(f, popup);
    let body = render_modal_header(f, popup, "Keys", "esc close");
    f.render_widget(
        Paragraph::new(help_lines()),
        layout::with_modal_padding(body),
    );
}
