use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::ui::components::{render_statusbar, StatusInfo};
use crate::ui::format::{format_loaded_at, pluralize};
use crate::ui::layout::ScreenAreas;
use crate::ui::views::{help, hunt_detail, hunt_table, tag_picker};
use crate::ui::{layout, theme, App, InputMode, LoadState, Modal};

const TITLE: &str = "HEARTH";
const SUBTITLE: &str = "Hunting Exchange And Research Threat Hub";
const SEARCH_PLACEHOLDER: &str = "Press / to search hypotheses, notes, tags and content";

pub(crate) fn render(f: &mut Frame, app: &mut App) {
    let area = f.area();
    f.render_widget(Block::default().style(Style::default().bg(theme::BG_APP)), area);

    let screen = ScreenAreas::split(area);

    render_header(f, screen.header);
    render_search_bar(f, app, screen.search);
    hunt_table::render_hunt_table(f, app, screen.table);
    render_footer(f, app, screen.footer);

    let info = StatusInfo {
        shown: app.hunts.len(),
        loaded: app.loaded.len(),
        loading: app.is_loading(),
        loaded_at: app.loaded_at.map(format_loaded_at),
    };
    render_statusbar(f, screen.status, app.notifications.current(), &info);

    render_modal(f, app, area);
}

fn render_modal(f: &mut Frame, app: &mut App, area: Rect) {
    if let Modal::Detail { hunt, scroll } = &mut app.modal {
        hunt_detail::render_hunt_detail(f, area, hunt, scroll);
        return;
    }
    match &app.modal {
        Modal::TagPicker { tags, index } => {
            tag_picker::render_tag_picker(f, area, app, tags, *index)
        }
        Modal::Help => help::render_help(f, area),
        Modal::None | Modal::Detail { .. } => {}
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let area = layout::with_content_padding(area);
    let line = Line::from(vec![
        Span::styled("🔥 ", theme::title()),
        Span::styled(TITLE, theme::title()),
        Span::styled(format!("  {SUBTITLE}"), theme::text_muted()),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

fn render_search_bar(f: &mut Frame, app: &App, area: Rect) {
    let area = layout::with_content_padding(area);
    let [input, filters] =
        Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(area);

    let searching = app.input_mode == InputMode::Search;
    let prompt_style = if searching {
        theme::input_active()
    } else {
        theme::text_dim()
    };
    let mut spans = vec![Span::styled("/ ", prompt_style)];
    if app.query.is_empty() && !searching {
        spans.push(Span::styled(SEARCH_PLACEHOLDER, theme::input_placeholder()));
    } else {
        spans.push(Span::styled(app.query.clone(), theme::text_primary()));
        if searching {
            spans.push(Span::styled("▏", theme::input_active()));
        }
    }
    f.render_widget(Paragraph::new(Line::from(spans)), input);

    f.render_widget(Paragraph::new(filter_line(app)), filters);
}

/// Active tag and sort, or the last load error
fn filter_line(app: &App) -> Line<'static> {
    if let LoadState::Error(message) = &app.load_state {
        return Line::from(Span::styled(
            format!("Load failed: {message}"),
            theme::error(),
        ));
    }

    let mut spans = Vec::new();
    if let Some(tag) = &app.selected_tag {
        spans.push(Span::styled("tag ", theme::text_dim()));
        spans.push(Span::styled(format!("#{tag}"), theme::tag()));
        spans.push(Span::raw("  "));
    }
    if let Some(column) = app.sort.column {
        spans.push(Span::styled("sort ", theme::text_dim()));
        spans.push(Span::styled(
            format!("{} {}", column.label(), app.sort.direction.arrow()),
            theme::text_muted(),
        ));
        spans.push(Span::raw("  "));
    }
    if !app.query.trim().is_empty() && !app.is_loading() {
        spans.push(Span::styled(
            pluralize(app.loaded.len(), "match", "matches"),
            theme::text_dim(),
        ));
    }
    Line::from(spans)
}

fn render_footer(f: &mut Frame, app: &App, area: Rect) {
    let hints: &[(&str, &str)] = match app.input_mode {
        InputMode::Search => &[("enter/esc", "done"), ("ctrl+u", "clear"), ("↑/↓", "move")],
        InputMode::Normal => &[
            ("/", "search"),
            ("t", "tags"),
            ("1-5", "sort"),
            ("enter", "open"),
            ("r", "reset"),
            ("?", "help"),
            ("q", "quit"),
        ],
    };
    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (key, action) in hints {
        spans.push(Span::styled(*key, theme::text_muted()));
        spans.push(Span::styled(format!(" {action}  "), theme::text_dim()));
    }
    f.render_widget(
        Paragraph::new(Line::from(spans)),
        layout::with_content_padding(area),
    );
}
