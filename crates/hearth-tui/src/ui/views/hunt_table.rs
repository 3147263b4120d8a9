use hearth_core::query::SortColumn;
use hearth_core::Hunt;
use ratatui::{
    layout::{Constraint, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table},
    Frame,
};

use crate::ui::format::{single_line, truncate_with_ellipsis};
use crate::ui::{layout, theme, App, LoadState};

/// Tags is the only column without a sort key
const TAGS_LABEL: &str = "Tags";

fn header(app: &App) -> Row<'static> {
    let mut cells: Vec<Cell> = SortColumn::ALL
        .iter()
        .enumerate()
        .map(|(i, column)| {
            if app.sort.is_sorted_by(*column) {
                Cell::from(format!("{} {}", column.label(), app.sort.direction.arrow()))
                    .style(theme::table_header_sorted())
            } else {
                Cell::from(format!("{} {}", column.label(), i + 1)).style(theme::table_header())
            }
        })
        .collect();
    // Display order: id, hypothesis, tactic, tags, submitter, source
    cells.insert(3, Cell::from(TAGS_LABEL).style(theme::table_header()));
    Row::new(cells).style(theme::table_header())
}

fn row(hunt: &Hunt, hypothesis_width: usize) -> Row<'static> {
    let tags = truncate_with_ellipsis(&hunt.tags_display(), layout::COLUMN_WIDTH_TAGS as usize);
    let submitter = truncate_with_ellipsis(
        &hunt.submitter.name,
        layout::COLUMN_WIDTH_SUBMITTER as usize,
    );
    Row::new(vec![
        Cell::from(hunt.id.clone()).style(theme::title()),
        Cell::from(truncate_with_ellipsis(
            &single_line(&hunt.hypothesis),
            hypothesis_width,
        ))
        .style(theme::text_primary()),
        Cell::from(truncate_with_ellipsis(
            &single_line(&hunt.tactic),
            layout::COLUMN_WIDTH_TACTIC as usize,
        ))
        .style(theme::text_muted()),
        Cell::from(tags).style(theme::tag()),
        Cell::from(submitter).style(theme::text_muted()),
        Cell::from(hunt.source.directory.clone())
            .style(Style::default().fg(theme::source_color(&hunt.source.directory))),
    ])
}

fn empty_message(app: &App) -> Line<'static> {
    match &app.load_state {
        LoadState::Loading => Line::from(Span::styled("Loading hunts…", theme::text_muted())),
        LoadState::Error(message) => Line::from(vec![
            Span::styled(format!("Failed to load hunts: {message}"), theme::error()),
            Span::styled("  r to retry", theme::text_dim()),
        ]),
        LoadState::Ready if app.query.trim().is_empty() && app.selected_tag.is_none() => {
            Line::from(Span::styled("No hunts found", theme::text_muted()))
        }
        LoadState::Ready => Line::from(Span::styled(
            "No hunts match the current filters",
            theme::text_muted(),
        )),
    }
}

pub fn render_hunt_table(f: &mut Frame, app: &mut App, area: Rect) {
    let area = layout::with_content_padding(area);

    if app.hunts.is_empty() {
        f.render_widget(Paragraph::new(empty_message(app)), area);
        return;
    }

    let hypothesis_width = layout::hypothesis_width(area.width) as usize;

    let widths = [
        Constraint::Length(layout::COLUMN_WIDTH_ID),
        Constraint::Min(layout::COLUMN_MIN_HYPOTHESIS),
        Constraint::Length(layout::COLUMN_WIDTH_TACTIC),
        Constraint::Length(layout::COLUMN_WIDTH_TAGS),
        Constraint::Length(layout::COLUMN_WIDTH_SUBMITTER),
        Constraint::Length(layout::COLUMN_WIDTH_SOURCE),
    ];
    let rows: Vec<Row> = app
        .hunts
        .iter()
        .map(|hunt| row(hunt, hypothesis_width))
        .collect();

    let table = Table::new(rows, widths)
        .header(header(app))
        .column_spacing(1)
        .row_highlight_style(theme::table_row_selected())
        .highlight_symbol("▌");
    f.render_stateful_widget(table, area, &mut app.table_state);
}
