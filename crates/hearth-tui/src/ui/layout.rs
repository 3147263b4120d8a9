//! Screen geometry: fixed row heights, table column widths, modal sizes and
//! the split of the frame into its bands.

use ratatui::layout::{Constraint, Layout, Rect};

/// Left and right inset of the main bands
pub const CONTENT_PADDING_H: u16 = 2;
/// Left and right inset inside modals
pub const MODAL_PADDING_H: u16 = 2;

pub const HEADER_HEIGHT: u16 = 2;
/// Query line, filter line, gap
pub const SEARCH_BAR_HEIGHT: u16 = 3;
pub const FOOTER_HEIGHT: u16 = 1;
pub const STATUSBAR_HEIGHT: u16 = 1;

pub const COLUMN_WIDTH_ID: u16 = 8;
pub const COLUMN_WIDTH_TACTIC: u16 = 22;
pub const COLUMN_WIDTH_TAGS: u16 = 24;
pub const COLUMN_WIDTH_SUBMITTER: u16 = 18;
pub const COLUMN_WIDTH_SOURCE: u16 = 9;
/// Hypothesis never shrinks below this
pub const COLUMN_MIN_HYPOTHESIS: u16 = 10;

pub const MODAL_DEFAULT_WIDTH: u16 = 70;
pub const MODAL_DEFAULT_HEIGHT_PERCENT: f32 = 0.7;
pub const MODAL_DETAIL_WIDTH: u16 = 110;
pub const MODAL_DETAIL_HEIGHT_PERCENT: f32 = 0.9;

/// The five horizontal bands of the main screen, top to bottom
pub struct ScreenAreas {
    pub header: Rect,
    pub search: Rect,
    pub table: Rect,
    pub footer: Rect,
    pub status: Rect,
}

impl ScreenAreas {
    pub fn split(area: Rect) -> Self {
        let [header, search, table, footer, status] = Layout::vertical([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(SEARCH_BAR_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(FOOTER_HEIGHT),
            Constraint::Length(STATUSBAR_HEIGHT),
        ])
        .areas(area);
        Self {
            header,
            search,
            table,
            footer,
            status,
        }
    }
}

/// Width left for the hypothesis column once the fixed columns, their
/// spacing and the highlight marker are taken
pub fn hypothesis_width(table_width: u16) -> u16 {
    let fixed = COLUMN_WIDTH_ID
        + COLUMN_WIDTH_TACTIC
        + COLUMN_WIDTH_TAGS
        + COLUMN_WIDTH_SUBMITTER
        + COLUMN_WIDTH_SOURCE;
    // five gaps between six columns, one for the marker
    table_width
        .saturating_sub(fixed + 6)
        .max(COLUMN_MIN_HYPOTHESIS)
}

fn inset(area: Rect, padding: u16) -> Rect {
    Rect {
        x: area.x.saturating_add(padding),
        width: area.width.saturating_sub(padding.saturating_mul(2)),
        ..area
    }
}

pub fn with_content_padding(area: Rect) -> Rect {
    inset(area, CONTENT_PADDING_H)
}

pub fn with_modal_padding(area: Rect) -> Rect {
    inset(area, MODAL_PADDING_H)
}
