//! Ember palette and the named styles views draw with.
//!
//! Views never build colors inline; they pick a style from here so the look
//! can be retuned in one place.

use ratatui::style::{Color, Modifier, Style};

// Backgrounds, darkest first
pub const BG_APP: Color = Color::Rgb(0, 0, 0);
pub const BG_MODAL_OVERLAY: Color = Color::Rgb(8, 8, 8);
pub const BG_STATUSBAR: Color = Color::Rgb(12, 12, 12);
pub const BG_MODAL: Color = Color::Rgb(18, 18, 18);
pub const BG_HEADER: Color = Color::Rgb(23, 23, 23);
pub const BG_SELECTED: Color = Color::Rgb(40, 30, 24);

// Foregrounds, brightest first
pub const TEXT_PRIMARY: Color = Color::Rgb(220, 220, 220);
pub const TEXT_MUTED: Color = Color::Rgb(128, 128, 128);
pub const TEXT_DIM: Color = Color::Rgb(90, 90, 90);

/// Titles, focus, hunt ids
pub const ACCENT_PRIMARY: Color = Color::Rgb(232, 130, 64);
pub const ACCENT_LINK: Color = Color::Rgb(86, 156, 214);
pub const ACCENT_SUCCESS: Color = Color::Rgb(106, 153, 85);
pub const ACCENT_WARNING: Color = Color::Rgb(206, 165, 100);
pub const ACCENT_ERROR: Color = Color::Rgb(244, 112, 112);
pub const ACCENT_TAG: Color = Color::Rgb(169, 154, 203);

/// Each HEARTH directory gets its own hue: Flames hottest, Alchemy coolest
pub fn source_color(directory: &str) -> Color {
    match directory {
        "Flames" => Color::Rgb(232, 110, 64),
        "Embers" => ACCENT_WARNING,
        "Alchemy" => Color::Rgb(120, 170, 190),
        _ => TEXT_MUTED,
    }
}

fn fg(color: Color) -> Style {
    Style::default().fg(color)
}

fn bold(color: Color) -> Style {
    fg(color).add_modifier(Modifier::BOLD)
}

pub fn text_primary() -> Style {
    fg(TEXT_PRIMARY)
}

pub fn text_muted() -> Style {
    fg(TEXT_MUTED)
}

pub fn text_dim() -> Style {
    fg(TEXT_DIM)
}

pub fn title() -> Style {
    bold(ACCENT_PRIMARY)
}

/// Field names in the detail view
pub fn label() -> Style {
    bold(TEXT_MUTED)
}

pub fn link() -> Style {
    fg(ACCENT_LINK).add_modifier(Modifier::UNDERLINED)
}

pub fn tag() -> Style {
    fg(ACCENT_TAG)
}

pub fn error() -> Style {
    fg(ACCENT_ERROR)
}

pub fn input_active() -> Style {
    fg(ACCENT_PRIMARY)
}

pub fn input_placeholder() -> Style {
    fg(TEXT_DIM)
}

pub fn table_header() -> Style {
    bold(TEXT_MUTED).bg(BG_HEADER)
}

pub fn table_header_sorted() -> Style {
    bold(ACCENT_PRIMARY).bg(BG_HEADER)
}

pub fn table_row_selected() -> Style {
    Style::default()
        .bg(BG_SELECTED)
        .add_modifier(Modifier::BOLD)
}

pub fn modal_title() -> Style {
    bold(TEXT_PRIMARY)
}

pub fn modal_hint() -> Style {
    fg(TEXT_DIM)
}

pub fn modal_item() -> Style {
    fg(TEXT_PRIMARY)
}

/// Inverted: dark text on the accent
pub fn modal_item_selected() -> Style {
    bold(BG_APP).bg(ACCENT_PRIMARY)
}

pub fn modal_item_detail() -> Style {
    fg(TEXT_DIM)
}

pub fn modal_item_detail_selected() -> Style {
    fg(BG_APP).bg(ACCENT_PRIMARY)
}
