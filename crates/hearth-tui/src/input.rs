use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use hearth_core::query::SortColumn;

use crate::clipboard::copy_text;
use crate::ui::notifications::Notification;
use crate::ui::{App, InputMode, Modal};

/// Rows moved by PageUp/PageDown
const PAGE_ROWS: usize = 10;

/// Lines moved by PageUp/PageDown in the detail view
const DETAIL_PAGE_LINES: i16 = 15;

pub(crate) fn handle_key(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.on_ctrl_c();
        return;
    }

    match app.modal {
        Modal::Detail { .. } => handle_detail_key(app, key),
        Modal::TagPicker { .. } => handle_tag_picker_key(app, key),
        Modal::Help => handle_help_key(app, key),
        Modal::None => match app.input_mode {
            InputMode::Search => handle_search_key(app, key),
            InputMode::Normal => handle_normal_key(app, key),
        },
    }
}

/// Bracketed paste goes into the query while searching
pub(crate) fn handle_paste(app: &mut App, text: &str) {
    if app.modal == Modal::None && app.input_mode == InputMode::Search {
        app.push_query_str(text);
    }
}

fn handle_normal_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Char('/') => app.start_search(),
        KeyCode::Char('j') | KeyCode::Down => app.select_next(),
        KeyCode::Char('k') | KeyCode::Up => app.select_previous(),
        KeyCode::PageDown => app.page_down(PAGE_ROWS),
        KeyCode::PageUp => app.page_up(PAGE_ROWS),
        KeyCode::Char('g') | KeyCode::Home => app.select_first(),
        KeyCode::Char('G') | KeyCode::End => app.select_last(),
        KeyCode::Enter => app.open_detail(),
        KeyCode::Char('t') => app.open_tag_picker(),
        KeyCode::Char('r') => app.reset(),
        KeyCode::Char('s') => app.cycle_sort(),
        KeyCode::Char('?') => app.open_help(),
        KeyCode::Esc => app.notifications.dismiss(),
        KeyCode::Char(c @ '1'..='5') => {
            let index = c as usize - '1' as usize;
            app.toggle_sort(SortColumn::ALL[index]);
        }
        _ => {}
    }
}

fn handle_search_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => app.stop_search(),
        KeyCode::Backspace => app.pop_query_char(),
        KeyCode::Down => app.select_next(),
        KeyCode::Up => app.select_previous(),
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => app.clear_query(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.push_query_char(c)
        }
        _ => {}
    }
}

fn handle_detail_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => app.close_modal(),
        KeyCode::Char('j') | KeyCode::Down => app.scroll_detail(1),
        KeyCode::Char('k') | KeyCode::Up => app.scroll_detail(-1),
        KeyCode::PageDown | KeyCode::Char(' ') => app.scroll_detail(DETAIL_PAGE_LINES),
        KeyCode::PageUp => app.scroll_detail(-DETAIL_PAGE_LINES),
        KeyCode::Char('g') | KeyCode::Home => {
            if let Modal::Detail { scroll, .. } = &mut app.modal {
                *scroll = 0;
            }
        }
        KeyCode::Char('y') => copy_detail(app),
        _ => {}
    }
}

fn copy_detail(app: &mut App) {
    let Modal::Detail { hunt, .. } = &app.modal else {
        return;
    };
    let id = hunt.id.clone();
    match copy_text(&hunt.content) {
        Ok(()) => app
            .notifications
            .push(Notification::success(format!("Copied {id} to clipboard"))),
        Err(e) => {
            tracing::warn!(error = %e, "Clipboard copy failed");
            app.notifications
                .push(Notification::error(format!("Copy failed: {e}")));
        }
    }
}

fn handle_tag_picker_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => app.close_modal(),
        KeyCode::Char('j') | KeyCode::Down => app.move_tag_cursor(1),
        KeyCode::Char('k') | KeyCode::Up => app.move_tag_cursor(-1),
        KeyCode::PageDown => app.move_tag_cursor(PAGE_ROWS as isize),
        KeyCode::PageUp => app.move_tag_cursor(-(PAGE_ROWS as isize)),
        KeyCode::Enter => app.confirm_tag(),
        _ => {}
    }
}

fn handle_help_key(app: &mut App, key: KeyEvent) {
    if matches!(
        key.code,
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') | KeyCode::Enter
    ) {
        app.close_modal();
    }
}
