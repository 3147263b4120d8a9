use hearth_core::constants::ALL_TAGS;
use ratatui::{layout::Rect, Frame};

use crate::ui::components::{
    modal_area, render_modal_background, render_modal_header, render_modal_items,
    render_modal_overlay, ModalItem, ModalSize,
};
use crate::ui::App;

pub fn render_tag_picker(f: &mut Frame, area: Rect, app: &App, tags: &[String], index: usize) {
    render_modal_overlay(f, area);
    let popup = modal_area(
        area,
        &ModalSize {
            max_width: 50,
            height_percent: 0.6,
        },
    );
    render_modal_background(f, popup);
    let body = render_modal_header(f, popup, "Filter by tag", "enter select · esc close");

    let items: Vec<ModalItem> = tags
        .iter()
        .enumerate()
        .map(|(i, tag)| {
            let (text, count) = if tag == ALL_TAGS {
                (ALL_TAGS.to_string(), app.loaded.len())
            } else {
                (format!("#{tag}"), app.tag_count(tag))
            };
            let active = match &app.selected_tag {
                Some(selected) => selected == tag,
                None => tag == ALL_TAGS,
            };
            ModalItem {
                label: if active { format!("{text} ✓") } else { text },
                detail: count.to_string(),
                selected: i == index,
            }
        })
        .collect();
    render_modal_items(f, body, &items);
}
