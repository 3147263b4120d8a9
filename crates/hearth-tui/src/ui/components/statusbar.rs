// Single line at the bottom: notification on the left, load summary on the right

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::ui::format::{pluralize, truncate_with_ellipsis};
use crate::ui::notifications::Notification;
use crate::ui::theme;

/// Right-hand summary of what is on screen
pub struct StatusInfo {
    pub shown: usize,
    pub loaded: usize,
    pub loading: bool,
    pub loaded_at: Option<String>,
}

impl StatusInfo {
    fn label(&self) -> String {
        let total = pluralize(self.loaded, "hunt", "hunts");
        let count = if self.shown == self.loaded {
            total
        } else {
            format!("{}/{total}", self.shown)
        };
        match (&self.loaded_at, self.loading) {
            (_, true) => format!("{count} · loading… "),
            (Some(at), false) => format!("{count} · {at} "),
            (None, false) => format!("{count} "),
        }
    }
}

pub fn render_statusbar(
    f: &mut Frame,
    area: Rect,
    notification: Option<&Notification>,
    info: &StatusInfo,
) {
    let summary = info.label();
    let [left, right] = Layout::horizontal([
        Constraint::Min(0),
        Constraint::Length(summary.width() as u16 + 1),
    ])
    .areas(area);

    let bar = Style::default().bg(theme::BG_STATUSBAR);

    let left_line = match notification {
        Some(n) => {
            let color = n.level.color();
            let icon = format!(" {} ", n.level.icon());
            let room = (left.width as usize).saturating_sub(icon.width());
            Line::from(vec![
                Span::styled(icon, Style::default().fg(color)),
                Span::styled(
                    truncate_with_ellipsis(&n.message, room),
                    Style::default().fg(color),
                ),
            ])
        }
        None => Line::default(),
    };
    f.render_widget(Paragraph::new(left_line).style(bar), left);

    let summary_color = if info.loading {
        theme::ACCENT_WARNING
    } else {
        theme::TEXT_MUTED
    };
    f.render_widget(
        Paragraph::new(summary)
            .alignment(Alignment::Right)
            .style(bar.fg(summary_color)),
        right,
    );
}
