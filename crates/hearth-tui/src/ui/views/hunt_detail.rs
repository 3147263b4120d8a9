use hearth_core::Hunt;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::ui::components::{
    modal_area, render_modal_background, render_modal_header, render_modal_overlay, ModalSize,
};
use crate::ui::markdown::render_markdown;
use crate::ui::{layout, theme};

const LABEL_WIDTH: usize = 12;

fn field(label: &str, value: Span<'static>) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label:<LABEL_WIDTH$}"), theme::label()),
        value,
    ])
}

/// Metadata block followed by the rendered document
pub fn detail_lines(hunt: &Hunt) -> Vec<Line<'static>> {
    let mut lines = vec![
        field(
            "Hypothesis",
            Span::styled(hunt.hypothesis.clone(), theme::text_primary()),
        ),
        field("Tactic", Span::styled(hunt.tactic.clone(), theme::text_primary())),
        field("Tags", Span::styled(hunt.tags_display(), theme::tag())),
    ];
    if let Some(notes) = &hunt.notes {
        lines.push(field("Notes", Span::styled(notes.clone(), theme::text_primary())));
    }
    if !hunt.submitter.is_empty() {
        lines.push(field(
            "Submitter",
            Span::styled(hunt.submitter.name.clone(), theme::text_primary()),
        ));
        if !hunt.submitter.link.is_empty() {
            lines.push(field(
                "",
                Span::styled(hunt.submitter.link.clone(), theme::link()),
            ));
        }
    }
    lines.push(field(
        "Source",
        Span::styled(
            hunt.source.to_string(),
            Style::default().fg(theme::source_color(&hunt.source.directory)),
        ),
    ));
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "─".repeat(40),
        theme::text_dim(),
    )));
    lines.push(Line::default());
    lines.extend(render_markdown(&hunt.content));
    lines
}

/// Clamps `scroll` so the last wrapped line stays at the bottom edge
pub fn render_hunt_detail(f: &mut Frame, area: Rect, hunt: &Hunt, scroll: &mut u16) {
    render_modal_overlay(f, area);
    let popup = modal_area(area, &ModalSize::detail());
    render_modal_background(f, popup);

    let title = format!("{} · {}", hunt.id, hunt.source);
    let body = render_modal_header(f, popup, &title, "y copy · j/k scroll · esc close");
    let body = layout::with_modal_padding(body);

    let paragraph = Paragraph::new(detail_lines(hunt)).wrap(Wrap { trim: false });
    let total = paragraph.line_count(body.width);
    let max_scroll = total
        .saturating_sub(body.height as usize)
        .min(u16::MAX as usize) as u16;
    *scroll = (*scroll).min(max_scroll);

    f.render_widget(paragraph.scroll((*scroll, 0)), body);
}

#[cfg(test)]
mod tests {
    use super::*;
    use hearth_core::{DocumentRef, Submitter};

    fn text(lines: &[Line]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    fn hunt(notes: Option<&str>, submitter: Submitter) -> Hunt {
        Hunt {
            id: "H001".into(),
            hypothesis: "Odd DNS volume".into(),
            tactic: "Exfiltration".into(),
            notes: notes.map(str::to_string),
            tags: vec!["dns".into(), "network".into()],
            submitter,
            content: "# Body\n\nDetails here.".into(),
            source: DocumentRef::new("Flames", "H001"),
        }
    }

    #[test]
    fn test_all_fields_present() {
        let lines = text(&detail_lines(&hunt(
            Some("Check resolvers"),
            Submitter::new("Alice", "http://x"),
        )));
        assert!(lines.iter().any(|l| l.ends_with("Odd DNS volume")));
        assert!(lines.iter().any(|l| l.ends_with("#dns #network")));
        assert!(lines.iter().any(|l| l.ends_with("Check resolvers")));
        assert!(lines.iter().any(|l| l.ends_with("Alice")));
        assert!(lines.iter().any(|l| l.ends_with("http://x")));
        assert!(lines.iter().any(|l| l.ends_with("Flames/H001")));
        assert!(lines.iter().any(|l| l == "Details here."));
    }

    #[test]
    fn test_optional_fields_skipped() {
        let lines = text(&detail_lines(&hunt(None, Submitter::default())));
        assert!(!lines.iter().any(|l| l.starts_with("Notes")));
        assert!(!lines.iter().any(|l| l.starts_with("Submitter")));
    }
}
