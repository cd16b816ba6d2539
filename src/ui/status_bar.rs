use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = Vec::new();

    // Mode indicator
    if state.is_placing_marker {
        parts.push(Span::styled(
            " PLACING ",
            Style::default()
                .fg(Theme::BG_DARK)
                .bg(Theme::ACCENT_GREEN)
                .add_modifier(Modifier::BOLD),
        ));
    } else {
        parts.push(Span::styled(
            " BROWSE ",
            Style::default().fg(Theme::BG_DARK).bg(Theme::ACCENT_TEAL),
        ));
    }

    let mut summary = format!(" Markers: {}", state.custom_markers.len());
    if let Some(ref name) = state.selected_destination {
        summary.push_str(&format!(" | Selected: {}", name));
    }
    if let Some(canvas) = state.canvas.as_ref() {
        summary.push_str(&format!(" | Center: {}", canvas.viewport.center()));
    }
    summary.push(' ');
    parts.push(Span::styled(summary, Theme::status_bar()));

    if let Some(ref msg) = state.status_message {
        parts.push(Span::styled(
            format!(" {} ", msg.text),
            Style::default()
                .fg(Theme::ACCENT_AMBER)
                .bg(Theme::BG_ELEVATED),
        ));
    }

    // Focus indicator
    let focus_name = match state.focus {
        FocusPanel::Destinations => "LIST",
        FocusPanel::Map => "MAP",
        FocusPanel::Controls => "CONTROLS",
    };
    // Pad to fill remaining space
    let used: usize = parts.iter().map(|s| s.content.width()).sum();
    let remaining = (area.width as usize).saturating_sub(used + focus_name.len() + 3);
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(
        format!(" [{}] ", focus_name),
        Style::default().fg(Theme::ACCENT_TEAL).bg(Theme::BG_ELEVATED),
    ));

    let line = Line::from(parts);
    let paragraph = Paragraph::new(line);
    frame.render_widget(paragraph, area);
}
