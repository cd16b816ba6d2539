use crate::app::state::*;
use crate::ui::theme::Theme;
use crate::ui::{panel_block, wrap_words};
use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Wrap};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = panel_block(" Map Controls ", FocusPanel::Controls, state);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = button_section(state, inner.width as usize)
        .into_iter()
        .map(|(line, _)| line)
        .collect();

    lines.push(Line::default());
    lines.push(Line::from(Span::styled("Map Information", Theme::heading())));
    for (keys, text) in [
        ("click", "markers to see details"),
        ("+/-", "or wheel to zoom"),
        ("arrows", "or drag to pan"),
        ("0", "to reset the view"),
        ("m", "to place a marker"),
        ("Tab", "to switch panels"),
        ("q", "to quit"),
    ] {
        lines.push(Line::from(vec![
            Span::styled("• ", Theme::muted()),
            Span::styled(keys, Theme::key_hint()),
            Span::styled(format!(" {}", text), Theme::secondary()),
        ]));
    }

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, inner);
}

/// The button that owns the row under a mouse press, if any.
pub fn hit_test(state: &AppState, area: Rect, col: u16, row: u16) -> Option<ControlButton> {
    let inner = area.inner(Margin::new(1, 1));
    if !inner.contains(Position::new(col, row)) {
        return None;
    }
    button_section(state, inner.width as usize)
        .into_iter()
        .nth((row - inner.y) as usize)
        .and_then(|(_, button)| button)
}

/// Button rows plus their headings and hints, one screen row per line.
fn button_section(state: &AppState, width: usize) -> Vec<(Line<'static>, Option<ControlButton>)> {
    let focused = state.focus == FocusPanel::Controls;
    let mut lines = Vec::new();
    let push_wrapped = |lines: &mut Vec<(Line<'static>, Option<ControlButton>)>, text: &str| {
        for row in wrap_words(text, width) {
            lines.push((Line::from(Span::styled(row, Theme::secondary())), None));
        }
    };

    for (i, button) in state.control_buttons().into_iter().enumerate() {
        let has_cursor = focused && i == state.controls_cursor;
        match button {
            ControlButton::TogglePlacement => {
                lines.push((
                    Line::from(Span::styled("Marker Placement", Theme::heading())),
                    None,
                ));
                let (label, style) = if state.is_placing_marker {
                    ("Cancel Placing Marker", Theme::button_active())
                } else {
                    ("Place Custom Marker", Theme::button())
                };
                lines.push((button_line(label, style, has_cursor), Some(button)));
                if state.is_placing_marker {
                    push_wrapped(&mut lines, "Click anywhere on the map to place a marker");
                }
            }
            ControlButton::ClearMarkers => {
                lines.push((Line::default(), None));
                lines.push((
                    Line::from(Span::styled("Manage Markers", Theme::heading())),
                    None,
                ));
                lines.push((
                    button_line("Clear All Custom Markers", Theme::button_danger(), has_cursor),
                    Some(button),
                ));
                push_wrapped(&mut lines, "This will remove all your custom markers");
            }
        }
    }
    lines
}

fn button_line(label: &'static str, style: Style, has_cursor: bool) -> Line<'static> {
    let pointer = if has_cursor { "❯ " } else { "  " };
    let style = if has_cursor {
        style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    } else {
        style
    };
    Line::from(vec![
        Span::styled(pointer, Theme::key_hint()),
        Span::styled(format!(" {} ", label), style),
    ])
}
