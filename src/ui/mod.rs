pub mod controls;
pub mod destination_list;
mod header;
pub mod layout;
mod map_view;
mod marker_prompt;
mod status_bar;
mod theme;

use crate::app::state::{AppState, FocusPanel};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders};
use theme::Theme;
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area);

    header::render(frame, app_layout.header);
    destination_list::render(frame, app_layout.destinations, state);
    map_view::render(frame, app_layout.map, state);
    controls::render(frame, app_layout.controls, state);
    header::render_cards(frame, app_layout.cards);
    status_bar::render(frame, app_layout.status_bar, state);

    // Modal last so it sits above everything
    marker_prompt::render(frame, state);
}

/// Bordered panel block, styled by whether `panel` has focus.
fn panel_block<'a>(title: &'a str, panel: FocusPanel, state: &AppState) -> Block<'a> {
    let focused = state.focus == panel;
    let (border_style, border_type, bg) = if focused {
        (
            Theme::border_focused(),
            Theme::border_type_focused(),
            Theme::panel_bg_focused(),
        )
    } else {
        (Theme::border(), Theme::border_type(), Theme::panel_bg())
    };

    Block::default()
        .title(title)
        .title_style(if focused { Theme::title() } else { Theme::secondary() })
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style)
        .style(bg)
}

/// Greedy word wrap by display width. Words wider than `width` are split.
fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.width()
        } else {
            current.width() + 1 + word.width()
        };
        if needed <= width {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
            continue;
        }
        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        for c in word.chars() {
            if current.width() + c.to_string().width() > width {
                lines.push(std::mem::take(&mut current));
            }
            current.push(c);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::map::marker::{LatLng, MarkerRef};
    use ratatui::backend::TestBackend;

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn draw(state: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(160, 48)).unwrap();
        terminal.draw(|f| render(f, state)).unwrap();
        screen_text(&terminal)
    }

    #[test]
    fn test_wrap_words() {
        assert_eq!(
            wrap_words("The City of Light, capital of France", 12),
            vec!["The City of", "Light,", "capital of", "France"]
        );
        assert_eq!(wrap_words("abcdefgh", 3), vec!["abc", "def", "gh"]);
        assert!(wrap_words("", 10).is_empty());
    }

    #[test]
    fn test_renders_loading_before_surface() {
        let state = AppState::new(AppConfig::default());
        let text = draw(&state);
        assert!(text.contains("Travelio"));
        assert!(text.contains("Loading map..."));
        assert!(text.contains("Popular Destinations"));
    }

    #[test]
    fn test_renders_panels_and_markers() {
        let mut state = AppState::new(AppConfig::default());
        state.attach_surface(Rect::new(0, 0, 160, 48));
        state.add_custom_marker(LatLng::new(-33.9, 18.4), "Cape Town".into(), "Table Mountain".into());
        state.select_destination("Paris");
        let text = draw(&state);
        assert!(!text.contains("Loading map..."));
        assert!(text.contains("London"));
        assert!(text.contains("Your Custom Markers"));
        assert!(text.contains("Cape Town"));
        assert!(text.contains("Clear All Custom Markers"));
        assert!(text.contains("Plan Your Trip"));
        assert!(text.contains("Discover Places"));
    }

    #[test]
    fn test_renders_dialog_and_popup() {
        let mut state = AppState::new(AppConfig::default());
        state.attach_surface(Rect::new(0, 0, 160, 48));
        state.open_marker(MarkerRef::Destination(4));
        let text = draw(&state);
        assert!(text.contains("Plan Trip"));

        state.toggle_placement_mode();
        let text = draw(&state);
        assert!(text.contains("Cancel Placing Marker"));
        assert!(text.contains("Click anywhere on the map to place a marker"));

        state.handle_map_click(LatLng::new(0.0, 0.0));
        let text = draw(&state);
        assert!(text.contains("Enter a name for this location:"));
    }

    #[test]
    fn test_outline_continues_past_antimeridian() {
        let mut state = AppState::new(AppConfig::default());
        state.attach_surface(Rect::new(0, 0, 160, 48));
        state.focus = FocusPanel::Destinations;
        let canvas = state.canvas.as_mut().unwrap();
        canvas.viewport.set_zoom(2.0);
        canvas.viewport.center_on(LatLng::new(55.0, 170.0));
        let inner = canvas.area();
        let (seam, _) = canvas.cell_of(LatLng::new(55.0, 179.9)).unwrap();

        let mut terminal = Terminal::new(TestBackend::new(160, 48)).unwrap();
        terminal.draw(|f| render(f, &state)).unwrap();
        let buffer = terminal.backend().buffer();

        // Alaska lies east of the seam, drawn from the wrapped copy
        let land = (seam + 2..inner.right())
            .flat_map(|x| (inner.y..inner.bottom()).map(move |y| (x, y)))
            .filter(|&(x, y)| {
                buffer[(x, y)]
                    .symbol()
                    .chars()
                    .any(|c| ('\u{2801}'..='\u{28FF}').contains(&c))
            })
            .count();
        assert!(land > 0);
    }
}
