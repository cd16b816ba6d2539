use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::*;
use crate::map::canvas::CanvasEvent;
use crate::map::marker::MarkerRef;
use crate::ui::destination_list::{self, ListHit};
use crate::ui::{controls, layout};
use crossterm::event::{
    Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::Rect;
use std::time::Instant;

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent),
        AppEvent::Tick => {
            state.expire_status(Instant::now());
            vec![]
        }
    }
}

/// Carry out an action returned by `handle_event`.
pub fn apply_action(state: &mut AppState, action: Action) {
    match action {
        Action::PlanTrip { name } => {
            tracing::info!(destination = %name, "Planning trip to {}", name);
            state.set_status(format!("Planning trip to {}", name));
        }
        Action::Quit => {
            state.should_quit = true;
        }
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind == KeyEventKind::Press => {
            state.dirty = true;
            handle_key(state, key)
        }
        CEvent::Mouse(mouse) if state.config.ui.mouse => handle_mouse(state, mouse),
        CEvent::Resize(width, height) => {
            state.attach_surface(Rect::new(0, 0, width, height));
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    // The marker dialog captures all input while open
    if state.prompt.is_some() {
        handle_prompt_key(state, key);
        return vec![];
    }

    if state.popup.is_some() {
        if let Some(actions) = handle_popup_key(state, key) {
            return actions;
        }
    }

    match key.code {
        KeyCode::Char('q') => return vec![Action::Quit],
        KeyCode::Tab => {
            state.cycle_focus();
            return vec![];
        }
        KeyCode::BackTab => {
            state.cycle_focus_back();
            return vec![];
        }
        KeyCode::Char('m') => {
            state.toggle_placement_mode();
            return vec![];
        }
        KeyCode::Esc if state.is_placing_marker => {
            state.toggle_placement_mode();
            return vec![];
        }
        _ => {}
    }

    match state.focus {
        FocusPanel::Destinations => handle_list_key(state, key),
        FocusPanel::Map => {
            handle_map_key(state, key);
            vec![]
        }
        FocusPanel::Controls => {
            handle_controls_key(state, key);
            vec![]
        }
    }
}

fn handle_prompt_key(state: &mut AppState, key: KeyEvent) {
    let Some(prompt) = state.prompt.as_mut() else {
        return;
    };
    let outcome = match key.code {
        KeyCode::Enter => prompt.submit(),
        KeyCode::Esc => prompt.dismiss(),
        KeyCode::Backspace => {
            prompt.input.delete_back();
            return;
        }
        KeyCode::Delete => {
            prompt.input.delete_forward();
            return;
        }
        KeyCode::Left => {
            prompt.input.move_left();
            return;
        }
        KeyCode::Right => {
            prompt.input.move_right();
            return;
        }
        KeyCode::Home => {
            prompt.input.move_home();
            return;
        }
        KeyCode::End => {
            prompt.input.move_end();
            return;
        }
        KeyCode::Char(c)
            if key.modifiers == KeyModifiers::NONE || key.modifiers == KeyModifiers::SHIFT =>
        {
            prompt.input.insert_char(c);
            return;
        }
        _ => return,
    };
    if let Some(id) = state.resolve_prompt(outcome) {
        let name = state
            .custom_marker(id)
            .map(|m| m.name.clone())
            .unwrap_or_default();
        state.set_status(format!("Placed marker \"{}\"", name));
    }
}

/// Keys the open popup consumes. `None` lets the key fall through.
fn handle_popup_key(state: &mut AppState, key: KeyEvent) -> Option<Vec<Action>> {
    let marker = state.popup?;
    match key.code {
        KeyCode::Esc => {
            state.close_popup();
            Some(vec![])
        }
        KeyCode::Char('p') => Some(plan_trip_for(state, marker)),
        KeyCode::Char('x') | KeyCode::Delete => match marker {
            MarkerRef::Custom(id) => {
                state.remove_custom_marker(id);
                Some(vec![])
            }
            MarkerRef::Destination(_) => Some(vec![]),
        },
        _ => None,
    }
}

fn plan_trip_for(state: &AppState, marker: MarkerRef) -> Vec<Action> {
    state
        .marker_name(marker)
        .map(|name| vec![state.plan_trip(&name)])
        .unwrap_or_default()
}

fn handle_list_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    let total = state.list_entries().len();
    match key.code {
        KeyCode::Up => {
            state.list_cursor = state.list_cursor.saturating_sub(1);
        }
        KeyCode::Down => {
            if state.list_cursor + 1 < total {
                state.list_cursor += 1;
            }
        }
        KeyCode::Home => state.list_cursor = 0,
        KeyCode::End => state.list_cursor = total.saturating_sub(1),
        KeyCode::Enter => {
            if let Some(entry) = state.list_cursor_entry() {
                activate_list_entry(state, entry);
            }
        }
        KeyCode::Char('p') => {
            if let Some(entry) = state.list_cursor_entry() {
                return plan_trip_for(state, entry);
            }
        }
        KeyCode::Char('x') | KeyCode::Delete => {
            if let Some(MarkerRef::Custom(id)) = state.list_cursor_entry() {
                state.remove_custom_marker(id);
            }
        }
        _ => {}
    }
    vec![]
}

/// Center the map on a list entry and open its popup.
fn activate_list_entry(state: &mut AppState, entry: MarkerRef) {
    let position = state.marker_position(entry);
    if let (Some(canvas), Some(pos)) = (state.canvas.as_mut(), position) {
        canvas.viewport.center_on(pos);
    }
    state.open_marker(entry);
}

fn click_list(state: &mut AppState, hit: ListHit) -> Vec<Action> {
    let (ListHit::Entry(index) | ListHit::PlanTrip(index) | ListHit::Remove(index)) = hit;
    let Some(entry) = state.list_entries().get(index).copied() else {
        return vec![];
    };
    state.focus = FocusPanel::Destinations;
    state.list_cursor = index;
    state.dirty = true;
    match hit {
        ListHit::Entry(_) => activate_list_entry(state, entry),
        ListHit::PlanTrip(_) => return plan_trip_for(state, entry),
        ListHit::Remove(_) => {
            if let MarkerRef::Custom(id) = entry {
                state.remove_custom_marker(id);
            }
        }
    }
    vec![]
}

fn handle_map_key(state: &mut AppState, key: KeyEvent) {
    if key.code == KeyCode::Enter {
        click_at_crosshair(state);
        return;
    }
    let Some(canvas) = state.canvas.as_mut() else {
        return;
    };
    match key.code {
        KeyCode::Left => canvas.pan_step(-1, 0),
        KeyCode::Right => canvas.pan_step(1, 0),
        KeyCode::Up => canvas.pan_step(0, 1),
        KeyCode::Down => canvas.pan_step(0, -1),
        KeyCode::Char('+') | KeyCode::Char('=') => canvas.viewport.zoom_in(),
        KeyCode::Char('-') => canvas.viewport.zoom_out(),
        KeyCode::Char('0') => canvas.reset_view(),
        _ => {}
    }
}

/// Keyboard equivalent of a mouse click at the map center.
fn click_at_crosshair(state: &mut AppState) {
    let Some(canvas) = state.canvas.as_ref() else {
        return;
    };
    let Some((col, row)) = canvas.cell_of(canvas.viewport.center()) else {
        return;
    };
    click_map(state, col, row);
}

fn click_map(state: &mut AppState, col: u16, row: u16) {
    let Some(canvas) = state.canvas.as_ref() else {
        return;
    };
    match canvas.hit_test(col, row, state.map_markers()) {
        Some(CanvasEvent::MarkerClicked(marker)) => state.open_marker(marker),
        Some(CanvasEvent::Clicked(position)) => {
            if state.popup.is_some() {
                state.close_popup();
            }
            state.handle_map_click(position);
        }
        None => {}
    }
}

fn handle_controls_key(state: &mut AppState, key: KeyEvent) {
    let buttons = state.control_buttons();
    match key.code {
        KeyCode::Up => {
            state.controls_cursor = state.controls_cursor.saturating_sub(1);
        }
        KeyCode::Down => {
            if state.controls_cursor + 1 < buttons.len() {
                state.controls_cursor += 1;
            }
        }
        KeyCode::Enter => {
            if let Some(&button) = buttons.get(state.controls_cursor) {
                press_button(state, button);
            }
        }
        _ => {}
    }
}

fn press_button(state: &mut AppState, button: ControlButton) {
    match button {
        ControlButton::TogglePlacement => state.toggle_placement_mode(),
        ControlButton::ClearMarkers => {
            state.clear_all_custom_markers();
            state.set_status("Cleared all custom markers".to_string());
        }
    }
}

fn click_controls(state: &mut AppState, button: ControlButton) {
    state.focus = FocusPanel::Controls;
    if let Some(index) = state.control_buttons().iter().position(|&b| b == button) {
        state.controls_cursor = index;
    }
    state.dirty = true;
    press_button(state, button);
}

fn handle_mouse(state: &mut AppState, mouse: MouseEvent) -> Vec<Action> {
    if state.prompt.is_some() {
        return vec![];
    }
    let (col, row) = (mouse.column, mouse.row);

    // The side panels react on press; the map waits for release to tell
    // clicks from drags.
    if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
        if let Some(panels) = state.screen.map(layout::compute_layout) {
            if let Some(hit) = destination_list::hit_test(state, panels.destinations, col, row) {
                return click_list(state, hit);
            }
            if let Some(button) = controls::hit_test(state, panels.controls, col, row) {
                click_controls(state, button);
                return vec![];
            }
        }
    }

    let Some(canvas) = state.canvas.as_mut() else {
        return vec![];
    };
    let on_map = canvas.contains_cell(col, row);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) if on_map => {
            state.drag = Some(DragAnchor {
                col,
                row,
                moved: false,
            });
            state.focus = FocusPanel::Map;
            state.dirty = true;
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            if let Some(anchor) = state.drag.as_mut() {
                let dcol = col as i32 - anchor.col as i32;
                let drow = row as i32 - anchor.row as i32;
                if dcol != 0 || drow != 0 {
                    canvas.drag(dcol, drow);
                    *anchor = DragAnchor {
                        col,
                        row,
                        moved: true,
                    };
                    state.dirty = true;
                }
            }
        }
        MouseEventKind::Up(MouseButton::Left) => {
            if let Some(anchor) = state.drag.take() {
                if !anchor.moved {
                    click_map(state, anchor.col, anchor.row);
                }
            }
        }
        MouseEventKind::ScrollUp if on_map => {
            canvas.viewport.zoom_in();
            state.dirty = true;
        }
        MouseEventKind::ScrollDown if on_map => {
            canvas.viewport.zoom_out();
            state.dirty = true;
        }
        _ => {}
    }
    vec![]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::map::marker::LatLng;

    fn ready_state() -> AppState {
        let mut state = AppState::new(AppConfig::default());
        state.attach_surface(Rect::new(0, 0, 160, 48));
        state
    }

    fn key(state: &mut AppState, code: KeyCode) -> Vec<Action> {
        handle_event(
            state,
            AppEvent::Terminal(CEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))),
        )
    }

    fn type_str(state: &mut AppState, text: &str) {
        for c in text.chars() {
            key(state, KeyCode::Char(c));
        }
    }

    fn mouse(state: &mut AppState, kind: MouseEventKind, column: u16, row: u16) {
        handle_event(
            state,
            AppEvent::Terminal(CEvent::Mouse(MouseEvent {
                kind,
                column,
                row,
                modifiers: KeyModifiers::NONE,
            })),
        );
    }

    fn click(state: &mut AppState, column: u16, row: u16) {
        mouse(state, MouseEventKind::Down(MouseButton::Left), column, row);
        mouse(state, MouseEventKind::Up(MouseButton::Left), column, row);
    }

    /// A map cell well away from every predefined destination.
    fn empty_ocean_cell(state: &AppState) -> (u16, u16) {
        let canvas = state.canvas.as_ref().unwrap();
        canvas.cell_of(LatLng::new(-40.0, -120.0)).unwrap()
    }

    #[test]
    fn test_quit_keys() {
        let mut state = ready_state();
        assert_eq!(key(&mut state, KeyCode::Char('q')), vec![Action::Quit]);
        let actions = handle_event(
            &mut state,
            AppEvent::Terminal(CEvent::Key(KeyEvent::new(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL,
            ))),
        );
        assert_eq!(actions, vec![Action::Quit]);
    }

    #[test]
    fn test_apply_plan_trip_sets_status_only() {
        let mut state = ready_state();
        state.select_destination("Paris");
        apply_action(
            &mut state,
            Action::PlanTrip {
                name: "Tokyo".into(),
            },
        );
        let status = state.status_message.as_ref().unwrap();
        assert!(status.text.ends_with("Planning trip to Tokyo"));
        assert_eq!(state.selected_destination.as_deref(), Some("Paris"));
        assert!(state.custom_markers.is_empty());
        assert!(!state.should_quit);

        apply_action(&mut state, Action::Quit);
        assert!(state.should_quit);
    }

    #[test]
    fn test_dialog_ignores_modified_keys() {
        let mut state = ready_state();
        state.toggle_placement_mode();
        state.handle_map_click(LatLng::new(10.0, 10.0));

        for (c, modifiers) in [
            ('u', KeyModifiers::CONTROL),
            ('b', KeyModifiers::ALT),
            ('A', KeyModifiers::SHIFT),
            ('b', KeyModifiers::NONE),
        ] {
            handle_event(
                &mut state,
                AppEvent::Terminal(CEvent::Key(KeyEvent::new(KeyCode::Char(c), modifiers))),
            );
        }
        assert_eq!(state.prompt.as_ref().unwrap().input.text, "Ab");
    }

    #[test]
    fn test_place_marker_with_mouse_and_dialog() {
        let mut state = ready_state();
        key(&mut state, KeyCode::Char('m'));
        assert!(state.is_placing_marker);

        let (col, row) = empty_ocean_cell(&state);
        click(&mut state, col, row);
        assert!(state.prompt.is_some());

        // 'q' and 'm' are text while the dialog is open
        type_str(&mut state, "Home base");
        key(&mut state, KeyCode::Enter);
        type_str(&mut state, "quiet");
        key(&mut state, KeyCode::Enter);

        assert!(state.prompt.is_none());
        assert!(!state.is_placing_marker);
        assert_eq!(state.custom_markers.len(), 1);
        let marker = &state.custom_markers[0];
        assert_eq!(marker.id, 1);
        assert_eq!(marker.name, "Home base");
        assert_eq!(marker.description, "quiet");
        assert!((marker.position.lat - -40.0).abs() < 5.0);
        assert!((marker.position.lng - -120.0).abs() < 5.0);
        assert_eq!(state.next_marker_id, 2);
    }

    #[test]
    fn test_escape_through_dialog_uses_defaults() {
        let mut state = ready_state();
        key(&mut state, KeyCode::Char('m'));
        let (col, row) = empty_ocean_cell(&state);
        click(&mut state, col, row);
        key(&mut state, KeyCode::Esc);
        key(&mut state, KeyCode::Esc);
        assert_eq!(state.custom_markers.len(), 1);
        assert_eq!(state.custom_markers[0].name, "Custom Location");
        assert_eq!(state.custom_markers[0].description, "");
    }

    #[test]
    fn test_click_without_placement_does_nothing() {
        let mut state = ready_state();
        let (col, row) = empty_ocean_cell(&state);
        click(&mut state, col, row);
        assert!(state.prompt.is_none());
        assert!(state.custom_markers.is_empty());
    }

    #[test]
    fn test_click_before_surface_is_ignored() {
        let mut state = AppState::new(AppConfig::default());
        state.toggle_placement_mode();
        click(&mut state, 80, 20);
        key(&mut state, KeyCode::Enter);
        assert!(state.prompt.is_none());
    }

    #[test]
    fn test_drag_pans_instead_of_clicking() {
        let mut state = ready_state();
        key(&mut state, KeyCode::Char('m'));
        let before = state.canvas.as_ref().unwrap().viewport.center();
        let (col, row) = empty_ocean_cell(&state);
        mouse(&mut state, MouseEventKind::Down(MouseButton::Left), col, row);
        mouse(&mut state, MouseEventKind::Drag(MouseButton::Left), col + 4, row);
        mouse(&mut state, MouseEventKind::Up(MouseButton::Left), col + 4, row);
        assert!(state.prompt.is_none());
        let after = state.canvas.as_ref().unwrap().viewport.center();
        assert!(after.lng < before.lng);
    }

    #[test]
    fn test_click_destination_marker_selects_it() {
        let mut state = ready_state();
        let paris = LatLng::new(48.8566, 2.3522);
        let (col, row) = state.canvas.as_ref().unwrap().cell_of(paris).unwrap();
        // at world zoom London and Paris share a row; aim at Paris' right edge
        click(&mut state, col + 1, row);
        assert!(state.selected_destination.is_some());
        assert!(matches!(state.popup, Some(MarkerRef::Destination(_))));
    }

    #[test]
    fn test_popup_plan_trip_and_close() {
        let mut state = ready_state();
        state.open_marker(MarkerRef::Destination(2));
        assert_eq!(
            key(&mut state, KeyCode::Char('p')),
            vec![Action::PlanTrip {
                name: "Paris".into()
            }]
        );
        key(&mut state, KeyCode::Esc);
        assert!(state.popup.is_none());
        assert_eq!(state.selected_destination.as_deref(), Some("Paris"));
    }

    #[test]
    fn test_popup_remove_custom_marker() {
        let mut state = ready_state();
        state.add_custom_marker(LatLng::new(1.0, 1.0), "a".into(), String::new());
        state.open_marker(MarkerRef::Custom(1));
        key(&mut state, KeyCode::Char('x'));
        assert!(state.custom_markers.is_empty());
        assert!(state.popup.is_none());
    }

    #[test]
    fn test_list_navigation_select_and_remove() {
        let mut state = ready_state();
        state.add_custom_marker(LatLng::new(1.0, 1.0), "mine".into(), String::new());
        state.focus = FocusPanel::Destinations;

        key(&mut state, KeyCode::Down);
        key(&mut state, KeyCode::Enter);
        assert_eq!(state.selected_destination.as_deref(), Some("Paris"));
        key(&mut state, KeyCode::Esc);

        // 'x' on a destination does nothing
        key(&mut state, KeyCode::Char('x'));
        assert_eq!(state.custom_markers.len(), 1);

        key(&mut state, KeyCode::End);
        assert_eq!(state.list_cursor_entry(), Some(MarkerRef::Custom(1)));
        assert_eq!(
            key(&mut state, KeyCode::Char('p')),
            vec![Action::PlanTrip { name: "mine".into() }]
        );
        key(&mut state, KeyCode::Char('x'));
        assert!(state.custom_markers.is_empty());
        assert_eq!(state.list_cursor, 3);
    }

    #[test]
    fn test_controls_buttons() {
        let mut state = ready_state();
        state.focus = FocusPanel::Controls;
        key(&mut state, KeyCode::Enter);
        assert!(state.is_placing_marker);
        key(&mut state, KeyCode::Enter);
        assert!(!state.is_placing_marker);

        state.add_custom_marker(LatLng::new(1.0, 1.0), "a".into(), String::new());
        state.add_custom_marker(LatLng::new(2.0, 2.0), "b".into(), String::new());
        key(&mut state, KeyCode::Down);
        key(&mut state, KeyCode::Enter);
        assert!(state.custom_markers.is_empty());
        assert_eq!(state.next_marker_id, 1);
        assert_eq!(state.controls_cursor, 0);
    }

    #[test]
    fn test_escape_cancels_placement() {
        let mut state = ready_state();
        key(&mut state, KeyCode::Char('m'));
        key(&mut state, KeyCode::Esc);
        assert!(!state.is_placing_marker);
    }

    #[test]
    fn test_map_keys_pan_and_zoom() {
        let mut state = ready_state();
        state.focus = FocusPanel::Map;
        key(&mut state, KeyCode::Char('+'));
        key(&mut state, KeyCode::Right);
        let canvas = state.canvas.as_ref().unwrap();
        assert_eq!(canvas.viewport.zoom(), 1.0);
        assert!(canvas.viewport.center().lng > 0.0);
        key(&mut state, KeyCode::Char('0'));
        assert_eq!(state.canvas.as_ref().unwrap().viewport.zoom(), 0.0);
    }

    #[test]
    fn test_enter_on_map_clicks_at_crosshair() {
        let mut state = ready_state();
        state.focus = FocusPanel::Map;
        state.canvas.as_mut().unwrap().viewport.center_on(LatLng::new(-30.0, -100.0));
        key(&mut state, KeyCode::Char('m'));
        key(&mut state, KeyCode::Enter);
        assert!(state.prompt.is_some());
    }

    #[test]
    fn test_focus_cycle() {
        let mut state = ready_state();
        assert_eq!(state.focus, FocusPanel::Map);
        key(&mut state, KeyCode::Tab);
        assert_eq!(state.focus, FocusPanel::Controls);
        key(&mut state, KeyCode::BackTab);
        key(&mut state, KeyCode::BackTab);
        assert_eq!(state.focus, FocusPanel::Destinations);
    }

    #[test]
    fn test_resize_reattaches_surface() {
        let mut state = AppState::new(AppConfig::default());
        handle_event(&mut state, AppEvent::Terminal(CEvent::Resize(120, 40)));
        assert!(state.canvas.is_some());
    }

    /// Screen cell in the list panel, `offset` columns past the gutter, that
    /// hit-tests to `wanted`.
    fn list_cell(state: &AppState, offset: u16, wanted: ListHit) -> (u16, u16) {
        let area = layout::compute_layout(state.screen.unwrap()).destinations;
        let col = area.x + 1 + 2 + offset;
        let row = (area.y..area.bottom())
            .find(|&row| destination_list::hit_test(state, area, col, row) == Some(wanted))
            .unwrap();
        (col, row)
    }

    fn button_cell(state: &AppState, wanted: ControlButton) -> (u16, u16) {
        let area = layout::compute_layout(state.screen.unwrap()).controls;
        let col = area.x + 4;
        let row = (area.y..area.bottom())
            .find(|&row| controls::hit_test(state, area, col, row) == Some(wanted))
            .unwrap();
        (col, row)
    }

    #[test]
    fn test_click_list_entry_opens_destination() {
        let mut state = ready_state();
        let (col, row) = list_cell(&state, 0, ListHit::Entry(1));
        click(&mut state, col, row);
        assert_eq!(state.focus, FocusPanel::Destinations);
        assert_eq!(state.list_cursor, 1);
        assert_eq!(state.selected_destination.as_deref(), Some("Paris"));
        assert_eq!(state.popup, Some(MarkerRef::Destination(2)));
    }

    #[test]
    fn test_click_list_hints() {
        let mut state = ready_state();
        state.add_custom_marker(LatLng::new(1.0, 2.0), "Dock".into(), String::new());

        let (col, row) = list_cell(&state, 0, ListHit::PlanTrip(0));
        let actions = handle_event(
            &mut state,
            AppEvent::Terminal(CEvent::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column: col,
                row,
                modifiers: KeyModifiers::NONE,
            })),
        );
        assert_eq!(
            actions,
            vec![Action::PlanTrip {
                name: "London".into()
            }]
        );

        // "x Remove" sits after "p Plan Trip" and a two-space gap
        let (col, row) = list_cell(&state, 13, ListHit::Remove(4));
        click(&mut state, col, row);
        assert!(state.custom_markers.is_empty());
    }

    #[test]
    fn test_click_list_heading_does_nothing() {
        let mut state = ready_state();
        state.add_custom_marker(LatLng::new(1.0, 2.0), "Dock".into(), String::new());
        let area = layout::compute_layout(state.screen.unwrap()).destinations;
        let (col, entry_row) = list_cell(&state, 0, ListHit::Entry(4));
        // the heading occupies the two rows above the first custom marker
        assert_eq!(destination_list::hit_test(&state, area, col, entry_row - 1), None);
        click(&mut state, col, entry_row - 1);
        assert_eq!(state.popup, None);
    }

    #[test]
    fn test_click_control_buttons() {
        let mut state = ready_state();
        let (col, row) = button_cell(&state, ControlButton::TogglePlacement);
        click(&mut state, col, row);
        assert!(state.is_placing_marker);
        assert_eq!(state.focus, FocusPanel::Controls);

        // clicking again cancels
        click(&mut state, col, row);
        assert!(!state.is_placing_marker);

        state.add_custom_marker(LatLng::new(1.0, 2.0), "Dock".into(), String::new());
        let (col, row) = button_cell(&state, ControlButton::ClearMarkers);
        click(&mut state, col, row);
        assert!(state.custom_markers.is_empty());
        assert_eq!(state.next_marker_id, 1);
        assert_eq!(state.controls_cursor, 0);
    }

    #[test]
    fn test_panel_clicks_ignored_while_dialog_open() {
        let mut state = ready_state();
        state.toggle_placement_mode();
        state.handle_map_click(LatLng::new(1.0, 1.0));
        let (col, row) = list_cell(&state, 0, ListHit::Entry(0));
        click(&mut state, col, row);
        assert_eq!(state.selected_destination, None);
        assert!(state.prompt.is_some());
    }
}
