use crate::app::action::Action;
use crate::app::prompt::{MarkerPrompt, PromptOutcome};
use crate::config::AppConfig;
use crate::map::canvas::MapCanvas;
use crate::map::marker::{
    find_destination, CustomMarker, Destination, LatLng, MarkerId, MarkerRef, DESTINATIONS,
};
use chrono::Local;
use ratatui::layout::Rect;
use std::time::{Duration, Instant};

#[derive(Debug)]
pub struct InputState {
    pub text: String,
    pub cursor: usize,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            text: String::new(),
            cursor: 0,
        }
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn delete_back(&mut self) {
        if self.cursor > 0 {
            let prev = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.text.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn delete_forward(&mut self) {
        if self.cursor < self.text.len() {
            let next = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
            self.text.drain(self.cursor..next);
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    pub fn take_text(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FocusPanel {
    Destinations,
    Map,
    Controls,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlButton {
    TogglePlacement,
    ClearMarkers,
}

#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub expires_at: Instant,
}

/// An in-progress mouse press on the map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragAnchor {
    pub col: u16,
    pub row: u16,
    pub moved: bool,
}

pub struct AppState {
    pub config: AppConfig,
    pub destinations: &'static [Destination],
    pub selected_destination: Option<String>,
    pub is_placing_marker: bool,
    pub custom_markers: Vec<CustomMarker>,
    pub next_marker_id: MarkerId,
    pub prompt: Option<MarkerPrompt>,
    pub popup: Option<MarkerRef>,
    /// Map surface; `None` until the terminal size is known.
    pub canvas: Option<MapCanvas>,
    /// Last known terminal area, for hit-testing the side panels.
    pub screen: Option<Rect>,
    pub drag: Option<DragAnchor>,
    pub focus: FocusPanel,
    pub list_cursor: usize,
    pub controls_cursor: usize,
    pub status_message: Option<StatusMessage>,
    pub should_quit: bool,
    pub dirty: bool,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            destinations: &DESTINATIONS,
            selected_destination: None,
            is_placing_marker: false,
            custom_markers: Vec::new(),
            next_marker_id: 1,
            prompt: None,
            popup: None,
            canvas: None,
            screen: None,
            drag: None,
            focus: FocusPanel::Map,
            list_cursor: 0,
            controls_cursor: 0,
            status_message: None,
            should_quit: false,
            dirty: true,
        }
    }

    /// Second phase of start-up: bind the map surface to the screen. Called
    /// again on every resize.
    pub fn attach_surface(&mut self, screen: Rect) {
        self.screen = Some(screen);
        let area = crate::ui::layout::compute_layout(screen).map_inner();
        match self.canvas.as_mut() {
            Some(canvas) => canvas.resize(area),
            None => {
                tracing::debug!(?area, "map surface attached");
                self.canvas = Some(MapCanvas::new(&self.config.map, area));
            }
        }
        self.dirty = true;
    }

    pub fn select_destination(&mut self, name: &str) {
        self.selected_destination = Some(name.to_string());
        self.dirty = true;
    }

    pub fn toggle_placement_mode(&mut self) {
        self.is_placing_marker = !self.is_placing_marker;
        self.dirty = true;
    }

    /// A click on the bare map. Opens the marker dialog when placement mode
    /// is active; returns whether it did.
    pub fn handle_map_click(&mut self, position: LatLng) -> bool {
        if !self.is_placing_marker || self.prompt.is_some() {
            return false;
        }
        self.popup = None;
        self.prompt = Some(MarkerPrompt::new(position));
        self.dirty = true;
        true
    }

    /// Feed a dialog step result back in. Creates the marker once the dialog
    /// completes.
    pub fn resolve_prompt(&mut self, outcome: PromptOutcome) -> Option<MarkerId> {
        let PromptOutcome::Complete { name, description } = outcome else {
            self.dirty = true;
            return None;
        };
        let prompt = self.prompt.take()?;
        Some(self.add_custom_marker(prompt.position, name, description))
    }

    pub fn add_custom_marker(
        &mut self,
        position: LatLng,
        name: String,
        description: String,
    ) -> MarkerId {
        let id = self.next_marker_id;
        tracing::info!(id, %position, name = %name, "custom marker placed");
        self.custom_markers.push(CustomMarker {
            id,
            position,
            name,
            description,
        });
        self.next_marker_id += 1;
        self.is_placing_marker = false;
        self.dirty = true;
        id
    }

    pub fn remove_custom_marker(&mut self, id: MarkerId) {
        let before = self.custom_markers.len();
        self.custom_markers.retain(|m| m.id != id);
        if self.custom_markers.len() == before {
            return;
        }
        tracing::info!(id, "custom marker removed");
        if self.popup == Some(MarkerRef::Custom(id)) {
            self.popup = None;
        }
        self.clamp_cursors();
        self.dirty = true;
    }

    pub fn clear_all_custom_markers(&mut self) {
        tracing::info!(count = self.custom_markers.len(), "custom markers cleared");
        self.custom_markers.clear();
        self.next_marker_id = 1;
        if matches!(self.popup, Some(MarkerRef::Custom(_))) {
            self.popup = None;
        }
        self.clamp_cursors();
        self.dirty = true;
    }

    /// Extension point for booking/navigation. Only records intent.
    pub fn plan_trip(&self, name: &str) -> Action {
        Action::PlanTrip {
            name: name.to_string(),
        }
    }

    pub fn custom_marker(&self, id: MarkerId) -> Option<&CustomMarker> {
        self.custom_markers.iter().find(|m| m.id == id)
    }

    pub fn marker_name(&self, marker: MarkerRef) -> Option<String> {
        match marker {
            MarkerRef::Destination(id) => find_destination(id).map(|d| d.name.to_string()),
            MarkerRef::Custom(id) => self.custom_marker(id).map(|m| m.name.clone()),
        }
    }

    pub fn marker_position(&self, marker: MarkerRef) -> Option<LatLng> {
        match marker {
            MarkerRef::Destination(id) => find_destination(id).map(|d| d.position),
            MarkerRef::Custom(id) => self.custom_marker(id).map(|m| m.position),
        }
    }

    /// Everything drawn on the map, bottom layer first.
    pub fn map_markers(&self) -> Vec<(MarkerRef, LatLng)> {
        self.destinations
            .iter()
            .map(|d| (MarkerRef::Destination(d.id), d.position))
            .chain(
                self.custom_markers
                    .iter()
                    .map(|m| (MarkerRef::Custom(m.id), m.position)),
            )
            .collect()
    }

    /// Rows of the list panel: destinations, then custom markers.
    pub fn list_entries(&self) -> Vec<MarkerRef> {
        self.map_markers().into_iter().map(|(r, _)| r).collect()
    }

    pub fn list_cursor_entry(&self) -> Option<MarkerRef> {
        self.list_entries().get(self.list_cursor).copied()
    }

    pub fn control_buttons(&self) -> Vec<ControlButton> {
        let mut buttons = vec![ControlButton::TogglePlacement];
        if !self.custom_markers.is_empty() {
            buttons.push(ControlButton::ClearMarkers);
        }
        buttons
    }

    /// Select a destination from the map or list and show its details.
    pub fn open_marker(&mut self, marker: MarkerRef) {
        if let MarkerRef::Destination(id) = marker {
            if let Some(dest) = find_destination(id) {
                self.select_destination(dest.name);
            }
        }
        self.popup = Some(marker);
        self.dirty = true;
    }

    pub fn close_popup(&mut self) {
        self.popup = None;
        self.dirty = true;
    }

    pub fn set_status(&mut self, text: String) {
        let stamp = Local::now().format(&self.config.ui.timestamp_format);
        self.status_message = Some(StatusMessage {
            text: format!("[{}] {}", stamp, text),
            expires_at: Instant::now() + Duration::from_secs(self.config.ui.status_timeout_secs),
        });
        self.dirty = true;
    }

    /// Drop the status message once it has expired.
    pub fn expire_status(&mut self, now: Instant) {
        if self
            .status_message
            .as_ref()
            .is_some_and(|m| now >= m.expires_at)
        {
            self.status_message = None;
            self.dirty = true;
        }
    }

    pub fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            FocusPanel::Destinations => FocusPanel::Map,
            FocusPanel::Map => FocusPanel::Controls,
            FocusPanel::Controls => FocusPanel::Destinations,
        };
        self.dirty = true;
    }

    pub fn cycle_focus_back(&mut self) {
        self.focus = match self.focus {
            FocusPanel::Destinations => FocusPanel::Controls,
            FocusPanel::Map => FocusPanel::Destinations,
            FocusPanel::Controls => FocusPanel::Map,
        };
        self.dirty = true;
    }

    fn clamp_cursors(&mut self) {
        let entries = self.list_entries().len();
        self.list_cursor = self.list_cursor.min(entries.saturating_sub(1));
        let buttons = self.control_buttons().len();
        self.controls_cursor = self.controls_cursor.min(buttons.saturating_sub(1));
    }
}
