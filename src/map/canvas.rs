//! Canvas adapter: the map surface as an event source.
//!
//! Owns the viewport and the screen area the map occupies, and turns raw
//! terminal cells into [`CanvasEvent`]s. It knows nothing about placement
//! mode; deciding what a click means is up to the caller.

use crate::config::model::MapConfig;
use crate::map::marker::{LatLng, MarkerRef};
use crate::map::viewport::Viewport;
use ratatui::layout::Rect;

/// Columns either side of a marker glyph that still count as a hit.
const HIT_SLOP_COLS: u16 = 1;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CanvasEvent {
    Clicked(LatLng),
    MarkerClicked(MarkerRef),
}

#[derive(Debug, Clone)]
pub struct MapCanvas {
    pub viewport: Viewport,
    home: Viewport,
    area: Rect,
    pan_step: f64,
}

impl MapCanvas {
    pub fn new(config: &MapConfig, area: Rect) -> Self {
        let viewport = Viewport::new(
            LatLng::new(config.center_lat, config.center_lng),
            config.zoom,
            config.max_zoom,
        );
        Self {
            home: viewport.clone(),
            viewport,
            area,
            pan_step: config.pan_step,
        }
    }

    /// Drawable area inside the canvas border.
    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn resize(&mut self, area: Rect) {
        self.area = area;
    }

    pub fn reset_view(&mut self) {
        self.viewport = self.home.clone();
    }

    pub fn pan_step(&mut self, dx: i8, dy: i8) {
        self.viewport
            .pan(dx as f64 * self.pan_step, dy as f64 * self.pan_step);
    }

    pub fn drag(&mut self, dcol: i32, drow: i32) {
        self.viewport.pan_cells(self.area, dcol, drow);
    }

    pub fn contains_cell(&self, col: u16, row: u16) -> bool {
        self.viewport.to_geo(self.area, col, row).is_some()
    }

    /// Cell at which `pos` is drawn, if visible.
    pub fn cell_of(&self, pos: LatLng) -> Option<(u16, u16)> {
        self.viewport.to_cell(self.area, pos)
    }

    /// Resolve a click at `(col, row)`. Markers take precedence over the bare
    /// map; later markers in `markers` are drawn on top so they win ties.
    pub fn hit_test<I>(&self, col: u16, row: u16, markers: I) -> Option<CanvasEvent>
    where
        I: IntoIterator<Item = (MarkerRef, LatLng)>,
    {
        let pos = self.viewport.to_geo(self.area, col, row)?;
        let hit = markers
            .into_iter()
            .filter(|(_, at)| {
                self.cell_of(*at).is_some_and(|(mc, mr)| {
                    mr == row && mc.abs_diff(col) <= HIT_SLOP_COLS
                })
            })
            .last();
        Some(match hit {
            Some((marker, _)) => CanvasEvent::MarkerClicked(marker),
            None => CanvasEvent::Clicked(pos),
        })
    }
}
