//! Equirectangular viewport over the world map.
//!
//! Zoom 0 shows the full 360° × 180° world; every zoom level halves both
//! spans. Screen conversions work on terminal cells, using the cell center as
//! the sampled point.

use crate::map::marker::LatLng;
use ratatui::layout::Rect;

const WORLD_HALF_LNG: f64 = 180.0;
const WORLD_HALF_LAT: f64 = 90.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    center: LatLng,
    zoom: f64,
    max_zoom: f64,
}

impl Viewport {
    pub fn new(center: LatLng, zoom: f64, max_zoom: f64) -> Self {
        let mut vp = Self {
            center,
            zoom: 0.0,
            max_zoom: max_zoom.max(0.0),
        };
        vp.set_zoom(zoom);
        vp.center.lng = wrap_lng(center.lng);
        vp.clamp_center();
        vp
    }

    pub fn center(&self) -> LatLng {
        self.center
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn half_spans(&self) -> (f64, f64) {
        let scale = 2f64.powf(self.zoom);
        (WORLD_HALF_LNG / scale, WORLD_HALF_LAT / scale)
    }

    /// `(x_bounds, y_bounds)` in the order the canvas expects.
    pub fn bounds(&self) -> ([f64; 2], [f64; 2]) {
        let (half_lng, half_lat) = self.half_spans();
        (
            [self.center.lng - half_lng, self.center.lng + half_lng],
            [self.center.lat - half_lat, self.center.lat + half_lat],
        )
    }

    /// Longitude bounds of the same view shifted by a full turn, for the part
    /// that lies past the antimeridian. `None` when the view stays inside
    /// [-180, 180].
    pub fn wrapped_lng_bounds(&self) -> Option<[f64; 2]> {
        let ([west, east], _) = self.bounds();
        if east > 180.0 {
            Some([west - 360.0, east - 360.0])
        } else if west < -180.0 {
            Some([west + 360.0, east + 360.0])
        } else {
            None
        }
    }

    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom.clamp(0.0, self.max_zoom);
        self.clamp_center();
    }

    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom + 1.0);
    }

    pub fn zoom_out(&mut self) {
        self.set_zoom(self.zoom - 1.0);
    }

    /// Pan by a fraction of the visible span. Positive `dx` moves east,
    /// positive `dy` moves north.
    pub fn pan(&mut self, dx: f64, dy: f64) {
        let (half_lng, half_lat) = self.half_spans();
        self.center.lng = wrap_lng(self.center.lng + dx * 2.0 * half_lng);
        self.center.lat += dy * 2.0 * half_lat;
        self.clamp_center();
    }

    /// Pan by a number of cells inside `area`. Dragging right moves the view
    /// west, dragging down moves it north.
    pub fn pan_cells(&mut self, area: Rect, dcol: i32, drow: i32) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let dx = -(dcol as f64) / area.width as f64;
        let dy = drow as f64 / area.height as f64;
        self.pan(dx, dy);
    }

    pub fn center_on(&mut self, pos: LatLng) {
        self.center = LatLng::new(pos.lat, wrap_lng(pos.lng));
        self.clamp_center();
    }

    pub fn contains(&self, pos: LatLng) -> bool {
        let ([x0, x1], [y0, y1]) = self.bounds();
        let lng = self.nearest_lng(pos.lng);
        lng >= x0 && lng <= x1 && pos.lat >= y0 && pos.lat <= y1
    }

    /// Geographic position under the terminal cell `(col, row)`.
    pub fn to_geo(&self, area: Rect, col: u16, row: u16) -> Option<LatLng> {
        if !cell_in(area, col, row) {
            return None;
        }
        let ([x0, x1], [y0, y1]) = self.bounds();
        let fx = (col - area.x) as f64 + 0.5;
        let fy = (row - area.y) as f64 + 0.5;
        let lng = x0 + fx / area.width as f64 * (x1 - x0);
        let lat = y1 - fy / area.height as f64 * (y1 - y0);
        Some(LatLng::new(lat, wrap_lng(lng)))
    }

    /// Terminal cell showing `pos`, if it is inside the view.
    pub fn to_cell(&self, area: Rect, pos: LatLng) -> Option<(u16, u16)> {
        if area.width == 0 || area.height == 0 || !self.contains(pos) {
            return None;
        }
        let ([x0, x1], [y0, y1]) = self.bounds();
        let fx = (self.nearest_lng(pos.lng) - x0) / (x1 - x0);
        let fy = (y1 - pos.lat) / (y1 - y0);
        let col = ((fx * area.width as f64) as u16).min(area.width - 1);
        let row = ((fy * area.height as f64) as u16).min(area.height - 1);
        Some((area.x + col, area.y + row))
    }

    /// The copy of `lng` (±360°) closest to the view center, so markers stay
    /// visible when the view straddles the antimeridian.
    fn nearest_lng(&self, lng: f64) -> f64 {
        [lng - 360.0, lng, lng + 360.0]
            .into_iter()
            .min_by(|a, b| {
                (a - self.center.lng)
                    .abs()
                    .total_cmp(&(b - self.center.lng).abs())
            })
            .unwrap_or(lng)
    }

    fn clamp_center(&mut self) {
        let (_, half_lat) = self.half_spans();
        let limit = WORLD_HALF_LAT - half_lat;
        self.center.lat = self.center.lat.clamp(-limit, limit);
    }
}

fn cell_in(area: Rect, col: u16, row: u16) -> bool {
    col >= area.x && col < area.x + area.width && row >= area.y && row < area.y + area.height
}

fn wrap_lng(lng: f64) -> f64 {
    (lng + 180.0).rem_euclid(360.0) - 180.0
}
