//! The map canvas: world outline, marker glyphs, popups and overlays.
//!
//! The outline is drawn by ratatui's `Canvas`. Marker glyphs are written
//! straight into the buffer at the cells the canvas adapter reports, so what
//! is drawn and what is clickable always agree.

use crate::app::state::*;
use crate::map::canvas::MapCanvas;
use crate::map::marker::{LatLng, MarkerRef};
use crate::ui::theme::Theme;
use crate::ui::{panel_block, wrap_words};
use ratatui::prelude::*;
use ratatui::symbols::Marker;
use ratatui::widgets::canvas::{Canvas, Map as WorldMap, MapResolution};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

const DESTINATION_GLYPH: &str = "◆";
const CUSTOM_GLYPH: &str = "✚";
const CROSSHAIR_GLYPH: &str = "┼";
const POPUP_MAX_WIDTH: u16 = 40;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let title = if state.is_placing_marker {
        " Interactive Map (placing marker) "
    } else {
        " Interactive Map "
    };
    let block = panel_block(title, FocusPanel::Map, state);

    let Some(canvas) = state.canvas.as_ref() else {
        render_placeholder(frame, area, block);
        return;
    };

    let (x_bounds, y_bounds) = canvas.viewport.bounds();
    let resolution = if state.config.map.high_resolution {
        MapResolution::High
    } else {
        MapResolution::Low
    };
    let world = Canvas::default()
        .block(block)
        .marker(Marker::Braille)
        .x_bounds(x_bounds)
        .y_bounds(y_bounds)
        .paint(move |ctx| {
            ctx.draw(&WorldMap {
                color: Theme::MAP_LAND,
                resolution,
            });
        });
    frame.render_widget(world, area);

    // The outline data only covers [-180, 180]; a view straddling the
    // antimeridian needs the other copy of the world for its far side.
    if let Some(wrapped) = canvas.viewport.wrapped_lng_bounds() {
        let far_side = Canvas::default()
            .marker(Marker::Braille)
            .x_bounds(wrapped)
            .y_bounds(y_bounds)
            .paint(move |ctx| {
                ctx.draw(&WorldMap {
                    color: Theme::MAP_LAND,
                    resolution,
                });
            });
        frame.render_widget(far_side, canvas.area());
    }

    let inner = canvas.area();
    if state.focus == FocusPanel::Map {
        if let Some((col, row)) = canvas.cell_of(canvas.viewport.center()) {
            put_glyph(frame, col, row, CROSSHAIR_GLYPH, Theme::muted());
        }
    }

    for dest in state.destinations {
        let style = if state.selected_destination.as_deref() == Some(dest.name) {
            Theme::destination_selected()
        } else {
            Theme::destination_marker()
        };
        draw_marker(frame, canvas, inner, dest.position, DESTINATION_GLYPH, dest.name, style);
    }
    for marker in &state.custom_markers {
        draw_marker(
            frame,
            canvas,
            inner,
            marker.position,
            CUSTOM_GLYPH,
            &marker.name,
            Theme::custom_marker(),
        );
    }

    render_zoom_control(frame, inner, canvas);
    render_attribution(frame, inner, &state.config.map.attribution);

    if state.is_placing_marker {
        let banner = "Click anywhere on the map to place a marker";
        let line = Line::from(Span::styled(
            banner,
            Style::default()
                .fg(Theme::BG_DARK)
                .bg(Theme::ACCENT_GREEN)
                .add_modifier(Modifier::BOLD),
        ));
        let banner_area = Rect::new(inner.x, inner.y, inner.width, 1u16.min(inner.height));
        frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), banner_area);
    }

    if let Some(marker) = state.popup {
        render_popup(frame, inner, canvas, state, marker);
    }
}

fn render_placeholder(frame: &mut Frame, area: Rect, block: Block) {
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 {
        return;
    }
    let middle = Rect::new(inner.x, inner.y + inner.height / 2, inner.width, 1);
    let paragraph = Paragraph::new(Span::styled("Loading map...", Theme::muted()))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, middle);
}

fn put_glyph(frame: &mut Frame, col: u16, row: u16, glyph: &str, style: Style) {
    if let Some(cell) = frame.buffer_mut().cell_mut((col, row)) {
        cell.set_symbol(glyph).set_style(style);
    }
}

fn draw_marker(
    frame: &mut Frame,
    canvas: &MapCanvas,
    inner: Rect,
    position: LatLng,
    glyph: &str,
    label: &str,
    style: Style,
) {
    let Some((col, row)) = canvas.cell_of(position) else {
        return;
    };
    put_glyph(frame, col, row, glyph, style);

    // label to the right of the glyph, clipped to the canvas
    let label_x = col + 2;
    let right = inner.x + inner.width;
    if label_x < right {
        let max = (right - label_x) as usize;
        frame
            .buffer_mut()
            .set_stringn(label_x, row, label, max, style.remove_modifier(Modifier::BOLD));
    }
}

fn render_zoom_control(frame: &mut Frame, inner: Rect, canvas: &MapCanvas) {
    let text = format!("[+] {:.0} [-]", canvas.viewport.zoom());
    let width = text.width() as u16;
    if inner.width <= width || inner.height < 2 {
        return;
    }
    // second row so the placement banner stays readable
    let x = inner.x + inner.width - width;
    frame
        .buffer_mut()
        .set_string(x, inner.y + 1, text, Theme::key_hint().bg(Theme::BG_ELEVATED));
}

fn render_attribution(frame: &mut Frame, inner: Rect, attribution: &str) {
    let width = attribution.width() as u16;
    if inner.width <= width || inner.height == 0 {
        return;
    }
    let x = inner.x + inner.width - width;
    frame.buffer_mut().set_string(
        x,
        inner.y + inner.height - 1,
        attribution,
        Theme::muted().bg(Theme::BG_DARK),
    );
}

fn render_popup(
    frame: &mut Frame,
    inner: Rect,
    canvas: &MapCanvas,
    state: &AppState,
    marker: MarkerRef,
) {
    let (name, description) = match marker {
        MarkerRef::Destination(id) => match state.destinations.iter().find(|d| d.id == id) {
            Some(d) => (d.name.to_string(), d.description.to_string()),
            None => return,
        },
        MarkerRef::Custom(id) => match state.custom_marker(id) {
            Some(m) => (m.name.clone(), m.description.clone()),
            None => return,
        },
    };
    let Some(position) = state.marker_position(marker) else {
        return;
    };

    let popup_w = POPUP_MAX_WIDTH.min(inner.width);
    if popup_w < 12 {
        return;
    }
    let text_w = (popup_w - 2) as usize;

    let mut lines: Vec<Line> = Vec::new();
    for row in wrap_words(&description, text_w) {
        lines.push(Line::from(Span::styled(row, Theme::text())));
    }
    lines.push(Line::from(Span::styled(position.to_string(), Theme::muted())));
    let mut hints = vec![
        Span::styled("p", Theme::key_hint()),
        Span::styled(" Plan Trip  ", Theme::secondary()),
    ];
    if let MarkerRef::Custom(_) = marker {
        hints.push(Span::styled("x", Theme::key_hint()));
        hints.push(Span::styled(" Remove  ", Theme::secondary()));
    }
    hints.push(Span::styled("Esc", Theme::key_hint()));
    hints.push(Span::styled(" Close", Theme::secondary()));
    lines.push(Line::from(hints));

    let popup_h = (lines.len() as u16 + 2).min(inner.height);

    // Anchor above the marker when there is room, otherwise below it.
    let (anchor_col, anchor_row) = canvas
        .cell_of(position)
        .unwrap_or((inner.x + inner.width / 2, inner.y + inner.height / 2));
    let max_x = inner.x + inner.width - popup_w;
    let x = anchor_col.saturating_sub(popup_w / 2).clamp(inner.x, max_x);
    let y = if anchor_row >= inner.y + popup_h {
        anchor_row - popup_h
    } else {
        (anchor_row + 1).min(inner.y + inner.height - popup_h)
    };
    let popup_area = Rect::new(x, y, popup_w, popup_h);

    let title_style = match marker {
        MarkerRef::Destination(_) => Theme::destination_selected(),
        MarkerRef::Custom(_) => Theme::custom_marker(),
    };
    let block = Block::default()
        .title(Span::styled(format!(" {} ", name), title_style))
        .borders(Borders::ALL)
        .border_type(Theme::border_type_focused())
        .border_style(Style::default().fg(Theme::ACCENT_TEAL))
        .style(Style::default().bg(Theme::BG_SURFACE));

    frame.render_widget(Clear, popup_area);
    frame.render_widget(Paragraph::new(lines).block(block), popup_area);
}
