use crate::app::state::*;
use crate::map::marker::MarkerRef;
use crate::ui::theme::Theme;
use crate::ui::{panel_block, wrap_words};
use ratatui::prelude::*;
use ratatui::widgets::{HighlightSpacing, List, ListItem, ListState};

/// Highlight symbol column in front of every row.
const GUTTER: u16 = 2;
const PLAN_TRIP_HINT: &str = "p Plan Trip";
const REMOVE_HINT: &str = "x Remove";
const HINT_GAP: &str = "  ";

/// What a mouse press inside the list landed on. Indices are positions in
/// `AppState::list_entries`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ListHit {
    Entry(usize),
    PlanTrip(usize),
    Remove(usize),
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.focus == FocusPanel::Destinations;
    let block = panel_block(" Popular Destinations ", FocusPanel::Destinations, state);

    let rows = build_rows(state, area.width);
    let cursor_item = rows
        .iter()
        .position(|(_, entry)| *entry == Some(state.list_cursor));
    let heights: Vec<u16> = rows.iter().map(|(item, _)| item.height() as u16).collect();
    let offset = scroll_offset(&heights, cursor_item, area.height.saturating_sub(2));

    let items: Vec<ListItem> = rows.into_iter().map(|(item, _)| item).collect();
    let list = List::new(items)
        .block(block)
        .highlight_symbol(if focused { "❯ " } else { "  " })
        .highlight_spacing(HighlightSpacing::Always);
    let mut list_state = ListState::default()
        .with_selected(cursor_item)
        .with_offset(offset);
    frame.render_stateful_widget(list, area, &mut list_state);
}

/// Map a screen cell inside the list panel to the entry drawn there.
pub fn hit_test(state: &AppState, area: Rect, col: u16, row: u16) -> Option<ListHit> {
    let inner = area.inner(Margin::new(1, 1));
    if !inner.contains(Position::new(col, row)) {
        return None;
    }

    let rows = build_rows(state, area.width);
    let cursor_item = rows
        .iter()
        .position(|(_, entry)| *entry == Some(state.list_cursor));
    let heights: Vec<u16> = rows.iter().map(|(item, _)| item.height() as u16).collect();
    let offset = scroll_offset(&heights, cursor_item, inner.height);

    let mut top = inner.y;
    for (i, &height) in heights.iter().enumerate().skip(offset) {
        // items that do not fit entirely are not drawn
        if top + height > inner.bottom() {
            return None;
        }
        if row < top + height {
            let entry = rows[i].1?;
            let on_hint_line = row == top + height - 1;
            let x = col.saturating_sub(inner.x + GUTTER);
            return Some(if !on_hint_line {
                ListHit::Entry(entry)
            } else if x < PLAN_TRIP_HINT.len() as u16 {
                ListHit::PlanTrip(entry)
            } else if matches!(state.list_entries().get(entry), Some(MarkerRef::Custom(_)))
                && x >= (PLAN_TRIP_HINT.len() + HINT_GAP.len()) as u16
                && x < (PLAN_TRIP_HINT.len() + HINT_GAP.len() + REMOVE_HINT.len()) as u16
            {
                ListHit::Remove(entry)
            } else {
                ListHit::Entry(entry)
            });
        }
        top += height;
    }
    None
}

/// List items paired with the entry index they show; the section heading has
/// none.
fn build_rows(state: &AppState, area_width: u16) -> Vec<(ListItem<'static>, Option<usize>)> {
    // highlight symbol + borders
    let text_width = (area_width as usize).saturating_sub(GUTTER as usize + 2);

    let mut rows = Vec::new();
    for (i, entry) in state.list_entries().into_iter().enumerate() {
        if let MarkerRef::Custom(_) = entry {
            if i == state.destinations.len() {
                rows.push((
                    ListItem::new(vec![
                        Line::default(),
                        Line::from(Span::styled("Your Custom Markers", Theme::heading())),
                    ]),
                    None,
                ));
            }
        }
        rows.push((entry_item(state, entry, text_width), Some(i)));
    }
    rows
}

/// First visible item such that the cursor item fits in `height` rows.
fn scroll_offset(heights: &[u16], selected: Option<usize>, height: u16) -> usize {
    let Some(selected) = selected.filter(|&i| i < heights.len()) else {
        return 0;
    };
    let mut offset = 0;
    while offset < selected && heights[offset..=selected].iter().sum::<u16>() > height {
        offset += 1;
    }
    offset
}

fn entry_item(state: &AppState, entry: MarkerRef, width: usize) -> ListItem<'static> {
    let mut lines: Vec<Line> = Vec::new();
    match entry {
        MarkerRef::Destination(id) => {
            let Some(dest) = state.destinations.iter().find(|d| d.id == id) else {
                return ListItem::new(Line::default());
            };
            let selected = state.selected_destination.as_deref() == Some(dest.name);
            let (glyph_style, name_style) = if selected {
                (
                    Theme::destination_selected(),
                    Theme::destination_selected().bg(Theme::BG_ELEVATED),
                )
            } else {
                (Theme::destination_marker(), Theme::title())
            };
            lines.push(Line::from(vec![
                Span::styled("◆ ", glyph_style),
                Span::styled(dest.name.to_string(), name_style),
            ]));
            for row in wrap_words(dest.description, width) {
                lines.push(Line::from(Span::styled(row, Theme::secondary())));
            }
            lines.push(hint_line(false));
        }
        MarkerRef::Custom(id) => {
            let Some(marker) = state.custom_marker(id) else {
                return ListItem::new(Line::default());
            };
            lines.push(Line::from(vec![
                Span::styled("✚ ", Theme::custom_marker()),
                Span::styled(marker.name.clone(), Theme::title()),
                Span::styled(format!("  #{}", marker.id), Theme::muted()),
            ]));
            for row in wrap_words(&marker.description, width) {
                lines.push(Line::from(Span::styled(row, Theme::secondary())));
            }
            lines.push(hint_line(true));
        }
    }
    ListItem::new(lines)
}

fn hint_line(removable: bool) -> Line<'static> {
    let mut spans = vec![
        Span::styled(&PLAN_TRIP_HINT[..1], Theme::key_hint()),
        Span::styled(&PLAN_TRIP_HINT[1..], Theme::muted()),
    ];
    if removable {
        spans.push(Span::styled(HINT_GAP, Theme::muted()));
        spans.push(Span::styled(&REMOVE_HINT[..1], Theme::key_hint()));
        spans.push(Span::styled(&REMOVE_HINT[1..], Theme::muted()));
    }
    Line::from(spans)
}
