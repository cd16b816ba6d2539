use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub header: Rect,
    pub destinations: Rect,
    pub map: Rect,
    pub controls: Rect,
    pub cards: Rect,
    pub status_bar: Rect,
}

impl AppLayout {
    /// Map area inside its border; this is where the canvas draws.
    pub fn map_inner(&self) -> Rect {
        let m = self.map;
        Rect::new(
            m.x.saturating_add(1),
            m.y.saturating_add(1),
            m.width.saturating_sub(2),
            m.height.saturating_sub(2),
        )
    }
}

pub fn compute_layout(area: Rect) -> AppLayout {
    // Main vertical split: header | widget | feature cards | status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title + tagline
            Constraint::Min(10),   // Map widget
            Constraint::Length(4), // Feature cards
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let header = main_chunks[0];
    let body = main_chunks[1];
    let cards = main_chunks[2];
    let status_bar = main_chunks[3];

    // Horizontal: list | map | controls
    let body_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .spacing(1)
        .constraints([
            Constraint::Length(34), // Destinations + custom markers
            Constraint::Min(30),    // Map canvas
            Constraint::Length(30), // Controls
        ])
        .split(body);

    AppLayout {
        header,
        destinations: body_chunks[0],
        map: body_chunks[1],
        controls: body_chunks[2],
        cards,
        status_bar,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_gets_remaining_width() {
        let layout = compute_layout(Rect::new(0, 0, 160, 48));
        assert_eq!(layout.destinations.width, 34);
        assert_eq!(layout.controls.width, 30);
        assert_eq!(layout.map.width, 160 - 34 - 30 - 2);
        assert_eq!(layout.status_bar.y, 47);
        let inner = layout.map_inner();
        assert_eq!(inner.width, layout.map.width - 2);
        assert_eq!(inner.height, layout.map.height - 2);
    }
}
