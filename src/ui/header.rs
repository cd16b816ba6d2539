//! Static host-page content around the map widget.

use crate::ui::theme::Theme;
use crate::ui::wrap_words;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

struct FeatureCard {
    title: &'static str,
    body: &'static str,
    button: &'static str,
    accent: Color,
}

const CARDS: [FeatureCard; 2] = [
    FeatureCard {
        title: "Plan Your Trip",
        body: "Explore destinations, mark points of interest, and plan your perfect journey with our interactive map.",
        button: "Start Planning",
        accent: Theme::ACCENT_BLUE,
    },
    FeatureCard {
        title: "Discover Places",
        body: "Find amazing destinations, restaurants, hotels, and attractions around the world.",
        button: "Explore Now",
        accent: Theme::ACCENT_GREEN,
    },
];

pub fn render(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "Travelio",
            Style::default()
                .fg(Theme::ACCENT_TEAL)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Your interactive travel companion",
            Theme::secondary(),
        )),
    ];
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(Style::default().bg(Theme::BG_DARK));
    frame.render_widget(paragraph, area);
}

pub fn render_cards(frame: &mut Frame, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .spacing(1)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    for (card, column) in CARDS.iter().zip(columns.iter()) {
        let block = Block::default()
            .title(format!(" {} ", card.title))
            .title_style(Theme::title())
            .borders(Borders::ALL)
            .border_type(Theme::border_type())
            .border_style(Theme::border())
            .style(Theme::panel_bg());
        let inner = block.inner(*column);
        frame.render_widget(block, *column);

        // Button sits at the end of the first line; the body fills the rest.
        let button = format!(" {} ", card.button);
        let text_width = (inner.width as usize).saturating_sub(button.len() + 1);
        let body = wrap_words(card.body, text_width);

        let mut lines: Vec<Line> = Vec::new();
        let first = body.first().cloned().unwrap_or_default();
        let pad = text_width.saturating_sub(first.chars().count()) + 1;
        lines.push(Line::from(vec![
            Span::styled(first, Theme::secondary()),
            Span::raw(" ".repeat(pad)),
            Span::styled(button, Style::default().fg(Theme::BG_DARK).bg(card.accent)),
        ]));
        for rest in body.iter().skip(1) {
            lines.push(Line::from(Span::styled(rest.clone(), Theme::secondary())));
        }
        frame.render_widget(Paragraph::new(lines), inner);
    }
}
