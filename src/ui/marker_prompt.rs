use crate::app::prompt::PromptStage;
use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, state: &AppState) {
    let Some(prompt) = state.prompt.as_ref() else {
        return;
    };

    let area = frame.area();

    // Center the dialog: 50% width, fixed height, min 44 wide
    let popup_w = (area.width / 2).max(44).min(area.width.saturating_sub(4));
    let popup_h = 9u16.min(area.height);
    let popup_x = (area.width.saturating_sub(popup_w)) / 2;
    let popup_y = (area.height.saturating_sub(popup_h)) / 2;
    let popup_area = Rect::new(popup_x, popup_y, popup_w, popup_h);

    frame.render_widget(Clear, popup_area);

    let step = match prompt.stage {
        PromptStage::Name => "1/2",
        PromptStage::Description => "2/2",
    };
    let block = Block::default()
        .title(format!(" New Marker ({}) ", step))
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type_focused())
        .border_style(Style::default().fg(Theme::ACCENT_TEAL))
        .padding(Padding::horizontal(1))
        .style(Style::default().bg(Theme::BG_SURFACE));

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    if inner.height < 5 || inner.width < 10 {
        return;
    }

    let question = Paragraph::new(Span::styled(prompt.question(), Theme::text()));
    frame.render_widget(question, Rect::new(inner.x, inner.y, inner.width, 1));

    let location = Paragraph::new(Span::styled(
        format!("at {}", prompt.position),
        Theme::muted(),
    ));
    frame.render_widget(location, Rect::new(inner.x, inner.y + 1, inner.width, 1));

    // Input line: chevron + text, scrolled so the cursor stays visible
    let input_y = inner.y + 3;
    let (shown, cursor_col) = visible_input(
        &prompt.input.text,
        prompt.input.cursor,
        inner.width.saturating_sub(2) as usize,
    );
    let line = Line::from(vec![
        Span::styled("❯ ", Style::default().fg(Theme::ACCENT_TEAL)),
        Span::styled(shown, Theme::input_text()),
    ]);
    frame.render_widget(
        Paragraph::new(line).style(Style::default().bg(Theme::BG_ELEVATED)),
        Rect::new(inner.x, input_y, inner.width, 1),
    );

    let cursor_x = inner.x + 2 + cursor_col as u16;
    frame.set_cursor_position((cursor_x.min(inner.right() - 1), input_y));

    let help = Line::from(vec![
        Span::styled("Enter", Theme::key_hint()),
        Span::styled(" OK  ", Theme::secondary()),
        Span::styled("Esc", Theme::key_hint()),
        Span::styled(" Skip (uses default)", Theme::secondary()),
    ]);
    frame.render_widget(
        Paragraph::new(help),
        Rect::new(inner.x, inner.y + inner.height - 1, inner.width, 1),
    );
}

/// Tail of `text` that fits in `width` cells with room for the cursor, and the
/// cursor column inside it.
fn visible_input(text: &str, cursor: usize, width: usize) -> (&str, usize) {
    let mut start = 0;
    while start < cursor && text[start..cursor].width() >= width {
        start += text[start..].chars().next().map_or(1, char::len_utf8);
    }
    (&text[start..], text[start..cursor].width())
}
