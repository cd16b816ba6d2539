use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

pub struct Theme;

impl Theme {
    pub const BG_DARK: Color = Color::Rgb(16, 20, 28);
    pub const BG_SURFACE: Color = Color::Rgb(24, 30, 40);
    pub const BG_ELEVATED: Color = Color::Rgb(36, 44, 58);
    pub const BORDER_DIM: Color = Color::Rgb(60, 70, 86);
    pub const TEXT_PRIMARY: Color = Color::Rgb(220, 226, 235);
    pub const TEXT_SECONDARY: Color = Color::Rgb(150, 160, 176);
    pub const TEXT_MUTED: Color = Color::Rgb(100, 110, 126);
    pub const ACCENT_TEAL: Color = Color::Rgb(64, 196, 200);
    pub const ACCENT_BLUE: Color = Color::Rgb(86, 156, 240);
    pub const ACCENT_GREEN: Color = Color::Rgb(96, 200, 120);
    pub const ACCENT_AMBER: Color = Color::Rgb(240, 180, 64);
    pub const ACCENT_RED: Color = Color::Rgb(230, 90, 90);
    pub const MAP_LAND: Color = Color::Rgb(90, 120, 100);

    pub fn border() -> Style {
        Style::default().fg(Self::BORDER_DIM)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Self::ACCENT_TEAL)
    }

    pub fn border_type() -> BorderType {
        BorderType::Plain
    }

    pub fn border_type_focused() -> BorderType {
        BorderType::Rounded
    }

    pub fn panel_bg() -> Style {
        Style::default().bg(Self::BG_DARK)
    }

    pub fn panel_bg_focused() -> Style {
        Style::default().bg(Self::BG_SURFACE)
    }

    pub fn title() -> Style {
        Style::default()
            .fg(Self::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn heading() -> Style {
        Style::default()
            .fg(Self::ACCENT_TEAL)
            .add_modifier(Modifier::BOLD)
    }

    pub fn text() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY)
    }

    pub fn secondary() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    pub fn muted() -> Style {
        Style::default().fg(Self::TEXT_MUTED)
    }

    pub fn key_hint() -> Style {
        Style::default()
            .fg(Self::ACCENT_AMBER)
            .add_modifier(Modifier::BOLD)
    }

    pub fn destination_marker() -> Style {
        Style::default()
            .fg(Self::ACCENT_BLUE)
            .add_modifier(Modifier::BOLD)
    }

    pub fn destination_selected() -> Style {
        Style::default()
            .fg(Self::ACCENT_AMBER)
            .add_modifier(Modifier::BOLD)
    }

    pub fn custom_marker() -> Style {
        Style::default()
            .fg(Self::ACCENT_GREEN)
            .add_modifier(Modifier::BOLD)
    }

    pub fn button() -> Style {
        Style::default().fg(Self::BG_DARK).bg(Self::ACCENT_BLUE)
    }

    pub fn button_active() -> Style {
        Style::default().fg(Self::BG_DARK).bg(Self::ACCENT_GREEN)
    }

    pub fn button_danger() -> Style {
        Style::default().fg(Self::BG_DARK).bg(Self::ACCENT_RED)
    }

    pub fn input_text() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY).bg(Self::BG_ELEVATED)
    }
}
