//! Register screen implementation
//!
//! Placeholder card. Registration has no fields yet.

use super::card::card_block;
use crate::util::centered_rect;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};

pub const REGISTER_TITLE: &str = "Register Page";
pub const REGISTER_BODY: &str = "Register Page Blank Template";
pub const REGISTER_NOTE: &str = "Work in Progress";

/// Register screen component
#[derive(Debug, Default, Clone, Copy)]
pub struct RegisterScreen;

impl RegisterScreen {
    pub fn new() -> Self {
        Self
    }

    /// Render the placeholder card centered in `area`
    pub fn render(&self, f: &mut Frame, area: Rect) {
        let card = centered_rect(REGISTER_BODY.len() as u16 + 8, 6, area);

        let lines = vec![
            Line::from(REGISTER_BODY),
            Line::from(""),
            Line::styled(
                REGISTER_NOTE,
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::ITALIC),
            ),
        ];

        let body = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(card_block(REGISTER_TITLE));

        f.render_widget(body, card);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::screens::card::test_support::{buffer_text, render_to_buffer};

    #[test]
    fn test_register_renders_placeholder_only() {
        let screen = RegisterScreen::new();
        let buffer = render_to_buffer(60, 10, |f| {
            let area = f.size();
            screen.render(f, area)
        });
        let text = buffer_text(&buffer);

        assert!(text.contains(REGISTER_TITLE));
        assert!(text.contains(REGISTER_BODY));
        assert!(text.contains(REGISTER_NOTE));
        assert!(!text.contains("Username"));
        assert!(!text.contains("Password"));
    }
}
