//! Home screen implementation
//!
//! Static welcome card pointing the user at login or register.

use super::card::card_block;
use crate::util::centered_rect;
use crate::SYSTEM_TITLE;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Paragraph, Wrap},
    Frame,
};

pub const HOME_BODY: &str = "To get started, please log in or register.";

/// Home screen component
#[derive(Debug, Default, Clone, Copy)]
pub struct HomeScreen;

impl HomeScreen {
    pub fn new() -> Self {
        Self
    }

    /// Card title
    pub fn title(&self) -> String {
        format!("Welcome to the {}", SYSTEM_TITLE)
    }

    /// Render the welcome card centered in `area`
    pub fn render(&self, f: &mut Frame, area: Rect) {
        let title = self.title();
        let width = (title.chars().count() as u16 + 8).max(HOME_BODY.len() as u16 + 6);
        let card = centered_rect(width, 5, area);

        let body = Paragraph::new(HOME_BODY)
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(card_block(&title));

        f.render_widget(body, card);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::screens::card::test_support::{buffer_text, render_to_buffer};

    #[test]
    fn test_home_renders_welcome() {
        let screen = HomeScreen::new();
        let buffer = render_to_buffer(80, 12, |f| {
            let area = f.size();
            screen.render(f, area)
        });
        let text = buffer_text(&buffer);

        assert!(text.contains("Welcome to the eSchool Tardy System"));
        assert!(text.contains(HOME_BODY));
    }

    #[test]
    fn test_home_survives_tiny_area() {
        let screen = HomeScreen::new();
        render_to_buffer(4, 2, |f| {
            let area = f.size();
            screen.render(f, area)
        });
    }
}
