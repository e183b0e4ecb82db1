//! Shared card chrome for the screens

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding},
};

pub const CARD_ACCENT: Color = Color::Cyan;

/// Rounded, padded block with a centered bold title
pub fn card_block(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(CARD_ACCENT))
        .title(Line::from(Span::styled(
            format!(" {} ", title),
            Style::default()
                .fg(CARD_ACCENT)
                .add_modifier(Modifier::BOLD),
        )))
        .title_alignment(Alignment::Center)
        .padding(Padding::horizontal(1))
}

#[cfg(test)]
pub(crate) mod test_support {
    use ratatui::{backend::TestBackend, buffer::Buffer, Frame, Terminal};

    /// Draw into a test terminal and return the buffer
    pub fn render_to_buffer<F>(width: u16, height: u16, draw: F) -> Buffer
    where
        F: FnOnce(&mut Frame),
    {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(draw).unwrap();
        terminal.backend().buffer().clone()
    }

    /// Buffer contents as newline-separated rows
    pub fn buffer_text(buffer: &Buffer) -> String {
        let width = buffer.area.width as usize;
        buffer
            .content
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
