//! Login screen implementation
//!
//! Username and password inputs with a password visibility toggle and a
//! Login button. Submitting hands the values to the caller untouched.

use super::card::{card_block, CARD_ACCENT};
use crate::form::{Credentials, FormInputState, PasswordVisibility, TextInput};
use crate::util::{centered_rect, visible_window};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{block::Title, Block, BorderType, Borders, Paragraph},
    Frame,
};

pub const LOGIN_TITLE: &str = "Login Page";
const CARD_WIDTH: u16 = 50;
const CARD_HEIGHT: u16 = 15;

/// Focusable elements of the form, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    Username,
    Password,
    LoginButton,
}

impl LoginField {
    fn next(self) -> Self {
        match self {
            Self::Username => Self::Password,
            Self::Password => Self::LoginButton,
            Self::LoginButton => Self::Username,
        }
    }

    fn previous(self) -> Self {
        match self {
            Self::Username => Self::LoginButton,
            Self::Password => Self::Username,
            Self::LoginButton => Self::Password,
        }
    }
}

/// Result of feeding a key to the login screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Submit fired with these values
    Submitted(Credentials),
    /// Key was used by the form
    Consumed,
    /// Key means nothing here; the shell may handle it
    Ignored,
}

/// Login screen component
#[derive(Debug, Clone)]
pub struct LoginScreen {
    form: FormInputState,
    focus: LoginField,
    visibility: PasswordVisibility,
    submit_count: usize,
}

impl LoginScreen {
    /// Create a freshly mounted login screen with empty fields
    pub fn new() -> Self {
        Self {
            form: FormInputState::new(),
            focus: LoginField::Username,
            visibility: PasswordVisibility::Hidden,
            submit_count: 0,
        }
    }

    pub fn form(&self) -> &FormInputState {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut FormInputState {
        &mut self.form
    }

    pub fn focus(&self) -> LoginField {
        self.focus
    }

    pub fn set_focus(&mut self, focus: LoginField) {
        self.focus = focus;
    }

    pub fn visibility(&self) -> PasswordVisibility {
        self.visibility
    }

    /// Flip show/hide on the password field. Display only.
    pub fn toggle_password_visibility(&mut self) {
        self.visibility = self.visibility.toggled();
    }

    /// Number of submits since mount
    pub fn submit_count(&self) -> usize {
        self.submit_count
    }

    /// Fire the Login action with whatever the form holds
    pub fn submit(&mut self) -> Credentials {
        self.submit_count += 1;
        self.form.credentials()
    }

    fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focus {
            LoginField::Username => Some(&mut self.form.username),
            LoginField::Password => Some(&mut self.form.password),
            LoginField::LoginButton => None,
        }
    }

    /// Handle key events for the login screen
    pub fn handle_key_event(&mut self, key: KeyEvent) -> LoginOutcome {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let alt = key.modifiers.contains(KeyModifiers::ALT);

        match key.code {
            KeyCode::Char('t') if ctrl => {
                self.toggle_password_visibility();
                return LoginOutcome::Consumed;
            }
            KeyCode::F(5) => {
                self.toggle_password_visibility();
                return LoginOutcome::Consumed;
            }
            KeyCode::Tab | KeyCode::Down => {
                self.focus = self.focus.next();
                return LoginOutcome::Consumed;
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus = self.focus.previous();
                return LoginOutcome::Consumed;
            }
            KeyCode::Enter => {
                return match self.focus {
                    LoginField::Username => {
                        self.focus = LoginField::Password;
                        LoginOutcome::Consumed
                    }
                    LoginField::Password | LoginField::LoginButton => {
                        LoginOutcome::Submitted(self.submit())
                    }
                };
            }
            KeyCode::Char(' ') if self.focus == LoginField::LoginButton => {
                return LoginOutcome::Submitted(self.submit());
            }
            _ => {}
        }

        let Some(input) = self.focused_input() else {
            return LoginOutcome::Ignored;
        };

        match key.code {
            KeyCode::Char(c) if !ctrl && !alt => input.insert_char(c),
            KeyCode::Backspace => input.backspace(),
            KeyCode::Delete => input.delete(),
            KeyCode::Left => input.move_left(),
            KeyCode::Right => input.move_right(),
            KeyCode::Home => input.move_home(),
            KeyCode::End => input.move_end(),
            _ => return LoginOutcome::Ignored,
        }
        LoginOutcome::Consumed
    }

    /// Render the login card centered in `area`
    pub fn render(&self, f: &mut Frame, area: Rect) {
        let card = centered_rect(CARD_WIDTH, CARD_HEIGHT, area);
        let block = card_block(LOGIN_TITLE);
        let inner = block.inner(card);
        f.render_widget(block, card);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Username
                Constraint::Length(3), // Password
                Constraint::Length(1), // Spacer
                Constraint::Length(3), // Login button
                Constraint::Length(1), // Status
                Constraint::Min(0),
            ])
            .split(inner);

        self.render_input(f, chunks[0], LoginField::Username);
        self.render_input(f, chunks[1], LoginField::Password);
        self.render_button(f, chunks[3]);
        self.render_status(f, chunks[4]);
    }

    fn render_input(&self, f: &mut Frame, area: Rect, field: LoginField) {
        let focused = self.focus == field;
        let (label, input, shown) = match field {
            LoginField::Username => (
                "Username",
                &self.form.username,
                self.form.username().to_string(),
            ),
            LoginField::Password => (
                "Password",
                &self.form.password,
                self.visibility.display(self.form.password()),
            ),
            LoginField::LoginButton => return,
        };

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style(focused))
            .title(label);

        if field == LoginField::Password {
            let toggle = match self.visibility {
                PasswordVisibility::Hidden => " [Show] ",
                PasswordVisibility::Shown => " [Hide] ",
            };
            block = block.title(Title::from(toggle).alignment(Alignment::Right));
        }

        let inner = block.inner(area);
        let (visible, cursor_col) = visible_window(&shown, input.cursor(), inner.width as usize);

        f.render_widget(Paragraph::new(visible).block(block), area);

        if focused && inner.width > 0 && inner.height > 0 {
            f.set_cursor(inner.x + cursor_col as u16, inner.y);
        }
    }

    fn render_button(&self, f: &mut Frame, area: Rect) {
        let focused = self.focus == LoginField::LoginButton;
        let style = if focused {
            Style::default()
                .bg(CARD_ACCENT)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(CARD_ACCENT).add_modifier(Modifier::BOLD)
        };

        let button = Paragraph::new(Line::from(Span::styled(" Login ", style)))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(border_style(focused)),
            );
        f.render_widget(button, area);
    }

    fn render_status(&self, f: &mut Frame, area: Rect) {
        if self.submit_count == 0 {
            return;
        }
        let status = Paragraph::new(format!("Submitted ({})", self.submit_count))
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        f.render_widget(status, area);
    }
}

impl Default for LoginScreen {
    fn default() -> Self {
        Self::new()
    }
}

fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(CARD_ACCENT)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}
