//! Form input state for the login screen
//!
//! Per-field edit buffers, the two-field form they make up, and the
//! credential snapshot handed to the diagnostic sink on submit.

use std::fmt;

/// Glyph drawn for each character of a hidden password
pub const MASK_CHAR: char = '•';

/// Single-line text buffer with a character-indexed cursor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    buffer: String,
    /// Cursor position in characters, always within 0..=char_count
    cursor: usize,
}

impl TextInput {
    /// Create an empty input
    pub fn new() -> Self {
        Self::default()
    }

    /// Current text
    pub fn value(&self) -> &str {
        &self.buffer
    }

    /// Cursor position in characters
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of characters in the buffer
    pub fn char_count(&self) -> usize {
        self.buffer.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Replace the whole value and park the cursor at the end
    pub fn set(&mut self, value: impl Into<String>) {
        self.buffer = value.into();
        self.cursor = self.char_count();
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    /// Insert a character at the cursor position
    pub fn insert_char(&mut self, c: char) {
        let idx = self.byte_index(self.cursor);
        self.buffer.insert(idx, c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let idx = self.byte_index(self.cursor);
            self.buffer.remove(idx);
        }
    }

    /// Delete the character at the cursor
    pub fn delete(&mut self) {
        if self.cursor < self.char_count() {
            let idx = self.byte_index(self.cursor);
            self.buffer.remove(idx);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    fn byte_index(&self, char_pos: usize) -> usize {
        self.buffer
            .char_indices()
            .nth(char_pos)
            .map(|(i, _)| i)
            .unwrap_or(self.buffer.len())
    }
}

/// Whether the password field shows its characters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PasswordVisibility {
    #[default]
    Hidden,
    Shown,
}

impl PasswordVisibility {
    pub fn toggled(self) -> Self {
        match self {
            Self::Hidden => Self::Shown,
            Self::Shown => Self::Hidden,
        }
    }

    /// Text to draw for a password value under this visibility
    pub fn display(self, value: &str) -> String {
        match self {
            Self::Hidden => value.chars().map(|_| MASK_CHAR).collect(),
            Self::Shown => value.to_string(),
        }
    }
}

/// Username and password exactly as typed
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Transient two-field buffer owned by a mounted login screen
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInputState {
    pub username: TextInput,
    pub password: TextInput,
}

impl FormInputState {
    /// Both fields start empty
    pub fn new() -> Self {
        Self::default()
    }

    pub fn username(&self) -> &str {
        self.username.value()
    }

    pub fn password(&self) -> &str {
        self.password.value()
    }

    pub fn set_username(&mut self, value: impl Into<String>) {
        self.username.set(value);
    }

    pub fn set_password(&mut self, value: impl Into<String>) {
        self.password.set(value);
    }

    /// Snapshot of the current values
    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.username(), self.password())
    }
}
