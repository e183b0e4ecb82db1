//! Application state management
//!
//! Handles route transitions, navigation logic, and keyboard event
//! processing for the navigation shell.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Application routes, one per screen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum AppState {
    /// Welcome card
    #[default]
    Home,
    /// Username/password form
    Login,
    /// Register placeholder
    Register,
}

impl AppState {
    /// All routes in tab order
    pub const ALL: [AppState; 3] = [AppState::Home, AppState::Login, AppState::Register];

    /// URL-style path of the route
    pub fn path(&self) -> &'static str {
        match self {
            AppState::Home => "/home",
            AppState::Login => "/login",
            AppState::Register => "/register",
        }
    }

    /// Tab label
    pub fn title(&self) -> &'static str {
        match self {
            AppState::Home => "Home",
            AppState::Login => "Login",
            AppState::Register => "Register",
        }
    }

    /// Resolve a path such as "/login" or "login"
    pub fn from_path(path: &str) -> Option<Self> {
        match path.trim().trim_start_matches('/') {
            "" | "home" => Some(AppState::Home),
            "login" => Some(AppState::Login),
            "register" => Some(AppState::Register),
            _ => None,
        }
    }

    /// Position in the tab bar
    pub fn index(&self) -> usize {
        match self {
            AppState::Home => 0,
            AppState::Login => 1,
            AppState::Register => 2,
        }
    }
}

impl TryFrom<String> for AppState {
    type Error = String;

    /// Config files may name a route as "login" or "/login"
    fn try_from(value: String) -> Result<Self, Self::Error> {
        AppState::from_path(&value).ok_or_else(|| format!("unknown route '{}'", value))
    }
}

impl fmt::Display for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Navigation actions that can be triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationAction {
    /// Jump straight to a route (F1-F3, or h/l/r outside text entry)
    GoTo(AppState),
    /// Go back (Esc)
    Back,
    /// Next tab (Right, Ctrl+Right)
    NextTab,
    /// Previous tab (Left, Ctrl+Left)
    PreviousTab,
    /// Quit application (q, Q, Ctrl+C)
    Quit,
    /// No action
    None,
}

/// Application state manager
#[derive(Debug)]
pub struct StateManager {
    current_state: AppState,
    previous_state: Option<AppState>,
    should_quit: bool,
}

impl StateManager {
    /// Create a new state manager starting at the home screen
    pub fn new() -> Self {
        Self::starting_at(AppState::Home)
    }

    /// Create a new state manager starting at the given route
    pub fn starting_at(route: AppState) -> Self {
        Self {
            current_state: route,
            previous_state: None,
            should_quit: false,
        }
    }

    /// Get the current application state
    pub fn current_state(&self) -> &AppState {
        &self.current_state
    }

    /// Get the previous state if available
    pub fn previous_state(&self) -> Option<&AppState> {
        self.previous_state.as_ref()
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Set the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Transition to a new state
    pub fn transition_to(&mut self, new_state: AppState) {
        if new_state != self.current_state {
            self.previous_state = Some(self.current_state);
            self.current_state = new_state;
        }
    }

    /// Go back to the previous state if available, otherwise go to Home
    pub fn go_back(&mut self) {
        match self.previous_state.take() {
            Some(prev_state) => {
                self.current_state = prev_state;
            }
            None => {
                self.current_state = AppState::Home;
            }
        }
    }

    /// Apply a navigation action to the route state
    pub fn handle_navigation(&mut self, action: NavigationAction) {
        match action {
            NavigationAction::Quit => self.should_quit = true,
            NavigationAction::Back => match self.current_state {
                AppState::Home => self.should_quit = true,
                _ => self.go_back(),
            },
            NavigationAction::GoTo(route) => self.transition_to(route),
            NavigationAction::NextTab => {
                let next = (self.current_state.index() + 1) % AppState::ALL.len();
                self.transition_to(AppState::ALL[next]);
            }
            NavigationAction::PreviousTab => {
                let len = AppState::ALL.len();
                let prev = (self.current_state.index() + len - 1) % len;
                self.transition_to(AppState::ALL[prev]);
            }
            NavigationAction::None => {}
        }
    }

    /// Keys that navigate from any screen, including while typing
    pub fn global_key_to_navigation(key: KeyEvent) -> NavigationAction {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                NavigationAction::Quit
            }
            KeyCode::F(1) => NavigationAction::GoTo(AppState::Home),
            KeyCode::F(2) => NavigationAction::GoTo(AppState::Login),
            KeyCode::F(3) => NavigationAction::GoTo(AppState::Register),
            KeyCode::Left if key.modifiers.contains(KeyModifiers::CONTROL) => {
                NavigationAction::PreviousTab
            }
            KeyCode::Right if key.modifiers.contains(KeyModifiers::CONTROL) => {
                NavigationAction::NextTab
            }
            KeyCode::Esc => NavigationAction::Back,
            _ => NavigationAction::None,
        }
    }

    /// Convert keyboard event to navigation action on screens without text entry
    pub fn key_to_navigation(key: KeyEvent) -> NavigationAction {
        match Self::global_key_to_navigation(key) {
            NavigationAction::None => {}
            action => return action,
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => NavigationAction::Quit,
            KeyCode::Char('h') => NavigationAction::GoTo(AppState::Home),
            KeyCode::Char('l') => NavigationAction::GoTo(AppState::Login),
            KeyCode::Char('r') => NavigationAction::GoTo(AppState::Register),
            KeyCode::Right | KeyCode::Tab => NavigationAction::NextTab,
            KeyCode::Left | KeyCode::BackTab => NavigationAction::PreviousTab,
            KeyCode::Backspace => NavigationAction::Back,
            _ => NavigationAction::None,
        }
    }
}

impl Default for StateManager {
    fn default() -> Self {
        Self::new()
    }
}
