//! Main application controller
//!
//! Owns the route state, mounts one screen at a time, forwards login
//! submissions to the diagnostic sink, and drives the render loop.

use crate::{
    app::{
        screens::{HomeScreen, LoginOutcome, LoginScreen, RegisterScreen},
        state::{AppState, NavigationAction, StateManager},
        tui::{Tui, MIN_HEIGHT, MIN_WIDTH},
    },
    config::PortalConfig,
    sink::DiagnosticSink,
    Result, SYSTEM_TITLE,
};
use crossterm::event::KeyEvent;
use ratatui::{
    backend::Backend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs, Wrap},
    Frame,
};
use tracing::{debug, info};

/// TUI application controller
pub struct App<S: DiagnosticSink> {
    /// Route state manager
    state_manager: StateManager,
    /// Loaded configuration
    config: PortalConfig,
    /// Screen components; the login screen only exists while mounted
    home_screen: HomeScreen,
    login_screen: Option<LoginScreen>,
    register_screen: RegisterScreen,
    /// Receiver for login submissions
    sink: S,
}

impl<S: DiagnosticSink> App<S> {
    /// Create a new application mounted at the configured start route
    pub fn new(config: PortalConfig, sink: S) -> Self {
        let mut app = Self {
            state_manager: StateManager::starting_at(config.start_route),
            config,
            home_screen: HomeScreen::new(),
            login_screen: None,
            register_screen: RegisterScreen::new(),
            sink,
        };
        app.sync_mounts();
        app
    }

    pub fn config(&self) -> &PortalConfig {
        &self.config
    }

    pub fn current_route(&self) -> AppState {
        *self.state_manager.current_state()
    }

    pub fn should_quit(&self) -> bool {
        self.state_manager.should_quit()
    }

    /// The login screen, if it is currently mounted
    pub fn login_screen(&self) -> Option<&LoginScreen> {
        self.login_screen.as_ref()
    }

    pub fn login_screen_mut(&mut self) -> Option<&mut LoginScreen> {
        self.login_screen.as_mut()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Apply a navigation action and mount/unmount screens to match
    pub fn navigate(&mut self, action: NavigationAction) {
        let before = self.current_route();
        self.state_manager.handle_navigation(action);
        let after = self.current_route();

        if before != after {
            debug!(from = %before, to = %after, "Route changed");
        }
        self.sync_mounts();
    }

    fn sync_mounts(&mut self) {
        match (self.current_route(), self.login_screen.is_some()) {
            (AppState::Login, false) => self.login_screen = Some(LoginScreen::new()),
            (AppState::Login, true) => {}
            (_, true) => self.login_screen = None,
            (_, false) => {}
        }
    }

    /// Handle one key press
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        let global = StateManager::global_key_to_navigation(key);
        if global != NavigationAction::None {
            self.navigate(global);
            return;
        }

        match self.current_route() {
            AppState::Login => {
                let Some(screen) = self.login_screen.as_mut() else {
                    return;
                };
                if let LoginOutcome::Submitted(credentials) = screen.handle_key_event(key) {
                    info!(submits = screen.submit_count(), "Login form submitted");
                    self.sink.credentials_submitted(&credentials);
                }
            }
            AppState::Home | AppState::Register => {
                self.navigate(StateManager::key_to_navigation(key));
            }
        }
    }

    /// Render the whole shell
    pub fn render(&self, f: &mut Frame) {
        let size = f.size();

        if size.width < MIN_WIDTH || size.height < MIN_HEIGHT {
            self.render_too_small(f, size);
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Tab bar
                Constraint::Min(6),    // Screen body
                Constraint::Length(3), // Help text
            ])
            .split(size);

        self.render_tabs(f, chunks[0]);

        match self.current_route() {
            AppState::Home => self.home_screen.render(f, chunks[1]),
            AppState::Login => {
                if let Some(screen) = &self.login_screen {
                    screen.render(f, chunks[1]);
                }
            }
            AppState::Register => self.register_screen.render(f, chunks[1]),
        }

        self.render_help(f, chunks[2]);
    }

    fn render_tabs(&self, f: &mut Frame, area: Rect) {
        let titles: Vec<Line> = AppState::ALL
            .iter()
            .map(|route| Line::from(format!(" F{} {} ", route.index() + 1, route.title())))
            .collect();

        let tabs = Tabs::new(titles)
            .select(self.current_route().index())
            .style(Style::default().fg(Color::White))
            .highlight_style(
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan))
                    .title(SYSTEM_TITLE),
            );

        f.render_widget(tabs, area);
    }

    fn render_help(&self, f: &mut Frame, area: Rect) {
        let key_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);

        let spans = match self.current_route() {
            AppState::Login => vec![
                Span::styled("Tab", key_style),
                Span::raw(" Next field  "),
                Span::styled("Enter", key_style),
                Span::raw(" Login  "),
                Span::styled("Ctrl+T", key_style),
                Span::raw(" Show/Hide  "),
                Span::styled("Esc", key_style),
                Span::raw(" Back  "),
                Span::styled("Ctrl+C", key_style),
                Span::raw(" Quit"),
            ],
            AppState::Home | AppState::Register => vec![
                Span::styled("L", key_style),
                Span::raw(" Login  "),
                Span::styled("R", key_style),
                Span::raw(" Register  "),
                Span::styled("←→", key_style),
                Span::raw(" Switch  "),
                Span::styled("Esc", key_style),
                Span::raw(" Back  "),
                Span::styled("Q", key_style),
                Span::raw(" Quit"),
            ],
        };

        let help = Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            );

        f.render_widget(help, area);
    }

    fn render_too_small(&self, f: &mut Frame, area: Rect) {
        let notice = Paragraph::new(format!(
            "Terminal too small ({}x{}). Need at least {}x{}.",
            area.width, area.height, MIN_WIDTH, MIN_HEIGHT
        ))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

        f.render_widget(notice, area);
    }

    /// Run the main application loop until the user quits
    pub async fn run<B: Backend>(&mut self, tui: &mut Tui<B>) -> Result<()> {
        info!(
            route = %self.current_route(),
            tick_ms = tui.tick_rate().as_millis() as u64,
            "Shell started"
        );

        while !self.should_quit() {
            tui.draw(|f| self.render(f))?;
            if let Some(key) = tui.next_key()? {
                self.handle_key_event(key);
            }
            tokio::task::yield_now().await;
        }

        info!("Shell stopped");
        Ok(())
    }
}
