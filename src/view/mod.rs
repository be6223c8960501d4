//! TUI rendering and terminal management (impure shell)
//!
//! The event loop owns every side effect: reading the keyboard, spawning
//! fetch threads, draining their result channel, and polling the search
//! debouncer. All decisions about what to fetch come back from the pure
//! state layer as [`FetchSpec`] values.

mod detail;
mod help;
mod pagination;
mod status;
mod styles;
mod table;
mod toolbar;

pub use help::render_help_overlay;
pub use styles::{ColorConfig, UiStyles};
pub use table::truncate_to_width;

use crate::api::{spawn_detail_fetch, spawn_list_fetch, ApiEvent, IncidentApi};
use crate::config::KeyBindings;
use crate::query::FetchSpec;
use crate::state::{AppState, Focus, Route};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::{backend::CrosstermBackend, Frame, Terminal};
use std::io::{self, Stdout};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    api: Arc<dyn IncidentApi>,
    tx: Sender<ApiEvent>,
    rx: Receiver<ApiEvent>,
    key_bindings: KeyBindings,
    styles: UiStyles,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen
    pub fn new(
        app_state: AppState,
        api: Arc<dyn IncidentApi>,
        color_config: ColorConfig,
    ) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(Self::from_terminal(terminal, app_state, api, color_config))
    }

    /// Run the main event loop, restoring the terminal on exit.
    ///
    /// Returns when the user quits (q or Ctrl+C)
    pub fn run(&mut self) -> Result<(), TuiError> {
        let result = self.event_loop();
        let restore = restore_terminal();
        result.and(restore)
    }

    fn event_loop(&mut self) -> Result<(), TuiError> {
        // Tick interval; bounds debounce latency when no input arrives.
        const TIMER_INTERVAL: Duration = Duration::from_millis(50);

        // Issue the initial fetch before the first render.
        let spec = self.app_state.query.reload();
        self.spawn_list(spec);
        self.draw()?;

        loop {
            if event::poll(TIMER_INTERVAL)? {
                if let Event::Key(key) = event::read()? {
                    self.handle_key(key);
                }
            }

            self.drain_api_events();
            if let Some(spec) = self.app_state.query.poll_search(Instant::now()) {
                self.spawn_list(spec);
            }

            if self.app_state.should_quit {
                return Ok(());
            }
            self.draw()?;
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Create an application around an existing terminal.
    ///
    /// Used directly by tests with a `TestBackend` terminal.
    pub fn from_terminal(
        terminal: Terminal<B>,
        app_state: AppState,
        api: Arc<dyn IncidentApi>,
        color_config: ColorConfig,
    ) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            terminal,
            app_state,
            api,
            tx,
            rx,
            key_bindings: KeyBindings::default(),
            styles: UiStyles::new(color_config),
        }
    }

    /// Access the application state.
    pub fn state(&self) -> &AppState {
        &self.app_state
    }

    /// Mutable access to the application state.
    pub fn state_mut(&mut self) -> &mut AppState {
        &mut self.app_state
    }

    fn spawn_list(&self, spec: FetchSpec) {
        debug!(seq = spec.seq, "spawning list fetch");
        spawn_list_fetch(Arc::clone(&self.api), spec, self.tx.clone());
    }

    /// Apply every fetch result that has arrived since the last tick.
    fn drain_api_events(&mut self) {
        while let Ok(event) = self.rx.try_recv() {
            match event {
                ApiEvent::List { seq, outcome } => {
                    self.app_state.apply_list_outcome(seq, outcome);
                }
                ApiEvent::Detail { seq, outcome } => {
                    self.app_state.apply_detail_outcome(seq, outcome);
                }
            }
        }
    }

    /// Handle a single keyboard event.
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Ctrl+C always quits, even while a modal or search box is active.
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.app_state.should_quit = true;
            return;
        }

        // The help overlay captures keys until dismissed.
        if self.app_state.help_visible {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
                self.app_state.help_visible = false;
            }
            return;
        }

        if self.app_state.route == Route::Detail {
            match key.code {
                KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter => {
                    self.app_state.close_detail();
                }
                KeyCode::Char('?') => {
                    self.app_state.help_visible = true;
                }
                _ => {}
            }
            return;
        }

        // Character input while the search box has focus bypasses the
        // key binding table.
        if self.app_state.focus == Focus::Search {
            match key.code {
                KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.app_state.search_input(ch, Instant::now());
                    return;
                }
                KeyCode::Backspace => {
                    self.app_state.search_backspace(Instant::now());
                    return;
                }
                KeyCode::Enter => {
                    // Submit immediately instead of waiting out the debounce.
                    if let Some(spec) = self.app_state.query.flush_search() {
                        self.spawn_list(spec);
                    }
                    self.app_state.leave_search();
                    return;
                }
                KeyCode::Esc => {
                    self.app_state.leave_search();
                    return;
                }
                _ => return,
            }
        }

        let Some(action) = self.key_bindings.get(key) else {
            return;
        };

        if action == crate::model::KeyAction::OpenDetail {
            if let Some(fetch) = self.app_state.open_detail() {
                debug!(seq = fetch.seq, id = %fetch.id, "spawning detail fetch");
                spawn_detail_fetch(Arc::clone(&self.api), fetch.id, fetch.seq, self.tx.clone());
            }
            return;
        }

        if let Some(spec) = self.app_state.apply_action(action) {
            self.spawn_list(spec);
        }
    }

    /// Draw the current state to the terminal.
    pub fn draw(&mut self) -> Result<(), TuiError> {
        let app_state = &self.app_state;
        let styles = self.styles;
        self.terminal.draw(|frame| render_app(frame, app_state, styles))?;
        Ok(())
    }
}

/// Render the whole application to a frame.
pub fn render_app(frame: &mut Frame, app_state: &AppState, styles: UiStyles) {
    match app_state.route {
        Route::Detail => {
            if let Some(detail_state) = &app_state.detail {
                detail::render_detail(frame, frame.area(), detail_state, styles);
            }
        }
        Route::List => render_list_screen(frame, app_state, styles),
    }

    if app_state.help_visible {
        render_help_overlay(frame, styles);
    }
}

fn render_list_screen(frame: &mut Frame, app_state: &AppState, styles: UiStyles) {
    let snapshot = app_state.query.snapshot();
    let banner_height = if snapshot.error.is_some() { 1 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(banner_height),
            Constraint::Min(4),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(frame.area());

    toolbar::render_toolbar(frame, chunks[0], &snapshot, app_state.focus, styles);
    status::render_error_banner(frame, chunks[1], &snapshot, styles);
    table::render_table(frame, chunks[2], &snapshot, app_state.selected_row, styles);
    pagination::render_pagination(frame, chunks[3], &snapshot, styles);
    status::render_status_line(frame, chunks[4], &snapshot, styles);
}

/// Restore terminal to normal state
///
/// Disables raw mode and leaves the alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}
