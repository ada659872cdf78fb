//! Main TUI application state and logic

use super::panes::{
    self, code::CODE_LISTING, CallStackScrollState, CancelAction, MovesScrollState, SetupDialog,
    StatusRenderData, TowersRenderData,
};
use super::theme::Theme;
use crate::replay::TickOutcome;
use crate::session::Session;
use crate::settings::{Settings, SettingsStore, ThemeKind};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Which scrollable pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Moves,
    CallStack,
}

impl FocusedPane {
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Moves => FocusedPane::CallStack,
            FocusedPane::CallStack => FocusedPane::Moves,
        }
    }
}

/// The main application state
pub struct App {
    /// The puzzle being replayed
    pub session: Session,

    /// Where the theme preference is persisted
    pub store: SettingsStore,

    /// Active color scheme
    pub theme_kind: ThemeKind,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Per-pane scroll state
    pub moves_scroll: MovesScrollState,
    pub call_stack_scroll: CallStackScrollState,

    /// Open setup dialog, if any
    pub dialog: Option<SetupDialog>,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// When the replay was last ticked
    pub last_tick: Instant,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    /// Create a new app replaying `session`
    pub fn new(session: Session, store: SettingsStore, theme_kind: ThemeKind) -> Self {
        App {
            session,
            store,
            theme_kind,
            focused_pane: FocusedPane::Moves,
            moves_scroll: MovesScrollState::default(),
            call_stack_scroll: CallStackScrollState::default(),
            dialog: None,
            should_quit: false,
            status_message: String::from("Ready!"),
            last_tick: Instant::now(),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or(Instant::now()),
        }
    }

    pub fn theme(&self) -> &'static Theme {
        Theme::for_kind(self.theme_kind)
    }

    /// Open the disk count dialog, preselecting the current game's size
    pub fn open_setup_dialog(&mut self, on_cancel: CancelAction) {
        self.session.replay_mut().set_playing(false);
        self.dialog = Some(SetupDialog::new(self.session.disks().get(), on_cancel));
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        self.last_tick = Instant::now();
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Handle auto-play mode
            let now = Instant::now();
            let elapsed = now.duration_since(self.last_tick);
            self.last_tick = now;
            self.tick(elapsed);

            // Use poll with timeout to allow auto-play to work
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Feed elapsed wall-clock time to auto-play
    pub fn tick(&mut self, elapsed: Duration) {
        let elapsed_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);
        match self.session.replay_mut().tick(elapsed_ms) {
            TickOutcome::Stepped => {
                self.status_message = "Playing...".to_string();
                self.moves_scroll.follow_cursor = true;
            }
            TickOutcome::Finished => {
                self.status_message = "Playback complete".to_string();
            }
            TickOutcome::Idle | TickOutcome::Waiting => {}
        }
    }

    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let theme = self.theme();
        let size = frame.area();

        frame.render_widget(
            Block::default().style(Style::default().bg(theme.bg).fg(theme.fg)),
            size,
        );

        // Panes in 2 columns, plus status bar at bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let pane_area = main_chunks[0];
        let status_area = main_chunks[1];

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(pane_area);

        // Left column: Towers (top) | Moves (bottom)
        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(columns[0]);

        // Right column: Procedure (top) | Call stack (bottom)
        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(CODE_LISTING.len() as u16 + 2),
                Constraint::Min(0),
            ])
            .split(columns[1]);

        let replay = self.session.replay();

        panes::render_towers_pane(
            frame,
            left_rows[0],
            TowersRenderData {
                towers: replay.towers(),
                disks: replay.disks(),
                last_move: replay.last_move(),
            },
            theme,
        );

        panes::render_moves_pane(
            frame,
            left_rows[1],
            replay.solution(),
            replay.cursor(),
            self.focused_pane == FocusedPane::Moves,
            &mut self.moves_scroll,
            theme,
        );

        panes::render_code_pane(frame, right_rows[0], replay.next_move().is_some(), theme);

        panes::render_call_stack_pane(
            frame,
            right_rows[1],
            &self.session.current_trace_lines(),
            self.focused_pane == FocusedPane::CallStack,
            &mut self.call_stack_scroll,
            theme,
        );

        panes::render_status_bar(
            frame,
            status_area,
            StatusRenderData {
                message: &self.status_message,
                cursor: replay.cursor(),
                total_moves: replay.total_moves(),
                interval_ms: replay.interval_ms(),
                is_playing: replay.is_playing(),
            },
            theme,
        );

        if let Some(dialog) = &self.dialog {
            panes::render_setup_dialog(frame, size, dialog, theme);
        }
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if self.dialog.is_some() {
            self.handle_dialog_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                let n = c.to_digit(10).unwrap_or(1) as usize;
                let replay = self.session.replay_mut();
                replay.set_playing(false);
                let stepped = replay.step_forward_by(n);
                self.status_message = format!("Stepped forward {} move(s)", stepped);
                self.moves_scroll.follow_cursor = true;
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::Left | KeyCode::Char('h') => {
                self.session.replay_mut().set_playing(false);
                self.step_backward();
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.session.replay_mut().set_playing(false);
                self.step_forward();
            }
            KeyCode::Up => match self.focused_pane {
                FocusedPane::Moves => {
                    self.moves_scroll.follow_cursor = false;
                    self.moves_scroll.offset = self.moves_scroll.offset.saturating_sub(1);
                }
                FocusedPane::CallStack => {
                    self.call_stack_scroll.offset = self.call_stack_scroll.offset.saturating_sub(1);
                }
            },
            KeyCode::Down => match self.focused_pane {
                FocusedPane::Moves => {
                    self.moves_scroll.follow_cursor = false;
                    self.moves_scroll.offset = self.moves_scroll.offset.saturating_add(1);
                }
                FocusedPane::CallStack => {
                    self.call_stack_scroll.offset = self.call_stack_scroll.offset.saturating_add(1);
                }
            },
            KeyCode::Char(' ') => {
                // Toggle auto-play mode (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    if self.session.replay_mut().toggle_playing() {
                        self.status_message = "Playing...".to_string();
                    } else {
                        self.status_message = "Paused".to_string();
                    }
                }
            }
            KeyCode::Enter => {
                let applied = self.session.replay_mut().jump_to_end();
                self.status_message = format!("Jumped to end ({} move(s) applied)", applied);
                self.moves_scroll.follow_cursor = true;
            }
            KeyCode::Backspace | KeyCode::Char('r') | KeyCode::Char('R') => {
                self.session.replay_mut().reset();
                self.status_message = "Reset to start".to_string();
                self.moves_scroll.follow_cursor = true;
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.session.replay_mut().faster();
                self.status_message =
                    format!("Interval {}ms", self.session.replay().interval_ms());
            }
            KeyCode::Char('-') | KeyCode::Char('_') => {
                self.session.replay_mut().slower();
                self.status_message =
                    format!("Interval {}ms", self.session.replay().interval_ms());
            }
            KeyCode::Char('t') | KeyCode::Char('T') => {
                self.toggle_theme();
            }
            KeyCode::Char('n') | KeyCode::Char('N') => {
                self.open_setup_dialog(CancelAction::Close);
            }
            _ => {}
        }
    }

    fn handle_dialog_key(&mut self, key: KeyEvent) {
        let Some(dialog) = self.dialog.as_mut() else {
            return;
        };

        match key.code {
            KeyCode::Char(c @ '0'..='9') => {
                let n = c.to_digit(10).unwrap_or(0) as u8;
                dialog.select(n);
            }
            KeyCode::Left | KeyCode::Down => dialog.decrement(),
            KeyCode::Right | KeyCode::Up => dialog.increment(),
            KeyCode::Enter => {
                let disks = dialog.selected();
                self.dialog = None;
                self.start_new_game(disks);
            }
            KeyCode::Esc | KeyCode::Char('q') => match dialog.on_cancel() {
                CancelAction::Close => {
                    self.dialog = None;
                    self.status_message = "New game cancelled".to_string();
                }
                CancelAction::Quit => {
                    self.should_quit = true;
                }
            },
            _ => {}
        }
    }

    /// Replace the current session with a fresh one for `disks`
    pub fn start_new_game(&mut self, disks: u8) {
        let interval_ms = self.session.replay().interval_ms();
        match Session::with_interval(disks, interval_ms) {
            Ok(session) => {
                self.session = session;
                self.moves_scroll = MovesScrollState::default();
                self.call_stack_scroll = CallStackScrollState::default();
                self.status_message = format!(
                    "New game: {} disks, {} moves",
                    disks,
                    self.session.replay().total_moves()
                );
            }
            Err(e) => {
                warn!(error = %e, "rejected new game");
                self.status_message = format!("Error: {}", e);
            }
        }
    }

    /// Switch between light and dark and persist the choice
    pub fn toggle_theme(&mut self) {
        self.theme_kind = self.theme_kind.toggle();
        info!(theme = %self.theme_kind, "theme changed");
        match self.store.save(&Settings {
            theme: self.theme_kind,
        }) {
            Ok(()) => {
                self.status_message = format!("Theme: {}", self.theme_kind);
            }
            Err(e) => {
                warn!(error = %e, "failed to save theme preference");
                self.status_message = format!("Theme: {} (not saved)", self.theme_kind);
            }
        }
    }

    /// Step forward in the solution
    fn step_forward(&mut self) {
        if self.session.replay_mut().step_forward() {
            self.status_message = "Stepped forward".to_string();
        } else {
            debug!("step forward at end");
            self.status_message = "Cannot step forward: puzzle solved".to_string();
        }
        self.moves_scroll.follow_cursor = true;
    }

    /// Step backward in the solution
    fn step_backward(&mut self) {
        if self.session.replay_mut().step_backward() {
            self.status_message = "Stepped backward".to_string();
        } else {
            debug!("step backward at start");
            self.status_message = "Cannot step backward: already at start".to_string();
        }
        self.moves_scroll.follow_cursor = true;
    }
}
