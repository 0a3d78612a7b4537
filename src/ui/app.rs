//! Main TUI application state and logic

use crate::catalog::{Algorithm, Catalog, Difficulty};
use crate::config;
use crate::patterns::{difficulty_stats, pattern_name, pattern_stats};
use crate::playback::{MonotonicTime, Player};
use crate::progress::ProgressTracker;
use crate::session::SessionStore;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;
use tracing::debug;

use super::panes::{
    render_catalog_pane, render_source_pane, render_stats_pane, render_status_bar,
    render_structures_pane, CatalogRenderData, SourceRenderData, SourceScrollState,
    StatsRenderData, StatusRenderData, StructuresRenderData,
};
use super::theme::DEFAULT_THEME;

/// Upper bound on how long the loop sleeps waiting for input
const IDLE_POLL: Duration = Duration::from_millis(100);

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Catalog,
    Source,
    Structures,
    Stats,
}

impl FocusedPane {
    /// Move focus to the next pane (clockwise: catalog -> source -> structures -> stats)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Catalog => FocusedPane::Source,
            FocusedPane::Source => FocusedPane::Structures,
            FocusedPane::Structures => FocusedPane::Stats,
            FocusedPane::Stats => FocusedPane::Catalog,
        }
    }

    /// Move focus to the previous pane (counter-clockwise)
    pub fn prev(self) -> Self {
        match self {
            FocusedPane::Catalog => FocusedPane::Stats,
            FocusedPane::Source => FocusedPane::Catalog,
            FocusedPane::Structures => FocusedPane::Source,
            FocusedPane::Stats => FocusedPane::Structures,
        }
    }
}

/// What keystrokes currently mean
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    /// Editing the JSON input of the selected algorithm
    EditInput,
    /// Typing a catalog search query
    Filter,
}

/// The main application state
pub struct App<'a> {
    catalog: &'a Catalog,
    pub session: SessionStore,
    pub progress: ProgressTracker,
    player: Player<MonotonicTime>,

    /// Currently focused pane
    pub focused_pane: FocusedPane,
    pub mode: InputMode,

    /// Catalog search query and difficulty restriction
    pub query: String,
    pub difficulty: Option<Difficulty>,
    /// Cursor row in the filtered catalog
    pub cursor: usize,

    /// Text being edited in [`InputMode::EditInput`]
    pub input_buffer: String,

    /// Per-pane scroll offsets
    catalog_scroll: usize,
    source_scroll: SourceScrollState,
    structures_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
    status_is_error: bool,
}

impl<'a> App<'a> {
    /// Create a new app around an already configured session
    pub fn new(catalog: &'a Catalog, session: SessionStore, progress: ProgressTracker) -> Self {
        let mut app = App {
            catalog,
            session,
            progress,
            player: Player::new(MonotonicTime::new()),
            focused_pane: FocusedPane::Catalog,
            mode: InputMode::Normal,
            query: String::new(),
            difficulty: None,
            cursor: 0,
            input_buffer: String::new(),
            catalog_scroll: 0,
            source_scroll: SourceScrollState::default(),
            structures_scroll: 0,
            should_quit: false,
            status_message: String::from("Ready! Pick an algorithm and press Enter"),
            status_is_error: false,
        };
        if let Some(id) = app.session.algorithm().map(|a| a.id) {
            app.cursor = app.entries().iter().position(|a| a.id == id).unwrap_or(0);
            app.focused_pane = FocusedPane::Source;
            app.status_message = String::from("Ready!");
        }
        app.player.sync(&mut app.session);
        app
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            let was_playing = self.session.is_playing();
            self.player.poll(&mut self.session);
            if was_playing && !self.session.is_playing() {
                self.set_status("Playback complete");
            }

            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Sleep until the next tick is due or input arrives
            let timeout = self
                .player
                .time_until_due()
                .map_or(IDLE_POLL, |due| due.min(IDLE_POLL));
            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                        self.player.sync(&mut self.session);
                    }
                }
            }
        }

        Ok(())
    }

    /// Catalog entries visible under the current query and difficulty
    pub fn entries(&self) -> Vec<&'a Algorithm> {
        let catalog = self.catalog;
        catalog.filter(&self.query, self.difficulty)
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let pane_area = main_chunks[0];
        let status_area = main_chunks[1];

        // Three columns: catalog + stats | source | structures
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(26),
                Constraint::Percentage(37),
                Constraint::Percentage(37),
            ])
            .split(pane_area);

        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(columns[0]);

        let entries = self.entries();
        render_catalog_pane(
            frame,
            left_rows[0],
            CatalogRenderData {
                entries: &entries,
                cursor: self.cursor,
                selected_id: self.session.algorithm().map(|a| a.id),
                progress: &self.progress,
                query: &self.query,
                difficulty: self.difficulty,
                editing_query: self.mode == InputMode::Filter,
            },
            self.focused_pane == FocusedPane::Catalog,
            &mut self.catalog_scroll,
        );

        let patterns = pattern_stats(self.catalog, |id| self.progress.is_solved(id));
        let difficulties = difficulty_stats(self.catalog, |id| self.progress.is_solved(id));
        render_stats_pane(
            frame,
            left_rows[1],
            StatsRenderData {
                patterns: &patterns,
                difficulties: &difficulties,
                current_pattern: self.session.algorithm().map(pattern_name),
            },
            self.focused_pane == FocusedPane::Stats,
        );

        render_source_pane(
            frame,
            columns[1],
            SourceRenderData {
                source: self.session.source().map(|s| s.text),
                language: self.session.language(),
                current_line: self.session.code_line(),
            },
            self.focused_pane == FocusedPane::Source,
            &mut self.source_scroll,
        );

        render_structures_pane(
            frame,
            columns[2],
            StructuresRenderData {
                step: self.session.current_step(),
                index: self.session.index(),
                total: self.session.len(),
                error: self.session.last_error().map(|e| e.to_string()),
            },
            self.focused_pane == FocusedPane::Structures,
            &mut self.structures_scroll,
        );

        if self.mode == InputMode::EditInput {
            self.render_input_popup(frame, pane_area);
        }

        render_status_bar(
            frame,
            status_area,
            StatusRenderData {
                message: &self.status_message,
                index: self.session.index(),
                total: self.session.len(),
                speed: self.session.speed(),
                language: self.session.language().label(),
                is_playing: self.session.is_playing(),
                is_at_start: self.session.is_at_start(),
                is_at_end: self.session.is_at_end(),
                is_error: self.status_is_error,
                is_editing: self.mode != InputMode::Normal,
            },
        );
    }

    fn render_input_popup(&self, frame: &mut Frame, area: Rect) {
        let width = area.width.saturating_sub(8).max(10);
        let popup = Rect {
            x: area.x + (area.width.saturating_sub(width)) / 2,
            y: area.y + area.height.saturating_sub(3) / 2,
            width: width.min(area.width),
            height: 3.min(area.height),
        };

        let title = match self.session.algorithm() {
            Some(algorithm) => format!(" Input for {} (JSON) ", algorithm.name),
            None => " Input (JSON) ".to_string(),
        };
        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(DEFAULT_THEME.secondary));

        // Show the tail of long inputs so the cursor stays visible
        let visible = popup.width.saturating_sub(3) as usize;
        let skip = self.input_buffer.chars().count().saturating_sub(visible);
        let shown: String = self.input_buffer.chars().skip(skip).collect();

        let line = Line::from(vec![
            Span::styled(shown, Style::default().fg(DEFAULT_THEME.fg)),
            Span::styled("▏", Style::default().fg(DEFAULT_THEME.secondary)),
        ]);

        frame.render_widget(Clear, popup);
        frame.render_widget(Paragraph::new(line).block(block), popup);
    }

    fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.status_is_error = false;
    }

    fn set_error(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.status_is_error = true;
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match self.mode {
            InputMode::Normal => self.handle_normal_key(key),
            InputMode::EditInput => self.handle_edit_key(key),
            InputMode::Filter => self.handle_filter_key(key),
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                let n = c as usize - '0' as usize;
                let stepped = self.session.navigator().step_forward_by(n);
                self.set_status(format!("Stepped forward {} step(s)", stepped));
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::BackTab => {
                self.focused_pane = self.focused_pane.prev();
            }
            KeyCode::Left => self.step_backward(),
            KeyCode::Right => self.step_forward(),
            KeyCode::Up => self.scroll_up(),
            KeyCode::Down => self.scroll_down(),
            KeyCode::Char(' ') => self.toggle_play(),
            KeyCode::Enter => {
                if self.focused_pane == FocusedPane::Catalog {
                    self.select_under_cursor();
                } else {
                    self.jump_to_end();
                }
            }
            KeyCode::End | KeyCode::Char('e') => self.jump_to_end(),
            KeyCode::Backspace | KeyCode::Home | KeyCode::Char('r') => {
                self.session.navigator().reset();
                self.set_status("Jumped to start");
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.change_speed(config::faster(self.session.speed()));
            }
            KeyCode::Char('-') | KeyCode::Char('_') => {
                self.change_speed(config::slower(self.session.speed()));
            }
            KeyCode::Char('l') | KeyCode::Char('L') => {
                let language = self.session.language().next();
                self.session.set_language(language);
                self.source_scroll = SourceScrollState::default();
                self.set_status(format!("Showing {} source", language));
            }
            KeyCode::Char('x') => self.toggle_solved(),
            KeyCode::Char('i') => {
                match self.session.input() {
                    Some(input) => {
                        self.input_buffer = input.to_string();
                        self.mode = InputMode::EditInput;
                        self.set_status("Editing input");
                    }
                    None => self.set_status("Select an algorithm first"),
                }
            }
            KeyCode::Char('/') => {
                self.mode = InputMode::Filter;
                self.focused_pane = FocusedPane::Catalog;
                self.set_status("Filtering catalog");
            }
            KeyCode::Char('d') => {
                self.difficulty = match self.difficulty {
                    None => Some(Difficulty::Easy),
                    Some(Difficulty::Easy) => Some(Difficulty::Medium),
                    Some(Difficulty::Medium) => Some(Difficulty::Hard),
                    Some(Difficulty::Hard) => None,
                };
                self.cursor = 0;
                self.catalog_scroll = 0;
                match self.difficulty {
                    Some(d) => self.set_status(format!("Showing {} only", d)),
                    None => self.set_status("Showing all difficulties"),
                }
            }
            KeyCode::Esc => {
                if !self.query.is_empty() || self.difficulty.is_some() {
                    self.query.clear();
                    self.difficulty = None;
                    self.cursor = 0;
                    self.set_status("Filter cleared");
                }
            }
            _ => {}
        }
    }

    fn handle_edit_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.mode = InputMode::Normal;
                self.input_buffer.clear();
                self.set_status("Input unchanged");
            }
            KeyCode::Enter => {
                self.mode = InputMode::Normal;
                let text = std::mem::take(&mut self.input_buffer);
                match self.session.set_input_text(&text) {
                    Ok(()) => {
                        self.structures_scroll = 0;
                        self.set_status(format!("Input applied, {} steps", self.session.len()));
                    }
                    Err(e) => self.set_error(format!("Input rejected: {}", e)),
                }
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Char(c) => {
                self.input_buffer.push(c);
            }
            _ => {}
        }
    }

    fn handle_filter_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.mode = InputMode::Normal;
                self.query.clear();
                self.cursor = 0;
                self.set_status("Filter cleared");
            }
            KeyCode::Enter => {
                self.mode = InputMode::Normal;
                let count = self.entries().len();
                self.set_status(format!("{} match(es)", count));
            }
            KeyCode::Backspace => {
                self.query.pop();
                self.cursor = 0;
            }
            KeyCode::Char(c) => {
                self.query.push(c);
                self.cursor = 0;
            }
            _ => {}
        }
    }

    fn select_under_cursor(&mut self) {
        let Some(algorithm) = self.entries().get(self.cursor).copied() else {
            self.set_status("Nothing to select");
            return;
        };
        debug!(id = algorithm.id, "selecting from catalog");
        match self.session.select_algorithm(Some(algorithm)) {
            Ok(()) => {
                self.source_scroll = SourceScrollState::default();
                self.structures_scroll = 0;
                self.focused_pane = FocusedPane::Source;
                let category = self
                    .catalog
                    .category_name(algorithm.category)
                    .unwrap_or(algorithm.category);
                self.set_status(format!(
                    "{} · {} · {} · {} steps",
                    category,
                    algorithm.name,
                    pattern_name(algorithm),
                    self.session.len()
                ));
            }
            Err(e) => self.set_error(format!("Cannot load {}: {}", algorithm.name, e)),
        }
    }

    fn toggle_play(&mut self) {
        if self.session.is_empty() {
            self.set_status("Select an algorithm first");
            return;
        }
        if !self.session.is_playing() && self.session.is_at_end() {
            self.set_status("At the last step, press ⌫ to restart");
            return;
        }
        if self.session.navigator().toggle_play() {
            self.set_status("Playing...");
        } else {
            self.set_status("Paused");
        }
    }

    fn change_speed(&mut self, speed: f64) {
        match self.session.set_speed(speed) {
            Ok(()) => self.set_status(format!("Speed {}x", speed)),
            Err(e) => self.set_error(e.to_string()),
        }
    }

    fn toggle_solved(&mut self) {
        let target = if self.focused_pane == FocusedPane::Catalog {
            self.entries().get(self.cursor).copied()
        } else {
            self.session.algorithm().and_then(|a| self.catalog.find(a.id))
        };
        let Some(algorithm) = target else {
            self.set_status("Nothing to mark");
            return;
        };
        if self.progress.toggle(algorithm.id) {
            self.set_status(format!("Marked {} as solved", algorithm.name));
        } else {
            self.set_status(format!("Unmarked {}", algorithm.name));
        }
    }

    fn jump_to_end(&mut self) {
        if self.session.is_empty() {
            return;
        }
        self.session.navigator().jump_to_end();
        self.set_status("Jumped to end");
    }

    /// Step forward in the trace
    fn step_forward(&mut self) {
        let mut nav = self.session.navigator();
        nav.set_playing(false);
        if nav.advance() {
            self.set_status("Stepped forward");
        } else {
            self.set_status("Already at the last step");
        }
    }

    /// Step backward in the trace
    fn step_backward(&mut self) {
        let mut nav = self.session.navigator();
        nav.set_playing(false);
        if nav.retreat() {
            self.set_status("Stepped backward");
        } else {
            self.set_status("Already at the first step");
        }
    }

    fn scroll_up(&mut self) {
        match self.focused_pane {
            FocusedPane::Catalog => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            FocusedPane::Source => {
                // Scrolling up makes the current line move down visually
                if let Some(row) = self.source_scroll.target_line_row {
                    self.source_scroll.target_line_row = Some(row.saturating_add(1));
                }
            }
            FocusedPane::Structures => {
                self.structures_scroll = self.structures_scroll.saturating_sub(1);
            }
            FocusedPane::Stats => {}
        }
    }

    fn scroll_down(&mut self) {
        match self.focused_pane {
            FocusedPane::Catalog => {
                let len = self.entries().len();
                if self.cursor + 1 < len {
                    self.cursor += 1;
                }
            }
            FocusedPane::Source => {
                // Scrolling down makes the current line move up visually
                if let Some(row) = self.source_scroll.target_line_row {
                    self.source_scroll.target_line_row = Some(row.saturating_sub(1));
                }
            }
            FocusedPane::Structures => {
                self.structures_scroll = self.structures_scroll.saturating_add(1);
            }
            FocusedPane::Stats => {}
        }
    }
}
