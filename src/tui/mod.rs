// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Waypoint-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Waypoint and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Terminal UI.
//!
//! Source and destination pickers, a floor pane of node chips, the route strip, and an output
//! area. All session changes go through the shared [`Navigator`], so commands issued over MCP show
//! up here on the next poll.

use std::{error::Error, io, sync::Arc, time::Duration};

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};
use tokio::sync::Mutex;

use crate::model::{NodeId, NodeKind};
use crate::query::RouteError;
use crate::render::{describe_progress, render_route_annotated, AnnotatedRoute};
use crate::session::{Navigator, SessionSnapshot, StepError};

mod theme;

use theme::TuiTheme;

/// Runs the interactive terminal UI until the user quits.
///
/// Must be called off the async runtime (e.g. from `spawn_blocking`): the navigator lock is taken
/// with `blocking_lock`.
pub fn run(navigator: Arc<Mutex<Navigator>>) -> Result<(), Box<dyn Error>> {
    let (theme, theme_error) = match TuiTheme::from_env() {
        Ok(theme) => (theme, None),
        Err(err) => (TuiTheme::default(), Some(err)),
    };

    let mut terminal = TerminalSession::new()?;
    let mut app = App::new(navigator, theme);
    if let Some(err) = theme_error {
        tracing::warn!(error = %err, "palette override ignored");
        app.set_output(vec![OutputLine::error(err.to_string())]);
    }

    while !app.should_quit {
        app.sync_from_navigator();
        terminal.draw(|frame| draw(frame, &mut app))?;

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                _ => {}
            }
        }
    }

    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Source,
    Destination,
}

impl Focus {
    fn toggled(self) -> Self {
        match self {
            Self::Source => Self::Destination,
            Self::Destination => Self::Source,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct OutputLine {
    text: String,
    is_error: bool,
}

impl OutputLine {
    fn info(text: impl Into<String>) -> Self {
        Self { text: text.into(), is_error: false }
    }

    fn error(text: impl Into<String>) -> Self {
        Self { text: text.into(), is_error: true }
    }
}

struct App {
    navigator: Arc<Mutex<Navigator>>,
    floor_name: String,
    nodes: Vec<NodeId>,
    kinds: Vec<NodeKind>,
    source_state: ListState,
    destination_state: ListState,
    focus: Focus,
    snapshot: SessionSnapshot,
    seen_rev: u64,
    output: Vec<OutputLine>,
    theme: TuiTheme,
    should_quit: bool,
}

impl App {
    fn new(navigator: Arc<Mutex<Navigator>>, theme: TuiTheme) -> Self {
        let (floor_name, nodes, kinds, snapshot, seen_rev) = {
            let nav = navigator.blocking_lock();
            let graph = nav.graph();
            let nodes = graph.all_nodes();
            let kinds = nodes.iter().map(NodeKind::of).collect::<Vec<_>>();
            (graph.name().to_owned(), nodes, kinds, nav.snapshot(), nav.rev())
        };

        let initial = if nodes.is_empty() { None } else { Some(0) };
        let mut source_state = ListState::default();
        source_state.select(initial);
        let mut destination_state = ListState::default();
        destination_state.select(initial);

        Self {
            navigator,
            floor_name,
            nodes,
            kinds,
            source_state,
            destination_state,
            focus: Focus::Source,
            snapshot,
            seen_rev,
            output: Vec::new(),
            theme,
            should_quit: false,
        }
    }

    /// Picks up session changes made by another surface since the last poll.
    fn sync_from_navigator(&mut self) {
        let nav = self.navigator.blocking_lock();
        if nav.rev() == self.seen_rev {
            return;
        }
        self.seen_rev = nav.rev();
        self.snapshot = nav.snapshot();
        drop(nav);
        self.set_output(vec![OutputLine::info(describe_progress(&self.snapshot))]);
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if self.handle_key_code(key.code) {
            self.should_quit = true;
        }
    }

    /// Returns `true` when the key asks to quit.
    fn handle_key_code(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Left | KeyCode::Right => {
                self.focus = self.focus.toggled();
            }
            KeyCode::Up | KeyCode::Char('k') => self.move_selection(-1),
            KeyCode::Down | KeyCode::Char('j') => self.move_selection(1),
            KeyCode::Home | KeyCode::Char('g') => self.select_edge(false),
            KeyCode::End | KeyCode::Char('G') => self.select_edge(true),
            KeyCode::Enter | KeyCode::Char('s') => self.start_tracking(),
            KeyCode::Char(' ') | KeyCode::Char('n') => self.next_step(),
            KeyCode::Char('r') => self.reset(),
            _ => {}
        }
        false
    }

    fn focused_state(&mut self) -> &mut ListState {
        match self.focus {
            Focus::Source => &mut self.source_state,
            Focus::Destination => &mut self.destination_state,
        }
    }

    fn move_selection(&mut self, delta: isize) {
        let Some(last) = self.nodes.len().checked_sub(1) else {
            return;
        };
        let state = self.focused_state();
        let current = state.selected().unwrap_or(0);
        let next = current.saturating_add_signed(delta).min(last);
        state.select(Some(next));
    }

    fn select_edge(&mut self, end: bool) {
        let Some(last) = self.nodes.len().checked_sub(1) else {
            return;
        };
        self.focused_state().select(Some(if end { last } else { 0 }));
    }

    fn selected_node(&self, focus: Focus) -> Option<&NodeId> {
        let state = match focus {
            Focus::Source => &self.source_state,
            Focus::Destination => &self.destination_state,
        };
        state.selected().and_then(|idx| self.nodes.get(idx))
    }

    fn next_step_enabled(&self) -> bool {
        self.snapshot.route.is_some()
    }

    fn start_tracking(&mut self) {
        let (Some(source), Some(destination)) =
            (self.selected_node(Focus::Source), self.selected_node(Focus::Destination))
        else {
            self.set_output(vec![OutputLine::error("Floor plan has no nodes.")]);
            return;
        };
        let (source, destination) = (source.clone(), destination.clone());

        let mut nav = self.navigator.blocking_lock();
        let result = nav.start(&source, &destination);
        self.seen_rev = nav.rev();
        self.snapshot = nav.snapshot();
        drop(nav);

        let output = match result {
            Ok(_) => OutputLine::info(format!("Tracking started from {source} to {destination}")),
            Err(RouteError::NoPath { .. }) => OutputLine::error("No path found!"),
            Err(err @ RouteError::UnknownNode { .. }) => OutputLine::error(err.to_string()),
        };
        self.set_output(vec![output]);
    }

    fn next_step(&mut self) {
        let mut nav = self.navigator.blocking_lock();
        let result = nav.advance();
        self.seen_rev = nav.rev();
        self.snapshot = nav.snapshot();
        drop(nav);

        let output = match result {
            Ok(report) => vec![
                OutputLine::info(format!("Step {}/{}", report.step, report.total_steps)),
                OutputLine::info(format!("Moved to: {}", report.node_id)),
            ],
            Err(StepError::AlreadyCompleted) => {
                let path = self.snapshot.route.as_ref().map(ToString::to_string).unwrap_or_default();
                vec![
                    OutputLine::info("Reached destination."),
                    OutputLine::info(format!("Full path: {path}")),
                ]
            }
            Err(StepError::NotStarted) => vec![OutputLine::error("Start tracking first.")],
        };
        self.set_output(output);
    }

    fn reset(&mut self) {
        let mut nav = self.navigator.blocking_lock();
        self.snapshot = nav.reset();
        self.seen_rev = nav.rev();
        drop(nav);
        self.set_output(vec![OutputLine::info("Session reset.")]);
    }

    fn set_output(&mut self, lines: Vec<OutputLine>) {
        self.output = lines;
    }
}

include!("chrome.rs");

struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).map_err(|err| {
            teardown_terminal();
            err
        })?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).map_err(|err| {
            teardown_terminal();
            err
        })?;
        terminal.clear().map_err(|err| {
            teardown_terminal();
            err
        })?;

        Ok(Self { terminal })
    }

    fn draw(&mut self, draw_fn: impl FnOnce(&mut Frame<'_>)) -> io::Result<()> {
        self.terminal.draw(draw_fn)?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        teardown_terminal();
    }
}

fn teardown_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = execute!(stdout, LeaveAlternateScreen);
}
