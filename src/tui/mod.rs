// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Terminal UI.
//!
//! The interactive shell (ratatui + crossterm) around the sorting engine. The foreground loop
//! here handles input and drawing only; the active algorithm runs on the session's worker
//! thread and publishes checkpoints through a [`ChannelRenderer`], so a "stop" or "generate"
//! keypress is always serviceable mid-run.

use std::{
    error::Error,
    io,
    sync::mpsc,
    time::{Duration, Instant},
};

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
};

use crate::engine::{Highlight, StepRenderer};
use crate::model::{Algorithm, RunParams, SpeedTier, MAX_VALUE};
use crate::session::{SessionState, SortSession};
use crate::sorts::Outcome;

mod theme;

const EVENT_POLL_INTERVAL: Duration = Duration::from_millis(50);
const TOAST_DURATION: Duration = Duration::from_secs(2);
/// Bar value labels are drawn only for arrays at most this long (the reference caps at 60).
const VALUE_LABEL_MAX_LEN: usize = 60;
const SIZE_INPUT_MAX_DIGITS: usize = 3;
const FOOTER_BRAND: &str = "🅿 🆁 🅾 🆃 🅴 🆄 🆂 ";

/// Startup presets taken from the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StartOptions {
    pub size: Option<usize>,
    pub algorithm: Option<Algorithm>,
    pub speed: Option<SpeedTier>,
}

/// One checkpoint as published by the worker for the foreground draw loop.
#[derive(Debug, Clone)]
pub struct FrameSnapshot {
    bars: Vec<u32>,
    highlights: Vec<Highlight>,
}

/// Worker-side renderer: publishes each checkpoint to the TUI loop, then sleeps for pacing.
///
/// Dropped receivers are tolerated (the shell may quit mid-run); frames are simply discarded
/// and the run keeps unwinding toward its next cancellation check.
pub struct ChannelRenderer {
    frames: mpsc::Sender<FrameSnapshot>,
}

impl StepRenderer for ChannelRenderer {
    fn render(&mut self, snapshot: &[u32], highlights: &[Highlight]) {
        let _ = self.frames.send(FrameSnapshot {
            bars: snapshot.to_vec(),
            highlights: highlights.to_vec(),
        });
    }

    fn delay(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Runs the interactive terminal UI with default presets.
pub fn run() -> Result<(), Box<dyn Error>> {
    run_with_options(StartOptions::default())
}

pub fn run_with_options(options: StartOptions) -> Result<(), Box<dyn Error>> {
    let mut terminal = TerminalSession::new()?;
    let mut app = App::new(options);

    while !app.should_quit {
        app.drain_frames();
        app.poll_worker();
        terminal.draw(|frame| draw(frame, &mut app))?;

        if event::poll(EVENT_POLL_INTERVAL)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                _ => {}
            }
        }
    }

    app.session.request_stop();
    Ok(())
}

struct Toast {
    message: String,
    expires_at: Instant,
}

struct App {
    session: SortSession,
    algorithm: Algorithm,
    speed: SpeedTier,
    size_input: String,
    frames: Option<mpsc::Receiver<FrameSnapshot>>,
    latest_frame: Option<FrameSnapshot>,
    toast: Option<Toast>,
    should_quit: bool,
}

impl App {
    fn new(options: StartOptions) -> Self {
        let (session, _) = SortSession::new(options.size);
        let size_input = session.bars().len().to_string();
        Self {
            session,
            algorithm: options.algorithm.unwrap_or_default(),
            speed: options.speed.unwrap_or_default(),
            size_input,
            frames: None,
            latest_frame: None,
            toast: None,
            should_quit: false,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => {
                self.session.request_stop();
                self.should_quit = true;
            }
            KeyCode::Char('s') | KeyCode::Enter => self.start_sort(),
            KeyCode::Char('x') | KeyCode::Esc => self.stop_sort(),
            KeyCode::Char('g') | KeyCode::Char('n') => self.generate(),
            KeyCode::Char('a') | KeyCode::Tab => self.cycle_algorithm(),
            KeyCode::Char('v') => self.cycle_speed(),
            KeyCode::Char(ch) if ch.is_ascii_digit() => {
                if self.size_input.len() < SIZE_INPUT_MAX_DIGITS {
                    self.size_input.push(ch);
                }
            }
            KeyCode::Backspace => {
                self.size_input.pop();
            }
            _ => {}
        }
    }

    fn start_sort(&mut self) {
        if self.session.is_running() {
            self.set_toast("Run in flight — stop it first");
            return;
        }

        let (sender, receiver) = mpsc::channel();
        let renderer = ChannelRenderer { frames: sender };
        let params = RunParams::new(self.algorithm, self.speed);
        match self.session.start(params, renderer) {
            Ok(()) => {
                self.frames = Some(receiver);
                self.latest_frame = None;
            }
            Err(err) => self.set_toast(err.to_string()),
        }
    }

    fn stop_sort(&mut self) {
        if self.session.is_running() {
            self.session.request_stop();
            self.set_toast("Stop requested");
        } else {
            self.set_toast("No run in flight");
        }
    }

    fn generate(&mut self) {
        let requested = self.size_input.trim().parse::<usize>().ok();
        let used_fallback = self.session.generate(requested);

        // Rewrite the field to show the size actually used (clamp or fallback).
        self.size_input = self.session.bars().len().to_string();
        self.frames = None;
        self.latest_frame = None;

        if used_fallback {
            self.set_toast(format!("Size not numeric — using {}", self.session.bars().len()));
        }
    }

    fn cycle_algorithm(&mut self) {
        if self.session.is_running() {
            self.set_toast("Run in flight — selection is locked");
            return;
        }
        self.algorithm = self.algorithm.next();
    }

    fn cycle_speed(&mut self) {
        if self.session.is_running() {
            self.set_toast("Run in flight — speed is locked");
            return;
        }
        self.speed = self.speed.next();
    }

    fn drain_frames(&mut self) {
        let Some(receiver) = &self.frames else {
            return;
        };
        while let Ok(frame) = receiver.try_recv() {
            self.latest_frame = Some(frame);
        }
    }

    fn poll_worker(&mut self) {
        let Some(outcome) = self.session.try_finish() else {
            return;
        };
        self.drain_frames();
        self.frames = None;
        match outcome {
            Outcome::Completed => {
                let bars = self.session.bars().to_vec();
                let highlights = Highlight::uniform(bars.len(), Highlight::Sorted);
                self.latest_frame = Some(FrameSnapshot { bars, highlights });
                self.set_toast("Sorted");
            }
            Outcome::Cancelled => {
                // Show the reclaimed array rather than a possibly stale checkpoint.
                self.latest_frame = None;
                self.set_toast("Stopped");
            }
        }
    }

    fn set_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast {
            message: message.into(),
            expires_at: Instant::now() + TOAST_DURATION,
        });
    }

    /// The bars and highlights the next draw should show.
    fn display_state(&self) -> (&[u32], Option<&[Highlight]>) {
        match &self.latest_frame {
            Some(frame) => (&frame.bars, Some(&frame.highlights)),
            None => (self.session.bars(), None),
        }
    }
}

fn draw(frame: &mut Frame<'_>, app: &mut App) {
    let area = frame.area();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0), Constraint::Length(1)])
        .split(area);
    let header_area = layout[0];
    let chart_area = layout[1];
    let status_area = layout[2];

    let header = Paragraph::new(header_line(app))
        .block(Block::default().borders(Borders::ALL).title("Proteus"));
    frame.render_widget(header, header_area);

    draw_bars(frame, app, chart_area);

    let toast_suffix = match &app.toast {
        Some(toast) if toast.expires_at > Instant::now() => format!(" | {}", toast.message),
        Some(_) => {
            app.toast = None;
            String::new()
        }
        None => String::new(),
    };
    let status = Paragraph::new(footer_help_line(&toast_suffix));
    frame.render_widget(status, status_area);
    let brand = Paragraph::new(footer_brand_line()).alignment(Alignment::Right);
    frame.render_widget(brand, status_area);
}

fn draw_bars(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let (values, highlights) = app.display_state();
    let show_values = values.len() <= VALUE_LABEL_MAX_LEN;

    let bars = values
        .iter()
        .enumerate()
        .map(|(index, value)| {
            let highlight = highlights
                .and_then(|assignment| assignment.get(index).copied())
                .unwrap_or_default();
            let mut bar = Bar::default()
                .value(u64::from(*value))
                .style(theme::bar_style(highlight))
                .value_style(theme::value_label_style(highlight));
            if !show_values {
                bar = bar.text_value(String::new());
            }
            bar
        })
        .collect::<Vec<_>>();

    let inner_width = area.width.saturating_sub(2);
    let (bar_width, bar_gap) = bar_layout(inner_width, values.len());

    let chart = BarChart::default()
        .block(Block::default().borders(Borders::ALL))
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(bar_gap)
        .max(u64::from(MAX_VALUE));
    frame.render_widget(chart, area);
}

/// Splits the available inner width into a per-bar width and gap. Bars never disappear: below
/// one cell per bar the chart simply clips on the right.
fn bar_layout(inner_width: u16, len: usize) -> (u16, u16) {
    if len == 0 {
        return (1, 0);
    }
    let per_bar = (inner_width / len.min(u16::MAX as usize) as u16).max(1);
    if per_bar == 1 {
        (1, 0)
    } else {
        (per_bar - 1, 1)
    }
}

fn header_line(app: &App) -> Line<'static> {
    let state_label = match app.session.state() {
        SessionState::Idle => "idle",
        SessionState::Running => "running",
        SessionState::StoppedByUser => "stopping",
    };
    let state_style = match app.session.state() {
        SessionState::Idle => theme::header_value_style(),
        _ => theme::status_running_style(),
    };

    Line::from(vec![
        Span::styled("Size: ".to_owned(), theme::header_label_style()),
        Span::styled(format!("{}_", app.size_input), theme::header_value_style()),
        Span::styled("   Algorithm: ".to_owned(), theme::header_label_style()),
        Span::styled(app.algorithm.label().to_owned(), theme::header_value_style()),
        Span::styled("   Speed: ".to_owned(), theme::header_label_style()),
        Span::styled(app.speed.label().to_owned(), theme::header_value_style()),
        Span::styled("   State: ".to_owned(), theme::header_label_style()),
        Span::styled(state_label.to_owned(), state_style),
    ])
}

fn footer_help_line(toast_suffix: &str) -> Line<'static> {
    let mut spans = Vec::<Span<'static>>::new();
    for (label, hotkey) in [
        ("SORT", "s"),
        ("STOP", "x"),
        ("NEW", "g"),
        ("ALGO", "a"),
        ("SPEED", "v"),
        ("SIZE", "0-9"),
        ("QUIT", "q"),
    ] {
        if !spans.is_empty() {
            spans.push(Span::styled(
                " | ".to_owned(),
                Style::default().fg(theme::FOOTER_LABEL_COLOR),
            ));
        }
        spans.push(Span::styled(
            format!("{label} "),
            Style::default().fg(theme::FOOTER_LABEL_COLOR),
        ));
        spans.push(Span::styled(
            hotkey.to_owned(),
            Style::default().fg(theme::FOOTER_KEY_COLOR).add_modifier(Modifier::BOLD),
        ));
    }
    spans.push(Span::raw(toast_suffix.to_owned()));
    Line::from(spans)
}

fn footer_brand_line() -> Line<'static> {
    Line::from(vec![Span::styled(
        FOOTER_BRAND.to_owned(),
        Style::default().fg(theme::FOOTER_BRAND_COLOR),
    )])
}

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
