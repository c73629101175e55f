//! Main TUI application state and logic

use crate::algorithms::{self, registry, AlgorithmId};
use crate::trace::{Playback, PlaybackError};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use rand::Rng;
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// Smallest and largest supported input arrays
pub const MIN_ARRAY_SIZE: usize = 10;
pub const MAX_ARRAY_SIZE: usize = 150;

/// Speed bounds; auto-play delay per step is `201 - speed` milliseconds
pub const MIN_SPEED: u16 = 10;
pub const MAX_SPEED: u16 = 200;

const SIZE_STEP: usize = 5;
const SPEED_STEP: u16 = 10;
const TARGET_STEP: i32 = 5;

/// The main application state
pub struct App {
    /// Selected algorithm
    pub algorithm: AlgorithmId,

    /// Current input array (the unsorted original; binary search visualizes
    /// its own sorted copy through the trace snapshots)
    pub values: Vec<i32>,

    /// Requested input array size
    pub array_size: usize,

    /// Search target for the searching algorithms
    pub target: i32,

    /// Playback cursor over the drained trace
    pub playback: Playback,

    /// Auto-play speed (MIN_SPEED..=MAX_SPEED)
    pub speed: u16,

    /// Whether auto-play mode is active
    pub is_playing: bool,

    /// Last time a step was taken in play mode
    pub last_play_time: Instant,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,

    /// Status message to display
    pub status_message: String,

    /// Whether the app should quit
    pub should_quit: bool,
}

impl App {
    /// Create a new app with a fresh random array and its trace
    pub fn new(algorithm: AlgorithmId, array_size: usize, target: i32) -> Self {
        let values = random_values(array_size);
        App::with_values(algorithm, values, target)
    }

    /// Create a new app from explicit input values
    pub fn with_values(algorithm: AlgorithmId, values: Vec<i32>, target: i32) -> Self {
        let playback = build_playback(algorithm, &values, target);
        let array_size = values.len();

        App {
            algorithm,
            values,
            array_size,
            target,
            playback,
            speed: 100,
            is_playing: false,
            last_play_time: Instant::now(),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or_else(Instant::now),
            status_message: String::from("Ready!"),
            should_quit: false,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Handle auto-play mode
            if self.is_playing && self.last_play_time.elapsed() >= self.play_delay() {
                match self.playback.advance() {
                    Ok(()) => {
                        self.status_message = "Playing...".to_string();
                    }
                    Err(PlaybackError::AtEnd) => {
                        self.is_playing = false;
                        self.status_message = "Playback complete".to_string();
                    }
                }
                self.last_play_time = Instant::now();
            }

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

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Main pane area plus a one-row status bar at the bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let pane_area = main_chunks[0];
        let status_area = main_chunks[1];

        // Bars on the left, complexity and statistics stacked on the right
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(pane_area);

        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(7), Constraint::Min(0)])
            .split(columns[1]);

        super::panes::render_bars_pane(frame, columns[0], self.playback.current());

        super::panes::render_complexity_pane(
            frame,
            right_rows[0],
            registry::descriptor(self.algorithm),
        );

        let target = self.algorithm.is_searching().then_some(self.target);
        super::panes::render_stats_pane(
            frame,
            right_rows[1],
            &self.playback,
            self.array_size,
            target,
        );

        super::panes::render_status_bar(
            frame,
            status_area,
            &self.status_message,
            self.playback.position(),
            self.playback.len(),
            self.is_playing,
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                self.is_playing = false;
                let n = c.to_digit(10).unwrap_or(1) as usize;
                let mut stepped = 0;
                for _ in 0..n {
                    if self.playback.advance().is_ok() {
                        stepped += 1;
                    } else {
                        break;
                    }
                }
                self.status_message = format!("Stepped forward {} step(s)", stepped);
            }
            KeyCode::Right => {
                self.is_playing = false;
                self.step_forward();
            }
            KeyCode::Char(' ') => {
                // Toggle auto-play mode (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.toggle_play();
                }
            }
            KeyCode::Enter => {
                // Jump to the final step, accumulating counters over the skipped steps
                self.is_playing = false;
                self.playback.seek_end();
                self.status_message = "Jumped to end".to_string();
            }
            KeyCode::Backspace => {
                // Reset to the first step; the trace is kept as-is
                self.is_playing = false;
                self.playback.reset();
                self.status_message = "Reset to start".to_string();
            }
            KeyCode::Tab => {
                self.change_algorithm(self.algorithm.next());
            }
            KeyCode::BackTab => {
                self.change_algorithm(self.algorithm.prev());
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.values = random_values(self.array_size);
                self.rebuild_trace();
                self.status_message = "New array".to_string();
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.resize_array(self.array_size.saturating_add(SIZE_STEP));
            }
            KeyCode::Char('-') | KeyCode::Char('_') => {
                self.resize_array(self.array_size.saturating_sub(SIZE_STEP));
            }
            KeyCode::Up => {
                self.speed = (self.speed + SPEED_STEP).min(MAX_SPEED);
                self.status_message = format!("Speed {}", self.speed);
            }
            KeyCode::Down => {
                self.speed = self.speed.saturating_sub(SPEED_STEP).max(MIN_SPEED);
                self.status_message = format!("Speed {}", self.speed);
            }
            KeyCode::Char(',') | KeyCode::Char('<') => {
                self.adjust_target(-TARGET_STEP);
            }
            KeyCode::Char('.') | KeyCode::Char('>') => {
                self.adjust_target(TARGET_STEP);
            }
            _ => {}
        }
    }

    /// Step forward in the trace
    fn step_forward(&mut self) {
        match self.playback.advance() {
            Ok(()) => {
                self.status_message = "Stepped forward".to_string();
            }
            Err(e) => {
                self.status_message = format!("Cannot step forward: {}", e);
            }
        }
    }

    fn toggle_play(&mut self) {
        self.is_playing = !self.is_playing;
        if self.is_playing {
            // Fire the first tick immediately
            self.last_play_time = Instant::now()
                .checked_sub(self.play_delay())
                .unwrap_or_else(Instant::now);
            self.status_message = "Playing...".to_string();
        } else {
            self.status_message = "Paused".to_string();
        }
    }

    /// Switch algorithms; the old trace is discarded, never reused
    fn change_algorithm(&mut self, algorithm: AlgorithmId) {
        self.algorithm = algorithm;
        self.rebuild_trace();
        self.status_message = registry::descriptor(algorithm).name.to_string();
    }

    fn resize_array(&mut self, size: usize) {
        let size = size.clamp(MIN_ARRAY_SIZE, MAX_ARRAY_SIZE);
        if size == self.array_size {
            return;
        }
        self.array_size = size;
        self.values = random_values(size);
        self.rebuild_trace();
        self.status_message = format!("Array size {}", size);
    }

    fn adjust_target(&mut self, delta: i32) {
        if !self.algorithm.is_searching() {
            self.status_message = "Target only applies to searching".to_string();
            return;
        }
        self.target = self.target.saturating_add(delta);
        self.rebuild_trace();
        self.status_message = format!("Target {}", self.target);
    }

    /// Regenerate the trace from the current inputs
    fn rebuild_trace(&mut self) {
        self.is_playing = false;
        self.playback = build_playback(self.algorithm, &self.values, self.target);
    }

    fn play_delay(&self) -> Duration {
        Duration::from_millis((201 - self.speed.min(MAX_SPEED)) as u64)
    }
}

fn build_playback(algorithm: AlgorithmId, values: &[i32], target: i32) -> Playback {
    let target = algorithm.is_searching().then_some(target);
    Playback::new(algorithms::generate(algorithm, values, target))
}

/// A fresh random input array with values in 1..=100
fn random_values(size: usize) -> Vec<i32> {
    let mut rng = rand::thread_rng();
    (0..size).map(|_| rng.gen_range(1..=100)).collect()
}
