//! # Introduction
//!
//! sortty runs textbook sorting and searching algorithms in an instrumented
//! form: instead of finishing silently, each algorithm records a step for
//! every observable event (a comparison, a swap, an index settling into its
//! final position, a cursor of interest).  The recorded trace is then
//! replayed forward through a terminal UI built with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Values → Generator → Trace → Playback → TUI
//! ```
//!
//! 1. [`algorithms`] — the instrumented generators and the static registry
//!    of algorithm descriptors (name, category, complexity).
//! 2. [`trace`] — the [`trace::Step`] record, the drained [`trace::Trace`],
//!    and the forward-only [`trace::Playback`] cursor with derived
//!    comparison/swap counters.
//! 3. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! ## Supported algorithms
//!
//! Sorting: bubble, selection, insertion, merge, quick.
//! Searching: linear, binary (binary sorts a private copy first, so the
//! visualized array differs from the unsorted input).

pub mod algorithms;
pub mod trace;
pub mod ui;
