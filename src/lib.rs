//! # Introduction
//!
//! algoscope replays classic interview algorithms one step at a time. Each
//! algorithm is run eagerly against an input, recording a snapshot of its
//! data structures before every interesting statement. The resulting trace is
//! then played back, paused and scrubbed through a terminal UI built with
//! [ratatui](https://docs.rs/ratatui), next to the matching source line.
//!
//! ## Pipeline
//!
//! ```text
//! Catalog → Algorithm + Input → StepSequence → SessionStore ⇄ PlaybackClock → TUI
//! ```
//!
//! 1. [`catalog`]: built-in algorithms with metadata, sources and step
//!    generators.
//! 2. [`step`]: the immutable [`step::StepSequence`] a run produces.
//! 3. [`session`]: the single owner of selection, input, step index, play
//!    flag, speed and display language, plus bounded navigation.
//! 4. [`playback`]: a cooperative clock that turns "playing at speed N"
//!    into one `advance()` per interval.
//! 5. [`progress`] and [`patterns`]: persisted solved marks and per-pattern
//!    statistics.
//! 6. [`ui`]: ratatui-based TUI; not part of the stable library API.
//!
//! [`config`] and [`logging`] wire the binary's command line and log file.

pub mod catalog;
pub mod config;
pub mod logging;
pub mod patterns;
pub mod playback;
pub mod progress;
pub mod session;
pub mod step;
pub mod ui;
