//! Session state: what is being visualized and where playback stands
//!
//! [`SessionStore`] is the single owner of the current algorithm, its input,
//! the derived [`StepSequence`], the step index, the play flag, the speed and
//! the display language. It is created empty and only changes through its
//! own methods.
//!
//! Whenever the algorithm or input changes the sequence is recomputed and
//! swapped in wholesale, after which the index is always `0` and playback is
//! paused. Bounded movement through the sequence lives in [`navigation`].

pub mod navigation;

pub use navigation::Navigator;

use crate::catalog::{Algorithm, AlgorithmError, Language, SourceCode};
use crate::step::{Step, StepSequence};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Default playback speed multiplier
pub const DEFAULT_SPEED: f64 = 1.0;

/// Slowest accepted speed (one step per 10s)
pub const MIN_SPEED: f64 = 0.1;

/// Fastest accepted speed (one step per 10ms)
pub const MAX_SPEED: f64 = 100.0;

/// Whether `speed` lies in `MIN_SPEED..=MAX_SPEED`; NaN never does
pub fn is_valid_speed(speed: f64) -> bool {
    (MIN_SPEED..=MAX_SPEED).contains(&speed)
}

/// Errors surfaced by session actions
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    #[error(transparent)]
    Algorithm(#[from] AlgorithmError),

    #[error("input is not valid JSON: {0}")]
    InputParse(String),

    #[error("speed must be between 0.1 and 100, got {0}")]
    InvalidSpeed(f64),
}

/// Single long-lived visualizer state
#[derive(Debug)]
pub struct SessionStore {
    algorithm: Option<Algorithm>,
    input: Option<Value>,
    steps: Option<StepSequence>,
    index: usize,
    playing: bool,
    speed: f64,
    language: Language,
    /// Bumped every time the step sequence is replaced or cleared
    revision: u64,
    last_error: Option<SessionError>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    /// Create a session with no algorithm selected
    pub fn new() -> Self {
        SessionStore {
            algorithm: None,
            input: None,
            steps: None,
            index: 0,
            playing: false,
            speed: DEFAULT_SPEED,
            language: Language::default(),
            revision: 0,
            last_error: None,
        }
    }

    /// Select an algorithm (or clear the selection)
    ///
    /// A selected algorithm starts from its default input. On success the
    /// index is `0` and playback is paused. If the default input is rejected
    /// the previous selection stays in place and the error is recorded.
    pub fn select_algorithm(&mut self, algorithm: Option<&Algorithm>) -> Result<(), SessionError> {
        match algorithm {
            Some(algorithm) => {
                info!(id = algorithm.id, "algorithm selected");
                self.recompute(*algorithm, algorithm.default_input())
            }
            None => {
                debug!("selection cleared");
                self.algorithm = None;
                self.input = None;
                self.steps = None;
                self.index = 0;
                self.playing = false;
                self.revision += 1;
                self.last_error = None;
                Ok(())
            }
        }
    }

    /// Replace the current input and recompute the step sequence
    ///
    /// No validation happens here. If the algorithm rejects the input the
    /// error is returned and recorded in [`last_error`](Self::last_error);
    /// the previous input, sequence, index and play flag stay as they were.
    pub fn set_input(&mut self, input: Value) -> Result<(), SessionError> {
        match self.algorithm {
            Some(algorithm) => self.recompute(algorithm, input),
            None => {
                self.input = Some(input);
                Ok(())
            }
        }
    }

    /// Parse `text` as JSON and use it as the new input
    pub fn set_input_text(&mut self, text: &str) -> Result<(), SessionError> {
        match serde_json::from_str::<Value>(text) {
            Ok(value) => self.set_input(value),
            Err(e) => {
                let err = SessionError::InputParse(e.to_string());
                self.last_error = Some(err.clone());
                Err(err)
            }
        }
    }

    /// Trace `algorithm` on `input` and commit all three together, or
    /// nothing at all
    fn recompute(&mut self, algorithm: Algorithm, input: Value) -> Result<(), SessionError> {
        match algorithm.trace(&input) {
            Ok(steps) => {
                debug!(id = algorithm.id, steps = steps.len(), "step sequence recomputed");
                self.algorithm = Some(algorithm);
                self.input = Some(input);
                self.steps = Some(steps);
                self.index = 0;
                self.playing = false;
                self.revision += 1;
                self.last_error = None;
                Ok(())
            }
            Err(e) => {
                warn!(id = algorithm.id, error = %e, "algorithm rejected input");
                let err = SessionError::from(e);
                self.last_error = Some(err.clone());
                Err(err)
            }
        }
    }

    /// Direct jump without clamping; callers keep `index < len()`
    pub fn set_step_index(&mut self, index: usize) {
        debug_assert!(
            index < self.len().max(1),
            "step index {index} out of range for {} step(s)",
            self.len()
        );
        self.index = index;
    }

    pub fn set_playing(&mut self, playing: bool) {
        self.playing = playing;
    }

    pub fn set_speed(&mut self, speed: f64) -> Result<(), SessionError> {
        if !is_valid_speed(speed) {
            return Err(SessionError::InvalidSpeed(speed));
        }
        self.speed = speed;
        Ok(())
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    /// Bounded navigation over this session
    pub fn navigator(&mut self) -> Navigator<'_> {
        Navigator::new(self)
    }

    // ========== Getter methods for UI ==========

    pub fn algorithm(&self) -> Option<&Algorithm> {
        self.algorithm.as_ref()
    }

    pub fn input(&self) -> Option<&Value> {
        self.input.as_ref()
    }

    pub fn steps(&self) -> Option<&StepSequence> {
        self.steps.as_ref()
    }

    pub fn current_step(&self) -> Option<&Step> {
        self.steps.as_ref().and_then(|s| s.get(self.index))
    }

    /// Number of steps, `0` when nothing is selected
    pub fn len(&self) -> usize {
        self.steps.as_ref().map_or(0, StepSequence::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn last_error(&self) -> Option<&SessionError> {
        self.last_error.as_ref()
    }

    pub fn is_at_start(&self) -> bool {
        self.index == 0
    }

    /// True on the final step, and when there are no steps at all
    pub fn is_at_end(&self) -> bool {
        self.len() <= self.index + 1
    }

    /// Source text of the current algorithm in the selected language
    pub fn source(&self) -> Option<&SourceCode> {
        self.algorithm.as_ref()?.source(self.language)
    }

    /// Current step's code line translated to the selected language
    pub fn code_line(&self) -> Option<usize> {
        let line = self.current_step()?.code_line;
        Some(self.source().map_or(line, |s| s.map_line(line)))
    }
}
