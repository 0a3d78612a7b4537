//! Bounded movement through the current step sequence
//!
//! Running off either end is never an error: `advance` on the last step
//! pauses playback (this is how autoplay terminates) and `retreat` on the
//! first step does nothing.

use super::SessionStore;
use tracing::debug;

/// Navigation controller borrowed from a [`SessionStore`]
pub struct Navigator<'a> {
    session: &'a mut SessionStore,
}

impl<'a> Navigator<'a> {
    pub(super) fn new(session: &'a mut SessionStore) -> Self {
        Navigator { session }
    }

    /// Move one step forward; on the last step, stop playback instead
    ///
    /// Returns whether the index moved.
    pub fn advance(&mut self) -> bool {
        if self.session.index + 1 < self.session.len() {
            self.session.index += 1;
            true
        } else {
            if self.session.playing {
                debug!(index = self.session.index, "reached final step, pausing");
            }
            self.session.playing = false;
            false
        }
    }

    /// Move one step back; no-op on the first step
    pub fn retreat(&mut self) -> bool {
        if self.session.index > 0 {
            self.session.index -= 1;
            true
        } else {
            false
        }
    }

    /// Back to the first step, paused
    pub fn reset(&mut self) {
        self.session.index = 0;
        self.session.playing = false;
    }

    /// Flip the play flag and return the new value
    ///
    /// Starting playback on the last step is allowed here; the playback
    /// clock arms no timer for it and settles the flag back to paused.
    pub fn toggle_play(&mut self) -> bool {
        self.session.playing = !self.session.playing;
        self.session.playing
    }

    pub fn set_playing(&mut self, playing: bool) {
        self.session.playing = playing;
    }

    /// Clamped jump to `index`; pauses playback
    pub fn jump_to(&mut self, index: usize) {
        self.session.playing = false;
        self.session.index = index.min(self.session.len().saturating_sub(1));
    }

    /// Jump to the final step; pauses playback
    pub fn jump_to_end(&mut self) {
        self.jump_to(usize::MAX);
    }

    /// Advance up to `n` times, stopping at the end; returns the steps moved
    pub fn step_forward_by(&mut self, n: usize) -> usize {
        let mut moved = 0;
        for _ in 0..n {
            if !self.advance() {
                break;
            }
            moved += 1;
        }
        moved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Algorithm, AlgorithmError};
    use crate::step::Step;
    use serde_json::Value;

    fn three_steps(_: &Value) -> Result<Vec<Step>, AlgorithmError> {
        Ok((1..=3).map(|i| Step::new(i, format!("step {i}"))).collect())
    }

    fn one_step(_: &Value) -> Result<Vec<Step>, AlgorithmError> {
        Ok(vec![Step::new(1, "only")])
    }

    fn session_with(run: crate::catalog::RunFn) -> SessionStore {
        let algorithm = Algorithm::new("test", "Test", "Test", run);
        let mut session = SessionStore::new();
        session.select_algorithm(Some(&algorithm)).unwrap();
        session
    }

    #[test]
    fn test_boundary_table() {
        let mut session = session_with(three_steps);

        // index = 0, length > 1
        assert!(!session.navigator().retreat());
        assert!(session.navigator().advance());
        assert_eq!(session.index(), 1);

        // 0 < index < length - 1
        assert!(session.navigator().retreat());
        assert!(session.navigator().advance());
        assert!(session.navigator().advance());
        assert_eq!(session.index(), 2);

        // index = length - 1
        session.set_playing(true);
        assert!(!session.navigator().advance());
        assert_eq!(session.index(), 2);
        assert!(!session.is_playing());
        assert!(session.navigator().retreat());
    }

    #[test]
    fn test_single_step_sequence() {
        let mut session = session_with(one_step);
        session.set_playing(true);
        assert!(!session.navigator().advance());
        assert!(!session.is_playing());
        assert!(!session.navigator().retreat());
        assert_eq!(session.index(), 0);
    }

    #[test]
    fn test_empty_session() {
        let mut session = SessionStore::new();
        session.set_playing(true);
        assert!(!session.navigator().advance());
        assert!(!session.is_playing());
        session.navigator().jump_to(5);
        assert_eq!(session.index(), 0);
    }

    #[test]
    fn test_reset_idempotent() {
        let mut session = session_with(three_steps);
        session.navigator().jump_to(2);
        session.set_playing(true);

        session.navigator().reset();
        let once = (session.index(), session.is_playing());
        session.navigator().reset();
        assert_eq!((session.index(), session.is_playing()), once);
        assert_eq!(once, (0, false));
    }

    #[test]
    fn test_jump_clamps_and_pauses() {
        let mut session = session_with(three_steps);
        session.set_playing(true);
        session.navigator().jump_to(99);
        assert_eq!(session.index(), 2);
        assert!(!session.is_playing());

        session.navigator().reset();
        session.navigator().jump_to_end();
        assert!(session.is_at_end());
    }

    #[test]
    fn test_step_forward_by_stops_at_end() {
        let mut session = session_with(three_steps);
        assert_eq!(session.navigator().step_forward_by(9), 2);
        assert_eq!(session.index(), 2);
    }

    #[test]
    fn test_toggle_play() {
        let mut session = session_with(three_steps);
        assert!(session.navigator().toggle_play());
        assert!(!session.navigator().toggle_play());
    }
}
