//! Playback clock: turns "playing at speed N" into a steady stream of
//! `advance()` calls
//!
//! The clock is cooperative and single-threaded. There is no background
//! thread; the event loop polls it with the current time and the clock
//! reports when a tick is due. A tick is just a deadline, so cancelling one
//! is immediate and never touches session state.
//!
//! # Reconciliation
//!
//! [`PlaybackClock::reconcile`] is called whenever any of its inputs may have
//! changed. It arms a timer if and only if playback is on and there is room
//! to advance, re-arms on a speed or sequence change, and cancels otherwise.
//! Arming always cancels the previous timer first, so at most one timer is
//! ever live.
//!
//! [`Player`] ties a clock to a [`SessionStore`] and a [`TimeSource`].

mod time;

pub use time::{ManualTime, MonotonicTime, TimeSource};

use crate::session::{SessionStore, DEFAULT_SPEED, MAX_SPEED, MIN_SPEED};
use std::time::Duration;
use tracing::{debug, trace};

/// Interval for one tick at `speed` (1000ms / speed)
///
/// Speeds outside `MIN_SPEED..=MAX_SPEED` are clamped; NaN plays at the
/// default speed.
pub fn interval_for(speed: f64) -> Duration {
    let speed = if speed.is_nan() {
        DEFAULT_SPEED
    } else {
        speed.clamp(MIN_SPEED, MAX_SPEED)
    };
    Duration::from_secs_f64(1.0 / speed)
}

/// Everything the clock's arm/cancel decision depends on
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClockInputs {
    pub playing: bool,
    pub speed: f64,
    pub at_end: bool,
    /// Step sequence revision the timer is armed for
    pub revision: u64,
}

impl ClockInputs {
    pub fn from_session(session: &SessionStore) -> Self {
        ClockInputs {
            playing: session.is_playing(),
            speed: session.speed(),
            at_end: session.is_at_end(),
            revision: session.revision(),
        }
    }

    fn should_run(&self) -> bool {
        self.playing && !self.at_end && self.speed.is_finite() && self.speed > 0.0
    }
}

/// What a reconciliation pass did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reconciled {
    /// A fresh timer was armed (any previous one was cancelled first)
    Armed,
    /// The live timer already matched the inputs
    Kept,
    /// The live timer was cancelled and nothing replaced it
    Cancelled,
    /// No timer before, none needed now
    Idle,
}

#[derive(Debug, Clone, Copy)]
struct Timer {
    interval: Duration,
    next_due: Duration,
    revision: u64,
}

/// Single-timer periodic ticker
#[derive(Debug, Default)]
pub struct PlaybackClock {
    timer: Option<Timer>,
    armed_total: u64,
    cancelled_total: u64,
}

impl PlaybackClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decide whether a timer should be live for `inputs`
    pub fn reconcile(&mut self, inputs: ClockInputs, now: Duration) -> Reconciled {
        if !inputs.should_run() {
            return if self.cancel() {
                Reconciled::Cancelled
            } else {
                Reconciled::Idle
            };
        }

        let interval = interval_for(inputs.speed);
        if let Some(timer) = &self.timer {
            if timer.interval == interval && timer.revision == inputs.revision {
                return Reconciled::Kept;
            }
        }

        self.arm(interval, inputs.revision, now);
        Reconciled::Armed
    }

    /// Cancel-then-arm; never arms on top of a live timer
    fn arm(&mut self, interval: Duration, revision: u64, now: Duration) {
        self.cancel();
        self.timer = Some(Timer {
            interval,
            next_due: now + interval,
            revision,
        });
        self.armed_total += 1;
        debug!(interval_ms = interval.as_millis() as u64, "playback timer armed");
    }

    /// Cancel the live timer, if any; returns whether one was live
    pub fn cancel(&mut self) -> bool {
        match self.timer.take() {
            Some(_) => {
                self.cancelled_total += 1;
                trace!("playback timer cancelled");
                true
            }
            None => false,
        }
    }

    /// Consume at most one due tick
    ///
    /// Ticks keep their cadence (`next_due += interval`). If the caller fell
    /// more than a whole interval behind, missed ticks are dropped rather than
    /// fired in a burst.
    pub fn poll(&mut self, now: Duration) -> bool {
        let Some(timer) = self.timer.as_mut() else {
            return false;
        };
        if now < timer.next_due {
            return false;
        }
        timer.next_due += timer.interval;
        if timer.next_due <= now {
            timer.next_due = now + timer.interval;
        }
        true
    }

    pub fn is_armed(&self) -> bool {
        self.timer.is_some()
    }

    pub fn interval(&self) -> Option<Duration> {
        self.timer.map(|t| t.interval)
    }

    /// Time until the next tick, for sizing the event-loop poll timeout
    pub fn time_until_due(&self, now: Duration) -> Option<Duration> {
        self.timer.map(|t| t.next_due.saturating_sub(now))
    }

    /// Timers currently live: always 0 or 1
    pub fn live_timers(&self) -> u64 {
        self.armed_total - self.cancelled_total
    }

    pub fn armed_total(&self) -> u64 {
        self.armed_total
    }

    pub fn cancelled_total(&self) -> u64 {
        self.cancelled_total
    }
}

impl Drop for PlaybackClock {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Drives a [`SessionStore`] from a [`PlaybackClock`]
#[derive(Debug)]
pub struct Player<T: TimeSource> {
    clock: PlaybackClock,
    time: T,
}

impl<T: TimeSource> Player<T> {
    pub fn new(time: T) -> Self {
        Player {
            clock: PlaybackClock::new(),
            time,
        }
    }

    /// Reconcile the clock with the session's current state
    ///
    /// Call after every session mutation. If the session is playing on its
    /// final step there is no room to advance: no timer is armed and the play
    /// flag is settled through `advance()`'s end-of-sequence branch.
    pub fn sync(&mut self, session: &mut SessionStore) -> Reconciled {
        if session.is_playing() && session.is_at_end() {
            session.navigator().advance();
        }
        let now = self.time.now();
        self.clock.reconcile(ClockInputs::from_session(session), now)
    }

    /// Fire a due tick, if any; returns whether the index moved
    pub fn poll(&mut self, session: &mut SessionStore) -> bool {
        self.sync(session);
        let now = self.time.now();
        if !self.clock.poll(now) {
            return false;
        }
        let moved = session.navigator().advance();
        self.sync(session);
        moved
    }

    /// Time until the next due tick, `None` when paused
    pub fn time_until_due(&self) -> Option<Duration> {
        self.clock.time_until_due(self.time.now())
    }

    pub fn clock(&self) -> &PlaybackClock {
        &self.clock
    }

    pub fn time(&self) -> &T {
        &self.time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playing(speed: f64) -> ClockInputs {
        ClockInputs {
            playing: true,
            speed,
            at_end: false,
            revision: 1,
        }
    }

    #[test]
    fn test_interval_for_speed() {
        assert_eq!(interval_for(1.0), Duration::from_millis(1000));
        assert_eq!(interval_for(2.0), Duration::from_millis(500));
        assert_eq!(interval_for(0.5), Duration::from_millis(2000));
    }

    #[test]
    fn test_extreme_speeds_stay_in_range() {
        assert_eq!(interval_for(1e-30), interval_for(MIN_SPEED));
        assert_eq!(interval_for(1e30), interval_for(MAX_SPEED));
        assert_eq!(interval_for(f64::INFINITY), interval_for(MAX_SPEED));
        assert_eq!(interval_for(f64::NAN), interval_for(DEFAULT_SPEED));
        assert!(interval_for(1e30) > Duration::ZERO);

        let mut clock = PlaybackClock::new();
        assert_eq!(clock.reconcile(playing(1e-30), Duration::ZERO), Reconciled::Armed);
        assert_eq!(clock.interval(), Some(Duration::from_secs(10)));
    }

    #[test]
    fn test_arms_only_when_playing_with_room() {
        let mut clock = PlaybackClock::new();
        let paused = ClockInputs {
            playing: false,
            ..playing(1.0)
        };
        assert_eq!(clock.reconcile(paused, Duration::ZERO), Reconciled::Idle);

        let at_end = ClockInputs {
            at_end: true,
            ..playing(1.0)
        };
        assert_eq!(clock.reconcile(at_end, Duration::ZERO), Reconciled::Idle);

        assert_eq!(clock.reconcile(playing(1.0), Duration::ZERO), Reconciled::Armed);
        assert_eq!(clock.reconcile(playing(1.0), Duration::ZERO), Reconciled::Kept);
        assert_eq!(clock.reconcile(paused, Duration::ZERO), Reconciled::Cancelled);
        assert!(!clock.is_armed());
    }

    #[test]
    fn test_speed_change_rearms_single_timer() {
        let mut clock = PlaybackClock::new();
        clock.reconcile(playing(1.0), Duration::ZERO);
        for speed in [2.0, 4.0, 0.5, 3.0, 2.0] {
            assert_eq!(clock.reconcile(playing(speed), Duration::ZERO), Reconciled::Armed);
            assert_eq!(clock.live_timers(), 1);
        }
        assert_eq!(clock.interval(), Some(Duration::from_millis(500)));
    }

    #[test]
    fn test_new_revision_rearms() {
        let mut clock = PlaybackClock::new();
        clock.reconcile(playing(1.0), Duration::ZERO);
        let next = ClockInputs {
            revision: 2,
            ..playing(1.0)
        };
        assert_eq!(clock.reconcile(next, Duration::from_millis(300)), Reconciled::Armed);
        assert!(!clock.poll(Duration::from_millis(1000)));
        assert!(clock.poll(Duration::from_millis(1300)));
    }

    #[test]
    fn test_poll_keeps_cadence_without_bursts() {
        let mut clock = PlaybackClock::new();
        clock.reconcile(playing(2.0), Duration::ZERO);
        assert!(!clock.poll(Duration::from_millis(499)));
        assert!(clock.poll(Duration::from_millis(520)));
        // next due at 1000 regardless of the late poll
        assert!(!clock.poll(Duration::from_millis(990)));
        assert!(clock.poll(Duration::from_millis(1000)));
        // far behind: one tick, not a burst
        assert!(clock.poll(Duration::from_millis(5000)));
        assert!(!clock.poll(Duration::from_millis(5000)));
        assert!(clock.poll(Duration::from_millis(5500)));
    }

    #[test]
    fn test_cancel_is_silent_when_idle() {
        let mut clock = PlaybackClock::new();
        assert!(!clock.cancel());
        assert_eq!(clock.cancelled_total(), 0);
        assert!(!clock.poll(Duration::from_secs(10)));
    }
}
