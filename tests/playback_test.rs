// Integration tests for timed playback

mod common;

use algoscope::playback::{interval_for, ManualTime, Player, Reconciled, TimeSource};
use algoscope::session::SessionStore;
use common::counter_algorithm;
use serde_json::json;
use std::time::Duration;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn playing_session(speed: f64) -> SessionStore {
    let algorithm = counter_algorithm();
    let mut session = SessionStore::new();
    session.select_algorithm(Some(&algorithm)).unwrap();
    session.set_speed(speed).unwrap();
    session.navigator().toggle_play();
    session
}

#[test]
fn test_five_steps_at_double_speed() {
    let time = ManualTime::new();
    let mut player = Player::new(&time);
    let mut session = playing_session(2.0);
    assert_eq!(session.len(), 5);
    assert_eq!(player.sync(&mut session), Reconciled::Armed);

    let mut seen = Vec::new();
    for _ in 0..40 {
        time.advance(ms(50));
        if player.poll(&mut session) {
            seen.push((time.now().as_millis(), session.index()));
        }
    }

    assert_eq!(seen, vec![(500, 1), (1000, 2), (1500, 3), (2000, 4)]);
    assert_eq!(session.index(), 4);
    assert!(!session.is_playing());
    assert!(!player.clock().is_armed());
}

#[test]
fn test_rapid_speed_changes_leave_one_timer() {
    let time = ManualTime::new();
    let mut player = Player::new(&time);
    let mut session = playing_session(1.0);
    player.sync(&mut session);

    for speed in [2.0, 4.0, 0.5, 8.0, 4.0] {
        time.advance(ms(10));
        session.set_speed(speed).unwrap();
        assert_eq!(player.sync(&mut session), Reconciled::Armed);
        assert_eq!(player.clock().live_timers(), 1);
    }

    // Final speed 4x: one tick per 250ms from the last change at 50ms
    assert_eq!(player.clock().interval(), Some(interval_for(4.0)));
    time.set(ms(299));
    assert!(!player.poll(&mut session));
    time.set(ms(300));
    assert!(player.poll(&mut session));
    assert_eq!(session.index(), 1);
    time.set(ms(549));
    assert!(!player.poll(&mut session));
    time.set(ms(550));
    assert!(player.poll(&mut session));
    assert_eq!(session.index(), 2);
    assert_eq!(player.clock().live_timers(), 1);
}

#[test]
fn test_stall_does_not_burst() {
    let time = ManualTime::new();
    let mut player = Player::new(&time);
    let mut session = playing_session(1.0);
    player.sync(&mut session);

    // Event loop wakes up late by several intervals
    time.set(ms(3500));
    assert!(player.poll(&mut session));
    assert!(!player.poll(&mut session));
    assert_eq!(session.index(), 1);
    assert_eq!(player.time_until_due(), Some(ms(1000)));
}

#[test]
fn test_new_input_while_playing_cancels_timer() {
    let time = ManualTime::new();
    let mut player = Player::new(&time);
    let mut session = playing_session(1.0);
    player.sync(&mut session);

    time.set(ms(1000));
    assert!(player.poll(&mut session));
    assert_eq!(session.index(), 1);

    session.set_input(json!({"n": 8})).unwrap();
    assert_eq!(player.sync(&mut session), Reconciled::Cancelled);
    assert_eq!(session.index(), 0);
    assert!(!session.is_playing());

    time.set(ms(5000));
    assert!(!player.poll(&mut session));
    assert_eq!(session.index(), 0);
}

#[test]
fn test_pause_cancels_and_resume_rearms() {
    let time = ManualTime::new();
    let mut player = Player::new(&time);
    let mut session = playing_session(1.0);
    player.sync(&mut session);

    time.set(ms(400));
    session.navigator().toggle_play();
    assert_eq!(player.sync(&mut session), Reconciled::Cancelled);

    time.set(ms(1200));
    assert!(!player.poll(&mut session));

    session.navigator().toggle_play();
    assert_eq!(player.sync(&mut session), Reconciled::Armed);
    assert_eq!(player.time_until_due(), Some(ms(1000)));
}

#[test]
fn test_play_on_last_step_settles_paused() {
    let time = ManualTime::new();
    let mut player = Player::new(&time);
    let mut session = playing_session(1.0);
    session.navigator().jump_to_end();
    session.navigator().set_playing(true);

    assert_eq!(player.sync(&mut session), Reconciled::Idle);
    assert!(!session.is_playing());
    assert_eq!(session.index(), 4);
    assert_eq!(player.clock().armed_total(), 0);
}

#[test]
fn test_out_of_range_speed_never_reaches_clock() {
    let time = ManualTime::new();
    let mut player = Player::new(&time);
    let mut session = playing_session(1.0);

    assert!(session.set_speed(1e-30).is_err());
    assert!(session.set_speed(1e30).is_err());
    assert_eq!(player.sync(&mut session), Reconciled::Armed);
    assert_eq!(player.clock().interval(), Some(ms(1000)));

    session.set_speed(100.0).unwrap();
    player.sync(&mut session);
    time.set(ms(10));
    assert!(player.poll(&mut session));
    assert!(!player.poll(&mut session));
}
