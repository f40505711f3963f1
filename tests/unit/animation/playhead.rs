use super::*;

#[test]
fn play_advances_and_stops_at_total() {
    let mut p = Playhead::new(1.0);
    p.play(10.0);
    assert_eq!(p.state(), PlayState::Forward);
    p.tick(10.4);
    assert!((p.position() - 0.4).abs() < 1e-12);
    p.tick(12.0);
    assert_eq!(p.position(), 1.0);
    assert_eq!(p.state(), PlayState::Paused);
    assert_eq!(p.progress(), 1.0);
}

#[test]
fn reverse_runs_back_from_current_position() {
    let mut p = Playhead::new(1.0);
    p.play(0.0);
    p.tick(0.6);
    p.reverse(0.8);
    assert!((p.position() - 0.8).abs() < 1e-12);
    p.tick(1.0);
    assert!((p.position() - 0.6).abs() < 1e-12);
    p.tick(5.0);
    assert_eq!(p.position(), 0.0);
    assert!(!p.is_running());
}

#[test]
fn paused_playhead_ignores_time() {
    let mut p = Playhead::new(2.0);
    assert!(!p.tick(0.0));
    assert!(!p.tick(3.0));
    assert_eq!(p.position(), 0.0);
}

#[test]
fn pause_then_resume_keeps_direction() {
    let mut p = Playhead::new(2.0);
    p.play(0.0);
    p.pause(0.5);
    p.tick(1.5);
    assert_eq!(p.position(), 0.5);
    p.resume(1.5);
    p.tick(2.0);
    assert_eq!(p.position(), 1.0);
}

#[test]
fn restart_reset_complete() {
    let mut p = Playhead::new(1.0);
    p.complete(0.0);
    assert_eq!(p.position(), 1.0);
    p.restart(1.0);
    assert_eq!(p.position(), 0.0);
    assert_eq!(p.state(), PlayState::Forward);
    p.tick(1.25);
    p.reset(1.25);
    assert_eq!(p.position(), 0.0);
    assert_eq!(p.state(), PlayState::Paused);
}

#[test]
fn play_at_end_is_a_noop() {
    let mut p = Playhead::new(1.0);
    p.complete(0.0);
    p.play(0.0);
    assert_eq!(p.state(), PlayState::Paused);
    assert!(!p.tick(1.0));
}
