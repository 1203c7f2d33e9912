use super::*;

fn clock() -> Playback {
    Playback::new(
        4.0,
        PlaybackOpts {
            shader_time_step: 0.5,
        },
    )
}

#[test]
fn starts_paused_at_zero() {
    let p = clock();
    assert_eq!(p.mode(), PlaybackMode::Paused);
    assert_eq!(p.time(), 0.0);
    assert!(p.is_active());
}

#[test]
fn playing_wraps_at_duration() {
    let mut p = clock();
    p.play(10.0);
    assert_eq!(p.tick(11.0).unwrap().timeline_time, 1.0);
    assert_eq!(p.tick(15.0).unwrap().timeline_time, 1.0);
    assert_eq!(p.tick(16.5).unwrap().timeline_time, 2.5);
}

#[test]
fn paused_time_is_pinned_but_shader_time_runs() {
    let mut p = clock();
    p.scrub(1.5);
    let a = p.tick(100.0).unwrap();
    let b = p.tick(200.0).unwrap();
    assert_eq!(a.timeline_time, 1.5);
    assert_eq!(b.timeline_time, 1.5);
    assert_eq!(a.shader_time, 0.5);
    assert_eq!(b.shader_time, 1.0);
}

#[test]
fn resume_continues_from_last_displayed_time() {
    let mut p = clock();
    p.play(0.0);
    p.tick(3.0);
    p.pause();
    assert_eq!(p.time(), 3.0);
    p.tick(50.0);
    p.play(50.0);
    assert_eq!(p.tick(50.5).unwrap().timeline_time, 3.5);
}

#[test]
fn scrub_clamps_and_pauses() {
    let mut p = clock();
    p.play(0.0);
    p.scrub(9.0);
    assert!(!p.is_playing());
    assert_eq!(p.time(), 4.0);
    p.scrub(-1.0);
    assert_eq!(p.time(), 0.0);
    p.scrub(f64::NAN);
    assert_eq!(p.time(), 0.0);
}

#[test]
fn step_scrub_nudges_by_a_hundredth() {
    let mut p = clock();
    p.step_scrub(1);
    p.step_scrub(1);
    assert!((p.time() - 0.02).abs() < 1e-12);
    p.step_scrub(-5);
    assert!((p.time() - 0.01).abs() < 1e-12);
    p.scrub(0.0);
    p.step_scrub(-1);
    assert_eq!(p.time(), 0.0);
}

#[test]
fn stop_ends_ticking() {
    let mut p = clock();
    p.play(0.0);
    p.stop();
    assert!(!p.is_active());
    assert_eq!(p.tick(1.0), None);
    p.play(2.0);
    assert!(!p.is_playing());
}

#[test]
fn default_shader_step() {
    assert_eq!(PlaybackOpts::default().shader_time_step, 0.016);
}
