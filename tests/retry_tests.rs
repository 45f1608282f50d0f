// Host-side tests for the frame-counted sprite retry timer.

use sky_core::{RetryAction, RetryTimer, SceneConfig};

fn failed_timer() -> RetryTimer {
    let mut timer = RetryTimer::new(SceneConfig::default().sprite_retry_frames);
    timer.mark_failed();
    timer
}

#[test]
fn healthy_timer_always_draws() {
    let mut timer = RetryTimer::new(120);
    for _ in 0..500 {
        assert_eq!(timer.tick(), RetryAction::Draw);
    }
    assert!(!timer.is_failed());
    assert_eq!(timer.frames_since_failure(), 0);
}

#[test]
fn skips_while_failed() {
    let mut timer = failed_timer();
    for frame in 1..120 {
        assert_eq!(timer.tick(), RetryAction::Skip, "frame {frame}");
        assert!(timer.is_failed());
        assert_eq!(timer.frames_since_failure(), frame);
    }
}

#[test]
fn reloads_exactly_on_frame_120() {
    let mut timer = failed_timer();
    let reload_at = (1..=240)
        .find(|_| timer.tick() == RetryAction::Reload)
        .unwrap();
    assert_eq!(reload_at, 120);
}

#[test]
fn reload_resets_the_counter() {
    let mut timer = failed_timer();
    for _ in 0..120 {
        timer.tick();
    }
    assert!(!timer.is_failed());
    assert_eq!(timer.frames_since_failure(), 0);
    assert_eq!(timer.tick(), RetryAction::Draw);

    // a second failure waits the full period again
    timer.mark_failed();
    let actions: Vec<_> = (0..120).map(|_| timer.tick()).collect();
    assert!(actions[..119].iter().all(|a| *a == RetryAction::Skip));
    assert_eq!(actions[119], RetryAction::Reload);
}

#[test]
fn repeated_failure_while_waiting_keeps_the_count() {
    let mut timer = failed_timer();
    for _ in 0..50 {
        timer.tick();
    }
    timer.mark_failed();
    assert_eq!(timer.frames_since_failure(), 50);
}

#[test]
fn warns_once_across_repeated_failures() {
    let mut timer = RetryTimer::new(120);
    let mut warnings = 0;
    for _ in 0..5 {
        if timer.mark_failed() {
            warnings += 1;
        }
        // the same load reported twice
        if timer.mark_failed() {
            warnings += 1;
        }
        while timer.tick() != RetryAction::Reload {}
    }
    assert_eq!(warnings, 1);
}

#[test]
fn zero_period_reloads_every_frame() {
    let mut timer = RetryTimer::new(0);
    timer.mark_failed();
    assert_eq!(timer.tick(), RetryAction::Reload);
    assert_eq!(timer.tick(), RetryAction::Draw);
}
