// Host-side tests for the group animation driver.

use glass_core::{AnimationDriver, DriverParams, Orientation, PointerState, SceneConfig};

fn make_driver() -> AnimationDriver {
    AnimationDriver::new(DriverParams::from(&SceneConfig::default()))
}

/// The per-frame rule written out longhand, used as the oracle.
fn reference_step(o: Orientation, delta: f32, pointer: PointerState) -> Orientation {
    let mut pitch = o.pitch - delta / 80.0;
    let mut yaw = o.yaw - delta / 100.0;
    pitch += (pointer.y * 0.2 - pitch) * delta;
    yaw += (pointer.x * 0.2 - yaw) * delta;
    Orientation { pitch, yaw }
}

#[test]
fn three_frames_match_iterated_formula() {
    let mut driver = make_driver();
    let pointer = PointerState::new(0.5, 0.5);
    let mut expected = Orientation::default();
    for delta in [0.016_f32, 0.016, 0.016] {
        driver.step(delta, pointer);
        expected = reference_step(expected, delta, pointer);
    }
    let o = driver.orientation();
    assert!((o.pitch - expected.pitch).abs() < 1e-7);
    assert!((o.yaw - expected.yaw).abs() < 1e-7);

    // hand-evaluated values of the same recurrence
    assert!((o.pitch - 0.004_142_605_6).abs() < 1e-6, "pitch {}", o.pitch);
    assert!((o.yaw - 0.004_258_806_4).abs() < 1e-6, "yaw {}", o.yaw);
}

#[test]
fn centered_pointer_drifts_at_configured_rate() {
    let mut driver = make_driver();
    let delta = 0.016_f32;
    let frames = 3;
    for _ in 0..frames {
        driver.step(delta, PointerState::CENTER);
    }
    let total = delta * frames as f32;
    let o = driver.orientation();

    // Drift is first-order exact; the approach toward the centered target
    // pulls back by at most total^2 / divisor over a short run.
    assert!(o.pitch < 0.0 && o.yaw < 0.0);
    assert!((o.pitch - -(total / 80.0)).abs() <= total * total / 80.0);
    assert!((o.yaw - -(total / 100.0)).abs() <= total * total / 100.0);

    // exact closed form of one centered step: v' = (v - d / k)(1 - d)
    let mut pitch = 0.0_f32;
    let mut yaw = 0.0_f32;
    for _ in 0..frames {
        pitch = (pitch - delta / 80.0) * (1.0 - delta);
        yaw = (yaw - delta / 100.0) * (1.0 - delta);
    }
    assert!((o.pitch - pitch).abs() < 1e-7);
    assert!((o.yaw - yaw).abs() < 1e-7);
}

#[test]
fn single_frame_drift_matches_divisors() {
    let mut driver = make_driver();
    let o = driver.step(0.01, PointerState::CENTER);
    assert!((o.pitch - -(0.01 / 80.0) * 0.99).abs() < 1e-9);
    assert!((o.yaw - -(0.01 / 100.0) * 0.99).abs() < 1e-9);
}

#[test]
fn held_pointer_converges_without_overshoot() {
    let mut driver = make_driver();
    let pointer = PointerState::new(1.0, -1.0);
    let delta = 0.016_f32;
    // fixed point of drift + approach: target - (1 - delta) / divisor
    let pitch_eq = -0.2 - (1.0 - delta) / 80.0;
    let yaw_eq = 0.2 - (1.0 - delta) / 100.0;

    let mut prev = driver.orientation();
    for _ in 0..2000 {
        let o = driver.step(delta, pointer);
        // monotone: pitch only falls toward its floor, yaw only rises toward its ceiling
        assert!(o.pitch <= prev.pitch + 1e-7);
        assert!(o.yaw >= prev.yaw - 1e-7);
        assert!(o.pitch >= pitch_eq - 1e-5);
        assert!(o.yaw <= yaw_eq + 1e-5);
        prev = o;
    }
    let o = driver.orientation();
    assert!((o.pitch - pitch_eq).abs() < 1e-4, "pitch {} vs {}", o.pitch, pitch_eq);
    assert!((o.yaw - yaw_eq).abs() < 1e-4, "yaw {} vs {}", o.yaw, yaw_eq);
}

#[test]
fn shrinking_deltas_stay_bounded() {
    let mut driver = make_driver();
    let pointer = PointerState::new(1.0, -1.0);
    let mut delta = 0.09_f32;
    for _ in 0..3000 {
        let o = driver.step(delta, pointer);
        assert!(o.pitch <= 0.0 && o.pitch >= -0.2 - 1.0 / 80.0);
        assert!(o.yaw <= 0.2);
        delta = (delta * 0.999).max(0.004);
    }
    let o = driver.orientation();
    assert!((o.pitch - -0.2).abs() < 0.015);
    assert!((o.yaw - 0.2).abs() < 0.012);
}

#[test]
fn step_is_deterministic() {
    let mut a = make_driver();
    let mut b = make_driver();
    let inputs = [
        (0.016, PointerState::new(0.1, 0.9)),
        (0.033, PointerState::new(-0.4, 0.2)),
        (0.008, PointerState::new(1.0, -1.0)),
    ];
    for (delta, p) in inputs {
        assert_eq!(a.step(delta, p), b.step(delta, p));
    }
}
