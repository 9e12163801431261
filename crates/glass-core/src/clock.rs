use instant::Instant;

/// Monotonic per-frame delta source.
///
/// The first tick after creation reports the time since creation. Deltas are
/// clamped to `max_delta` so a long stall (hidden tab, debugger) resumes
/// smoothly instead of jumping.
#[derive(Debug)]
pub struct FrameClock {
    last: Instant,
    max_delta: f32,
}

impl FrameClock {
    pub fn new(max_delta: f32) -> Self {
        Self {
            last: Instant::now(),
            max_delta,
        }
    }

    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let dt = now.duration_since(self.last).as_secs_f32();
        self.last = now;
        clamp_delta(dt, self.max_delta)
    }
}

#[inline]
pub fn clamp_delta(dt: f32, max_delta: f32) -> f32 {
    if dt.is_finite() {
        dt.clamp(0.0, max_delta)
    } else {
        0.0
    }
}
