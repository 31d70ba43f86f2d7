/// Get the current time in seconds since the UNIX epoch
#[cfg(not(target_arch = "wasm32"))]
pub fn current_time_secs() -> f64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs_f64()
}

/// Get the current time in seconds since page load
#[cfg(target_arch = "wasm32")]
pub fn current_time_secs() -> f64 {
    web_sys::window()
        .and_then(|window| window.performance())
        .map(|perf| perf.now() / 1000.0)
        .unwrap_or(0.0)
}

/// Measures the time between consecutive frames.
///
/// The first call to [`FrameClock::delta`] returns zero, and gaps longer than
/// `max_delta` (a hidden tab, a breakpoint) are clamped so animations do not jump.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Option<f64>,
    max_delta: f64,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(0.25)
    }
}

impl FrameClock {
    pub fn new(max_delta: f64) -> Self {
        Self { last: None, max_delta }
    }

    /// Seconds elapsed since the previous call, given the current time `now`.
    pub fn delta(&mut self, now: f64) -> f64 {
        let delta = match self.last {
            Some(last) => (now - last).clamp(0.0, self.max_delta),
            None => 0.0,
        };
        self.last = Some(now);
        delta
    }

    /// Forget the previous frame, e.g. when the view is torn down.
    pub fn reset(&mut self) {
        self.last = None;
    }
}
