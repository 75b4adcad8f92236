/// Averages frame rate over a reporting interval.
#[derive(Debug, Clone)]
pub struct FpsCounter {
    interval: f32,
    accumulated: f32,
    frames: u32,
}

impl FpsCounter {
    /// `interval` is the reporting period in seconds.
    pub fn new(interval: f32) -> Self {
        debug_assert!(interval > 0.0);
        Self {
            interval,
            accumulated: 0.0,
            frames: 0,
        }
    }

    /// Records one frame of `dt` seconds.
    ///
    /// Returns the average frames per second once a full interval has been
    /// observed, then starts a new interval.
    pub fn record(&mut self, dt: f32) -> Option<f32> {
        self.accumulated += dt;
        self.frames += 1;

        if self.accumulated < self.interval {
            return None;
        }

        let fps = self.frames as f32 / self.accumulated;
        self.accumulated = 0.0;
        self.frames = 0;
        Some(fps)
    }
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn silent_until_interval_elapses() {
        let mut c = FpsCounter::new(1.0);
        for _ in 0..9 {
            assert!(c.record(0.1).is_none());
        }
    }

    #[test]
    fn reports_average_rate() {
        let mut c = FpsCounter::new(0.5);
        let mut report = None;
        for _ in 0..100 {
            if let Some(fps) = c.record(0.0125) {
                report = Some(fps);
                break;
            }
        }
        let fps = report.expect("counter should report within 100 frames");
        assert!((fps - 80.0).abs() < 0.5, "fps = {fps}");
    }

    #[test]
    fn restarts_after_report() {
        let mut c = FpsCounter::new(0.25);
        assert!(c.record(0.3).is_some());
        assert!(c.record(0.1).is_none());
    }
}
