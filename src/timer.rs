use std::time::Duration;

/// Accumulates frame deltas against a fixed duration.
#[derive(Debug, Clone)]
pub struct Countdown {
    duration: Duration,
    elapsed: Duration,
}

impl Countdown {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            elapsed: Duration::ZERO,
        }
    }

    pub fn tick(&mut self, dt: Duration) {
        self.elapsed = self.elapsed.saturating_add(dt).min(self.duration);
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Elapsed share of the duration in `[0, 1]`. A zero duration is already finished.
    pub fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0) as f32
    }
}

/// One-shot delay: `tick` reports expiry exactly once.
#[derive(Debug, Clone)]
pub struct Delay {
    countdown: Countdown,
    fired: bool,
}

impl Delay {
    pub fn new(duration: Duration) -> Self {
        Self {
            countdown: Countdown::new(duration),
            fired: false,
        }
    }

    pub fn tick(&mut self, dt: Duration) -> bool {
        if self.fired {
            return false;
        }
        self.countdown.tick(dt);
        if self.countdown.is_finished() {
            self.fired = true;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn countdown_progress_is_linear_and_clamped() {
        let mut c = Countdown::new(ms(1000));
        assert_eq!(c.progress(), 0.0);
        c.tick(ms(250));
        assert!((c.progress() - 0.25).abs() < 1e-6);
        c.tick(ms(5000));
        assert_eq!(c.progress(), 1.0);
        assert!(c.is_finished());
    }

    #[test]
    fn zero_duration_countdown_is_complete() {
        let c = Countdown::new(Duration::ZERO);
        assert!(c.is_finished());
        assert_eq!(c.progress(), 1.0);
    }

    #[test]
    fn delay_fires_once_at_expiry() {
        let mut d = Delay::new(ms(100));
        assert!(!d.tick(ms(99)));
        assert!(d.tick(ms(1)));
        assert!(!d.tick(ms(100)));
    }
}
