//! Count-up animation for statistics.
//!
//! A [`CountUp`] moves `Idle -> Running -> Done` and can only leave `Idle`
//! once, so a statistic that scrolls out of view and back never restarts.

use std::f64::consts::PI;

/// Slow at both ends, fastest halfway through.
pub fn ease_in_out(p: f64) -> f64 {
    (1.0 - (PI * p).cos()) / 2.0
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Phase {
    Idle,
    Running { start: f64 },
    Done,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    pub value: u64,
    pub finished: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CountUp {
    target: u64,
    duration_ms: f64,
    phase: Phase,
    value: u64,
}

impl CountUp {
    pub fn new(target: u64, duration_ms: f64) -> Self {
        Self { target, duration_ms, phase: Phase::Idle, value: 0 }
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Starts the animation at `now` (milliseconds). Returns false if it was
    /// already started, finished or cancelled.
    pub fn trigger(&mut self, now: f64) -> bool {
        if self.phase != Phase::Idle {
            return false;
        }
        self.phase = Phase::Running { start: now };
        true
    }

    /// Computes the value for the animation frame at `now`. `None` means the
    /// counter is not running and nothing should be displayed or scheduled.
    pub fn advance(&mut self, now: f64) -> Option<Frame> {
        let Phase::Running { start } = self.phase else {
            return None;
        };

        let p = if self.duration_ms > 0.0 {
            ((now - start) / self.duration_ms).clamp(0.0, 1.0)
        } else {
            1.0
        };

        if p >= 1.0 {
            self.value = self.target;
            self.phase = Phase::Done;
        } else {
            let eased = (self.target as f64 * ease_in_out(p)).floor() as u64;
            self.value = eased.clamp(self.value, self.target);
        }

        Some(Frame { value: self.value, finished: self.phase == Phase::Done })
    }

    /// Stops the counter for good, keeping whatever value it reached.
    pub fn cancel(&mut self) {
        self.phase = Phase::Done;
    }
}

/// `1000` -> `"1,000"`.
pub fn format_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_zero_until_triggered() {
        let mut counter = CountUp::new(200, 1400.0);
        assert_eq!(counter.value(), 0);
        assert_eq!(counter.advance(500.0), None);
        assert_eq!(counter.value(), 0);
    }

    #[test]
    fn climbs_monotonically_and_lands_on_target() {
        let mut counter = CountUp::new(200, 1400.0);
        assert!(counter.trigger(1_000.0));

        let mut last = 0;
        let mut t = 1_000.0;
        while t < 2_400.0 {
            let frame = counter.advance(t).unwrap();
            assert!(frame.value >= last, "went backwards at {t}");
            assert!(!frame.finished);
            last = frame.value;
            t += 16.7;
        }

        let frame = counter.advance(2_400.0).unwrap();
        assert_eq!(frame, Frame { value: 200, finished: true });
        assert_eq!(counter.advance(2_500.0), None);
        assert_eq!(counter.value(), 200);
    }

    #[test]
    fn late_frame_still_ends_exactly_on_target() {
        let mut counter = CountUp::new(1000, 1400.0);
        counter.trigger(0.0);
        assert_eq!(counter.advance(9_999.0).unwrap().value, 1000);
    }

    #[test]
    fn halfway_is_about_half_the_target() {
        let mut counter = CountUp::new(200, 1400.0);
        counter.trigger(0.0);
        let value = counter.advance(700.0).unwrap().value;
        assert!((99..=100).contains(&value), "{value}");
    }

    #[test]
    fn second_trigger_does_not_restart() {
        let mut counter = CountUp::new(200, 1400.0);
        assert!(counter.trigger(0.0));
        counter.advance(700.0);
        assert!(!counter.trigger(800.0));
        assert_eq!(counter.phase(), Phase::Running { start: 0.0 });

        counter.advance(1_400.0);
        assert!(!counter.trigger(5_000.0));
        assert_eq!(counter.value(), 200);
    }

    #[test]
    fn cancelled_counter_produces_no_more_frames() {
        let mut counter = CountUp::new(30, 1400.0);
        counter.trigger(0.0);
        let before = counter.advance(300.0).unwrap().value;
        counter.cancel();
        assert_eq!(counter.advance(600.0), None);
        assert!(!counter.trigger(700.0));
        assert_eq!(counter.value(), before);
    }

    #[test]
    fn zero_duration_jumps_to_target() {
        let mut counter = CountUp::new(14, 0.0);
        counter.trigger(10.0);
        assert_eq!(counter.advance(10.0).unwrap(), Frame { value: 14, finished: true });
    }

    #[test]
    fn easing_endpoints() {
        assert_eq!(ease_in_out(0.0), 0.0);
        assert!((ease_in_out(0.5) - 0.5).abs() < 1e-12);
        assert!((ease_in_out(1.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn thousands_separators() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(200), "200");
        assert_eq!(format_thousands(1000), "1,000");
        assert_eq!(format_thousands(1234567), "1,234,567");
    }
}
