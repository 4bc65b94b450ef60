/// One expanding ring: a delayed, infinitely looping progress tween.
///
/// The item never reads a clock itself. The field hands it the time
/// elapsed since the animation started and it answers with its eased
/// progress, so the whole model is testable without a frame loop.
pub struct RippleItem {
    delay: f64,
    duration: f64,
}

impl RippleItem {
    pub fn new(delay: f64, duration: f64) -> Self {
        Self { delay, duration }
    }

    /// Eased progress at `elapsed` seconds after the field started.
    ///
    /// Returns `None` while the item is still inside its start delay;
    /// once the delay has passed the progress loops forever over
    /// `duration`.
    pub fn eased_progress(&self, elapsed: f64) -> Option<f32> {
        if elapsed < self.delay {
            return None;
        }
        let t = ((elapsed - self.delay) % self.duration) / self.duration;
        Some(decelerate(t as f32))
    }
}

/// Decelerating ease: fast at the start, settling toward the end.
pub fn decelerate(t: f32) -> f32 {
    1.0 - (1.0 - t) * (1.0 - t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_endpoints() {
        assert_eq!(decelerate(0.0), 0.0);
        assert_eq!(decelerate(1.0), 1.0);
        assert!((decelerate(0.5) - 0.75).abs() < 1e-6);
    }

    #[test]
    fn test_ease_is_monotonic() {
        let mut prev = decelerate(0.0);
        for i in 1..=100 {
            let next = decelerate(i as f32 / 100.0);
            assert!(next >= prev);
            prev = next;
        }
    }

    #[test]
    fn test_idle_during_delay() {
        let item = RippleItem::new(2.0, 8.0);
        assert!(item.eased_progress(0.0).is_none());
        assert!(item.eased_progress(1.9).is_none());
        assert_eq!(item.eased_progress(2.0), Some(0.0));
    }

    #[test]
    fn test_zero_delay_starts_immediately() {
        let item = RippleItem::new(0.0, 8.0);
        assert_eq!(item.eased_progress(0.0), Some(0.0));
    }

    #[test]
    fn test_progress_loops() {
        let item = RippleItem::new(0.0, 8.0);
        let first = item.eased_progress(0.5).unwrap();
        let second = item.eased_progress(8.5).unwrap();
        assert!((first - second).abs() < 1e-6);

        // Just past the end of a loop the ring is small again.
        let wrapped = item.eased_progress(8.01).unwrap();
        assert!(wrapped < 0.01);
    }
}
