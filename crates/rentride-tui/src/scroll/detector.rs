//! L4 Atomic Layer: Scroll direction detection
//!
//! Reduces a stream of scroll offsets to a coarse up/down/idle signal.
//! Movement whose magnitude does not exceed the noise threshold is jitter
//! and produces no signal.

use super::config::ScrollConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollDirection {
    Up,
    Down,
    #[default]
    Idle,
}

/// Latest classified scroll movement
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollSignal {
    pub direction: ScrollDirection,
    /// Offset of the event that produced the signal
    pub offset: f64,
}

impl ScrollSignal {
    pub const fn idle(offset: f64) -> Self {
        Self {
            direction: ScrollDirection::Idle,
            offset,
        }
    }
}

impl Default for ScrollSignal {
    fn default() -> Self {
        Self::idle(0.0)
    }
}

/// Scroll direction reducer
///
/// Feed every offset reported by the scroll surface to `observe()`.
#[derive(Debug, Clone)]
pub struct ScrollDirectionDetector {
    threshold: f64,
    last_offset: Option<f64>,
    current: Option<ScrollSignal>,
}

impl Default for ScrollDirectionDetector {
    fn default() -> Self {
        Self::from_config(&ScrollConfig::default())
    }
}

impl ScrollDirectionDetector {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.abs(),
            last_offset: None,
            current: None,
        }
    }

    pub fn from_config(config: &ScrollConfig) -> Self {
        Self::new(config.noise_threshold)
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Last emitted signal, if any event has been observed
    pub fn current(&self) -> Option<ScrollSignal> {
        self.current
    }

    /// Classify one scroll event
    ///
    /// Returns `Some` when a signal is emitted: `Idle` for the very first
    /// event, `Down`/`Up` when the delta from the previous event exceeds the
    /// threshold. Sub-threshold movement returns `None` and the held signal
    /// is left untouched. The previous offset always advances. Offsets are
    /// taken as reported; clamping is up to the scroll surface.
    pub fn observe(&mut self, offset: f64) -> Option<ScrollSignal> {
        let previous = self.last_offset.replace(offset);

        let direction = match previous {
            None => ScrollDirection::Idle,
            Some(prev) => {
                let delta = offset - prev;
                if delta > self.threshold {
                    ScrollDirection::Down
                } else if -delta > self.threshold {
                    ScrollDirection::Up
                } else {
                    return None;
                }
            }
        };

        let signal = ScrollSignal { direction, offset };
        self.current = Some(signal);
        Some(signal)
    }

    /// Forget all history, as if no event had been observed
    pub fn reset(&mut self) {
        self.last_offset = None;
        self.current = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directions(detector: &mut ScrollDirectionDetector, offsets: &[f64]) -> Vec<ScrollDirection> {
        offsets
            .iter()
            .filter_map(|o| detector.observe(*o))
            .map(|s| s.direction)
            .collect()
    }

    #[test]
    fn test_first_event_is_idle() {
        let mut detector = ScrollDirectionDetector::new(8.0);
        let signal = detector.observe(120.0).unwrap();
        assert_eq!(signal, ScrollSignal::idle(120.0));
    }

    #[test]
    fn test_down_and_up_beyond_threshold() {
        let mut detector = ScrollDirectionDetector::new(8.0);
        assert_eq!(
            directions(&mut detector, &[0.0, 20.0, 40.0, 10.0]),
            [
                ScrollDirection::Idle,
                ScrollDirection::Down,
                ScrollDirection::Down,
                ScrollDirection::Up
            ]
        );
        assert_eq!(detector.current().unwrap().offset, 10.0);
    }

    #[test]
    fn test_delta_equal_to_threshold_is_jitter() {
        let mut detector = ScrollDirectionDetector::new(8.0);
        detector.observe(100.0);
        assert_eq!(detector.observe(108.0), None);
        assert_eq!(detector.observe(100.0), None);
        assert_eq!(detector.current(), Some(ScrollSignal::idle(100.0)));
    }

    #[test]
    fn test_jitter_never_changes_signal() {
        let mut detector = ScrollDirectionDetector::new(8.0);
        let mut offset = 200.0;
        detector.observe(offset);
        detector.observe(offset + 30.0);
        offset += 30.0;
        let held = detector.current();

        // deterministic zig-zag inside ±ε, drifting a long way overall
        for i in 0..500 {
            let delta = match i % 4 {
                0 => 7.5,
                1 => -3.0,
                2 => 6.0,
                _ => -7.25,
            };
            offset += delta;
            assert_eq!(detector.observe(offset), None, "step {}", i);
            assert_eq!(detector.current(), held);
        }
    }

    #[test]
    fn test_previous_offset_advances_on_jitter() {
        let mut detector = ScrollDirectionDetector::new(8.0);
        // slow creep: each step is below ε, so nothing is emitted even
        // though the total distance is large
        let emitted = directions(&mut detector, &[0.0, 5.0, 10.0, 15.0, 20.0, 25.0]);
        assert_eq!(emitted, [ScrollDirection::Idle]);
    }

    #[test]
    fn test_reset() {
        let mut detector = ScrollDirectionDetector::new(8.0);
        detector.observe(0.0);
        detector.observe(50.0);
        detector.reset();
        assert_eq!(detector.current(), None);
        assert_eq!(detector.observe(10.0), Some(ScrollSignal::idle(10.0)));
    }

    #[test]
    fn test_overscroll_passed_through() {
        let mut detector = ScrollDirectionDetector::new(8.0);
        detector.observe(40.0);
        let signal = detector.observe(-30.0).unwrap();
        assert_eq!(signal.direction, ScrollDirection::Up);
        assert_eq!(signal.offset, -30.0);
        // the bounce back to 0 is a real downward delta
        assert_eq!(detector.observe(0.0).map(|s| s.direction), Some(ScrollDirection::Down));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    const EPSILON: f64 = 8.0;

    /// Offsets in quarter units so every delta is exact
    fn quarters(q: i64) -> f64 {
        q as f64 / 4.0
    }

    proptest! {
        /// Once the first event has been classified, moves that stay within
        /// ±ε never change the held signal, however far they drift.
        #[test]
        fn jitter_keeps_first_signal(
            start in 0i64..8_000,
            steps in prop::collection::vec(-32i64..=32, 0..300),
        ) {
            let mut detector = ScrollDirectionDetector::new(EPSILON);
            let first = detector.observe(quarters(start));
            prop_assert_eq!(first, Some(ScrollSignal::idle(quarters(start))));

            let mut position = start;
            for step in steps {
                position += step;
                prop_assert_eq!(detector.observe(quarters(position)), None);
                prop_assert_eq!(detector.current(), first);
            }
        }

        /// A signal is emitted exactly when the move from the previous event
        /// exceeds ε, and its direction follows the sign of that move.
        #[test]
        fn emits_only_on_large_moves(
            start in 0i64..8_000,
            steps in prop::collection::vec(-200i64..=200, 1..200),
        ) {
            let mut detector = ScrollDirectionDetector::new(EPSILON);
            detector.observe(quarters(start));

            let mut position = start;
            for step in steps {
                position += step;
                let delta = quarters(step);
                let emitted = detector.observe(quarters(position)).map(|s| s.direction);
                let expected = if delta > EPSILON {
                    Some(ScrollDirection::Down)
                } else if delta < -EPSILON {
                    Some(ScrollDirection::Up)
                } else {
                    None
                };
                prop_assert_eq!(emitted, expected);
            }
        }
    }
}
