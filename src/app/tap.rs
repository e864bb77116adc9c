//! Double-tap detection for list rows.
//!
//! A second tap on the same row within the configured window counts as a double tap.
//! Time comes from a [Clock] so the timing can be driven by hand in tests.

use std::time::{Duration, Instant};

/// Default window for two taps to count as one double tap.
pub const DOUBLE_TAP_WINDOW: Duration = Duration::from_millis(300);

/// Source of the current time.
pub trait Clock {
    fn now(&self) -> Instant;
}

/// [Clock] backed by [Instant::now].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tap {
    Single,
    Double,
}

/// Classifies taps on row indices as single or double taps.
#[derive(Debug)]
pub struct TapDetector<C: Clock> {
    clock: C,
    window: Duration,
    last: Option<(usize, Instant)>,
}

impl<C: Clock> TapDetector<C> {
    pub fn new(clock: C, window: Duration) -> Self {
        Self {
            clock,
            window,
            last: None,
        }
    }

    /// Registers a tap on `row`.
    ///
    /// A double tap consumes the pending tap, so a third quick tap starts over as a single.
    pub fn tap(&mut self, row: usize) -> Tap {
        let now = self.clock.now();
        match self.last.take() {
            Some((prev_row, at)) if prev_row == row && now.duration_since(at) <= self.window => {
                Tap::Double
            }
            _ => {
                self.last = Some((row, now));
                Tap::Single
            }
        }
    }

    /// Forgets the pending tap, e.g. after the listing changed under it.
    pub fn reset(&mut self) {
        self.last = None;
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Hand-driven clock shared between a test and the detector it feeds.
    #[derive(Debug, Clone)]
    pub(crate) struct ManualClock {
        now: Rc<Cell<Instant>>,
    }

    impl ManualClock {
        pub(crate) fn new() -> Self {
            Self {
                now: Rc::new(Cell::new(Instant::now())),
            }
        }

        pub(crate) fn advance(&self, by: Duration) {
            self.now.set(self.now.get() + by);
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> Instant {
            self.now.get()
        }
    }

    #[test]
    fn quick_second_tap_on_same_row_is_double() {
        let clock = ManualClock::new();
        let mut taps = TapDetector::new(clock.clone(), DOUBLE_TAP_WINDOW);

        assert_eq!(taps.tap(3), Tap::Single);
        clock.advance(Duration::from_millis(120));
        assert_eq!(taps.tap(3), Tap::Double);
    }

    #[test]
    fn slow_second_tap_is_single() {
        let clock = ManualClock::new();
        let mut taps = TapDetector::new(clock.clone(), DOUBLE_TAP_WINDOW);

        assert_eq!(taps.tap(0), Tap::Single);
        clock.advance(Duration::from_millis(301));
        assert_eq!(taps.tap(0), Tap::Single);
        clock.advance(Duration::from_millis(300));
        assert_eq!(taps.tap(0), Tap::Double, "exactly on the window still counts");
    }

    #[test]
    fn tap_on_other_row_restarts() {
        let clock = ManualClock::new();
        let mut taps = TapDetector::new(clock.clone(), DOUBLE_TAP_WINDOW);

        assert_eq!(taps.tap(1), Tap::Single);
        clock.advance(Duration::from_millis(50));
        assert_eq!(taps.tap(2), Tap::Single);
        clock.advance(Duration::from_millis(50));
        assert_eq!(taps.tap(2), Tap::Double);
    }

    #[test]
    fn triple_tap_is_double_then_single() {
        let clock = ManualClock::new();
        let mut taps = TapDetector::new(clock.clone(), DOUBLE_TAP_WINDOW);

        assert_eq!(taps.tap(4), Tap::Single);
        assert_eq!(taps.tap(4), Tap::Double);
        assert_eq!(taps.tap(4), Tap::Single);
    }

    #[test]
    fn reset_forgets_pending_tap() {
        let clock = ManualClock::new();
        let mut taps = TapDetector::new(clock, DOUBLE_TAP_WINDOW);

        taps.tap(0);
        taps.reset();
        assert_eq!(taps.tap(0), Tap::Single);
    }
}
