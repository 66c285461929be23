// ============================================================================
// CLOCK DRIVER
// ============================================================================

use std::time::Duration;

use chrono::Timelike;

use crate::face::ClockFace;
use crate::surface::Compositor;

/// Wall-clock time of day, as the host reports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockTime {
    hour: u8,
    minute: u8,
    second: u8,
}

impl ClockTime {
    /// # Panics
    ///
    /// If any field is out of range. A host clock that reports such a value is broken.
    pub fn new(hour: u8, minute: u8, second: u8) -> Self {
        assert!(hour < 24, "hour out of range: {hour}");
        assert!(minute < 60, "minute out of range: {minute}");
        assert!(second < 60, "second out of range: {second}");
        Self {
            hour,
            minute,
            second,
        }
    }

    /// Sample the fields of any chrono time value. Leap seconds are folded into second 59.
    pub fn from_timelike<T: Timelike>(time: &T) -> Self {
        Self::new(time.hour() as u8, time.minute() as u8, time.second() as u8)
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    pub fn second(&self) -> u8 {
        self.second
    }

    pub fn fractions(&self) -> HandFractions {
        HandFractions {
            hours: (self.hour % 12) as f64 / 12.0,
            minutes: self.minute as f64 / 60.0,
            seconds: self.second as f64 / 60.0,
        }
    }
}

/// Progress of each hand through its cycle, each in [0, 1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandFractions {
    pub hours: f64,
    pub minutes: f64,
    pub seconds: f64,
}

pub trait TimeSource {
    fn now(&self) -> ClockTime;
}

/// Local time of day from the operating system; timezone rules are chrono's.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl TimeSource for LocalClock {
    fn now(&self) -> ClockTime {
        ClockTime::from_timelike(&chrono::Local::now())
    }
}

/// Turns ticks into hand positions.
///
/// Every tick recomputes from absolute time, so skipped or repeated ticks
/// leave the face correct.
#[derive(Debug, Clone, Default)]
pub struct ClockDriver<T> {
    source: T,
}

impl<T: TimeSource> ClockDriver<T> {
    pub fn new(source: T) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &T {
        &self.source
    }

    /// Sample the clock once and push all three fractions into `face`.
    pub fn on_tick<C: Compositor + ?Sized>(
        &self,
        face: &mut ClockFace,
        compositor: &mut C,
    ) -> HandFractions {
        let time = self.source.now();
        let fractions = time.fractions();
        let changed = face.apply(fractions, compositor);
        if changed > 0 {
            log::debug!(
                "tick {:02}:{:02}:{:02}, {} ring(s) changed",
                time.hour(),
                time.minute(),
                time.second(),
                changed
            );
        }
        fractions
    }
}

/// Delay from `subsec_nanos` into the current second until the next whole second.
pub fn until_next_second(subsec_nanos: u32) -> Duration {
    // chrono reports leap seconds as nanos >= 1e9
    let nanos = subsec_nanos % 1_000_000_000;
    Duration::from_nanos(u64::from(1_000_000_000 - nanos))
}
