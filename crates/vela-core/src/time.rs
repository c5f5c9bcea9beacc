//! Timestamp primitive for tracking samples

use std::fmt;
use std::time::Duration;

/// Target timestamp of a tracking sample, in host-clock nanoseconds
///
/// The remote host uses it for late-sample rejection and extrapolation;
/// the client pipeline only requires that a single producer submits
/// non-decreasing values and counts the exceptions.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct SampleTimestamp(pub u64);

impl SampleTimestamp {
    pub const ZERO: SampleTimestamp = SampleTimestamp(0);

    #[inline]
    pub fn from_nanos(nanos: u64) -> Self {
        SampleTimestamp(nanos)
    }

    #[inline]
    pub fn from_micros(micros: u64) -> Self {
        SampleTimestamp(micros * 1_000)
    }

    #[inline]
    pub fn from_millis(millis: u64) -> Self {
        SampleTimestamp(millis * 1_000_000)
    }

    #[inline]
    pub fn as_nanos(self) -> u64 {
        self.0
    }

    #[inline]
    pub fn as_micros(self) -> u64 {
        self.0 / 1_000
    }

    #[inline]
    pub fn as_millis(self) -> u64 {
        self.0 / 1_000_000
    }

    #[inline]
    pub fn as_secs_f64(self) -> f64 {
        self.0 as f64 / 1_000_000_000.0
    }

    #[inline]
    pub fn saturating_add(self, duration: Duration) -> Self {
        SampleTimestamp(self.0.saturating_add(duration.as_nanos() as u64))
    }

    #[inline]
    pub fn saturating_sub(self, duration: Duration) -> Self {
        SampleTimestamp(self.0.saturating_sub(duration.as_nanos() as u64))
    }

    /// Elapsed time since an earlier timestamp, zero if `earlier` is newer
    #[inline]
    pub fn since(self, earlier: SampleTimestamp) -> Duration {
        Duration::from_nanos(self.0.saturating_sub(earlier.0))
    }
}

impl fmt::Debug for SampleTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t+{:.3}ms", self.0 as f64 / 1_000_000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversions() {
        let ts = SampleTimestamp::from_millis(12);
        assert_eq!(ts.as_nanos(), 12_000_000);
        assert_eq!(ts.as_micros(), 12_000);
        assert_eq!(ts.as_millis(), 12);
        assert_eq!(SampleTimestamp::from_micros(7).as_nanos(), 7_000);
    }

    #[test]
    fn test_ordering_and_since() {
        let t1 = SampleTimestamp::from_millis(10);
        let t2 = SampleTimestamp::from_millis(25);
        assert!(t1 < t2);
        assert_eq!(t2.since(t1), Duration::from_millis(15));
        assert_eq!(t1.since(t2), Duration::ZERO);
    }

    #[test]
    fn test_saturating_math() {
        let ts = SampleTimestamp::from_nanos(100);
        assert_eq!(ts.saturating_sub(Duration::from_nanos(200)), SampleTimestamp::ZERO);
        assert_eq!(
            ts.saturating_add(Duration::from_nanos(1)),
            SampleTimestamp::from_nanos(101)
        );
    }
}
