//! Null adapter for unconnected sessions

use vela_core::TrackingSample;

use crate::sink::{SendOutcome, TrackingSink};

/// Stand-in sink for a session without an established connection
///
/// Always reports `Closed`: the pipeline drains and drops samples until
/// an external layer brings up a real transport and restarts the session
/// with it.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl TrackingSink for NullSink {
    fn try_send(&mut self, _sample: &TrackingSample) -> SendOutcome {
        SendOutcome::Closed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vela_core::{DeviceMotions, SampleTimestamp};

    #[test]
    fn test_always_closed() {
        let sample = TrackingSample::new(SampleTimestamp::ZERO, DeviceMotions::default());
        let mut sink = NullSink;
        assert_eq!(sink.try_send(&sample), SendOutcome::Closed);
        assert_eq!(sink.try_send(&sample), SendOutcome::Closed);
    }
}
