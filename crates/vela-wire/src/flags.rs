//! Tracking frame flags

use vela_core::TrackingSample;

/// Per-frame flags (1 byte)
///
/// Advisory bits for the receiving host; the payload always carries the
/// full fixed-size skeleton arrays regardless of flag state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TrackingFlags(pub u8);

impl TrackingFlags {
    pub const NONE: TrackingFlags = TrackingFlags(0);

    // Flag bits
    pub const LEFT_SKELETON: u8 = 0b0000_0001;
    pub const RIGHT_SKELETON: u8 = 0b0000_0010;

    #[inline]
    pub fn new(bits: u8) -> Self {
        TrackingFlags(bits)
    }

    /// Flags advertising which skeletons carry live joint data
    pub fn for_sample(sample: &TrackingSample) -> Self {
        let mut flags = TrackingFlags::NONE;
        flags.set_left_skeleton(!sample.left_hand_skeleton.is_sentinel());
        flags.set_right_skeleton(!sample.right_hand_skeleton.is_sentinel());
        flags
    }

    #[inline]
    pub fn has_left_skeleton(self) -> bool {
        self.0 & Self::LEFT_SKELETON != 0
    }

    #[inline]
    pub fn has_right_skeleton(self) -> bool {
        self.0 & Self::RIGHT_SKELETON != 0
    }

    #[inline]
    pub fn set_left_skeleton(&mut self, value: bool) {
        if value {
            self.0 |= Self::LEFT_SKELETON;
        } else {
            self.0 &= !Self::LEFT_SKELETON;
        }
    }

    #[inline]
    pub fn set_right_skeleton(&mut self, value: bool) {
        if value {
            self.0 |= Self::RIGHT_SKELETON;
        } else {
            self.0 &= !Self::RIGHT_SKELETON;
        }
    }
}
