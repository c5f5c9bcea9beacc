//! Tracking sample model
//!
//! One sample is a timestamped snapshot of the three device motions
//! (head, left hand, right hand) plus a 26-joint skeleton per hand.
//! All counts are fixed; the remote host relies on them for wire
//! compatibility.

use crate::pose::Pose;
use crate::time::SampleTimestamp;

/// Number of tracked device poses per sample
pub const DEVICE_MOTION_COUNT: usize = 3;

/// Number of skeleton joints per hand
pub const HAND_JOINT_COUNT: usize = 26;

/// Fixed device motion roles
///
/// The role is positional, not tagged: index 0 is always the head,
/// 1 the left hand, 2 the right hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum DeviceRole {
    Head = 0,
    LeftHand = 1,
    RightHand = 2,
}

impl DeviceRole {
    /// All roles in wire order
    pub fn all() -> &'static [DeviceRole; DEVICE_MOTION_COUNT] {
        &[DeviceRole::Head, DeviceRole::LeftHand, DeviceRole::RightHand]
    }

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// The three tracked device poses, in fixed role order
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DeviceMotions {
    poses: [Pose; DEVICE_MOTION_COUNT],
}

impl DeviceMotions {
    pub fn new(head: Pose, left_hand: Pose, right_hand: Pose) -> Self {
        DeviceMotions {
            poses: [head, left_hand, right_hand],
        }
    }

    #[inline]
    pub fn head(&self) -> Pose {
        self.poses[DeviceRole::Head.index()]
    }

    #[inline]
    pub fn left_hand(&self) -> Pose {
        self.poses[DeviceRole::LeftHand.index()]
    }

    #[inline]
    pub fn right_hand(&self) -> Pose {
        self.poses[DeviceRole::RightHand.index()]
    }

    #[inline]
    pub fn get(&self, role: DeviceRole) -> Pose {
        self.poses[role.index()]
    }

    #[inline]
    pub fn as_array(&self) -> &[Pose; DEVICE_MOTION_COUNT] {
        &self.poses
    }

    #[inline]
    pub fn from_array(poses: [Pose; DEVICE_MOTION_COUNT]) -> Self {
        DeviceMotions { poses }
    }
}

/// The 26 hand joints, in XR_EXT_hand_tracking order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum HandJoint {
    Palm,
    Wrist,
    ThumbMetacarpal,
    ThumbProximal,
    ThumbDistal,
    ThumbTip,
    IndexMetacarpal,
    IndexProximal,
    IndexIntermediate,
    IndexDistal,
    IndexTip,
    MiddleMetacarpal,
    MiddleProximal,
    MiddleIntermediate,
    MiddleDistal,
    MiddleTip,
    RingMetacarpal,
    RingProximal,
    RingIntermediate,
    RingDistal,
    RingTip,
    LittleMetacarpal,
    LittleProximal,
    LittleIntermediate,
    LittleDistal,
    LittleTip,
}

impl HandJoint {
    /// All joints in wire order
    pub fn all() -> &'static [HandJoint; HAND_JOINT_COUNT] {
        &[
            HandJoint::Palm,
            HandJoint::Wrist,
            HandJoint::ThumbMetacarpal,
            HandJoint::ThumbProximal,
            HandJoint::ThumbDistal,
            HandJoint::ThumbTip,
            HandJoint::IndexMetacarpal,
            HandJoint::IndexProximal,
            HandJoint::IndexIntermediate,
            HandJoint::IndexDistal,
            HandJoint::IndexTip,
            HandJoint::MiddleMetacarpal,
            HandJoint::MiddleProximal,
            HandJoint::MiddleIntermediate,
            HandJoint::MiddleDistal,
            HandJoint::MiddleTip,
            HandJoint::RingMetacarpal,
            HandJoint::RingProximal,
            HandJoint::RingIntermediate,
            HandJoint::RingDistal,
            HandJoint::RingTip,
            HandJoint::LittleMetacarpal,
            HandJoint::LittleProximal,
            HandJoint::LittleIntermediate,
            HandJoint::LittleDistal,
            HandJoint::LittleTip,
        ]
    }

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Per-hand skeleton: one pose per joint
///
/// Joint poses are relative to a wrist-local frame; the frame convention
/// is the sampling producer's contract with the remote host. A producer
/// without hand tracking fills every joint with the sentinel pose.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HandSkeleton {
    joints: [Pose; HAND_JOINT_COUNT],
}

impl HandSkeleton {
    /// Skeleton with every joint set to the sentinel pose
    pub fn sentinel() -> Self {
        HandSkeleton {
            joints: [Pose::SENTINEL; HAND_JOINT_COUNT],
        }
    }

    #[inline]
    pub fn from_joints(joints: [Pose; HAND_JOINT_COUNT]) -> Self {
        HandSkeleton { joints }
    }

    #[inline]
    pub fn joints(&self) -> &[Pose; HAND_JOINT_COUNT] {
        &self.joints
    }

    #[inline]
    pub fn joint(&self, joint: HandJoint) -> Pose {
        self.joints[joint.index()]
    }

    /// True when no joint carries data
    pub fn is_sentinel(&self) -> bool {
        self.joints.iter().all(|j| j.is_sentinel())
    }
}

impl Default for HandSkeleton {
    fn default() -> Self {
        Self::sentinel()
    }
}

/// One timestamped tracking snapshot, the unit of transmission
#[derive(Clone, Debug, PartialEq)]
pub struct TrackingSample {
    /// Moment this pose is predicted/valid for, host nanoseconds
    pub target_timestamp_ns: SampleTimestamp,
    pub device_motions: DeviceMotions,
    pub left_hand_skeleton: HandSkeleton,
    pub right_hand_skeleton: HandSkeleton,
}

impl TrackingSample {
    /// Sample without hand-skeleton data (sentinel skeletons)
    pub fn new(target_timestamp_ns: SampleTimestamp, device_motions: DeviceMotions) -> Self {
        TrackingSample {
            target_timestamp_ns,
            device_motions,
            left_hand_skeleton: HandSkeleton::sentinel(),
            right_hand_skeleton: HandSkeleton::sentinel(),
        }
    }

    pub fn with_skeletons(
        target_timestamp_ns: SampleTimestamp,
        device_motions: DeviceMotions,
        left_hand_skeleton: HandSkeleton,
        right_hand_skeleton: HandSkeleton,
    ) -> Self {
        TrackingSample {
            target_timestamp_ns,
            device_motions,
            left_hand_skeleton,
            right_hand_skeleton,
        }
    }
}
