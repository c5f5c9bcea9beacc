//! C boundary mirror types

use std::ffi::c_int;

use vela_core::{
    DeviceMotions, HandSkeleton, Pose, Quat, SampleTimestamp, TrackingSample, Vec3,
    DEVICE_MOTION_COUNT, HAND_JOINT_COUNT,
};

/// Boundary log level constants
pub const VELA_LOG_LEVEL_INFO: c_int = 0;
pub const VELA_LOG_LEVEL_WARN: c_int = 1;
pub const VELA_LOG_LEVEL_ERROR: c_int = 2;

/// Boundary pose: orientation x, y, z, w then position x, y, z
#[repr(C)]
#[derive(Clone, Copy, Debug, Default)]
pub struct VelaPose {
    pub orientation: [f32; 4],
    pub position: [f32; 3],
}

impl From<VelaPose> for Pose {
    fn from(pose: VelaPose) -> Self {
        Pose::new(
            Quat::from_array(pose.orientation),
            Vec3::from_array(pose.position),
        )
    }
}

impl From<Pose> for VelaPose {
    fn from(pose: Pose) -> Self {
        VelaPose {
            orientation: pose.orientation.to_array(),
            position: pose.position.to_array(),
        }
    }
}

/// Boundary tracking aggregate, layout-compatible with the published
/// header
///
/// Device motions are positional: head, left hand, right hand. Skeleton
/// joints are 7 floats each, orientation before position; a host without
/// hand tracking leaves them zeroed.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default)]
pub struct VelaTracking {
    pub target_timestamp_ns: u64,
    pub device_motions: [VelaPose; DEVICE_MOTION_COUNT],
    pub left_hand_skeleton: [[f32; 7]; HAND_JOINT_COUNT],
    pub right_hand_skeleton: [[f32; 7]; HAND_JOINT_COUNT],
}

fn skeleton_from_raw(raw: &[[f32; 7]; HAND_JOINT_COUNT]) -> HandSkeleton {
    let mut joints = [Pose::SENTINEL; HAND_JOINT_COUNT];
    for (joint, floats) in joints.iter_mut().zip(raw.iter()) {
        *joint = Pose::new(
            Quat::new(floats[0], floats[1], floats[2], floats[3]),
            Vec3::new(floats[4], floats[5], floats[6]),
        );
    }
    HandSkeleton::from_joints(joints)
}

impl From<VelaTracking> for TrackingSample {
    fn from(tracking: VelaTracking) -> Self {
        TrackingSample::with_skeletons(
            SampleTimestamp::from_nanos(tracking.target_timestamp_ns),
            DeviceMotions::new(
                tracking.device_motions[0].into(),
                tracking.device_motions[1].into(),
                tracking.device_motions[2].into(),
            ),
            skeleton_from_raw(&tracking.left_hand_skeleton),
            skeleton_from_raw(&tracking.right_hand_skeleton),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeroed_tracking_maps_to_sentinel_skeletons() {
        let sample: TrackingSample = VelaTracking::default().into();
        assert!(sample.left_hand_skeleton.is_sentinel());
        assert!(sample.right_hand_skeleton.is_sentinel());
        assert_eq!(sample.target_timestamp_ns, SampleTimestamp::ZERO);
    }

    #[test]
    fn test_device_motions_keep_their_roles() {
        let mut tracking = VelaTracking {
            target_timestamp_ns: 5,
            ..VelaTracking::default()
        };
        tracking.device_motions[0].position = [0.0, 1.6, 0.0];
        tracking.device_motions[2].position = [0.2, 1.1, -0.3];

        let sample: TrackingSample = tracking.into();
        assert_eq!(sample.device_motions.head().position, Vec3::new(0.0, 1.6, 0.0));
        assert_eq!(
            sample.device_motions.right_hand().position,
            Vec3::new(0.2, 1.1, -0.3)
        );
    }

    #[test]
    fn test_skeleton_floats_keep_their_lanes() {
        let mut tracking = VelaTracking::default();
        // Orientation w of the wrist, position z of the index tip.
        tracking.left_hand_skeleton[1][3] = 1.0;
        tracking.left_hand_skeleton[10][6] = -0.25;

        let sample: TrackingSample = tracking.into();
        let skeleton = &sample.left_hand_skeleton;
        assert!(!skeleton.is_sentinel());
        assert_eq!(skeleton.joints()[1].orientation.w, 1.0);
        assert_eq!(skeleton.joints()[10].position.z, -0.25);
    }
}
