//! Tracking frame encoding
//!
//! A tracking frame is fixed-size, little-endian throughout:
//! - Byte 0: Wire version
//! - Byte 1: Packet kind
//! - Byte 2: Tracking flags
//! - Byte 3: Reserved (zero)
//! - Bytes 4-11: Target timestamp (nanoseconds, LE)
//! - 3 device poses (head, left hand, right hand)
//! - 26 left-hand joint poses
//! - 26 right-hand joint poses
//!
//! Each pose is 7 f32: orientation x, y, z, w then position x, y, z.

use bytes::{Buf, BufMut};

use vela_core::{
    DeviceMotions, HandSkeleton, Pose, Quat, SampleTimestamp, TrackingSample, Vec3, VelaError,
    VelaResult, DEVICE_MOTION_COUNT, HAND_JOINT_COUNT,
};

use crate::flags::TrackingFlags;

/// Current wire protocol version
pub const WIRE_VERSION: u8 = 1;

/// Fixed frame header size in bytes
pub const TRACKING_HEADER_SIZE: usize = 4;

/// Serialized pose size in bytes (7 f32)
pub const POSE_WIRE_SIZE: usize = 28;

/// Total tracking frame size in bytes
pub const TRACKING_FRAME_SIZE: usize =
    TRACKING_HEADER_SIZE + 8 + POSE_WIRE_SIZE * (DEVICE_MOTION_COUNT + 2 * HAND_JOINT_COUNT);

/// Packet kind identifiers
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum PacketKind {
    Tracking = 0x01,
}

impl PacketKind {
    pub fn from_byte(b: u8) -> Option<Self> {
        match b {
            0x01 => Some(PacketKind::Tracking),
            _ => None,
        }
    }

    #[inline]
    pub fn to_byte(self) -> u8 {
        self as u8
    }
}

fn put_pose(buf: &mut Vec<u8>, pose: &Pose) {
    buf.put_f32_le(pose.orientation.x);
    buf.put_f32_le(pose.orientation.y);
    buf.put_f32_le(pose.orientation.z);
    buf.put_f32_le(pose.orientation.w);
    buf.put_f32_le(pose.position.x);
    buf.put_f32_le(pose.position.y);
    buf.put_f32_le(pose.position.z);
}

fn get_pose(buf: &mut &[u8]) -> Pose {
    let orientation = Quat::new(
        buf.get_f32_le(),
        buf.get_f32_le(),
        buf.get_f32_le(),
        buf.get_f32_le(),
    );
    let position = Vec3::new(buf.get_f32_le(), buf.get_f32_le(), buf.get_f32_le());
    Pose::new(orientation, position)
}

/// Encode a tracking sample into one wire frame
pub fn encode_tracking(sample: &TrackingSample) -> Vec<u8> {
    let mut buf = Vec::with_capacity(TRACKING_FRAME_SIZE);

    buf.put_u8(WIRE_VERSION);
    buf.put_u8(PacketKind::Tracking.to_byte());
    buf.put_u8(TrackingFlags::for_sample(sample).0);
    buf.put_u8(0);
    buf.put_u64_le(sample.target_timestamp_ns.as_nanos());

    for pose in sample.device_motions.as_array() {
        put_pose(&mut buf, pose);
    }
    for joint in sample.left_hand_skeleton.joints() {
        put_pose(&mut buf, joint);
    }
    for joint in sample.right_hand_skeleton.joints() {
        put_pose(&mut buf, joint);
    }

    debug_assert_eq!(buf.len(), TRACKING_FRAME_SIZE);
    buf
}

/// Decode one wire frame back into a tracking sample
///
/// The frame must be exactly [`TRACKING_FRAME_SIZE`] bytes; datagram
/// transports deliver frames whole or not at all.
pub fn decode_tracking(frame: &[u8]) -> VelaResult<TrackingSample> {
    if frame.len() < TRACKING_FRAME_SIZE {
        return Err(VelaError::BufferTooShort {
            expected: TRACKING_FRAME_SIZE,
            actual: frame.len(),
        });
    }
    if frame.len() > TRACKING_FRAME_SIZE {
        return Err(VelaError::InvalidWireFormat(format!(
            "trailing bytes: frame is {}, expected {}",
            frame.len(),
            TRACKING_FRAME_SIZE
        )));
    }

    if frame[0] != WIRE_VERSION {
        return Err(VelaError::UnsupportedWireVersion(frame[0]));
    }
    PacketKind::from_byte(frame[1]).ok_or(VelaError::UnknownPacketKind(frame[1]))?;
    // Byte 2 carries advisory flags; byte 3 is reserved. Neither affects
    // payload layout.

    let mut buf = &frame[TRACKING_HEADER_SIZE..];
    let target_timestamp_ns = SampleTimestamp::from_nanos(buf.get_u64_le());

    let mut motions = [Pose::SENTINEL; DEVICE_MOTION_COUNT];
    for pose in motions.iter_mut() {
        *pose = get_pose(&mut buf);
    }

    let mut left = [Pose::SENTINEL; HAND_JOINT_COUNT];
    for joint in left.iter_mut() {
        *joint = get_pose(&mut buf);
    }

    let mut right = [Pose::SENTINEL; HAND_JOINT_COUNT];
    for joint in right.iter_mut() {
        *joint = get_pose(&mut buf);
    }

    Ok(TrackingSample::with_skeletons(
        target_timestamp_ns,
        DeviceMotions::from_array(motions),
        HandSkeleton::from_joints(left),
        HandSkeleton::from_joints(right),
    ))
}

/// Read the advisory flags of an encoded frame without decoding it
pub fn peek_flags(frame: &[u8]) -> VelaResult<TrackingFlags> {
    if frame.len() < TRACKING_HEADER_SIZE {
        return Err(VelaError::BufferTooShort {
            expected: TRACKING_HEADER_SIZE,
            actual: frame.len(),
        });
    }
    Ok(TrackingFlags::new(frame[2]))
}
