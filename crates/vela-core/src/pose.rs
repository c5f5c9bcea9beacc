//! Pose primitives for tracking data
//!
//! A pose is an orientation quaternion plus a position in meters. The
//! all-zero pose is the sentinel used when skeleton data is unavailable.

/// Orientation quaternion (x, y, z, w)
///
/// Producers are expected to submit unit quaternions; the pipeline does
/// not reject non-normalized input.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Quat {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Quat {
    pub const IDENTITY: Quat = Quat {
        x: 0.0,
        y: 0.0,
        z: 0.0,
        w: 1.0,
    };

    pub const ZERO: Quat = Quat {
        x: 0.0,
        y: 0.0,
        z: 0.0,
        w: 0.0,
    };

    #[inline]
    pub fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Quat { x, y, z, w }
    }

    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }

    #[inline]
    pub fn from_array(a: [f32; 4]) -> Self {
        Quat {
            x: a[0],
            y: a[1],
            z: a[2],
            w: a[3],
        }
    }

    /// Euclidean norm
    pub fn norm(self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w).sqrt()
    }

    /// True when the norm is within `tol` of 1.0
    pub fn is_normalized(self, tol: f32) -> bool {
        (self.norm() - 1.0).abs() <= tol
    }
}

/// 3D position in meters
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    #[inline]
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Vec3 { x, y, z }
    }

    #[inline]
    pub fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    #[inline]
    pub fn from_array(a: [f32; 3]) -> Self {
        Vec3 {
            x: a[0],
            y: a[1],
            z: a[2],
        }
    }
}

/// Rigid-body pose: orientation plus position, immutable once constructed
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pose {
    pub orientation: Quat,
    pub position: Vec3,
}

impl Pose {
    pub const IDENTITY: Pose = Pose {
        orientation: Quat::IDENTITY,
        position: Vec3::ZERO,
    };

    /// All-zero pose, the convention for unavailable skeleton joints.
    /// Note the zero (not identity) orientation.
    pub const SENTINEL: Pose = Pose {
        orientation: Quat::ZERO,
        position: Vec3::ZERO,
    };

    #[inline]
    pub fn new(orientation: Quat, position: Vec3) -> Self {
        Pose {
            orientation,
            position,
        }
    }

    #[inline]
    pub fn is_sentinel(self) -> bool {
        self == Pose::SENTINEL
    }
}
