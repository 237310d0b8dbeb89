//! Conversion between right-angle rotations and transforms.
//!
//! Angles are in degrees, positive = clockwise. Negative angles describe
//! anticlockwise rotations.

use super::Transform;
use crate::TransformError;

impl Transform {
    /// Return the transform for a clockwise rotation of `angle` degrees.
    ///
    /// The angle is reduced into `[0, 360)` first, so `-90` and `450` are
    /// accepted. Angles that are not a multiple of 90 return
    /// [`TransformError::InvalidRotation`] carrying the original angle.
    /// `Transform::default()` is the identity, so
    /// `from_rotation(angle).unwrap_or_default()` never fails.
    pub fn from_rotation(angle: i32) -> Result<Transform, TransformError> {
        match angle.rem_euclid(360) {
            0 => Ok(Transform::Identity),
            90 => Ok(Transform::Rot90),
            180 => Ok(Transform::Rot180),
            270 => Ok(Transform::Rot270),
            _ => {
                log::debug!("rejecting rotation of {angle} degrees");
                Err(TransformError::InvalidRotation(angle))
            }
        }
    }

    /// Same as [`Transform::from_rotation`], in `(transform, success)` form.
    ///
    /// On failure the transform is the identity, which is also the genuine
    /// answer for a zero rotation, so check the flag.
    pub fn from_rotation_or_identity(angle: i32) -> (Transform, bool) {
        match Self::from_rotation(angle) {
            Ok(t) => (t, true),
            Err(_) => (Transform::Identity, false),
        }
    }

    /// The clockwise angle of this transform, if it is a pure rotation.
    ///
    /// Returns `None` for the four mirrored transforms.
    pub const fn rotation_degrees(self) -> Option<i32> {
        match self {
            Transform::Identity => Some(0),
            Transform::Rot90 => Some(90),
            Transform::HVFlip => Some(180),
            Transform::Rot270 => Some(270),
            Transform::HFlip
            | Transform::VFlip
            | Transform::Transpose
            | Transform::Rot180Transpose => None,
        }
    }
}
