//! EXIF orientations and their relation to plane transforms.
//!
//! An orientation describes how an image is stored relative to upright. Each
//! one is reached by applying exactly one [`Transform`] to an upright image,
//! so orientations and transforms convert freely into each other.
//!
//! Pipelines mostly need the quotient: given the orientation a sensor is
//! mounted in and the orientation a caller asked for, `requested / mounted`
//! is the transform to apply to the sensor output.

use std::ops::{Div, Mul};

use serde::{Deserialize, Serialize};

use crate::{Transform, TransformError};

/// EXIF orientation values (1-8), named after the correction a viewer
/// applies to display the stored image upright.
///
/// The doc on each variant says how the stored image relates to upright.
/// See: https://exiftool.org/TagNames/EXIF.html
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum Orientation {
    /// Stored upright.
    #[default]
    Normal = 1,
    /// Stored mirrored left to right.
    FlipHorizontal = 2,
    /// Stored upside down.
    Rotate180 = 3,
    /// Stored mirrored top to bottom.
    FlipVertical = 4,
    /// Stored reflected about the main diagonal.
    Transpose = 5,
    /// Stored turned 90 degrees anticlockwise; shown with a clockwise quarter turn.
    Rotate90CW = 6,
    /// Stored reflected about the opposite diagonal.
    Transverse = 7,
    /// Stored turned 90 degrees clockwise; shown with an anticlockwise quarter turn.
    Rotate270CW = 8,
}

impl Orientation {
    /// Converts from an EXIF orientation tag value.
    pub fn from_exif(value: u8) -> Result<Self, TransformError> {
        match value {
            1 => Ok(Orientation::Normal),
            2 => Ok(Orientation::FlipHorizontal),
            3 => Ok(Orientation::Rotate180),
            4 => Ok(Orientation::FlipVertical),
            5 => Ok(Orientation::Transpose),
            6 => Ok(Orientation::Rotate90CW),
            7 => Ok(Orientation::Transverse),
            8 => Ok(Orientation::Rotate270CW),
            _ => Err(TransformError::InvalidOrientation(value)),
        }
    }

    /// The EXIF tag value of this orientation.
    #[inline]
    pub const fn exif_value(self) -> u8 {
        self as u8
    }

    /// Returns true if the stored width and height are exchanged relative to
    /// upright, i.e. the orientation's transform contains a transpose.
    #[inline]
    pub fn swaps_dimensions(self) -> bool {
        Transform::from(self).swaps_dimensions()
    }
}

impl From<Orientation> for Transform {
    fn from(o: Orientation) -> Self {
        match o {
            Orientation::Normal => Transform::Identity,
            Orientation::FlipHorizontal => Transform::HFlip,
            Orientation::Rotate180 => Transform::Rot180,
            Orientation::FlipVertical => Transform::VFlip,
            Orientation::Transpose => Transform::Transpose,
            Orientation::Rotate90CW => Transform::Rot270,
            Orientation::Transverse => Transform::Rot180Transpose,
            Orientation::Rotate270CW => Transform::Rot90,
        }
    }
}

impl From<Transform> for Orientation {
    fn from(t: Transform) -> Self {
        match t {
            Transform::Identity => Orientation::Normal,
            Transform::HFlip => Orientation::FlipHorizontal,
            Transform::VFlip => Orientation::FlipVertical,
            Transform::HVFlip => Orientation::Rotate180,
            Transform::Transpose => Orientation::Transpose,
            Transform::Rot270 => Orientation::Rotate90CW,
            Transform::Rot90 => Orientation::Rotate270CW,
            Transform::Rot180Transpose => Orientation::Transverse,
        }
    }
}

/// The orientation reached by applying `t` to an image already in this
/// orientation.
impl Mul<Transform> for Orientation {
    type Output = Orientation;

    fn mul(self, t: Transform) -> Orientation {
        Orientation::from(t * Transform::from(self))
    }
}

/// `o1 / o2` is the transform `t` with `o2 * t == o1`.
impl Div for Orientation {
    type Output = Transform;

    fn div(self, rhs: Orientation) -> Transform {
        Transform::from(self) * -Transform::from(rhs)
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for picking any EXIF orientation.
    fn orientation_strategy() -> impl Strategy<Value = Orientation> {
        (1u8..=8).prop_map(|v| Orientation::from_exif(v).unwrap())
    }

    /// Strategy for picking any of the eight transforms.
    fn transform_strategy() -> impl Strategy<Value = Transform> {
        (0u8..8).prop_map(Transform::from_bits)
    }

    proptest! {
        /// Property: `o2 * (o1 / o2)` lands on `o1`.
        #[test]
        fn prop_quotient_reaches_target(
            o1 in orientation_strategy(),
            o2 in orientation_strategy(),
        ) {
            prop_assert_eq!(o2 * (o1 / o2), o1);
        }

        /// Property: Applying two transforms in turn equals applying their composition.
        #[test]
        fn prop_multiplication_is_an_action(
            o in orientation_strategy(),
            a in transform_strategy(),
            b in transform_strategy(),
        ) {
            prop_assert_eq!((o * a) * b, o * (b * a));
        }

        /// Property: Quotients chain through an intermediate orientation.
        #[test]
        fn prop_quotients_chain(
            o1 in orientation_strategy(),
            o2 in orientation_strategy(),
            o3 in orientation_strategy(),
        ) {
            prop_assert_eq!((o1 / o2) * (o2 / o3), o1 / o3);
        }
    }
}
