//! Error type shared by the transform and orientation modules.

use thiserror::Error;

/// Error types for building transforms and orientations from raw values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    /// A raw code outside 0-7 was coerced into a transform.
    #[error("Invalid transform code: {0}")]
    InvalidCode(u8),

    /// The rotation angle is not a multiple of 90 degrees.
    #[error("Rotation of {0} degrees is not a multiple of 90")]
    InvalidRotation(i32),

    /// The string does not name any transform.
    #[error("Unknown transform name: {0:?}")]
    UnknownName(String),

    /// EXIF orientation values run from 1 to 8.
    #[error("Invalid EXIF orientation: {0}")]
    InvalidOrientation(u8),
}
