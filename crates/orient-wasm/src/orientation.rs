//! WASM bindings for EXIF orientations.
//!
//! Orientations cross the boundary as their EXIF tag values (1-8).

use crate::types::JsTransform;
use orient_core::Orientation;
use wasm_bindgen::prelude::*;

fn orientation(value: u8) -> Result<Orientation, JsValue> {
    Orientation::from_exif(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Get the transform that takes an upright image to the given orientation.
///
/// # Errors
///
/// Throws if `exif_orientation` is outside 1-8.
#[wasm_bindgen]
pub fn transform_from_exif(exif_orientation: u8) -> Result<JsTransform, JsValue> {
    let o = orientation(exif_orientation)?;
    Ok(JsTransform::from_core(o.into()))
}

/// Get the EXIF orientation an upright image ends up in after `transform`.
#[wasm_bindgen]
pub fn exif_from_transform(transform: &JsTransform) -> u8 {
    Orientation::from(transform.to_core()).exif_value()
}

/// Get the transform that turns an image stored in `from` orientation into
/// one in `to` orientation.
///
/// # Arguments
///
/// * `from` - EXIF orientation of the source (e.g. how a sensor is mounted)
/// * `to` - EXIF orientation the caller wants
///
/// # Example (TypeScript)
///
/// ```typescript
/// // Sensor mounted upside down, output wanted upright
/// const t = transform_between_orientations(3, 1);
/// console.log(t.name); // "hvflip"
/// ```
#[wasm_bindgen]
pub fn transform_between_orientations(from: u8, to: u8) -> Result<JsTransform, JsValue> {
    let from = orientation(from)?;
    let to = orientation(to)?;
    Ok(JsTransform::from_core(to / from))
}

#[cfg(test)]
mod tests {
    use super::*;
    use orient_core::Transform;

    #[test]
    fn test_exif_from_transform() {
        assert_eq!(exif_from_transform(&JsTransform::identity()), 1);
        assert_eq!(
            exif_from_transform(&JsTransform::from_core(Transform::Rot90)),
            8
        );
        assert_eq!(
            exif_from_transform(&JsTransform::from_core(Transform::Rot270)),
            6
        );
        assert_eq!(
            exif_from_transform(&JsTransform::from_core(Transform::Rot180Transpose)),
            7
        );
    }
}
