//! WASM bindings for building transforms.
//!
//! This module provides JavaScript entry points that construct a
//! `JsTransform` from a rotation angle, a name or a raw code list.

use crate::types::JsTransform;
use orient_core::Transform;
use wasm_bindgen::prelude::*;

/// Build the transform for a clockwise rotation.
///
/// # Arguments
///
/// * `angle_degrees` - Rotation angle in degrees (positive = clockwise).
///   Any multiple of 90 is accepted, including negative ones.
///
/// # Errors
///
/// Throws if the angle is not a multiple of 90 degrees.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const t = transform_from_rotation(-90);
/// console.log(t.name); // "rot270"
/// ```
#[wasm_bindgen]
pub fn transform_from_rotation(angle_degrees: i32) -> Result<JsTransform, JsValue> {
    Transform::from_rotation(angle_degrees)
        .map(JsTransform::from_core)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Parse a transform from its name (`rot0` and `rot180` are accepted too).
///
/// # Errors
///
/// Throws if the name is not recognized.
#[wasm_bindgen]
pub fn transform_from_name(name: &str) -> Result<JsTransform, JsValue> {
    name.parse::<Transform>()
        .map(JsTransform::from_core)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Names of all eight transforms, indexed by code.
#[wasm_bindgen]
pub fn transform_names() -> js_sys::Array {
    Transform::ALL
        .iter()
        .map(|t| JsValue::from_str(t.name()))
        .collect()
}

/// Compose a chain of transforms given in application order.
///
/// `compose_sequence([a, b, c])` applies `a` first and `c` last, which is
/// `c * b * a`.
#[wasm_bindgen]
pub fn compose_sequence(steps: Vec<JsTransform>) -> JsTransform {
    let composed = steps
        .into_iter()
        .fold(Transform::Identity, |acc, step| step.to_core() * acc);
    JsTransform::from_core(composed)
}
