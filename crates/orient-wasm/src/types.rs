//! WASM-compatible wrapper types for transforms.
//!
//! This module provides a JavaScript-friendly class that wraps the core
//! `Transform` type. All operations return new instances; a `JsTransform`
//! never changes after construction.

use orient_core::Transform;
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// A 2D plane transform wrapper for JavaScript.
///
/// Wraps one of the eight transforms. The `code` getter exposes the 3-bit
/// encoding (bit 0 = horizontal flip, bit 1 = vertical flip, bit 2 =
/// transpose) for callers that drive pixel operations from the bits.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JsTransform {
    inner: Transform,
}

/// Plain-object form of a transform, produced by `to_json`.
#[derive(Debug, Serialize)]
struct TransformDescriptor {
    code: u8,
    name: &'static str,
    hflip: bool,
    vflip: bool,
    transpose: bool,
    rotation: Option<i32>,
}

#[wasm_bindgen]
impl JsTransform {
    /// Create a transform from its 3-bit code.
    ///
    /// # Errors
    ///
    /// Throws if `code` is greater than 7.
    #[wasm_bindgen(constructor)]
    pub fn new(code: u8) -> Result<JsTransform, JsValue> {
        Transform::try_from(code)
            .map(JsTransform::from_core)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// The identity transform.
    pub fn identity() -> JsTransform {
        JsTransform::from_core(Transform::Identity)
    }

    /// Get the 3-bit code (0-7)
    #[wasm_bindgen(getter)]
    pub fn code(&self) -> u8 {
        self.inner.bits()
    }

    /// Get the canonical lowercase name
    #[wasm_bindgen(getter)]
    pub fn name(&self) -> String {
        self.inner.name().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn hflip(&self) -> bool {
        self.inner.has_hflip()
    }

    #[wasm_bindgen(getter)]
    pub fn vflip(&self) -> bool {
        self.inner.has_vflip()
    }

    #[wasm_bindgen(getter)]
    pub fn transpose(&self) -> bool {
        self.inner.has_transpose()
    }

    /// True only for the identity transform.
    #[wasm_bindgen(getter)]
    pub fn is_identity(&self) -> bool {
        self.inner.is_identity()
    }

    /// Check if applying this transform exchanges width and height
    pub fn swaps_dimensions(&self) -> bool {
        self.inner.swaps_dimensions()
    }

    /// Clockwise angle for the four pure rotations, `undefined` otherwise.
    pub fn rotation_degrees(&self) -> Option<i32> {
        self.inner.rotation_degrees()
    }

    /// Compose with another transform: `first` is applied, then `this`.
    ///
    /// # Example (TypeScript)
    ///
    /// ```typescript
    /// const t = transform_from_name('transpose').compose(transform_from_name('hflip'));
    /// console.log(t.name); // "rot270"
    /// ```
    pub fn compose(&self, first: &JsTransform) -> JsTransform {
        JsTransform::from_core(self.inner * first.inner)
    }

    /// The transform that undoes this one.
    pub fn inverse(&self) -> JsTransform {
        JsTransform::from_core(-self.inner)
    }

    /// Flip every bit of the code. This is not the inverse.
    pub fn complement(&self) -> JsTransform {
        JsTransform::from_core(!self.inner)
    }

    /// Bitwise AND of the two codes
    pub fn and(&self, other: &JsTransform) -> JsTransform {
        JsTransform::from_core(self.inner & other.inner)
    }

    /// Bitwise OR of the two codes
    pub fn or(&self, other: &JsTransform) -> JsTransform {
        JsTransform::from_core(self.inner | other.inner)
    }

    /// Bitwise XOR of the two codes. Not the same as `compose`.
    pub fn xor(&self, other: &JsTransform) -> JsTransform {
        JsTransform::from_core(self.inner ^ other.inner)
    }

    /// Compare two transforms by value
    pub fn equals(&self, other: &JsTransform) -> bool {
        self.inner == other.inner
    }

    /// Serialize to a plain object `{ code, name, hflip, vflip, transpose, rotation }`
    pub fn to_json(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.descriptor())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen(js_name = toString)]
    pub fn to_js_string(&self) -> String {
        self.inner.to_string()
    }
}

impl JsTransform {
    /// Wrap a core transform.
    pub(crate) fn from_core(inner: Transform) -> Self {
        Self { inner }
    }

    /// Unwrap to the core transform.
    pub(crate) fn to_core(self) -> Transform {
        self.inner
    }

    fn descriptor(&self) -> TransformDescriptor {
        TransformDescriptor {
            code: self.inner.bits(),
            name: self.inner.name(),
            hflip: self.inner.has_hflip(),
            vflip: self.inner.has_vflip(),
            transpose: self.inner.has_transpose(),
            rotation: self.inner.rotation_degrees(),
        }
    }
}
