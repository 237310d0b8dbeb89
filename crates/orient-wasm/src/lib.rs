//! Orient WASM - WebAssembly bindings for Orient
//!
//! This crate provides WASM bindings to expose the orient-core transform
//! algebra to JavaScript/TypeScript applications.
//!
//! # Module Structure
//!
//! - `types` - `JsTransform`, the JavaScript wrapper around a transform
//! - `transform` - Building transforms from angles, names and sequences
//! - `orientation` - Conversions to and from EXIF orientation values
//! - `logger` - Forwards `log` records to the browser console
//!
//! # Usage
//!
//! ```typescript
//! import init, { transform_from_rotation, transform_between_orientations } from '@orient/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const sensorToUpright = transform_between_orientations(3, 1);
//! const requested = transform_from_rotation(90);
//! const t = requested.compose(sensorToUpright);
//! if (t.transpose) {
//!   // swap width and height of the output buffer
//! }
//! ```

use wasm_bindgen::prelude::*;

mod logger;
mod orientation;
mod transform;
mod types;

// Re-export public types
pub use logger::set_log_level;
pub use orientation::{exif_from_transform, transform_between_orientations, transform_from_exif};
pub use transform::{compose_sequence, transform_from_name, transform_from_rotation, transform_names};
pub use types::JsTransform;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    logger::install(logger::DEFAULT_LEVEL);
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
