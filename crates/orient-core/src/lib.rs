//! Orient Core - 2D plane transform algebra
//!
//! This crate describes how an image plane must be flipped, rotated or
//! transposed to get from one orientation to another. It only manipulates
//! the descriptor; applying a transform to pixel data is left to callers.
//!
//! The eight transforms form the dihedral group of order 8 (the symmetries
//! of a rectangle). See [`Transform`] for the encoding and operators, and
//! [`Orientation`] for the bridge to EXIF orientation tags.
//!
//! # Examples
//!
//! ```ignore
//! use orient_core::{Orientation, Transform};
//!
//! let sensor = Orientation::Rotate180;
//! let wanted = Transform::from_rotation(90)?;
//! let t = (Orientation::Normal * wanted) / sensor;
//! if t.has_transpose() {
//!     // swap width and height of the output buffer
//! }
//! log::info!("applying {t}");
//! ```

mod error;
pub mod orientation;
pub mod transform;

pub use error::TransformError;
pub use orientation::Orientation;
pub use transform::Transform;
