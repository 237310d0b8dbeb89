//! The eight 2D plane transforms and their bit-level encoding.
//!
//! Every transform is built out of three basic operations, each owning one
//! bit of a 3-bit code:
//!
//! - bit 0 - horizontal flip (mirror about the vertical axis)
//! - bit 1 - vertical flip (mirror about the horizontal axis)
//! - bit 2 - transpose (reflection about the main diagonal)
//!
//! The basic operations are applied in a fixed order: the two flips first
//! (they commute with each other) and the transpose last.
//!
//! # Operators
//!
//! - `&`, `|`, `^` (and their assigning forms) work directly on the bits.
//!   They do not respect the group structure.
//! - `!` complements the bits. This is NOT the inverse.
//! - `*` composes: `t1 * t0` applies `t0` first, then `t1`.
//! - unary `-` inverts.
//!
//! # Example
//!
//! ```text
//!              A-B                 B-A                     B-D
//! Input image  | |   -> HFlip ->   | |   -> Transpose ->   | |   = Rot270
//!              C-D                 D-C                     A-C
//! ```

mod compose;
mod name;
mod rotation;

use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

use crate::TransformError;

const HFLIP_BIT: u8 = 1 << 0;
const VFLIP_BIT: u8 = 1 << 1;
const TRANSPOSE_BIT: u8 = 1 << 2;
const CODE_MASK: u8 = HFLIP_BIT | VFLIP_BIT | TRANSPOSE_BIT;

/// A 2D plane transform: one of the eight symmetries of a rectangle.
///
/// The discriminant is the 3-bit code described in the module docs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Transform {
    /// No change.
    #[default]
    Identity = 0,
    /// Horizontal flip.
    HFlip = 1,
    /// Vertical flip.
    VFlip = 2,
    /// Both flips, the same as a 180 degree rotation.
    HVFlip = 3,
    /// Reflection about the main diagonal.
    Transpose = 4,
    /// Rotation by 270 degrees clockwise (transpose + horizontal flip).
    Rot270 = 5,
    /// Rotation by 90 degrees clockwise (transpose + vertical flip).
    Rot90 = 6,
    /// Reflection about the opposite diagonal.
    Rot180Transpose = 7,
}

impl Transform {
    /// Synonym for [`Transform::Identity`].
    #[allow(non_upper_case_globals)]
    pub const Rot0: Transform = Transform::Identity;

    /// Synonym for [`Transform::HVFlip`].
    #[allow(non_upper_case_globals)]
    pub const Rot180: Transform = Transform::HVFlip;

    /// All eight transforms in code order.
    pub const ALL: [Transform; 8] = [
        Transform::Identity,
        Transform::HFlip,
        Transform::VFlip,
        Transform::HVFlip,
        Transform::Transpose,
        Transform::Rot270,
        Transform::Rot90,
        Transform::Rot180Transpose,
    ];

    /// The 3-bit code of this transform.
    #[inline]
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Build a transform from the low three bits of `bits`.
    ///
    /// Higher bits are ignored, so this never fails. Use `TryFrom<u8>` to
    /// reject out-of-range codes instead.
    #[inline]
    pub const fn from_bits(bits: u8) -> Self {
        Self::ALL[(bits & CODE_MASK) as usize]
    }

    /// Returns true if the horizontal flip bit is set.
    #[inline]
    pub const fn has_hflip(self) -> bool {
        self.bits() & HFLIP_BIT != 0
    }

    /// Returns true if the vertical flip bit is set.
    #[inline]
    pub const fn has_vflip(self) -> bool {
        self.bits() & VFLIP_BIT != 0
    }

    /// Returns true if the transpose bit is set.
    #[inline]
    pub const fn has_transpose(self) -> bool {
        self.bits() & TRANSPOSE_BIT != 0
    }

    /// Returns true for the identity transform.
    #[inline]
    pub const fn is_identity(self) -> bool {
        self.bits() == 0
    }

    /// Returns true if applying this transform exchanges width and height.
    #[inline]
    pub const fn swaps_dimensions(self) -> bool {
        self.has_transpose()
    }
}

impl TryFrom<u8> for Transform {
    type Error = TransformError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value & !CODE_MASK != 0 {
            return Err(TransformError::InvalidCode(value));
        }
        Ok(Self::from_bits(value))
    }
}

impl From<Transform> for u8 {
    fn from(t: Transform) -> Self {
        t.bits()
    }
}

impl BitAnd for Transform {
    type Output = Transform;

    fn bitand(self, rhs: Transform) -> Transform {
        Transform::from_bits(self.bits() & rhs.bits())
    }
}

impl BitOr for Transform {
    type Output = Transform;

    fn bitor(self, rhs: Transform) -> Transform {
        Transform::from_bits(self.bits() | rhs.bits())
    }
}

impl BitXor for Transform {
    type Output = Transform;

    fn bitxor(self, rhs: Transform) -> Transform {
        Transform::from_bits(self.bits() ^ rhs.bits())
    }
}

impl BitAndAssign for Transform {
    fn bitand_assign(&mut self, rhs: Transform) {
        *self = *self & rhs;
    }
}

impl BitOrAssign for Transform {
    fn bitor_assign(&mut self, rhs: Transform) {
        *self = *self | rhs;
    }
}

impl BitXorAssign for Transform {
    fn bitxor_assign(&mut self, rhs: Transform) {
        *self = *self ^ rhs;
    }
}

/// Bitwise complement of the three bits. Use unary `-` for the inverse.
///
/// To test whether a transform is trivial, call [`Transform::is_identity`].
impl Not for Transform {
    type Output = Transform;

    fn not(self) -> Transform {
        Transform::from_bits(!self.bits())
    }
}
