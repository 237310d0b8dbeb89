//! Group composition and inversion.

use std::ops::{Mul, MulAssign, Neg};

use super::Transform;

impl Transform {
    /// Compose two transforms: `first` is applied, then `self`.
    ///
    /// Flips commute with each other but not with a transpose. When `first`
    /// ends in a transpose, the flips of `self` act on swapped axes, so its
    /// horizontal and vertical flip bits are exchanged before the codes are
    /// combined. Plain XOR of the two codes is only correct otherwise.
    pub const fn compose(self, first: Transform) -> Transform {
        let mut reordered = self.bits();
        if first.has_transpose() {
            reordered = self.bits() & Transform::Transpose.bits();
            if self.has_hflip() {
                reordered |= Transform::VFlip.bits();
            }
            if self.has_vflip() {
                reordered |= Transform::HFlip.bits();
            }
        }
        Transform::from_bits(reordered ^ first.bits())
    }

    /// The transform `u` for which `self * u` and `u * self` are both the identity.
    ///
    /// Every transform is its own inverse except the two quarter turns.
    pub const fn inverse(self) -> Transform {
        match self {
            Transform::Rot90 => Transform::Rot270,
            Transform::Rot270 => Transform::Rot90,
            other => other,
        }
    }
}

/// `t1 * t0` applies `t0` first, then `t1`.
impl Mul for Transform {
    type Output = Transform;

    fn mul(self, rhs: Transform) -> Transform {
        self.compose(rhs)
    }
}

/// `t *= u` replaces `t` with `t * u`.
impl MulAssign for Transform {
    fn mul_assign(&mut self, rhs: Transform) {
        *self = self.compose(rhs);
    }
}

impl Neg for Transform {
    type Output = Transform;

    fn neg(self) -> Transform {
        self.inverse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transpose_after_hflip_is_rot270() {
        assert_eq!(Transform::Transpose * Transform::HFlip, Transform::Rot270);
    }

    #[test]
    fn test_hflip_after_transpose_is_rot90() {
        assert_eq!(Transform::HFlip * Transform::Transpose, Transform::Rot90);
    }

    #[test]
    fn test_composition_differs_from_xor() {
        let a = Transform::HFlip;
        let b = Transform::Transpose;
        assert_ne!(a * b, a ^ b);
        // Without a transpose on the right, composing is just XOR
        assert_eq!(Transform::Transpose * Transform::VFlip, Transform::Transpose ^ Transform::VFlip);
    }

    #[test]
    fn test_quarter_turns() {
        assert_eq!(Transform::Rot90 * Transform::Rot90, Transform::Rot180);
        assert_eq!(Transform::Rot90 * Transform::Rot180, Transform::Rot270);
        assert_eq!(Transform::Rot270 * Transform::Rot90, Transform::Identity);

        let mut t = Transform::Identity;
        for _ in 0..4 {
            t *= Transform::Rot90;
        }
        assert_eq!(t, Transform::Identity);
    }

    #[test]
    fn test_two_diagonal_reflections() {
        assert_eq!(
            Transform::Rot180Transpose * Transform::Transpose,
            Transform::Rot180
        );
    }

    #[test]
    fn test_inverse_table() {
        let expected = [
            Transform::Identity,
            Transform::HFlip,
            Transform::VFlip,
            Transform::HVFlip,
            Transform::Transpose,
            Transform::Rot90,
            Transform::Rot270,
            Transform::Rot180Transpose,
        ];
        for (t, inv) in Transform::ALL.into_iter().zip(expected) {
            assert_eq!(-t, inv, "inverse of {t:?}");
        }
    }

    #[test]
    fn test_inverse_law_exhaustive() {
        for t in Transform::ALL {
            assert_eq!(t * -t, Transform::Identity);
            assert_eq!(-t * t, Transform::Identity);
        }
    }

    #[test]
    fn test_identity_law_exhaustive() {
        for t in Transform::ALL {
            assert_eq!(t * Transform::Identity, t);
            assert_eq!(Transform::Identity * t, t);
        }
    }

    #[test]
    fn test_associativity_exhaustive() {
        for a in Transform::ALL {
            for b in Transform::ALL {
                for c in Transform::ALL {
                    assert_eq!((a * b) * c, a * (b * c), "{a:?} {b:?} {c:?}");
                }
            }
        }
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for picking any of the eight transforms.
    fn transform_strategy() -> impl Strategy<Value = Transform> {
        (0u8..8).prop_map(Transform::from_bits)
    }

    proptest! {
        /// Property: Composition stays inside the group.
        #[test]
        fn prop_closure(a in transform_strategy(), b in transform_strategy()) {
            prop_assert!(Transform::ALL.contains(&(a * b)));
        }

        /// Property: The identity is neutral on both sides.
        #[test]
        fn prop_identity(t in transform_strategy()) {
            prop_assert_eq!(t * Transform::Identity, t);
            prop_assert_eq!(Transform::Identity * t, t);
        }

        /// Property: The inverse cancels on both sides.
        #[test]
        fn prop_inverse(t in transform_strategy()) {
            prop_assert!((t * -t).is_identity());
            prop_assert!((-t * t).is_identity());
        }

        /// Property: Composition is associative.
        #[test]
        fn prop_associativity(
            a in transform_strategy(),
            b in transform_strategy(),
            c in transform_strategy(),
        ) {
            prop_assert_eq!((a * b) * c, a * (b * c));
        }

        /// Property: Inverting twice gives back the original.
        #[test]
        fn prop_double_inverse(t in transform_strategy()) {
            prop_assert_eq!(-(-t), t);
        }

        /// Property: The inverse of a product reverses the order.
        #[test]
        fn prop_inverse_of_product(a in transform_strategy(), b in transform_strategy()) {
            prop_assert_eq!(-(a * b), -b * -a);
        }

        /// Property: Transposing twice around any transform cancels.
        #[test]
        fn prop_conjugation_by_transpose(t in transform_strategy()) {
            let conj = Transform::Transpose * t * Transform::Transpose;
            prop_assert_eq!(conj.has_transpose(), t.has_transpose());
            prop_assert_eq!(conj.has_hflip(), t.has_vflip());
            prop_assert_eq!(conj.has_vflip(), t.has_hflip());
        }

        /// Property: Composition with a flip-only right operand is XOR.
        #[test]
        fn prop_flip_only_right_operand_is_xor(a in transform_strategy(), flips in 0u8..4) {
            let b = Transform::from_bits(flips);
            prop_assert_eq!(a * b, a ^ b);
        }
    }
}
