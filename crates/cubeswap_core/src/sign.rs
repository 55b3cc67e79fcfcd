//! Sign enum.

use std::ops::{Mul, Neg};

/// Positive, negative, or zero.
///
/// Facelet grid coordinates are pairs of signs, so the middle of a face is
/// `(Zero, Zero)` and its corners are the pairs with no zero.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Sign {
    /// Negative.
    Neg = -1,
    /// Zero.
    #[default]
    Zero = 0,
    /// Positive.
    Pos = 1,
}
impl Neg for Sign {
    type Output = Sign;
    fn neg(self) -> Sign {
        match self {
            Sign::Neg => Sign::Pos,
            Sign::Zero => Sign::Zero,
            Sign::Pos => Sign::Neg,
        }
    }
}
impl Mul<Sign> for Sign {
    type Output = Sign;
    fn mul(self, rhs: Sign) -> Sign {
        match self {
            Sign::Neg => -rhs,
            Sign::Zero => Sign::Zero,
            Sign::Pos => rhs,
        }
    }
}
impl Sign {
    /// All signs, from negative to positive.
    pub const ALL: [Sign; 3] = [Sign::Neg, Sign::Zero, Sign::Pos];

    /// Returns the sign at position `index` in [`Sign::ALL`]. Indices past 2
    /// saturate to [`Sign::Pos`].
    pub const fn from_index(index: usize) -> Sign {
        match index {
            0 => Sign::Neg,
            1 => Sign::Zero,
            _ => Sign::Pos,
        }
    }
    /// Returns an integer representation of the sign (either -1, 0, or 1).
    pub const fn int(self) -> isize {
        match self {
            Sign::Neg => -1,
            Sign::Zero => 0,
            Sign::Pos => 1,
        }
    }
    /// Returns the position of the sign in [`Sign::ALL`] (either 0, 1, or 2).
    pub const fn index(self) -> usize {
        (self.int() + 1) as usize
    }
    /// Returns a floating-point representation of the sign (either -1.0, 0.0,
    /// or 1.0).
    pub const fn float(self) -> f32 {
        self.int() as f32
    }
    /// Returns true if `Sign::Zero` or false otherwise.
    pub const fn is_zero(self) -> bool {
        matches!(self, Sign::Zero)
    }
    /// Returns false if `Sign::Zero` or true otherwise.
    pub const fn is_nonzero(self) -> bool {
        !self.is_zero()
    }

    /// Returns an iterator over all signs.
    pub fn iter() -> impl Clone + Iterator<Item = Sign> {
        Self::ALL.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_index_roundtrip() {
        for sign in Sign::iter() {
            assert_eq!(Sign::from_index(sign.index()), sign);
        }
        assert_eq!(Sign::Neg * Sign::Neg, Sign::Pos);
        assert_eq!(-Sign::Zero, Sign::Zero);
    }
}
