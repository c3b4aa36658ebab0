use crate::{Domain, Fraction, normalize};
use crate::fmt::small_int;

// Rounding functions return integer-valued fractions.
// `inf`, `-inf` and `NaN` are returned as they are.
impl<Z: Domain> Fraction<Z> {
    pub fn floor(&self) -> Self {
        if !self.is_finite() {
            return self.clone();
        }

        Fraction::from_integer(self.numer.div_floor(&self.denom))
    }

    pub fn ceil(&self) -> Self {
        if !self.is_finite() {
            return self.clone();
        }

        // ceil(n / d) = -floor(-n / d)
        Fraction::from_integer(-(-self.numer.clone()).div_floor(&self.denom))
    }

    /// toward zero
    pub fn trunc(&self) -> Self {
        if !self.is_finite() {
            return self.clone();
        }

        Fraction::from_integer(self.numer.clone() / self.denom.clone())
    }

    /// Half-way cases are rounded away from zero: `5/2` is `3`, and `-5/2` is `-3`.
    pub fn round(&self) -> Self {
        if !self.is_finite() {
            return self.clone();
        }

        // round(|n| / d) = floor((2|n| + d) / 2d)
        let two = small_int::<Z>(2);
        let rounded = (two.clone() * self.numer.abs() + self.denom.clone()) / (two * self.denom.clone());

        if self.numer.is_negative() {
            Fraction::from_integer(-rounded)
        }

        else {
            Fraction::from_integer(rounded)
        }
    }

    /// `self - self.trunc()`, with the sign of `self`.
    pub fn fract(&self) -> Self {
        if !self.is_finite() {
            return Fraction::nan();
        }

        normalize(self.numer.clone() % self.denom.clone(), self.denom.clone())
    }
}
