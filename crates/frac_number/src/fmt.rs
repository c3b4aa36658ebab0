use crate::{Category, Domain, Fraction};
use std::fmt;

impl<Z: Domain + fmt::Display> fmt::Display for Fraction<Z> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self.category() {
            Category::Finite if self.denom.is_one() => write!(fmt, "{}", self.numer),
            Category::Finite => write!(fmt, "{}/{}", self.numer, self.denom),
            Category::PosInf => write!(fmt, "inf"),
            Category::NegInf => write!(fmt, "-inf"),
            Category::NaN => write!(fmt, "NaN"),
        }
    }
}

// the raw canonical pair: `inf` is `Fraction(1/0)`
impl<Z: fmt::Debug> fmt::Debug for Fraction<Z> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(fmt, "Fraction({:?}/{:?})", self.numer, self.denom)
    }
}

impl<Z: Domain + fmt::Display> Fraction<Z> {
    /// Decimal expansion, truncated toward zero after `digits` digits.
    ///
    /// `Fraction::new(-1, 3).to_decimal_string(4)` is `"-0.3333"`.
    /// Non-finite values are rendered the same way as `Display`.
    pub fn to_decimal_string(&self, digits: u32) -> String {
        if !self.is_finite() {
            return self.to_string();
        }

        let ten = small_int::<Z>(10);
        let (integer, mut rem) = self.numer.abs().div_rem(&self.denom);
        let mut all_zero = integer.is_zero();
        let mut frac_digits = String::with_capacity(digits as usize);

        for _ in 0..digits {
            rem = rem * ten.clone();
            let (digit, r) = rem.div_rem(&self.denom);

            if !digit.is_zero() {
                all_zero = false;
            }

            frac_digits.push_str(&digit.to_string());
            rem = r;
        }

        // `-1/1000` with 2 digits is `0.00`, not `-0.00`
        let sign = if self.numer.is_negative() && !all_zero { "-" } else { "" };

        if digits == 0 {
            format!("{sign}{integer}")
        }

        else {
            format!("{sign}{integer}.{frac_digits}")
        }
    }
}

// `Domain` doesn't have `From<u8>`
pub(crate) fn small_int<Z: Domain>(n: u8) -> Z {
    (0..n).fold(Z::zero(), |acc, _| acc + Z::one())
}
