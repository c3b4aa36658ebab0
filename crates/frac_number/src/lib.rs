#![deny(unused_imports)]
//! Extended rational numbers.
//!
//! `Fraction<Z>` is a rational number over an integer domain `Z`, extended with
//! `inf`, `-inf` and `NaN`. Every arithmetic operation is total: dividing by zero gives
//! a signed infinity (or `NaN` for `0 / 0`) instead of panicking.
//!
//! ```
//! use frac_number::Fraction;
//!
//! let p = Fraction::new(3, 4);
//! let zero = Fraction::zero();
//!
//! assert_eq!(p.clone() * Fraction::new(5, 6), Fraction::new(15, 24));
//! assert_eq!(p / zero, Fraction::pos_inf());
//! assert_eq!(Fraction::<i32>::nan(), Fraction::nan());
//! ```

mod cmp;
mod domain;
mod error;
mod fmt;
mod op;
mod parse;
mod round;


pub use cmp::cmp_fraction;
pub use domain::Domain;
pub use error::ParseFractionError;
pub use op::{
    add_fraction,
    div_fraction,
    mul_fraction,
    neg_fraction,
    sub_fraction,
};

// `denom` is always greater than or equal to 0. The sign lives in `numer`.
// If `denom` is positive, `gcd(numer, denom)` is 1, and zero is always `0 / 1`.
// If `denom` is 0, `numer` is 1 (pos-inf), -1 (neg-inf) or 0 (NaN).
#[derive(Clone, Eq, Hash, PartialEq)]
pub struct Fraction<Z> {
    numer: Z,
    denom: Z,
}

/// It's not stored anywhere: it's derived from the signs of `numer` and `denom`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Category {
    Finite,
    PosInf,
    NegInf,
    NaN,
}

impl<Z: Domain> Fraction<Z> {
    /// `Fraction::new(6, -4)` is `-3/2`, `Fraction::new(3, 0)` is `inf`, `Fraction::new(0, 0)` is `NaN`.
    pub fn new(numer: Z, denom: Z) -> Self {
        normalize(numer, denom)
    }

    pub fn from_integer(n: Z) -> Self {
        Fraction {
            numer: n,
            denom: Z::one(),
        }
    }

    pub fn zero() -> Self {
        Fraction {
            numer: Z::zero(),
            denom: Z::one(),
        }
    }

    pub fn one() -> Self {
        Fraction {
            numer: Z::one(),
            denom: Z::one(),
        }
    }

    pub fn pos_inf() -> Self {
        Fraction {
            numer: Z::one(),
            denom: Z::zero(),
        }
    }

    pub fn neg_inf() -> Self {
        Fraction {
            numer: -Z::one(),
            denom: Z::zero(),
        }
    }

    pub fn nan() -> Self {
        Fraction {
            numer: Z::zero(),
            denom: Z::zero(),
        }
    }

    pub fn numer(&self) -> &Z {
        &self.numer
    }

    pub fn denom(&self) -> &Z {
        &self.denom
    }

    /// (numer, denom)
    pub fn into_parts(self) -> (Z, Z) {
        (self.numer, self.denom)
    }

    pub fn category(&self) -> Category {
        if !self.denom.is_zero() {
            Category::Finite
        }

        else if self.numer.is_positive() {
            Category::PosInf
        }

        else if self.numer.is_negative() {
            Category::NegInf
        }

        else {
            Category::NaN
        }
    }

    pub fn is_finite(&self) -> bool {
        !self.denom.is_zero()
    }

    pub fn is_infinite(&self) -> bool {
        self.denom.is_zero() && !self.numer.is_zero()
    }

    pub fn is_nan(&self) -> bool {
        self.denom.is_zero() && self.numer.is_zero()
    }

    pub fn is_zero(&self) -> bool {
        self.numer.is_zero() && !self.denom.is_zero()
    }

    pub fn is_integer(&self) -> bool {
        self.denom.is_one()
    }

    /// `inf` is positive, `NaN` is neither positive nor negative.
    pub fn is_positive(&self) -> bool {
        self.numer.is_positive()
    }

    pub fn is_negative(&self) -> bool {
        self.numer.is_negative()
    }

    /// -1, 0 or 1. `NaN` is 0.
    pub fn signum(&self) -> i32 {
        if self.numer.is_positive() {
            1
        }

        else if self.numer.is_negative() {
            -1
        }

        else {
            0
        }
    }
}

/// Every constructor and every arithmetic result goes through this function.
pub(crate) fn normalize<Z: Domain>(numer: Z, denom: Z) -> Fraction<Z> {
    if denom.is_zero() {
        Fraction {
            numer: numer.signum(),
            denom,
        }
    }

    else if numer.is_zero() {
        Fraction {
            numer,
            denom: Z::one(),
        }
    }

    else {
        // `gcd` is always positive here because both operands are non-zero
        let r = numer.gcd(&denom);
        let (numer, denom) = if r.is_one() {
            (numer, denom)
        } else {
            (numer / r.clone(), denom / r)
        };

        if denom.is_negative() {
            Fraction {
                numer: -numer,
                denom: -denom,
            }
        }

        else {
            Fraction { numer, denom }
        }
    }
}

/// 1 -> `inf`, -1 -> `-inf`, 0 -> `NaN`
pub(crate) fn infinity_by_sign<Z: Domain>(sign: i32) -> Fraction<Z> {
    if sign > 0 {
        Fraction::pos_inf()
    }

    else if sign < 0 {
        Fraction::neg_inf()
    }

    else {
        Fraction::nan()
    }
}

impl<Z: Domain> Default for Fraction<Z> {
    fn default() -> Self {
        Fraction::zero()
    }
}

impl<Z: Domain> From<Z> for Fraction<Z> {
    fn from(n: Z) -> Self {
        Fraction::from_integer(n)
    }
}

impl<Z: Domain> From<(Z, Z)> for Fraction<Z> {
    fn from((numer, denom): (Z, Z)) -> Self {
        Fraction::new(numer, denom)
    }
}
