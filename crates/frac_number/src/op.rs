use crate::{Category, Domain, Fraction, infinity_by_sign, normalize};
use log::trace;

mod impls;

pub fn add_fraction<Z: Domain>(lhs: &Fraction<Z>, rhs: &Fraction<Z>) -> Fraction<Z> {
    match (lhs.category(), rhs.category()) {
        (Category::NaN, _)
        | (_, Category::NaN) => Fraction::nan(),
        (Category::Finite, Category::Finite) => {
            // a/b + c/d = (a * (d/r) + c * (b/r)) / (b/r * d) where r = gcd(b, d)
            let r = lhs.denom.gcd(&rhs.denom);
            let lhs_scale = rhs.denom.clone() / r.clone();
            let rhs_scale = lhs.denom.clone() / r;

            normalize(
                lhs.numer.clone() * lhs_scale.clone() + rhs.numer.clone() * rhs_scale,
                lhs.denom.clone() * lhs_scale,
            )
        },
        (Category::Finite, _) => rhs.clone(),
        (_, Category::Finite) => lhs.clone(),
        (lhs_category, rhs_category) => {
            if lhs_category == rhs_category {
                lhs.clone()
            }

            else {
                trace!("`inf + -inf` resulted in NaN");
                Fraction::nan()
            }
        },
    }
}

pub fn sub_fraction<Z: Domain>(lhs: &Fraction<Z>, rhs: &Fraction<Z>) -> Fraction<Z> {
    add_fraction(lhs, &neg_fraction(rhs))
}

pub fn mul_fraction<Z: Domain>(lhs: &Fraction<Z>, rhs: &Fraction<Z>) -> Fraction<Z> {
    match (lhs.category(), rhs.category()) {
        (Category::NaN, _)
        | (_, Category::NaN) => Fraction::nan(),
        (Category::Finite, Category::Finite) => {
            // reduce crosswise first, so that the products don't grow more than they have to
            // denominators are positive, so neither gcd can be 0
            let r1 = lhs.numer.gcd(&rhs.denom);
            let r2 = rhs.numer.gcd(&lhs.denom);

            normalize(
                (lhs.numer.clone() / r1.clone()) * (rhs.numer.clone() / r2.clone()),
                (lhs.denom.clone() / r2) * (rhs.denom.clone() / r1),
            )
        },
        _ => {
            let sign = lhs.signum() * rhs.signum();

            if sign == 0 {
                trace!("`0 * inf` resulted in NaN");
            }

            infinity_by_sign(sign)
        },
    }
}

pub fn div_fraction<Z: Domain>(lhs: &Fraction<Z>, rhs: &Fraction<Z>) -> Fraction<Z> {
    match (lhs.category(), rhs.category()) {
        (Category::NaN, _)
        | (_, Category::NaN) => Fraction::nan(),

        // division by zero: `x / 0` has the sign of `x`, `0 / 0` is NaN
        (_, Category::Finite) if rhs.numer.is_zero() => {
            if lhs.signum() == 0 {
                trace!("`0 / 0` resulted in NaN");
            }

            infinity_by_sign(lhs.signum())
        },
        (Category::Finite, Category::Finite) => {
            // a/b / c/d = (a * d) / (b * c), reduced crosswise
            // `c` is not 0 and `b` and `d` are positive, so neither gcd can be 0
            let r1 = lhs.numer.gcd(&rhs.numer);
            let r2 = lhs.denom.gcd(&rhs.denom);

            normalize(
                (lhs.numer.clone() / r1.clone()) * (rhs.denom.clone() / r2.clone()),
                (lhs.denom.clone() / r2) * (rhs.numer.clone() / r1),
            )
        },
        (Category::Finite, _) => Fraction::zero(),
        (_, Category::Finite) => infinity_by_sign(lhs.signum() * rhs.signum()),
        _ => {
            trace!("`inf / inf` resulted in NaN");
            Fraction::nan()
        },
    }
}

pub fn neg_fraction<Z: Domain>(n: &Fraction<Z>) -> Fraction<Z> {
    // negating a canonical pair keeps it canonical
    Fraction {
        numer: -n.numer.clone(),
        denom: n.denom.clone(),
    }
}

impl<Z: Domain> Fraction<Z> {
    /// `1 / self`. `0` becomes `inf`, `inf` and `-inf` become `0` and `NaN` stays `NaN`.
    pub fn recip(&self) -> Self {
        normalize(self.denom.clone(), self.numer.clone())
    }

    /// In-place version of [`Fraction::recip`].
    pub fn reciprocal(&mut self) {
        *self = self.recip();
    }

    pub fn abs(&self) -> Self {
        if self.numer.is_negative() {
            neg_fraction(self)
        }

        else {
            self.clone()
        }
    }

    /// `x.pow(0)` is 1 for every `x` except `NaN`.
    /// A negative exponent takes the reciprocal first, so `0.pow(-1)` is `inf`.
    pub fn pow(&self, exp: i32) -> Self {
        if self.is_nan() {
            return Fraction::nan();
        }

        if exp == 0 {
            return Fraction::one();
        }

        let base = if exp < 0 { self.recip() } else { self.clone() };
        let exp = exp.unsigned_abs() as usize;

        match base.category() {
            // `numer^k / denom^k` is still fully reduced, and `0^k / 1^k` is still `0 / 1`
            Category::Finite => Fraction {
                numer: num_traits::pow(base.numer, exp),
                denom: num_traits::pow(base.denom, exp),
            },
            Category::PosInf => base,
            Category::NegInf => if exp % 2 == 0 {
                Fraction::pos_inf()
            } else {
                base
            },
            Category::NaN => base,
        }
    }
}
