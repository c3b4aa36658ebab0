use super::{add_fraction, div_fraction, mul_fraction, neg_fraction, sub_fraction};
use crate::{Domain, Fraction};
use num_bigint::BigInt;
use std::iter::{Product, Sum};
use std::ops::{
    Add,
    AddAssign,
    Div,
    DivAssign,
    Mul,
    MulAssign,
    Neg,
    Sub,
    SubAssign,
};

// every combination of owned and borrowed operands, and `Fraction<Z> op Z`
macro_rules! impl_binop {
    ($trait: ident, $method: ident, $func: ident) => {
        impl<Z: Domain> $trait<Fraction<Z>> for Fraction<Z> {
            type Output = Fraction<Z>;

            fn $method(self, rhs: Fraction<Z>) -> Fraction<Z> {
                $func(&self, &rhs)
            }
        }

        impl<'a, Z: Domain> $trait<&'a Fraction<Z>> for Fraction<Z> {
            type Output = Fraction<Z>;

            fn $method(self, rhs: &'a Fraction<Z>) -> Fraction<Z> {
                $func(&self, rhs)
            }
        }

        impl<'a, Z: Domain> $trait<Fraction<Z>> for &'a Fraction<Z> {
            type Output = Fraction<Z>;

            fn $method(self, rhs: Fraction<Z>) -> Fraction<Z> {
                $func(self, &rhs)
            }
        }

        impl<'a, 'b, Z: Domain> $trait<&'b Fraction<Z>> for &'a Fraction<Z> {
            type Output = Fraction<Z>;

            fn $method(self, rhs: &'b Fraction<Z>) -> Fraction<Z> {
                $func(self, rhs)
            }
        }

        impl<Z: Domain> $trait<Z> for Fraction<Z> {
            type Output = Fraction<Z>;

            fn $method(self, rhs: Z) -> Fraction<Z> {
                $func(&self, &Fraction::from_integer(rhs))
            }
        }

        impl<'a, Z: Domain> $trait<Z> for &'a Fraction<Z> {
            type Output = Fraction<Z>;

            fn $method(self, rhs: Z) -> Fraction<Z> {
                $func(self, &Fraction::from_integer(rhs))
            }
        }
    };
}

macro_rules! impl_assign_op {
    ($trait: ident, $method: ident, $func: ident) => {
        impl<Z: Domain> $trait<Fraction<Z>> for Fraction<Z> {
            fn $method(&mut self, rhs: Fraction<Z>) {
                *self = $func(self, &rhs);
            }
        }

        impl<'a, Z: Domain> $trait<&'a Fraction<Z>> for Fraction<Z> {
            fn $method(&mut self, rhs: &'a Fraction<Z>) {
                *self = $func(self, rhs);
            }
        }

        impl<Z: Domain> $trait<Z> for Fraction<Z> {
            fn $method(&mut self, rhs: Z) {
                *self = $func(self, &Fraction::from_integer(rhs));
            }
        }
    };
}

// `Z op Fraction<Z>` cannot be implemented generically (`Z` would be an uncovered
// type parameter), so it's implemented for each integer type.
macro_rules! impl_integer_lhs {
    ($trait: ident, $method: ident, $func: ident, [$($int: ty),*]) => {
        $(
            impl $trait<Fraction<$int>> for $int {
                type Output = Fraction<$int>;

                fn $method(self, rhs: Fraction<$int>) -> Fraction<$int> {
                    $func(&Fraction::from_integer(self), &rhs)
                }
            }

            impl<'a> $trait<&'a Fraction<$int>> for $int {
                type Output = Fraction<$int>;

                fn $method(self, rhs: &'a Fraction<$int>) -> Fraction<$int> {
                    $func(&Fraction::from_integer(self), rhs)
                }
            }
        )*
    };
}

impl_binop!(Add, add, add_fraction);
impl_binop!(Sub, sub, sub_fraction);
impl_binop!(Mul, mul, mul_fraction);
impl_binop!(Div, div, div_fraction);

impl_assign_op!(AddAssign, add_assign, add_fraction);
impl_assign_op!(SubAssign, sub_assign, sub_fraction);
impl_assign_op!(MulAssign, mul_assign, mul_fraction);
impl_assign_op!(DivAssign, div_assign, div_fraction);

impl_integer_lhs!(Add, add, add_fraction, [i8, i16, i32, i64, i128, isize, BigInt]);
impl_integer_lhs!(Sub, sub, sub_fraction, [i8, i16, i32, i64, i128, isize, BigInt]);
impl_integer_lhs!(Mul, mul, mul_fraction, [i8, i16, i32, i64, i128, isize, BigInt]);
impl_integer_lhs!(Div, div, div_fraction, [i8, i16, i32, i64, i128, isize, BigInt]);

impl<Z: Domain> Neg for Fraction<Z> {
    type Output = Fraction<Z>;

    fn neg(self) -> Fraction<Z> {
        neg_fraction(&self)
    }
}

impl<'a, Z: Domain> Neg for &'a Fraction<Z> {
    type Output = Fraction<Z>;

    fn neg(self) -> Fraction<Z> {
        neg_fraction(self)
    }
}

impl<Z: Domain> Sum for Fraction<Z> {
    fn sum<I: Iterator<Item = Fraction<Z>>>(iter: I) -> Self {
        iter.fold(Fraction::zero(), |acc, n| add_fraction(&acc, &n))
    }
}

impl<'a, Z: Domain + 'a> Sum<&'a Fraction<Z>> for Fraction<Z> {
    fn sum<I: Iterator<Item = &'a Fraction<Z>>>(iter: I) -> Self {
        iter.fold(Fraction::zero(), |acc, n| add_fraction(&acc, n))
    }
}

impl<Z: Domain> Product for Fraction<Z> {
    fn product<I: Iterator<Item = Fraction<Z>>>(iter: I) -> Self {
        iter.fold(Fraction::one(), |acc, n| mul_fraction(&acc, &n))
    }
}

impl<'a, Z: Domain + 'a> Product<&'a Fraction<Z>> for Fraction<Z> {
    fn product<I: Iterator<Item = &'a Fraction<Z>>>(iter: I) -> Self {
        iter.fold(Fraction::one(), |acc, n| mul_fraction(&acc, n))
    }
}
