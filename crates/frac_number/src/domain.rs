use num_integer::Integer;
use num_traits::Signed;

/// An integer domain that `Fraction` can be built on.
///
/// Fixed-width integers overflow the same way Rust's integer arithmetic does (it panics
/// in debug builds and wraps in release builds). Use `num_bigint::BigInt` if you don't
/// want to think about overflow at all.
///
/// `i64::MIN` (and the minimum values of the other fixed-width types) cannot be
/// negated, so a fraction whose numerator or denominator is the minimum value may overflow
/// while being normalized.
///
/// Methods of `Integer` and `Signed` are reachable through a `Z: Domain` bound, without
/// importing the traits.
///
/// ```
/// #![deny(unused_imports)]
/// use frac_number::Domain;
///
/// fn reduced_sign<Z: Domain>(n: Z, d: Z) -> (Z, bool) {
///     let r = n.gcd(&d);
///     (n / r, d.is_negative())
/// }
///
/// assert_eq!(reduced_sign(6, -4), (3, true));
/// ```
pub trait Domain: Clone + Integer + Signed {}

impl<T: Clone + Integer + Signed> Domain for T {}
