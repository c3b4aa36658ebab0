use crate::{Category, Domain, Fraction};
use std::cmp::Ordering;

// `-inf` < finite values < `inf` < `NaN`
//
// `NaN` has to go somewhere if `Fraction` is to be `Ord` (and sortable), and equality
// already says `NaN == NaN`. It's placed at the very end.
fn rank(category: Category) -> u8 {
    match category {
        Category::NegInf => 0,
        Category::Finite => 1,
        Category::PosInf => 2,
        Category::NaN => 3,
    }
}

pub fn cmp_fraction<Z: Domain>(lhs: &Fraction<Z>, rhs: &Fraction<Z>) -> Ordering {
    match (lhs.category(), rhs.category()) {
        // both denominators are positive, so cross-multiplying keeps the direction
        (Category::Finite, Category::Finite) => (lhs.numer.clone() * rhs.denom.clone()).cmp(
            &(rhs.numer.clone() * lhs.denom.clone())
        ),
        (lhs, rhs) => rank(lhs).cmp(&rank(rhs)),
    }
}

impl<Z: Domain> Ord for Fraction<Z> {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_fraction(self, other)
    }
}

impl<Z: Domain> PartialOrd for Fraction<Z> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(cmp_fraction(self, other))
    }
}

impl<Z: Domain> PartialEq<Z> for Fraction<Z> {
    fn eq(&self, other: &Z) -> bool {
        self.denom.is_one() && &self.numer == other
    }
}

impl<Z: Domain> PartialOrd<Z> for Fraction<Z> {
    fn partial_cmp(&self, other: &Z) -> Option<Ordering> {
        Some(cmp_fraction(self, &Fraction::from_integer(other.clone())))
    }
}
