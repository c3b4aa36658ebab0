use crate::{Domain, Fraction, ParseFractionError};
use std::str::FromStr;

/// Accepts `3`, `-3/4`, `6 / -8`, `inf`, `-inf` and `NaN`. Non-canonical pairs are normalized,
/// so `"6/-8".parse()` gives `-3/4`, and `"1/0"` gives `inf`.
impl<Z: Domain> FromStr for Fraction<Z> {
    type Err = ParseFractionError;

    fn from_str(s: &str) -> Result<Self, ParseFractionError> {
        let s = s.trim();

        match s {
            "" => Err(ParseFractionError::Empty),
            "inf" | "+inf" => Ok(Fraction::pos_inf()),
            "-inf" => Ok(Fraction::neg_inf()),
            "NaN" | "nan" => Ok(Fraction::nan()),
            _ => match s.split_once('/') {
                Some((numer, denom)) => Ok(Fraction::new(
                    parse_integer(numer.trim())?,
                    parse_integer(denom.trim())?,
                )),
                None => Ok(Fraction::from_integer(parse_integer(s)?)),
            },
        }
    }
}

// `from_str_radix` of each domain has its own opinion on signs and separators,
// so the syntax is checked here: an optional sign, then at least one ascii digit.
fn parse_integer<Z: Domain>(s: &str) -> Result<Z, ParseFractionError> {
    let (is_neg, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseFractionError::InvalidInteger(s.to_string()));
    }

    match Z::from_str_radix(digits, 10) {
        Ok(n) if is_neg => Ok(-n),
        Ok(n) => Ok(n),

        // overflow of a fixed-width domain
        Err(_) => Err(ParseFractionError::InvalidInteger(s.to_string())),
    }
}
