#![deny(unused_imports)]
//! Expressions over [`Fraction`]s: `1/3 + 0.5`, `pow(2, -3)`, `recip(0)`, ...
//!
//! ```
//! use frac_eval::calc;
//! use frac_number::Fraction;
//! use num_bigint::BigInt;
//!
//! let n: Fraction<BigInt> = calc("1/3 + 0.5").unwrap();
//! assert_eq!(n.to_string(), "5/6");
//! ```

use frac_number::{Domain, Fraction};
use num_traits::ToPrimitive;
use std::fmt::Display;

mod error;
mod eval;
mod expr;
mod lex;
mod parse;
mod token;

#[cfg(test)]
mod tests;

pub use error::{EvalError, EvalErrorKind, ExpectedToken};
pub use eval::{MAX_EXPONENT, eval_expr};
pub use expr::{Expr, ExprKind, FUNCS, Func, InfixOp, PrefixOp};
pub use lex::lex;
pub use parse::{MAX_EXPR_DEPTH, parse};
pub use token::{Punct, Token, TokenKind};

/// Lexing reports every unexpected character at once. Parsing and
/// evaluation stop at the first error.
pub fn calc<Z: Domain + Display + ToPrimitive>(source: &str) -> Result<Fraction<Z>, Vec<EvalError>> {
    let expr = parse_expression(source)?;

    eval_expr(&expr).map_err(|e| vec![e])
}

pub fn parse_expression(source: &str) -> Result<Expr, Vec<EvalError>> {
    let tokens = lex(source)?;

    parse(&tokens, source.len()).map_err(|e| vec![e])
}
