use crate::error::EvalError;
use crate::expr::{Expr, ExprKind, Func, InfixOp, PrefixOp};
use frac_error::SpanRange;
use frac_number::{Domain, Fraction};
use log::trace;
use num_traits::ToPrimitive;
use std::fmt::Display;

/// `pow(2, k)` with a large `k` is too large to compute even with `BigInt`.
pub const MAX_EXPONENT: i32 = 65536;

/// Arithmetic itself is total: the only errors are literals that don't fit
/// in `Z` and invalid exponents.
pub fn eval_expr<Z: Domain + Display + ToPrimitive>(expr: &Expr) -> Result<Fraction<Z>, EvalError> {
    let result = match &expr.kind {
        ExprKind::Number(n) => parse_literal(n).ok_or_else(
            || EvalError::integer_overflow(n, expr.span)
        )?,
        ExprKind::Inf => Fraction::pos_inf(),
        ExprKind::NaN => Fraction::nan(),
        ExprKind::PrefixOp(op, operand) => {
            let operand = eval_expr::<Z>(operand)?;

            match op {
                PrefixOp::Neg => -operand,
                PrefixOp::Plus => operand,
            }
        },
        ExprKind::InfixOp(op, lhs, rhs) => {
            let lhs = eval_expr::<Z>(lhs)?;
            let rhs = eval_expr::<Z>(rhs)?;

            match op {
                InfixOp::Add => lhs + rhs,
                InfixOp::Sub => lhs - rhs,
                InfixOp::Mul => lhs * rhs,
                InfixOp::Div => lhs / rhs,
            }
        },
        ExprKind::Call(func, args) => {
            let mut values = Vec::with_capacity(args.len());

            for arg in args.iter() {
                values.push((eval_expr::<Z>(arg)?, arg.span));
            }

            call(*func, &values)?
        },
    };

    trace!("frac_eval::eval_expr(), {expr} => {result}");

    Ok(result)
}

// the parser guarantees the number of arguments
fn call<Z: Domain + Display + ToPrimitive>(
    func: Func,
    values: &[(Fraction<Z>, SpanRange)],
) -> Result<Fraction<Z>, EvalError> {
    let result = match (func, values) {
        (Func::Recip, [(x, _)]) => x.recip(),
        (Func::Abs, [(x, _)]) => x.abs(),
        (Func::Floor, [(x, _)]) => x.floor(),
        (Func::Ceil, [(x, _)]) => x.ceil(),
        (Func::Trunc, [(x, _)]) => x.trunc(),
        (Func::Round, [(x, _)]) => x.round(),
        (Func::Pow, [(base, _), (exp, exp_span)]) => {
            if !exp.is_integer() {
                return Err(EvalError::invalid_exponent(exp.to_string(), *exp_span));
            }

            match exp.numer().to_i32() {
                Some(exp) if -MAX_EXPONENT <= exp && exp <= MAX_EXPONENT => base.pow(exp),
                _ => {
                    return Err(EvalError::invalid_exponent(exp.to_string(), *exp_span));
                },
            }
        },
        (func, values) => unreachable!("{func:?} with {} arguments", values.len()),
    };

    Ok(result)
}

// `12.5` is `125/10`
fn parse_literal<Z: Domain>(n: &str) -> Option<Fraction<Z>> {
    let (numer, denom) = match n.split_once('.') {
        Some((integer, fraction)) => (
            format!("{integer}{fraction}"),
            format!("1{}", "0".repeat(fraction.len())),
        ),
        None => (n.to_string(), String::from("1")),
    };

    Some(Fraction::new(
        Z::from_str_radix(&numer, 10).ok()?,
        Z::from_str_radix(&denom, 10).ok()?,
    ))
}
