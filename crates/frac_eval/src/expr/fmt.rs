use super::{Expr, ExprKind, InfixOp, PrefixOp};
use std::fmt;

// every compound expression is parenthesized, so that the tree is visible in the logs
impl fmt::Display for Expr {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match &self.kind {
            ExprKind::Number(n) => write!(fmt, "{n}"),
            ExprKind::Inf => write!(fmt, "inf"),
            ExprKind::NaN => write!(fmt, "nan"),
            ExprKind::PrefixOp(op, operand) => write!(fmt, "({op}{operand})"),
            ExprKind::InfixOp(op, lhs, rhs) => write!(fmt, "({lhs} {op} {rhs})"),
            ExprKind::Call(func, args) => write!(
                fmt,
                "{}({})",
                func.name(),
                args.iter().map(|arg| arg.to_string()).collect::<Vec<String>>().join(", "),
            ),
        }
    }
}

impl fmt::Display for PrefixOp {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            PrefixOp::Neg => write!(fmt, "-"),
            PrefixOp::Plus => write!(fmt, "+"),
        }
    }
}

impl fmt::Display for InfixOp {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        let s = match self {
            InfixOp::Add => "+",
            InfixOp::Sub => "-",
            InfixOp::Mul => "*",
            InfixOp::Div => "/",
        };

        write!(fmt, "{s}")
    }
}
