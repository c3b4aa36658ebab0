use frac_error::SpanRange;

mod fmt;

#[derive(Clone, Debug, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: SpanRange,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ExprKind {
    /// `42` or `0.75`, as written
    Number(String),
    Inf,
    NaN,
    PrefixOp(PrefixOp, Box<Expr>),
    InfixOp(InfixOp, Box<Expr>, Box<Expr>),
    Call(Func, Vec<Expr>),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PrefixOp {
    Neg,
    Plus,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InfixOp {
    Add,
    Sub,
    Mul,
    Div,
}

const ADD: u32 = 1;
const MUL: u32 = 3;
const NEG: u32 = 5;

pub(crate) fn prefix_binding_power(op: PrefixOp) -> u32 {
    match op {
        PrefixOp::Neg | PrefixOp::Plus => NEG,
    }
}

/// Every infix operator is left-associative.
pub(crate) fn infix_binding_power(op: InfixOp) -> (u32, u32) {
    match op {
        InfixOp::Add | InfixOp::Sub => (ADD, ADD + 1),
        InfixOp::Mul | InfixOp::Div => (MUL, MUL + 1),
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Func {
    Recip,
    Abs,
    Floor,
    Ceil,
    Trunc,
    Round,
    Pow,
}

pub const FUNCS: [Func; 7] = [
    Func::Recip,
    Func::Abs,
    Func::Floor,
    Func::Ceil,
    Func::Trunc,
    Func::Round,
    Func::Pow,
];

impl Func {
    pub fn name(&self) -> &'static str {
        match self {
            Func::Recip => "recip",
            Func::Abs => "abs",
            Func::Floor => "floor",
            Func::Ceil => "ceil",
            Func::Trunc => "trunc",
            Func::Round => "round",
            Func::Pow => "pow",
        }
    }

    pub fn arg_count(&self) -> usize {
        match self {
            Func::Pow => 2,
            _ => 1,
        }
    }

    pub fn try_parse(name: &str) -> Option<Self> {
        FUNCS.iter().find(|f| f.name() == name).copied()
    }
}
