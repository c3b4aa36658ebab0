use crate::error::{EvalError, ExpectedToken};
use crate::expr::{
    Expr,
    ExprKind,
    Func,
    InfixOp,
    PrefixOp,
    infix_binding_power,
    prefix_binding_power,
};
use crate::token::{Punct, Token, TokenKind};
use frac_error::SpanRange;
use log::debug;

/// Both the nesting of the parser and the height of the tree are limited to this.
/// Parsing, evaluating and dropping an `Expr` are all recursive.
pub const MAX_EXPR_DEPTH: usize = 256;

pub struct Tokens<'t> {
    tokens: &'t [Token],
    cursor: usize,

    // how many `parse_expr` calls are on the stack
    depth: usize,

    // an error at the end of the input points here
    eof_span: SpanRange,
}

impl<'t> Tokens<'t> {
    pub fn new(tokens: &'t [Token], source_len: usize) -> Self {
        Tokens {
            tokens,
            cursor: 0,
            depth: 0,
            eof_span: SpanRange::new(source_len, source_len),
        }
    }

    pub fn step(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.cursor).cloned();

        if token.is_some() {
            self.cursor += 1;
        }

        token
    }

    pub fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.cursor)
    }

    pub fn is_curr_token(&self, punct: Punct) -> bool {
        matches!(self.peek(), Some(Token { kind: TokenKind::Punct(p), .. }) if *p == punct)
    }

    pub fn eof_span(&self) -> SpanRange {
        self.eof_span
    }

    pub fn curr_span(&self) -> SpanRange {
        self.peek().map(|token| token.span).unwrap_or(self.eof_span)
    }
}

/// The whole token stream has to be a single expression.
pub fn parse(tokens: &[Token], source_len: usize) -> Result<Expr, EvalError> {
    let mut tokens = Tokens::new(tokens, source_len);
    let (expr, _) = parse_expr(&mut tokens, 0)?;

    if let Some(Token { kind, span }) = tokens.step() {
        return Err(EvalError::unexpected_token(&kind, ExpectedToken::Operator, span));
    }

    debug!("frac_eval::parse(), tree: {expr}");

    Ok(expr)
}

/// It also returns the height of the tree.
pub fn parse_expr(tokens: &mut Tokens, min_bp: u32) -> Result<(Expr, usize), EvalError> {
    if tokens.depth >= MAX_EXPR_DEPTH {
        return Err(EvalError::too_deep(tokens.curr_span()));
    }

    tokens.depth += 1;
    let result = parse_expr_worker(tokens, min_bp);
    tokens.depth -= 1;

    result
}

fn parse_expr_worker(tokens: &mut Tokens, min_bp: u32) -> Result<(Expr, usize), EvalError> {
    let (mut lhs, mut height) = match tokens.step() {
        Some(Token {
            kind: TokenKind::Number(n),
            span,
        }) => (
            Expr {
                kind: ExprKind::Number(n),
                span,
            },
            1,
        ),
        Some(Token {
            kind: TokenKind::Identifier(name),
            span,
        }) => {
            if tokens.is_curr_token(Punct::OpenParen) {
                parse_call(tokens, &name, span)?
            }

            else {
                let kind = match name.as_str() {
                    "inf" => ExprKind::Inf,
                    "nan" | "NaN" => ExprKind::NaN,
                    _ => {
                        return Err(EvalError::unknown_name(&name, span));
                    },
                };

                (Expr { kind, span }, 1)
            }
        },
        Some(Token {
            kind: TokenKind::Punct(punct @ (Punct::Sub | Punct::Add)),
            span: op_span,
        }) => {
            let op = if punct == Punct::Sub { PrefixOp::Neg } else { PrefixOp::Plus };
            let (operand, operand_height) = parse_expr(tokens, prefix_binding_power(op))?;
            let span = op_span.merge(operand.span);

            (
                Expr {
                    kind: ExprKind::PrefixOp(op, Box::new(operand)),
                    span,
                },
                operand_height + 1,
            )
        },
        Some(Token {
            kind: TokenKind::Punct(Punct::OpenParen),
            span: open_span,
        }) => {
            let (inner, inner_height) = parse_expr(tokens, 0)?;

            match tokens.step() {
                Some(Token {
                    kind: TokenKind::Punct(Punct::CloseParen),
                    span: close_span,
                }) => (
                    Expr {
                        kind: inner.kind,
                        span: open_span.merge(close_span),
                    },
                    inner_height,
                ),
                Some(Token { kind, span }) => {
                    return Err(EvalError::unexpected_token(&kind, ExpectedToken::CloseParen, span));
                },
                None => {
                    return Err(EvalError::unclosed_parenthesis(open_span));
                },
            }
        },
        Some(Token { kind, span }) => {
            return Err(EvalError::unexpected_token(&kind, ExpectedToken::AnyExpression, span));
        },
        None => {
            return Err(EvalError::unexpected_eof(ExpectedToken::AnyExpression, tokens.eof_span()));
        },
    };

    loop {
        let op = match tokens.peek() {
            Some(Token { kind: TokenKind::Punct(Punct::Add), .. }) => InfixOp::Add,
            Some(Token { kind: TokenKind::Punct(Punct::Sub), .. }) => InfixOp::Sub,
            Some(Token { kind: TokenKind::Punct(Punct::Mul), .. }) => InfixOp::Mul,
            Some(Token { kind: TokenKind::Punct(Punct::Div), .. }) => InfixOp::Div,

            // the caller decides whether it's an error or not
            _ => {
                break;
            },
        };

        let (l_bp, r_bp) = infix_binding_power(op);

        if l_bp < min_bp {
            // parse this op later
            break;
        }

        tokens.step();
        let (rhs, rhs_height) = parse_expr(tokens, r_bp)?;
        let span = lhs.span.merge(rhs.span);

        // `1 + 1 + 1 + ...` grows the tree without nesting the parser
        height = height.max(rhs_height) + 1;

        if height > MAX_EXPR_DEPTH {
            return Err(EvalError::too_deep(span));
        }

        lhs = Expr {
            kind: ExprKind::InfixOp(op, Box::new(lhs), Box::new(rhs)),
            span,
        };
    }

    Ok((lhs, height))
}

// NAME '(' (EXPR (',' EXPR)*)? ')'
fn parse_call(tokens: &mut Tokens, name: &str, name_span: SpanRange) -> Result<(Expr, usize), EvalError> {
    let func = match Func::try_parse(name) {
        Some(func) => func,
        None => {
            return Err(EvalError::unknown_function(name, name_span));
        },
    };

    // `(`
    let open_span = match tokens.step() {
        Some(token) => token.span,
        None => tokens.eof_span(),
    };

    let mut args = vec![];
    let mut height = 0;
    let close_span;

    if tokens.is_curr_token(Punct::CloseParen) {
        close_span = tokens.step().map(|token| token.span).unwrap_or(open_span);
    }

    else {
        loop {
            let (arg, arg_height) = parse_expr(tokens, 0)?;
            height = height.max(arg_height);
            args.push(arg);

            match tokens.step() {
                Some(Token {
                    kind: TokenKind::Punct(Punct::Comma),
                    ..
                }) => {
                    continue;
                },
                Some(Token {
                    kind: TokenKind::Punct(Punct::CloseParen),
                    span,
                }) => {
                    close_span = span;
                    break;
                },
                Some(Token { kind, span }) => {
                    return Err(EvalError::unexpected_token(&kind, ExpectedToken::CommaOrCloseParen, span));
                },
                None => {
                    return Err(EvalError::unclosed_parenthesis(open_span));
                },
            }
        }
    }

    let span = name_span.merge(close_span);

    if args.len() != func.arg_count() {
        return Err(EvalError::wrong_number_of_arguments(func, args.len(), span));
    }

    Ok((
        Expr {
            kind: ExprKind::Call(func, args),
            span,
        },
        height + 1,
    ))
}
