use crate::error::EvalError;
use crate::token::{Punct, Token, TokenKind};
use frac_error::SpanRange;
use log::debug;

enum LexState {
    Init,
    Integer,

    // digits after `.`
    Fraction,
    Identifier,
}

/// It doesn't stop at the first unexpected character: it reports all of them.
pub fn lex(source: &str) -> Result<Vec<Token>, Vec<EvalError>> {
    let mut tokens = vec![];
    let mut errors = vec![];
    let mut curr_state = LexState::Init;
    let mut buffer = String::new();
    let mut start = 0;

    // `\0` flushes the last token
    for (i, c) in source.char_indices().chain(std::iter::once((source.len(), '\0'))) {
        match curr_state {
            LexState::Integer if c.is_ascii_digit() => {
                buffer.push(c);
                continue;
            },
            LexState::Integer if c == '.' => {
                buffer.push(c);
                curr_state = LexState::Fraction;
                continue;
            },
            LexState::Fraction if c.is_ascii_digit() => {
                buffer.push(c);
                continue;
            },
            LexState::Identifier if c.is_ascii_alphanumeric() || c == '_' => {
                buffer.push(c);
                continue;
            },
            LexState::Integer | LexState::Identifier => {
                push_token(&mut tokens, &curr_state, &buffer, start, i);
            },
            LexState::Fraction => {
                // `1.`
                if buffer.ends_with('.') {
                    errors.push(EvalError::unexpected_char('.', SpanRange::at(i - 1)));
                }

                else {
                    push_token(&mut tokens, &curr_state, &buffer, start, i);
                }
            },
            LexState::Init => {},
        }

        buffer.clear();
        curr_state = LexState::Init;
        start = i;

        if c == '\0' && i == source.len() {
            break;
        }

        if c.is_ascii_digit() {
            buffer.push(c);
            curr_state = LexState::Integer;
        }

        else if c.is_ascii_alphabetic() || c == '_' {
            buffer.push(c);
            curr_state = LexState::Identifier;
        }

        else if let Some(punct) = Punct::try_from_char(c) {
            tokens.push(Token {
                kind: TokenKind::Punct(punct),
                span: SpanRange::at(i),
            });
        }

        else if !c.is_whitespace() {
            errors.push(EvalError::unexpected_char(c, SpanRange::new(i, i + c.len_utf8())));
        }
    }

    debug!(
        "frac_eval::lex(), tokens: [{}]",
        tokens.iter().map(|t| t.kind.to_string()).collect::<Vec<String>>().join(", "),
    );

    if errors.is_empty() {
        Ok(tokens)
    }

    else {
        Err(errors)
    }
}

fn push_token(tokens: &mut Vec<Token>, state: &LexState, buffer: &str, start: usize, end: usize) {
    let kind = match state {
        LexState::Identifier => TokenKind::Identifier(buffer.to_string()),
        _ => TokenKind::Number(buffer.to_string()),
    };

    tokens.push(Token {
        kind,
        span: SpanRange::new(start, end),
    });
}
