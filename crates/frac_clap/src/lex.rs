use frac_error::SpanRange;

pub struct Token {
    pub buffer: String,
    pub span: SpanRange,
}

/// It joins command line arguments into a single string, so that we can use spans.
/// An argument with a whitespace or a quote in it is rendered with quotes,
/// and its span covers the quotes.
///
/// It doesn't split the joined string again: each argument is already a token.
pub fn into_source(args: &[String]) -> (String, Vec<Token>) {
    let mut source = String::new();
    let mut tokens = Vec::with_capacity(args.len());

    for arg in args.iter() {
        if !source.is_empty() {
            source.push(' ');
        }

        let rendered = if arg.is_empty() || arg.chars().any(|c| c == '\n' || c == ' ' || c == '\'' || c == '\"') {
            format!("{arg:?}")
        } else {
            arg.to_string()
        };

        let start = source.len();
        source.push_str(&rendered);

        tokens.push(Token {
            buffer: arg.to_string(),
            span: SpanRange::new(start, source.len()),
        });
    }

    (source, tokens)
}
