use logos::Logos;
use std::ops::Range;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n]+")]
pub enum Token {
    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    #[regex(r"-?[0-9]+")]
    Number,

    #[token("+", priority = 3)]
    #[token("-", priority = 3)]
    #[token("*", priority = 3)]
    #[token("/", priority = 3)]
    #[token("%", priority = 3)]
    #[token("^", priority = 3)]
    Operator,

    // Punctuation the evaluator will reject, but the grammar accepts
    #[regex(r"[^ \t\r\n0-9A-Za-z(){}]+")]
    Symbol,

    // Never valid in a line; highlighted so the mistake is visible early
    #[regex(r"[A-Za-z]+")]
    Word,
}

/// Lex a line, keeping the span of every token. Unlexable input is `None`.
pub fn tokenize(buffer: &str) -> Vec<(Option<Token>, Range<usize>)> {
    Token::lexer(buffer)
        .spanned()
        .map(|(token, span)| (token.ok(), span))
        .collect()
}

/// Indices (into `tokens`) of parentheses that have no partner.
pub fn unmatched_parens(tokens: &[(Option<Token>, Range<usize>)]) -> Vec<usize> {
    let mut open = Vec::new();
    let mut unmatched = Vec::new();

    for (index, (token, _)) in tokens.iter().enumerate() {
        match token {
            Some(Token::LParen) => open.push(index),
            Some(Token::RParen) => {
                if open.pop().is_none() {
                    unmatched.push(index);
                }
            }
            _ => {}
        }
    }

    unmatched.extend(open);
    unmatched.sort_unstable();
    unmatched
}
