use nu_ansi_term::{Color, Style};
use reedline::StyledText;

use crate::lexer::{Token, tokenize, unmatched_parens};

fn token_color(token: Option<Token>) -> Color {
    match token {
        Some(Token::Operator) => Color::Magenta,
        Some(Token::Number) => Color::Cyan,
        Some(Token::LParen) | Some(Token::RParen) => Color::White,
        Some(Token::Symbol) => Color::Yellow,
        Some(Token::Word) | None => Color::Red,
    }
}

/// Colors operators, numbers and parentheses; marks unbalanced parentheses
/// and anything the grammar can never accept in red.
pub struct Highlighter;

impl reedline::Highlighter for Highlighter {
    fn highlight(&self, line: &str, _: usize) -> StyledText {
        let mut output = StyledText::new();
        let plain = Style::new().fg(Color::White);

        let tokens = tokenize(line);
        let unmatched = unmatched_parens(&tokens);

        let mut curr_end = 0;
        for (index, (token, span)) in tokens.iter().enumerate() {
            if span.start > curr_end {
                output.push((plain, line[curr_end..span.start].to_string()));
            }
            let style = if unmatched.contains(&index) {
                Style::new().fg(Color::Red).bold()
            } else {
                Style::new().fg(token_color(*token))
            };
            output.push((style, line[span.clone()].to_string()));
            curr_end = span.end;
        }
        if curr_end < line.len() {
            output.push((plain, line[curr_end..].to_string()));
        }

        output
    }
}
