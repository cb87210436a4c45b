use super::tokens::{spans, Grammar, Span, Token};
use crate::model::{Note, Part};

/// One note per line; only `**bold**` is markup in notes
pub fn parse_notes(lines: &[String]) -> Vec<Note> {
    lines.iter().map(|line| parse_note(line)).collect()
}

fn parse_note(line: &str) -> Note {
    let parts = spans(line, Grammar::Note)
        .map(|span| match span {
            Span::Token {
                token: Token::Bold(text),
                ..
            } => Part::bold(text),
            Span::Token { raw, .. } => Part::plain(raw),
            Span::Text(text) => Part::plain(text),
        })
        .collect();

    Note { parts }
}
