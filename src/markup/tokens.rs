//! Splits a line of recipe text into plain spans and markup tokens.
//!
//! Task lines understand three tokens, tried as one alternation so the earliest
//! match wins and matches never overlap:
//!
//! - `$name$` ingredient reference
//! - `!<amount> <unit>!` timer, unit one of second/minute/hour (optionally plural)
//! - `**text**` bold text
//!
//! Note lines only understand bold text.

use once_cell::sync::Lazy;
use regex::{CaptureMatches, Captures, Regex};

static TASK_TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\$(?P<ingredient>[^$]+)\$|!(?P<timer>(?P<amount>\d*\.?\d+) *(?P<unit>second|minute|hour)s?)!|\*\*(?P<bold>[^*]+)\*\*",
    )
    .unwrap()
});

static NOTE_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(?P<bold>[^*]+)\*\*").unwrap());

static SUFFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(?s)(?P<name>.*):\d+$").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grammar {
    Task,
    Note,
}

impl Grammar {
    fn regex(self) -> &'static Regex {
        match self {
            Grammar::Task => &*TASK_TOKEN,
            Grammar::Note => &*NOTE_TOKEN,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Second,
    Minute,
    Hour,
}

impl TimeUnit {
    fn parse(unit: &str) -> Option<Self> {
        match unit {
            "second" => Some(TimeUnit::Second),
            "minute" => Some(TimeUnit::Minute),
            "hour" => Some(TimeUnit::Hour),
            _ => None,
        }
    }

    pub fn factor(self) -> f64 {
        match self {
            TimeUnit::Second => 1.0,
            TimeUnit::Minute => 60.0,
            TimeUnit::Hour => 3600.0,
        }
    }

    /// Whole seconds in `amount` of this unit, rounded down
    pub fn seconds(self, amount: f64) -> u64 {
        (amount * self.factor()).floor() as u64
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token<'a> {
    /// Inner text of `$...$`
    Ingredient(&'a str),
    /// `text` is the inner `amount unit` text of `!...!`
    Timer {
        text: &'a str,
        amount: f64,
        unit: TimeUnit,
    },
    /// Inner text of `**...**`
    Bold(&'a str),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Span<'a> {
    Text(&'a str),
    /// `raw` is the whole match, delimiters included
    Token { token: Token<'a>, raw: &'a str },
}

/// Lazy span iterator over one line
pub struct Spans<'a> {
    line: &'a str,
    captures: CaptureMatches<'static, 'a>,
    cursor: usize,
    pending: Option<Span<'a>>,
}

pub fn spans(line: &str, grammar: Grammar) -> Spans<'_> {
    Spans {
        line,
        captures: grammar.regex().captures_iter(line),
        cursor: 0,
        pending: None,
    }
}

impl<'a> Iterator for Spans<'a> {
    type Item = Span<'a>;

    fn next(&mut self) -> Option<Span<'a>> {
        if let Some(span) = self.pending.take() {
            return Some(span);
        }

        match self.captures.next() {
            Some(caps) => {
                let Some(whole) = caps.get(0) else {
                    return None;
                };
                let before = &self.line[self.cursor..whole.start()];
                self.cursor = whole.end();

                let token = token_span(&caps, whole.as_str());
                if before.is_empty() {
                    Some(token)
                } else {
                    self.pending = Some(token);
                    Some(Span::Text(before))
                }
            }
            None if self.cursor < self.line.len() => {
                let rest = &self.line[self.cursor..];
                self.cursor = self.line.len();
                Some(Span::Text(rest))
            }
            None => None,
        }
    }
}

fn token_span<'a>(caps: &Captures<'a>, raw: &'a str) -> Span<'a> {
    let token = if let Some(name) = caps.name("ingredient") {
        Some(Token::Ingredient(name.as_str()))
    } else if let Some(timer) = caps.name("timer") {
        let amount = caps.name("amount").and_then(|a| a.as_str().parse::<f64>().ok());
        let unit = caps.name("unit").and_then(|u| TimeUnit::parse(u.as_str()));
        amount.zip(unit).map(|(amount, unit)| Token::Timer {
            text: timer.as_str(),
            amount,
            unit,
        })
    } else {
        caps.name("bold").map(|bold| Token::Bold(bold.as_str()))
    };

    match token {
        Some(token) => Span::Token { token, raw },
        None => Span::Text(raw),
    }
}

/// Drops a trailing `:<digits>` disambiguation suffix: `sugar:2` -> `sugar`
pub fn strip_suffix(name: &str) -> &str {
    SUFFIX
        .captures(name)
        .and_then(|caps| caps.name("name"))
        .map_or(name, |m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(line: &str, grammar: Grammar) -> Vec<Span<'_>> {
        spans(line, grammar).collect()
    }

    #[test]
    fn test_plain_line_is_one_span() {
        assert_eq!(
            collect("Preheat the oven", Grammar::Task),
            vec![Span::Text("Preheat the oven")]
        );
    }

    #[test]
    fn test_empty_line_has_no_spans() {
        assert!(collect("", Grammar::Task).is_empty());
    }

    #[test]
    fn test_mixed_tokens_in_order() {
        let spans = collect("Add $salt$, stir **well** for !2 minutes!.", Grammar::Task);

        assert_eq!(
            spans,
            vec![
                Span::Text("Add "),
                Span::Token {
                    token: Token::Ingredient("salt"),
                    raw: "$salt$"
                },
                Span::Text(", stir "),
                Span::Token {
                    token: Token::Bold("well"),
                    raw: "**well**"
                },
                Span::Text(" for "),
                Span::Token {
                    token: Token::Timer {
                        text: "2 minutes",
                        amount: 2.0,
                        unit: TimeUnit::Minute
                    },
                    raw: "!2 minutes!"
                },
                Span::Text("."),
            ]
        );
    }

    #[test]
    fn test_single_trailing_character_is_kept() {
        let spans = collect("$egg$s", Grammar::Task);
        assert_eq!(spans.last(), Some(&Span::Text("s")));
    }

    #[test]
    fn test_fractional_timer() {
        let spans = collect("!1.5 hours!", Grammar::Task);
        match spans.as_slice() {
            [Span::Token {
                token: Token::Timer { amount, unit, .. },
                ..
            }] => {
                assert_eq!(*amount, 1.5);
                assert_eq!(unit.seconds(*amount), 5400);
            }
            other => panic!("unexpected spans: {:?}", other),
        }

        match collect("wait !.5 hours!", Grammar::Task).as_slice() {
            [Span::Text("wait "), Span::Token {
                token: Token::Timer { text, amount, unit },
                ..
            }] => {
                assert_eq!(*text, ".5 hours");
                assert_eq!(unit.seconds(*amount), 1800);
            }
            other => panic!("unexpected spans: {:?}", other),
        }
    }

    #[test]
    fn test_earliest_token_wins_without_nesting() {
        assert_eq!(
            collect("**$salt$** then $pepper$", Grammar::Task),
            vec![
                Span::Token {
                    token: Token::Bold("$salt$"),
                    raw: "**$salt$**"
                },
                Span::Text(" then "),
                Span::Token {
                    token: Token::Ingredient("pepper"),
                    raw: "$pepper$"
                },
            ]
        );
    }

    #[test]
    fn test_unknown_timer_unit_is_text() {
        assert_eq!(
            collect("wait !3 days!", Grammar::Task),
            vec![Span::Text("wait !3 days!")]
        );
    }

    #[test]
    fn test_note_grammar_ignores_ingredients_and_timers() {
        let spans = collect("Use $butter$ for !5 minutes! **only**", Grammar::Note);
        assert_eq!(
            spans,
            vec![
                Span::Text("Use $butter$ for !5 minutes! "),
                Span::Token {
                    token: Token::Bold("only"),
                    raw: "**only**"
                },
            ]
        );
    }

    #[test]
    fn test_seconds_round_down() {
        assert_eq!(TimeUnit::Second.seconds(2.9), 2);
        assert_eq!(TimeUnit::Minute.seconds(0.25), 15);
        assert_eq!(TimeUnit::Hour.seconds(2.0), 7200);
    }

    #[test]
    fn test_strip_suffix() {
        assert_eq!(strip_suffix("sugar:2"), "sugar");
        assert_eq!(strip_suffix("sugar"), "sugar");
        assert_eq!(strip_suffix("ratio 1:2 mix:12"), "ratio 1:2 mix");
        assert_eq!(strip_suffix("time:abc"), "time:abc");
    }
}
