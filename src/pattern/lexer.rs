//! Lexer for tokenizing display patterns.
//!
//! The lexer converts a display pattern into a stream of tokens using
//! longest-match rules on the Moment.js-style token letters. It handles:
//! - Bracketed spans ([text]) become Literal tokens with the brackets removed
//! - Runs longer than the longest known form split (e.g. "YYYYYY" lexes as
//!   YYYY then YY)
//! - Unrecognized characters accumulate into Literal tokens
//!
//! Lexing is total: there is no input the lexer rejects. An unterminated
//! bracket swallows the rest of the pattern as a literal.

use crate::pattern::tokens::Token;

/// Characters that can start a recognized token.
const TOKEN_STARTS: &[char] = &['[', 'Y', 'M', 'D', 'd', 'H', 'h', 'm', 's', 'A', 'a'];

/// A lexer for display patterns.
pub struct Lexer<'a> {
    /// The input string being tokenized.
    input: &'a str,
    /// The current byte position in the input.
    position: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input string.
    pub fn new(input: &'a str) -> Self {
        Self { input, position: 0 }
    }

    /// Returns the next token from the input.
    pub fn next_token(&mut self) -> Token {
        let Some(ch) = self.current_char() else {
            return Token::Eof;
        };

        match ch {
            '[' => self.lex_bracket_literal(),
            'Y' | 'M' | 'D' | 'd' | 'H' | 'h' | 'm' | 's' => self.lex_letter_run(ch),
            'A' => {
                self.advance(1);
                Token::MeridiemUpper
            }
            'a' => {
                self.advance(1);
                Token::MeridiemLower
            }
            _ => self.lex_literal_run(),
        }
    }

    fn current_char(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    fn advance(&mut self, chars: usize) {
        for _ in 0..chars {
            if let Some(ch) = self.current_char() {
                self.position += ch.len_utf8();
            }
        }
    }

    /// Counts consecutive occurrences of `ch` at the current position,
    /// capped at `max`.
    fn run_length(&self, ch: char, max: usize) -> usize {
        self.input[self.position..]
            .chars()
            .take(max)
            .take_while(|&c| c == ch)
            .count()
    }

    fn lex_letter_run(&mut self, ch: char) -> Token {
        let (token, consumed) = match ch {
            'Y' => match self.run_length('Y', 4) {
                4 => (Token::Year4, 4),
                2 | 3 => (Token::Year2, 2),
                _ => (Token::Literal("Y".to_string()), 1),
            },
            'M' => match self.run_length('M', 4) {
                4 => (Token::MonthFull, 4),
                3 => (Token::MonthAbbr, 3),
                2 => (Token::Month2, 2),
                _ => (Token::Month, 1),
            },
            'D' => {
                if self.run_length('D', 2) == 2 {
                    (Token::Day2, 2)
                } else if self.input[self.position..].starts_with("Do") {
                    (Token::DayOrdinal, 2)
                } else {
                    (Token::Day, 1)
                }
            }
            'd' => match self.run_length('d', 4) {
                4 => (Token::WeekdayFull, 4),
                3 => (Token::WeekdayShort, 3),
                2 => (Token::WeekdayMin, 2),
                _ => (Token::WeekdayNum, 1),
            },
            'H' => match self.run_length('H', 2) {
                2 => (Token::Hour24Two, 2),
                _ => (Token::Hour24, 1),
            },
            'h' => match self.run_length('h', 2) {
                2 => (Token::Hour12Two, 2),
                _ => (Token::Hour12, 1),
            },
            'm' => match self.run_length('m', 2) {
                2 => (Token::Minute2, 2),
                _ => (Token::Minute, 1),
            },
            's' => match self.run_length('s', 2) {
                2 => (Token::Second2, 2),
                _ => (Token::Second, 1),
            },
            _ => unreachable!("lex_letter_run called on a non-token letter"),
        };

        self.advance(consumed);
        token
    }

    /// Lexes a bracketed span; the brackets are stripped from the literal.
    fn lex_bracket_literal(&mut self) -> Token {
        self.advance(1);
        let start = self.position;

        let text = match self.input[start..].find(']') {
            Some(offset) => {
                let text = &self.input[start..start + offset];
                self.position = start + offset + 1;
                text
            }
            None => {
                let text = &self.input[start..];
                self.position = self.input.len();
                text
            }
        };

        Token::Literal(text.to_string())
    }

    fn lex_literal_run(&mut self) -> Token {
        let start = self.position;

        while let Some(ch) = self.current_char() {
            if TOKEN_STARTS.contains(&ch) {
                break;
            }
            self.advance(1);
        }

        Token::Literal(self.input[start..self.position].to_string())
    }
}
