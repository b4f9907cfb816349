//! Display-pattern handling: localized-token expansion and tokenization.

pub mod lexer;
pub mod tokens;

use crate::locale::{DateFormats, LongFormat};
use lexer::Lexer;
use tokens::Token;

/// Localized keys ordered so that the longest candidate wins at each
/// position ("LTS" before "LT", "LLLL" before "LLL" before "LL" before "L").
const LOCALIZED: [LongFormat; 6] = [
    LongFormat::Lts,
    LongFormat::Lt,
    LongFormat::Llll,
    LongFormat::Lll,
    LongFormat::Ll,
    LongFormat::L,
];

/// Expands the localized keys (LT, LTS, L, LL, LLL, LLLL) in a pattern into
/// the locale's templates. Bracketed spans pass through unexpanded.
///
/// Expansion is a single pass; the substituted templates contain only plain
/// display tokens and are not re-expanded.
pub fn expand_localized(pattern: &str, formats: &DateFormats) -> String {
    let mut out = String::with_capacity(pattern.len());
    let mut rest = pattern;

    while let Some(ch) = rest.chars().next() {
        if ch == '[' {
            let end = rest.find(']').map(|i| i + 1).unwrap_or(rest.len());
            out.push_str(&rest[..end]);
            rest = &rest[end..];
        } else if ch == 'L' {
            // 'L' alone is a valid key, so one of the candidates always matches
            let format = LOCALIZED
                .into_iter()
                .find(|f| rest.starts_with(f.token()))
                .unwrap_or(LongFormat::L);
            out.push_str(formats.get(format));
            rest = &rest[format.token().len()..];
        } else {
            out.push(ch);
            rest = &rest[ch.len_utf8()..];
        }
    }

    out
}

/// Tokenizes a display pattern. Never fails; see [`lexer::Lexer`].
pub fn tokenize(pattern: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(pattern);
    let mut tokens = Vec::new();

    loop {
        match lexer.next_token() {
            Token::Eof => break,
            token => tokens.push(token),
        }
    }

    tokens
}
