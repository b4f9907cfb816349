//! Tests for the display-pattern lexer and localized-key expansion.

use falocale::pattern::lexer::Lexer;
use falocale::pattern::tokens::Token;
use falocale::pattern::{expand_localized, tokenize};
use falocale::Locale;

#[test]
fn test_lex_short_date_pattern() {
    let mut lexer = Lexer::new("DD/MM/YYYY");
    assert_eq!(lexer.next_token(), Token::Day2);
    assert_eq!(lexer.next_token(), Token::Literal("/".into()));
    assert_eq!(lexer.next_token(), Token::Month2);
    assert_eq!(lexer.next_token(), Token::Literal("/".into()));
    assert_eq!(lexer.next_token(), Token::Year4);
    assert_eq!(lexer.next_token(), Token::Eof);
}

#[test]
fn test_lex_time_pattern() {
    let mut lexer = Lexer::new("HH:mm:ss");
    assert_eq!(lexer.next_token(), Token::Hour24Two);
    assert_eq!(lexer.next_token(), Token::Literal(":".into()));
    assert_eq!(lexer.next_token(), Token::Minute2);
    assert_eq!(lexer.next_token(), Token::Literal(":".into()));
    assert_eq!(lexer.next_token(), Token::Second2);
    assert_eq!(lexer.next_token(), Token::Eof);
}

#[test]
fn test_lex_weekday_runs() {
    let mut lexer = Lexer::new("dddd dd d");
    assert_eq!(lexer.next_token(), Token::WeekdayFull);
    assert_eq!(lexer.next_token(), Token::Literal(" ".into()));
    assert_eq!(lexer.next_token(), Token::WeekdayMin);
    assert_eq!(lexer.next_token(), Token::Literal(" ".into()));
    assert_eq!(lexer.next_token(), Token::WeekdayNum);
    assert_eq!(lexer.next_token(), Token::Eof);
}

#[test]
fn test_lex_ordinal_day() {
    let mut lexer = Lexer::new("Do MMMM");
    assert_eq!(lexer.next_token(), Token::DayOrdinal);
    assert_eq!(lexer.next_token(), Token::Literal(" ".into()));
    assert_eq!(lexer.next_token(), Token::MonthFull);
    assert_eq!(lexer.next_token(), Token::Eof);
}

#[test]
fn test_lex_overlong_runs_split() {
    let mut lexer = Lexer::new("YYYYYY");
    assert_eq!(lexer.next_token(), Token::Year4);
    assert_eq!(lexer.next_token(), Token::Year2);
    assert_eq!(lexer.next_token(), Token::Eof);

    let mut lexer = Lexer::new("MMMMM");
    assert_eq!(lexer.next_token(), Token::MonthFull);
    assert_eq!(lexer.next_token(), Token::Month);
    assert_eq!(lexer.next_token(), Token::Eof);
}

#[test]
fn test_lex_single_year_letter_is_literal() {
    let mut lexer = Lexer::new("Y");
    assert_eq!(lexer.next_token(), Token::Literal("Y".into()));
    assert_eq!(lexer.next_token(), Token::Eof);
}

#[test]
fn test_lex_meridiem_markers() {
    let mut lexer = Lexer::new("A a");
    assert_eq!(lexer.next_token(), Token::MeridiemUpper);
    assert_eq!(lexer.next_token(), Token::Literal(" ".into()));
    assert_eq!(lexer.next_token(), Token::MeridiemLower);
    assert_eq!(lexer.next_token(), Token::Eof);
}

#[test]
fn test_lex_bracket_literal() {
    let mut lexer = Lexer::new("[ساعت D] D");
    assert_eq!(lexer.next_token(), Token::Literal("ساعت D".into()));
    assert_eq!(lexer.next_token(), Token::Literal(" ".into()));
    assert_eq!(lexer.next_token(), Token::Day);
    assert_eq!(lexer.next_token(), Token::Eof);
}

#[test]
fn test_lex_unterminated_bracket() {
    let mut lexer = Lexer::new("[HH:mm");
    assert_eq!(lexer.next_token(), Token::Literal("HH:mm".into()));
    assert_eq!(lexer.next_token(), Token::Eof);
}

#[test]
fn test_expand_localized_keys() {
    let formats = Locale::fa().formats;
    assert_eq!(expand_localized("L", &formats), "DD/MM/YYYY");
    assert_eq!(expand_localized("LL", &formats), "D MMMM YYYY");
    assert_eq!(expand_localized("LLLL", &formats), "dddd, D MMMM YYYY HH:mm");
    assert_eq!(expand_localized("LT", &formats), "HH:mm");
    assert_eq!(expand_localized("LT | LTS", &formats), "HH:mm | HH:mm:ss");
}

#[test]
fn test_expand_localized_skips_brackets() {
    let formats = Locale::fa().formats;
    assert_eq!(expand_localized("[L] L", &formats), "[L] DD/MM/YYYY");
}

#[test]
fn test_tokenize_drops_eof() {
    assert_eq!(tokenize("D"), vec![Token::Day]);
    assert_eq!(tokenize(""), Vec::<Token>::new());
}
