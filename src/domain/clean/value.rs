// ============================================================
// VALUE TRANSFORMER
// ============================================================
// Pure cell-level transforms and validators. No I/O.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

use super::{CleanConfig, DateFormat, TextCase};

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

static CURRENCY_NUMBER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[$€£]\s?[-+]?(\d{1,3}(,\d{3})*|\d+)(\.\d+)?$").unwrap()
});

static GROUPED_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[-+]?(\d{1,3}(,\d{3})*|\d+)(\.\d+)?$").unwrap());

static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").unwrap());

/// Date patterns tried in order; the first success wins, so an
/// ambiguous `3/4/2024` is parsed month-first as March 4.
const DATE_PATTERNS: [&str; 3] = ["%m/%d/%Y", "%d/%m/%Y", "%Y-%m-%d"];

/// Apply the configured cell transforms in their fixed order:
/// trim, whitespace collapse, case folding, date normalization.
pub fn transform(value: &str, config: &CleanConfig) -> String {
    let mut v = value.to_string();

    if config.trim {
        v = v.trim().to_string();
    }
    if config.collapse_spaces {
        v = WHITESPACE_RUN.replace_all(&v, " ").into_owned();
    }

    v = match config.text_case {
        TextCase::None => v,
        TextCase::Lower => v.to_lowercase(),
        TextCase::Upper => v.to_uppercase(),
        TextCase::Title => title_case(&v),
    };

    if config.date_format == DateFormat::Iso {
        if let Some(iso) = to_iso_date(&v) {
            v = iso;
        }
    }

    v
}

/// Uppercase the first code point and lowercase the remainder of each
/// space-separated token
fn title_case(value: &str) -> String {
    value
        .split(' ')
        .map(|token| {
            let mut chars = token.chars();
            match chars.next() {
                Some(first) => {
                    let rest: String = chars.collect();
                    format!("{}{}", first.to_uppercase(), rest.to_lowercase())
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Try the enumerated date patterns, then an ISO extended parse.
/// Returns None when nothing parses; the caller keeps the original.
fn to_iso_date(value: &str) -> Option<String> {
    for pattern in DATE_PATTERNS {
        if let Ok(date) = NaiveDate::parse_from_str(value, pattern) {
            return Some(date.format("%Y-%m-%d").to_string());
        }
    }
    value
        .parse::<NaiveDate>()
        .ok()
        .map(|date| date.format("%Y-%m-%d").to_string())
}

/// Canonicalize currency, boolean, and grouped-number strings.
///
/// The currency branch strips the symbol and grouping commas and then
/// feeds the stripped string into the later checks, mirroring the
/// existing surface (the number check is redundant at that point but
/// harmless).
pub fn normalize_type(value: &str) -> String {
    let mut s = value.trim().to_string();
    if s.is_empty() {
        return s;
    }

    if CURRENCY_NUMBER.is_match(&s) {
        s.retain(|c| !matches!(c, '$' | '€' | '£' | ','));
    }

    if s.eq_ignore_ascii_case("true") || s.eq_ignore_ascii_case("yes") {
        return "true".to_string();
    }
    if s.eq_ignore_ascii_case("false") || s.eq_ignore_ascii_case("no") {
        return "false".to_string();
    }

    if GROUPED_NUMBER.is_match(&s) {
        return s.replace(',', "");
    }

    s
}

/// Empty values are vacuously valid
pub fn is_valid_email(value: &str) -> bool {
    value.is_empty() || EMAIL.is_match(value)
}

/// Empty values are vacuously valid; anything with a parseable scheme
/// passes
pub fn is_valid_url(value: &str) -> bool {
    value.is_empty() || Url::parse(value).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::clean::OutputFormat;

    fn config() -> CleanConfig {
        CleanConfig {
            columns: vec!["a".to_string()],
            output_format: OutputFormat::Csv,
            ..Default::default()
        }
    }

    #[test]
    fn test_trim_and_collapse() {
        let cfg = config();
        assert_eq!(transform("  Alice  ", &cfg), "Alice");
        assert_eq!(transform(" New   York ", &cfg), "New York");
        assert_eq!(transform("a\t\nb", &cfg), "a b");
    }

    #[test]
    fn test_collapse_without_trim_keeps_edge_spaces() {
        let cfg = CleanConfig {
            trim: false,
            ..config()
        };
        assert_eq!(transform("  a   b ", &cfg), " a b ");
    }

    #[test]
    fn test_case_folding() {
        let mut cfg = config();
        cfg.text_case = TextCase::Upper;
        assert_eq!(transform("hello world", &cfg), "HELLO WORLD");

        cfg.text_case = TextCase::Lower;
        assert_eq!(transform("Hello World", &cfg), "hello world");

        cfg.text_case = TextCase::Title;
        assert_eq!(transform("hELLO wORLD", &cfg), "Hello World");
    }

    #[test]
    fn test_title_case_keeps_edge_spaces_when_untouched() {
        // Split on single spaces and rejoin: with trim and collapse both
        // off, edge and doubled spaces pass through title-casing intact
        let cfg = CleanConfig {
            trim: false,
            collapse_spaces: false,
            text_case: TextCase::Title,
            ..config()
        };
        assert_eq!(transform("x ", &cfg), "X ");
        assert_eq!(transform(" x", &cfg), " X");
        assert_eq!(transform("a  b", &cfg), "A  B");
    }

    #[test]
    fn test_transform_is_idempotent() {
        let mut cfg = config();
        cfg.text_case = TextCase::Title;
        cfg.date_format = DateFormat::Iso;

        for input in ["  some   VALUE ", "3/4/2024", "plain"] {
            let once = transform(input, &cfg);
            let twice = transform(&once, &cfg);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_ambiguous_date_is_month_first() {
        let mut cfg = config();
        cfg.date_format = DateFormat::Iso;
        assert_eq!(transform("3/4/2024", &cfg), "2024-03-04");
    }

    #[test]
    fn test_day_first_fallback() {
        let mut cfg = config();
        cfg.date_format = DateFormat::Iso;
        // 25 is not a valid month, so the d/M pattern catches it
        assert_eq!(transform("25/12/2024", &cfg), "2024-12-25");
    }

    #[test]
    fn test_iso_date_round_trips() {
        let mut cfg = config();
        cfg.date_format = DateFormat::Iso;
        assert_eq!(transform("2024-03-04", &cfg), "2024-03-04");
    }

    #[test]
    fn test_unparseable_date_unchanged() {
        let mut cfg = config();
        cfg.date_format = DateFormat::Iso;
        assert_eq!(transform("not a date", &cfg), "not a date");
        assert_eq!(transform("13/13/2024", &cfg), "13/13/2024");
    }

    #[test]
    fn test_normalize_type_cases() {
        assert_eq!(normalize_type("$1,234.50"), "1234.50");
        assert_eq!(normalize_type("€2,000"), "2000");
        assert_eq!(normalize_type("YES"), "true");
        assert_eq!(normalize_type("no"), "false");
        assert_eq!(normalize_type("1,000"), "1000");
        assert_eq!(normalize_type("abc"), "abc");
        assert_eq!(normalize_type(""), "");
    }

    #[test]
    fn test_normalize_type_currency_with_space() {
        // The symbol-space form strips to a leading-space string that no
        // later check matches; it passes through as-is
        assert_eq!(normalize_type("$ 1,234"), " 1234");
    }

    #[test]
    fn test_email_validation() {
        assert!(is_valid_email(""));
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("user.name+tag@example.org"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("a@b"));
    }

    #[test]
    fn test_url_validation() {
        assert!(is_valid_url(""));
        assert!(is_valid_url("https://example.com/path?q=1"));
        assert!(!is_valid_url("example.com"));
        assert!(!is_valid_url("not a url"));
    }
}
