// src/core/sanitize.rs
use std::sync::LazyLock;

use regex::Regex;

use crate::config::consts::CODE_QUALIFIERS;

static RE_QUALIFIER: LazyLock<Regex> = LazyLock::new(|| {
    let words = CODE_QUALIFIERS.join("|");
    Regex::new(&format!(r"(?i)\s*\b(?:{words})\b\s*")).expect("qualifier words form a valid regex")
});

regex!(RE_CANONICAL_CODE = r"\b\d{2}[A-Z]{2,4}\d{2,3}[A-Z]?\b");
regex!(RE_NUMBER = r"\d+(?:\.\d+)?");
regex!(RE_TEST_LABEL = r"[A-Za-z0-9\-]+/\d+");

pub fn normalize_entities(s: &str) -> String {
    s.replace("&nbsp;", " ").replace("&amp;", "&")
}

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Course code with qualifier words (`Regular`, `Theory`, …) removed along
/// with the whitespace around them, then whitespace collapsed. Total over all
/// strings; `""` stays `""`.
pub fn normalize_code(code: &str) -> String {
    if code.is_empty() {
        return s!();
    }
    normalize_ws(&RE_QUALIFIER.replace_all(code, ""))
}

/// The `21CSC101J`-shaped token inside a code, if any.
pub fn canonical_code(code: &str) -> Option<&str> {
    RE_CANONICAL_CODE.find(code).map(|m| m.as_str())
}

/// First integer or decimal substring.
pub fn first_number(s: &str) -> Option<&str> {
    RE_NUMBER.find(s).map(|m| m.as_str())
}

/// `CT-1/20 (Max)` → `CT-1/20`; labels without that shape pass through.
pub fn reduce_label(label: &str) -> &str {
    RE_TEST_LABEL.find(label).map_or(label, |m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn qualifiers_vanish_whatever_the_case() {
        assert_eq!(normalize_code("21CSC101J Theory"), "21CSC101J");
        assert_eq!(normalize_code("21CSC101J  theory"), "21CSC101J");
        assert_eq!(normalize_code("  21MAB201T REGULAR "), "21MAB201T");
        assert_eq!(normalize_code("Lab 18CSE3 Tutorial x"), "18CSE3x");
        assert_eq!(normalize_code(""), "");
    }

    #[test]
    fn qualifier_takes_its_surrounding_space_with_it() {
        assert_eq!(normalize_code("21CSC101J Regular X"), "21CSC101JX");
        assert_eq!(normalize_code("21CSC101J  Theory  B"), "21CSC101JB");
        assert_eq!(normalize_code("A  B"), "A B");
    }

    #[test]
    fn qualifiers_only_match_whole_words() {
        assert_eq!(normalize_code("LABS101"), "LABS101");
        assert_eq!(normalize_code("Theoryish"), "Theoryish");
    }

    #[test]
    fn canonical_token_shape() {
        assert_eq!(canonical_code("21CSC101J Regular"), Some("21CSC101J"));
        assert_eq!(canonical_code("x 18MA20 y"), Some("18MA20"));
        assert_eq!(canonical_code("21CSC101JRegular"), None);
        assert_eq!(canonical_code("CSC101"), None);
    }

    #[test]
    fn numbers_and_labels() {
        assert_eq!(first_number("Score: 15.50 / 20"), Some("15.50"));
        assert_eq!(first_number("abs"), None);
        assert_eq!(first_number("7."), Some("7"));
        assert_eq!(reduce_label("FT-I/5.00"), "FT-I/5");
        assert_eq!(reduce_label("Quiz"), "Quiz");
    }

    #[test]
    fn ws_and_entities() {
        assert_eq!(normalize_ws("  a \n\t b  "), "a b");
        assert_eq!(normalize_entities("A&nbsp;&amp;B"), "A &B");
    }
}
