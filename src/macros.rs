// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!

    // Zero-arg → String::new()
    () => {
        ::std::string::String::new()
    };
    // Any single expression — works for literals, consts, or vars
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

/// Lazily compiled CSS selector. Literals only, so a bad selector is a
/// programming error caught by the first test that touches it.
#[macro_export]
macro_rules! selector {
    ($name:ident = $css:literal) => {
        static $name: ::std::sync::LazyLock<::scraper::Selector> =
            ::std::sync::LazyLock::new(|| {
                ::scraper::Selector::parse($css).expect(concat!("invalid selector: ", $css))
            });
    };
}

/// Lazily compiled regex, same contract as `selector!`.
#[macro_export]
macro_rules! regex {
    ($name:ident = $re:literal) => {
        static $name: ::std::sync::LazyLock<::regex::Regex> =
            ::std::sync::LazyLock::new(|| {
                ::regex::Regex::new($re).expect(concat!("invalid regex: ", $re))
            });
    };
}
