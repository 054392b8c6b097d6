//! Enums that can be read from a setting by name.
//!
//! Rust enums carry no runtime list of their variants, so a type opts in by
//! implementing [`ConfigEnum`] with an explicit name table.  Lookup compares
//! names ignoring ASCII case, the way operators tend to type them.
//!
//! ```rust
//! use app_settings::ConfigEnum;
//!
//! #[derive(Debug, Clone, Copy, PartialEq)]
//! enum LogTarget {
//!     Console,
//!     File,
//! }
//!
//! impl ConfigEnum for LogTarget {
//!     const TYPE_NAME: &'static str = "LogTarget";
//!     const VARIANTS: &'static [(&'static str, Self)] =
//!         &[("Console", Self::Console), ("File", Self::File)];
//! }
//!
//! assert_eq!(LogTarget::from_name_ignore_case("file"), Some(LogTarget::File));
//! assert_eq!(LogTarget::from_name_ignore_case("syslog"), None);
//! ```

/// A closed set of named constants that settings can select between.
pub trait ConfigEnum: Sized + Copy + 'static {
    /// Type name used in error messages.
    const TYPE_NAME: &'static str;

    /// Every selectable variant with its canonical name.
    const VARIANTS: &'static [(&'static str, Self)];

    /// Finds the variant whose name matches `name`, ignoring ASCII case and
    /// surrounding whitespace.
    fn from_name_ignore_case(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::VARIANTS
            .iter()
            .find(|(known, _)| known.eq_ignore_ascii_case(name))
            .map(|&(_, variant)| variant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Weekday {
        Monday,
        Tuesday,
    }

    impl ConfigEnum for Weekday {
        const TYPE_NAME: &'static str = "Weekday";
        const VARIANTS: &'static [(&'static str, Self)] =
            &[("Monday", Self::Monday), ("Tuesday", Self::Tuesday)];
    }

    #[test]
    fn test_exact_name_matches() {
        assert_eq!(Weekday::from_name_ignore_case("Monday"), Some(Weekday::Monday));
    }

    #[test]
    fn test_match_ignores_case_and_padding() {
        assert_eq!(Weekday::from_name_ignore_case("tUESday"), Some(Weekday::Tuesday));
        assert_eq!(Weekday::from_name_ignore_case("  monday "), Some(Weekday::Monday));
    }

    #[test]
    fn test_unknown_or_empty_name_is_none() {
        assert_eq!(Weekday::from_name_ignore_case("Sunday"), None);
        assert_eq!(Weekday::from_name_ignore_case(""), None);
    }
}
