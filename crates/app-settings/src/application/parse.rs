//! Locale-independent parsing of scalar setting values.
//!
//! [`SettingValue`] is the per-type table the accessor's generic getters work
//! from: how to parse a raw string and what to call the type in an error
//! message.  Parsing never depends on the machine's locale, so a settings
//! file means the same thing everywhere.

/// A scalar type a raw setting string can be parsed into.
pub(crate) trait SettingValue: Sized + Copy {
    /// Type name with article, as it reads in an error message ("an int").
    const TYPE_NAME: &'static str;

    /// Parses `raw`, ignoring surrounding whitespace.
    fn parse_setting(raw: &str) -> Option<Self>;
}

impl SettingValue for i32 {
    const TYPE_NAME: &'static str = "an int";

    fn parse_setting(raw: &str) -> Option<Self> {
        raw.trim().parse().ok()
    }
}

impl SettingValue for i16 {
    const TYPE_NAME: &'static str = "a short";

    fn parse_setting(raw: &str) -> Option<Self> {
        raw.trim().parse().ok()
    }
}

impl SettingValue for f64 {
    const TYPE_NAME: &'static str = "a double";

    fn parse_setting(raw: &str) -> Option<Self> {
        raw.trim().parse().ok()
    }
}

impl SettingValue for bool {
    const TYPE_NAME: &'static str = "a bool";

    /// Accepts `true` / `false` in any ASCII case.  `1`, `yes`, `on` are not
    /// booleans.
    fn parse_setting(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.eq_ignore_ascii_case("true") {
            Some(true)
        } else if raw.eq_ignore_ascii_case("false") {
            Some(false)
        } else {
            None
        }
    }
}

/// Returns `true` for the empty string and all-whitespace strings.
pub(crate) fn is_blank(raw: &str) -> bool {
    raw.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_parses_signed_decimal_with_padding() {
        assert_eq!(i32::parse_setting("42"), Some(42));
        assert_eq!(i32::parse_setting(" -7 "), Some(-7));
        assert_eq!(i32::parse_setting("+15"), Some(15));
    }

    #[test]
    fn test_int_rejects_non_integers_and_overflow() {
        assert_eq!(i32::parse_setting("bar"), None);
        assert_eq!(i32::parse_setting("1.5"), None);
        assert_eq!(i32::parse_setting("1,000"), None);
        assert_eq!(i32::parse_setting("2147483648"), None);
        assert_eq!(i32::parse_setting(""), None);
    }

    #[test]
    fn test_short_respects_16_bit_range() {
        assert_eq!(i16::parse_setting("32767"), Some(i16::MAX));
        assert_eq!(i16::parse_setting("-32768"), Some(i16::MIN));
        assert_eq!(i16::parse_setting("32768"), None);
    }

    #[test]
    fn test_double_uses_invariant_decimal_point() {
        assert_eq!(f64::parse_setting("2.5"), Some(2.5));
        assert_eq!(f64::parse_setting("1e3"), Some(1000.0));
        assert_eq!(f64::parse_setting(" -0.125 "), Some(-0.125));
        // A comma is never a decimal separator.
        assert_eq!(f64::parse_setting("2,5"), None);
        assert_eq!(f64::parse_setting("bar"), None);
    }

    #[test]
    fn test_bool_is_case_insensitive() {
        assert_eq!(bool::parse_setting("True"), Some(true));
        assert_eq!(bool::parse_setting("FALSE"), Some(false));
        assert_eq!(bool::parse_setting(" true "), Some(true));
    }

    #[test]
    fn test_bool_rejects_other_tokens() {
        for token in ["bar", "1", "0", "yes", "on", ""] {
            assert_eq!(bool::parse_setting(token), None, "token {token:?}");
        }
    }

    #[test]
    fn test_is_blank() {
        assert!(is_blank(""));
        assert!(is_blank(" \t\r\n"));
        assert!(!is_blank(" x "));
    }
}
