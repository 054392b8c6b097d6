//! Time units for duration settings.
//!
//! Duration settings are stored as plain numbers (`"1051200"`, `"2.5"`).
//! The getter picks the unit; the stored number is never reinterpreted.

use chrono::TimeDelta;

const NANOS_PER_MILLI: f64 = 1_000_000.0;
const NANOS_PER_SECOND: f64 = 1_000.0 * NANOS_PER_MILLI;
const NANOS_PER_MINUTE: f64 = 60.0 * NANOS_PER_SECOND;
const NANOS_PER_DAY: f64 = 24.0 * 60.0 * NANOS_PER_MINUTE;

/// The unit a numeric duration setting is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Milliseconds,
    Seconds,
    Minutes,
    Days,
}

impl TimeUnit {
    /// Lower-case plural name, as used in error messages.
    pub fn name(self) -> &'static str {
        match self {
            Self::Milliseconds => "milliseconds",
            Self::Seconds => "seconds",
            Self::Minutes => "minutes",
            Self::Days => "days",
        }
    }

    fn nanos_per_unit(self) -> f64 {
        match self {
            Self::Milliseconds => NANOS_PER_MILLI,
            Self::Seconds => NANOS_PER_SECOND,
            Self::Minutes => NANOS_PER_MINUTE,
            Self::Days => NANOS_PER_DAY,
        }
    }

    /// Converts `amount` of this unit to a [`TimeDelta`], rounded to the
    /// nearest nanosecond.  Negative amounts give negative spans.
    ///
    /// Returns `None` when `amount` is not finite or the span exceeds the
    /// range of `TimeDelta` (about 292 million years either way).
    ///
    /// ```rust
    /// use app_settings::{TimeDelta, TimeUnit};
    ///
    /// assert_eq!(TimeUnit::Minutes.to_duration(1.5), Some(TimeDelta::seconds(90)));
    /// assert_eq!(TimeUnit::Seconds.to_duration(-5.0), Some(TimeDelta::seconds(-5)));
    /// assert_eq!(TimeUnit::Seconds.to_duration(f64::NAN), None);
    /// ```
    pub fn to_duration(self, amount: f64) -> Option<TimeDelta> {
        let nanos = (amount * self.nanos_per_unit()).round();
        if !nanos.is_finite() {
            return None;
        }
        let secs = (nanos / NANOS_PER_SECOND).floor();
        // `i64::MAX as f64` rounds up to 2^63, so `>=` excludes it.
        if secs < i64::MIN as f64 || secs >= i64::MAX as f64 {
            return None;
        }
        let subsec = (nanos - secs * NANOS_PER_SECOND).clamp(0.0, NANOS_PER_SECOND - 1.0);
        TimeDelta::new(secs as i64, subsec as u32)
    }

    /// Like [`TimeUnit::to_duration`] but clamps instead of failing.
    ///
    /// `NaN` becomes zero; amounts beyond the range become
    /// `TimeDelta::MAX` or `TimeDelta::MIN`.
    pub fn to_duration_saturating(self, amount: f64) -> TimeDelta {
        match self.to_duration(amount) {
            Some(d) => d,
            None if amount > 0.0 => TimeDelta::MAX,
            None if amount < 0.0 => TimeDelta::MIN,
            None => TimeDelta::zero(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAYS_730_SECS: i64 = 730 * 24 * 60 * 60;

    #[test]
    fn test_minutes_scale_exactly() {
        // 1,051,200 minutes is 730 days.
        assert_eq!(
            TimeUnit::Minutes.to_duration(1_051_200.0),
            Some(TimeDelta::seconds(DAYS_730_SECS))
        );
    }

    #[test]
    fn test_each_unit_scales_the_same_number() {
        let n = 1_051_200.0;
        assert_eq!(TimeUnit::Milliseconds.to_duration(n), Some(TimeDelta::milliseconds(1_051_200)));
        assert_eq!(TimeUnit::Seconds.to_duration(n), Some(TimeDelta::seconds(1_051_200)));
        assert_eq!(TimeUnit::Days.to_duration(730.0), Some(TimeDelta::seconds(DAYS_730_SECS)));
    }

    #[test]
    fn test_fractional_amounts_round_to_nanoseconds() {
        assert_eq!(TimeUnit::Seconds.to_duration(0.25), Some(TimeDelta::milliseconds(250)));
        assert_eq!(TimeUnit::Milliseconds.to_duration(1.5), Some(TimeDelta::microseconds(1_500)));
    }

    #[test]
    fn test_zero_is_representable() {
        assert_eq!(TimeUnit::Days.to_duration(0.0), Some(TimeDelta::zero()));
    }

    #[test]
    fn test_negative_amounts_give_negative_spans() {
        assert_eq!(TimeUnit::Seconds.to_duration(-5.0), Some(TimeDelta::seconds(-5)));
        assert_eq!(TimeUnit::Seconds.to_duration(-0.5), Some(TimeDelta::milliseconds(-500)));
        assert_eq!(TimeUnit::Days.to_duration(-730.0), Some(TimeDelta::seconds(-DAYS_730_SECS)));
    }

    #[test]
    fn test_out_of_range_amounts_are_rejected() {
        assert_eq!(TimeUnit::Seconds.to_duration(f64::NAN), None);
        assert_eq!(TimeUnit::Seconds.to_duration(f64::INFINITY), None);
        assert_eq!(TimeUnit::Seconds.to_duration(f64::NEG_INFINITY), None);
        assert_eq!(TimeUnit::Days.to_duration(1e15), None);
        assert_eq!(TimeUnit::Days.to_duration(-1e15), None);
    }

    #[test]
    fn test_saturating_conversion_clamps() {
        assert_eq!(TimeUnit::Minutes.to_duration_saturating(-3.0), TimeDelta::minutes(-3));
        assert_eq!(TimeUnit::Minutes.to_duration_saturating(f64::NAN), TimeDelta::zero());
        assert_eq!(TimeUnit::Days.to_duration_saturating(1e300), TimeDelta::MAX);
        assert_eq!(TimeUnit::Days.to_duration_saturating(-1e300), TimeDelta::MIN);
        assert_eq!(TimeUnit::Minutes.to_duration_saturating(2.0), TimeDelta::seconds(120));
    }

    #[test]
    fn test_unit_names_are_plural() {
        assert_eq!(TimeUnit::Minutes.name(), "minutes");
        assert_eq!(TimeUnit::Milliseconds.name(), "milliseconds");
    }
}
