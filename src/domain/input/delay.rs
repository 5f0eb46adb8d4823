//! Delay value object

use std::fmt;
use std::str::FromStr;
use std::time::Duration as StdDuration;

use crate::domain::error::DelayParseError;

/// Pause inserted between (or before) synthesized input events.
///
/// Always non-negative. Signed inputs are clamped to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Delay {
    milliseconds: u64,
}

impl Delay {
    /// No pause.
    pub const ZERO: Self = Self::from_millis(0);

    /// Create a Delay from milliseconds
    pub const fn from_millis(ms: u64) -> Self {
        Self { milliseconds: ms }
    }

    /// Create a Delay from a signed millisecond count, clamping negatives to zero.
    pub const fn from_signed_millis(ms: i64) -> Self {
        if ms < 0 {
            Self::ZERO
        } else {
            Self::from_millis(ms as u64)
        }
    }

    /// Create a Delay from seconds
    pub const fn from_secs(secs: u64) -> Self {
        Self {
            milliseconds: secs * 1000,
        }
    }

    pub const fn is_zero(&self) -> bool {
        self.milliseconds == 0
    }

    /// Get delay in milliseconds
    pub const fn as_millis(&self) -> u64 {
        self.milliseconds
    }

    /// Convert to std::time::Duration
    pub const fn as_std(&self) -> StdDuration {
        StdDuration::from_millis(self.milliseconds)
    }
}

impl From<StdDuration> for Delay {
    fn from(d: StdDuration) -> Self {
        Self::from_millis(u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
    }
}

impl FromStr for Delay {
    type Err = DelayParseError;

    /// Parse a delay string.
    /// Supported formats: "50" (milliseconds), "50ms", "2s", "1m", "1s500ms"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim().to_lowercase();
        let invalid = || DelayParseError { input: s.to_string() };

        if input.is_empty() {
            return Err(invalid());
        }

        if input.chars().all(|c| c.is_ascii_digit()) {
            return input.parse().map(Self::from_millis).map_err(|_| invalid());
        }

        let mut total: u64 = 0;
        let mut rest = input.as_str();

        while !rest.is_empty() {
            let digits_end = rest
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(rest.len());
            if digits_end == 0 {
                return Err(invalid());
            }
            let value: u64 = rest[..digits_end].parse().map_err(|_| invalid())?;
            rest = &rest[digits_end..];

            let unit_end = rest.find(|c: char| c.is_ascii_digit()).unwrap_or(rest.len());
            let factor = match &rest[..unit_end] {
                "ms" => 1,
                "s" => 1_000,
                "m" => 60_000,
                _ => return Err(invalid()),
            };
            rest = &rest[unit_end..];

            total = value
                .checked_mul(factor)
                .and_then(|v| total.checked_add(v))
                .ok_or_else(invalid)?;
        }

        Ok(Self::from_millis(total))
    }
}

impl fmt::Display for Delay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.milliseconds == 0 {
            return write!(f, "0ms");
        }

        let minutes = self.milliseconds / 60_000;
        let seconds = (self.milliseconds % 60_000) / 1000;
        let millis = self.milliseconds % 1000;

        if minutes > 0 {
            write!(f, "{}m", minutes)?;
        }
        if seconds > 0 {
            write!(f, "{}s", seconds)?;
        }
        if millis > 0 {
            write!(f, "{}ms", millis)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_bare_number_is_millis() {
        let d: Delay = "50".parse().unwrap();
        assert_eq!(d.as_millis(), 50);
    }

    #[test]
    fn parse_units() {
        assert_eq!("50ms".parse::<Delay>().unwrap().as_millis(), 50);
        assert_eq!("2s".parse::<Delay>().unwrap().as_millis(), 2000);
        assert_eq!("1m".parse::<Delay>().unwrap().as_millis(), 60_000);
    }

    #[test]
    fn parse_compound() {
        assert_eq!("1s500ms".parse::<Delay>().unwrap().as_millis(), 1500);
        assert_eq!("1m30s".parse::<Delay>().unwrap().as_millis(), 90_000);
    }

    #[test]
    fn parse_case_insensitive_and_trimmed() {
        assert_eq!("  2S ".parse::<Delay>().unwrap().as_millis(), 2000);
        assert_eq!("100MS".parse::<Delay>().unwrap().as_millis(), 100);
    }

    #[test]
    fn parse_zero_is_allowed() {
        assert!("0".parse::<Delay>().unwrap().is_zero());
        assert!("0ms".parse::<Delay>().unwrap().is_zero());
    }

    #[test]
    fn parse_invalid() {
        assert!("".parse::<Delay>().is_err());
        assert!("abc".parse::<Delay>().is_err());
        assert!("10x".parse::<Delay>().is_err());
        assert!("1s500".parse::<Delay>().is_err());
        assert!("ms".parse::<Delay>().is_err());
        assert!("-50".parse::<Delay>().is_err());
    }

    #[test]
    fn parse_overflow_is_rejected() {
        assert!("99999999999999999999m".parse::<Delay>().is_err());
        assert!("999999999999999999m".parse::<Delay>().is_err());
    }

    #[test]
    fn negative_signed_millis_clamp_to_zero() {
        assert_eq!(Delay::from_signed_millis(-100), Delay::ZERO);
        assert_eq!(Delay::from_signed_millis(i64::MIN), Delay::ZERO);
        assert_eq!(Delay::from_signed_millis(250).as_millis(), 250);
    }

    #[test]
    fn display_forms() {
        assert_eq!(Delay::ZERO.to_string(), "0ms");
        assert_eq!(Delay::from_millis(50).to_string(), "50ms");
        assert_eq!(Delay::from_millis(1500).to_string(), "1s500ms");
        assert_eq!(Delay::from_secs(60).to_string(), "1m");
        assert_eq!(Delay::from_secs(90).to_string(), "1m30s");
    }

    #[test]
    fn display_parses_back() {
        let d = Delay::from_millis(61_250);
        assert_eq!(d.to_string().parse::<Delay>().unwrap(), d);
    }

    #[test]
    fn as_std_duration() {
        assert_eq!(Delay::from_millis(75).as_std(), StdDuration::from_millis(75));
    }

    #[test]
    fn from_std_duration() {
        assert_eq!(Delay::from(StdDuration::from_secs(2)).as_millis(), 2000);
    }

    #[test]
    fn default_is_zero() {
        assert!(Delay::default().is_zero());
    }
}
