use std::fmt;
use std::str::FromStr;

use crate::app::infrastructure::error::AppError;

pub const DEFAULT_FONT_SIZE: u16 = 12;
pub const MIN_RECOMMENDED_FONT_SIZE: u16 = 8;
pub const MAX_RECOMMENDED_FONT_SIZE: u16 = 24;

/// Point size applied to every text-bearing widget of the feedback window.
///
/// Always positive. Values outside the recommended range are accepted by
/// the parser and brought back into range with [`FontSize::clamped`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FontSize(u16);

impl FontSize {
    pub fn new(points: u16) -> Result<Self, AppError> {
        if points == 0 {
            return Err(AppError::InvalidFontSize(
                "font size must be a positive integer".to_string(),
            ));
        }
        Ok(Self(points))
    }

    pub fn points(self) -> u16 {
        self.0
    }

    /// FLTK takes label and text sizes as `i32`
    pub fn as_fltk(self) -> i32 {
        i32::from(self.0)
    }

    pub fn is_recommended(self) -> bool {
        (MIN_RECOMMENDED_FONT_SIZE..=MAX_RECOMMENDED_FONT_SIZE).contains(&self.0)
    }

    pub fn clamped(self) -> Self {
        Self(self.0.clamp(MIN_RECOMMENDED_FONT_SIZE, MAX_RECOMMENDED_FONT_SIZE))
    }
}

impl Default for FontSize {
    fn default() -> Self {
        Self(DEFAULT_FONT_SIZE)
    }
}

impl fmt::Display for FontSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for FontSize {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: i64 = s
            .trim()
            .parse()
            .map_err(|_| AppError::InvalidFontSize(format!("'{}' is not an integer", s)))?;

        if value <= 0 {
            return Err(AppError::InvalidFontSize(format!(
                "{} is not a positive integer",
                value
            )));
        }

        // Anything this large gets clamped to the recommended maximum anyway
        let points = u16::try_from(value).unwrap_or(u16::MAX);
        Self::new(points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_twelve() {
        assert_eq!(FontSize::default().points(), 12);
        assert_eq!(FontSize::default().to_string(), "12");
    }

    #[test]
    fn test_parse_valid_integer() {
        let size: FontSize = "16".parse().unwrap();
        assert_eq!(size.points(), 16);
        assert_eq!(size.as_fltk(), 16);

        let padded: FontSize = " 9 ".parse().unwrap();
        assert_eq!(padded.points(), 9);
    }

    #[test]
    fn test_parse_rejects_non_integer() {
        for input in ["abc", "12.5", "", "twelve", "0x10"] {
            let err = input.parse::<FontSize>().unwrap_err();
            assert!(matches!(err, AppError::InvalidFontSize(_)), "input {:?}", input);
        }
    }

    #[test]
    fn test_parse_rejects_non_positive() {
        assert!("0".parse::<FontSize>().is_err());
        assert!("-4".parse::<FontSize>().is_err());
        assert!(FontSize::new(0).is_err());
    }

    #[test]
    fn test_huge_values_saturate() {
        let size: FontSize = "100000".parse().unwrap();
        assert_eq!(size.points(), u16::MAX);
        assert_eq!(size.clamped().points(), MAX_RECOMMENDED_FONT_SIZE);
    }

    #[test]
    fn test_recommended_range_is_untouched_by_clamp() {
        for points in MIN_RECOMMENDED_FONT_SIZE..=MAX_RECOMMENDED_FONT_SIZE {
            let size = FontSize::new(points).unwrap();
            assert!(size.is_recommended());
            assert_eq!(size.clamped(), size);
        }
    }

    #[test]
    fn test_out_of_range_clamps_to_nearest_bound() {
        let small = FontSize::new(5).unwrap();
        assert!(!small.is_recommended());
        assert_eq!(small.clamped().points(), 8);

        let large = FontSize::new(40).unwrap();
        assert!(!large.is_recommended());
        assert_eq!(large.clamped().points(), 24);
    }
}
