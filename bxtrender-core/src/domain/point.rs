//! IndicatorPoint — one plotted oscillator value with its derived color.

use serde::{Deserialize, Serialize};

/// Histogram color for an oscillator bar.
///
/// Bullish side brightens lime when rising, bearish side darkens when
/// falling. "Light red" (negative but rising) and "dark red" (negative and
/// falling or flat) drive the Defensive/Aggressive exit rules, so the color
/// is part of the signal model, not just presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BarColor {
    Lime,
    Green,
    Red,
    DarkRed,
}

impl BarColor {
    /// Single-oscillator coloring rule: sign picks the side, slope picks the
    /// shade. A bar at exactly zero counts as bearish-side.
    pub fn from_value(value: f64, prev: f64) -> Self {
        let rising = value > prev;
        if value > 0.0 {
            if rising {
                BarColor::Lime
            } else {
                BarColor::Green
            }
        } else if rising {
            BarColor::Red
        } else {
            BarColor::DarkRed
        }
    }

    /// Joint-alignment coloring used by the Quant/Ditz modes: when both
    /// oscillators share a strict sign, that alignment overrides the
    /// single-oscillator side; slope still picks the shade.
    pub fn from_joint(value: f64, prev: f64, short: f64, long: f64) -> Self {
        let rising = value > prev;
        if short > 0.0 && long > 0.0 {
            if rising {
                BarColor::Lime
            } else {
                BarColor::Green
            }
        } else if short < 0.0 && long < 0.0 {
            if rising {
                BarColor::Red
            } else {
                BarColor::DarkRed
            }
        } else {
            Self::from_value(value, prev)
        }
    }
}

/// One oscillator value at one bar, ready for charting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndicatorPoint {
    pub time: i64,
    pub value: f64,
    pub color: BarColor,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_rising_is_lime() {
        assert_eq!(BarColor::from_value(5.0, 3.0), BarColor::Lime);
    }

    #[test]
    fn positive_falling_is_green() {
        assert_eq!(BarColor::from_value(3.0, 5.0), BarColor::Green);
        assert_eq!(BarColor::from_value(3.0, 3.0), BarColor::Green); // flat
    }

    #[test]
    fn negative_rising_is_light_red() {
        assert_eq!(BarColor::from_value(-3.0, -5.0), BarColor::Red);
    }

    #[test]
    fn negative_falling_or_flat_is_dark_red() {
        assert_eq!(BarColor::from_value(-5.0, -3.0), BarColor::DarkRed);
        assert_eq!(BarColor::from_value(-5.0, -5.0), BarColor::DarkRed);
    }

    #[test]
    fn zero_counts_as_bearish_side() {
        assert_eq!(BarColor::from_value(0.0, -1.0), BarColor::Red);
        assert_eq!(BarColor::from_value(0.0, 1.0), BarColor::DarkRed);
    }

    #[test]
    fn joint_positive_overrides_single_rule() {
        // Both oscillators positive: alignment holds, shade from slope.
        assert_eq!(BarColor::from_joint(2.0, 3.0, 2.0, 4.0), BarColor::Green);
        assert_eq!(BarColor::from_joint(2.0, 1.0, 2.0, 4.0), BarColor::Lime);
    }

    #[test]
    fn joint_negative_forces_red_shades() {
        assert_eq!(BarColor::from_joint(-2.0, -3.0, -2.0, -4.0), BarColor::Red);
        assert_eq!(
            BarColor::from_joint(-2.0, -1.0, -2.0, -4.0),
            BarColor::DarkRed
        );
    }

    #[test]
    fn mixed_signs_fall_back_to_single_rule() {
        assert_eq!(BarColor::from_joint(2.0, 1.0, 2.0, -4.0), BarColor::Lime);
        assert_eq!(BarColor::from_joint(-2.0, -1.0, -2.0, 4.0), BarColor::DarkRed);
    }
}
