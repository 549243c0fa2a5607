use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::Add;

/// A score in integer tenths of a ring (`94.7` is `Tenths(947)`).
///
/// Sums of one-decimal scores are exact in this representation, which
/// binary floats cannot guarantee.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Tenths(pub i64);

impl Tenths {
    pub const ZERO: Tenths = Tenths(0);

    /// Rounds to the nearest tenth. `None` for NaN and infinities.
    pub fn from_f64(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        Some(Tenths((value * 10.0).round() as i64))
    }

    /// Parses a decimal string without going through a float when it is a
    /// plain `[+-]digits[.digits]` literal. Digits past the first decimal
    /// round half away from zero.
    pub fn parse(raw: &str) -> Option<Self> {
        let s = raw.trim();
        let (negative, digits) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s.strip_prefix('+').unwrap_or(s)),
        };
        let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits, ""));

        let is_plain = !(int_part.is_empty() && frac_part.is_empty())
            && int_part.bytes().all(|b| b.is_ascii_digit())
            && frac_part.bytes().all(|b| b.is_ascii_digit());
        if !is_plain {
            // Exponents and other float syntax.
            return parse_shot(s).and_then(Self::from_f64);
        }

        let whole: i64 = if int_part.is_empty() {
            0
        } else {
            int_part.parse().ok()?
        };
        let mut frac = frac_part.bytes().map(|b| i64::from(b - b'0'));
        let tenth = frac.next().unwrap_or(0);
        let carry = i64::from(frac.next().is_some_and(|d| d >= 5));

        let magnitude = whole.checked_mul(10)?.checked_add(tenth + carry)?;
        Some(Tenths(if negative { -magnitude } else { magnitude }))
    }

    pub fn to_f64(self) -> f64 {
        self.0 as f64 / 10.0
    }
}

impl Add for Tenths {
    type Output = Tenths;

    fn add(self, rhs: Tenths) -> Tenths {
        Tenths(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Tenths {
    fn sum<I: Iterator<Item = Tenths>>(iter: I) -> Tenths {
        iter.fold(Tenths::ZERO, Add::add)
    }
}

/// Running score sum in thousandths of a ring.
///
/// Terms keep up to three decimals exactly. Rounding to tenths happens once,
/// in [`Millis::to_tenths`], after the whole sum is known.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Millis(pub i64);

impl Millis {
    pub const ZERO: Millis = Millis(0);

    /// `None` for NaN and infinities.
    pub fn from_f64(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        Some(Millis((value * 1000.0).round() as i64))
    }

    /// Half away from zero.
    pub fn to_tenths(self) -> Tenths {
        let (q, r) = (self.0 / 100, self.0 % 100);
        if r.abs() >= 50 {
            Tenths(q + r.signum())
        } else {
            Tenths(q)
        }
    }

    /// Unrounded value, for dividing before the final rounding.
    pub fn to_f64(self) -> f64 {
        self.0 as f64 / 1000.0
    }
}

impl Add for Millis {
    type Output = Millis;

    fn add(self, rhs: Millis) -> Millis {
        Millis(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Millis {
    fn sum<I: Iterator<Item = Millis>>(iter: I) -> Millis {
        iter.fold(Millis::ZERO, Add::add)
    }
}

/// `round(value * 10) / 10`, half away from zero.
#[inline(always)]
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Reads one shot value. Blank, malformed and non-finite input is absent.
#[inline]
pub fn parse_shot(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
