//! Hints that narrow down the secret on the later levels.
//!
//! A hint unlocks from level 3 onward once the Defender has missed twice on
//! the current level. The kind of hint comes from the difficulty table. A
//! hint never pins the secret down to a single value: if the configured kind
//! would, the provider falls back to a coarser one.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::category::Level;
use crate::selector::Secret;
use crate::table::{LevelRules, NumberRange};

/// First level on which hints can appear.
pub const HINT_MIN_LEVEL: u32 = 3;

/// Wrong guesses needed on a level before its hint unlocks.
pub const HINT_MIN_WRONG_GUESSES: u32 = 2;

/// The kind of clue a level hands out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HintKind {
    /// Whether the secret is even or odd.
    Parity,
    /// Which half of the level range holds the secret.
    HalfRange,
    /// Which quarter of the level range holds the secret.
    QuarterRange,
    /// The leading digit of the secret.
    FirstDigit,
    /// The final digit of the secret.
    LastDigit,
}

impl HintKind {
    /// The coarser kind to use when this one would give the secret away.
    fn fallback(self) -> Option<HintKind> {
        match self {
            Self::QuarterRange | Self::FirstDigit | Self::LastDigit => Some(Self::HalfRange),
            Self::HalfRange => Some(Self::Parity),
            Self::Parity => None,
        }
    }
}

impl fmt::Display for HintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parity => write!(f, "parity"),
            Self::HalfRange => write!(f, "half range"),
            Self::QuarterRange => write!(f, "quarter range"),
            Self::FirstDigit => write!(f, "first digit"),
            Self::LastDigit => write!(f, "last digit"),
        }
    }
}

/// A fact about the secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Hint {
    /// The secret is even.
    Even,
    /// The secret is odd.
    Odd,
    /// The secret lies within `low..=high`.
    Between {
        /// Lower bound (inclusive).
        low: u32,
        /// Upper bound (inclusive).
        high: u32,
    },
    /// The secret's leading digit.
    StartsWith(u32),
    /// The secret's final digit.
    EndsWith(u32),
}

impl Hint {
    /// Whether `n` is consistent with this hint.
    pub fn admits(&self, n: u32) -> bool {
        match *self {
            Self::Even => n % 2 == 0,
            Self::Odd => n % 2 == 1,
            Self::Between { low, high } => (low..=high).contains(&n),
            Self::StartsWith(d) => leading_digit(n) == d,
            Self::EndsWith(d) => n % 10 == d,
        }
    }

    /// How many values of `range` remain possible under this hint.
    pub fn candidates(&self, range: NumberRange) -> u64 {
        if range.max < range.min {
            return 0;
        }
        let (min, max) = (u64::from(range.min), u64::from(range.max));
        match *self {
            Self::Even => range.size() - odd_count(min, max),
            Self::Odd => odd_count(min, max),
            Self::Between { low, high } => overlap(min, max, u64::from(low), u64::from(high)),
            Self::StartsWith(0) => u64::from(range.contains(0)),
            Self::StartsWith(d) if d <= 9 => {
                let d = u64::from(d);
                let mut total = 0;
                let mut scale = 1;
                while d * scale <= max {
                    total += overlap(min, max, d * scale, (d + 1) * scale - 1);
                    scale *= 10;
                }
                total
            }
            Self::EndsWith(d) if d <= 9 => {
                let d = u64::from(d);
                // Values in 0..=n ending with d.
                let upto = |n: u64| if n < d { 0 } else { (n - d) / 10 + 1 };
                upto(max) - min.checked_sub(1).map_or(0, upto)
            }
            Self::StartsWith(_) | Self::EndsWith(_) => 0,
        }
    }
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Even => write!(f, "The number is even"),
            Self::Odd => write!(f, "The number is odd"),
            Self::Between { low, high } => write!(f, "The number is between {low} and {high}"),
            Self::StartsWith(d) => write!(f, "The number starts with {d}"),
            Self::EndsWith(d) => write!(f, "The number ends with {d}"),
        }
    }
}

/// Whether a hint is available on `level` after `wrong_count` misses.
pub fn is_eligible(level: Level, wrong_count: u32) -> bool {
    level.get() >= HINT_MIN_LEVEL && wrong_count >= HINT_MIN_WRONG_GUESSES
}

/// Produce the hint for the current level, if one has unlocked.
pub fn maybe_hint(
    secret: Secret,
    level: Level,
    wrong_count: u32,
    rules: &LevelRules,
) -> Option<Hint> {
    if !is_eligible(level, wrong_count) {
        return None;
    }

    let mut kind = rules.hint.unwrap_or(HintKind::Parity);
    loop {
        let hint = build(kind, secret.value(), rules.range);
        if hint.candidates(rules.range) > 1 {
            return Some(hint);
        }
        match kind.fallback() {
            Some(coarser) => kind = coarser,
            // Only reachable with a range below the table minimum.
            None => return Some(hint),
        }
    }
}

fn build(kind: HintKind, secret: u32, range: NumberRange) -> Hint {
    match kind {
        HintKind::Parity if secret % 2 == 0 => Hint::Even,
        HintKind::Parity => Hint::Odd,
        HintKind::HalfRange => {
            let mid = range.min + (range.max - range.min) / 2;
            if secret <= mid {
                Hint::Between {
                    low: range.min,
                    high: mid,
                }
            } else {
                Hint::Between {
                    low: mid + 1,
                    high: range.max,
                }
            }
        }
        HintKind::QuarterRange => {
            let chunk = range.size().div_ceil(4).max(1);
            let offset = u64::from(secret.saturating_sub(range.min)) / chunk * chunk;
            let low = u64::from(range.min) + offset;
            let high = (low + chunk - 1).min(u64::from(range.max));
            Hint::Between {
                low: u32::try_from(low).unwrap_or(range.max),
                high: u32::try_from(high).unwrap_or(range.max),
            }
        }
        HintKind::FirstDigit => Hint::StartsWith(leading_digit(secret)),
        HintKind::LastDigit => Hint::EndsWith(secret % 10),
    }
}

/// Odd values in `min..=max`.
fn odd_count(min: u64, max: u64) -> u64 {
    max.div_ceil(2) - min / 2
}

/// Size of the intersection of two inclusive intervals.
fn overlap(min: u64, max: u64, low: u64, high: u64) -> u64 {
    let (lo, hi) = (min.max(low), max.min(high));
    if lo > hi { 0 } else { hi - lo + 1 }
}

fn leading_digit(mut n: u32) -> u32 {
    while n >= 10 {
        n /= 10;
    }
    n
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn rules(min: u32, max: u32, hint: HintKind) -> LevelRules {
        LevelRules {
            range: NumberRange::new(min, max),
            starting_hp: 3,
            hint: Some(hint),
        }
    }

    fn level(n: u32) -> Level {
        Level::new(n).unwrap()
    }

    #[test]
    fn locked_below_level_three() {
        let r = rules(1, 10, HintKind::Parity);
        for wrong in 0..10 {
            assert_eq!(maybe_hint(Secret::new(4), level(1), wrong, &r), None);
            assert_eq!(maybe_hint(Secret::new(4), level(2), wrong, &r), None);
        }
    }

    #[test]
    fn locked_below_two_misses() {
        let r = rules(1, 10, HintKind::Parity);
        for l in 3..=5 {
            assert_eq!(maybe_hint(Secret::new(4), level(l), 0, &r), None);
            assert_eq!(maybe_hint(Secret::new(4), level(l), 1, &r), None);
        }
    }

    #[test]
    fn parity_hint() {
        let r = rules(1, 13, HintKind::Parity);
        assert_eq!(maybe_hint(Secret::new(8), level(3), 2, &r), Some(Hint::Even));
        assert_eq!(maybe_hint(Secret::new(7), level(3), 5, &r), Some(Hint::Odd));
    }

    #[test]
    fn half_range_hint() {
        let r = rules(1, 15, HintKind::HalfRange);
        assert_eq!(
            maybe_hint(Secret::new(8), level(4), 2, &r),
            Some(Hint::Between { low: 1, high: 8 })
        );
        assert_eq!(
            maybe_hint(Secret::new(9), level(4), 2, &r),
            Some(Hint::Between { low: 9, high: 15 })
        );
    }

    #[test]
    fn quarter_range_hint() {
        let r = rules(100, 1998, HintKind::QuarterRange);
        let hint = maybe_hint(Secret::new(1234), level(5), 2, &r).unwrap();
        assert_eq!(hint, Hint::Between { low: 1050, high: 1524 });
        assert!(hint.admits(1234));
    }

    #[test]
    fn quarter_range_covers_upper_edge() {
        let r = rules(1, 20, HintKind::QuarterRange);
        assert_eq!(
            maybe_hint(Secret::new(20), level(5), 3, &r),
            Some(Hint::Between { low: 16, high: 20 })
        );
    }

    #[test]
    fn digit_hints() {
        let r = rules(10, 148, HintKind::FirstDigit);
        assert_eq!(
            maybe_hint(Secret::new(47), level(3), 2, &r),
            Some(Hint::StartsWith(4))
        );
        let r = rules(10, 148, HintKind::LastDigit);
        assert_eq!(
            maybe_hint(Secret::new(47), level(3), 2, &r),
            Some(Hint::EndsWith(7))
        );
    }

    #[test]
    fn first_digit_falls_back_on_single_digit_range() {
        // In 1-10 the leading digit of 7 is 7 itself.
        let r = rules(1, 10, HintKind::FirstDigit);
        let hint = maybe_hint(Secret::new(7), level(3), 2, &r).unwrap();
        assert_eq!(hint, Hint::Between { low: 6, high: 10 });
    }

    #[test]
    fn quarter_falls_back_on_tiny_range() {
        let r = rules(1, 4, HintKind::QuarterRange);
        let hint = maybe_hint(Secret::new(3), level(5), 2, &r).unwrap();
        assert_eq!(hint, Hint::Between { low: 3, high: 4 });
    }

    #[test]
    fn missing_tier_defaults_to_parity() {
        let r = LevelRules {
            range: NumberRange::new(1, 10),
            starting_hp: 3,
            hint: None,
        };
        assert_eq!(maybe_hint(Secret::new(3), level(3), 2, &r), Some(Hint::Odd));
    }

    #[test]
    fn never_reveals_secret_in_default_ranges() {
        let table = crate::table::DifficultyTable::default();
        for category in crate::category::Category::ALL {
            for l in 3..=5 {
                let r = table.rules(category, level(l));
                for secret in r.range.min..=r.range.max {
                    let hint = maybe_hint(Secret::new(secret), level(l), 2, r).unwrap();
                    assert!(hint.admits(secret));
                    assert!(hint.candidates(r.range) > 1, "{hint} reveals {secret}");
                }
            }
        }
    }

    #[test]
    fn display_text() {
        insta::assert_snapshot!(Hint::Even.to_string(), @"The number is even");
        insta::assert_snapshot!(
            Hint::Between { low: 100, high: 574 }.to_string(),
            @"The number is between 100 and 574"
        );
        insta::assert_snapshot!(Hint::StartsWith(3).to_string(), @"The number starts with 3");
        insta::assert_snapshot!(Hint::EndsWith(0).to_string(), @"The number ends with 0");
    }

    #[test]
    fn large_range_counts_without_scanning() {
        let range = NumberRange::new(0, u32::MAX);
        assert_eq!(Hint::Even.candidates(range), 1_u64 << 31);
        assert_eq!(Hint::Odd.candidates(range), 1_u64 << 31);
        assert_eq!(Hint::EndsWith(7).candidates(range), 429_496_729);
        assert_eq!(Hint::StartsWith(4).candidates(range), 406_078_407);
        assert_eq!(
            Hint::Between { low: 10, high: 19 }.candidates(range),
            10
        );

        let r = rules(1, 400_000_000, HintKind::QuarterRange);
        let hint = maybe_hint(Secret::new(399_999_999), level(3), 2, &r).unwrap();
        assert_eq!(
            hint,
            Hint::Between {
                low: 300_000_001,
                high: 400_000_000
            }
        );

        let r = rules(0, u32::MAX, HintKind::QuarterRange);
        let hint = maybe_hint(Secret::new(u32::MAX), level(5), 2, &r).unwrap();
        assert!(hint.admits(u32::MAX));
        assert_eq!(hint.candidates(r.range), 1_u64 << 30);
    }

    proptest! {
        #[test]
        fn counts_match_a_scan(
            min in 0u32..3000,
            len in 0u32..3000,
            d in 0u32..10,
            low in 0u32..6000,
            width in 0u32..500,
        ) {
            let range = NumberRange::new(min, min + len);
            let hints = [
                Hint::Even,
                Hint::Odd,
                Hint::StartsWith(d),
                Hint::EndsWith(d),
                Hint::Between { low, high: low + width },
            ];
            for hint in hints {
                let scanned = (range.min..=range.max).filter(|&n| hint.admits(n)).count() as u64;
                prop_assert_eq!(hint.candidates(range), scanned, "{:?}", hint);
            }
        }
    }

    #[test]
    fn serde_kind_names() {
        let kind: HintKind = serde_json::from_str("\"quarter_range\"").unwrap();
        assert_eq!(kind, HintKind::QuarterRange);
    }
}
