//! Team-leader appraisal resolution.
//!
//! The in-game appraisal answers with one of four phrases for the IV total and
//! one of four for the best stat(s). Each phrase maps to a fixed inclusive
//! range; an unanswered question leaves the value unconstrained.

pub mod team;

pub use team::Team;

use core::ops::RangeInclusive;

use crate::stats::{MAX_IV, MAX_IVT};

/// One of the four appraisal responses, weakest first.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
    strum::FromRepr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[repr(u8)]
pub enum AppraisalTier {
    Poor = 0,
    Decent = 1,
    Strong = 2,
    Amazing = 3,
}

/// IV-total range per [`AppraisalTier`].
pub const IVT_RANGES: [(u8, u8); 4] = [(0, 22), (23, 29), (30, 36), (37, 45)];

/// Best-stat IV range per [`AppraisalTier`].
pub const IV_RANGES: [(u8, u8); 4] = [(0, 7), (8, 12), (13, 14), (15, 15)];

impl AppraisalTier {
    /// Tier for a response index (0 = weakest).
    pub fn from_index(index: usize) -> Option<Self> {
        u8::try_from(index).ok().and_then(Self::from_repr)
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn ivt_range(self) -> StatBounds {
        let (min, max) = IVT_RANGES[self.index()];
        StatBounds::new(min, max)
    }

    pub const fn iv_range(self) -> StatBounds {
        let (min, max) = IV_RANGES[self.index()];
        StatBounds::new(min, max)
    }
}

/// Inclusive `[min, max]` bounds. `min > max` is a valid empty range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatBounds {
    pub min: u8,
    pub max: u8,
}

impl StatBounds {
    pub const fn new(min: u8, max: u8) -> Self {
        Self { min, max }
    }

    /// Full single-IV range `[0, 15]`.
    pub const fn any_iv() -> Self {
        Self::new(0, MAX_IV)
    }

    /// Full IV-total range `[0, 45]`.
    pub const fn any_ivt() -> Self {
        Self::new(0, MAX_IVT)
    }

    pub const fn contains(&self, value: u8) -> bool {
        self.min <= value && value <= self.max
    }

    pub const fn is_empty(&self) -> bool {
        self.min > self.max
    }

    pub fn values(&self) -> RangeInclusive<u8> {
        self.min..=self.max
    }

    /// Values within the bounds that a single IV can take.
    pub fn iv_values(&self) -> RangeInclusive<u8> {
        self.min..=self.max.min(MAX_IV)
    }
}

/// Resolved bounds for the IV total and each stat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IvBounds {
    pub ivt: StatBounds,
    pub attack: StatBounds,
    pub defense: StatBounds,
    pub stamina: StatBounds,
}

impl IvBounds {
    pub const fn unconstrained() -> Self {
        Self {
            ivt: StatBounds::any_ivt(),
            attack: StatBounds::any_iv(),
            defense: StatBounds::any_iv(),
            stamina: StatBounds::any_iv(),
        }
    }
}

impl Default for IvBounds {
    fn default() -> Self {
        Self::unconstrained()
    }
}

/// The trainer's appraisal answers.
///
/// `att`/`def`/`sta` mark the stats the leader called out as best; the
/// single-IV tier applies only to those.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AppraisalInput {
    pub ivt: Option<AppraisalTier>,
    pub iv: Option<AppraisalTier>,
    pub att: bool,
    pub def: bool,
    pub sta: bool,
}

impl AppraisalInput {
    /// Resolves the answers into concrete bounds.
    pub fn resolve(&self) -> IvBounds {
        let ivt = self
            .ivt
            .map_or_else(StatBounds::any_ivt, AppraisalTier::ivt_range);
        let iv = self.iv.map_or_else(StatBounds::any_iv, AppraisalTier::iv_range);
        let pick = |flag: bool| if flag { iv } else { StatBounds::any_iv() };

        IvBounds {
            ivt,
            attack: pick(self.att),
            defense: pick(self.def),
            stamina: pick(self.sta),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unanswered_appraisal_is_unconstrained() {
        assert_eq!(AppraisalInput::default().resolve(), IvBounds::unconstrained());
    }

    #[test]
    fn tiers_map_to_fixed_ranges() {
        let input = AppraisalInput {
            ivt: Some(AppraisalTier::Amazing),
            iv: Some(AppraisalTier::Strong),
            att: true,
            def: false,
            sta: true,
        };
        let bounds = input.resolve();

        assert_eq!(bounds.ivt, StatBounds::new(37, 45));
        assert_eq!(bounds.attack, StatBounds::new(13, 14));
        assert_eq!(bounds.defense, StatBounds::new(0, 15));
        assert_eq!(bounds.stamina, StatBounds::new(13, 14));
    }

    #[test]
    fn flags_without_iv_tier_stay_unconstrained() {
        let input = AppraisalInput {
            ivt: Some(AppraisalTier::Poor),
            iv: None,
            att: true,
            ..Default::default()
        };
        let bounds = input.resolve();

        assert_eq!(bounds.ivt, StatBounds::new(0, 22));
        assert_eq!(bounds.attack, StatBounds::any_iv());
    }

    #[test]
    fn tier_lookup_by_index_and_name() {
        assert_eq!(AppraisalTier::from_index(3), Some(AppraisalTier::Amazing));
        assert_eq!(AppraisalTier::from_index(4), None);
        assert_eq!("strong".parse::<AppraisalTier>(), Ok(AppraisalTier::Strong));
        assert_eq!(AppraisalTier::Decent.iv_range(), StatBounds::new(8, 12));
    }

    #[test]
    fn inverted_bounds_are_empty() {
        let bounds = StatBounds::new(10, 3);
        assert!(bounds.is_empty());
        assert_eq!(bounds.values().count(), 0);
        assert!(!bounds.contains(5));
    }

    #[test]
    fn iv_values_stop_at_max_iv() {
        assert_eq!(StatBounds::new(0, 200).iv_values(), 0..=15);
        assert_eq!(StatBounds::new(16, 200).iv_values().count(), 0);
        assert_eq!(StatBounds::new(3, 7).iv_values(), 3..=7);
    }
}
