//! Presentation ordering for combination lists.

use core::cmp::Ordering;

use super::Combination;

/// Column to sort combinations by.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SortKey {
    /// IV total
    #[default]
    Ivt,
    Att,
    Def,
    Sta,
    /// Level
    Lv,
}

/// Sort direction, `+1` ascending or `-1` descending.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(ascii_case_insensitive)]
pub enum SortOrder {
    #[strum(to_string = "asc", serialize = "ascending", serialize = "1", serialize = "+1")]
    Ascending,
    #[default]
    #[strum(to_string = "desc", serialize = "descending", serialize = "-1")]
    Descending,
}

impl SortOrder {
    pub const fn sign(self) -> i32 {
        match self {
            Self::Ascending => 1,
            Self::Descending => -1,
        }
    }

    /// Order from a signed direction; any negative value is descending.
    pub const fn from_sign(sign: i32) -> Self {
        if sign < 0 {
            Self::Descending
        } else {
            Self::Ascending
        }
    }
}

impl SortKey {
    /// Sortable value of `combination` under this key; levels sort by half levels.
    pub fn value(self, combination: &Combination) -> i32 {
        match self {
            Self::Ivt => i32::from(combination.ivt),
            Self::Att => i32::from(combination.attack),
            Self::Def => i32::from(combination.defense),
            Self::Sta => i32::from(combination.stamina),
            Self::Lv => i32::from(combination.level.halves()),
        }
    }
}

/// Returns a sorted copy of `combinations`.
///
/// Ordering is `order × (a[key] − b[key])`; equal keys keep their input order.
pub fn sort_combinations(
    combinations: &[Combination],
    key: SortKey,
    order: SortOrder,
) -> Vec<Combination> {
    let mut sorted = combinations.to_vec();
    sorted.sort_by(|a, b| compare(a, b, key, order));
    sorted
}

/// Comparator form of [`sort_combinations`] for callers sorting in place.
pub fn compare(a: &Combination, b: &Combination, key: SortKey, order: SortOrder) -> Ordering {
    (order.sign() * (key.value(a) - key.value(b))).cmp(&0)
}
