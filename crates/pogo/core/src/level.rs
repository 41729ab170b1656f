//! Levels, CP multipliers and stardust costs.
//!
//! The game exposes half levels between integer levels. [`Level`] counts in
//! half levels so it stays `Eq + Ord`, and [`LevelTable`] is the single place
//! that decides whether a half step exists above a given integer level.

use core::fmt;

use crate::error::TableError;
use crate::stats::cpm_step;

/// A trainer-visible level: an integer level or an integer plus one half.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Level(u16);

impl Level {
    /// Integer level `level`.
    pub const fn new(level: u16) -> Self {
        Self(level * 2)
    }

    /// Half level `level + 0.5`.
    pub const fn half(level: u16) -> Self {
        Self(level * 2 + 1)
    }

    /// Builds a level from a count of half levels (`41` is level 20.5).
    pub const fn from_halves(halves: u16) -> Self {
        Self(halves)
    }

    /// Number of half levels; orders levels without floating point.
    pub const fn halves(&self) -> u16 {
        self.0
    }

    /// Integer part of the level.
    pub const fn integer(&self) -> u16 {
        self.0 / 2
    }

    pub const fn is_half(&self) -> bool {
        self.0 % 2 == 1
    }

    pub fn as_f64(&self) -> f64 {
        f64::from(self.0) / 2.0
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_half() {
            write!(f, "{}.5", self.integer())
        } else {
            write!(f, "{}", self.integer())
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Level {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_f64(self.as_f64())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Level {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = <f64 as serde::Deserialize>::deserialize(deserializer)?;
        let halves = value * 2.0;
        if halves < 0.0 || halves.fract() != 0.0 || halves > f64::from(u16::MAX) {
            return Err(serde::de::Error::custom(format!(
                "level must be a non-negative multiple of 0.5, got {value}"
            )));
        }
        Ok(Self(halves as u16))
    }
}

/// Stardust cost observed on the power-up button.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StardustQuery {
    pub cost: u32,
    /// Lucky creatures pay a discounted cost.
    pub lucky: bool,
}

impl StardustQuery {
    pub const fn new(cost: u32) -> Self {
        Self { cost, lucky: false }
    }

    pub const fn lucky(cost: u32) -> Self {
        Self { cost, lucky: true }
    }
}

/// One row of a [`LevelTable`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LevelEntry {
    pub level: u16,
    pub cpm: f64,
    pub stardust: u32,
}

/// CP multipliers and stardust costs, indexed so that entry 0 is level 1.
#[derive(Clone, Debug, PartialEq)]
pub struct LevelTable {
    cp_multipliers: Vec<f64>,
    stardust_costs: Vec<u32>,
    lucky_scalar: f64,
}

impl LevelTable {
    /// Stardust discount applied to lucky creatures when content omits it.
    pub const DEFAULT_LUCKY_SCALAR: f64 = 0.5;

    pub fn new(cp_multipliers: Vec<f64>, stardust_costs: Vec<u32>) -> Result<Self, TableError> {
        if cp_multipliers.is_empty() {
            return Err(TableError::Empty);
        }
        if cp_multipliers.len() != stardust_costs.len() {
            return Err(TableError::LengthMismatch {
                multipliers: cp_multipliers.len(),
                stardust: stardust_costs.len(),
            });
        }
        if let Some((index, &value)) = cp_multipliers
            .iter()
            .enumerate()
            .find(|(_, cpm)| !(**cpm > 0.0))
        {
            return Err(TableError::InvalidMultiplier {
                level: index + 1,
                value,
            });
        }

        Ok(Self {
            cp_multipliers,
            stardust_costs,
            lucky_scalar: Self::DEFAULT_LUCKY_SCALAR,
        })
    }

    pub fn with_lucky_scalar(mut self, lucky_scalar: f64) -> Self {
        self.lucky_scalar = lucky_scalar;
        self
    }

    pub fn lucky_scalar(&self) -> f64 {
        self.lucky_scalar
    }

    /// Highest integer level in the table.
    pub fn max_level(&self) -> u16 {
        self.cp_multipliers.len() as u16
    }

    pub fn cp_multipliers(&self) -> &[f64] {
        &self.cp_multipliers
    }

    pub fn stardust_costs(&self) -> &[u32] {
        &self.stardust_costs
    }

    /// Iterates every integer level in ascending order.
    pub fn entries(&self) -> impl Iterator<Item = LevelEntry> + '_ {
        self.cp_multipliers
            .iter()
            .zip(&self.stardust_costs)
            .enumerate()
            .map(|(index, (&cpm, &stardust))| LevelEntry {
                level: index as u16 + 1,
                cpm,
                stardust,
            })
    }

    /// Multiplier of integer `level`.
    pub fn cpm(&self, level: u16) -> Option<f64> {
        let index = usize::from(level).checked_sub(1)?;
        self.cp_multipliers.get(index).copied()
    }

    /// Multiplier of the half level above integer `level`.
    ///
    /// The table's top level has no half step.
    pub fn half_step(&self, level: u16) -> Option<f64> {
        if level >= self.max_level() {
            return None;
        }
        cpm_step(self.cpm(level)?, u32::from(level))
    }

    /// Multiplier for any integer or half level.
    pub fn multiplier(&self, level: Level) -> Option<f64> {
        if level.is_half() {
            self.half_step(level.integer())
        } else {
            self.cpm(level.integer())
        }
    }

    /// Stardust cost charged at integer `level`, discounted for lucky creatures.
    pub fn stardust_cost(&self, level: u16, lucky: bool) -> Option<u32> {
        let index = usize::from(level).checked_sub(1)?;
        let cost = *self.stardust_costs.get(index)?;
        Some(self.scale_cost(cost, lucky))
    }

    /// Distinct stardust costs in table order.
    pub fn stardust_options(&self, lucky: bool) -> Vec<u32> {
        let mut options: Vec<u32> = Vec::new();
        for &cost in &self.stardust_costs {
            let cost = self.scale_cost(cost, lucky);
            if !options.contains(&cost) {
                options.push(cost);
            }
        }
        options
    }

    /// Integer levels whose stardust cost equals the query.
    ///
    /// Levels sharing a cost are not required to be contiguous.
    pub fn levels_for_stardust(&self, query: StardustQuery) -> impl Iterator<Item = LevelEntry> + '_ {
        self.entries()
            .filter(move |entry| self.scale_cost(entry.stardust, query.lucky) == query.cost)
    }

    fn scale_cost(&self, cost: u32, lucky: bool) -> u32 {
        if lucky {
            (f64::from(cost) * self.lucky_scalar).round() as u32
        } else {
            cost
        }
    }
}
