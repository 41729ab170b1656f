//! Encounter level ranges.

use pogo_core::{CpFilterOptions, LevelWindow};

/// Where a creature was obtained; determines the levels it can appear at.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum EncounterKind {
    Wild,
    Hatch,
    Raid,
    Quest,
}

/// Level range of one encounter kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Encounter {
    pub kind: EncounterKind,
    pub min_level: u16,
    pub max_level: u16,
    /// Extra levels granted when the encounter is weather boosted.
    #[cfg_attr(feature = "serde", serde(default))]
    pub weather_level_bonus: u16,
    /// Lowest IV of each stat when the encounter is weather boosted.
    #[cfg_attr(feature = "serde", serde(default))]
    pub weather_min_iv: u8,
}

impl Encounter {
    /// Levels a creature from this encounter can have.
    pub fn window(&self, weather_boosted: bool) -> LevelWindow {
        let bonus = if weather_boosted {
            self.weather_level_bonus
        } else {
            0
        };
        LevelWindow::new(self.min_level, self.max_level + bonus)
    }

    /// Restricts `options` to this encounter's levels and, when weather
    /// boosted, raises each per-stat minimum to the guaranteed IV floor.
    pub fn filter_options(
        &self,
        options: CpFilterOptions,
        weather_boosted: bool,
    ) -> CpFilterOptions {
        let options = options.with_window(self.window(weather_boosted));
        if !weather_boosted {
            return options;
        }
        let floor = self.weather_min_iv;
        options.with_min_ivs(
            options.min_attack.max(floor),
            options.min_defense.max(floor),
            options.min_stamina.max(floor),
        )
    }
}
