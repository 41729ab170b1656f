//! Team-leader appraisal phrases.
//!
//! Each leader words the four tiers differently. Front-ends show these so the
//! trainer can pick the tier that matches what the leader said.

use super::AppraisalTier;

/// Trainer team; selects which leader performs the appraisal.
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
    strum::FromRepr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[repr(u8)]
pub enum Team {
    /// Blanche
    Mystic = 0,
    /// Candela
    Valor = 1,
    /// Spark
    Instinct = 2,
}

impl Team {
    /// Parses a team name (`"mystic"`) or index (`"0"`).
    pub fn parse(value: &str) -> Option<Self> {
        value
            .parse()
            .ok()
            .or_else(|| value.parse::<u8>().ok().and_then(Self::from_repr))
    }

    pub const fn leader(self) -> &'static str {
        match self {
            Self::Mystic => "Blanche",
            Self::Valor => "Candela",
            Self::Instinct => "Spark",
        }
    }

    /// The leader's IV-total phrase for `tier`, naming the creature.
    pub fn ivt_response(self, tier: AppraisalTier, name: &str) -> String {
        let tail = match (self, tier) {
            (Self::Mystic, AppraisalTier::Poor) => "is not likely to make much headway in battle.",
            (Self::Mystic, AppraisalTier::Decent) => "is above average.",
            (Self::Mystic, AppraisalTier::Strong) => "has certainly caught my attention.",
            (Self::Mystic, AppraisalTier::Amazing) => "is a wonder! What a breathtaking Pokémon!",
            (Self::Valor, AppraisalTier::Poor) => "has room for improvement as far as battling goes.",
            (Self::Valor, AppraisalTier::Decent) => "is pretty decent!",
            (Self::Valor, AppraisalTier::Strong) => "is really strong!",
            (Self::Valor, AppraisalTier::Amazing) => {
                "looks like it can really battle with the best of them!"
            }
            (Self::Instinct, AppraisalTier::Poor) => {
                "may not be great in battle, but I still like it!"
            }
            (Self::Instinct, AppraisalTier::Decent) => "is a decent Pokémon.",
            (Self::Instinct, AppraisalTier::Strong) => "is a strong Pokémon. You should be proud!",
            (Self::Instinct, AppraisalTier::Amazing) => "simply amazes me. It can accomplish anything!",
        };
        format!("Overall, your {name} {tail}")
    }

    /// The leader's best-stat phrase for `tier`.
    pub const fn iv_response(self, tier: AppraisalTier) -> &'static str {
        match (self, tier) {
            (Self::Mystic, AppraisalTier::Poor) => "Its stats are not out of the norm, in my estimation.",
            (Self::Mystic, AppraisalTier::Decent) => "Its stats are noticeably trending to the positive.",
            (Self::Mystic, AppraisalTier::Strong) => "I am certainly impressed by its stats, I must say.",
            (Self::Mystic, AppraisalTier::Amazing) => "Its stats exceed my calculations. It's incredible!",
            (Self::Valor, AppraisalTier::Poor) => {
                "Its stats are all right, but kinda basic, as far as I can see."
            }
            (Self::Valor, AppraisalTier::Decent) => "It's definitely got some good stats. Definitely!",
            (Self::Valor, AppraisalTier::Strong) => "Its stats are really strong! Impressive!",
            (Self::Valor, AppraisalTier::Amazing) => {
                "Its stats are the best I've ever seen! No doubt about it!"
            }
            (Self::Instinct, AppraisalTier::Poor) => "Its stats don't point to greatness in battle.",
            (Self::Instinct, AppraisalTier::Decent) => {
                "Its stats indicate that in battle, it'll get the job done."
            }
            (Self::Instinct, AppraisalTier::Strong) => "It's got excellent stats! How exciting!",
            (Self::Instinct, AppraisalTier::Amazing) => "I'm blown away by its stats. WOW!",
        }
    }
}
