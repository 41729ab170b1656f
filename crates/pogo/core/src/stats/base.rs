//! Base stats and individual values.

/// Highest value a single IV can take.
pub const MAX_IV: u8 = 15;

/// Highest IV total (`3 × MAX_IV`).
pub const MAX_IVT: u8 = MAX_IV * 3;

/// Species base stats as published in the gamemaster.
///
/// Owned by the content dictionary; the engine only reads them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BaseStats {
    pub attack: u16,
    pub defense: u16,
    pub stamina: u16,
}

impl BaseStats {
    pub const fn new(attack: u16, defense: u16, stamina: u16) -> Self {
        Self {
            attack,
            defense,
            stamina,
        }
    }
}

/// Hidden per-stat quality values, each in `[0, MAX_IV]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IvSet {
    pub attack: u8,
    pub defense: u8,
    pub stamina: u8,
}

impl IvSet {
    pub const fn new(attack: u8, defense: u8, stamina: u8) -> Self {
        Self {
            attack,
            defense,
            stamina,
        }
    }

    /// A perfect 15/15/15 spread.
    pub const fn perfect() -> Self {
        Self::new(MAX_IV, MAX_IV, MAX_IV)
    }

    /// Sum of the three IVs.
    pub const fn total(&self) -> u8 {
        self.attack + self.defense + self.stamina
    }

    /// Iterates the full `16³` IV space in attack, defense, stamina order.
    pub fn all() -> impl Iterator<Item = IvSet> {
        (0..=MAX_IV).flat_map(|attack| {
            (0..=MAX_IV).flat_map(move |defense| {
                (0..=MAX_IV).map(move |stamina| IvSet::new(attack, defense, stamina))
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iv_space_covers_every_triple_once() {
        let all: Vec<IvSet> = IvSet::all().collect();
        assert_eq!(all.len(), 16 * 16 * 16);
        assert_eq!(all.first(), Some(&IvSet::new(0, 0, 0)));
        assert_eq!(all.last(), Some(&IvSet::perfect()));
    }

    #[test]
    fn total_of_perfect_is_max_ivt() {
        assert_eq!(IvSet::perfect().total(), MAX_IVT);
        assert_eq!(MAX_IVT, 45);
    }
}
