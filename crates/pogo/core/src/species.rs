//! Species identifiers.
//!
//! Content keys a species by its four-digit pokedex number, optionally
//! followed by a form suffix (`"0026"` Raichu, `"0026A"` Alolan Raichu).

use core::fmt;
use core::str::FromStr;

/// Width of the pokedex-number prefix.
const DEX_DIGITS: usize = 4;

/// Pokedex number plus optional form suffix.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct SpeciesId(String);

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("species id must start with four digits: {0:?}")]
pub struct InvalidSpeciesId(pub String);

impl SpeciesId {
    /// Pokedex number encoded in the first four digits.
    pub fn dex_number(&self) -> u16 {
        // Validated on construction.
        self.0[..DEX_DIGITS].parse().unwrap_or_default()
    }

    /// Id of the base species (the four-digit prefix).
    pub fn base(&self) -> SpeciesId {
        SpeciesId(self.0[..DEX_DIGITS].to_owned())
    }

    /// Form suffix, if any.
    pub fn form(&self) -> Option<&str> {
        let form = &self.0[DEX_DIGITS..];
        (!form.is_empty()).then_some(form)
    }

    pub fn is_form(&self) -> bool {
        self.0.len() > DEX_DIGITS
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for SpeciesId {
    type Err = InvalidSpeciesId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let valid = s.len() >= DEX_DIGITS
            && s.is_char_boundary(DEX_DIGITS)
            && s[..DEX_DIGITS].bytes().all(|b| b.is_ascii_digit());
        if valid {
            Ok(Self(s.to_owned()))
        } else {
            Err(InvalidSpeciesId(s.to_owned()))
        }
    }
}

impl TryFrom<String> for SpeciesId {
    type Error = InvalidSpeciesId;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SpeciesId> for String {
    fn from(id: SpeciesId) -> Self {
        id.0
    }
}

impl fmt::Display for SpeciesId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}
