//! Species dictionary.
//!
//! Entries are keyed by [`SpeciesId`]. Form entries (`"0026A"`) may omit
//! stats and inherit them from their base entry (`"0026"`). Entries marked
//! `base` only carry shared data for their forms and are not listed.

use std::collections::BTreeMap;

use pogo_core::{BaseStats, SpeciesId, SpeciesOracle};

/// One record of the species dictionary as stored in content.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PokedexEntry {
    pub id: SpeciesId,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub stats: Option<BaseStats>,
    /// Shared record for a species whose forms are listed instead.
    #[cfg_attr(feature = "serde", serde(default))]
    pub base: bool,
}

/// A species with form data merged over its base entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Species<'a> {
    pub id: &'a SpeciesId,
    pub name: &'a str,
    pub stats: Option<BaseStats>,
    pub prev: Option<&'a SpeciesId>,
    pub next: Option<&'a SpeciesId>,
}

#[derive(Clone, Debug, Default)]
pub struct Pokedex {
    entries: BTreeMap<SpeciesId, PokedexEntry>,
}

impl Pokedex {
    /// Builds a dictionary; later duplicates replace earlier entries.
    pub fn new(entries: impl IntoIterator<Item = PokedexEntry>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|entry| (entry.id.clone(), entry))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entry(&self, id: &SpeciesId) -> Option<&PokedexEntry> {
        self.entries.get(id)
    }

    /// Selectable species in dex order, forms after their base species.
    pub fn list(&self) -> impl Iterator<Item = &PokedexEntry> {
        self.entries.values().filter(|entry| !entry.base)
    }

    /// Previous and next selectable species around `id`.
    pub fn neighbors(&self, id: &SpeciesId) -> (Option<&SpeciesId>, Option<&SpeciesId>) {
        let listed: Vec<&SpeciesId> = self.list().map(|entry| &entry.id).collect();
        match listed.iter().position(|listed_id| *listed_id == id) {
            Some(index) => (
                index.checked_sub(1).map(|prev| listed[prev]),
                listed.get(index + 1).copied(),
            ),
            None => (None, None),
        }
    }

    /// Resolves `id` with inherited stats and list neighbours.
    pub fn species(&self, id: &SpeciesId) -> Option<Species<'_>> {
        let entry = self.entries.get(id)?;
        let (prev, next) = self.neighbors(id);
        Some(Species {
            id: &entry.id,
            name: &entry.name,
            stats: self.base_stats(id),
            prev,
            next,
        })
    }

    /// Listed species whose name contains `query` (case-insensitive) or whose
    /// id starts with it.
    pub fn search<'a>(&'a self, query: &'a str) -> impl Iterator<Item = &'a PokedexEntry> + 'a {
        let needle = query.to_lowercase();
        self.list().filter(move |entry| {
            entry.id.as_str().starts_with(query) || entry.name.to_lowercase().contains(&needle)
        })
    }
}

impl SpeciesOracle for Pokedex {
    fn base_stats(&self, id: &SpeciesId) -> Option<BaseStats> {
        let entry = self.entries.get(id)?;
        entry.stats.or_else(|| {
            if id.is_form() {
                self.entries.get(&id.base()).and_then(|base| base.stats)
            } else {
                None
            }
        })
    }

    fn name(&self, id: &SpeciesId) -> Option<&str> {
        self.entries.get(id).map(|entry| entry.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(value: &str) -> SpeciesId {
        value.parse().unwrap()
    }

    fn entry(value: &str, name: &str, stats: Option<BaseStats>, base: bool) -> PokedexEntry {
        PokedexEntry {
            id: id(value),
            name: name.to_owned(),
            stats,
            base,
        }
    }

    fn pokedex() -> Pokedex {
        Pokedex::new([
            entry("0019", "Rattata", Some(BaseStats::new(103, 70, 102)), false),
            entry("0019A", "Alolan Rattata", None, false),
            entry("0351", "Castform", Some(BaseStats::new(139, 139, 172)), true),
            entry("0351A", "Castform Sunny", None, false),
            entry("0150", "Mewtwo", Some(BaseStats::new(300, 182, 214)), false),
        ])
    }

    #[test]
    fn forms_inherit_base_stats() {
        let dex = pokedex();
        assert_eq!(
            dex.base_stats(&id("0019A")),
            Some(BaseStats::new(103, 70, 102))
        );
        assert_eq!(
            dex.base_stats(&id("0351A")),
            Some(BaseStats::new(139, 139, 172))
        );
        assert_eq!(dex.base_stats(&id("9999")), None);
    }

    #[test]
    fn base_records_are_not_listed() {
        let dex = pokedex();
        let listed: Vec<&str> = dex.list().map(|entry| entry.id.as_str()).collect();
        assert_eq!(listed, vec!["0019", "0019A", "0150", "0351A"]);
    }

    #[test]
    fn neighbors_follow_list_order() {
        let dex = pokedex();
        let species = dex.species(&id("0150")).unwrap();
        assert_eq!(species.prev, Some(&id("0019A")));
        assert_eq!(species.next, Some(&id("0351A")));

        let (prev, next) = dex.neighbors(&id("0019"));
        assert_eq!(prev, None);
        assert_eq!(next, Some(&id("0019A")));
    }

    #[test]
    fn search_by_name_or_id() {
        let dex = pokedex();
        let names: Vec<&str> = dex.search("rattata").map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Rattata", "Alolan Rattata"]);
        assert_eq!(dex.search("0150").count(), 1);
    }
}
