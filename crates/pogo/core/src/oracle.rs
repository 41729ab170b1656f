use crate::species::SpeciesId;
use crate::stats::BaseStats;

/// Oracle providing species data from the content dictionary.
///
/// The engine never owns species data; front-ends look stats up through this
/// trait and hand them to the search and filter functions. A species without
/// stats is a normal state (nothing selected yet), not an error.
pub trait SpeciesOracle: Send + Sync {
    fn base_stats(&self, id: &SpeciesId) -> Option<BaseStats>;
    fn name(&self, id: &SpeciesId) -> Option<&str>;

    fn contains(&self, id: &SpeciesId) -> bool {
        self.name(id).is_some()
    }
}
