//! Gamemaster tables shared by unit tests.

use crate::level::LevelTable;

pub(crate) const CP_MULTIPLIERS: [f64; 40] = [
    0.094, 0.16639787, 0.21573247, 0.25572005, 0.29024988, 0.3210876, 0.34921268, 0.37523559,
    0.39956728, 0.42250001, 0.44310755, 0.46279839, 0.48168495, 0.49985844, 0.51739395,
    0.53435433, 0.55079269, 0.56675452, 0.58227891, 0.59740001, 0.61215729, 0.62656713,
    0.64065295, 0.65443563, 0.667934, 0.68116492, 0.69414365, 0.70688421, 0.71939909, 0.7317,
    0.73776948, 0.74378943, 0.74976104, 0.75568551, 0.76156384, 0.76739717, 0.7731865,
    0.77893275, 0.78463697, 0.79030001,
];

pub(crate) const STARDUST_COSTS: [u32; 40] = [
    200, 200, 400, 400, 600, 600, 800, 800, 1000, 1000, 1300, 1300, 1600, 1600, 1900, 1900, 2200,
    2200, 2500, 2500, 3000, 3000, 3500, 3500, 4000, 4000, 4500, 4500, 5000, 5000, 6000, 6000,
    7000, 7000, 8000, 8000, 9000, 9000, 10000, 10000,
];

pub(crate) fn standard_table() -> LevelTable {
    LevelTable::new(CP_MULTIPLIERS.to_vec(), STARDUST_COSTS.to_vec()).unwrap()
}
