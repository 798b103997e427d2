//! The six-table class stat aggregate.

use crate::class::{Class, MAX_LEVEL};
use crate::error::Result;
use crate::loaders::IndexedTable;

/// Row key of the single baseline row in the `*critbase` tables.
pub const BASELINE_ROW: &str = "1";

/// Loaded stat tables for one generator run. Read-only once built.
#[derive(Clone, Debug, PartialEq)]
pub struct ClassStats {
    pub base_mana: IndexedTable,
    pub melee_crit: IndexedTable,
    pub spell_crit: IndexedTable,
    pub melee_crit_base: IndexedTable,
    pub spell_crit_base: IndexedTable,
    pub combat_ratings: IndexedTable,
}

impl ClassStats {
    /// Melee crit chance per point of agility for `class` at `level` (raw fraction).
    pub fn melee_crit(&self, class: Class, level: u32) -> Result<f64> {
        self.melee_crit.value(&level.to_string(), class.offset())
    }

    /// Spell crit chance per point of intellect for `class` at `level` (raw fraction).
    pub fn spell_crit(&self, class: Class, level: u32) -> Result<f64> {
        self.spell_crit.value(&level.to_string(), class.offset())
    }

    pub fn base_mana(&self, class: Class, level: u32) -> Result<f64> {
        self.base_mana.value(&level.to_string(), class.offset())
    }

    /// Baseline melee crit chance of `class` (raw fraction), shared by all levels.
    pub fn melee_crit_base(&self, class: Class) -> Result<f64> {
        self.melee_crit_base.value(BASELINE_ROW, class.offset())
    }

    /// Baseline spell crit chance of `class` (raw fraction), shared by all levels.
    pub fn spell_crit_base(&self, class: Class) -> Result<f64> {
        self.spell_crit_base.value(BASELINE_ROW, class.offset())
    }

    /// Rating scalar of a combat rating category at the level cap.
    pub fn combat_rating(&self, category: &str) -> Result<f64> {
        self.combat_ratings.value(category, MAX_LEVEL - 1)
    }
}
