//! Stats factory for building the aggregate from a data directory.

use std::path::{Path, PathBuf};

use crate::config::{TableLayout, TableSource};
use crate::error::Result;
use crate::loaders::{ClassStats, IndexedTable};

/// Loads every table of a [`ClassStats`] from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── octbasempbyclass.txt
/// ├── chancetomeleecrit.txt
/// ├── chancetomeleecritbase.txt
/// ├── chancetospellcrit.txt
/// ├── chancetospellcritbase.txt
/// └── combatratings.txt
/// ```
pub struct StatsFactory {
    data_dir: PathBuf,
    layout: TableLayout,
}

impl StatsFactory {
    /// Creates a factory over `data_dir` with the default file layout.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self::with_layout(data_dir, TableLayout::default())
    }

    pub fn with_layout(data_dir: impl Into<PathBuf>, layout: TableLayout) -> Self {
        Self {
            data_dir: data_dir.into(),
            layout,
        }
    }

    /// Load all six tables. The first failure aborts the build.
    pub fn load(&self) -> Result<ClassStats> {
        let layout = &self.layout;
        Ok(ClassStats {
            base_mana: self.load_table(&layout.base_mana)?,
            melee_crit: self.load_table(&layout.melee_crit)?,
            spell_crit: self.load_table(&layout.spell_crit)?,
            melee_crit_base: self.load_table(&layout.melee_crit_base)?,
            spell_crit_base: self.load_table(&layout.spell_crit_base)?,
            combat_ratings: self.load_table(&layout.combat_ratings)?,
        })
    }

    fn load_table(&self, source: &TableSource) -> Result<IndexedTable> {
        IndexedTable::load(&self.data_dir.join(&source.file), source.mode)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
