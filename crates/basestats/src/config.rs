//! Generator configuration.
//!
//! [`GeneratorConfig::default`] reproduces the repository layout the
//! generator is normally run against; tests and the `--config` flag swap in
//! other directories without touching process-wide state.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::loaders::IndexMode;

/// Default directory holding the tab-separated stat exports.
pub const DEFAULT_DATA_DIR: &str = "assets/db_inputs/basestats";

/// Default destination of the generated Go source.
pub const DEFAULT_OUTPUT_PATH: &str = "sim/core/base_stats_auto_gen.go";

/// Everything one generator run needs.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    pub data_dir: PathBuf,
    pub output_path: PathBuf,
    pub tables: TableLayout,
    pub emit: EmitConfig,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            tables: TableLayout::default(),
            emit: EmitConfig::default(),
        }
    }
}

impl GeneratorConfig {
    /// Default layout with a different data directory and output path.
    pub fn new(data_dir: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            output_path: output_path.into(),
            ..Self::default()
        }
    }

    /// Resolve relative paths against `root`. Absolute paths are kept.
    pub fn rooted_at(mut self, root: &Path) -> Self {
        if self.data_dir.is_relative() {
            self.data_dir = root.join(&self.data_dir);
        }
        if self.output_path.is_relative() {
            self.output_path = root.join(&self.output_path);
        }
        self
    }
}

/// One input table: file name inside the data directory plus how to index it.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TableSource {
    pub file: String,
    pub mode: IndexMode,
}

impl TableSource {
    pub fn rows(file: &str) -> Self {
        Self {
            file: file.to_string(),
            mode: IndexMode::Row,
        }
    }

    pub fn columns(file: &str) -> Self {
        Self {
            file: file.to_string(),
            mode: IndexMode::Column,
        }
    }
}

/// File-to-mode mapping for the six tables of the aggregate.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TableLayout {
    pub base_mana: TableSource,
    pub melee_crit: TableSource,
    pub melee_crit_base: TableSource,
    pub spell_crit: TableSource,
    pub spell_crit_base: TableSource,
    pub combat_ratings: TableSource,
}

impl Default for TableLayout {
    fn default() -> Self {
        Self {
            base_mana: TableSource::rows("octbasempbyclass.txt"),
            melee_crit: TableSource::rows("chancetomeleecrit.txt"),
            melee_crit_base: TableSource::rows("chancetomeleecritbase.txt"),
            spell_crit: TableSource::rows("chancetospellcrit.txt"),
            spell_crit_base: TableSource::rows("chancetospellcritbase.txt"),
            combat_ratings: TableSource::columns("combatratings.txt"),
        }
    }
}

/// Settings that shape the generated Go file.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EmitConfig {
    /// Go package clause.
    pub package: String,
    /// Import path of the package defining `proto.Class`.
    pub proto_import: String,
    /// Import path of the package defining `stats.Stats`.
    pub stats_import: String,
    /// Command named in the generated header.
    pub generator: String,
}

impl Default for EmitConfig {
    fn default() -> Self {
        Self {
            package: "core".to_string(),
            proto_import: "github.com/wowsims/sod/sim/core/proto".to_string(),
            stats_import: "github.com/wowsims/sod/sim/core/stats".to_string(),
            generator: "cargo xtask gen-base-stats".to_string(),
        }
    }
}
