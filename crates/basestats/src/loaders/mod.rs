//! Loaders for the tab-separated stat exports and the generator config.
//!
//! Tables are parsed into [`IndexedTable`]s, grouped into a [`ClassStats`]
//! aggregate by [`StatsFactory`].

pub mod class_stats;
pub mod config;
pub mod factory;
pub mod table;

pub use class_stats::ClassStats;
pub use config::ConfigLoader;
pub use factory::StatsFactory;
pub use table::{IndexMode, IndexedTable};

use std::path::Path;

use crate::error::{Result, StatsError};

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| StatsError::Read {
        path: path.to_path_buf(),
        source,
    })
}
