//! One generator run: load, render, write.

use std::path::PathBuf;

use crate::config::GeneratorConfig;
use crate::emit::GoEmitter;
use crate::error::{Result, StatsError};
use crate::loaders::StatsFactory;

/// Result of a successful [`generate`] run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Generated {
    pub path: PathBuf,
    pub bytes: usize,
}

/// Result of comparing the rendered source with the file on disk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CheckOutcome {
    UpToDate,
    Stale,
    Missing,
}

/// Render the generated source entirely in memory.
pub fn render(config: &GeneratorConfig) -> Result<String> {
    let stats = StatsFactory::with_layout(&config.data_dir, config.tables.clone()).load()?;
    GoEmitter::new(config.emit.clone()).render(&stats)
}

/// Load every table, render, and overwrite the output file.
///
/// Nothing is written unless loading and rendering both succeed.
pub fn generate(config: &GeneratorConfig) -> Result<Generated> {
    let source = render(config)?;
    let path = config.output_path.clone();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| StatsError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    std::fs::write(&path, &source).map_err(|source| StatsError::Write {
        path: path.clone(),
        source,
    })?;

    tracing::info!(path = %path.display(), bytes = source.len(), "wrote base stats");
    Ok(Generated {
        path,
        bytes: source.len(),
    })
}

/// Render and compare with the existing output without writing anything.
pub fn check(config: &GeneratorConfig) -> Result<CheckOutcome> {
    let source = render(config)?;
    let existing = match std::fs::read_to_string(&config.output_path) {
        Ok(existing) => existing,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(CheckOutcome::Missing),
        Err(source) => {
            return Err(StatsError::Read {
                path: config.output_path.clone(),
                source,
            });
        }
    };

    if existing == source {
        Ok(CheckOutcome::UpToDate)
    } else {
        tracing::debug!(path = %config.output_path.display(), "generated source differs");
        Ok(CheckOutcome::Stale)
    }
}
