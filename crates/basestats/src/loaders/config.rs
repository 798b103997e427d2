//! Generator configuration loader.

use std::path::Path;

use crate::config::GeneratorConfig;
use crate::error::{Result, StatsError};
use crate::loaders::read_file;

/// Loader for generator configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing fields fall back to [`GeneratorConfig::default`]. Relative
    /// paths in the file are resolved against the file's directory.
    pub fn load(path: &Path) -> Result<GeneratorConfig> {
        let content = read_file(path)?;
        let config = Self::parse(path, &content)?;
        let root = path.parent().unwrap_or_else(|| Path::new("."));
        Ok(config.rooted_at(root))
    }

    fn parse(path: &Path, content: &str) -> Result<GeneratorConfig> {
        toml::from_str(content).map_err(|e| StatsError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::loaders::IndexMode;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let content = r#"
            output_path = "gen/stats.go"

            [tables.combat_ratings]
            file = "ratings.tsv"
            mode = "column"

            [emit]
            package = "stats"
        "#;
        let config = ConfigLoader::parse(Path::new("basestats.toml"), content).unwrap();
        let defaults = GeneratorConfig::default();

        assert_eq!(config.data_dir, defaults.data_dir);
        assert_eq!(config.output_path, Path::new("gen/stats.go"));
        assert_eq!(config.tables.combat_ratings.file, "ratings.tsv");
        assert_eq!(config.tables.combat_ratings.mode, IndexMode::Column);
        assert_eq!(config.tables.melee_crit, defaults.tables.melee_crit);
        assert_eq!(config.emit.package, "stats");
        assert_eq!(config.emit.proto_import, defaults.emit.proto_import);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = ConfigLoader::parse(Path::new("basestats.toml"), "max_level = 70").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);
        assert!(err.to_string().contains("basestats.toml"));
    }

    #[test]
    fn test_load_resolves_relative_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("basestats.toml");
        std::fs::write(&path, "data_dir = \"tables\"\n").unwrap();

        let config = ConfigLoader::load(&path).unwrap();
        assert_eq!(config.data_dir, dir.path().join("tables"));
        assert_eq!(
            config.output_path,
            dir.path().join(crate::config::DEFAULT_OUTPUT_PATH)
        );
    }
}
