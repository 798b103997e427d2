//! Generate base stats command
//!
//! Reads the tab-separated exports under `assets/db_inputs/basestats/` and
//! writes `sim/core/base_stats_auto_gen.go`. Paths are relative to the
//! current directory unless overridden.

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use std::path::PathBuf;

use basestats::{CheckOutcome, ConfigLoader, GeneratorConfig};

/// Generate base_stats_auto_gen.go from the data table exports
#[derive(Parser, Debug)]
pub struct GenBaseStats {
    /// TOML file overriding the default layout
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory containing the .txt exports
    #[arg(short, long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Destination of the generated Go file
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Fail if the generated file is missing or out of date instead of writing it
    #[arg(long)]
    pub check: bool,
}

impl GenBaseStats {
    pub fn execute(self) -> Result<()> {
        let config = self.resolve_config()?;

        if self.check {
            return Self::verify(&config);
        }

        let generated = basestats::generate(&config).with_context(|| {
            format!(
                "Failed to generate base stats from {}",
                config.data_dir.display()
            )
        })?;

        println!(
            "{} Writing stats to: {}",
            style("✓").green().bold(),
            style(generated.path.display()).cyan()
        );
        Ok(())
    }

    fn resolve_config(&self) -> Result<GeneratorConfig> {
        let mut config = match &self.config {
            Some(path) => ConfigLoader::load(path)
                .with_context(|| format!("Failed to load config: {}", path.display()))?,
            None => GeneratorConfig::default(),
        };

        if let Some(dir) = &self.data_dir {
            config.data_dir = dir.clone();
        }
        if let Some(output) = &self.output {
            config.output_path = output.clone();
        }
        Ok(config)
    }

    fn verify(config: &GeneratorConfig) -> Result<()> {
        let outcome = basestats::check(config).with_context(|| {
            format!(
                "Failed to render base stats from {}",
                config.data_dir.display()
            )
        })?;

        let path = config.output_path.display();
        match outcome {
            CheckOutcome::UpToDate => {
                println!(
                    "{} {} is up to date",
                    style("✓").green().bold(),
                    style(&path).cyan()
                );
                Ok(())
            }
            CheckOutcome::Stale => {
                eprintln!(
                    "{} {} is out of date",
                    style("✗").red().bold(),
                    style(&path).cyan()
                );
                eprintln!(
                    "  Regenerate with: {}",
                    style("cargo xtask gen-base-stats").cyan()
                );
                anyhow::bail!("Generated base stats are stale: {path}")
            }
            CheckOutcome::Missing => {
                eprintln!(
                    "{} {} does not exist",
                    style("✗").red().bold(),
                    style(&path).cyan()
                );
                anyhow::bail!("Generated base stats are missing: {path}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_defaults() {
        let cmd = GenBaseStats::try_parse_from([
            "gen-base-stats",
            "--data-dir",
            "/tmp/tables",
            "--output",
            "/tmp/out.go",
        ])
        .unwrap();
        let config = cmd.resolve_config().unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/tmp/tables"));
        assert_eq!(config.output_path, PathBuf::from("/tmp/out.go"));
        assert_eq!(config.tables, GeneratorConfig::default().tables);
    }

    #[test]
    fn test_no_arguments_uses_defaults() {
        let cmd = GenBaseStats::try_parse_from(["gen-base-stats"]).unwrap();
        assert!(!cmd.check);
        assert_eq!(cmd.resolve_config().unwrap(), GeneratorConfig::default());
    }
}
