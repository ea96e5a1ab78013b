//! CLI runner - resolves configuration and executes the pipeline

use crate::cli::commands::Cli;
use crate::config::PipelineConfig;
use crate::error::Result;
use crate::pipeline;

/// Executes the pipeline for a parsed command line
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the extract pipeline and print a per-file summary
    pub fn run(&self) -> Result<()> {
        let config = self.resolve_config()?;
        let summary = pipeline::run(&config)?;

        for (label, extract) in summary.extracts() {
            println!("{label}: {} rows -> {}", extract.rows, extract.path.display());
        }

        Ok(())
    }

    /// Merge the YAML config file (when given) with CLI overrides.
    ///
    /// CLI flags win over the file; unset flags leave the file or default
    /// value in place.
    fn resolve_config(&self) -> Result<PipelineConfig> {
        let mut config = match &self.cli.config {
            Some(path) => PipelineConfig::from_file(path)?,
            None => PipelineConfig::default(),
        };

        if let Some(root) = &self.cli.data_root {
            config.data_root = root.clone();
        }
        if let Some(dir) = &self.cli.clean_dir {
            config.clean_dir = dir.clone();
        }
        if let Some(path) = &self.cli.airports {
            config.airport_candidates = vec![path.clone()];
        }
        if let Some(dir) = &self.cli.out_dir {
            config.out_dir = dir.clone();
        }

        Ok(config)
    }
}
