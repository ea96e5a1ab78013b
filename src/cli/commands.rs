//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// Build frontend-ready JSON extracts from cleaned T-100 flight data
#[derive(Parser, Debug)]
#[command(name = "t100-extracts")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Pipeline configuration file (YAML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Root directory the data paths resolve against
    #[arg(long)]
    pub data_root: Option<PathBuf>,

    /// Directory holding the cleaned per-period flight CSVs
    #[arg(long)]
    pub clean_dir: Option<PathBuf>,

    /// Airport reference CSV (replaces the default candidate paths)
    #[arg(long)]
    pub airports: Option<PathBuf>,

    /// Directory the JSON extracts are written to
    #[arg(short, long)]
    pub out_dir: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_args_required() {
        let cli = Cli::parse_from(["t100-extracts"]);
        assert!(cli.config.is_none());
        assert!(cli.data_root.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_parse_overrides() {
        let cli = Cli::parse_from([
            "t100-extracts",
            "--data-root",
            "/srv/t100",
            "--clean-dir",
            "cleaned",
            "--airports",
            "reference/airports.csv",
            "--out-dir",
            "extracts",
            "--verbose",
        ]);
        assert_eq!(cli.data_root.unwrap(), PathBuf::from("/srv/t100"));
        assert_eq!(cli.clean_dir.unwrap(), PathBuf::from("cleaned"));
        assert_eq!(cli.airports.unwrap(), PathBuf::from("reference/airports.csv"));
        assert_eq!(cli.out_dir.unwrap(), PathBuf::from("extracts"));
        assert!(cli.verbose);
    }

    #[test]
    fn test_short_flags() {
        let cli = Cli::parse_from(["t100-extracts", "-c", "pipeline.yaml", "-o", "out", "-v"]);
        assert_eq!(cli.config.unwrap(), PathBuf::from("pipeline.yaml"));
        assert_eq!(cli.out_dir.unwrap(), PathBuf::from("out"));
        assert!(cli.verbose);
    }
}
