use crate::sources::types::{SourceConfig, DEFAULT_SHEET_CSV_URL};
use clap::Parser;
use std::path::PathBuf;

/// Search rentable spaces with a free-text query
#[derive(Debug, Parser)]
#[command(name = "space-scout", version, about)]
pub struct Cli {
    /// Free-text query, e.g. "서울 강남에서 20명 파티할 수 있는 곳"
    pub query: Option<String>,

    /// Only search spaces listed under this country label, e.g. "영국 (UK)"
    #[arg(long, env = "SPACE_SCOUT_COUNTRY")]
    pub country: Option<String>,

    /// CSV export URL of the spaces sheet
    #[arg(long, env = "SPACE_SCOUT_CSV_URL", default_value = DEFAULT_SHEET_CSV_URL)]
    pub csv_url: String,

    /// Read spaces from a local CSV export instead of the sheet URL
    #[arg(long, env = "SPACE_SCOUT_CSV_FILE")]
    pub csv_file: Option<PathBuf>,

    /// HTTP timeout in seconds
    #[arg(long, env = "SPACE_SCOUT_TIMEOUT_SECS", default_value_t = 30)]
    pub timeout_secs: u64,

    /// Write the matching spaces as JSON to this file
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Print the countries present in the sheet and exit
    #[arg(long)]
    pub list_countries: bool,
}

impl Cli {
    pub fn source_config(&self) -> SourceConfig {
        SourceConfig {
            csv_url: self.csv_url.clone(),
            timeout_secs: self.timeout_secs,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_the_published_sheet() {
        let cli = Cli::try_parse_from(["space-scout", "20명 파티"]).unwrap();
        assert_eq!(cli.query.as_deref(), Some("20명 파티"));
        assert_eq!(cli.csv_url, DEFAULT_SHEET_CSV_URL);
        assert_eq!(cli.source_config().timeout_secs, 30);
        assert!(!cli.list_countries);
    }

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "space-scout",
            "--country",
            "영국 (UK)",
            "--csv-file",
            "spaces.csv",
            "--timeout-secs",
            "5",
            "-o",
            "out.json",
            "vintage",
        ])
        .unwrap();
        assert_eq!(cli.country.as_deref(), Some("영국 (UK)"));
        assert_eq!(cli.csv_file, Some(PathBuf::from("spaces.csv")));
        assert_eq!(cli.source_config().timeout_secs, 5);
        assert_eq!(cli.output, Some(PathBuf::from("out.json")));
    }
}
