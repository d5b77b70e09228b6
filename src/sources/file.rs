use crate::models::Space;
use crate::sources::csv_parse::parse_spaces;
use crate::sources::traits::SpaceSource;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::PathBuf;
use tracing::info;

/// Spaces from a CSV export saved on disk
pub struct CsvFileSource {
    path: PathBuf,
}

impl CsvFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl SpaceSource for CsvFileSource {
    async fn load(&self) -> Result<Vec<Space>> {
        let csv_text = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read {}", self.path.display()))?;

        let spaces = parse_spaces(&csv_text)?;
        info!("Loaded {} spaces from {}", spaces.len(), self.path.display());
        Ok(spaces)
    }

    fn source_name(&self) -> &'static str {
        "CSV file"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn loads_spaces_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "hostEmail,name,minCapacity,capacity,price,currency,country,region,subRegion,type,style,area"
        )
        .unwrap();
        writeln!(
            file,
            "h@x,Zen Room,1,8,\"20 USD\",USD,미국 (USA),California,Berkeley,명상실,Zen,"
        )
        .unwrap();

        let spaces = CsvFileSource::new(file.path()).load().await.unwrap();
        assert_eq!(spaces.len(), 1);
        assert_eq!(spaces[0].name, "Zen Room");
        assert_eq!(spaces[0].price_value, 20);
    }

    #[tokio::test]
    async fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = CsvFileSource::new(dir.path().join("nope.csv")).load().await;
        assert!(result.unwrap_err().to_string().contains("Failed to read"));
    }
}
