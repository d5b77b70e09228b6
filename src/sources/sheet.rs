use crate::models::Space;
use crate::sources::csv_parse::parse_spaces;
use crate::sources::traits::SpaceSource;
use crate::sources::types::SourceConfig;
use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Spaces published as a spreadsheet CSV export
pub struct SheetSource {
    client: Client,
    config: SourceConfig,
}

impl SheetSource {
    /// Create a source for the default published sheet
    pub fn new() -> Result<Self> {
        Self::with_config(SourceConfig::default())
    }

    pub fn with_config(config: SourceConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("space-scout/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, config })
    }

    /// The URL actually requested, with a cache-buster when enabled
    pub fn request_url(&self) -> String {
        if !self.config.cache_bust {
            return self.config.csv_url.clone();
        }
        let separator = if self.config.csv_url.contains('?') { '&' } else { '?' };
        format!(
            "{}{}_t={}",
            self.config.csv_url,
            separator,
            Utc::now().timestamp_millis()
        )
    }
}

#[async_trait]
impl SpaceSource for SheetSource {
    async fn load(&self) -> Result<Vec<Space>> {
        let url = self.request_url();
        debug!("Fetching URL: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to fetch spaces sheet")?;

        if !response.status().is_success() {
            warn!("Sheet returned status: {}", response.status());
            anyhow::bail!("Failed to fetch spaces: {}", response.status());
        }

        let csv_text = response.text().await.context("Failed to read response body")?;
        debug!("Downloaded {} bytes of CSV", csv_text.len());

        let spaces = parse_spaces(&csv_text)?;
        if spaces.is_empty() {
            warn!("Sheet contained no usable spaces");
        } else {
            info!("Loaded {} spaces from sheet", spaces.len());
        }
        Ok(spaces)
    }

    fn source_name(&self) -> &'static str {
        "Google Sheets"
    }
}
