pub mod html;

pub use html::{parse_spec_page, spec_codes, strip_markup};

use anyhow::{Context, Result};
use extract::SpecDocument;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::time::sleep;
use tracing::debug;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Page listing every title with links to the spec pages
    pub index_url: String,
    /// Prefix for "<code>spe.html"
    pub base_url: String,
    pub user_agent: String,
    pub index_timeout_secs: u64,
    pub page_timeout_secs: u64,
    /// Random pause between spec pages
    pub min_delay_ms: u64,
    pub max_delay_ms: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            index_url: "https://apps2.suffolkcountyny.gov/civilservice/civilserviceinquiry/AllTitlesAction.aspx"
                .to_string(),
            base_url: "https://apps2.suffolkcountyny.gov/civilservice/specs/".to_string(),
            user_agent: concat!("promo-extract/", env!("CARGO_PKG_VERSION")).to_string(),
            index_timeout_secs: 60,
            page_timeout_secs: 30,
            min_delay_ms: 1000,
            max_delay_ms: 3000,
        }
    }
}

impl FetchConfig {
    pub fn spec_url(&self, code: &str) -> String {
        format!("{}{}spe.html", self.base_url, code)
    }

    /// Pause before the next page, uniform in the configured range
    pub fn next_delay(&self) -> Duration {
        let lo = self.min_delay_ms.min(self.max_delay_ms);
        let hi = self.min_delay_ms.max(self.max_delay_ms);
        Duration::from_millis(rand::thread_rng().gen_range(lo..=hi))
    }
}

/// Downloads the title index and individual spec pages
pub struct PageFetcher {
    config: FetchConfig,
    client: reqwest::Client,
}

impl PageFetcher {
    pub fn new(config: FetchConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { config, client })
    }

    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    async fn fetch_html(&self, url: &str, timeout_secs: u64) -> Result<String> {
        let response = self
            .client
            .get(url)
            .timeout(Duration::from_secs(timeout_secs))
            .send()
            .await
            .context(format!("Failed to fetch {}", url))?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("HTTP {} for {}", status, url);
        }

        response
            .text()
            .await
            .context("Failed to read response body")
    }

    /// Unique spec codes linked from the index page
    pub async fn discover_codes(&self) -> Result<Vec<String>> {
        let html = self
            .fetch_html(&self.config.index_url, self.config.index_timeout_secs)
            .await
            .context("Failed to access title index")?;

        let codes = spec_codes(&html);
        debug!(codes = codes.len(), "Parsed title index");
        Ok(codes)
    }

    /// Fetch one spec page and reduce it to plain text
    pub async fn fetch_spec(&self, code: &str) -> Result<SpecDocument> {
        let url = self.config.spec_url(code);
        let html = self
            .fetch_html(&url, self.config.page_timeout_secs)
            .await?;

        parse_spec_page(code, &html)
    }

    pub async fn pace(&self) {
        let delay = self.config.next_delay();
        debug!(delay_ms = delay.as_millis() as u64, "Pacing");
        sleep(delay).await;
    }
}
