use std::time::Duration;

use anyhow::Result;
use regex::Regex;
use reqwest::StatusCode;
use scraper::{Html, Selector};
use thiserror::Error;

use crate::sanitize::sanitize_title;

/// Sent with every page fetch; some database sites answer plain clients with
/// a 403.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.3";

const FETCH_TIMEOUT: Duration = Duration::from_secs(15);

/// Everything that can go wrong turning a browsed URL into a catalog entry.
/// These abort the current submission only, never the process.
#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("unexpected HTTP status {status} for {url}")]
    BadStatus { status: StatusCode, url: String },
    #[error("no title heading found on the page")]
    MissingHeading,
    #[error("page title is empty after sanitization")]
    EmptyTitle,
    #[error("no catalog id (movie/<id>-) in URL: {0}")]
    MissingCatalogId(String),
}

/// Title and numeric database id for one browsed movie page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub title: String,
    pub catalog_id: String,
}

impl CatalogEntry {
    /// Destination folder name, also the base of every placed file name.
    pub fn folder_token(&self) -> String {
        format!("{} [tmdbid-{}]", self.title, self.catalog_id)
    }
}

/// Scrapes the currently browsed database page for a title and pulls the
/// catalog id out of the URL.
#[derive(Debug)]
pub struct MetadataResolver {
    client: reqwest::Client,
    heading_selector: Selector,
    catalog_id_pattern: Regex,
}

impl MetadataResolver {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(FETCH_TIMEOUT)
            .build()?;

        let heading_selector = Selector::parse("h2")
            .map_err(|e| anyhow::anyhow!("invalid heading selector: {e}"))?;

        let catalog_id_pattern = Regex::new(r"movie/(\d+)-")?;

        Ok(Self {
            client,
            heading_selector,
            catalog_id_pattern,
        })
    }

    /// Fetches the page behind `url` and derives the catalog entry for it.
    pub async fn resolve(&self, url: &str) -> Result<CatalogEntry, MetadataError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| MetadataError::Fetch {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(MetadataError::BadStatus {
                status,
                url: url.to_string(),
            });
        }

        let body = response.text().await.map_err(|source| MetadataError::Fetch {
            url: url.to_string(),
            source,
        })?;

        self.parse_page(url, &body)
    }

    /// The network-free half of `resolve`: extract the first `h2` heading
    /// from `body` and the numeric id from `url`.
    pub fn parse_page(&self, url: &str, body: &str) -> Result<CatalogEntry, MetadataError> {
        let document = Html::parse_document(body);

        let heading = document
            .select(&self.heading_selector)
            .next()
            .ok_or(MetadataError::MissingHeading)?;
        let raw_title = heading.text().collect::<String>();

        let title = sanitize_title(&raw_title);
        if title.is_empty() {
            return Err(MetadataError::EmptyTitle);
        }

        let catalog_id = self
            .catalog_id_from_url(url)
            .ok_or_else(|| MetadataError::MissingCatalogId(url.to_string()))?;

        Ok(CatalogEntry { title, catalog_id })
    }

    pub fn catalog_id_from_url(&self, url: &str) -> Option<String> {
        self.catalog_id_pattern
            .captures(url)
            .map(|captures| captures[1].to_string())
    }
}
