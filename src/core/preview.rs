use std::collections::HashSet;

use log::debug;
use scraper::{ElementRef, Html};

use crate::error::{FinderError, Result};

/// Substring identifying a preview clip on the audio CDN.
pub const PREVIEW_MARKER: &str = "https://p.scdn.co/mp3-preview/";

/// Fetches a page body by URL.
pub trait PageFetcher: Sync {
    fn fetch(&self, url: &str) -> Result<String>;
}

/// Resolves a track's public page into its preview URLs.
pub trait PreviewSource: Sync {
    fn preview_urls(&self, public_url: &str) -> Result<Vec<String>>;
}

/// Plain GET with client defaults; no custom headers.
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
        }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl PageFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String> {
        let body = self
            .client
            .get(url)
            .send()?
            .error_for_status()?
            .text()?;
        Ok(body)
    }
}

/// Scans every attribute value of a fetched page for preview links.
pub struct PreviewExtractor<F> {
    fetcher: F,
}

impl<F: PageFetcher> PreviewExtractor<F> {
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }
}

impl<F: PageFetcher> PreviewSource for PreviewExtractor<F> {
    fn preview_urls(&self, public_url: &str) -> Result<Vec<String>> {
        let html = self
            .fetcher
            .fetch(public_url)
            .map_err(|e| FinderError::Extraction(e.message()))?;

        let urls = matching_values(attribute_values(&html));
        debug!("{} preview url(s) on {}", urls.len(), public_url);
        Ok(urls)
    }
}

/// All attribute values of all elements, in document order.
pub fn attribute_values(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    document
        .root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .flat_map(|el| el.value().attrs().map(|(_, value)| value.to_string()))
        .collect::<Vec<_>>()
}

/// Keep values containing the preview marker, first occurrence wins.
pub fn matching_values<I>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = HashSet::new();
    values
        .into_iter()
        .filter(|v| v.contains(PREVIEW_MARKER))
        .filter(|v| seen.insert(v.clone()))
        .collect()
}
