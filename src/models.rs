use serde::Serialize;

use crate::error::FinderError;

/// A track as returned by the catalog search, before preview enrichment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrackCandidate {
    pub id: String,
    pub title: String,
    pub artists: Vec<String>,
    pub album_name: String,
    pub release_date: Option<String>,
    pub popularity: u32,
    pub duration_ms: u64,
    pub public_url: String,
}

impl TrackCandidate {
    /// "Title - Artist1, Artist2"
    pub fn display_name(&self) -> String {
        format!("{} - {}", self.title, self.artists.join(", "))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackInfo {
    pub name: String,
    pub spotify_url: String,
    pub preview_urls: Vec<String>,
    pub track_id: String,
    pub album_name: String,
    pub release_date: Option<String>,
    pub popularity: u32,
    pub duration_ms: u64,
}

impl TrackInfo {
    pub fn new(candidate: &TrackCandidate, preview_urls: Vec<String>) -> Self {
        Self {
            name: candidate.display_name(),
            spotify_url: candidate.public_url.clone(),
            preview_urls,
            track_id: candidate.id.clone(),
            album_name: candidate.album_name.clone(),
            release_date: candidate.release_date.clone(),
            popularity: candidate.popularity,
            duration_ms: candidate.duration_ms,
        }
    }

    /// Duration as m:ss.
    pub fn display_duration(&self) -> String {
        let secs = self.duration_ms / 1000;
        format!("{}:{:02}", secs / 60, secs % 60)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_query: Option<String>,
    pub results: Vec<TrackInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SearchResult {
    pub fn found(search_query: String, results: Vec<TrackInfo>) -> Self {
        Self {
            success: true,
            search_query: Some(search_query),
            results,
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            search_query: None,
            results: Vec::new(),
            error: Some(message.into()),
        }
    }
}

impl From<FinderError> for SearchResult {
    fn from(err: FinderError) -> Self {
        Self::failure(err.message())
    }
}
