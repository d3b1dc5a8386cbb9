use base64::Engine;
use log::debug;
use serde::Deserialize;

use crate::config::SpotifyConfig;
use crate::error::{FinderError, Result};
use crate::models::TrackCandidate;
use crate::sources::{Catalog, Credential};

const TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
const SEARCH_URL: &str = "https://api.spotify.com/v1/search";
const MAX_PAGE_SIZE: i64 = 50;

pub struct SpotifyClient {
    client: reqwest::blocking::Client,
    config: SpotifyConfig,
    token_url: String,
    search_url: String,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    expires_in: u64,
}

#[derive(Deserialize)]
struct SearchResponse {
    tracks: Option<TracksResult>,
}

#[derive(Deserialize)]
struct TracksResult {
    #[serde(default)]
    items: Vec<SpotifyTrack>,
}

#[derive(Deserialize)]
struct SpotifyTrack {
    id: String,
    name: String,
    artists: Vec<SpotifyArtist>,
    album: SpotifyAlbum,
    #[serde(default)]
    popularity: u32,
    #[serde(default)]
    duration_ms: u64,
    external_urls: ExternalUrls,
}

#[derive(Deserialize)]
struct SpotifyArtist {
    name: String,
}

#[derive(Deserialize)]
struct SpotifyAlbum {
    name: String,
    release_date: Option<String>,
}

#[derive(Deserialize)]
struct ExternalUrls {
    spotify: String,
}

impl SpotifyClient {
    pub fn new(config: SpotifyConfig) -> Self {
        Self::with_urls(config, TOKEN_URL, SEARCH_URL)
    }

    /// Client pointed at alternative endpoints.
    pub fn with_urls(
        config: SpotifyConfig,
        token_url: impl Into<String>,
        search_url: impl Into<String>,
    ) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            config,
            token_url: token_url.into(),
            search_url: search_url.into(),
        }
    }

    fn parse_search(body: &str) -> Result<Vec<TrackCandidate>> {
        let resp: SearchResponse = serde_json::from_str(body).map_err(|e| {
            FinderError::Catalog(format!("Failed to parse Spotify search response: {}", e))
        })?;

        let items = resp.tracks.map(|t| t.items).unwrap_or_default();
        Ok(items.into_iter().map(Self::convert_track).collect())
    }

    fn convert_track(track: SpotifyTrack) -> TrackCandidate {
        TrackCandidate {
            id: track.id,
            title: track.name,
            artists: track.artists.into_iter().map(|a| a.name).collect(),
            album_name: track.album.name,
            release_date: track.album.release_date,
            popularity: track.popularity,
            duration_ms: track.duration_ms,
            public_url: track.external_urls.spotify,
        }
    }
}

impl Catalog for SpotifyClient {
    fn authenticate(&self) -> Result<Credential> {
        let credentials = format!("{}:{}", self.config.client_id, self.config.client_secret);
        let encoded = base64::engine::general_purpose::STANDARD.encode(credentials);

        let resp: TokenResponse = self
            .client
            .post(&self.token_url)
            .header("Authorization", format!("Basic {}", encoded))
            .form(&[("grant_type", "client_credentials")])
            .send()?
            .error_for_status()
            .map_err(|e| FinderError::Catalog(format!("Spotify authentication failed: {}", e)))?
            .json()?;

        debug!("Spotify token acquired, expires in {}s", resp.expires_in);
        Ok(Credential {
            access_token: resp.access_token,
            expires_in: resp.expires_in,
        })
    }

    fn search(
        &self,
        credential: &Credential,
        query: &str,
        limit: i64,
    ) -> Result<Vec<TrackCandidate>> {
        // Spotify rejects page sizes outside 1..=50.
        let page_size = limit.clamp(1, MAX_PAGE_SIZE).to_string();
        let body = self
            .client
            .get(&self.search_url)
            .bearer_auth(&credential.access_token)
            .query(&[("q", query), ("type", "track"), ("limit", page_size.as_str())])
            .send()?
            .error_for_status()
            .map_err(|e| FinderError::Catalog(format!("Spotify search failed: {}", e)))?
            .text()?;

        Self::parse_search(&body)
    }
}
