use log::{debug, warn};
use rayon::prelude::*;

use crate::config::SpotifyConfig;
use crate::core::preview::{HttpFetcher, PreviewExtractor, PreviewSource};
use crate::core::query::{Query, SecondArg};
use crate::error::Result;
use crate::models::{SearchResult, TrackInfo};
use crate::sources::spotify::SpotifyClient;
use crate::sources::Catalog;

pub const NO_SONGS_FOUND: &str = "No songs found";

/// Runs the catalog search and enriches each hit with its preview URLs.
pub struct PreviewFinder<C, P> {
    catalog: C,
    previews: P,
}

impl<C: Catalog, P: PreviewSource> PreviewFinder<C, P> {
    pub fn new(catalog: C, previews: P) -> Self {
        Self { catalog, previews }
    }

    /// Resolve the arguments and search. Never fails; errors land in the result.
    pub fn search_and_get_links(
        &self,
        song_name: Option<&str>,
        second: Option<SecondArg>,
        limit: Option<i64>,
    ) -> SearchResult {
        finish(Query::resolve(song_name, second, limit).and_then(|query| self.search(&query)))
    }

    /// Search for an already resolved query.
    ///
    /// Zero catalog matches is a normal failed result, not an error. Any
    /// extraction failure aborts the whole search.
    pub fn search(&self, query: &Query) -> Result<SearchResult> {
        let search_query = query.search_string();
        debug!("Searching catalog for {:?} (limit {})", search_query, query.limit);

        let credential = self.catalog.authenticate()?;
        let candidates = self.catalog.search(&credential, &search_query, query.limit)?;

        if candidates.is_empty() {
            return Ok(SearchResult::failure(NO_SONGS_FOUND));
        }

        let kept = &candidates[..query.take_count(candidates.len())];
        debug!("{} match(es), keeping {}", candidates.len(), kept.len());

        let previews = &self.previews;
        let settled: Vec<Result<TrackInfo>> = kept
            .par_iter()
            .map(|candidate| -> Result<TrackInfo> {
                let urls = previews.preview_urls(&candidate.public_url)?;
                Ok(TrackInfo::new(candidate, urls))
            })
            .collect();
        let results = settled.into_iter().collect::<Result<Vec<_>>>()?;

        Ok(SearchResult::found(search_query, results))
    }
}

/// Search the Spotify catalog for a song and collect preview links for the
/// top matches.
///
/// `second` is either the artist or, in the legacy form, the limit. Credentials
/// are read from `SPOTIFY_CLIENT_ID` / `SPOTIFY_CLIENT_SECRET` on every call.
pub fn search_and_get_links(
    song_name: Option<&str>,
    second: Option<SecondArg>,
    limit: Option<i64>,
) -> SearchResult {
    search_with_env(song_name, second, limit, |name| std::env::var(name).ok())
}

fn search_with_env<F>(
    song_name: Option<&str>,
    second: Option<SecondArg>,
    limit: Option<i64>,
    env: F,
) -> SearchResult
where
    F: Fn(&str) -> Option<String>,
{
    let outcome = Query::resolve(song_name, second, limit).and_then(|query| {
        let config = SpotifyConfig::from_lookup(env)?;
        let finder = PreviewFinder::new(
            SpotifyClient::new(config),
            PreviewExtractor::new(HttpFetcher::new()),
        );
        finder.search(&query)
    });
    finish(outcome)
}

fn finish(outcome: Result<SearchResult>) -> SearchResult {
    let result = match outcome {
        Ok(result) => result,
        Err(e) => e.into(),
    };
    if let Some(ref error) = result.error {
        warn!("Search failed: {}", error);
    }
    result
}
