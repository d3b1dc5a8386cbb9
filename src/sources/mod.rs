pub mod spotify;

use crate::error::Result;
use crate::models::TrackCandidate;

/// A short-lived access token issued by the catalog.
#[derive(Debug, Clone)]
pub struct Credential {
    pub access_token: String,
    pub expires_in: u64,
}

/// Music catalog trait.
/// Token lifecycle stays inside the implementation; callers authenticate once per search.
pub trait Catalog {
    /// Exchange the configured credentials for an access token.
    fn authenticate(&self) -> Result<Credential>;
    /// Search tracks, asking for up to `limit` of them. An empty vector means no matches.
    /// The catalog may clamp `limit` to its own page bounds.
    fn search(&self, credential: &Credential, query: &str, limit: i64)
        -> Result<Vec<TrackCandidate>>;
}
