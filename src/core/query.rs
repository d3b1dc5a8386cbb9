use crate::error::{FinderError, Result};

pub const DEFAULT_LIMIT: i64 = 5;

/// The second positional argument of a search call.
///
/// A string names the artist; a number is the legacy way of passing the
/// result limit directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SecondArg {
    Artist(String),
    Limit(i64),
}

impl From<&str> for SecondArg {
    fn from(artist: &str) -> Self {
        SecondArg::Artist(artist.to_string())
    }
}

impl From<String> for SecondArg {
    fn from(artist: String) -> Self {
        SecondArg::Artist(artist)
    }
}

impl From<i64> for SecondArg {
    fn from(limit: i64) -> Self {
        SecondArg::Limit(limit)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub song_name: String,
    pub artist: Option<String>,
    /// Passed through unclamped; non-positive values select nothing.
    pub limit: i64,
}

impl Query {
    /// Normalize a call signature into a query.
    ///
    /// - `Artist(a)` with an optional third argument for the limit
    /// - `Limit(n)` (legacy form) ignores the third argument
    /// - no second argument falls back to no artist and the default limit
    pub fn resolve(
        song_name: Option<&str>,
        second: Option<SecondArg>,
        limit: Option<i64>,
    ) -> Result<Self> {
        let song_name = match song_name {
            Some(s) if !s.is_empty() => s.to_string(),
            _ => return Err(FinderError::Validation),
        };

        let (artist, limit) = match second {
            Some(SecondArg::Artist(artist)) => (Some(artist), limit.unwrap_or(DEFAULT_LIMIT)),
            Some(SecondArg::Limit(n)) => (None, n),
            None => (None, DEFAULT_LIMIT),
        };

        Ok(Self {
            song_name,
            artist,
            limit,
        })
    }

    /// Build the catalog search string.
    /// Values are quoted verbatim; embedded quotes are not escaped.
    pub fn search_string(&self) -> String {
        match self.artist {
            Some(ref artist) => format!("track:\"{}\" artist:\"{}\"", self.song_name, artist),
            None => self.song_name.clone(),
        }
    }

    /// How many of `available` candidates to keep.
    pub fn take_count(&self, available: usize) -> usize {
        usize::try_from(self.limit)
            .unwrap_or(0)
            .min(available)
    }
}
