//! Resolve a song (and optional artist) into playable Spotify preview URLs.
//!
//! The catalog search yields candidate tracks; each candidate's public page is
//! then scraped for preview clip links that the Web API no longer exposes.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod sources;

#[cfg(test)]
mod test_utils;

pub use crate::core::query::{Query, SecondArg};
pub use crate::core::search::{search_and_get_links, PreviewFinder};
pub use crate::error::FinderError;
pub use crate::models::{SearchResult, TrackInfo};
