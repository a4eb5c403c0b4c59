//! # Feature: Last.fm
//!
//! Scrobble lookups for linked accounts: now playing, recent tracks and
//! top artists/albums over a period, and album or artist cards with the
//! user's own play count. Links live in memory only.
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.2.0
//! - **Toggleable**: true (requires `LASTFM_API_KEY`)
//!
//! ## Changelog
//! - 1.1.0: Album and artist info
//! - 1.0.0: Initial implementation

pub mod client;
pub mod display;

pub use client::{AccountLinks, AlbumInfo, ArtistInfo, LastfmClient, Period, LIST_LIMIT};
pub use display::{
    album_info_embed, artist_info_embed, now_playing_embed, recent_embed, top_albums_embed,
    top_artists_embed,
};
