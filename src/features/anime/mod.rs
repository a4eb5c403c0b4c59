//! # Feature: Anime & Manga
//!
//! MyAnimeList lookups through the Jikan API: first search result for
//! anime, manga and characters, the top anime and manga rankings, a
//! seasonal lineup and a random pick.
//!
//! - **Version**: 1.2.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.2.0: Seasons, random anime and top manga
//! - 1.1.0: Retry on rate limit, localized field labels
//! - 1.0.0: Initial implementation

pub mod client;
pub mod display;

pub use client::{
    check_season_year, Anime, Character, JikanClient, Manga, Season, TOP_MANGA_SUBTYPES,
    TOP_SUBTYPES,
};
pub use display::{
    anime_embed, character_embed, manga_embed, season_embed, top_embed, top_manga_embed,
};
