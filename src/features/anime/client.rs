//! Jikan (MyAnimeList) API client and response models
//!
//! - **Version**: 1.2.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.2.0: Seasonal lineup, random anime and top manga
//! - 1.1.0: Bounded retry on HTTP 429
//! - 1.0.0: Anime, manga, character search and top anime

use anyhow::{anyhow, Result};
use chrono::Datelike;
use log::{debug, warn};
use rand::seq::IndexedRandom;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

use crate::core::http::{build_client, describe_error, DEFAULT_TIMEOUT_SECS};

pub const API_BASE: &str = "https://api.jikan.moe/v4";
pub const SEARCH_LIMIT: u32 = 5;
pub const TOP_LIMIT: usize = 10;
pub const SEASON_SAMPLE: usize = 5;
pub const FIRST_SEASON_YEAR: i32 = 1950;

const MAX_ATTEMPTS: u32 = 3;
const RATE_LIMIT_BACKOFF: Duration = Duration::from_secs(2);

/// Subtypes accepted by `/topanime`
pub const TOP_SUBTYPES: &[&str] = &[
    "airing", "upcoming", "tv", "movie", "ova", "special", "bypopularity", "favorite",
];

/// Subtypes accepted by `/topmanga`
pub const TOP_MANGA_SUBTYPES: &[&str] = &[
    "manga", "novel", "lightnovel", "oneshot", "doujin", "manhwa", "manhua", "publishing",
    "bypopularity", "favorite",
];

const ANIME_MEDIA_TYPES: &[&str] = &["tv", "movie", "ova", "special"];
const MANGA_MEDIA_TYPES: &[&str] = &[
    "manga", "novel", "lightnovel", "oneshot", "doujin", "manhwa", "manhua",
];

/// Broadcast season, as used by `seasons/{year}/{season}`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Season {
    Winter,
    Spring,
    Summer,
    Fall,
}

impl Season {
    pub const ALL: [Season; 4] = [Season::Winter, Season::Spring, Season::Summer, Season::Fall];

    pub fn id(&self) -> &'static str {
        match self {
            Season::Winter => "winter",
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Fall => "fall",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.id().eq_ignore_ascii_case(name.trim()))
    }

    /// December through February is winter
    pub fn from_month(month: u32) -> Self {
        match month {
            3..=5 => Season::Spring,
            6..=8 => Season::Summer,
            9..=11 => Season::Fall,
            _ => Season::Winter,
        }
    }

    pub fn current() -> Self {
        Self::from_month(chrono::Utc::now().month())
    }
}

/// Seasons exist from 1950 up to next year's announced lineup
pub fn check_season_year(year: i32, current_year: i32) -> Result<i32> {
    let last = current_year + 1;
    if (FIRST_SEASON_YEAR..=last).contains(&year) {
        Ok(year)
    } else {
        Err(anyhow!("Year must be between {FIRST_SEASON_YEAR} and {last}"))
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImageUrls {
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Images {
    #[serde(default)]
    pub jpg: ImageUrls,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DateRange {
    pub string: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Anime {
    pub title: String,
    pub url: String,
    pub title_japanese: Option<String>,
    pub synopsis: Option<String>,
    #[serde(default)]
    pub images: Images,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub episodes: Option<u32>,
    pub status: Option<String>,
    pub score: Option<f64>,
    pub rank: Option<u32>,
    pub year: Option<u32>,
    #[serde(default)]
    pub aired: DateRange,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Manga {
    pub title: String,
    pub url: String,
    pub synopsis: Option<String>,
    #[serde(default)]
    pub images: Images,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub chapters: Option<u32>,
    pub volumes: Option<u32>,
    pub status: Option<String>,
    pub score: Option<f64>,
    #[serde(default)]
    pub published: DateRange,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Character {
    pub name: String,
    pub url: String,
    pub name_kanji: Option<String>,
    pub about: Option<String>,
    #[serde(default)]
    pub images: Images,
    #[serde(default)]
    pub nicknames: Vec<String>,
    pub favorites: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct ListResponse<T> {
    #[serde(default = "Vec::new")]
    data: Vec<T>,
}

#[derive(Debug, Deserialize)]
struct ItemResponse<T> {
    data: Option<T>,
}

#[derive(Clone)]
pub struct JikanClient {
    http: reqwest::Client,
    base_url: String,
}

impl JikanClient {
    pub fn new() -> Result<Self> {
        Ok(Self::with_base_url(build_client(DEFAULT_TIMEOUT_SECS)?, API_BASE))
    }

    pub fn with_base_url(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// GET an endpoint, sleeping and retrying while the API answers 429
    async fn get<T: DeserializeOwned>(&self, endpoint: &str, params: &[(&str, String)]) -> Result<T> {
        let url = format!("{}/{endpoint}", self.base_url);

        for attempt in 1..=MAX_ATTEMPTS {
            let response = self
                .http
                .get(&url)
                .query(params)
                .send()
                .await
                .map_err(|e| describe_error(&e))?;

            let status = response.status();
            debug!("GET {url} (attempt {attempt}) -> {status}");

            if status == StatusCode::TOO_MANY_REQUESTS {
                warn!("Jikan rate limited on {endpoint}, retrying in {RATE_LIMIT_BACKOFF:?}");
                tokio::time::sleep(RATE_LIMIT_BACKOFF).await;
                continue;
            }
            if !status.is_success() {
                return Err(anyhow!("Jikan returned HTTP {status}"));
            }
            return response.json::<T>().await.map_err(|e| describe_error(&e));
        }

        Err(anyhow!("Jikan is rate limiting requests, try again shortly"))
    }

    async fn search<T: DeserializeOwned>(&self, endpoint: &str, query: &str) -> Result<Option<T>> {
        let params = [("q", query.to_string()), ("limit", SEARCH_LIMIT.to_string())];
        let list: ListResponse<T> = self.get(endpoint, &params).await?;
        Ok(list.data.into_iter().next())
    }

    pub async fn anime(&self, query: &str) -> Result<Option<Anime>> {
        self.search("anime", query).await
    }

    pub async fn manga(&self, query: &str) -> Result<Option<Manga>> {
        self.search("manga", query).await
    }

    pub async fn character(&self, query: &str) -> Result<Option<Character>> {
        self.search("characters", query).await
    }

    /// Top anime, optionally narrowed by one of `TOP_SUBTYPES`
    pub async fn top_anime(&self, subtype: Option<&str>) -> Result<Vec<Anime>> {
        let params = top_params(subtype, TOP_SUBTYPES, ANIME_MEDIA_TYPES)?;
        let list: ListResponse<Anime> = self.get("top/anime", &params).await?;
        Ok(list.data.into_iter().take(TOP_LIMIT).collect())
    }

    /// Top manga, optionally narrowed by one of `TOP_MANGA_SUBTYPES`
    pub async fn top_manga(&self, subtype: Option<&str>) -> Result<Vec<Manga>> {
        let params = top_params(subtype, TOP_MANGA_SUBTYPES, MANGA_MEDIA_TYPES)?;
        let list: ListResponse<Manga> = self.get("top/manga", &params).await?;
        Ok(list.data.into_iter().take(TOP_LIMIT).collect())
    }

    /// Up to `SEASON_SAMPLE` random picks from a season's lineup
    pub async fn season(&self, year: i32, season: Season) -> Result<Vec<Anime>> {
        let endpoint = format!("seasons/{year}/{}", season.id());
        let list: ListResponse<Anime> = self.get(&endpoint, &[]).await?;
        Ok(sample(list.data, SEASON_SAMPLE))
    }

    pub async fn random_anime(&self) -> Result<Option<Anime>> {
        let item: ItemResponse<Anime> = self.get("random/anime", &[]).await?;
        Ok(item.data)
    }
}

fn sample<T: Clone>(items: Vec<T>, amount: usize) -> Vec<T> {
    items
        .choose_multiple(&mut rand::rng(), amount)
        .cloned()
        .collect()
}

/// Media types go in `type`, rankings in `filter`
fn top_params(
    subtype: Option<&str>,
    valid: &[&str],
    media_types: &[&str],
) -> Result<Vec<(&'static str, String)>> {
    let Some(subtype) = subtype.map(str::to_lowercase) else {
        return Ok(Vec::new());
    };
    if !valid.contains(&subtype.as_str()) {
        return Err(anyhow!("Invalid subtype. Valid subtypes: {}", valid.join(", ")));
    }
    let key = if media_types.contains(&subtype.as_str()) {
        "type"
    } else {
        "filter"
    };
    Ok(vec![(key, subtype)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_anime_search_response() {
        let list: ListResponse<Anime> = serde_json::from_value(json!({
            "pagination": {"has_next_page": false},
            "data": [{
                "mal_id": 5114,
                "url": "https://myanimelist.net/anime/5114",
                "title": "Fullmetal Alchemist: Brotherhood",
                "title_japanese": "鋼の錬金術師",
                "images": {"jpg": {"image_url": "https://cdn.myanimelist.net/x.jpg"}},
                "type": "TV",
                "episodes": 64,
                "status": "Finished Airing",
                "score": 9.1,
                "rank": 1,
                "aired": {"string": "Apr 5, 2009 to Jul 4, 2010"},
                "synopsis": "After a horrific alchemy experiment..."
            }]
        }))
        .unwrap();

        let anime = &list.data[0];
        assert_eq!(anime.kind.as_deref(), Some("TV"));
        assert_eq!(anime.episodes, Some(64));
        assert_eq!(anime.aired.string.as_deref(), Some("Apr 5, 2009 to Jul 4, 2010"));
        assert!(anime.images.jpg.image_url.is_some());
    }

    #[test]
    fn test_nullable_fields() {
        let manga: Manga = serde_json::from_value(json!({
            "title": "One Piece",
            "url": "https://myanimelist.net/manga/13",
            "chapters": null,
            "score": null,
            "published": {"string": null}
        }))
        .unwrap();
        assert!(manga.chapters.is_none());
        assert!(manga.images.jpg.image_url.is_none());
    }

    #[test]
    fn test_character_response() {
        let character: Character = serde_json::from_value(json!({
            "name": "Levi",
            "url": "https://myanimelist.net/character/45627",
            "nicknames": ["Humanity's Strongest Soldier"],
            "favorites": 160000
        }))
        .unwrap();
        assert_eq!(character.nicknames.len(), 1);
        assert_eq!(character.favorites, Some(160000));
    }

    #[test]
    fn test_empty_list() {
        let list: ListResponse<Anime> = serde_json::from_value(json!({})).unwrap();
        assert!(list.data.is_empty());
    }

    #[test]
    fn test_top_params() {
        let anime = |s| top_params(s, TOP_SUBTYPES, ANIME_MEDIA_TYPES);
        assert!(anime(None).unwrap().is_empty());
        assert_eq!(anime(Some("Movie")).unwrap(), vec![("type", "movie".to_string())]);
        assert_eq!(anime(Some("airing")).unwrap(), vec![("filter", "airing".to_string())]);
        assert!(anime(Some("manhwa")).is_err());
    }

    #[test]
    fn test_top_manga_params() {
        let manga = |s| top_params(s, TOP_MANGA_SUBTYPES, MANGA_MEDIA_TYPES);
        assert_eq!(manga(Some("manhwa")).unwrap(), vec![("type", "manhwa".to_string())]);
        assert_eq!(manga(Some("publishing")).unwrap(), vec![("filter", "publishing".to_string())]);
        assert!(manga(Some("airing")).is_err());
    }

    #[test]
    fn test_season_from_month() {
        assert_eq!(Season::from_month(12), Season::Winter);
        assert_eq!(Season::from_month(1), Season::Winter);
        assert_eq!(Season::from_month(4), Season::Spring);
        assert_eq!(Season::from_month(8), Season::Summer);
        assert_eq!(Season::from_month(10), Season::Fall);
        assert_eq!(Season::parse("FALL"), Some(Season::Fall));
        assert_eq!(Season::parse("autumn"), None);
    }

    #[test]
    fn test_season_year_bounds() {
        assert_eq!(check_season_year(1950, 2026).unwrap(), 1950);
        assert_eq!(check_season_year(2027, 2026).unwrap(), 2027);
        assert!(check_season_year(1949, 2026).is_err());
        let err = check_season_year(2028, 2026).unwrap_err();
        assert_eq!(err.to_string(), "Year must be between 1950 and 2027");
    }

    #[test]
    fn test_sample_is_bounded() {
        assert_eq!(sample((0..20).collect::<Vec<u32>>(), SEASON_SAMPLE).len(), 5);
        let picked = sample(vec![1, 2, 3], SEASON_SAMPLE);
        assert_eq!(picked.len(), 3);
    }

    #[test]
    fn test_random_anime_response() {
        let item: ItemResponse<Anime> = serde_json::from_value(json!({
            "data": {"title": "Mushishi", "url": "https://myanimelist.net/anime/457"}
        }))
        .unwrap();
        assert_eq!(item.data.unwrap().title, "Mushishi");
        let empty: ItemResponse<Anime> = serde_json::from_value(json!({})).unwrap();
        assert!(empty.data.is_none());
    }
}
