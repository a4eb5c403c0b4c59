//! Schedule feed client with cached city list and local fallbacks
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.1.0
//!
//! ## Changelog
//! - 1.1.0: Cache the city list, generated schedule when the feed is down
//! - 1.0.0: Initial implementation

use anyhow::Result;
use log::{debug, warn};
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::RwLock;

use super::cities::{fallback_cities, parse_cities, City};
use super::schedule::{fallback_schedule, parse_schedule, MonthSchedule};
use crate::core::http::{build_client, send_json, DEFAULT_TIMEOUT_SECS};

pub const FEED_BASE: &str = "https://raw.githubusercontent.com/lakuapik/jadwalsholatorg/master";

#[derive(Clone)]
pub struct PrayerClient {
    http: reqwest::Client,
    base_url: String,
    cities: Arc<RwLock<Option<Vec<City>>>>,
}

impl PrayerClient {
    pub fn new() -> Result<Self> {
        Ok(Self::with_base_url(build_client(DEFAULT_TIMEOUT_SECS)?, FEED_BASE))
    }

    pub fn with_base_url(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            cities: Arc::new(RwLock::new(None)),
        }
    }

    /// All cities in the feed. Falls back to a short built-in list, which is not cached.
    pub async fn cities(&self) -> Vec<City> {
        if let Some(cached) = self.cities.read().await.as_ref() {
            return cached.clone();
        }

        match self.fetch_cities().await {
            Ok(cities) if !cities.is_empty() => {
                debug!("Cached {} cities from the schedule feed", cities.len());
                *self.cities.write().await = Some(cities.clone());
                cities
            }
            Ok(_) => {
                warn!("Schedule feed returned no cities, using fallback list");
                fallback_cities()
            }
            Err(e) => {
                warn!("Failed to fetch city list, using fallback list: {e}");
                fallback_cities()
            }
        }
    }

    async fn fetch_cities(&self) -> Result<Vec<City>> {
        let url = format!("{}/kota.json", self.base_url);
        let body: Value = send_json(self.http.get(&url)).await?;
        parse_cities(body)
    }

    /// One month for `city_id`, generated locally if the feed fails or is empty
    pub async fn month(&self, city_id: &str, year: i32, month: u32) -> MonthSchedule {
        let url = format!("{}/adzan/{city_id}/{year}/{month:02}.json", self.base_url);
        let fetched = match send_json::<Value>(self.http.get(&url)).await {
            Ok(body) => parse_schedule(body),
            Err(e) => Err(e),
        };

        match fetched {
            Ok(days) if !days.is_empty() => MonthSchedule {
                days,
                is_fallback: false,
            },
            Ok(_) => {
                warn!("Empty schedule for {city_id} {year}-{month:02}, generating fallback");
                Self::fallback(year, month)
            }
            Err(e) => {
                warn!("Failed to fetch schedule for {city_id} {year}-{month:02}: {e}");
                Self::fallback(year, month)
            }
        }
    }

    fn fallback(year: i32, month: u32) -> MonthSchedule {
        MonthSchedule {
            days: fallback_schedule(year, month),
            is_fallback: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unreachable_client() -> PrayerClient {
        // Port 9 on localhost refuses connections
        PrayerClient::with_base_url(build_client(2).unwrap(), "http://127.0.0.1:9/")
    }

    #[tokio::test]
    async fn test_cities_fall_back_when_feed_unreachable() {
        let client = unreachable_client();
        let cities = client.cities().await;
        assert_eq!(cities, fallback_cities());
        assert!(client.cities.read().await.is_none());
    }

    #[tokio::test]
    async fn test_schedule_falls_back_when_feed_unreachable() {
        let client = unreachable_client();
        let month = client.month("jakarta", 2024, 3).await;
        assert!(month.is_fallback);
        assert_eq!(month.days.len(), 30);
    }

    #[tokio::test]
    async fn test_cached_cities_are_reused() {
        let client = unreachable_client();
        *client.cities.write().await = Some(vec![City::from_slug("ambon")]);
        assert_eq!(client.cities().await, vec![City::from_slug("ambon")]);
    }
}
