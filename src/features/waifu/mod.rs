//! # Feature: Waifu Images
//!
//! SFW images from waifu.pics. One parameterized fetch serves every
//! category; the category table is static.
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.1.0: Single category-parameterized command instead of one per category
//! - 1.0.0: Initial implementation

use anyhow::{anyhow, Result};
use log::debug;
use rand::seq::IndexedRandom;
use serde::Deserialize;

use crate::core::http::{build_client, send_json, DEFAULT_TIMEOUT_SECS};

pub const API_BASE: &str = "https://api.waifu.pics";
pub const DEFAULT_CATEGORY: &str = "waifu";

/// `(category, emoji)` for every SFW category the API serves
pub const CATEGORIES: &[(&str, &str)] = &[
    ("waifu", "💖"),
    ("neko", "🐱"),
    ("shinobu", "🦋"),
    ("megumin", "💥"),
    ("bully", "😈"),
    ("cuddle", "🤗"),
    ("cry", "😢"),
    ("hug", "🫂"),
    ("awoo", "🐺"),
    ("kiss", "💋"),
    ("lick", "👅"),
    ("pat", "✋"),
    ("smug", "😏"),
    ("bonk", "🔨"),
    ("yeet", "🚀"),
    ("blush", "😊"),
    ("smile", "😄"),
    ("wave", "👋"),
    ("highfive", "🙌"),
    ("handhold", "🤝"),
];

pub fn is_category(name: &str) -> bool {
    CATEGORIES.iter().any(|(category, _)| *category == name)
}

pub fn category_emoji(name: &str) -> Option<&'static str> {
    CATEGORIES
        .iter()
        .find(|(category, _)| *category == name)
        .map(|(_, emoji)| *emoji)
}

pub fn random_category() -> &'static str {
    CATEGORIES
        .choose(&mut rand::rng())
        .map(|(category, _)| *category)
        .unwrap_or(DEFAULT_CATEGORY)
}

#[derive(Debug, Deserialize)]
struct ManyResponse {
    #[serde(default)]
    files: Vec<String>,
}

#[derive(Clone)]
pub struct WaifuClient {
    http: reqwest::Client,
    base_url: String,
}

impl WaifuClient {
    pub fn new() -> Result<Self> {
        Ok(Self::with_base_url(build_client(DEFAULT_TIMEOUT_SECS)?, API_BASE))
    }

    pub fn with_base_url(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// A random image URL from `category`
    pub async fn image(&self, category: &str) -> Result<String> {
        if !is_category(category) {
            return Err(anyhow!("Unknown category: {category}"));
        }

        let url = format!("{}/many/sfw/{category}", self.base_url);
        debug!("Requesting images from {url}");
        let response: ManyResponse = send_json(
            self.http
                .post(&url)
                .json(&serde_json::json!({ "exclude": [] })),
        )
        .await?;

        pick_file(response.files).ok_or_else(|| anyhow!("No images returned for {category}"))
    }
}

fn pick_file(files: Vec<String>) -> Option<String> {
    files.choose(&mut rand::rng()).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_table() {
        assert!(is_category("neko"));
        assert!(!is_category("trap"));
        assert_eq!(category_emoji("wave"), Some("👋"));
        assert!(is_category(random_category()));
    }

    #[test]
    fn test_categories_are_unique() {
        let mut names: Vec<&str> = CATEGORIES.iter().map(|(c, _)| *c).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), CATEGORIES.len());
    }

    #[test]
    fn test_many_response_parsing() {
        let response: ManyResponse = serde_json::from_value(serde_json::json!({
            "files": ["https://i.waifu.pics/a.png", "https://i.waifu.pics/b.png"]
        }))
        .unwrap();
        let file = pick_file(response.files).unwrap();
        assert!(file.starts_with("https://i.waifu.pics/"));
    }

    #[test]
    fn test_empty_files() {
        let response: ManyResponse = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(pick_file(response.files).is_none());
    }

    #[tokio::test]
    async fn test_unknown_category_is_rejected_before_request() {
        let client = WaifuClient::with_base_url(reqwest::Client::new(), "http://127.0.0.1:9");
        let err = client.image("nsfw").await.unwrap_err();
        assert!(err.to_string().contains("Unknown category"));
    }
}
