//! Indonesian school directory API client
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.1.0
//!
//! ## Changelog
//! - 1.1.0: Accept both the wrapped and the bare-array response shapes
//! - 1.0.0: Browse by type, search by name, lookup by NPSN

use anyhow::{anyhow, Result};
use log::{debug, warn};
use serde_json::Value;

use super::types::{School, SchoolType};
use crate::core::http::{build_client, send_json, DEFAULT_TIMEOUT_SECS};

pub const API_BASE: &str = "https://api-sekolah-indonesia.vercel.app";

/// Schools fetched per type listing
pub const PER_PAGE: usize = 25;

#[derive(Clone)]
pub struct SchoolClient {
    http: reqwest::Client,
    base_url: String,
}

impl SchoolClient {
    pub fn new() -> Result<Self> {
        Ok(Self::with_base_url(build_client(DEFAULT_TIMEOUT_SECS)?, API_BASE))
    }

    pub fn with_base_url(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub async fn by_type(&self, school_type: SchoolType) -> Result<Vec<School>> {
        let url = format!("{}/sekolah/{}", self.base_url, school_type.code());
        debug!("Fetching {} schools from {url}", school_type.code());
        let per_page = PER_PAGE.to_string();
        let body: Value = send_json(
            self.http
                .get(&url)
                .query(&[("page", "1"), ("perPage", per_page.as_str())]),
        )
        .await?;
        parse_schools(body)
    }

    pub async fn search(&self, name: &str) -> Result<Vec<School>> {
        let url = format!("{}/sekolah/s", self.base_url);
        let body: Value = send_json(self.http.get(&url).query(&[("sekolah", name)])).await?;
        parse_schools(body)
    }

    pub async fn by_npsn(&self, npsn: &str) -> Result<Option<School>> {
        let url = format!("{}/sekolah/s", self.base_url);
        let body: Value = send_json(self.http.get(&url).query(&[("npsn", npsn)])).await?;
        let schools = parse_schools(body)?;
        Ok(schools
            .iter()
            .find(|s| s.npsn == npsn)
            .cloned()
            .or_else(|| schools.into_iter().next()))
    }
}

/// Decode `{"dataSekolah": [...]}` or a bare array, dropping nameless entries
pub fn parse_schools(body: Value) -> Result<Vec<School>> {
    let entries = match body {
        Value::Array(entries) => entries,
        Value::Object(mut map) => match map.remove("dataSekolah") {
            Some(Value::Array(entries)) => entries,
            Some(Value::Null) | None => Vec::new(),
            Some(other) => return Err(anyhow!("Unexpected dataSekolah payload: {other}")),
        },
        other => return Err(anyhow!("Unexpected school directory response: {other}")),
    };

    let total = entries.len();
    let schools: Vec<School> = entries
        .into_iter()
        .filter_map(|entry| serde_json::from_value::<School>(entry).ok())
        .filter(|school| !school.name.is_empty())
        .collect();

    if schools.len() < total {
        warn!("Dropped {} malformed school entries", total - schools.len());
    }
    Ok(schools)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_wrapped_response() {
        let body = json!({
            "dataSekolah": [
                {"sekolah": "SMP NEGERI 2 DEPOK", "npsn": "20228001", "status": "N"},
                {"sekolah": "SMP ISLAM AL AZHAR", "npsn": "20228002", "status": "S"}
            ],
            "total_data": 2
        });
        let schools = parse_schools(body).unwrap();
        assert_eq!(schools.len(), 2);
        assert_eq!(schools[1].name, "SMP ISLAM AL AZHAR");
    }

    #[test]
    fn test_parse_bare_array() {
        let body = json!([{"sekolah": "SD NEGERI 1", "npsn": "1"}]);
        assert_eq!(parse_schools(body).unwrap().len(), 1);
    }

    #[test]
    fn test_parse_drops_nameless_entries() {
        let body = json!({"dataSekolah": [{"npsn": "1"}, {"sekolah": "SMK 1"}, 5]});
        let schools = parse_schools(body).unwrap();
        assert_eq!(schools.len(), 1);
        assert_eq!(schools[0].name, "SMK 1");
    }

    #[test]
    fn test_parse_empty_and_invalid() {
        assert!(parse_schools(json!({"dataSekolah": null})).unwrap().is_empty());
        assert!(parse_schools(json!({"message": "not found"})).unwrap().is_empty());
        assert!(parse_schools(json!("oops")).is_err());
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let client = SchoolClient::with_base_url(reqwest::Client::new(), "http://localhost:1/");
        assert_eq!(client.base_url, "http://localhost:1");
    }
}
