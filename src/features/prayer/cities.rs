//! City records from the schedule feed

use anyhow::{anyhow, Result};
use serde_json::Value;

use crate::features::paging::Record;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct City {
    /// Path segment in the schedule feed, e.g. `bandar-lampung`
    pub id: String,
    pub name: String,
}

impl City {
    pub fn from_slug(slug: &str) -> Self {
        Self {
            id: slug.to_string(),
            name: title_case(slug),
        }
    }
}

impl Record for City {
    fn name(&self) -> &str {
        &self.name
    }
}

/// `bandar-lampung` -> `Bandar Lampung`
pub fn title_case(slug: &str) -> String {
    slug.split(|c: char| c == '-' || c == '_' || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Decode the city list: an array of slugs, or of `{id, name}` objects
pub fn parse_cities(body: Value) -> Result<Vec<City>> {
    let Value::Array(entries) = body else {
        return Err(anyhow!("City list is not an array"));
    };

    Ok(entries
        .into_iter()
        .filter_map(|entry| match entry {
            Value::String(slug) if !slug.trim().is_empty() => Some(City::from_slug(slug.trim())),
            Value::Object(map) => {
                let id = match map.get("id") {
                    Some(Value::String(s)) => s.trim().to_string(),
                    Some(Value::Number(n)) => n.to_string(),
                    _ => return None,
                };
                let name = map
                    .get("name")
                    .or_else(|| map.get("lokasi"))
                    .and_then(Value::as_str)
                    .map(|s| title_case(s.trim()))
                    .unwrap_or_else(|| title_case(&id));
                (!id.is_empty()).then_some(City { id, name })
            }
            _ => None,
        })
        .collect())
}

/// Used when the feed cannot be reached
pub fn fallback_cities() -> Vec<City> {
    [
        "jakarta", "bandung", "surabaya", "medan", "makassar", "semarang", "palembang", "denpasar",
    ]
    .iter()
    .map(|slug| City::from_slug(slug))
    .collect()
}

/// Exact match on name or id first, then the first partial match
pub fn find_city<'a>(cities: &'a [City], query: &str) -> Option<&'a City> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }
    cities
        .iter()
        .find(|c| c.name.to_lowercase() == needle || c.id.to_lowercase() == needle)
        .or_else(|| {
            cities
                .iter()
                .find(|c| c.name.to_lowercase().contains(&needle) || c.id.contains(&needle))
        })
}
