//! # Feature: Localized Text
//!
//! Bahasa Indonesia and English string tables with key lookup and
//! `{name}` placeholder substitution. Lookup falls back to English, then
//! to the key itself.
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.1.0: Localized paging templates
//! - 1.0.0: Initial implementation with id/en tables

mod tables;

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::features::paging::PageTemplate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    Id,
    En,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Id, Language::En];

    pub fn code(&self) -> &'static str {
        match self {
            Language::Id => "id",
            Language::En => "en",
        }
    }

    pub fn parse(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "id" | "indonesia" | "indonesian" => Some(Language::Id),
            "en" | "english" => Some(Language::En),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Language::Id => "Bahasa Indonesia",
            Language::En => "English",
        }
    }

    pub fn flag(&self) -> &'static str {
        match self {
            Language::Id => "🇮🇩",
            Language::En => "🇬🇧",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

static TEXTS: OnceLock<HashMap<(Language, &'static str), &'static str>> = OnceLock::new();

fn texts() -> &'static HashMap<(Language, &'static str), &'static str> {
    TEXTS.get_or_init(|| {
        let mut map = HashMap::new();
        for (key, value) in tables::ID {
            map.insert((Language::Id, *key), *value);
        }
        for (key, value) in tables::EN {
            map.insert((Language::En, *key), *value);
        }
        map
    })
}

/// Look up `key` in `lang`, falling back to English, then to the key itself
pub fn text(lang: Language, key: &str) -> String {
    let table = texts();
    table
        .get(&(lang, key))
        .or_else(|| table.get(&(Language::En, key)))
        .map(|s| s.to_string())
        .unwrap_or_else(|| key.to_string())
}

/// Look up `key` and substitute each `{name}` placeholder
pub fn format_text(lang: Language, key: &str, args: &[(&str, &str)]) -> String {
    let mut value = text(lang, key);
    for (name, replacement) in args {
        value = value.replace(&format!("{{{name}}}"), replacement);
    }
    value
}

/// Paging words for `lang`, with feature-specific nouns
pub fn page_template(lang: Language, item_noun: &str, column_heading: &str) -> PageTemplate {
    PageTemplate {
        item_noun: item_noun.to_string(),
        column_heading: column_heading.to_string(),
        page_word: text(lang, "paging.page"),
        of_word: text(lang, "paging.of"),
        empty_placeholder: text(lang, "paging.empty"),
        footer_note: None,
        search_label: text(lang, "paging.search"),
        home_label: text(lang, "paging.home"),
        layout_label: text(lang, "paging.layout"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_parse() {
        assert_eq!(Language::parse("ID"), Some(Language::Id));
        assert_eq!(Language::parse(" en "), Some(Language::En));
        assert_eq!(Language::parse("english"), Some(Language::En));
        assert_eq!(Language::parse("fr"), None);
        assert_eq!(Language::default(), Language::Id);
    }

    #[test]
    fn test_lookup_in_requested_language() {
        assert_eq!(text(Language::Id, "paging.page"), "Halaman");
        assert_eq!(text(Language::En, "paging.page"), "Page");
    }

    #[test]
    fn test_missing_key_falls_back_to_key() {
        assert_eq!(text(Language::Id, "does.not.exist"), "does.not.exist");
    }

    #[test]
    fn test_every_indonesian_key_has_english() {
        for (key, _) in tables::ID {
            assert!(
                tables::EN.iter().any(|(k, _)| k == key),
                "missing English text for {key}"
            );
        }
    }

    #[test]
    fn test_format_placeholders() {
        assert_eq!(
            format_text(Language::En, "prefix.changed", &[("prefix", "?")]),
            "Prefix changed to `?`"
        );
        assert_eq!(
            format_text(Language::Id, "prefix.changed", &[("prefix", "?")]),
            "Prefix diubah menjadi `?`"
        );
    }

    #[test]
    fn test_page_template_uses_language() {
        let template = page_template(Language::Id, "kota", "Kota");
        assert_eq!(template.page_word, "Halaman");
        assert_eq!(template.of_word, "dari");
        assert_eq!(template.item_noun, "kota");
        assert_eq!(page_template(Language::En, "cities", "Cities").home_label, "Back");
    }

    #[test]
    fn test_format_leaves_unknown_placeholders() {
        assert_eq!(
            format_text(Language::En, "prefix.changed", &[("other", "x")]),
            "Prefix changed to `{prefix}`"
        );
    }
}
