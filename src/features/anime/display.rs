//! Embeds for Jikan results

use serenity::builder::CreateEmbed;

use super::client::{Anime, Character, Manga, Season};
use crate::core::embeds::colors;
use crate::core::response::{truncate, truncate_for_field};
use crate::features::i18n::{format_text, text, Language};

const SYNOPSIS_LIMIT: usize = 1000;
const NA: &str = "N/A";

fn or_na<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| NA.to_string())
}

fn synopsis(value: Option<&str>) -> String {
    match value.map(str::trim).filter(|s| !s.is_empty()) {
        Some(s) => truncate(s, SYNOPSIS_LIMIT),
        None => "-".to_string(),
    }
}

pub fn anime_embed(anime: &Anime, lang: Language) -> CreateEmbed {
    let mut embed = CreateEmbed::default();
    embed
        .title(&anime.title)
        .url(&anime.url)
        .description(synopsis(anime.synopsis.as_deref()))
        .color(colors::PRIMARY);
    if let Some(image) = &anime.images.jpg.image_url {
        embed.thumbnail(image);
    }
    if let Some(japanese) = &anime.title_japanese {
        embed.field("🇯🇵", japanese, true);
    }
    embed
        .field("📺 Type", or_na(anime.kind.as_deref()), true)
        .field(format!("📊 {}", text(lang, "anime.episodes")), or_na(anime.episodes), true)
        .field(format!("📡 {}", text(lang, "anime.status")), or_na(anime.status.as_deref()), true)
        .field(format!("⭐ {}", text(lang, "anime.score")), or_na(anime.score), true)
        .field("📅 Aired", or_na(anime.aired.string.as_deref()), true);
    embed.footer(|f| f.text("MyAnimeList via Jikan"));
    embed
}

pub fn manga_embed(manga: &Manga, lang: Language) -> CreateEmbed {
    let mut embed = CreateEmbed::default();
    embed
        .title(&manga.title)
        .url(&manga.url)
        .description(synopsis(manga.synopsis.as_deref()))
        .color(colors::SUCCESS);
    if let Some(image) = &manga.images.jpg.image_url {
        embed.thumbnail(image);
    }
    embed
        .field("📖 Type", or_na(manga.kind.as_deref()), true)
        .field(format!("📚 {}", text(lang, "anime.chapters")), or_na(manga.chapters), true)
        .field(format!("📡 {}", text(lang, "anime.status")), or_na(manga.status.as_deref()), true)
        .field(format!("⭐ {}", text(lang, "anime.score")), or_na(manga.score), true)
        .field("📅 Published", or_na(manga.published.string.as_deref()), true);
    embed.footer(|f| f.text("MyAnimeList via Jikan"));
    embed
}

pub fn character_embed(character: &Character, lang: Language) -> CreateEmbed {
    let mut embed = CreateEmbed::default();
    embed
        .title(&character.name)
        .url(&character.url)
        .description(synopsis(character.about.as_deref()))
        .color(colors::INFO);
    if let Some(image) = &character.images.jpg.image_url {
        embed.thumbnail(image);
    }
    if let Some(kanji) = &character.name_kanji {
        embed.field("🇯🇵", kanji, true);
    }
    let nicknames = if character.nicknames.is_empty() {
        "-".to_string()
    } else {
        truncate_for_field(&character.nicknames.join(", "))
    };
    embed
        .field(format!("❤️ {}", text(lang, "anime.favorites")), or_na(character.favorites), true)
        .field("🏷️ Nicknames", nicknames, false);
    embed
}

fn ranking_embed<'a>(
    title: String,
    color: u32,
    entries: impl Iterator<Item = (&'a str, Option<f64>, &'a str)>,
    lang: Language,
) -> CreateEmbed {
    let mut embed = CreateEmbed::default();
    embed.title(title).color(color);
    for (i, (name, score, url)) in entries.enumerate() {
        embed.field(
            format!("{}. {}", i + 1, name),
            format!("{}: {} | [MAL]({})", text(lang, "anime.score"), or_na(score), url),
            false,
        );
    }
    embed
}

fn with_subtype(mut title: String, subtype: Option<&str>) -> String {
    if let Some(subtype) = subtype {
        title.push_str(&format!(" ({subtype})"));
    }
    title
}

pub fn top_embed(list: &[Anime], subtype: Option<&str>, lang: Language) -> CreateEmbed {
    let title = with_subtype(text(lang, "anime.top_title"), subtype);
    let entries = list.iter().map(|a| (a.title.as_str(), a.score, a.url.as_str()));
    ranking_embed(title, colors::ERROR, entries, lang)
}

pub fn top_manga_embed(list: &[Manga], subtype: Option<&str>, lang: Language) -> CreateEmbed {
    let title = with_subtype(text(lang, "anime.top_manga_title"), subtype);
    let entries = list.iter().map(|m| (m.title.as_str(), m.score, m.url.as_str()));
    ranking_embed(title, colors::SUCCESS, entries, lang)
}

/// One field per pick: type, score and a MAL link
pub fn season_embed(list: &[Anime], season: Season, year: i32, lang: Language) -> CreateEmbed {
    let year = year.to_string();
    let mut embed = CreateEmbed::default();
    embed
        .title(format_text(
            lang,
            "anime.season_title",
            &[("season", season.id()), ("year", &year)],
        ))
        .color(colors::PRIMARY);
    if list.is_empty() {
        embed.description(text(lang, "anime.season_empty"));
    }
    for anime in list {
        embed.field(
            &anime.title,
            format!(
                "Type: {} | {}: {} | [MAL]({})",
                or_na(anime.kind.as_deref()),
                text(lang, "anime.score"),
                or_na(anime.score),
                anime.url
            ),
            false,
        );
    }
    embed.footer(|f| f.text("MyAnimeList via Jikan"));
    embed
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn anime(title: &str, score: Option<f64>) -> Anime {
        serde_json::from_value(json!({
            "title": title,
            "url": "https://myanimelist.net/anime/1",
            "score": score
        }))
        .unwrap()
    }

    #[test]
    fn test_anime_embed_fields() {
        let embed = anime_embed(&anime("Cowboy Bebop", Some(8.75)), Language::En);
        let fields = embed.0.get("fields").and_then(|v| v.as_array()).unwrap();
        let score = fields.iter().find(|f| f["name"] == "⭐ Score").unwrap();
        assert_eq!(score["value"].as_str(), Some("8.75"));
        let episodes = fields.iter().find(|f| f["name"] == "📊 Episodes").unwrap();
        assert_eq!(episodes["value"].as_str(), Some("N/A"));
    }

    #[test]
    fn test_synopsis_truncated() {
        let long = "a".repeat(3000);
        assert!(synopsis(Some(&long)).len() <= SYNOPSIS_LIMIT);
        assert_eq!(synopsis(Some("  ")), "-");
        assert_eq!(synopsis(None), "-");
    }

    #[test]
    fn test_top_embed_numbering() {
        let list = vec![anime("A", Some(9.0)), anime("B", None)];
        let embed = top_embed(&list, Some("airing"), Language::Id);
        assert_eq!(
            embed.0.get("title").and_then(|v| v.as_str()),
            Some("🏆 Anime Teratas (airing)")
        );
        let fields = embed.0.get("fields").and_then(|v| v.as_array()).unwrap();
        assert_eq!(fields[1]["name"].as_str(), Some("2. B"));
        assert!(fields[1]["value"].as_str().unwrap().starts_with("Skor: N/A"));
    }

    #[test]
    fn test_top_manga_embed_title() {
        let manga: Manga = serde_json::from_value(json!({
            "title": "Berserk",
            "url": "https://myanimelist.net/manga/2",
            "score": 9.47
        }))
        .unwrap();
        let embed = top_manga_embed(&[manga], Some("manga"), Language::En);
        assert_eq!(
            embed.0.get("title").and_then(|v| v.as_str()),
            Some("🏆 Top Manga (manga)")
        );
        let fields = embed.0.get("fields").and_then(|v| v.as_array()).unwrap();
        assert_eq!(fields[0]["name"].as_str(), Some("1. Berserk"));
    }

    #[test]
    fn test_season_embed_fields() {
        let mut pick = anime("Frieren", Some(9.3));
        pick.kind = Some("TV".to_string());
        let embed = season_embed(&[pick], Season::Fall, 2023, Language::En);
        assert_eq!(
            embed.0.get("title").and_then(|v| v.as_str()),
            Some("📅 Anime Season: fall 2023")
        );
        let fields = embed.0.get("fields").and_then(|v| v.as_array()).unwrap();
        assert_eq!(fields[0]["name"].as_str(), Some("Frieren"));
        assert_eq!(
            fields[0]["value"].as_str(),
            Some("Type: TV | Score: 9.3 | [MAL](https://myanimelist.net/anime/1)")
        );
    }

    #[test]
    fn test_empty_season_says_so() {
        let embed = season_embed(&[], Season::Winter, 1950, Language::Id);
        assert_eq!(
            embed.0.get("description").and_then(|v| v.as_str()),
            Some("Tidak ada anime di musim ini.")
        );
    }
}
