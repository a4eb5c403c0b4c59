//! Embeds for Last.fm results

use chrono::DateTime;
use serenity::builder::CreateEmbed;

use super::client::{AlbumInfo, ArtistInfo, Period, TopAlbum, TopArtist, Track};
use crate::core::response::truncate;
use crate::core::warning_embed;
use crate::features::i18n::{format_text, text, Language};

/// Last.fm red
pub const COLOR: u32 = 0xd51007;
const BIO_LIMIT: usize = 250;

fn profile_link(username: &str) -> String {
    format!("[{username}](https://www.last.fm/user/{username})")
}

/// Unix seconds as `14 Nov 2023, 22:13` (UTC)
pub fn format_timestamp(uts: &str) -> String {
    uts.parse::<i64>()
        .ok()
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
        .map(|dt| dt.format("%d %b %Y, %H:%M").to_string())
        .unwrap_or_else(|| "Unknown date".to_string())
}

fn track_line(track: &Track, with_album: bool) -> String {
    let artist = if track.artist.text.is_empty() {
        "Unknown Artist"
    } else {
        &track.artist.text
    };
    let mut line = format!("**{}** by **{artist}**", track.name);
    if with_album && !track.album.text.is_empty() {
        line.push_str(&format!(" from *{}*", track.album.text));
    }
    line
}

pub fn now_playing_embed(track: &Track, username: &str, lang: Language) -> CreateEmbed {
    let title = if track.is_now_playing() {
        text(lang, "lastfm.now_playing")
    } else {
        text(lang, "lastfm.last_played")
    };

    let mut embed = CreateEmbed::default();
    embed
        .title(title)
        .description(track_line(track, true))
        .color(COLOR);
    if let Some(cover) = track.cover() {
        embed.thumbnail(cover);
    }
    if !track.is_now_playing() {
        if let Some(date) = &track.date {
            embed.field("Scrobbled", format_timestamp(&date.uts), true);
        }
    }
    embed.field("Profile", profile_link(username), true);
    embed
}

pub fn recent_embed(tracks: &[Track], username: &str, lang: Language) -> CreateEmbed {
    let mut embed = CreateEmbed::default();
    embed
        .title(format_text(lang, "lastfm.recent_title", &[("username", username)]))
        .color(COLOR);
    if tracks.is_empty() {
        embed.description(text(lang, "lastfm.no_tracks"));
        return embed;
    }

    for (i, track) in tracks.iter().enumerate() {
        let mut value = track_line(track, false);
        if !track.album.text.is_empty() {
            value.push_str(&format!("\n*{}*", track.album.text));
        }
        let name = if track.is_now_playing() {
            text(lang, "lastfm.now_playing")
        } else {
            if let Some(date) = &track.date {
                value.push_str(&format!("\n`{}`", format_timestamp(&date.uts)));
            }
            format!("{}.", i + 1)
        };
        embed.field(name, value, false);
    }
    if let Some(cover) = tracks.first().and_then(Track::cover) {
        embed.thumbnail(cover);
    }
    embed
}

pub fn top_artists_embed(
    artists: &[TopArtist],
    username: &str,
    period: Period,
    lang: Language,
) -> CreateEmbed {
    let mut embed = CreateEmbed::default();
    embed
        .title(format_text(lang, "lastfm.top_artists", &[("username", username)]))
        .color(COLOR);
    if artists.is_empty() {
        embed.description(text(lang, "lastfm.no_tracks"));
        return embed;
    }

    let lines: Vec<String> = artists
        .iter()
        .enumerate()
        .map(|(i, artist)| {
            format!(
                "`{}.` **{}** - {}",
                i + 1,
                artist.name,
                format_text(lang, "lastfm.plays", &[("count", &artist.playcount)])
            )
        })
        .collect();
    embed.description(format!("{}\n\n{}", period.display(), lines.join("\n")));
    embed
}

pub fn top_albums_embed(
    albums: &[TopAlbum],
    username: &str,
    period: Period,
    lang: Language,
) -> CreateEmbed {
    let mut embed = CreateEmbed::default();
    embed
        .title(format_text(lang, "lastfm.top_albums", &[("username", username)]))
        .description(period.display())
        .color(COLOR);
    if albums.is_empty() {
        embed.description(text(lang, "lastfm.no_tracks"));
        return embed;
    }

    for (i, album) in albums.iter().enumerate() {
        embed.field(
            format!("{}. {}", i + 1, album.name),
            format!(
                "**{}**\n{}",
                album.artist.name,
                format_text(lang, "lastfm.plays", &[("count", &album.playcount)])
            ),
            i % 2 == 0,
        );
    }
    if let Some(cover) = albums.first().and_then(TopAlbum::cover) {
        embed.thumbnail(cover);
    }
    embed
}

fn tag_list(tags: &[String]) -> String {
    tags.iter().map(|t| format!("`{t}`")).collect::<Vec<_>>().join(" ")
}

fn scrobbles(count: u64, lang: Language) -> String {
    format!(
        "**{}**",
        format_text(lang, "lastfm.plays", &[("count", &count.to_string())])
    )
}

/// Album card, or a notice when the user never played it
pub fn album_info_embed(album: &AlbumInfo, lang: Language) -> CreateEmbed {
    if album.user_playcount == 0 {
        return warning_embed(
            "Last.fm",
            &format_text(
                lang,
                "lastfm.no_album_plays",
                &[("album", &album.name), ("artist", &album.artist)],
            ),
        );
    }

    let mut embed = CreateEmbed::default();
    embed
        .title(&album.name)
        .description(format!("by **{}**", album.artist))
        .color(COLOR);
    if !album.url.is_empty() {
        embed.url(&album.url);
    }
    if let Some(cover) = &album.cover {
        embed.thumbnail(cover);
    }
    embed.field("Scrobbles", scrobbles(album.user_playcount, lang), true);
    if !album.tags.is_empty() {
        embed.field("Tags", tag_list(&album.tags), true);
    }
    if album.track_count > 0 {
        embed.field(
            "Tracks",
            format_text(lang, "lastfm.track_count", &[("count", &album.track_count.to_string())]),
            true,
        );
    }
    embed
}

/// Artist card, or a notice when the user never played them
pub fn artist_info_embed(artist: &ArtistInfo, lang: Language) -> CreateEmbed {
    if artist.user_playcount == 0 {
        return warning_embed(
            "Last.fm",
            &format_text(lang, "lastfm.no_artist_plays", &[("artist", &artist.name)]),
        );
    }

    let mut embed = CreateEmbed::default();
    embed.title(&artist.name).color(COLOR);
    if !artist.url.is_empty() {
        embed.url(&artist.url);
    }
    if let Some(image) = &artist.image {
        embed.thumbnail(image);
    }
    embed
        .field("Scrobbles", scrobbles(artist.user_playcount, lang), true)
        .field(
            "Listeners",
            format_text(lang, "lastfm.listeners", &[("count", &artist.listeners.to_string())]),
            true,
        )
        .field(
            "Global Scrobbles",
            format_text(lang, "lastfm.plays", &[("count", &artist.playcount.to_string())]),
            true,
        );
    if !artist.tags.is_empty() {
        embed.field("Tags", tag_list(&artist.tags), false);
    }
    if !artist.summary.is_empty() {
        embed.field("About", truncate(&artist.summary, BIO_LIMIT), false);
    }
    embed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::lastfm::client::{parse_recent_tracks, parse_top_artists};
    use serde_json::json;

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp("1700000000"), "14 Nov 2023, 22:13");
        assert_eq!(format_timestamp("soon"), "Unknown date");
    }

    #[test]
    fn test_now_playing_title() {
        let body = json!({"recenttracks": {"track": [{
            "name": "Idol",
            "artist": {"#text": "YOASOBI"},
            "@attr": {"nowplaying": "true"}
        }]}});
        let tracks = parse_recent_tracks(&body).unwrap();
        let embed = now_playing_embed(&tracks[0], "rj", Language::En);
        assert_eq!(
            embed.0.get("title").and_then(|v| v.as_str()),
            Some("🎧 Now Playing")
        );
        assert_eq!(
            embed.0.get("description").and_then(|v| v.as_str()),
            Some("**Idol** by **YOASOBI**")
        );
    }

    #[test]
    fn test_recent_embed_empty() {
        let embed = recent_embed(&[], "rj", Language::En);
        assert_eq!(
            embed.0.get("description").and_then(|v| v.as_str()),
            Some("No scrobbles yet.")
        );
    }

    #[test]
    fn test_top_artists_lines() {
        let body = json!({"topartists": {"artist": [
            {"name": "Aimer", "playcount": "42"},
            {"name": "LiSA", "playcount": "7"}
        ]}});
        let artists = parse_top_artists(&body).unwrap();
        let embed = top_artists_embed(&artists, "rj", Period::Week, Language::En);
        let description = embed.0.get("description").and_then(|v| v.as_str()).unwrap();
        assert!(description.starts_with("Last 7 Days"));
        assert!(description.contains("`2.` **LiSA** - 7 plays"));
    }

    fn album(plays: u64) -> AlbumInfo {
        AlbumInfo {
            name: "THE BOOK".to_string(),
            artist: "YOASOBI".to_string(),
            url: "https://www.last.fm/music/YOASOBI/THE+BOOK".to_string(),
            cover: None,
            user_playcount: plays,
            tags: vec!["j-pop".to_string(), "japanese".to_string()],
            track_count: 9,
        }
    }

    fn field<'a>(embed: &'a CreateEmbed, name: &str) -> Option<&'a str> {
        embed
            .0
            .get("fields")
            .and_then(|v| v.as_array())?
            .iter()
            .find(|f| f["name"] == name)
            .and_then(|f| f["value"].as_str())
    }

    #[test]
    fn test_album_info_embed() {
        let embed = album_info_embed(&album(37), Language::En);
        assert_eq!(embed.0.get("title").and_then(|v| v.as_str()), Some("THE BOOK"));
        assert_eq!(
            embed.0.get("description").and_then(|v| v.as_str()),
            Some("by **YOASOBI**")
        );
        assert_eq!(field(&embed, "Scrobbles"), Some("**37 plays**"));
        assert_eq!(field(&embed, "Tags"), Some("`j-pop` `japanese`"));
        assert_eq!(field(&embed, "Tracks"), Some("9 tracks"));
    }

    #[test]
    fn test_unplayed_album_is_a_notice() {
        let embed = album_info_embed(&album(0), Language::En);
        assert_eq!(
            embed.0.get("description").and_then(|v| v.as_str()),
            Some("You haven't listened to `THE BOOK` by `YOASOBI` at all!")
        );
        assert!(field(&embed, "Scrobbles").is_none());
    }

    #[test]
    fn test_artist_info_embed() {
        let artist = ArtistInfo {
            name: "Aimer".to_string(),
            url: String::new(),
            image: None,
            user_playcount: 512,
            listeners: 812345,
            playcount: 45000000,
            tags: Vec::new(),
            summary: "x".repeat(400),
        };
        let embed = artist_info_embed(&artist, Language::En);
        assert_eq!(field(&embed, "Listeners"), Some("812345 listeners"));
        assert_eq!(field(&embed, "Global Scrobbles"), Some("45000000 plays"));
        assert!(field(&embed, "Tags").is_none());
        let about = field(&embed, "About").unwrap();
        assert!(about.len() <= BIO_LIMIT);
        assert!(about.ends_with("..."));

        let unplayed = ArtistInfo { user_playcount: 0, ..artist };
        let embed = artist_info_embed(&unplayed, Language::Id);
        assert_eq!(
            embed.0.get("description").and_then(|v| v.as_str()),
            Some("Kamu belum mendengarkan `Aimer` sama sekali!")
        );
    }
}
