//! Embed builders for Discord responses
//!
//! Shared colours and embed construction used by every command.
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.1.0: Add page embed for paged list views
//! - 1.0.0: Initial status embeds

use serenity::builder::CreateEmbed;

use crate::core::response::{truncate_for_embed, truncate_for_field, truncate_for_title};
use crate::features::paging::{PageBody, RenderPayload};

pub mod colors {
    pub const PRIMARY: u32 = 0x3498db;
    pub const SUCCESS: u32 = 0x2ecc71;
    pub const WARNING: u32 = 0xf1c40f;
    pub const ERROR: u32 = 0xe74c3c;
    pub const INFO: u32 = 0x9b59b6;
    pub const NEUTRAL: u32 = 0x95a5a6;
    pub const PINK: u32 = 0xff69b4;
}

fn status_embed(title: &str, description: &str, color: u32) -> CreateEmbed {
    let mut embed = CreateEmbed::default();
    embed.title(truncate_for_title(title));
    embed.description(truncate_for_embed(description));
    embed.color(color);
    embed
}

pub fn error_embed(title: &str, description: &str) -> CreateEmbed {
    status_embed(&format!("❌ {title}"), description, colors::ERROR)
}

pub fn warning_embed(title: &str, description: &str) -> CreateEmbed {
    status_embed(&format!("⚠️ {title}"), description, colors::WARNING)
}

pub fn success_embed(title: &str, description: &str) -> CreateEmbed {
    status_embed(&format!("✅ {title}"), description, colors::SUCCESS)
}

/// Build the embed for one rendered page.
///
/// A list body follows `intro` in the description; a two-column body is
/// laid out as two inline fields.
pub fn page_embed(payload: &RenderPayload, color: u32, intro: Option<&str>) -> CreateEmbed {
    let mut embed = CreateEmbed::default();
    embed.title(truncate_for_title(&payload.title));
    embed.color(color);

    match &payload.body {
        PageBody::List(text) => {
            let description = match intro {
                Some(intro) => format!("{intro}\n\n{text}"),
                None => text.clone(),
            };
            embed.description(truncate_for_embed(&description));
        }
        PageBody::Columns { left, right } => {
            if let Some(intro) = intro {
                embed.description(truncate_for_embed(intro));
            }
            embed.field(format!("📍 {}", left.heading), truncate_for_field(&left.text), true);
            embed.field(format!("📍 {}", right.heading), truncate_for_field(&right.text), true);
        }
    }

    embed.footer(|f| f.text(&payload.footer));
    embed
}
