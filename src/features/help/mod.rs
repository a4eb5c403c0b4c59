//! # Feature: Help Menu
//!
//! Category overview with a select menu. Picking a category opens a paged
//! command list whose home button returns to the overview.
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.1.0: Paged category views on the shared paging core
//! - 1.0.0: Static category embeds

use serenity::builder::{CreateComponents, CreateEmbed};
use serenity::model::channel::ReactionType;
use std::time::{Duration, Instant};

use crate::core::embeds::{colors, page_embed};
use crate::features::i18n::{format_text, page_template, text, Language};
use crate::features::paging::{
    create_navigation_buttons, ControlSet, PagedListView, PagingError, Record, ViewSession,
};

pub const SCOPE: &str = "help";
pub const CATEGORY_SELECT_ID: &str = "help_category";
pub const PAGE_SIZE: usize = 5;
pub const VIEW_TIMEOUT: Duration = Duration::from_secs(120);

pub const CONTROLS: ControlSet = ControlSet {
    jump: false,
    layout_toggle: false,
    search: false,
    home: true,
};

pub struct HelpCategory {
    pub id: &'static str,
    pub emoji: &'static str,
    /// `(usage, description key)`
    pub commands: &'static [(&'static str, &'static str)],
}

impl HelpCategory {
    pub fn title(&self, lang: Language) -> String {
        text(lang, &format!("help.cat.{}", self.id))
    }
}

pub const CATEGORIES: &[HelpCategory] = &[
    HelpCategory {
        id: "anime",
        emoji: "🎌",
        commands: &[
            ("/anime <judul>", "help.cmd.anime"),
            ("/manga <judul>", "help.cmd.manga"),
            ("/character <nama>", "help.cmd.character"),
            ("/topanime [subtype]", "help.cmd.topanime"),
            ("/topmanga [subtype]", "help.cmd.topmanga"),
            ("/season [season] [year]", "help.cmd.season"),
            ("/randomanime", "help.cmd.randomanime"),
        ],
    },
    HelpCategory {
        id: "image",
        emoji: "🖼️",
        commands: &[
            ("/waifu [category]", "help.cmd.waifu"),
            ("/randomwaifu", "help.cmd.randomwaifu"),
            ("/categories", "help.cmd.categories"),
        ],
    },
    HelpCategory {
        id: "music",
        emoji: "🎵",
        commands: &[
            ("/lastfm set <username>", "help.cmd.lastfm_set"),
            ("/lastfm np", "help.cmd.lastfm_np"),
            ("/lastfm recent [username]", "help.cmd.lastfm_recent"),
            ("/lastfm topartists [period]", "help.cmd.lastfm_topartists"),
            ("/lastfm topalbums [period]", "help.cmd.lastfm_topalbums"),
            ("/lastfm album <album> [artist]", "help.cmd.lastfm_album"),
            ("/lastfm artist <name>", "help.cmd.lastfm_artist"),
        ],
    },
    HelpCategory {
        id: "indonesia",
        emoji: "🇮🇩",
        commands: &[
            ("/sekolah", "help.cmd.sekolah"),
            ("/imsakiyah", "help.cmd.imsakiyah"),
        ],
    },
    HelpCategory {
        id: "utility",
        emoji: "🔧",
        commands: &[
            ("/ping", "help.cmd.ping"),
            ("/help", "help.cmd.help"),
            ("/info", "help.cmd.info"),
            ("/stats", "help.cmd.stats"),
        ],
    },
    HelpCategory {
        id: "settings",
        emoji: "⚙️",
        commands: &[
            ("/prefix [prefix]", "help.cmd.prefix"),
            ("/language [code]", "help.cmd.language"),
        ],
    },
];

pub fn find_category(id: &str) -> Option<&'static HelpCategory> {
    CATEGORIES.iter().find(|c| c.id == id)
}

/// One command line in a category view
#[derive(Debug, Clone)]
pub struct HelpEntry {
    pub usage: String,
    pub description: String,
}

impl Record for HelpEntry {
    fn name(&self) -> &str {
        &self.usage
    }

    fn detail(&self) -> Option<String> {
        Some(self.description.clone())
    }
}

pub fn entries(category: &HelpCategory, lang: Language) -> Vec<HelpEntry> {
    category
        .commands
        .iter()
        .map(|(usage, key)| HelpEntry {
            usage: usage.to_string(),
            description: text(lang, key),
        })
        .collect()
}

/// Redraw data kept with a help session
#[derive(Debug, Clone)]
pub struct HelpViewContext {
    pub lang: Language,
    pub prefix: String,
}

pub type HelpSession = ViewSession<HelpEntry, HelpViewContext>;

pub fn new_session(
    category: &HelpCategory,
    context: HelpViewContext,
    channel_id: u64,
    now: Instant,
) -> Result<HelpSession, PagingError> {
    let lang = context.lang;
    let label = format!("{} {}", category.emoji, category.title(lang));
    let view = PagedListView::new(entries(category, lang), PAGE_SIZE, label)?;
    let noun = text(lang, "help.commands");
    let mut template = page_template(lang, &noun, &text(lang, "help.column"));
    template.footer_note = Some(format_text(
        lang,
        "help.prefix_note",
        &[("prefix", &context.prefix)],
    ));
    Ok(ViewSession::new(view, template, VIEW_TIMEOUT, channel_id, context, now))
}

pub fn render_session(session: &HelpSession) -> (CreateEmbed, CreateComponents) {
    let payload = session.render();
    let embed = page_embed(&payload, colors::INFO, None);
    let components = create_navigation_buttons(SCOPE, &payload, CONTROLS, &session.template);
    (embed, components)
}

/// Overview embed plus the category select
pub fn overview(bot_name: &str, lang: Language, prefix: &str) -> (CreateEmbed, CreateComponents) {
    let mut embed = CreateEmbed::default();
    embed
        .title(format_text(lang, "help.title", &[("name", bot_name)]))
        .description(text(lang, "help.description"))
        .color(colors::INFO);
    for category in CATEGORIES {
        embed.field(
            format!("{} {}", category.emoji, category.title(lang)),
            format!("{} {}", category.commands.len(), text(lang, "help.commands")),
            true,
        );
    }
    let note = format_text(lang, "help.prefix_note", &[("prefix", prefix)]);
    embed.footer(|f| f.text(note));

    let mut components = CreateComponents::default();
    components.create_action_row(|row| {
        row.create_select_menu(|menu| {
            menu.custom_id(CATEGORY_SELECT_ID)
                .placeholder(text(lang, "help.placeholder"))
                .options(|opts| {
                    for category in CATEGORIES {
                        opts.create_option(|o| {
                            o.label(category.title(lang))
                                .value(category.id)
                                .emoji(ReactionType::Unicode(category.emoji.to_string()))
                        });
                    }
                    opts
                })
        })
    });
    (embed, components)
}

/// Plain-text help for prefixed messages
pub fn text_summary(lang: Language, prefix: &str) -> String {
    let mut lines = vec![text(lang, "help.description")];
    for category in CATEGORIES {
        let usages: Vec<&str> = category.commands.iter().map(|(usage, _)| *usage).collect();
        lines.push(format!(
            "{} **{}**: {}",
            category.emoji,
            category.title(lang),
            usages.join(", ")
        ));
    }
    lines.push(format_text(lang, "help.prefix_note", &[("prefix", prefix)]));
    lines.join("\n")
}
