//! Embeds and components for the school directory

use rand::seq::IndexedRandom;
use serenity::builder::{CreateComponents, CreateEmbed};
use serenity::model::channel::ReactionType;
use std::time::{Duration, Instant};

use super::types::{School, SchoolType};
use crate::core::embeds::{colors, page_embed};
use crate::features::i18n::{format_text, page_template, text, Language};
use crate::features::paging::{
    create_navigation_buttons, sort_by_name, ControlSet, PagedListView, PagingError, ViewSession,
};

/// Button scope for school views, e.g. `schools_next`
pub const SCOPE: &str = "schools";
pub const TYPE_SELECT_ID: &str = "school_type";
pub const PAGE_SIZE: usize = 5;
pub const VIEW_TIMEOUT: Duration = Duration::from_secs(60);

pub const CONTROLS: ControlSet = ControlSet {
    jump: true,
    layout_toggle: false,
    search: false,
    home: false,
};

const TIP_KEYS: &[&str] = &["sekolah.tip_navigate", "sekolah.tip_npsn", "sekolah.tip_detail"];

/// Redraw data kept with a school session
#[derive(Debug, Clone)]
pub struct SchoolViewContext {
    pub color: u32,
    pub intro: String,
}

pub type SchoolSession = ViewSession<School, SchoolViewContext>;

pub fn random_tip(lang: Language) -> String {
    let key = TIP_KEYS.choose(&mut rand::rng()).copied().unwrap_or(TIP_KEYS[0]);
    text(lang, key)
}

/// Start a paged session over `schools`; the footer tip is picked once here
pub fn new_session(
    schools: Vec<School>,
    label: String,
    context: SchoolViewContext,
    lang: Language,
    channel_id: u64,
    now: Instant,
) -> Result<SchoolSession, PagingError> {
    let view = PagedListView::new(schools, PAGE_SIZE, label)?;
    let mut template = page_template(
        lang,
        &text(lang, "sekolah.noun"),
        &text(lang, "sekolah.column"),
    );
    template.footer_note = Some(random_tip(lang));
    Ok(ViewSession::new(view, template, VIEW_TIMEOUT, channel_id, context, now))
}

/// Session over name-search results, listed alphabetically
pub fn new_search_session(
    mut schools: Vec<School>,
    query: &str,
    lang: Language,
    channel_id: u64,
    now: Instant,
) -> Result<SchoolSession, PagingError> {
    sort_by_name(&mut schools);
    new_session(
        schools,
        format!("🔍 {query}"),
        search_context(query, lang),
        lang,
        channel_id,
        now,
    )
}

/// Embed and buttons for the session's current state
pub fn render_session(session: &SchoolSession) -> (CreateEmbed, CreateComponents) {
    let payload = session.render();
    let embed = page_embed(&payload, session.context.color, Some(&session.context.intro));
    let components = create_navigation_buttons(SCOPE, &payload, CONTROLS, &session.template);
    (embed, components)
}

pub fn type_label(school_type: SchoolType) -> String {
    format!("{} {}", school_type.emoji(), school_type.name())
}

pub fn type_context(school_type: SchoolType) -> SchoolViewContext {
    SchoolViewContext {
        color: school_type.color(),
        intro: format!("*{}*", school_type.description()),
    }
}

pub fn search_context(query: &str, lang: Language) -> SchoolViewContext {
    SchoolViewContext {
        color: colors::PRIMARY,
        intro: format_text(lang, "sekolah.search_intro", &[("query", query)]),
    }
}

pub fn root_embed(lang: Language) -> CreateEmbed {
    let mut embed = CreateEmbed::default();
    embed
        .title(text(lang, "sekolah.root_title"))
        .description(text(lang, "sekolah.root_body"))
        .color(colors::PRIMARY);
    for school_type in SchoolType::ALL {
        embed.field(type_label(school_type), school_type.description(), false);
    }
    embed.footer(|f| f.text(random_tip(lang)));
    embed
}

pub fn type_select(lang: Language) -> CreateComponents {
    let mut components = CreateComponents::default();
    components.create_action_row(|row| {
        row.create_select_menu(|menu| {
            menu.custom_id(TYPE_SELECT_ID)
                .placeholder(text(lang, "sekolah.select_placeholder"))
                .options(|opts| {
                    for school_type in SchoolType::ALL {
                        opts.create_option(|o| {
                            o.label(school_type.name())
                                .value(school_type.code().to_lowercase())
                                .description(school_type.description())
                                .emoji(ReactionType::Unicode(school_type.emoji().to_string()))
                        });
                    }
                    opts
                })
        })
    });
    components
}

pub fn detail_embed(school: &School, lang: Language) -> CreateEmbed {
    let basics = format_text(
        lang,
        "sekolah.detail_basics",
        &[
            ("status", school.status_label()),
            ("kind", dash(&school.bentuk)),
            ("npsn", dash(&school.npsn)),
        ],
    );
    let location = format_text(
        lang,
        "sekolah.detail_location",
        &[
            ("address", dash(&school.address)),
            ("district", dash(&school.district)),
            ("city", dash(&school.city)),
            ("province", dash(&school.province)),
        ],
    );

    let mut embed = CreateEmbed::default();
    embed
        .title(format_text(lang, "sekolah.detail_title", &[("icon", school.status_icon())]))
        .color(if school.is_public() {
            colors::SUCCESS
        } else {
            colors::INFO
        })
        .field(text(lang, "sekolah.detail_name"), &school.name, false)
        .field(text(lang, "sekolah.detail_basics_title"), format!("```yaml\n{basics}\n```"), false)
        .field(text(lang, "sekolah.detail_location_title"), format!("```yaml\n{location}\n```"), false)
        .footer(|f| f.text(random_tip(lang)));
    embed
}

/// Shown when `/sekolah nama` finds nothing
pub fn no_results_message(query: &str, lang: Language) -> String {
    format_text(lang, "sekolah.not_found_name", &[("query", query)])
}

/// Shown when `/sekolah npsn` finds nothing
pub fn unknown_npsn_message(npsn: &str, lang: Language) -> String {
    format_text(lang, "sekolah.not_found_npsn", &[("npsn", npsn)])
}

fn dash(value: &str) -> &str {
    if value.is_empty() {
        "-"
    } else {
        value
    }
}
