//! Embeds, components and sessions for the imsakiyah views

use chrono::NaiveDate;
use serenity::builder::{CreateComponents, CreateEmbed, CreateInteractionResponseData};
use serenity::model::application::component::InputTextStyle;
use serenity::model::channel::ReactionType;
use std::time::{Duration, Instant};

use super::cities::City;
use super::regions::Region;
use super::schedule::{day_name, format_date, DaySchedule};
use crate::core::embeds::{colors, page_embed};
use crate::features::i18n::{format_text, page_template, text, Language};
use crate::features::paging::{
    create_navigation_buttons, ControlSet, PageLayout, PagedListView, PagingError, ViewSession,
};

/// Button scope for city views, e.g. `cities_next`
pub const SCOPE: &str = "cities";
pub const REGION_SELECT_ID: &str = "imsakiyah_region";
pub const SEARCH_MODAL_ID: &str = "cities_search_modal";
pub const SEARCH_INPUT_ID: &str = "city_query";
pub const PAGE_SIZE: usize = 10;
pub const VIEW_TIMEOUT: Duration = Duration::from_secs(180);

pub const CONTROLS: ControlSet = ControlSet {
    jump: false,
    layout_toggle: true,
    search: true,
    home: true,
};

const SAMPLE_CITIES: usize = 5;

/// Redraw data kept with a city session
#[derive(Debug, Clone)]
pub struct CityViewContext {
    /// Region being browsed; `None` for results over every city
    pub region: Option<Region>,
    pub lang: Language,
}

pub type CitySession = ViewSession<City, CityViewContext>;

fn city_session(
    view: PagedListView<City>,
    context: CityViewContext,
    channel_id: u64,
    now: Instant,
) -> CitySession {
    let lang = context.lang;
    let template = page_template(
        lang,
        &text(lang, "imsakiyah.noun"),
        &text(lang, "imsakiyah.column"),
    );
    ViewSession::new(view, template, VIEW_TIMEOUT, channel_id, context, now)
}

pub fn region_label(region: Region, lang: Language) -> String {
    format_text(
        lang,
        "imsakiyah.region_label",
        &[("emoji", region.emoji()), ("region", region.name())],
    )
}

pub fn results_label(term: &str, lang: Language) -> String {
    format_text(lang, "imsakiyah.results_label", &[("term", term)])
}

/// Browse every city of `region`; `cities` must already be sorted
pub fn new_region_session(
    region: Region,
    cities: Vec<City>,
    lang: Language,
    channel_id: u64,
    now: Instant,
) -> Result<CitySession, PagingError> {
    let view = PagedListView::new(cities, PAGE_SIZE, region_label(region, lang))?;
    let context = CityViewContext {
        region: Some(region),
        lang,
    };
    Ok(city_session(view, context, channel_id, now))
}

/// Wrap a search result view, keeping the scope later searches run in
pub fn new_results_session(
    view: PagedListView<City>,
    region: Option<Region>,
    lang: Language,
    channel_id: u64,
    now: Instant,
) -> CitySession {
    city_session(view, CityViewContext { region, lang }, channel_id, now)
}

pub fn render_session(session: &CitySession) -> (CreateEmbed, CreateComponents) {
    let payload = session.render();
    let intro = text(session.context.lang, "imsakiyah.view_intro");
    let embed = page_embed(&payload, colors::PRIMARY, Some(&intro));

    let mut template = session.template.clone();
    template.layout_label = match session.layout {
        PageLayout::List => text(session.context.lang, "paging.layout_columns"),
        PageLayout::TwoColumn => text(session.context.lang, "paging.layout_list"),
    };
    let components = create_navigation_buttons(SCOPE, &payload, CONTROLS, &template);
    (embed, components)
}

/// Root menu: per-region city samples and the region select
pub fn main_menu(groups: &[(Region, Vec<City>)], lang: Language) -> (CreateEmbed, CreateComponents) {
    let total: usize = groups.iter().map(|(_, cities)| cities.len()).sum();

    let mut embed = CreateEmbed::default();
    embed
        .title(text(lang, "imsakiyah.menu_title"))
        .description(format_text(
            lang,
            "imsakiyah.menu_body",
            &[("total", &total.to_string())],
        ))
        .color(colors::SUCCESS);

    for (region, cities) in groups.iter().filter(|(_, cities)| !cities.is_empty()) {
        let more = cities.len().saturating_sub(SAMPLE_CITIES);
        let more_text = format_text(lang, "imsakiyah.menu_more", &[("count", &more.to_string())]);
        let mut sample: Vec<&str> = cities
            .iter()
            .take(SAMPLE_CITIES)
            .map(|c| c.name.as_str())
            .collect();
        if more > 0 {
            sample.push(&more_text);
        }
        embed.field(
            format!("{} {}", region.emoji(), region.name()),
            sample.join(", "),
            false,
        );
    }
    embed.footer(|f| f.text(text(lang, "imsakiyah.timezone_note")));

    let mut components = CreateComponents::default();
    components.create_action_row(|row| {
        row.create_select_menu(|menu| {
            menu.custom_id(REGION_SELECT_ID)
                .placeholder(text(lang, "imsakiyah.select_placeholder"))
                .options(|opts| {
                    for (region, cities) in groups.iter().filter(|(_, c)| !c.is_empty()) {
                        opts.create_option(|o| {
                            o.label(region.name())
                                .value(region.id())
                                .description(format_text(
                                    lang,
                                    "imsakiyah.city_count",
                                    &[("count", &cities.len().to_string())],
                                ))
                                .emoji(ReactionType::Unicode(region.emoji().to_string()))
                        });
                    }
                    opts
                })
        })
    });

    (embed, components)
}

/// Fill a modal response asking for a city name
pub fn search_modal<'a, 'b>(
    data: &'b mut CreateInteractionResponseData<'a>,
    lang: Language,
) -> &'b mut CreateInteractionResponseData<'a> {
    data.custom_id(SEARCH_MODAL_ID)
        .title(text(lang, "imsakiyah.modal_title"))
        .components(|c| {
            c.create_action_row(|row| {
                row.create_input_text(|input| {
                    input
                        .custom_id(SEARCH_INPUT_ID)
                        .label(text(lang, "imsakiyah.modal_label"))
                        .style(InputTextStyle::Short)
                        .placeholder(text(lang, "imsakiyah.modal_placeholder"))
                        .required(true)
                        .min_length(1)
                        .max_length(100)
                })
            })
        })
}

pub fn no_match_message(query: &str, region: Option<Region>, lang: Language) -> String {
    match region {
        Some(region) => format_text(
            lang,
            "imsakiyah.no_match_region",
            &[("query", query), ("region", region.name())],
        ),
        None => format_text(lang, "imsakiyah.no_match", &[("query", query)]),
    }
}

pub fn not_available_message(city: &City, lang: Language) -> String {
    format_text(lang, "imsakiyah.not_available", &[("city", &city.name)])
}

/// `Senin, 11 Maret 2024` or `Monday, 11 March 2024`
fn full_date(date: NaiveDate, lang: Language) -> String {
    match lang {
        Language::Id => format!("{}, {}", day_name(date), format_date(date)),
        Language::En => date.format("%A, %-d %B %Y").to_string(),
    }
}

pub fn schedule_embed(
    city: &City,
    date: NaiveDate,
    day: &DaySchedule,
    is_fallback: bool,
    lang: Language,
) -> CreateEmbed {
    let mut embed = CreateEmbed::default();
    let mut description = format_text(
        lang,
        "imsakiyah.schedule_for",
        &[("date", &full_date(date, lang))],
    );
    if let Some(hijri) = &day.hijri {
        description.push_str(&format!("\n🗓️ {hijri}"));
    }
    if is_fallback {
        description.push_str(&format!("\n\n{}", text(lang, "imsakiyah.fallback_note")));
    }

    embed
        .title(format_text(lang, "imsakiyah.schedule_title", &[("city", &city.name)]))
        .description(description)
        .color(colors::SUCCESS);
    for (label, time) in day.times() {
        embed.field(label, format!("`{time}`"), true);
    }
    embed.footer(|f| f.text(text(lang, "imsakiyah.timezone_note")));
    embed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::paging::{NavAction, PageBody};
    use crate::features::prayer::regions::group_by_region;
    use crate::features::prayer::schedule::fallback_schedule;

    fn cities(count: usize) -> Vec<City> {
        (1..=count)
            .map(|i| City {
                id: format!("kota-{i}"),
                name: format!("Kota {i:02}"),
            })
            .collect()
    }

    #[test]
    fn test_region_session_title_and_pages() {
        let session =
            new_region_session(Region::Jawa, cities(25), Language::Id, 1, Instant::now()).unwrap();
        let payload = session.render();
        assert_eq!(payload.title, "🏙️ Kota di Jawa (25 kota)");
        assert_eq!(payload.total_pages, 3);
        assert_eq!(payload.footer, "Halaman 1 dari 3");
    }

    #[test]
    fn test_two_column_split_of_seven() {
        let now = Instant::now();
        let mut session =
            new_region_session(Region::Sulawesi, cities(7), Language::Id, 1, now).unwrap();
        let payload = session.on_click(NavAction::ToggleLayout, now).unwrap();
        match payload.body {
            PageBody::Columns { left, right } => {
                assert_eq!(left.heading, "Kota (1-4)");
                assert_eq!(right.heading, "Kota (5-7)");
            }
            PageBody::List(_) => panic!("expected two columns"),
        }
    }

    #[test]
    fn test_layout_button_label_follows_layout() {
        let now = Instant::now();
        let mut session =
            new_region_session(Region::Jawa, cities(3), Language::Id, 1, now).unwrap();
        let label = |s: &CitySession| {
            let (_, components) = render_session(s);
            components.0[1]["components"][0]["label"]
                .as_str()
                .unwrap_or_default()
                .to_string()
        };
        assert_eq!(label(&session), "🔄 Tampilan Dua Kolom");
        session.on_click(NavAction::ToggleLayout, now);
        assert_eq!(label(&session), "🔄 Tampilan Daftar");
    }

    #[test]
    fn test_main_menu_skips_empty_regions() {
        let list: Vec<City> = ["jakarta", "bandung", "medan"]
            .iter()
            .map(|s| City::from_slug(s))
            .collect();
        let (embed, components) = main_menu(&group_by_region(&list), Language::Id);
        let fields = embed.0.get("fields").and_then(|v| v.as_array()).unwrap();
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0]["value"].as_str(), Some("Bandung, Jakarta"));
        let options = components.0[0]["components"][0]["options"].as_array().unwrap();
        assert_eq!(options.len(), 2);
        assert_eq!(options[1]["value"].as_str(), Some("sumatera"));
    }

    #[test]
    fn test_main_menu_counts_remaining_cities() {
        let groups = vec![(Region::Jawa, cities(8))];
        let (embed, _) = main_menu(&groups, Language::Id);
        let fields = embed.0.get("fields").and_then(|v| v.as_array()).unwrap();
        assert!(fields[0]["value"].as_str().unwrap().ends_with("dan 3 kota lainnya"));
    }

    #[test]
    fn test_no_match_message() {
        assert_eq!(
            no_match_message("xyzzy", Some(Region::Jawa), Language::Id),
            "❌ Tidak ada kota yang cocok dengan 'xyzzy' di wilayah Jawa."
        );
    }

    #[test]
    fn test_schedule_embed_fields() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 11).unwrap();
        let days = fallback_schedule(2024, 3);
        let embed = schedule_embed(&City::from_slug("bandung"), date, &days[10], true, Language::Id);
        assert_eq!(
            embed.0.get("title").and_then(|v| v.as_str()),
            Some("📆 Jadwal Imsakiyah Bandung")
        );
        let fields = embed.0.get("fields").and_then(|v| v.as_array()).unwrap();
        assert_eq!(fields.len(), 8);
        let description = embed.0.get("description").and_then(|v| v.as_str()).unwrap();
        assert!(description.starts_with("Jadwal untuk Senin, 11 Maret 2024"));
    }

    #[test]
    fn test_english_views() {
        let session =
            new_region_session(Region::Jawa, cities(25), Language::En, 1, Instant::now()).unwrap();
        assert_eq!(session.render().title, "🏙️ Cities in Jawa (25 cities)");
        assert_eq!(
            no_match_message("xyzzy", None, Language::En),
            "❌ No city matches 'xyzzy'."
        );
        assert_eq!(results_label("band", Language::En), "🔍 Search Results: 'band'");

        let date = NaiveDate::from_ymd_opt(2024, 3, 11).unwrap();
        let days = fallback_schedule(2024, 3);
        let embed = schedule_embed(&City::from_slug("bandung"), date, &days[10], false, Language::En);
        let description = embed.0.get("description").and_then(|v| v.as_str()).unwrap();
        assert!(description.starts_with("Schedule for Monday, 11 March 2024"));
    }
}
