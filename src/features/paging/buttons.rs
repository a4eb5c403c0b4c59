//! # Paging Button Components
//!
//! Turns navigation control state into Discord button rows.

use serenity::builder::CreateComponents;
use serenity::model::application::component::ButtonStyle;

use super::controls::{NavAction, NavigationControls};
use super::view::{PageTemplate, RenderPayload};

/// Which optional buttons a feature shows next to prev/next
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ControlSet {
    pub jump: bool,
    pub layout_toggle: bool,
    pub search: bool,
    pub home: bool,
}

/// Custom id of the disabled page indicator, e.g. `cities_page`
pub fn indicator_id(scope: &str) -> String {
    format!("{scope}_page")
}

/// Build the navigation rows for a rendered page.
///
/// Row one: [first] prev [page x/y] next [last]. Row two, if any of them
/// are shown: layout, search, home.
pub fn create_navigation_buttons(
    scope: &str,
    payload: &RenderPayload,
    set: ControlSet,
    template: &PageTemplate,
) -> CreateComponents {
    let controls = payload.controls;
    let mut components = CreateComponents::default();

    components.create_action_row(|row| {
        if set.jump {
            row.create_button(|btn| nav_button(btn, scope, NavAction::First, "⏮️", &controls));
        }
        row.create_button(|btn| nav_button(btn, scope, NavAction::Previous, "◀️", &controls));
        row.create_button(|btn| {
            btn.custom_id(indicator_id(scope))
                .label(format!(
                    "{} {}/{}",
                    template.page_word, payload.page, payload.total_pages
                ))
                .style(ButtonStyle::Secondary)
                .disabled(true)
        });
        row.create_button(|btn| nav_button(btn, scope, NavAction::Next, "▶️", &controls));
        if set.jump {
            row.create_button(|btn| nav_button(btn, scope, NavAction::Last, "⏭️", &controls));
        }
        row
    });

    if set.layout_toggle || set.search || set.home {
        components.create_action_row(|row| {
            if set.layout_toggle {
                row.create_button(|btn| {
                    btn.custom_id(NavAction::ToggleLayout.custom_id(scope))
                        .label(format!("🔄 {}", template.layout_label))
                        .style(ButtonStyle::Secondary)
                        .disabled(!controls.permits(NavAction::ToggleLayout))
                });
            }
            if set.search {
                row.create_button(|btn| {
                    btn.custom_id(NavAction::Search.custom_id(scope))
                        .label(format!("🔍 {}", template.search_label))
                        .style(ButtonStyle::Success)
                        .disabled(!controls.search_enabled)
                });
            }
            if set.home {
                row.create_button(|btn| {
                    btn.custom_id(NavAction::Home.custom_id(scope))
                        .label(format!("🏠 {}", template.home_label))
                        .style(ButtonStyle::Danger)
                        .disabled(!controls.home_enabled)
                });
            }
            row
        });
    }

    components
}

fn nav_button<'a>(
    btn: &'a mut serenity::builder::CreateButton,
    scope: &str,
    action: NavAction,
    emoji_label: &str,
    controls: &NavigationControls,
) -> &'a mut serenity::builder::CreateButton {
    btn.custom_id(action.custom_id(scope))
        .label(emoji_label)
        .style(ButtonStyle::Primary)
        .disabled(!controls.permits(action))
}
