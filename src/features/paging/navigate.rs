//! # Interaction Contract
//!
//! Entry points the interaction layer calls for each click or modal
//! submission on a paged message. In-place moves return the new render;
//! search and home hand back what the caller needs to replace the view.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.1.0
//!
//! ## Changelog
//! - 1.0.0: Initial implementation

use std::time::Instant;

use super::controls::NavAction;
use super::search::{SearchFilter, SearchOutcome};
use super::session::{ViewRegistry, ViewSession};
use super::view::{PagedListView, PagingError, Record, RenderPayload};

pub fn on_previous_clicked<R: Record, C>(
    registry: &ViewRegistry<R, C>,
    message_id: u64,
    now: Instant,
) -> Option<RenderPayload> {
    registry.on_click(message_id, NavAction::Previous, now)
}

pub fn on_next_clicked<R: Record, C>(
    registry: &ViewRegistry<R, C>,
    message_id: u64,
    now: Instant,
) -> Option<RenderPayload> {
    registry.on_click(message_id, NavAction::Next, now)
}

pub fn on_first_clicked<R: Record, C>(
    registry: &ViewRegistry<R, C>,
    message_id: u64,
    now: Instant,
) -> Option<RenderPayload> {
    registry.on_click(message_id, NavAction::First, now)
}

pub fn on_last_clicked<R: Record, C>(
    registry: &ViewRegistry<R, C>,
    message_id: u64,
    now: Instant,
) -> Option<RenderPayload> {
    registry.on_click(message_id, NavAction::Last, now)
}

pub fn on_layout_toggled<R: Record, C>(
    registry: &ViewRegistry<R, C>,
    message_id: u64,
    now: Instant,
) -> Option<RenderPayload> {
    registry.on_click(message_id, NavAction::ToggleLayout, now)
}

/// Dispatch any in-place action. Search and home always yield `None` here.
pub fn on_clicked<R: Record, C>(
    registry: &ViewRegistry<R, C>,
    message_id: u64,
    action: NavAction,
    now: Instant,
) -> Option<RenderPayload> {
    match action {
        NavAction::First => on_first_clicked(registry, message_id, now),
        NavAction::Previous => on_previous_clicked(registry, message_id, now),
        NavAction::Next => on_next_clicked(registry, message_id, now),
        NavAction::Last => on_last_clicked(registry, message_id, now),
        NavAction::ToggleLayout => on_layout_toggled(registry, message_id, now),
        NavAction::Search | NavAction::Home => None,
    }
}

/// Build the replacement view for a submitted search over `items`.
///
/// The old view is left untouched; on a match the caller registers a new
/// session for the same message.
pub fn on_search_submitted<R: Record + Clone>(
    items: &[R],
    query: &str,
    page_size: usize,
    label: impl Into<String>,
) -> Result<SearchOutcome<PagedListView<R>>, PagingError> {
    SearchFilter::view(items, query, page_size, label)
}

/// Discard the session so the feature can render a fresh root view.
///
/// Returns the discarded session, or `None` if the message has no live
/// session or the click was not accepted.
pub fn on_home_clicked<R: Record, C>(
    registry: &ViewRegistry<R, C>,
    message_id: u64,
    now: Instant,
) -> Option<ViewSession<R, C>> {
    registry.accept(message_id, NavAction::Home, now, |_| ())?;
    registry.remove(message_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::paging::view::tests::{named, Named};
    use crate::features::paging::PageTemplate;
    use std::time::Duration;

    fn registry_with_view(count: usize, now: Instant) -> ViewRegistry<Named, ()> {
        let registry = ViewRegistry::new();
        let view = PagedListView::new(named(count), 5, "Sekolah").unwrap();
        registry.insert(
            1,
            ViewSession::new(view, PageTemplate::default(), Duration::from_secs(60), 9, (), now),
        );
        registry
    }

    #[test]
    fn test_next_and_previous_move_in_place() {
        let now = Instant::now();
        let registry = registry_with_view(12, now);

        assert!(on_previous_clicked(&registry, 1, now).is_none());
        assert_eq!(on_next_clicked(&registry, 1, now).unwrap().page, 2);
        assert_eq!(on_last_clicked(&registry, 1, now).unwrap().page, 3);
        assert!(on_next_clicked(&registry, 1, now).is_none());
        assert_eq!(on_first_clicked(&registry, 1, now).unwrap().page, 1);
    }

    #[test]
    fn test_clicks_on_unknown_message_are_ignored() {
        let now = Instant::now();
        let registry = registry_with_view(12, now);
        assert!(on_next_clicked(&registry, 2, now).is_none());
        assert!(on_home_clicked(&registry, 2, now).is_none());
    }

    #[test]
    fn test_on_clicked_never_handles_replacing_actions() {
        let now = Instant::now();
        let registry = registry_with_view(12, now);
        assert!(on_clicked(&registry, 1, NavAction::Search, now).is_none());
        assert!(on_clicked(&registry, 1, NavAction::Home, now).is_none());
        assert!(on_clicked(&registry, 1, NavAction::Next, now).is_some());
    }

    #[test]
    fn test_home_discards_session() {
        let now = Instant::now();
        let registry = registry_with_view(12, now);
        on_next_clicked(&registry, 1, now);

        let discarded = on_home_clicked(&registry, 1, now).unwrap();
        assert_eq!(discarded.view.current_page(), 1);
        assert!(!registry.contains(1));
    }

    #[test]
    fn test_home_on_expired_view_is_ignored() {
        let now = Instant::now();
        let registry = registry_with_view(12, now);
        let later = now + Duration::from_secs(61);
        assert!(on_home_clicked(&registry, 1, later).is_none());
    }

    #[test]
    fn test_search_builds_new_view() {
        let items = vec![
            Named("Jakarta Pusat".to_string()),
            Named("Bandung".to_string()),
            Named("Jakarta Barat".to_string()),
        ];
        match on_search_submitted(&items, "jakarta", 10, "Hasil").unwrap() {
            SearchOutcome::Found(view) => {
                assert_eq!(view.len(), 2);
                assert_eq!(view.current_page_items()[0].0, "Jakarta Barat");
            }
            SearchOutcome::NoMatch { .. } => panic!("expected matches"),
        }
        assert!(on_search_submitted(&items, "xyzzy", 10, "Hasil")
            .unwrap()
            .is_no_match());
    }
}
