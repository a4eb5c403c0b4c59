//! # Paged List View
//!
//! Holds an ordered record list and a page cursor, and renders the current
//! window of records into a platform-neutral payload.
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.1.0: Add two-column layout and localized page templates
//! - 1.0.0: Initial implementation replacing per-feature page math

use thiserror::Error;

use super::controls::NavigationControls;

/// Anything that can be listed in a paged view.
///
/// Only the display name is inspected by the paging logic; `detail` is
/// passed through verbatim under the numbered entry.
pub trait Record {
    fn name(&self) -> &str;

    fn detail(&self) -> Option<String> {
        None
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PagingError {
    #[error("invalid configuration: page size must be positive (got {page_size})")]
    InvalidConfiguration { page_size: usize },
}

/// Body presentation for a rendered page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageLayout {
    #[default]
    List,
    TwoColumn,
}

impl PageLayout {
    pub fn toggled(self) -> Self {
        match self {
            PageLayout::List => PageLayout::TwoColumn,
            PageLayout::TwoColumn => PageLayout::List,
        }
    }
}

/// Localized words used while rendering a page and its controls
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageTemplate {
    /// Plural noun shown after the item count in the title ("kota", "sekolah")
    pub item_noun: String,
    /// Heading used for each column in the two-column layout
    pub column_heading: String,
    pub page_word: String,
    pub of_word: String,
    /// Shown in place of an empty page or an empty column
    pub empty_placeholder: String,
    /// Appended to the footer after the page counter
    pub footer_note: Option<String>,
    pub search_label: String,
    pub home_label: String,
    pub layout_label: String,
}

impl Default for PageTemplate {
    fn default() -> Self {
        Self {
            item_noun: "items".to_string(),
            column_heading: "Items".to_string(),
            page_word: "Page".to_string(),
            of_word: "of".to_string(),
            empty_placeholder: "*No items*".to_string(),
            footer_note: None,
            search_label: "Search".to_string(),
            home_label: "Back".to_string(),
            layout_label: "Layout".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub heading: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageBody {
    List(String),
    Columns { left: Column, right: Column },
}

impl PageBody {
    /// Flatten the body into a single block of text
    pub fn text(&self) -> String {
        match self {
            PageBody::List(text) => text.clone(),
            PageBody::Columns { left, right } => format!(
                "**{}**\n{}\n\n**{}**\n{}",
                left.heading, left.text, right.heading, right.text
            ),
        }
    }
}

/// Everything the interaction layer needs to display one page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderPayload {
    pub title: String,
    pub body: PageBody,
    pub footer: String,
    /// 1-based page number
    pub page: usize,
    pub total_pages: usize,
    pub controls: NavigationControls,
}

/// An ordered, immutable record list with a clamped page cursor
#[derive(Debug, Clone)]
pub struct PagedListView<R> {
    items: Vec<R>,
    page_size: usize,
    current_page: usize,
    label: String,
}

impl<R: Record> PagedListView<R> {
    pub fn new(items: Vec<R>, page_size: usize, label: impl Into<String>) -> Result<Self, PagingError> {
        Self::with_start_page(items, page_size, label, 0)
    }

    /// Build a view positioned at `start_page`, clamped into range
    pub fn with_start_page(
        items: Vec<R>,
        page_size: usize,
        label: impl Into<String>,
        start_page: usize,
    ) -> Result<Self, PagingError> {
        if page_size == 0 {
            return Err(PagingError::InvalidConfiguration { page_size });
        }

        let mut view = Self {
            items,
            page_size,
            current_page: 0,
            label: label.into(),
        };
        view.go_to_page(start_page);
        Ok(view)
    }

    /// Number of pages, never less than one
    pub fn total_pages(&self) -> usize {
        self.items.len().div_ceil(self.page_size).max(1)
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn items(&self) -> &[R] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The window of records shown on the current page
    pub fn current_page_items(&self) -> &[R] {
        let start = self.current_page * self.page_size;
        if start >= self.items.len() {
            return &[];
        }
        let end = (start + self.page_size).min(self.items.len());
        &self.items[start..end]
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.current_page = page.min(self.total_pages() - 1);
    }

    pub fn next(&mut self) {
        self.go_to_page(self.current_page.saturating_add(1));
    }

    pub fn previous(&mut self) {
        self.go_to_page(self.current_page.saturating_sub(1));
    }

    pub fn first(&mut self) {
        self.go_to_page(0);
    }

    pub fn last(&mut self) {
        self.go_to_page(self.total_pages() - 1);
    }

    pub fn controls(&self) -> NavigationControls {
        NavigationControls::derive(self.current_page, self.total_pages())
    }

    /// Render with the default template as a numbered list
    pub fn render(&self) -> RenderPayload {
        self.render_with(&PageTemplate::default(), PageLayout::List)
    }

    pub fn render_with(&self, template: &PageTemplate, layout: PageLayout) -> RenderPayload {
        let page_items = self.current_page_items();
        let offset = self.current_page * self.page_size;

        let body = match layout {
            PageLayout::List => {
                if page_items.is_empty() {
                    PageBody::List(template.empty_placeholder.clone())
                } else {
                    PageBody::List(format_entries(page_items, offset, true))
                }
            }
            PageLayout::TwoColumn => {
                let mid = page_items.len().div_ceil(2);
                let (left, right) = page_items.split_at(mid);
                PageBody::Columns {
                    left: column(left, offset, template),
                    right: column(right, offset + mid, template),
                }
            }
        };

        let mut footer = format!(
            "{} {} {} {}",
            template.page_word,
            self.current_page + 1,
            template.of_word,
            self.total_pages()
        );
        if let Some(note) = &template.footer_note {
            footer.push_str(" • ");
            footer.push_str(note);
        }

        RenderPayload {
            title: format!("{} ({} {})", self.label, self.items.len(), template.item_noun),
            body,
            footer,
            page: self.current_page + 1,
            total_pages: self.total_pages(),
            controls: self.controls(),
        }
    }
}

fn format_entries<R: Record>(items: &[R], offset: usize, with_detail: bool) -> String {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let line = format!("`{}.` **{}**", offset + i + 1, item.name());
            match item.detail().filter(|_| with_detail) {
                Some(detail) => format!("{line}\n{detail}"),
                None => line,
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn column<R: Record>(items: &[R], offset: usize, template: &PageTemplate) -> Column {
    if items.is_empty() {
        return Column {
            heading: template.column_heading.clone(),
            text: template.empty_placeholder.clone(),
        };
    }
    Column {
        heading: format!(
            "{} ({}-{})",
            template.column_heading,
            offset + 1,
            offset + items.len()
        ),
        text: format_entries(items, offset, false),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    pub(crate) struct Named(pub String);

    impl Record for Named {
        fn name(&self) -> &str {
            &self.0
        }
    }

    pub(crate) fn named(count: usize) -> Vec<Named> {
        (1..=count).map(|i| Named(format!("Record {i}"))).collect()
    }

    fn names(items: &[Named]) -> Vec<&str> {
        items.iter().map(|n| n.0.as_str()).collect()
    }

    #[test]
    fn test_zero_page_size_is_rejected() {
        let result = PagedListView::new(named(3), 0, "label");
        assert_eq!(
            result.unwrap_err(),
            PagingError::InvalidConfiguration { page_size: 0 }
        );
    }

    #[test]
    fn test_total_pages() {
        for (count, size, expected) in [(0, 5, 1), (1, 5, 1), (5, 5, 1), (6, 5, 2), (12, 5, 3), (50, 10, 5)] {
            let view = PagedListView::new(named(count), size, "x").unwrap();
            assert_eq!(view.total_pages(), expected, "{count} items / {size}");
        }
    }

    #[test]
    fn test_start_page_is_clamped() {
        let view = PagedListView::with_start_page(named(12), 5, "x", 99).unwrap();
        assert_eq!(view.current_page(), 2);
    }

    #[test]
    fn test_go_to_page_clamps() {
        let mut view = PagedListView::new(named(12), 5, "x").unwrap();
        view.go_to_page(1);
        assert_eq!(view.current_page(), 1);
        view.go_to_page(3);
        assert_eq!(view.current_page(), 2);
        view.go_to_page(usize::MAX);
        assert_eq!(view.current_page(), 2);
    }

    #[test]
    fn test_previous_at_first_page_is_noop() {
        let mut view = PagedListView::new(named(12), 5, "x").unwrap();
        view.previous();
        assert_eq!(view.current_page(), 0);
    }

    #[test]
    fn test_next_at_last_page_is_noop() {
        let mut view = PagedListView::with_start_page(named(12), 5, "x", 2).unwrap();
        assert_eq!(view.total_pages(), 3);
        view.next();
        assert_eq!(view.current_page(), 2);
    }

    #[test]
    fn test_first_and_last() {
        let mut view = PagedListView::new(named(23), 5, "x").unwrap();
        view.last();
        assert_eq!(view.current_page(), 4);
        view.first();
        assert_eq!(view.current_page(), 0);
    }

    #[test]
    fn test_school_browsing_pages() {
        let mut view = PagedListView::new(named(12), 5, "Sekolah").unwrap();
        assert_eq!(view.total_pages(), 3);
        assert_eq!(names(view.current_page_items()), vec!["Record 1", "Record 2", "Record 3", "Record 4", "Record 5"]);

        view.next();
        assert_eq!(names(view.current_page_items()), vec!["Record 6", "Record 7", "Record 8", "Record 9", "Record 10"]);

        view.next();
        assert_eq!(names(view.current_page_items()), vec!["Record 11", "Record 12"]);
        assert!(!view.controls().next_enabled);
        assert!(view.controls().previous_enabled);
    }

    #[test]
    fn test_page_lengths() {
        let mut view = PagedListView::new(named(23), 5, "x").unwrap();
        for page in 0..view.total_pages() {
            view.go_to_page(page);
            let expected = if page == view.total_pages() - 1 { 23 - 5 * 4 } else { 5 };
            assert_eq!(view.current_page_items().len(), expected);
        }
    }

    #[test]
    fn test_empty_view_renders_one_empty_page() {
        let view = PagedListView::<Named>::new(Vec::new(), 10, "Kosong").unwrap();
        assert_eq!(view.total_pages(), 1);
        assert!(view.current_page_items().is_empty());

        let payload = view.render();
        assert_eq!(payload.body, PageBody::List("*No items*".to_string()));
        assert_eq!(payload.footer, "Page 1 of 1");
        assert!(!payload.controls.previous_enabled);
        assert!(!payload.controls.next_enabled);
    }

    #[test]
    fn test_render_numbers_by_absolute_position() {
        let mut view = PagedListView::new(named(12), 5, "Sekolah").unwrap();
        view.next();
        let payload = view.render();

        assert_eq!(payload.title, "Sekolah (12 items)");
        assert_eq!(payload.footer, "Page 2 of 3");
        assert_eq!(payload.page, 2);
        assert_eq!(payload.total_pages, 3);
        let body = payload.body.text();
        assert!(body.starts_with("`6.` **Record 6**"));
        assert!(body.ends_with("`10.` **Record 10**"));
    }

    #[test]
    fn test_render_is_idempotent() {
        let mut view = PagedListView::new(named(12), 5, "x").unwrap();
        view.next();
        let first = view.render();
        let second = view.render();
        assert_eq!(first, second);
        assert_eq!(view.current_page(), 1);
    }

    #[test]
    fn test_two_column_split() {
        let view = PagedListView::new(named(7), 10, "Jawa").unwrap();
        let payload = view.render_with(&PageTemplate::default(), PageLayout::TwoColumn);

        match payload.body {
            PageBody::Columns { left, right } => {
                assert_eq!(left.heading, "Items (1-4)");
                assert_eq!(right.heading, "Items (5-7)");
                assert_eq!(left.text.lines().count(), 4);
                assert_eq!(right.text.lines().count(), 3);
                assert!(left.text.starts_with("`1.` **Record 1**"));
                assert!(right.text.starts_with("`5.` **Record 5**"));
            }
            other => panic!("expected columns, got {other:?}"),
        }
    }

    #[test]
    fn test_two_column_empty_half_uses_placeholder() {
        let view = PagedListView::new(named(1), 10, "x").unwrap();
        let template = PageTemplate {
            empty_placeholder: "*Tidak ada kota*".to_string(),
            ..PageTemplate::default()
        };
        match view.render_with(&template, PageLayout::TwoColumn).body {
            PageBody::Columns { left, right } => {
                assert_eq!(left.heading, "Items (1-1)");
                assert_eq!(right.text, "*Tidak ada kota*");
            }
            other => panic!("expected columns, got {other:?}"),
        }
    }

    #[test]
    fn test_detail_is_rendered_under_entry() {
        struct WithDetail;
        impl Record for WithDetail {
            fn name(&self) -> &str {
                "SMA Negeri 1"
            }
            fn detail(&self) -> Option<String> {
                Some("```yaml\nNPSN: 123\n```".to_string())
            }
        }

        let view = PagedListView::new(vec![WithDetail], 5, "x").unwrap();
        assert_eq!(
            view.render().body.text(),
            "`1.` **SMA Negeri 1**\n```yaml\nNPSN: 123\n```"
        );
    }

    #[test]
    fn test_footer_note() {
        let view = PagedListView::new(named(3), 5, "x").unwrap();
        let template = PageTemplate {
            page_word: "Halaman".to_string(),
            of_word: "dari".to_string(),
            footer_note: Some("Tip".to_string()),
            ..PageTemplate::default()
        };
        assert_eq!(view.render_with(&template, PageLayout::List).footer, "Halaman 1 dari 1 • Tip");
    }

    #[test]
    fn test_layout_toggle() {
        assert_eq!(PageLayout::List.toggled(), PageLayout::TwoColumn);
        assert_eq!(PageLayout::TwoColumn.toggled(), PageLayout::List);
    }
}
