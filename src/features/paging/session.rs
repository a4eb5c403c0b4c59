//! # View Sessions
//!
//! Binds a paged view to the message it was rendered into, with an
//! inactivity timeout after which every control is permanently disabled.
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.1.0: Add registry sweep for expired views
//! - 1.0.0: Initial implementation

use dashmap::DashMap;
use log::debug;
use std::sync::Arc;
use std::time::{Duration, Instant};

use super::controls::{NavAction, NavigationControls};
use super::view::{PageLayout, PageTemplate, PagedListView, Record, RenderPayload};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    Active,
    Expired,
}

/// Two-state lifecycle: `Active -> Expired`, never back.
#[derive(Debug, Clone)]
pub struct Lifecycle {
    state: ViewState,
    timeout: Duration,
    last_activity: Instant,
}

impl Lifecycle {
    pub fn new(timeout: Duration, now: Instant) -> Self {
        Self {
            state: ViewState::Active,
            timeout,
            last_activity: now,
        }
    }

    /// Evaluate the timeout at `now`, expiring the view if it elapsed
    pub fn check(&mut self, now: Instant) -> ViewState {
        if self.state == ViewState::Active
            && now.saturating_duration_since(self.last_activity) >= self.timeout
        {
            self.state = ViewState::Expired;
        }
        self.state
    }

    /// Record activity. Returns false if the view had already expired.
    pub fn touch(&mut self, now: Instant) -> bool {
        if self.check(now) == ViewState::Expired {
            return false;
        }
        self.last_activity = now;
        true
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

/// A view bound to one rendered message
#[derive(Debug, Clone)]
pub struct ViewSession<R, C> {
    pub view: PagedListView<R>,
    pub layout: PageLayout,
    pub template: PageTemplate,
    pub lifecycle: Lifecycle,
    pub channel_id: u64,
    /// Feature data needed to redraw the message (scope, colour, origin)
    pub context: C,
}

impl<R: Record, C> ViewSession<R, C> {
    pub fn new(
        view: PagedListView<R>,
        template: PageTemplate,
        timeout: Duration,
        channel_id: u64,
        context: C,
        now: Instant,
    ) -> Self {
        Self {
            view,
            layout: PageLayout::List,
            template,
            lifecycle: Lifecycle::new(timeout, now),
            channel_id,
            context,
        }
    }

    pub fn with_layout(mut self, layout: PageLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn render(&self) -> RenderPayload {
        let mut payload = self.view.render_with(&self.template, self.layout);
        if self.lifecycle.state() == ViewState::Expired {
            payload.controls = NavigationControls::disabled();
        }
        payload
    }

    /// Apply an in-place navigation click.
    ///
    /// Returns `None` when the click must be ignored: the view expired, the
    /// affordance is disabled, or the action replaces the view instead of
    /// moving within it (search, home).
    pub fn on_click(&mut self, action: NavAction, now: Instant) -> Option<RenderPayload> {
        if self.lifecycle.check(now) == ViewState::Expired {
            return None;
        }
        if !self.view.controls().permits(action) {
            debug!("Ignoring click on disabled control: {action}");
            return None;
        }

        match action {
            NavAction::First => self.view.first(),
            NavAction::Previous => self.view.previous(),
            NavAction::Next => self.view.next(),
            NavAction::Last => self.view.last(),
            NavAction::ToggleLayout => self.layout = self.layout.toggled(),
            NavAction::Search | NavAction::Home => return None,
        }

        self.lifecycle.touch(now);
        Some(self.render())
    }

    /// Whether a replacing action (search, home) may proceed, refreshing the timeout if so
    pub fn accepts(&mut self, action: NavAction, now: Instant) -> bool {
        self.view.controls().permits(action) && self.lifecycle.touch(now)
    }
}

/// Live sessions keyed by message id
pub struct ViewRegistry<R, C> {
    sessions: Arc<DashMap<u64, ViewSession<R, C>>>,
}

impl<R, C> Clone for ViewRegistry<R, C> {
    fn clone(&self) -> Self {
        Self {
            sessions: Arc::clone(&self.sessions),
        }
    }
}

impl<R, C> Default for ViewRegistry<R, C> {
    fn default() -> Self {
        Self {
            sessions: Arc::new(DashMap::new()),
        }
    }
}

impl<R: Record, C> ViewRegistry<R, C> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a session, replacing any previous one for the same message
    pub fn insert(&self, message_id: u64, session: ViewSession<R, C>) {
        self.sessions.insert(message_id, session);
    }

    pub fn remove(&self, message_id: u64) -> Option<ViewSession<R, C>> {
        self.sessions.remove(&message_id).map(|(_, session)| session)
    }

    pub fn contains(&self, message_id: u64) -> bool {
        self.sessions.contains_key(&message_id)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Navigate the session bound to `message_id`. Unknown messages are ignored.
    pub fn on_click(&self, message_id: u64, action: NavAction, now: Instant) -> Option<RenderPayload> {
        let mut session = self.sessions.get_mut(&message_id)?;
        session.on_click(action, now)
    }

    /// Run `f` against a live session if the replacing `action` is accepted
    pub fn accept<T>(
        &self,
        message_id: u64,
        action: NavAction,
        now: Instant,
        f: impl FnOnce(&ViewSession<R, C>) -> T,
    ) -> Option<T> {
        let mut session = self.sessions.get_mut(&message_id)?;
        if !session.accepts(action, now) {
            return None;
        }
        Some(f(session.value()))
    }

    pub fn with_session<T>(&self, message_id: u64, f: impl FnOnce(&ViewSession<R, C>) -> T) -> Option<T> {
        self.sessions.get(&message_id).map(|session| f(session.value()))
    }

    /// Expire and drop every session whose timeout elapsed.
    ///
    /// Returns `(message_id, session)` pairs; an expired session renders with
    /// every control disabled, so the caller can redraw those messages.
    pub fn sweep_expired(&self, now: Instant) -> Vec<(u64, ViewSession<R, C>)> {
        let expired: Vec<u64> = self
            .sessions
            .iter_mut()
            .filter_map(|mut entry| {
                (entry.lifecycle.check(now) == ViewState::Expired).then(|| *entry.key())
            })
            .collect();

        expired
            .into_iter()
            .filter_map(|message_id| self.remove(message_id).map(|session| (message_id, session)))
            .collect()
    }
}
