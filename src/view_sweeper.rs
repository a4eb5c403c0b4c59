//! # View Sweeper
//!
//! Background task that expires idle paged views and redraws their
//! messages with every navigation control disabled. Also prunes stale
//! cooldown entries.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.1.0
//!
//! ## Changelog
//! - 1.0.0: Initial implementation

use log::{debug, info, warn};
use serenity::builder::{CreateComponents, CreateEmbed};
use serenity::http::Http;
use serenity::model::id::{ChannelId, MessageId};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::commands::context::{CommandContext, Views};
use crate::features::help;
use crate::features::prayer::display as cities;
use crate::features::schools::display as schools;

/// A message whose view expired: `(channel_id, message_id, final render)`
pub type ExpiredMessage = (u64, u64, (CreateEmbed, CreateComponents));

/// Sweep every registry once, returning the messages to redraw
pub fn collect_expired(views: &Views, now: Instant) -> Vec<ExpiredMessage> {
    let mut expired = Vec::new();
    for (message_id, session) in views.schools.sweep_expired(now) {
        expired.push((session.channel_id, message_id, schools::render_session(&session)));
    }
    for (message_id, session) in views.cities.sweep_expired(now) {
        expired.push((session.channel_id, message_id, cities::render_session(&session)));
    }
    for (message_id, session) in views.help.sweep_expired(now) {
        expired.push((session.channel_id, message_id, help::render_session(&session)));
    }
    expired
}

pub async fn view_sweep_loop(ctx: Arc<CommandContext>, http: Arc<Http>, every: Duration) {
    let mut interval = tokio::time::interval(every);

    info!("View sweeper started (interval: {}s)", every.as_secs());

    loop {
        interval.tick().await;

        let now = Instant::now();
        ctx.cooldowns.prune(now);

        let expired = collect_expired(&ctx.views, now);
        if expired.is_empty() {
            continue;
        }
        debug!("Sweeping {} expired views", expired.len());

        for (channel_id, message_id, (_, components)) in expired {
            let result = ChannelId(channel_id)
                .edit_message(&http, MessageId(message_id), |m| {
                    m.components(|c| {
                        *c = components;
                        c
                    })
                })
                .await;
            match result {
                Ok(_) => info!("View on message {message_id} expired, controls disabled"),
                // The message may have been deleted in the meantime
                Err(e) => warn!("Failed to disable controls on message {message_id}: {e}"),
            }
        }
    }
}
