//! Rate-limit-aware cache of the bot's guild memberships.
//!
//! Listing the bot's guilds is the only place the application talks to a
//! rate-limited third party on a recurring basis, so the result is held in a
//! single process-wide cache entry with a time-to-live. A refresh that gets
//! rate-limited marks the entry stale but keeps serving the last known list;
//! staleness forces the next read to try again.
//!
//! The entry sits behind an async mutex that is held across the refresh
//! request, so at most one refresh is ever in flight. Concurrent callers wait
//! on the lock, re-check freshness once they hold it, and reuse the completed
//! refresh instead of issuing duplicate upstream calls.

use std::collections::HashSet;

use chrono::{DateTime, Duration, Utc};
use serenity::all::GuildId;
use tokio::sync::Mutex;

use crate::server::{
    error::{discord::DiscordApiError, AppError},
    service::discord::DiscordApi,
};

/// How long a fetched bot guild list stays fresh.
pub const BOT_GUILD_CACHE_TTL_MINUTES: i64 = 10;

#[derive(Debug, Default)]
struct BotGuildCacheEntry {
    /// Guild IDs the bot belonged to at the last successful refresh.
    /// Replaced wholesale on refresh, never mutated in place.
    ids: HashSet<GuildId>,
    /// When the last successful refresh happened; `None` until the first one.
    fetched_at: Option<DateTime<Utc>>,
    /// Set when a refresh was rate-limited; forces the next read to retry.
    stale: bool,
}

impl BotGuildCacheEntry {
    /// A fresh entry is served without touching the network. An empty entry is
    /// never fresh: it must not mask the bot's guild list behind the TTL.
    fn is_fresh(&self, now: DateTime<Utc>) -> bool {
        let Some(fetched_at) = self.fetched_at else {
            return false;
        };

        !self.ids.is_empty()
            && !self.stale
            && now.signed_duration_since(fetched_at) < Duration::minutes(BOT_GUILD_CACHE_TTL_MINUTES)
    }
}

/// Process-wide cache of the guild IDs the bot belongs to.
///
/// Owned by `AppState` behind an `Arc` and injected into handlers; lost on
/// restart by design.
#[derive(Debug, Default)]
pub struct BotGuildCache {
    entry: Mutex<BotGuildCacheEntry>,
}

impl BotGuildCache {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Service for reading the bot's guild list through the cache.
///
/// Constructed per request from `AppState`; all state lives in the shared
/// `BotGuildCache`.
pub struct BotGuildService<'a> {
    api: DiscordApi<'a>,
    cache: &'a BotGuildCache,
    bot_token: &'a str,
}

impl<'a> BotGuildService<'a> {
    pub fn new(
        http_client: &'a reqwest::Client,
        discord_api_base_url: &'a str,
        cache: &'a BotGuildCache,
        bot_token: &'a str,
    ) -> Self {
        Self {
            api: DiscordApi::new(http_client, discord_api_base_url),
            cache,
            bot_token,
        }
    }

    /// Returns the set of guild IDs the bot currently belongs to.
    ///
    /// Serves the cached set when it is non-empty, unexpired, and not stale;
    /// otherwise refreshes from Discord. A rate-limited refresh degrades to
    /// the stale set when one exists.
    ///
    /// # Arguments
    /// - `now` - The current time; passed in so freshness is decided by the caller's clock
    ///
    /// # Returns
    /// - `Ok(HashSet<GuildId>)` - Cached, refreshed, or stale-served guild IDs
    /// - `Err(AppError::DiscordErr(RateLimited))` - Rate-limited with an empty cache
    /// - `Err(AppError::DiscordErr(_))` - Any other upstream failure; cache unchanged
    pub async fn get_bot_guild_ids(
        &self,
        now: DateTime<Utc>,
    ) -> Result<HashSet<GuildId>, AppError> {
        let mut entry = self.cache.entry.lock().await;

        if entry.is_fresh(now) {
            tracing::debug!("Serving bot guild list from cache ({} guilds)", entry.ids.len());
            return Ok(entry.ids.clone());
        }

        tracing::info!("Refreshing bot guild cache");

        match self.api.bot_guilds(self.bot_token).await {
            Ok(guilds) => {
                entry.ids = guilds.into_iter().map(|g| g.id).collect();
                entry.fetched_at = Some(now);
                entry.stale = false;
                tracing::info!("Bot guild cache refreshed ({} guilds)", entry.ids.len());
                Ok(entry.ids.clone())
            }
            Err(DiscordApiError::RateLimited) => {
                entry.stale = true;
                if entry.ids.is_empty() {
                    tracing::warn!("Bot guild refresh rate limited and cache is empty");
                    Err(DiscordApiError::RateLimited.into())
                } else {
                    tracing::warn!(
                        "Bot guild refresh rate limited, serving stale cache ({} guilds)",
                        entry.ids.len()
                    );
                    Ok(entry.ids.clone())
                }
            }
            Err(err) => {
                tracing::error!("Bot guild refresh failed: {}", err);
                Err(err.into())
            }
        }
    }
}
