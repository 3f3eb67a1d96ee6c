use super::*;

/// Tests the initial population of an empty cache.
///
/// Verifies that the first read fetches the bot's guild list from the API
/// and returns the fetched identifiers.
///
/// Expected: Ok({1, 2})
#[tokio::test]
async fn refresh_populates_empty_cache() {
    let server = MockServer::start().await;
    bot_guilds_request()
        .respond_with(ResponseTemplate::new(200).set_body_json(guilds_body(&[1, 2])))
        .expect(1)
        .mount(&server)
        .await;

    let http_client = reqwest::Client::new();
    let base_url = server.uri();
    let cache = BotGuildCache::new();
    let service = BotGuildService::new(&http_client, &base_url, &cache, BOT_TOKEN);

    let result = service.get_bot_guild_ids(Utc::now()).await.unwrap();

    assert_eq!(result, guild_ids(&[1, 2]));
}

/// Tests that a fresh cache performs zero network calls.
///
/// Verifies that a second read inside the TTL window is served from the
/// cache; the mock's expectation of a single request fails the test if a
/// second fetch goes out.
///
/// Expected: Ok({1}), one upstream request total
#[tokio::test]
async fn fresh_cache_is_served_without_refetch() {
    let server = MockServer::start().await;
    bot_guilds_request()
        .respond_with(ResponseTemplate::new(200).set_body_json(guilds_body(&[1])))
        .expect(1)
        .mount(&server)
        .await;

    let http_client = reqwest::Client::new();
    let base_url = server.uri();
    let cache = BotGuildCache::new();
    let service = BotGuildService::new(&http_client, &base_url, &cache, BOT_TOKEN);

    let now = Utc::now();
    let first = service.get_bot_guild_ids(now).await.unwrap();
    let second = service.get_bot_guild_ids(within_ttl(now)).await.unwrap();

    assert_eq!(first, guild_ids(&[1]));
    assert_eq!(second, guild_ids(&[1]));
}

/// Tests that an empty cached guild list never counts as fresh.
///
/// A bot that was in no guilds at the last refresh must be re-checked on the
/// next read even though the TTL has not lapsed.
///
/// Expected: Ok({}) then Ok({7})
#[tokio::test]
async fn empty_guild_list_refreshes_within_ttl() {
    let server = MockServer::start().await;
    bot_guilds_request()
        .respond_with(ResponseTemplate::new(200).set_body_json(guilds_body(&[])))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    bot_guilds_request()
        .respond_with(ResponseTemplate::new(200).set_body_json(guilds_body(&[7])))
        .expect(1)
        .mount(&server)
        .await;

    let http_client = reqwest::Client::new();
    let base_url = server.uri();
    let cache = BotGuildCache::new();
    let service = BotGuildService::new(&http_client, &base_url, &cache, BOT_TOKEN);

    let now = Utc::now();
    let first = service.get_bot_guild_ids(now).await.unwrap();
    let second = service.get_bot_guild_ids(within_ttl(now)).await.unwrap();

    assert!(first.is_empty());
    assert_eq!(second, guild_ids(&[7]));
}

/// Tests wholesale replacement after TTL expiry.
///
/// Verifies that an expired cache is refreshed and the previous identifiers
/// are replaced as a whole rather than merged.
///
/// Expected: Ok({1}) then Ok({2, 3})
#[tokio::test]
async fn expired_cache_is_replaced_wholesale() {
    let server = MockServer::start().await;
    bot_guilds_request()
        .respond_with(ResponseTemplate::new(200).set_body_json(guilds_body(&[1])))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    bot_guilds_request()
        .respond_with(ResponseTemplate::new(200).set_body_json(guilds_body(&[2, 3])))
        .expect(1)
        .mount(&server)
        .await;

    let http_client = reqwest::Client::new();
    let base_url = server.uri();
    let cache = BotGuildCache::new();
    let service = BotGuildService::new(&http_client, &base_url, &cache, BOT_TOKEN);

    let now = Utc::now();
    let first = service.get_bot_guild_ids(now).await.unwrap();
    let second = service.get_bot_guild_ids(past_ttl(now)).await.unwrap();

    assert_eq!(first, guild_ids(&[1]));
    assert_eq!(second, guild_ids(&[2, 3]));
}

/// Tests the rate-limit failure mode with nothing to fall back on.
///
/// Verifies that a rate-limited refresh against an empty cache surfaces the
/// rate limit instead of an empty guild list.
///
/// Expected: Err(RateLimited)
#[tokio::test]
async fn rate_limited_refresh_with_empty_cache_fails() {
    let server = MockServer::start().await;
    bot_guilds_request()
        .respond_with(ResponseTemplate::new(429))
        .expect(1)
        .mount(&server)
        .await;

    let http_client = reqwest::Client::new();
    let base_url = server.uri();
    let cache = BotGuildCache::new();
    let service = BotGuildService::new(&http_client, &base_url, &cache, BOT_TOKEN);

    let result = service.get_bot_guild_ids(Utc::now()).await;

    assert!(matches!(
        result,
        Err(AppError::DiscordErr(DiscordApiError::RateLimited))
    ));
}

/// Tests degraded service under continued rate-limiting.
///
/// Once populated, a rate-limited refresh serves the previous identifiers
/// unchanged, and the entry stays stale: the following read attempts another
/// refresh instead of trusting the TTL.
///
/// Expected: Ok({1}) from both rate-limited reads, refresh attempted each time
#[tokio::test]
async fn rate_limited_refresh_serves_stale_ids() {
    let server = MockServer::start().await;
    bot_guilds_request()
        .respond_with(ResponseTemplate::new(200).set_body_json(guilds_body(&[1])))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    bot_guilds_request()
        .respond_with(ResponseTemplate::new(429))
        .expect(2)
        .mount(&server)
        .await;

    let http_client = reqwest::Client::new();
    let base_url = server.uri();
    let cache = BotGuildCache::new();
    let service = BotGuildService::new(&http_client, &base_url, &cache, BOT_TOKEN);

    let now = Utc::now();
    let fresh = service.get_bot_guild_ids(now).await.unwrap();

    let expired = past_ttl(now);
    let first_stale = service.get_bot_guild_ids(expired).await.unwrap();
    // Still stale, so this read retries upstream instead of trusting the entry.
    let second_stale = service.get_bot_guild_ids(expired).await.unwrap();

    assert_eq!(fresh, guild_ids(&[1]));
    assert_eq!(first_stale, guild_ids(&[1]));
    assert_eq!(second_stale, guild_ids(&[1]));
}

/// Tests that non-rate-limit upstream failures propagate without touching
/// the cache.
///
/// After a 500 the previous identifiers must still be there to degrade to:
/// a later rate-limited refresh serves them.
///
/// Expected: Err(UnexpectedStatus), then Ok({1})
#[tokio::test]
async fn upstream_error_propagates_and_preserves_cache() {
    let server = MockServer::start().await;
    bot_guilds_request()
        .respond_with(ResponseTemplate::new(200).set_body_json(guilds_body(&[1])))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    bot_guilds_request()
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    bot_guilds_request()
        .respond_with(ResponseTemplate::new(429))
        .expect(1)
        .mount(&server)
        .await;

    let http_client = reqwest::Client::new();
    let base_url = server.uri();
    let cache = BotGuildCache::new();
    let service = BotGuildService::new(&http_client, &base_url, &cache, BOT_TOKEN);

    let now = Utc::now();
    let fresh = service.get_bot_guild_ids(now).await.unwrap();

    let expired = past_ttl(now);
    let failed = service.get_bot_guild_ids(expired).await;
    let degraded = service.get_bot_guild_ids(expired).await.unwrap();

    assert_eq!(fresh, guild_ids(&[1]));
    assert!(matches!(
        failed,
        Err(AppError::DiscordErr(DiscordApiError::UnexpectedStatus(_)))
    ));
    assert_eq!(degraded, guild_ids(&[1]));
}

/// Tests single-flight refreshing under concurrency.
///
/// Two callers racing an empty cache must share one upstream request: the
/// second waits on the in-flight refresh and reuses its result.
///
/// Expected: both Ok({1}), one upstream request total
#[tokio::test]
async fn concurrent_callers_share_one_refresh() {
    let server = MockServer::start().await;
    bot_guilds_request()
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(guilds_body(&[1]))
                .set_delay(std::time::Duration::from_millis(100)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let http_client = reqwest::Client::new();
    let base_url = server.uri();
    let cache = BotGuildCache::new();
    let service = BotGuildService::new(&http_client, &base_url, &cache, BOT_TOKEN);

    let now = Utc::now();
    let (first, second) = tokio::join!(
        service.get_bot_guild_ids(now),
        service.get_bot_guild_ids(now)
    );

    assert_eq!(first.unwrap(), guild_ids(&[1]));
    assert_eq!(second.unwrap(), guild_ids(&[1]));
}
