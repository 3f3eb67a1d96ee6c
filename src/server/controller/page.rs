use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use tower_sessions::Session;

use crate::server::{error::AppError, middleware::session::AuthSession, service::backoff};

/// Cookie carrying the current backoff interval in seconds.
const RL_WAIT_COOKIE: &str = "rl_wait";

const SERVERS_PAGE: &str = "public/servers.html";

/// GET /servers - The authenticated dashboard page.
///
/// Anonymous visitors are redirected to the login entry point instead of
/// seeing an error.
pub async fn servers(session: Session) -> Result<Response, AppError> {
    if !AuthSession::new(&session).is_authenticated().await? {
        return Ok(Redirect::to("/login").into_response());
    }

    let body = tokio::fs::read_to_string(SERVERS_PAGE).await?;

    Ok(Html(body).into_response())
}

/// GET /dashboard.html - Compatibility redirect for the old dashboard URL.
pub async fn dashboard_redirect(session: Session) -> Result<Redirect, AppError> {
    if !AuthSession::new(&session).is_authenticated().await? {
        return Ok(Redirect::to("/login"));
    }

    Ok(Redirect::to("/servers"))
}

/// GET /login-rate-limit - Explanation page shown when Discord rate-limits a login.
///
/// Discord does not provide a usable retry-after on this path, so the page
/// derives the wait from the `rl_wait` cookie: doubled on every visit while
/// the cookie lives, capped, and reset once the cookie expires (its lifetime
/// equals its own value).
pub async fn login_rate_limit(jar: CookieJar) -> impl IntoResponse {
    let previous = jar
        .get(RL_WAIT_COOKIE)
        .and_then(|cookie| cookie.value().parse::<i64>().ok());

    let wait_secs = backoff::next_wait(previous);

    let cookie = Cookie::build((RL_WAIT_COOKIE, wait_secs.to_string()))
        .http_only(true)
        .path("/")
        .max_age(time::Duration::seconds(wait_secs))
        .build();

    (
        StatusCode::TOO_MANY_REQUESTS,
        jar.add(cookie),
        Html(render_rate_limit_page(wait_secs)),
    )
}

fn render_rate_limit_page(wait_secs: i64) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
  <head>
    <title>Rate Limited</title>
    <link rel="stylesheet" href="/styles/main.css">
    <link rel="stylesheet" href="/styles/rate-limit.css">
  </head>
  <body>
    <div class="rate-limit-container">
      <div class="rate-limit-title">You are being rate limited by Discord</div>
      <p class="rate-limit-text">
        Too many login attempts were made in a short period.
        Please wait <span id="countdown">{wait_secs}</span> seconds before trying again.
      </p>
      <a id="retry" class="retry-btn" href="/login" aria-disabled="true">Retry login</a>
    </div>
    <script>
      let remaining = {wait_secs};
      const countdown = document.getElementById('countdown');
      const retry = document.getElementById('retry');
      retry.style.pointerEvents = 'none';
      const timer = setInterval(() => {{
        remaining -= 1;
        countdown.textContent = remaining;
        if (remaining <= 0) {{
          clearInterval(timer);
          retry.style.pointerEvents = '';
          retry.removeAttribute('aria-disabled');
        }}
      }}, 1000);
    </script>
  </body>
</html>
"#
    )
}
