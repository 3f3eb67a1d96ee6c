//! Exponential backoff for rate-limited login attempts.
//!
//! Discord does not expose a usable retry-after on the login path, so the
//! wait is tracked client-side in the `rl_wait` cookie: it starts at one
//! minute, doubles on every rate-limited attempt while the cookie is alive,
//! and is capped at ten minutes. The cookie expires after exactly its own
//! value, so a user who actually waits starts over at the default.

/// Wait applied to the first rate-limited login attempt.
pub const DEFAULT_LOGIN_WAIT_SECS: i64 = 60;

/// Upper bound for the doubled wait.
pub const MAX_LOGIN_WAIT_SECS: i64 = 600;

/// Computes the next wait interval from the previous cookie value.
///
/// # Arguments
/// - `previous_wait_secs` - Parsed value of the `rl_wait` cookie, if any
///
/// # Returns
/// - The default wait when there is no previous value or it is invalid
///   (non-positive), otherwise double the previous value, capped
pub fn next_wait(previous_wait_secs: Option<i64>) -> i64 {
    match previous_wait_secs {
        Some(previous) if previous > 0 => previous.saturating_mul(2).min(MAX_LOGIN_WAIT_SECS),
        _ => DEFAULT_LOGIN_WAIT_SECS,
    }
}
