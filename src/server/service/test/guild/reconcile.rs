use super::*;

/// Tests the ownership filter.
///
/// Verifies that guilds the user merely belongs to never appear in the
/// reconciled list, regardless of bot presence.
///
/// Expected: only owned guilds
#[test]
fn non_owned_guilds_are_filtered_out() {
    let user_guilds = vec![
        guild(1, "Owned", true),
        guild(2, "Member only", false),
        guild(3, "Also member only", false),
    ];

    let result = reconcile_owned_guilds(&user_guilds, &guild_ids(&[1, 2, 3]));

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, GuildId::new(1));
    assert!(result[0].owner);
}

/// Tests bot presence derivation.
///
/// Verifies that `botInGuild` is true exactly when the guild's identifier
/// is in the bot's guild set.
///
/// Expected: membership mirrors the bot set
#[test]
fn bot_presence_is_set_membership() {
    let user_guilds = vec![
        guild(1, "With bot", true),
        guild(2, "Without bot", true),
    ];

    let result = reconcile_owned_guilds(&user_guilds, &guild_ids(&[1, 99]));

    assert_eq!(result.len(), 2);
    assert!(result[0].bot_in_guild);
    assert!(!result[1].bot_in_guild);
}

/// Tests the canonical reconciliation example.
///
/// Owned guild A with the bot present and non-owned guild B reconcile to a
/// single entry for A with `botInGuild` set.
///
/// Expected: [A with bot]
#[test]
fn owned_guild_with_bot_survives_alone() {
    let user_guilds = vec![guild(10, "A", true), guild(20, "B", false)];

    let result = reconcile_owned_guilds(&user_guilds, &guild_ids(&[10]));

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, GuildId::new(10));
    assert!(result[0].bot_in_guild);
}

/// Tests that reconciliation leaves its inputs untouched.
///
/// Verifies the input slice still holds every guild, owned or not, after a
/// reconciliation pass.
///
/// Expected: inputs unchanged
#[test]
fn inputs_are_not_mutated() {
    let user_guilds = vec![guild(1, "Owned", true), guild(2, "Member", false)];
    let bot_ids = guild_ids(&[1]);

    let before = user_guilds.clone();
    let _ = reconcile_owned_guilds(&user_guilds, &bot_ids);

    assert_eq!(user_guilds, before);
    assert_eq!(bot_ids, guild_ids(&[1]));
}

/// Tests display fields carried through to the dashboard payload.
///
/// Expected: name and icon preserved
#[test]
fn display_fields_are_preserved() {
    let mut with_icon = guild(5, "Iconic", true);
    with_icon.icon = Some("abc123".to_string());

    let result = reconcile_owned_guilds(&[with_icon], &guild_ids(&[]));

    assert_eq!(result[0].name, "Iconic");
    assert_eq!(result[0].icon.as_deref(), Some("abc123"));
    assert!(!result[0].bot_in_guild);
}

/// Tests reconciliation with no guilds at all.
///
/// Expected: empty result
#[test]
fn empty_input_reconciles_to_empty() {
    let result = reconcile_owned_guilds(&[], &guild_ids(&[1, 2]));

    assert!(result.is_empty());
}
