use std::collections::HashSet;

use serenity::all::GuildId;

use crate::server::model::guild::{OwnedGuild, UserGuild};

/// Filters a user's guild memberships down to the guilds they own and marks
/// each with the bot's presence.
///
/// Pure: no network access, inputs are left untouched. `bot_in_guild` is
/// derived from set membership at call time and never persisted.
///
/// # Arguments
/// - `user_guilds` - Guild memberships as reported by Discord for the user
/// - `bot_guild_ids` - Current set of guild IDs the bot belongs to
///
/// # Returns
/// - `Vec<OwnedGuild>` - Owned guilds only, each annotated with bot presence
pub fn reconcile_owned_guilds(
    user_guilds: &[UserGuild],
    bot_guild_ids: &HashSet<GuildId>,
) -> Vec<OwnedGuild> {
    user_guilds
        .iter()
        .filter(|guild| guild.owner)
        .map(|guild| OwnedGuild {
            id: guild.id,
            name: guild.name.clone(),
            icon: guild.icon.clone(),
            owner: guild.owner,
            bot_in_guild: bot_guild_ids.contains(&guild.id),
        })
        .collect()
}
