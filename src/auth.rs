//! Chat actors and the authorization gate for privileged round operations.
//!
//! Opening, closing and ending a betting round is reserved to the channel
//! owner, its moderators and a configurable list of superusers (typically the
//! bot operator). Placing a bet is open to everyone.

use std::collections::HashSet;

/// Role flag carried by a chat actor.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Role {
    /// Owner of the channel (Twitch `broadcaster` badge)
    Broadcaster,
    /// Channel moderator (Twitch `moderator` badge or `mod=1` tag)
    Moderator,
}

/// The author of a chat message.
///
/// # Examples
///
/// ```ignore
/// let actor = Actor::new("alice", "Alice", [Role::Moderator]);
/// assert!(actor.has_role(Role::Moderator));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    /// Lowercase login name, stable across display name changes
    pub login: String,
    /// Name shown in chat, used as the participant identifier
    pub display_name: String,
    /// Role flags held in the channel the message was sent to
    pub roles: HashSet<Role>,
}

impl Actor {
    /// Creates a new [`Actor`].
    ///
    /// An empty display name falls back to the login.
    pub fn new<I>(login: &str, display_name: &str, roles: I) -> Self
    where
        I: IntoIterator<Item = Role>,
    {
        let display_name = if display_name.is_empty() {
            login
        } else {
            display_name
        };

        Actor {
            login: login.to_owned(),
            display_name: display_name.to_owned(),
            roles: roles.into_iter().collect(),
        }
    }

    /// Whether the actor holds the given role.
    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }
}

/// Whether the actor may start, close or end a betting round.
///
/// # Arguments
///
/// * `actor` - The author of the command
/// * `superusers` - Logins always allowed, compared case-insensitively
///
/// # Returns
///
/// `true` if the actor is the broadcaster, a moderator, or a superuser.
pub fn authorized(actor: &Actor, superusers: &[String]) -> bool {
    actor.has_role(Role::Broadcaster)
        || actor.has_role(Role::Moderator)
        || superusers
            .iter()
            .any(|login| login.eq_ignore_ascii_case(&actor.login))
}
