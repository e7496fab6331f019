//! IRC message parsing for Twitch chat.
//!
//! A Twitch chat line looks like:
//!
//! ```text
//! @badges=moderator/1;display-name=Alice;mod=1 :alice!alice@alice.tmi.twitch.tv PRIVMSG #channel :!bet 10:00
//! ```
//!
//! This module provides the [`IrcMessage`] struct parsing such lines, and the
//! conversion of `PRIVMSG` messages into [`ChatEvent`]s.

use std::collections::HashMap;

use log::debug;

use crate::{
    auth::{Actor, Role},
    commands::ChatEvent,
};

/// A parsed IRC line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IrcMessage {
    /// IRCv3 tags, values unescaped
    pub tags: HashMap<String, String>,
    /// Source of the message, e.g. `alice!alice@alice.tmi.twitch.tv`
    pub prefix: Option<String>,
    /// IRC command or numeric reply, e.g. `PRIVMSG`, `PING`, `001`
    pub command: String,
    /// Parameters, the trailing one included as the last element
    pub params: Vec<String>,
}

impl IrcMessage {
    /// Parses a raw IRC line.
    ///
    /// # Returns
    ///
    /// * `Some(IrcMessage)` - The parsed line
    /// * `None` - The line has no command
    pub fn parse(line: &str) -> Option<Self> {
        let mut rest = line.trim_end_matches(['\r', '\n']);

        let mut tags = HashMap::new();
        if let Some(stripped) = rest.strip_prefix('@') {
            let (raw_tags, remainder) = stripped.split_once(' ')?;
            tags = parse_tags(raw_tags);
            rest = remainder.trim_start();
        }

        let mut prefix = None;
        if let Some(stripped) = rest.strip_prefix(':') {
            let (raw_prefix, remainder) = stripped.split_once(' ')?;
            prefix = Some(raw_prefix.to_owned());
            rest = remainder.trim_start();
        }

        let (middle, trailing) = match rest.split_once(" :") {
            Some((middle, trailing)) => (middle, Some(trailing)),
            None => (rest, None),
        };

        let mut words = middle.split_whitespace();
        let command = words.next()?.to_owned();
        let mut params: Vec<String> = words.map(str::to_owned).collect();
        if let Some(trailing) = trailing {
            params.push(trailing.to_owned());
        }

        Some(IrcMessage {
            tags,
            prefix,
            command,
            params,
        })
    }

    /// Returns the value of a tag, if present.
    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags.get(key).map(String::as_str)
    }

    /// Returns the nickname part of the prefix.
    pub fn nick(&self) -> Option<&str> {
        let prefix = self.prefix.as_deref()?;
        prefix.split('!').next()
    }

    /// Converts a `PRIVMSG` into a [`ChatEvent`].
    ///
    /// The actor login comes from the prefix, its display name from the
    /// `display-name` tag and its roles from the `badges` and `mod` tags.
    ///
    /// # Returns
    ///
    /// `None` if the message is not a well formed `PRIVMSG` to a channel.
    pub fn to_chat_event(&self) -> Option<ChatEvent> {
        if self.command != "PRIVMSG" || self.params.len() < 2 {
            return None;
        }

        let channel = self.params[0].strip_prefix('#')?;
        let login = self.nick()?;

        let mut roles: Vec<Role> = self
            .tag("badges")
            .unwrap_or_default()
            .split(',')
            .filter_map(|badge| match badge.split('/').next() {
                Some("broadcaster") => Some(Role::Broadcaster),
                Some("moderator") => Some(Role::Moderator),
                _ => None,
            })
            .collect();
        if self.tag("mod") == Some("1") {
            roles.push(Role::Moderator);
        }

        let actor = Actor::new(login, self.tag("display-name").unwrap_or_default(), roles);
        debug!("{} has roles {:?} in #{}", actor.login, actor.roles, channel);

        Some(ChatEvent {
            channel: channel.to_owned(),
            body: self.params[1].clone(),
            actor,
        })
    }
}

/// Parses `key=value;key2=value2` IRCv3 tags.
fn parse_tags(raw_tags: &str) -> HashMap<String, String> {
    raw_tags
        .split(';')
        .filter(|tag| !tag.is_empty())
        .map(|tag| match tag.split_once('=') {
            Some((key, value)) => (key.to_owned(), unescape_tag_value(value)),
            None => (tag.to_owned(), String::new()),
        })
        .collect()
}

/// Unescapes an IRCv3 tag value (`\:` `\s` `\\` `\r` `\n`).
fn unescape_tag_value(value: &str) -> String {
    let mut unescaped = String::with_capacity(value.len());
    let mut chars = value.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            unescaped.push(c);
            continue;
        }

        match chars.next() {
            Some(':') => unescaped.push(';'),
            Some('s') => unescaped.push(' '),
            Some('r') => unescaped.push('\r'),
            Some('n') => unescaped.push('\n'),
            Some(other) => unescaped.push(other),
            // A lone trailing backslash is dropped
            None => {}
        }
    }

    unescaped
}
