//! Safe-search level derived from channel metadata.
//!
//! Messages and interactions expose different channel shapes (guild text channels carry an
//! NSFW flag and a name, DMs carry a recipient). Both are folded into [`ChannelKind`] once, and
//! everything downstream reads that instead of probing serenity types.

use serenity::model::channel::Channel;
use serenity::model::id::ChannelId;
use serenity::prelude::Context;

/// Content filter sent to the search provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SafetyLevel {
    Restricted,
    Relaxed,
}

impl SafetyLevel {
    /// Provider-side value of the `safe` parameter.
    pub fn as_param(self) -> &'static str {
        match self {
            Self::Restricted => "high",
            Self::Relaxed => "off",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChannelKind {
    Guild { name: String, nsfw: bool },
    Direct { recipient: String },
    /// Channel metadata could not be fetched.
    Unknown,
}

impl From<&Channel> for ChannelKind {
    fn from(channel: &Channel) -> Self {
        match channel {
            Channel::Guild(guild) => Self::Guild {
                name: guild.name.clone(),
                nsfw: guild.nsfw,
            },
            Channel::Private(private) => Self::Direct {
                recipient: private.recipient.name.clone(),
            },
            _ => Self::Unknown,
        }
    }
}

impl ChannelKind {
    /// Looks the channel up through the cache (falling back to HTTP). Lookup failures degrade to
    /// [`ChannelKind::Unknown`], which classifies as restricted.
    pub async fn resolve(ctx: &Context, channel_id: ChannelId) -> Self {
        match channel_id.to_channel(ctx).await {
            Ok(channel) => Self::from(&channel),
            Err(e) => {
                tracing::debug!(target: "safety", channel_id = %channel_id, error = ?e, "channel lookup failed");
                Self::Unknown
            }
        }
    }

    /// Only guild channels can carry the mature-content flag.
    pub fn is_nsfw(&self) -> Option<bool> {
        match self {
            Self::Guild { nsfw, .. } => Some(*nsfw),
            _ => None,
        }
    }

    pub fn display_name(&self) -> String {
        match self {
            Self::Guild { name, .. } => name.clone(),
            Self::Direct { recipient } => format!("{recipient} DM"),
            Self::Unknown => "unknown channel".to_string(),
        }
    }
}

/// Relaxed only for channels explicitly flagged NSFW; missing information never relaxes safety.
pub fn classify(channel: &ChannelKind) -> SafetyLevel {
    match channel.is_nsfw() {
        Some(true) => SafetyLevel::Relaxed,
        _ => SafetyLevel::Restricted,
    }
}
