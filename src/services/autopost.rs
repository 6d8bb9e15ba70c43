//! Per-channel automatic image toggle. Lives for the process lifetime only.
use std::collections::HashMap;

use serenity::model::id::ChannelId;
use tokio::sync::RwLock;

/// Result of a toggle request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Changed,
    /// The channel was already in the requested state.
    Unchanged,
}

/// Channels where any non-command message is treated as an image query.
/// Absent keys mean disabled.
#[derive(Debug, Default)]
pub struct AutoPostChannels {
    channels: RwLock<HashMap<ChannelId, bool>>,
}

impl AutoPostChannels {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn is_enabled(&self, channel_id: ChannelId) -> bool {
        self.channels
            .read()
            .await
            .get(&channel_id)
            .copied()
            .unwrap_or(false)
    }

    /// Moves the channel to `enabled`. The comparison and the write share one lock guard.
    pub async fn set(&self, channel_id: ChannelId, enabled: bool) -> Toggle {
        let mut channels = self.channels.write().await;
        let current = channels.get(&channel_id).copied().unwrap_or(false);
        if current == enabled {
            return Toggle::Unchanged;
        }
        channels.insert(channel_id, enabled);
        Toggle::Changed
    }
}
