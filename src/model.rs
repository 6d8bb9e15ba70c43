//! Shared state stored in serenity's type map and handed to every command handler.

use std::sync::Arc;

use serenity::prelude::{Context, TypeMapKey};

use crate::search::ImageSearch;
use crate::services::autopost::AutoPostChannels;
use crate::services::image::ImageResolver;
use crate::services::random::{RandomSource, ThreadRandom};

/// The central, shared state of the bot. Held behind an `Arc`; interior state is synchronized
/// per field so handlers for different events can run concurrently.
pub struct AppState {
    /// Image pipeline, including the process-wide cooldown.
    pub images: ImageResolver,
    /// Channels with automatic images switched on.
    pub auto_channels: AutoPostChannels,
}

impl AppState {
    pub fn new(search: Arc<dyn ImageSearch>) -> Self {
        Self::with_rng(search, Arc::new(ThreadRandom))
    }

    pub fn with_rng(search: Arc<dyn ImageSearch>, rng: Arc<dyn RandomSource>) -> Self {
        Self {
            images: ImageResolver::new(search, rng),
            auto_channels: AutoPostChannels::new(),
        }
    }

    pub async fn from_ctx(ctx: &Context) -> Option<Arc<Self>> {
        ctx.data.read().await.get::<AppState>().cloned()
    }
}

impl TypeMapKey for AppState {
    type Value = Arc<AppState>;
}
