//! This module implements `enableautoimages` and `disableautoimages`.

use super::reply::ReplyTarget;
use crate::AppState;
use crate::responses::{CommandStyle, toggle_message};
use crate::services::autopost::{AutoPostChannels, Toggle};
use crate::services::safety::ChannelKind;
use serenity::builder::CreateCommand;
use serenity::model::application::CommandInteraction;
use serenity::model::channel::Message;
use serenity::model::id::ChannelId;
use serenity::prelude::*;
use tracing::info;

pub fn register_enable() -> CreateCommand {
    CreateCommand::new("enableautoimages")
        .description("Enables automatic images in the current channel")
}

pub fn register_disable() -> CreateCommand {
    CreateCommand::new("disableautoimages")
        .description("Disables automatic images in the current channel")
}

/// Applies the toggle and returns the confirmation text. Only real transitions are logged.
pub async fn apply_toggle(
    channels: &AutoPostChannels,
    channel_id: ChannelId,
    channel_name: &str,
    enabled: bool,
    style: CommandStyle,
) -> String {
    let toggle = channels.set(channel_id, enabled).await;
    if toggle == Toggle::Changed {
        let state = if enabled { "enabled" } else { "disabled" };
        info!(channel = %channel_name, channel_id = %channel_id, "Automatic images were {state}");
    }
    toggle_message(enabled, toggle, style)
}

async fn run(
    ctx: &Context,
    app_state: &AppState,
    target: ReplyTarget<'_>,
    enabled: bool,
    style: CommandStyle,
) {
    let channel_id = target.channel_id();
    let channel = ChannelKind::resolve(ctx, channel_id).await;
    let text = apply_toggle(
        &app_state.auto_channels,
        channel_id,
        &channel.display_name(),
        enabled,
        style,
    )
    .await;
    target.send_text(ctx, text).await;
}

pub async fn run_slash(
    ctx: &Context,
    interaction: &CommandInteraction,
    app_state: &AppState,
    enabled: bool,
) {
    run(
        ctx,
        app_state,
        ReplyTarget::Interaction(interaction),
        enabled,
        CommandStyle::Slash,
    )
    .await;
}

pub async fn run_prefix(ctx: &Context, msg: &Message, app_state: &AppState, enabled: bool) {
    run(
        ctx,
        app_state,
        ReplyTarget::Channel(msg.channel_id),
        enabled,
        CommandStyle::Prefix,
    )
    .await;
}
