//! This module implements the `image` command and the shared image-posting flow used by
//! `8ball` and automatic-image channels.

use super::reply::ReplyTarget;
use crate::AppState;
use crate::responses;
use crate::services::safety::{ChannelKind, classify};
use serenity::builder::{CreateCommand, CreateCommandOption};
use serenity::model::application::{CommandInteraction, CommandOptionType};
use serenity::model::channel::Message;
use serenity::prelude::*;
use tracing::info;

pub fn register() -> CreateCommand {
    CreateCommand::new("image")
        .description("Fetches a random image from Google Images of a query")
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                "query",
                "The query to search Google Images for",
            )
            .required(true),
        )
}

/// Returns the trimmed string option `name`, or `None` when absent or blank.
pub fn string_option<'a>(interaction: &'a CommandInteraction, name: &str) -> Option<&'a str> {
    interaction
        .data
        .options
        .iter()
        .find(|opt| opt.name == name)
        .and_then(|opt| opt.value.as_str())
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

/// Classifies the channel, resolves the query and delivers exactly one reply.
pub async fn post_image(
    ctx: &Context,
    app_state: &AppState,
    target: ReplyTarget<'_>,
    query: &str,
    animated_only: bool,
) {
    target.defer(ctx).await;
    let channel = ChannelKind::resolve(ctx, target.channel_id()).await;
    let outcome = app_state
        .images
        .resolve(query, classify(&channel), animated_only)
        .await;
    target.send_outcome(ctx, &outcome).await;
}

pub async fn run_slash(ctx: &Context, interaction: &CommandInteraction, app_state: &AppState) {
    let target = ReplyTarget::Interaction(interaction);
    let Some(query) = string_option(interaction, "query") else {
        target.send_text(ctx, responses::MISSING_QUERY).await;
        return;
    };
    info!(user = %interaction.user.name, query = %query, "User requested an image as a command");
    post_image(ctx, app_state, target, query, false).await;
}

pub async fn run_prefix(ctx: &Context, msg: &Message, query: &str, app_state: &AppState) {
    let target = ReplyTarget::Channel(msg.channel_id);
    if query.is_empty() {
        target.send_text(ctx, responses::MISSING_QUERY).await;
        return;
    }
    info!(user = %msg.author.name, query = %query, "User requested an image as a command");
    post_image(ctx, app_state, target, query, false).await;
}

/// Treats a plain message in an automatic-image channel as a query.
pub async fn run_auto(ctx: &Context, msg: &Message, app_state: &AppState) {
    info!(user = %msg.author.name, query = %msg.content, "User requested an image as an automatic image");
    post_image(
        ctx,
        app_state,
        ReplyTarget::Channel(msg.channel_id),
        &msg.content,
        false,
    )
    .await;
}
