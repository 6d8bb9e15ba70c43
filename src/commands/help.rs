//! This module implements the `help` command and the suggestion shown for mistyped image commands.

use super::reply::ReplyTarget;
use crate::responses::{CommandStyle, help_message};
use serenity::builder::CreateCommand;
use serenity::model::application::CommandInteraction;
use serenity::model::channel::Message;
use serenity::prelude::*;

/// Names of every command the bot answers to, in both prefix and slash form.
pub fn all_command_names() -> Vec<&'static str> {
    vec!["image", "8ball", "enableautoimages", "disableautoimages", "help"]
}

pub fn register() -> CreateCommand {
    CreateCommand::new("help").description("Lists all of the bot's commands")
}

pub async fn run_slash(ctx: &Context, interaction: &CommandInteraction) {
    ReplyTarget::Interaction(interaction)
        .send_text(ctx, help_message(CommandStyle::Slash, false))
        .await;
}

/// `suggestion` is set when the user typed an unknown command that looks like an image request.
pub async fn run_prefix(ctx: &Context, msg: &Message, suggestion: bool) {
    ReplyTarget::Channel(msg.channel_id)
        .send_text(ctx, help_message(CommandStyle::Prefix, suggestion))
        .await;
}
