use crate::constants::COMMAND_PREFIX;
use crate::responses::unsupported_command;
use crate::{AppState, commands};
use serenity::async_trait;
use serenity::builder::{CreateInteractionResponse, CreateInteractionResponseMessage};
use serenity::client::Context;
use serenity::model::application::{Command as ApplicationCommand, Interaction};
use serenity::model::{channel::Message, gateway::Ready};
use serenity::prelude::EventHandler;
use std::str::FromStr;
use tracing::{error, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Image,
    EightBall,
    EnableAutoImages,
    DisableAutoImages,
    Help,
    Suggest,
    Unknown,
}

impl FromStr for Command {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "image" => Ok(Command::Image),
            "8ball" => Ok(Command::EightBall),
            "enableautoimages" => Ok(Command::EnableAutoImages),
            "disableautoimages" => Ok(Command::DisableAutoImages),
            "help" => Ok(Command::Help),
            other if other.contains("image") => Ok(Command::Suggest),
            _ => Ok(Command::Unknown),
        }
    }
}

/// Splits a prefixed message into the command name (up to the first space) and the trimmed
/// remainder. Returns `None` when `content` does not start with `prefix`.
pub fn parse_prefixed<'a>(content: &'a str, prefix: &str) -> Option<(&'a str, &'a str)> {
    let body = content.strip_prefix(prefix)?;
    let (name, rest) = body.split_once(' ').unwrap_or((body, ""));
    Some((name, rest.trim()))
}

/// What to do with an inbound message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route<'a> {
    /// Prefixed command with its trimmed argument.
    Command(Command, &'a str),
    /// Plain text in an automatic-image channel, used verbatim as the query.
    AutoImage(&'a str),
    Ignore,
}

/// Prefixed messages are always commands (unknown ones are ignored, never searched); other
/// text becomes an image query only when the channel has automatic images on.
pub fn route<'a>(content: &'a str, prefix: &str, auto_enabled: bool) -> Route<'a> {
    if content.is_empty() {
        return Route::Ignore;
    }
    match parse_prefixed(content, prefix) {
        Some((name, args)) => match Command::from_str(name).unwrap_or(Command::Unknown) {
            Command::Unknown => Route::Ignore,
            command => Route::Command(command, args),
        },
        None if auto_enabled => Route::AutoImage(content),
        None => Route::Ignore,
    }
}

pub struct Handler;

#[async_trait]
impl EventHandler for Handler {
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        let Interaction::Command(command) = &interaction else {
            return;
        };
        let Some(app_state) = AppState::from_ctx(&ctx).await else {
            error!("AppState missing from context; dropping interaction");
            return;
        };
        match command.data.name.as_str() {
            "image" => commands::image::run_slash(&ctx, command, &app_state).await,
            "8ball" => commands::eightball::run_slash(&ctx, command, &app_state).await,
            "enableautoimages" => {
                commands::autoimages::run_slash(&ctx, command, &app_state, true).await
            }
            "disableautoimages" => {
                commands::autoimages::run_slash(&ctx, command, &app_state, false).await
            }
            "help" => commands::help::run_slash(&ctx, command).await,
            other => {
                info!(command = %other, "Command is not supported");
                let message =
                    CreateInteractionResponseMessage::new().content(unsupported_command(other));
                command
                    .create_response(&ctx.http, CreateInteractionResponse::Message(message))
                    .await
                    .ok();
            }
        }
    }

    async fn message(&self, ctx: Context, msg: Message) {
        if msg.author.bot || msg.content.is_empty() {
            return;
        }
        let Some(app_state) = AppState::from_ctx(&ctx).await else {
            error!("AppState missing from context; dropping message");
            return;
        };

        let auto_enabled = app_state.auto_channels.is_enabled(msg.channel_id).await;
        let (command, args) = match route(&msg.content, COMMAND_PREFIX, auto_enabled) {
            Route::Command(command, args) => (command, args),
            Route::AutoImage(_) => {
                commands::image::run_auto(&ctx, &msg, &app_state).await;
                return;
            }
            Route::Ignore => return,
        };

        match command {
            Command::Image => commands::image::run_prefix(&ctx, &msg, args, &app_state).await,
            Command::EightBall => {
                commands::eightball::run_prefix(&ctx, &msg, args, &app_state).await
            }
            Command::EnableAutoImages => {
                commands::autoimages::run_prefix(&ctx, &msg, &app_state, true).await
            }
            Command::DisableAutoImages => {
                commands::autoimages::run_prefix(&ctx, &msg, &app_state, false).await
            }
            Command::Help => commands::help::run_prefix(&ctx, &msg, false).await,
            Command::Suggest => commands::help::run_prefix(&ctx, &msg, true).await,
            Command::Unknown => {}
        }
    }

    async fn ready(&self, ctx: Context, ready: Ready) {
        info!(user = %ready.user.name, "I am ready!");
        let commands_to_register = vec![
            commands::image::register(),
            commands::eightball::register(),
            commands::autoimages::register_enable(),
            commands::autoimages::register_disable(),
            commands::help::register(),
        ];
        match ApplicationCommand::set_global_commands(&ctx.http, commands_to_register).await {
            Ok(registered) => info!(count = registered.len(), "Registered slash commands"),
            Err(e) => warn!(error = ?e, "Error registering slash commands"),
        }
    }
}
