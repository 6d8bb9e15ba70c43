//! This module implements the `8ball` command: a canned answer illustrated with a gif.

use super::image::{post_image, string_option};
use super::reply::ReplyTarget;
use crate::AppState;
use crate::responses;
use crate::services::eightball::{answer_query, pick_response};
use serenity::builder::{CreateCommand, CreateCommandOption};
use serenity::model::application::{CommandInteraction, CommandOptionType};
use serenity::model::channel::Message;
use serenity::prelude::*;
use tracing::info;

pub fn register() -> CreateCommand {
    CreateCommand::new("8ball")
        .description("Get the magic 8-ball's response to the question")
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                "question",
                "The question to ask the magic 8-ball",
            )
            .required(true),
        )
}

async fn answer(
    ctx: &Context,
    app_state: &AppState,
    target: ReplyTarget<'_>,
    user: &str,
    question: &str,
) {
    info!(user = %user, question = %question, "User asked the magic 8-ball a question");
    let response = pick_response(app_state.images.rng());
    info!(answer = %response, "The magic 8-ball has an answer");
    post_image(ctx, app_state, target, &answer_query(response), true).await;
}

pub async fn run_slash(ctx: &Context, interaction: &CommandInteraction, app_state: &AppState) {
    let target = ReplyTarget::Interaction(interaction);
    let Some(question) = string_option(interaction, "question") else {
        target.send_text(ctx, responses::MISSING_QUESTION).await;
        return;
    };
    answer(ctx, app_state, target, &interaction.user.name, question).await;
}

pub async fn run_prefix(ctx: &Context, msg: &Message, question: &str, app_state: &AppState) {
    let target = ReplyTarget::Channel(msg.channel_id);
    if question.is_empty() {
        target.send_text(ctx, responses::MISSING_QUESTION).await;
        return;
    }
    answer(ctx, app_state, target, &msg.author.name, question).await;
}
