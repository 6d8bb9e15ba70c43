//! Delivery of replies to either a channel (prefix commands, auto images) or a slash interaction.

use serenity::builder::{
    CreateAttachment, CreateInteractionResponse, CreateInteractionResponseFollowup,
    CreateInteractionResponseMessage, CreateMessage,
};
use serenity::model::application::CommandInteraction;
use serenity::model::id::ChannelId;
use serenity::prelude::*;
use tracing::{error, warn};

use crate::responses::outcome_message;
use crate::services::image::ImageOutcome;

#[derive(Clone, Copy)]
pub enum ReplyTarget<'a> {
    Channel(ChannelId),
    Interaction(&'a CommandInteraction),
}

impl ReplyTarget<'_> {
    pub fn channel_id(&self) -> ChannelId {
        match self {
            Self::Channel(id) => *id,
            Self::Interaction(interaction) => interaction.channel_id,
        }
    }

    /// Immediate text reply. For interactions this is the initial response, so it must not
    /// follow [`ReplyTarget::defer`].
    pub async fn send_text(&self, ctx: &Context, text: impl Into<String>) {
        let text = text.into();
        let result = match self {
            Self::Channel(id) => id.say(&ctx.http, text).await.map(|_| ()),
            Self::Interaction(interaction) => {
                let message = CreateInteractionResponseMessage::new().content(text);
                interaction
                    .create_response(&ctx.http, CreateInteractionResponse::Message(message))
                    .await
            }
        };
        if let Err(e) = result {
            error!(target: "reply", channel_id = %self.channel_id(), error = ?e, "Failed to send reply");
        }
    }

    /// Acknowledges a slash command ahead of a slow search. No-op for channel targets.
    pub async fn defer(&self, ctx: &Context) {
        if let Self::Interaction(interaction) = self
            && let Err(e) = interaction.defer(&ctx.http).await
        {
            warn!(target: "reply", error = ?e, "defer failed (already acknowledged?)");
        }
    }

    /// Sends the result of an image request. Interactions must have been deferred first.
    /// A found image goes out as an attachment; if it cannot be fetched or the upload is
    /// rejected, the outcome text (the bare link) is sent instead.
    pub async fn send_outcome(&self, ctx: &Context, outcome: &ImageOutcome) {
        if let ImageOutcome::Found(url) = outcome
            && let Some(file) = download(ctx, url).await
        {
            match self.send_file(ctx, file).await {
                Ok(()) => return,
                Err(e) => {
                    warn!(target: "reply", channel_id = %self.channel_id(), error = ?e, "Upload rejected; sending link instead");
                }
            }
        }

        if let Err(e) = self.send_followup_text(ctx, outcome_message(outcome)).await {
            error!(target: "reply", channel_id = %self.channel_id(), error = ?e, "Failed to send image reply");
        }
    }

    async fn send_file(&self, ctx: &Context, file: CreateAttachment) -> serenity::Result<()> {
        match self {
            Self::Channel(id) => id
                .send_message(&ctx.http, CreateMessage::new().add_file(file))
                .await
                .map(|_| ()),
            Self::Interaction(interaction) => interaction
                .create_followup(
                    &ctx.http,
                    CreateInteractionResponseFollowup::new().add_file(file),
                )
                .await
                .map(|_| ()),
        }
    }

    async fn send_followup_text(&self, ctx: &Context, text: String) -> serenity::Result<()> {
        match self {
            Self::Channel(id) => id
                .send_message(&ctx.http, CreateMessage::new().content(text))
                .await
                .map(|_| ()),
            Self::Interaction(interaction) => interaction
                .create_followup(
                    &ctx.http,
                    CreateInteractionResponseFollowup::new().content(text),
                )
                .await
                .map(|_| ()),
        }
    }
}

// Falls back to posting the link when the file cannot be fetched.
async fn download(ctx: &Context, url: &str) -> Option<CreateAttachment> {
    match CreateAttachment::url(&ctx.http, url).await {
        Ok(file) => Some(file),
        Err(e) => {
            warn!(target: "reply", url = %url, error = ?e, "Could not attach image; sending link instead");
            None
        }
    }
}
