use std::path::Path;
use std::process;
use std::sync::Arc;

use serenity::model::gateway::GatewayIntents;
use serenity::prelude::*;
use tracing::{error, info};

use image_bot::AppState;
use image_bot::config::BotConfig;
use image_bot::constants::LOG_FILE_NAME;
use image_bot::handler::Handler;
use image_bot::logging::init_logging;
use image_bot::search::GoogleImageSearch;

#[tokio::main]
async fn main() {
    // A missing .env file is fine; variables may come from the environment itself.
    dotenv::dotenv().ok();
    init_logging(Path::new(LOG_FILE_NAME));

    let config = match BotConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "One or more of the required API keys were not found. Have you set the correct environment variables?");
            process::exit(1);
        }
    };

    let search = match GoogleImageSearch::new(config.cse_id.clone(), config.api_key.clone()) {
        Ok(search) => search,
        Err(e) => {
            error!(error = %e, "Could not create the image search client");
            process::exit(1);
        }
    };
    let app_state = Arc::new(AppState::new(Arc::new(search)));

    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;

    let mut client = match Client::builder(&config.discord_token, intents)
        .event_handler(Handler)
        .await
    {
        Ok(client) => client,
        Err(e) => {
            error!(error = ?e, "Error creating the Discord client");
            process::exit(1);
        }
    };

    {
        let mut data = client.data.write().await;
        data.insert::<AppState>(app_state);
    }

    info!("Connecting to Discord");
    if let Err(why) = client.start().await {
        error!(error = ?why, "There was a connection error");
    }
}
