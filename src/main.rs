use anyhow::Context as _;
use autoreact::adapters::{DiscordService, JsonFileSettingsStore, SerenityDiscordService};
use autoreact::params::Params;
use autoreact::reactor::{commands, AutoReactor, ReactionDispatcher};
use std::sync::{Arc, OnceLock};
use std::time::Duration;
use tracing::{error, info};

use serenity::async_trait;
use serenity::model::channel::Message;
use serenity::model::gateway::Ready;
use serenity::model::id::UserId;
use serenity::prelude::*;

struct Handler {
    reactor: AutoReactor<SerenityDiscordService, JsonFileSettingsStore>,
    service: Arc<SerenityDiscordService>,
    command_prefix: String,
    // Current account id, initialized in ready event
    current_user: OnceLock<UserId>,
}

impl Handler {
    fn new(params: &Params) -> anyhow::Result<Handler> {
        let http = Arc::new(serenity::http::Http::new(&params.discord_token));
        let service = Arc::new(SerenityDiscordService::new(http));

        let dispatcher = Arc::new(ReactionDispatcher::new(
            Arc::clone(&service),
            Duration::from_millis(params.min_reaction_delay_ms),
        ));

        let store = JsonFileSettingsStore::new(&params.settings_path);
        let reactor = AutoReactor::new(store, dispatcher, params.default_emoji.clone())?;

        Ok(Handler {
            reactor,
            service,
            command_prefix: params.command_prefix.clone(),
            current_user: OnceLock::new(),
        })
    }
}

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, _: Context, ready: Ready) {
        let _ = self.current_user.set(ready.user.id);

        info!(
            display_name = %ready.user.display_name(),
            user_id = %ready.user.id,
            "Bot is connected"
        );
        info!(
            install_url = %format!("https://discord.com/oauth2/authorize?client_id={}&scope=bot", ready.application.id),
            "Bot install URL available"
        );
    }

    async fn message(&self, _: Context, message: Message) {
        // Don't process anything until ready has told us who we are
        let Some(current_user) = self.current_user.get() else {
            return;
        };

        // Skip our own messages, including command confirmations
        if message.author.id == *current_user {
            return;
        }

        if let Some(command) = commands::parse(&self.command_prefix, &message.content) {
            let reply = self.reactor.handle_command(message.channel_id, command);
            if let Err(err) = self
                .service
                .send_reply(message.channel_id, message.id, &reply)
                .await
            {
                error!(?err, channel_id = %message.channel_id, "Failed to send command confirmation");
            }
        }

        self.reactor.on_message(&message);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file if it exists
    let _ = dotenvy::dotenv();

    // Initialize tracing subscriber for structured logging
    // Default: autoreact=info, serenity=warn (suppress serenity's normal operation logs)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "autoreact=info,serenity=warn".into()),
        )
        .init();

    // Display startup banner with version information
    info!(
        name = env!("CARGO_PKG_NAME"),
        version = env!("CARGO_PKG_VERSION"),
        description = env!("CARGO_PKG_DESCRIPTION"),
        "Starting application"
    );

    let params = Params::new()?;
    info!(?params, "Application parameters loaded");

    // MESSAGE_CONTENT is required to parse configuration commands
    let intents = GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;

    // Create a new instance of the Client, logging in as a bot
    let mut client = Client::builder(&params.discord_token, intents)
        .event_handler(Handler::new(&params)?)
        .await
        .context("Creating Discord Client")?;

    // Start listening for events by starting a single shard
    client
        .start_autosharded()
        .await
        .context("Running Discord Client")
}
