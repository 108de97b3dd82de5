//! # Main Entry Point
//!
//! Initializes the BMI bot:
//! - Domain: Configuration, BMI formula and Types
//! - Infrastructure: Matrix, Logging
//! - Application: Conversation controller, Router, State
//! - Interface: Command Handlers
//!

mod application;
mod domain;
mod infrastructure;
mod interface;
mod strings;

use anyhow::Result;
use clap::Parser;
use matrix_sdk::{
    Client,
    config::SyncSettings,
    room::Room,
    ruma::events::room::{
        member::{MembershipState, StrippedRoomMemberEvent},
        message::{MessageType, SyncRoomMessageEvent},
    },
};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::application::router::CommandRouter;
use crate::application::state::BotState;
use crate::domain::config::AppConfig;
use crate::domain::traits::ChatProvider;
use crate::infrastructure::matrix::MatrixService;
use crate::strings::logs;

#[derive(Parser, Debug)]
#[command(name = "bmi-bot", about = "⚖️ Matrix bot that calculates your Body Mass Index", version)]
struct Cli {
    /// Path to the YAML configuration file
    #[arg(short, long, env = "BMI_BOT_CONFIG", default_value = "data/config.yaml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 1. Load Configuration
    let config = AppConfig::load(&cli.config)?;

    // 2. Logging Setup
    let _guard = infrastructure::logging::init(&config.logging)?;
    tracing::info!("{}", logs::STARTING);
    tracing::info!("{}", logs::config_loaded(&config.services.matrix.username));

    // 3. Matrix Setup
    let client = Client::builder()
        .homeserver_url(&config.services.matrix.homeserver)
        .build()
        .await?;

    client
        .matrix_auth()
        .login_username(
            &config.services.matrix.username,
            &config.services.matrix.password,
        )
        .initial_device_display_name("bmi-bot")
        .send()
        .await?;

    tracing::info!("{}", logs::logged_in(&config.services.matrix.username));

    if let Some(name) = &config.services.matrix.display_name {
        tracing::info!("{}", logs::setting_display_name(name));
        if let Err(e) = client.account().set_display_name(Some(name.as_str())).await {
            tracing::warn!("{}", logs::set_display_name_fail(&e.to_string()));
        }
    }

    // 4. Event Handlers
    let state = Arc::new(Mutex::new(BotState::default()));
    let start_time = std::time::SystemTime::now();
    let ignore_backlog = config.bot.ignore_backlog;

    // Idle Conversation Sweep
    let sweep_state = state.clone();
    let max_idle = std::time::Duration::from_secs(config.bot.idle_timeout_minutes * 60);
    tokio::spawn(async move {
        loop {
            tokio::time::sleep(std::time::Duration::from_secs(60)).await;
            let evicted = sweep_state.lock().await.evict_idle(max_idle);
            if evicted > 0 {
                tracing::info!("{}", logs::evicted_idle(evicted));
            }
        }
    });

    client.add_event_handler(move |ev: SyncRoomMessageEvent, room: Room| {
        let state = state.clone();

        async move {
            let Some(original_msg) = ev.as_original() else {
                return;
            };

            // Ignore events older than start_time
            if ignore_backlog {
                let ts = ev.origin_server_ts();
                let event_time =
                    std::time::UNIX_EPOCH + std::time::Duration::from_millis(ts.get().into());
                if event_time < start_time {
                    return;
                }
            }

            if let MessageType::Text(text_content) = &original_msg.content.msgtype {
                let body = &text_content.body;
                if original_msg.sender == room.own_user_id() {
                    return;
                }
                tracing::info!("Received message from {}: \n{}", original_msg.sender, body);

                let chat = MatrixService::new(room);
                let router = CommandRouter::new(state);

                let _ = chat.typing(true).await;
                if let Err(e) = router
                    .route(&chat, body, original_msg.sender.as_str())
                    .await
                {
                    tracing::error!("{}", logs::route_failed(&e.to_string()));
                }
                let _ = chat.typing(false).await;
            }
        }
    });

    // Handle Invites
    if config.bot.auto_join {
        client.add_event_handler(|ev: StrippedRoomMemberEvent, room: Room| async move {
            if ev.content.membership == MembershipState::Invite {
                tracing::info!("{}", logs::invite_received(room.room_id().as_str()));
                match room.join().await {
                    Ok(()) => tracing::info!("{}", logs::JOIN_INVITE_SUCCESS),
                    Err(e) => tracing::error!("{}", logs::join_invite_fail(&e.to_string())),
                }
            }
        });
    }

    // 5. Sync until shutdown
    tracing::info!("{}", logs::SYNC_LOOP_START);
    tokio::select! {
        res = client.sync(SyncSettings::default()) => {
            if let Err(e) = res {
                tracing::error!("{}", logs::sync_loop_fail(&e.to_string()));
            }
        }
        res = tokio::signal::ctrl_c() => {
            match res {
                Ok(()) => tracing::info!("{}", logs::SHUTDOWN),
                Err(e) => tracing::error!("{}", logs::shutdown_fail(&e.to_string())),
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_default_config_path() {
        let cli = Cli::try_parse_from(["bmi-bot"]).unwrap();
        if std::env::var("BMI_BOT_CONFIG").is_err() {
            assert_eq!(cli.config, PathBuf::from("data/config.yaml"));
        }
    }

    #[test]
    fn test_cli_config_flag() {
        let cli = Cli::try_parse_from(["bmi-bot", "--config", "/etc/bmi.yaml"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("/etc/bmi.yaml"));
    }
}
