//! Console rendition of the Hilo bot: stdin is the chat, stdout is the
//! bot's replies.
//!
//! Commands:
//! - `play`: start a game with the seeded settings
//! - any number: a guess while a game is running
//! - `quit`: exit
//!
//! Run with `RUST_LOG=hilo_game=debug` to watch the session lifecycle.

use std::sync::Arc;

use hilo::prelude::*;
use tokio::io::{AsyncBufReadExt, BufReader};

/// The single local player.
const PLAYER: UserId = UserId(1);

/// Settings the demo seeds instead of a settings menu.
fn demo_settings() -> StoredSettings {
    StoredSettings {
        range_start: Some(1),
        range_end: Some(100),
        time_limit_secs: Some(120),
        attempts: Some(7),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let store = Arc::new(MemoryStore::new());
    store.save_settings(PLAYER, demo_settings()).await?;

    let hub = GameHub::new(Arc::clone(&store), Arc::new(ConsoleNotifier));
    let bot = Dispatcher::new(hub);

    println!("hilo console demo: range 1..=100, 7 attempts, 120 s limit");
    println!("type `play` to start, a number to guess, `quit` to exit");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let event = match line.trim() {
            "" => continue,
            "quit" => break,
            "play" => InboundEvent::play(PLAYER),
            text => InboundEvent::text(PLAYER, text),
        };
        bot.handle(event).await?;
    }

    let (won, lost) = store.tally(PLAYER).await?;
    println!("thanks for playing: {won} won, {lost} lost");
    Ok(())
}
