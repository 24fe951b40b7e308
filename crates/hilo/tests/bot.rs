//! End-to-end tests through the dispatcher: raw inbound events in,
//! notices out.

use std::sync::Arc;

use hilo::prelude::*;
use tokio::sync::mpsc;

fn uid(id: i64) -> UserId {
    UserId(id)
}

fn ready_settings() -> StoredSettings {
    StoredSettings {
        range_start: Some(1),
        range_end: Some(10),
        time_limit_secs: Some(3600),
        attempts: Some(4),
    }
}

type Bot = Dispatcher<MemoryStore, ChannelNotifier, FixedTarget>;
type NoticeRx = mpsc::UnboundedReceiver<(UserId, Notice)>;

async fn bot_with_target(target: i64) -> (Arc<MemoryStore>, Bot, NoticeRx) {
    let store = Arc::new(MemoryStore::new());
    let (notifier, rx) = ChannelNotifier::new();
    let hub = GameHub::with_target_source(
        Arc::clone(&store),
        Arc::new(notifier),
        FixedTarget(target),
    );
    (store, Dispatcher::new(hub), rx)
}

async fn next_notice(rx: &mut NoticeRx) -> Notice {
    rx.recv().await.expect("notice expected").1
}

#[tokio::test(start_paused = true)]
async fn test_full_game_through_dispatcher() {
    let (store, bot, mut rx) = bot_with_target(7).await;
    store.save_settings(uid(1), ready_settings()).await.unwrap();

    bot.handle(InboundEvent::play(uid(1))).await.unwrap();
    assert_eq!(
        next_notice(&mut rx).await,
        Notice::GameStarted { attempts_left: 4 }
    );

    bot.handle(InboundEvent::text(uid(1), "3")).await.unwrap();
    assert_eq!(
        next_notice(&mut rx).await,
        Notice::TargetHigher { attempts_left: 3 }
    );

    bot.handle(InboundEvent::text(uid(1), "9")).await.unwrap();
    assert_eq!(
        next_notice(&mut rx).await,
        Notice::TargetLower { attempts_left: 2 }
    );

    bot.handle(InboundEvent::text(uid(1), "7")).await.unwrap();
    assert!(matches!(
        next_notice(&mut rx).await,
        Notice::GameWon { attempts_used: 3, .. }
    ));

    assert_eq!(store.tally(uid(1)).await.unwrap(), (1, 0));
}

#[tokio::test(start_paused = true)]
async fn test_event_without_user_is_dropped() {
    let (store, bot, mut rx) = bot_with_target(7).await;
    store.save_settings(uid(1), ready_settings()).await.unwrap();

    let event = InboundEvent {
        user: None,
        kind: InboundKind::Play,
    };
    bot.handle(event).await.unwrap();

    // Nothing notified, nothing started.
    assert!(rx.try_recv().is_err());
    assert!(bot.hub().active_game(uid(1)).await.is_none());
    assert_eq!(store.user_state(uid(1)).await.unwrap(), UserState::Idle);
}

#[tokio::test(start_paused = true)]
async fn test_non_numeric_text_is_ignored() {
    let (store, bot, mut rx) = bot_with_target(7).await;
    store.save_settings(uid(1), ready_settings()).await.unwrap();

    bot.handle(InboundEvent::play(uid(1))).await.unwrap();
    next_notice(&mut rx).await; // GameStarted

    bot.handle(InboundEvent::text(uid(1), "seven")).await.unwrap();

    // No hint, no attempt consumed; the next real guess still sees the
    // full remaining budget.
    assert!(rx.try_recv().is_err());
    bot.handle(InboundEvent::text(uid(1), "3")).await.unwrap();
    assert_eq!(
        next_notice(&mut rx).await,
        Notice::TargetHigher { attempts_left: 3 }
    );
}

#[tokio::test(start_paused = true)]
async fn test_guess_with_no_game_is_swallowed() {
    let (store, bot, mut rx) = bot_with_target(7).await;
    store.save_settings(uid(1), ready_settings()).await.unwrap();

    bot.handle(InboundEvent::text(uid(1), "5")).await.unwrap();
    assert!(rx.try_recv().is_err());
}

#[tokio::test(start_paused = true)]
async fn test_play_without_settings_reprompts() {
    let (_store, bot, mut rx) = bot_with_target(7).await;

    // Recoverable: handled, user notified, no error.
    bot.handle(InboundEvent::play(uid(1))).await.unwrap();
    assert_eq!(next_notice(&mut rx).await, Notice::SettingsNotFound);
}

#[tokio::test(start_paused = true)]
async fn test_play_with_partial_settings_lists_missing() {
    let (store, bot, mut rx) = bot_with_target(7).await;
    store
        .save_settings(
            uid(1),
            StoredSettings {
                range_start: Some(1),
                range_end: Some(10),
                ..StoredSettings::default()
            },
        )
        .await
        .unwrap();

    bot.handle(InboundEvent::play(uid(1))).await.unwrap();
    assert_eq!(
        next_notice(&mut rx).await,
        Notice::SettingsIncomplete {
            missing: vec!["time limit".into(), "attempt count".into()],
        }
    );
}

#[tokio::test(start_paused = true)]
async fn test_double_play_is_swallowed() {
    let (store, bot, mut rx) = bot_with_target(7).await;
    store.save_settings(uid(1), ready_settings()).await.unwrap();

    bot.handle(InboundEvent::play(uid(1))).await.unwrap();
    next_notice(&mut rx).await; // GameStarted

    // Second press: ignored, same game keeps running.
    let first = bot.hub().active_game(uid(1)).await.unwrap();
    bot.handle(InboundEvent::play(uid(1))).await.unwrap();
    assert!(rx.try_recv().is_err());
    assert_eq!(bot.hub().active_game(uid(1)).await, Some(first));
}
