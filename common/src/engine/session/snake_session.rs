use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, mpsc};
use tokio::task::{self, JoinHandle};
use tokio::time::{Instant, Interval, MissedTickBehavior, interval_at};

use crate::games::SessionRng;
use crate::games::snake::{
    GameStatus, InputRouter, Intent, SnakeGameEngine, SnakeSettings, StepOutcome,
};
use crate::high_score::HighScoreStore;
use crate::log;
use super::GameBroadcaster;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionCommand {
    Intent(Intent),
    Quit,
}

#[derive(Clone)]
pub struct SnakeSessionState {
    pub session_id: String,
    pub engine: Arc<Mutex<SnakeGameEngine>>,
}

impl SnakeSessionState {
    pub fn create(
        session_id: String,
        settings: SnakeSettings,
        high_score_store: Box<dyn HighScoreStore>,
        rng: SessionRng,
    ) -> Self {
        let engine = SnakeGameEngine::new(settings, high_score_store, rng);
        Self {
            session_id,
            engine: Arc::new(Mutex::new(engine)),
        }
    }
}

pub struct SnakeSession;

impl SnakeSession {
    /// Drives the engine until `Quit` arrives or every command sender is gone.
    ///
    /// The tick timer is only polled while the game is playing. It is rebuilt
    /// whenever play (re)starts or the engine speed changes, so a new interval
    /// applies from the next tick on. Beaten records are written on the
    /// blocking pool after the engine lock is released.
    pub async fn run(
        session_state: SnakeSessionState,
        mut command_rx: mpsc::UnboundedReceiver<SessionCommand>,
        broadcaster: impl GameBroadcaster,
    ) {
        let session_id = session_state.session_id.clone();

        let (mut playing, mut current_interval, initial_snapshot) = {
            let engine = session_state.engine.lock().await;
            (
                engine.status() == GameStatus::Playing,
                engine.settings().initial_speed(),
                engine.snapshot(),
            )
        };
        let mut tick_timer = create_tick_timer(current_interval);
        let mut high_score_writes: Vec<JoinHandle<()>> = Vec::new();
        broadcaster.broadcast_state(initial_snapshot).await;

        log!("[session:{}] started", session_id);

        loop {
            tokio::select! {
                command = command_rx.recv() => {
                    let intent = match command {
                        Some(SessionCommand::Intent(intent)) => intent,
                        Some(SessionCommand::Quit) | None => break,
                    };

                    let mut engine = session_state.engine.lock().await;
                    let changed = InputRouter::route(&mut engine, intent);
                    let now_playing = engine.status() == GameStatus::Playing;

                    if now_playing && !playing {
                        current_interval = engine.speed();
                        tick_timer = create_tick_timer(current_interval);
                    }
                    playing = now_playing;

                    let snapshot = (changed && !matches!(intent, Intent::Turn(_)))
                        .then(|| engine.snapshot());
                    drop(engine);

                    if let Some(snapshot) = snapshot {
                        broadcaster.broadcast_state(snapshot).await;
                    }
                }
                _ = tick_timer.tick(), if playing => {
                    let mut engine = session_state.engine.lock().await;
                    let outcome = engine.step();
                    let snapshot = engine.snapshot();
                    let notification = match outcome {
                        StepOutcome::GameOver(_) => engine.game_over_notification(),
                        _ => None,
                    };
                    let pending_high_score = engine.take_pending_high_score();
                    let speed = engine.speed();
                    playing = engine.status() == GameStatus::Playing;
                    drop(engine);

                    if let Some(pending) = pending_high_score {
                        high_score_writes.retain(|handle| !handle.is_finished());
                        high_score_writes.push(task::spawn_blocking(move || pending.persist()));
                    }

                    broadcaster.broadcast_state(snapshot).await;
                    if let Some(notification) = notification {
                        broadcaster.broadcast_game_over(notification).await;
                    }

                    if speed != current_interval {
                        current_interval = speed;
                        tick_timer = create_tick_timer(current_interval);
                    }
                }
            }
        }

        for handle in high_score_writes {
            if let Err(e) = handle.await {
                log!("[session:{}] high score write failed: {}", session_id, e);
            }
        }

        log!("[session:{}] stopped", session_id);
    }
}

fn create_tick_timer(period: Duration) -> Interval {
    let mut timer = interval_at(Instant::now() + period, period);
    timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
    timer
}
