use snake_common::engine::session::GameBroadcaster;
use snake_common::games::snake::{GameOverNotification, GameStatus, SnakeSnapshot, WallCollisionMode};

/// Prints every snapshot as a text frame to stdout.
#[derive(Clone, Default)]
pub struct ConsoleBroadcaster;

impl ConsoleBroadcaster {
    pub fn new() -> Self {
        Self
    }
}

pub fn status_line(snapshot: &SnakeSnapshot) -> String {
    let status = match snapshot.status {
        GameStatus::Idle => "IDLE (enter to start)",
        GameStatus::Playing => "PLAYING",
        GameStatus::Paused => "PAUSED",
        GameStatus::GameOver => "GAME OVER",
    };
    let mode = match snapshot.mode {
        WallCollisionMode::Death => "walls",
        WallCollisionMode::WrapAround => "wrap",
    };
    format!(
        "{} | score {} | best {} | length {} | {}ms | {}",
        status,
        snapshot.score,
        snapshot.high_score,
        snapshot.snake.len(),
        snapshot.tick_interval.as_millis(),
        mode
    )
}

impl GameBroadcaster for ConsoleBroadcaster {
    async fn broadcast_state(&self, snapshot: SnakeSnapshot) {
        println!("{}{}", snapshot.render_text(), status_line(&snapshot));
    }

    async fn broadcast_game_over(&self, notification: GameOverNotification) {
        if notification.new_high_score {
            println!("Game over ({:?}). New high score: {}!", notification.reason, notification.score);
        } else {
            println!(
                "Game over ({:?}). Score {}, best {}",
                notification.reason, notification.score, notification.high_score
            );
        }
    }
}
