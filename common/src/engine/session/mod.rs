pub mod snake_session;

use std::future::Future;

use crate::games::snake::{GameOverNotification, SnakeSnapshot};

/// Presentation side of a session: receives one snapshot per executed step
/// or accepted control intent, and a summary when the game ends.
pub trait GameBroadcaster: Send + Sync + Clone + 'static {
    fn broadcast_state(&self, snapshot: SnakeSnapshot) -> impl Future<Output = ()> + Send;

    fn broadcast_game_over(
        &self,
        notification: GameOverNotification,
    ) -> impl Future<Output = ()> + Send;
}
