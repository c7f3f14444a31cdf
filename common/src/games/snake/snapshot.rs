use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::types::{Direction, GameEndReason, GameStatus, Point, WallCollisionMode};

/// Owned copy of everything a presentation layer reads after a step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnakeSnapshot {
    pub tick: u64,
    pub field_size: usize,
    pub status: GameStatus,
    pub mode: WallCollisionMode,
    pub snake: Vec<Point>,
    pub direction: Direction,
    pub food: Option<Point>,
    pub score: u32,
    pub high_score: u32,
    pub tick_interval: Duration,
    pub end_reason: Option<GameEndReason>,
}

impl SnakeSnapshot {
    pub fn head(&self) -> Option<Point> {
        self.snake.first().copied()
    }

    /// Plain text frame: `@` head, `o` body, `*` food, `.` empty.
    pub fn render_text(&self) -> String {
        let mut rows = vec![vec!['.'; self.field_size]; self.field_size];
        let mut put = |p: Point, c: char| {
            if p.x >= 0 && p.y >= 0 && (p.x as usize) < self.field_size && (p.y as usize) < self.field_size {
                rows[p.y as usize][p.x as usize] = c;
            }
        };

        if let Some(food) = self.food {
            put(food, '*');
        }
        for (i, segment) in self.snake.iter().enumerate() {
            put(*segment, if i == 0 { '@' } else { 'o' });
        }

        let mut out = String::with_capacity((self.field_size + 1) * self.field_size);
        for row in rows {
            out.extend(row);
            out.push('\n');
        }
        out
    }
}

/// Sent once when a game reaches `GameStatus::GameOver`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameOverNotification {
    pub score: u32,
    pub high_score: u32,
    pub new_high_score: bool,
    pub reason: GameEndReason,
    pub ticks: u64,
}
