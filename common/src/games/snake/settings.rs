use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::Validate;
use super::types::{Direction, TailCollisionPolicy, WallCollisionMode};

pub const DEFAULT_FIELD_SIZE: usize = 20;
pub const DEFAULT_FOOD_REWARD: u32 = 10;
pub const DEFAULT_INITIAL_SPEED_MS: u32 = 200;
pub const DEFAULT_SPEED_DECREMENT_MS: u32 = 2;
pub const DEFAULT_MIN_SPEED_MS: u32 = 80;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnakeSettings {
    pub field_size: usize,
    pub wall_collision_mode: WallCollisionMode,
    pub tail_collision_policy: TailCollisionPolicy,
    pub initial_direction: Direction,
    pub food_reward: u32,
    pub initial_speed_ms: u32,
    pub speed_decrement_ms: u32,
    pub min_speed_ms: u32,
}

impl Default for SnakeSettings {
    fn default() -> Self {
        Self {
            field_size: DEFAULT_FIELD_SIZE,
            wall_collision_mode: WallCollisionMode::Death,
            tail_collision_policy: TailCollisionPolicy::Strict,
            initial_direction: Direction::Right,
            food_reward: DEFAULT_FOOD_REWARD,
            initial_speed_ms: DEFAULT_INITIAL_SPEED_MS,
            speed_decrement_ms: DEFAULT_SPEED_DECREMENT_MS,
            min_speed_ms: DEFAULT_MIN_SPEED_MS,
        }
    }
}

impl SnakeSettings {
    pub fn initial_speed(&self) -> Duration {
        Duration::from_millis(self.initial_speed_ms as u64)
    }

    /// Tick interval after one more food item, never below the floor.
    pub fn next_speed_ms(&self, current_ms: u32) -> u32 {
        current_ms
            .saturating_sub(self.speed_decrement_ms)
            .max(self.min_speed_ms)
    }
}

impl Validate for SnakeSettings {
    fn validate(&self) -> Result<(), String> {
        if self.field_size < 5 || self.field_size > 100 {
            return Err("field_size must be between 5 and 100".to_string());
        }
        if self.food_reward == 0 {
            return Err("food_reward must be greater than 0".to_string());
        }
        if self.min_speed_ms < 10 {
            return Err("min_speed_ms must be at least 10".to_string());
        }
        if self.initial_speed_ms < self.min_speed_ms {
            return Err("initial_speed_ms must not be below min_speed_ms".to_string());
        }
        if self.initial_speed_ms > 5000 {
            return Err("initial_speed_ms must not exceed 5000".to_string());
        }
        Ok(())
    }
}
