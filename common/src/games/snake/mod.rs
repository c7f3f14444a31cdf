mod collision;
mod entity;
mod food;
mod game_state;
mod grid;
mod input_router;
mod settings;
mod snapshot;
mod types;

pub use collision::CollisionDetector;
pub use entity::Snake;
pub use food::FoodPlacer;
pub use game_state::{SnakeGameEngine, StepOutcome};
pub use grid::FieldSize;
pub use input_router::{InputRouter, Intent, KeyBindings};
pub use settings::SnakeSettings;
pub use snapshot::{GameOverNotification, SnakeSnapshot};
pub use types::{
    CollisionKind, Direction, GameEndReason, GameStatus, Point, TailCollisionPolicy,
    WallCollisionMode,
};
