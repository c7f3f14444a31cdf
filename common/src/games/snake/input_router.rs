use super::game_state::SnakeGameEngine;
use super::types::{Direction, WallCollisionMode};

/// A discrete request coming from whatever input source drives the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Turn(Direction),
    TogglePause,
    Start,
    Reset,
    SetMode(WallCollisionMode),
    CycleMode,
}

/// Applies intents to an engine. Every method reports whether the intent
/// changed anything; rejected intents are silently dropped.
pub struct InputRouter;

impl InputRouter {
    pub fn on_direction(engine: &mut SnakeGameEngine, requested: Direction) -> bool {
        engine.request_direction(requested)
    }

    pub fn on_toggle(engine: &mut SnakeGameEngine) -> bool {
        engine.toggle_pause()
    }

    pub fn route(engine: &mut SnakeGameEngine, intent: Intent) -> bool {
        match intent {
            Intent::Turn(direction) => Self::on_direction(engine, direction),
            Intent::TogglePause => Self::on_toggle(engine),
            Intent::Start => engine.start(),
            Intent::Reset => engine.reset(),
            Intent::SetMode(mode) => engine.set_mode(mode),
            Intent::CycleMode => {
                let next = engine.mode().toggled();
                engine.set_mode(next)
            }
        }
    }
}

/// Maps key names to intents. Arrow keys and WASD share the four directions.
pub struct KeyBindings;

impl KeyBindings {
    pub fn intent_for_key(key: &str) -> Option<Intent> {
        if key == " " {
            return Some(Intent::TogglePause);
        }
        let key = key.trim();

        match key.to_ascii_lowercase().as_str() {
            "up" | "arrowup" | "w" => Some(Intent::Turn(Direction::Up)),
            "down" | "arrowdown" | "s" => Some(Intent::Turn(Direction::Down)),
            "left" | "arrowleft" | "a" => Some(Intent::Turn(Direction::Left)),
            "right" | "arrowright" | "d" => Some(Intent::Turn(Direction::Right)),
            "space" | "p" | "pause" => Some(Intent::TogglePause),
            "enter" | "start" => Some(Intent::Start),
            "r" | "reset" => Some(Intent::Reset),
            "m" | "mode" => Some(Intent::CycleMode),
            "wrap" => Some(Intent::SetMode(WallCollisionMode::WrapAround)),
            "walls" => Some(Intent::SetMode(WallCollisionMode::Death)),
            _ => None,
        }
    }
}
