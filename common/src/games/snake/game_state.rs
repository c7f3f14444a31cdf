use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::games::SessionRng;
use crate::high_score::{HighScoreStore, PendingHighScore, SharedHighScoreStore};
use crate::log;
use super::collision::CollisionDetector;
use super::entity::Snake;
use super::food::FoodPlacer;
use super::grid::FieldSize;
use super::settings::SnakeSettings;
use super::snapshot::{GameOverNotification, SnakeSnapshot};
use super::types::{Direction, GameEndReason, GameStatus, Point, WallCollisionMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The engine was not playing; nothing changed.
    Skipped,
    Moved,
    Ate,
    GameOver(GameEndReason),
}

/// Single-player snake game: owns the snake, food, score, speed and status
/// for one session and advances them one tick at a time.
pub struct SnakeGameEngine {
    settings: SnakeSettings,
    field_size: FieldSize,
    mode: WallCollisionMode,
    snake: Snake,
    food: Option<Point>,
    score: u32,
    speed_ms: u32,
    status: GameStatus,
    end_reason: Option<GameEndReason>,
    new_high_score: bool,
    tick: u64,
    high_score: u32,
    pending_high_score: Option<u32>,
    high_score_store: SharedHighScoreStore,
    rng: SessionRng,
}

impl SnakeGameEngine {
    pub fn new(
        settings: SnakeSettings,
        high_score_store: Box<dyn HighScoreStore>,
        rng: SessionRng,
    ) -> Self {
        let field_size = FieldSize::new(settings.field_size);
        let high_score = match high_score_store.read_high_score() {
            Ok(score) => score,
            Err(e) => {
                log!("Failed to read high score, starting from 0: {}", e);
                0
            }
        };

        Self {
            mode: settings.wall_collision_mode,
            snake: Snake::new(field_size.center(), settings.initial_direction),
            food: None,
            score: 0,
            speed_ms: settings.initial_speed_ms,
            status: GameStatus::Idle,
            end_reason: None,
            new_high_score: false,
            tick: 0,
            high_score,
            pending_high_score: None,
            high_score_store: Arc::new(Mutex::new(high_score_store)),
            rng,
            field_size,
            settings,
        }
    }

    /// Begins a fresh game from `Idle` or `GameOver`.
    pub fn start(&mut self) -> bool {
        if matches!(self.status, GameStatus::Playing | GameStatus::Paused) {
            return false;
        }

        self.reset_session();
        self.status = GameStatus::Playing;

        match FoodPlacer::place(&self.field_size, &self.snake, &mut self.rng) {
            Some(food) => self.food = Some(food),
            None => {
                self.finish_game(GameEndReason::GridFull);
                return true;
            }
        }

        log!(
            "Game started: field {}x{}, mode {:?}, seed {}",
            self.field_size.size(),
            self.field_size.size(),
            self.mode,
            self.rng.seed()
        );
        true
    }

    /// Returns to `Idle` from any other state. The high score is kept.
    pub fn reset(&mut self) -> bool {
        if self.status == GameStatus::Idle {
            return false;
        }

        self.reset_session();
        self.status = GameStatus::Idle;
        true
    }

    pub fn toggle_pause(&mut self) -> bool {
        self.status = match self.status {
            GameStatus::Playing => GameStatus::Paused,
            GameStatus::Paused => GameStatus::Playing,
            GameStatus::Idle | GameStatus::GameOver => return false,
        };
        true
    }

    pub fn set_mode(&mut self, mode: WallCollisionMode) -> bool {
        if self.status == GameStatus::Playing {
            log!("Ignoring mode change to {:?} while playing", mode);
            return false;
        }

        self.mode = mode;
        true
    }

    /// Queues a turn for the next step. Reversals of the applied direction
    /// are dropped; a later request overwrites an unconsumed one.
    pub fn request_direction(&mut self, direction: Direction) -> bool {
        if self.status != GameStatus::Playing || direction.is_opposite(&self.snake.direction) {
            return false;
        }

        self.snake.pending_direction = Some(direction);
        true
    }

    pub fn step(&mut self) -> StepOutcome {
        if self.status != GameStatus::Playing {
            return StepOutcome::Skipped;
        }

        self.tick += 1;

        let direction = self.snake.pending_direction.unwrap_or(self.snake.direction);
        let raw_head = self.snake.head().moved(direction);
        let next_head = match self.mode {
            WallCollisionMode::Death => raw_head,
            WallCollisionMode::WrapAround => self.field_size.wrap(raw_head),
        };
        let ate_food = self.food == Some(next_head);

        if let Some(kind) = CollisionDetector::check(
            next_head,
            &self.snake,
            &self.field_size,
            self.mode,
            self.settings.tail_collision_policy,
            !ate_food,
        ) {
            let reason = GameEndReason::from(kind);
            self.finish_game(reason);
            return StepOutcome::GameOver(reason);
        }

        self.snake.apply_pending_direction();
        self.snake.advance(next_head, ate_food);

        if !ate_food {
            return StepOutcome::Moved;
        }

        self.score += self.settings.food_reward;
        self.speed_ms = self.settings.next_speed_ms(self.speed_ms);
        log!(
            "Ate food at ({}, {}). Score: {}, interval: {}ms",
            next_head.x,
            next_head.y,
            self.score,
            self.speed_ms
        );

        self.food = FoodPlacer::place(&self.field_size, &self.snake, &mut self.rng);
        if self.food.is_none() {
            self.finish_game(GameEndReason::GridFull);
            return StepOutcome::GameOver(GameEndReason::GridFull);
        }

        StepOutcome::Ate
    }

    fn finish_game(&mut self, reason: GameEndReason) {
        self.status = GameStatus::GameOver;
        self.end_reason = Some(reason);
        log!("Game over ({:?}) after {} ticks. Score: {}", reason, self.tick, self.score);

        if self.score > self.high_score {
            self.high_score = self.score;
            self.new_high_score = true;
            self.pending_high_score = Some(self.score);
            log!("New high score: {}", self.score);
        }
    }

    /// Hands out the record set by the last finished game, if any. The engine
    /// never writes to the store itself.
    pub fn take_pending_high_score(&mut self) -> Option<PendingHighScore> {
        self.pending_high_score
            .take()
            .map(|score| PendingHighScore::new(Arc::clone(&self.high_score_store), score))
    }

    fn reset_session(&mut self) {
        self.snake = Snake::new(self.field_size.center(), self.settings.initial_direction);
        self.food = None;
        self.score = 0;
        self.speed_ms = self.settings.initial_speed_ms;
        self.end_reason = None;
        self.new_high_score = false;
        self.tick = 0;
    }

    pub fn settings(&self) -> &SnakeSettings {
        &self.settings
    }

    pub fn field_size(&self) -> FieldSize {
        self.field_size
    }

    pub fn mode(&self) -> WallCollisionMode {
        self.mode
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn direction(&self) -> Direction {
        self.snake.direction
    }

    pub fn food(&self) -> Option<Point> {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn speed(&self) -> Duration {
        Duration::from_millis(self.speed_ms as u64)
    }

    pub fn end_reason(&self) -> Option<GameEndReason> {
        self.end_reason
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn snapshot(&self) -> SnakeSnapshot {
        SnakeSnapshot {
            tick: self.tick,
            field_size: self.field_size.size(),
            status: self.status,
            mode: self.mode,
            snake: self.snake.segments().copied().collect(),
            direction: self.snake.direction,
            food: self.food,
            score: self.score,
            high_score: self.high_score,
            tick_interval: self.speed(),
            end_reason: self.end_reason,
        }
    }

    /// Summary of the finished game; `None` unless the status is `GameOver`.
    pub fn game_over_notification(&self) -> Option<GameOverNotification> {
        if self.status != GameStatus::GameOver {
            return None;
        }

        self.end_reason.map(|reason| GameOverNotification {
            score: self.score,
            high_score: self.high_score,
            new_high_score: self.new_high_score,
            reason,
            ticks: self.tick,
        })
    }

    #[cfg(test)]
    pub(crate) fn set_snake(&mut self, snake: Snake) {
        self.snake = snake;
    }

    #[cfg(test)]
    pub(crate) fn set_food(&mut self, food: Option<Point>) {
        self.food = food;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::high_score::InMemoryHighScoreStore;
    use crate::games::snake::types::TailCollisionPolicy;

    fn create_engine(settings: SnakeSettings) -> (SnakeGameEngine, InMemoryHighScoreStore) {
        let store = InMemoryHighScoreStore::new(0);
        let engine = SnakeGameEngine::new(settings, Box::new(store.clone()), SessionRng::new(42));
        (engine, store)
    }

    fn started_engine(mode: WallCollisionMode) -> SnakeGameEngine {
        let settings = SnakeSettings { wall_collision_mode: mode, ..SnakeSettings::default() };
        let (mut engine, _) = create_engine(settings);
        assert!(engine.start());
        engine.set_food(Some(Point::new(0, 0)));
        engine
    }

    fn assert_no_overlap(engine: &SnakeGameEngine) {
        let cells: Vec<Point> = engine.snake().segments().copied().collect();
        let unique: std::collections::HashSet<Point> = cells.iter().copied().collect();
        assert_eq!(cells.len(), unique.len());
    }

    #[test]
    fn test_new_engine_is_idle() {
        let (engine, _) = create_engine(SnakeSettings::default());
        assert_eq!(engine.status(), GameStatus::Idle);
        assert_eq!(engine.food(), None);
        assert_eq!(engine.score(), 0);
    }

    #[test]
    fn test_start_resets_session() {
        let (mut engine, _) = create_engine(SnakeSettings::default());
        assert!(engine.start());

        assert_eq!(engine.status(), GameStatus::Playing);
        assert_eq!(engine.snake().len(), 1);
        assert_eq!(engine.snake().head(), Point::new(10, 10));
        assert_eq!(engine.direction(), Direction::Right);
        assert_eq!(engine.score(), 0);
        assert_eq!(engine.speed(), Duration::from_millis(200));
        let food = engine.food().unwrap();
        assert!(!engine.snake().contains(&food));
    }

    #[test]
    fn test_start_ignored_while_playing_or_paused() {
        let mut engine = started_engine(WallCollisionMode::Death);
        assert!(!engine.start());
        engine.toggle_pause();
        assert!(!engine.start());
        assert_eq!(engine.status(), GameStatus::Paused);
    }

    #[test]
    fn test_five_ticks_straight() {
        let mut engine = started_engine(WallCollisionMode::Death);
        for _ in 0..5 {
            assert_eq!(engine.step(), StepOutcome::Moved);
        }
        assert_eq!(engine.snake().head(), Point::new(15, 10));
        assert_eq!(engine.snake().len(), 1);
        assert_eq!(engine.tick(), 5);
    }

    #[test]
    fn test_step_is_noop_unless_playing() {
        let (mut engine, _) = create_engine(SnakeSettings::default());
        assert_eq!(engine.step(), StepOutcome::Skipped);

        engine.start();
        engine.toggle_pause();
        let head = engine.snake().head();
        assert_eq!(engine.step(), StepOutcome::Skipped);
        assert_eq!(engine.snake().head(), head);
        assert_eq!(engine.tick(), 0);
    }

    #[test]
    fn test_eating_grows_scores_and_speeds_up() {
        let mut engine = started_engine(WallCollisionMode::Death);
        engine.set_food(Some(Point::new(11, 10)));

        assert_eq!(engine.step(), StepOutcome::Ate);
        assert_eq!(engine.snake().len(), 2);
        assert_eq!(engine.snake().tail(), Point::new(10, 10));
        assert_eq!(engine.score(), 10);
        assert_eq!(engine.speed(), Duration::from_millis(198));

        let food = engine.food().unwrap();
        assert!(!engine.snake().contains(&food));
    }

    #[test]
    fn test_speed_never_drops_below_floor() {
        let settings = SnakeSettings { initial_speed_ms: 82, ..SnakeSettings::default() };
        let (mut engine, _) = create_engine(settings);
        engine.start();

        for i in 1..=3 {
            let head = engine.snake().head();
            engine.set_food(Some(Point::new(head.x + 1, head.y)));
            assert_eq!(engine.step(), StepOutcome::Ate);
            assert_eq!(engine.score(), 10 * i);
        }
        assert_eq!(engine.speed(), Duration::from_millis(80));
    }

    #[test]
    fn test_wall_collision_in_death_mode() {
        let mut engine = started_engine(WallCollisionMode::Death);
        engine.set_snake(Snake::new(Point::new(19, 10), Direction::Right));

        assert_eq!(engine.step(), StepOutcome::GameOver(GameEndReason::WallCollision));
        assert_eq!(engine.status(), GameStatus::GameOver);
        assert_eq!(engine.snake().head(), Point::new(19, 10));
    }

    #[test]
    fn test_wrap_around_all_edges() {
        let cases = [
            (Point::new(19, 10), Direction::Right, Point::new(0, 10)),
            (Point::new(0, 10), Direction::Left, Point::new(19, 10)),
            (Point::new(10, 0), Direction::Up, Point::new(10, 19)),
            (Point::new(10, 19), Direction::Down, Point::new(10, 0)),
        ];

        for (start, direction, expected) in cases {
            let mut engine = started_engine(WallCollisionMode::WrapAround);
            engine.set_snake(Snake::new(start, direction));
            assert_eq!(engine.step(), StepOutcome::Moved);
            assert_eq!(engine.snake().head(), expected);
            assert_eq!(engine.status(), GameStatus::Playing);
        }
    }

    #[test]
    fn test_heads_stay_in_bounds_in_death_mode() {
        let mut engine = started_engine(WallCollisionMode::Death);
        let turns = [Direction::Up, Direction::Left, Direction::Down, Direction::Right];
        let mut i = 0;
        while engine.status() == GameStatus::Playing && engine.tick() < 500 {
            if engine.tick() % 7 == 0 {
                engine.request_direction(turns[i % turns.len()]);
                i += 1;
            }
            engine.step();
            assert!(engine.field_size().in_bounds(engine.snake().head()));
            assert_no_overlap(&engine);
        }
    }

    #[test]
    fn test_reversal_is_rejected() {
        let mut engine = started_engine(WallCollisionMode::Death);
        assert!(!engine.request_direction(Direction::Left));
        engine.step();
        assert_eq!(engine.direction(), Direction::Right);
        assert_eq!(engine.snake().head(), Point::new(11, 10));
    }

    #[test]
    fn test_reversal_checked_against_applied_direction() {
        let mut engine = started_engine(WallCollisionMode::Death);
        assert!(engine.request_direction(Direction::Up));
        // Still moving right, so Left is a reversal even though Up is pending.
        assert!(!engine.request_direction(Direction::Left));
        assert!(engine.request_direction(Direction::Down));

        engine.step();
        assert_eq!(engine.direction(), Direction::Down);
        assert_eq!(engine.snake().head(), Point::new(10, 11));
    }

    #[test]
    fn test_direction_ignored_when_not_playing() {
        let (mut engine, _) = create_engine(SnakeSettings::default());
        assert!(!engine.request_direction(Direction::Up));
        engine.start();
        engine.toggle_pause();
        assert!(!engine.request_direction(Direction::Up));
    }

    #[test]
    fn test_self_collision_keeps_pre_collision_snake() {
        let mut engine = started_engine(WallCollisionMode::Death);
        engine.set_snake(Snake::from_segments(
            &[Point::new(5, 5), Point::new(4, 5), Point::new(3, 5), Point::new(2, 5), Point::new(1, 5)],
            Direction::Right,
        ));

        engine.request_direction(Direction::Down);
        assert_eq!(engine.step(), StepOutcome::Moved);
        engine.request_direction(Direction::Left);
        assert_eq!(engine.step(), StepOutcome::Moved);

        let before: Vec<Point> = engine.snake().segments().copied().collect();
        engine.request_direction(Direction::Up);
        assert_eq!(engine.step(), StepOutcome::GameOver(GameEndReason::SelfCollision));

        let after: Vec<Point> = engine.snake().segments().copied().collect();
        assert_eq!(before, after);
        assert_eq!(engine.direction(), Direction::Left);
    }

    #[test]
    fn test_tail_policy_strict_and_lenient() {
        let square = [Point::new(6, 5), Point::new(6, 6), Point::new(5, 6), Point::new(5, 5)];

        let mut strict = started_engine(WallCollisionMode::Death);
        strict.set_snake(Snake::from_segments(&square, Direction::Left));
        assert_eq!(strict.step(), StepOutcome::GameOver(GameEndReason::SelfCollision));

        let settings = SnakeSettings {
            tail_collision_policy: TailCollisionPolicy::Lenient,
            ..SnakeSettings::default()
        };
        let (mut lenient, _) = create_engine(settings);
        lenient.start();
        lenient.set_food(Some(Point::new(0, 0)));
        lenient.set_snake(Snake::from_segments(&square, Direction::Left));
        assert_eq!(lenient.step(), StepOutcome::Moved);
        assert_eq!(lenient.snake().head(), Point::new(5, 5));
        assert_eq!(lenient.snake().len(), 4);
        assert_no_overlap(&lenient);
    }

    #[test]
    fn test_high_score_written_when_beaten() {
        let store = InMemoryHighScoreStore::new(5);
        let mut engine =
            SnakeGameEngine::new(SnakeSettings::default(), Box::new(store.clone()), SessionRng::new(1));
        assert_eq!(engine.high_score(), 5);

        engine.start();
        engine.set_snake(Snake::new(Point::new(18, 10), Direction::Right));
        engine.set_food(Some(Point::new(19, 10)));
        assert_eq!(engine.step(), StepOutcome::Ate);
        assert!(matches!(engine.step(), StepOutcome::GameOver(_)));

        assert_eq!(engine.high_score(), 10);
        assert_eq!(store.writes(), 0);

        let pending = engine.take_pending_high_score().unwrap();
        assert_eq!(pending.score(), 10);
        pending.persist();
        assert_eq!(store.read_high_score(), Ok(10));
        assert_eq!(store.writes(), 1);
        assert!(engine.take_pending_high_score().is_none());

        let notification = engine.game_over_notification().unwrap();
        assert!(notification.new_high_score);
        assert_eq!(notification.score, 10);
    }

    #[test]
    fn test_high_score_untouched_when_not_beaten() {
        let store = InMemoryHighScoreStore::new(50);
        let mut engine =
            SnakeGameEngine::new(SnakeSettings::default(), Box::new(store.clone()), SessionRng::new(1));
        engine.start();
        engine.set_snake(Snake::new(Point::new(19, 10), Direction::Right));
        engine.step();

        assert_eq!(engine.status(), GameStatus::GameOver);
        assert_eq!(store.read_high_score(), Ok(50));
        assert_eq!(store.writes(), 0);
        assert!(engine.take_pending_high_score().is_none());
        assert!(!engine.game_over_notification().unwrap().new_high_score);
    }

    struct SlowHighScoreStore {
        delay: std::time::Duration,
        writes: Arc<std::sync::atomic::AtomicUsize>,
    }

    impl HighScoreStore for SlowHighScoreStore {
        fn read_high_score(&self) -> Result<u32, String> {
            Ok(0)
        }

        fn write_high_score(&mut self, _score: u32) -> Result<(), String> {
            std::thread::sleep(self.delay);
            self.writes.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
            Ok(())
        }
    }

    #[test]
    fn test_record_beating_step_does_not_wait_for_store() {
        let writes = Arc::new(std::sync::atomic::AtomicUsize::new(0));
        let store = SlowHighScoreStore {
            delay: Duration::from_millis(300),
            writes: Arc::clone(&writes),
        };
        let mut engine =
            SnakeGameEngine::new(SnakeSettings::default(), Box::new(store), SessionRng::new(1));
        engine.start();
        engine.set_snake(Snake::new(Point::new(18, 10), Direction::Right));
        engine.set_food(Some(Point::new(19, 10)));
        assert_eq!(engine.step(), StepOutcome::Ate);

        let started = std::time::Instant::now();
        assert!(matches!(engine.step(), StepOutcome::GameOver(_)));
        assert!(started.elapsed() < Duration::from_millis(100));
        assert_eq!(writes.load(std::sync::atomic::Ordering::SeqCst), 0);
        assert_eq!(engine.high_score(), 10);

        engine.take_pending_high_score().unwrap().persist();
        assert_eq!(writes.load(std::sync::atomic::Ordering::SeqCst), 1);
    }

    #[test]
    fn test_pause_toggle_transitions() {
        let (mut engine, _) = create_engine(SnakeSettings::default());
        assert!(!engine.toggle_pause());

        engine.start();
        assert!(engine.toggle_pause());
        assert_eq!(engine.status(), GameStatus::Paused);
        assert!(engine.toggle_pause());
        assert_eq!(engine.status(), GameStatus::Playing);

        engine.set_snake(Snake::new(Point::new(19, 10), Direction::Right));
        engine.step();
        assert!(!engine.toggle_pause());
        assert_eq!(engine.status(), GameStatus::GameOver);
    }

    #[test]
    fn test_reset_returns_to_idle_and_keeps_high_score() {
        let store = InMemoryHighScoreStore::new(0);
        let mut engine =
            SnakeGameEngine::new(SnakeSettings::default(), Box::new(store.clone()), SessionRng::new(3));
        engine.start();
        engine.set_food(Some(Point::new(11, 10)));
        engine.step();
        engine.set_snake(Snake::new(Point::new(19, 10), Direction::Right));
        engine.step();
        assert_eq!(engine.high_score(), 10);

        assert!(engine.reset());
        assert_eq!(engine.status(), GameStatus::Idle);
        assert_eq!(engine.score(), 0);
        assert_eq!(engine.food(), None);
        assert_eq!(engine.snake().len(), 1);
        assert_eq!(engine.speed(), Duration::from_millis(200));
        assert_eq!(engine.end_reason(), None);
        assert_eq!(engine.high_score(), 10);
        assert!(!engine.reset());
    }

    #[test]
    fn test_start_after_game_over_begins_new_game() {
        let mut engine = started_engine(WallCollisionMode::Death);
        engine.set_snake(Snake::new(Point::new(19, 10), Direction::Right));
        engine.step();
        assert!(engine.start());
        assert_eq!(engine.status(), GameStatus::Playing);
        assert_eq!(engine.snake().head(), Point::new(10, 10));
        assert_eq!(engine.tick(), 0);
    }

    #[test]
    fn test_set_mode_rejected_while_playing() {
        let (mut engine, _) = create_engine(SnakeSettings::default());
        assert!(engine.set_mode(WallCollisionMode::WrapAround));
        assert_eq!(engine.mode(), WallCollisionMode::WrapAround);

        engine.start();
        assert!(!engine.set_mode(WallCollisionMode::Death));
        assert_eq!(engine.mode(), WallCollisionMode::WrapAround);

        engine.toggle_pause();
        assert!(engine.set_mode(WallCollisionMode::Death));
    }

    #[test]
    fn test_filling_grid_ends_game() {
        let settings = SnakeSettings { field_size: 5, ..SnakeSettings::default() };
        let (mut engine, _) = create_engine(settings);
        engine.start();

        // Boustrophedon body covering all but (0,4); head at (1,4) moving Left.
        let mut segments = Vec::new();
        for y in (0..5).rev() {
            let xs: Vec<i32> = if y % 2 == 0 { (0..5).collect() } else { (0..5).rev().collect() };
            for x in xs {
                segments.push(Point::new(x, y));
            }
        }
        let segments: Vec<Point> = segments.into_iter().skip(1).collect();
        engine.set_snake(Snake::from_segments(&segments, Direction::Left));
        engine.set_food(Some(Point::new(0, 4)));

        assert_eq!(engine.step(), StepOutcome::GameOver(GameEndReason::GridFull));
        assert_eq!(engine.snake().len(), 25);
        assert_eq!(engine.food(), None);
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let mut engine = started_engine(WallCollisionMode::WrapAround);
        engine.step();
        let snapshot = engine.snapshot();
        assert_eq!(snapshot.tick, 1);
        assert_eq!(snapshot.status, GameStatus::Playing);
        assert_eq!(snapshot.mode, WallCollisionMode::WrapAround);
        assert_eq!(snapshot.head(), Some(Point::new(11, 10)));
        assert_eq!(snapshot.food, Some(Point::new(0, 0)));
        assert_eq!(snapshot.tick_interval, Duration::from_millis(200));
    }
}
