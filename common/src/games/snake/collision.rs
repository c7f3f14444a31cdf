use super::entity::Snake;
use super::grid::FieldSize;
use super::types::{CollisionKind, Point, TailCollisionPolicy, WallCollisionMode};

pub struct CollisionDetector;

impl CollisionDetector {
    /// Checks `next_head` against the walls and the pre-move body.
    ///
    /// In `WrapAround` mode `next_head` must already be wrapped, so only the
    /// body check can fire. `tail_vacates` tells whether the tail leaves its
    /// cell on this tick, which only matters under the lenient tail policy.
    pub fn check(
        next_head: Point,
        snake: &Snake,
        field: &FieldSize,
        mode: WallCollisionMode,
        tail_policy: TailCollisionPolicy,
        tail_vacates: bool,
    ) -> Option<CollisionKind> {
        if mode == WallCollisionMode::Death && !field.in_bounds(next_head) {
            return Some(CollisionKind::Wall);
        }

        if snake.contains(&next_head) {
            let onto_vacated_tail = tail_policy == TailCollisionPolicy::Lenient
                && tail_vacates
                && next_head == snake.tail();
            if !onto_vacated_tail {
                return Some(CollisionKind::SelfCollision);
            }
        }

        None
    }
}
