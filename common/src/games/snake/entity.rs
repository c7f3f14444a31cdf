use std::collections::{HashSet, VecDeque};

use super::types::{Direction, Point};

#[derive(Clone, Debug)]
pub struct Snake {
    body: VecDeque<Point>,
    body_set: HashSet<Point>,
    pub direction: Direction,
    pub pending_direction: Option<Direction>,
}

impl Snake {
    pub fn new(start_pos: Point, direction: Direction) -> Self {
        Self {
            body: VecDeque::from([start_pos]),
            body_set: HashSet::from([start_pos]),
            direction,
            pending_direction: None,
        }
    }

    /// Builds a snake from explicit segments, head first.
    pub fn from_segments(segments: &[Point], direction: Direction) -> Self {
        assert!(!segments.is_empty(), "Snake needs at least one segment");
        Self {
            body: segments.iter().copied().collect(),
            body_set: segments.iter().copied().collect(),
            direction,
            pending_direction: None,
        }
    }

    pub fn head(&self) -> Point {
        *self.body.front().expect("Snake body should never be empty")
    }

    pub fn tail(&self) -> Point {
        *self.body.back().expect("Snake body should never be empty")
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn contains(&self, point: &Point) -> bool {
        self.body_set.contains(point)
    }

    pub fn segments(&self) -> impl Iterator<Item = &Point> {
        self.body.iter()
    }

    /// Promotes the pending direction to the applied one.
    pub fn apply_pending_direction(&mut self) {
        if let Some(direction) = self.pending_direction.take() {
            self.direction = direction;
        }
    }

    /// Prepends `next_head`; the tail is kept only when `grow` is set.
    pub fn advance(&mut self, next_head: Point, grow: bool) {
        if !grow {
            let tail = self
                .body
                .pop_back()
                .expect("Snake body should never be empty");
            self.body_set.remove(&tail);
        }

        self.body.push_front(next_head);
        self.body_set.insert(next_head);
    }
}
