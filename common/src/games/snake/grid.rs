use super::types::Point;

/// Square playing field of `size` x `size` cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSize {
    size: i32,
}

impl FieldSize {
    pub fn new(size: usize) -> Self {
        Self { size: size as i32 }
    }

    pub fn size(&self) -> usize {
        self.size as usize
    }

    pub fn cell_count(&self) -> usize {
        self.size() * self.size()
    }

    pub fn center(&self) -> Point {
        Point::new(self.size / 2, self.size / 2)
    }

    pub fn in_bounds(&self, point: Point) -> bool {
        (0..self.size).contains(&point.x) && (0..self.size).contains(&point.y)
    }

    pub fn wrap(&self, point: Point) -> Point {
        Point::new(point.x.rem_euclid(self.size), point.y.rem_euclid(self.size))
    }

    /// Row-major iteration over every cell.
    pub fn cells(&self) -> impl Iterator<Item = Point> + '_ {
        (0..self.size).flat_map(move |y| (0..self.size).map(move |x| Point::new(x, y)))
    }
}
