use super::types::{Direction, Point};

/// Square toroidal board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Grid {
    size: usize,
}

impl Grid {
    /// Returns `None` for a zero-sized board.
    pub fn new(size: usize) -> Option<Self> {
        if size == 0 {
            return None;
        }
        Some(Self { size })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn cell_count(&self) -> usize {
        self.size * self.size
    }

    pub fn contains(&self, pos: Point) -> bool {
        pos.x < self.size && pos.y < self.size
    }

    /// Maps any coordinate into `[0, size)`: `-1` becomes `size - 1`, `size` becomes `0`.
    pub fn wrap(&self, coord: isize) -> usize {
        coord.rem_euclid(self.size as isize) as usize
    }

    pub fn step(&self, pos: Point, direction: Direction) -> Point {
        let (dx, dy) = direction.delta();
        Point::new(
            self.wrap(pos.x as isize + dx),
            self.wrap(pos.y as isize + dy),
        )
    }

    /// Row-major index of a cell, for surfaces that lay cells out linearly.
    pub fn cell_index(&self, pos: Point) -> usize {
        pos.y * self.size + pos.x
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_size_is_rejected() {
        assert!(Grid::new(0).is_none());
    }

    #[test]
    fn test_wrap_single_step_overflow() {
        let grid = Grid::new(10).unwrap();
        assert_eq!(grid.wrap(-1), 9);
        assert_eq!(grid.wrap(10), 0);
        assert_eq!(grid.wrap(0), 0);
        assert_eq!(grid.wrap(9), 9);
    }

    #[test]
    fn test_step_wraps_every_edge() {
        let grid = Grid::new(10).unwrap();
        assert_eq!(grid.step(Point::new(0, 5), Direction::Left), Point::new(9, 5));
        assert_eq!(grid.step(Point::new(9, 5), Direction::Right), Point::new(0, 5));
        assert_eq!(grid.step(Point::new(3, 0), Direction::Up), Point::new(3, 9));
        assert_eq!(grid.step(Point::new(3, 9), Direction::Down), Point::new(3, 0));
        assert_eq!(grid.step(Point::new(5, 5), Direction::Up), Point::new(5, 4));
    }

    #[test]
    fn test_step_never_leaves_the_board() {
        let grid = Grid::new(3).unwrap();
        for x in 0..3 {
            for y in 0..3 {
                for direction in [Direction::Up, Direction::Down, Direction::Left, Direction::Right] {
                    assert!(grid.contains(grid.step(Point::new(x, y), direction)));
                }
            }
        }
    }

    #[test]
    fn test_cell_index_is_row_major() {
        let grid = Grid::new(10).unwrap();
        assert_eq!(grid.cell_index(Point::new(0, 0)), 0);
        assert_eq!(grid.cell_index(Point::new(5, 6)), 65);
        assert_eq!(grid.cell_index(Point::new(9, 9)), 99);
        assert_eq!(grid.cell_count(), 100);
    }
}
