#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

impl Point {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit vector with y growing downwards.
    pub fn delta(&self) -> (isize, isize) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn is_horizontal(&self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    /// True for the same direction as well as for the reverse one.
    pub fn shares_axis(&self, other: &Direction) -> bool {
        self.is_horizontal() == other.is_horizontal()
    }

    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GamePhase {
    Idle,
    Running,
    GameOver,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Moved,
    Ate { score: u32 },
    SelfCollision { final_score: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delta_is_unit_vector_and_opposite_negates_it() {
        for direction in [Direction::Up, Direction::Down, Direction::Left, Direction::Right] {
            let (dx, dy) = direction.delta();
            assert_eq!(dx.abs() + dy.abs(), 1);
            assert_eq!(direction.opposite().delta(), (-dx, -dy));
        }
    }

    #[test]
    fn test_shares_axis() {
        assert!(Direction::Up.shares_axis(&Direction::Down));
        assert!(Direction::Up.shares_axis(&Direction::Up));
        assert!(Direction::Left.shares_axis(&Direction::Right));
        assert!(!Direction::Left.shares_axis(&Direction::Up));
        assert_eq!(Direction::Left.opposite(), Direction::Right);
    }
}
