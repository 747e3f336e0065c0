use std::collections::{HashSet, VecDeque};

use super::grid::Grid;
use super::types::{Direction, Point};

/// Snake body, head first, with a set mirror for O(1) occupancy checks.
#[derive(Clone, Debug)]
pub struct Snake {
    body: VecDeque<Point>,
    body_set: HashSet<Point>,
}

impl Snake {
    /// Two segments: `head` and the cell behind it relative to `direction`.
    pub fn new(head: Point, direction: Direction, grid: &Grid) -> Self {
        let tail = grid.step(head, direction.opposite());
        Self::from_segments([head, tail])
    }

    /// Builds a body from explicit segments, head first. Duplicates are kept once.
    pub fn from_segments(segments: impl IntoIterator<Item = Point>) -> Self {
        let mut body = VecDeque::new();
        let mut body_set = HashSet::new();
        for segment in segments {
            if body_set.insert(segment) {
                body.push_back(segment);
            }
        }
        Self { body, body_set }
    }

    pub fn head(&self) -> Option<Point> {
        self.body.front().copied()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn contains(&self, pos: &Point) -> bool {
        self.body_set.contains(pos)
    }

    pub fn segments(&self) -> impl Iterator<Item = &Point> {
        self.body.iter()
    }

    pub fn push_head(&mut self, pos: Point) {
        self.body.push_front(pos);
        self.body_set.insert(pos);
    }

    pub fn pop_tail(&mut self) -> Option<Point> {
        let tail = self.body.pop_back()?;
        self.body_set.remove(&tail);
        Some(tail)
    }
}
