use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// One parsed input line: a pickup and drop-off pair, before an id is assigned.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadRecord {
    pub pickup: Point,
    pub dropoff: Point,
}

/// A transport task. Ids are 1-based record positions and unique within a run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Load {
    pub id: usize,
    pub pickup: Point,
    pub dropoff: Point,
}

impl Load {
    pub fn new(id: usize, pickup: Point, dropoff: Point) -> Self {
        Self {
            id,
            pickup,
            dropoff,
        }
    }
}
