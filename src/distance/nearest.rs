use crate::distance::euclidean::distance;
use crate::domain::types::Point;
use crate::error::{DispatchError, Result};

fn closest(query: Point, candidates: impl IntoIterator<Item = Point>) -> Option<(usize, Point)> {
    let mut best: Option<(usize, Point, f64)> = None;
    for (ind, candidate) in candidates.into_iter().enumerate() {
        let d = distance(query, candidate);
        match best {
            Some((_, _, best_d)) if d >= best_d => {}
            _ => best = Some((ind, candidate, d)),
        }
    }
    best.map(|(ind, point, _)| (ind, point))
}

/// Position of the candidate closest to `query`. Ties keep the earliest position.
pub fn nearest_index(query: Point, candidates: impl IntoIterator<Item = Point>) -> Result<usize> {
    closest(query, candidates)
        .map(|(ind, _)| ind)
        .ok_or(DispatchError::EmptyCandidateSet)
}

/// Candidate closest to `query`, see [`nearest_index`].
pub fn nearest(query: Point, candidates: impl IntoIterator<Item = Point>) -> Result<Point> {
    closest(query, candidates)
        .map(|(_, point)| point)
        .ok_or(DispatchError::EmptyCandidateSet)
}
