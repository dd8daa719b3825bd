use itertools::Itertools;

use crate::distance::distance;
use crate::domain::types::{Load, Point};

/// Distance of the route in assignment order: depot to the first pickup, each
/// drop-off to the next pickup, and the last drop-off back to the depot.
///
/// Loaded legs (pickup to own drop-off) are not part of this figure, see [`loaded_distance`].
pub fn route_distance(loads: &[Load], depot: Point) -> f64 {
    let (Some(first), Some(last)) = (loads.first(), loads.last()) else {
        return 0.0;
    };

    let depot_to_first = distance(depot, first.pickup);
    let last_to_depot = distance(last.dropoff, depot);

    let between: f64 = loads
        .iter()
        .tuple_windows()
        .map(|(prev, next)| distance(prev.dropoff, next.pickup))
        .sum();

    depot_to_first + between + last_to_depot
}

/// Sum of every load's own pickup to drop-off leg.
pub fn loaded_distance(loads: &[Load]) -> f64 {
    loads
        .iter()
        .map(|load| distance(load.pickup, load.dropoff))
        .sum()
}

/// Route distance plus the fixed cost of putting the driver on the road.
pub fn driver_cost(loads: &[Load], depot: Point, fixed_driver_cost: f64) -> f64 {
    route_distance(loads, depot) + fixed_driver_cost
}
