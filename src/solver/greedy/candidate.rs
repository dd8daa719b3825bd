use rayon::prelude::*;
use tracing::trace;

use crate::config::DispatchConfig;
use crate::distance::{distance, nearest};
use crate::domain::driver::Driver;
use crate::domain::types::Load;
use crate::error::Result;

/// Distances that decide where a load goes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegCosts {
    pub depot_to_pickup: f64,
    pub pickup_to_dropoff: f64,
}

impl LegCosts {
    pub fn of(load: &Load, config: &DispatchConfig) -> Self {
        Self {
            depot_to_pickup: distance(config.depot, load.pickup),
            pickup_to_dropoff: distance(load.pickup, load.dropoff),
        }
    }

    /// Working time of a fresh driver that starts at the depot with this load.
    pub fn new_driver_time(&self) -> f64 {
        self.depot_to_pickup + self.pickup_to_dropoff
    }
}

/// An existing driver that can absorb the load.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    pub driver_index: usize,
    pub dropoff_to_pickup: f64,
    pub legs: LegCosts,
}

impl Candidate {
    /// Working time charged to the driver: detour from its nearest drop-off plus the load's own leg.
    pub fn added_working_time(&self) -> f64 {
        self.dropoff_to_pickup + self.legs.pickup_to_dropoff
    }
}

/// Checks a single driver against the load without touching it.
///
/// Returns `None` when the driver is over budget, when reusing it costs more than
/// commissioning a new driver, or when the load plus a return to the depot would
/// push it past the working-time limit.
pub fn evaluate_driver(
    driver_index: usize,
    driver: &Driver,
    load: &Load,
    legs: LegCosts,
    config: &DispatchConfig,
) -> Result<Option<Candidate>> {
    if driver.working_time() > config.max_working_time {
        return Ok(None);
    }

    let nearest_dropoff = nearest(load.pickup, driver.dropoffs())?;
    let dropoff_to_pickup = distance(nearest_dropoff, load.pickup);

    if dropoff_to_pickup >= config.fixed_driver_cost + legs.depot_to_pickup {
        trace!(
            driver = driver_index,
            load = load.id,
            dropoff_to_pickup,
            "reuse costs more than a new driver"
        );
        return Ok(None);
    }

    let projected = driver.working_time()
        + dropoff_to_pickup
        + legs.pickup_to_dropoff
        + legs.depot_to_pickup;
    if projected > config.max_working_time {
        trace!(
            driver = driver_index,
            load = load.id,
            projected,
            "load would exceed working-time budget"
        );
        return Ok(None);
    }

    Ok(Some(Candidate {
        driver_index,
        dropoff_to_pickup,
        legs,
    }))
}

/// Evaluates every driver and returns the eligible one with the shortest detour.
/// Equal detours go to the lowest driver index.
pub fn find_best_candidate(
    drivers: &[Driver],
    load: &Load,
    legs: LegCosts,
    config: &DispatchConfig,
) -> Result<Option<Candidate>> {
    let evaluated: Vec<Result<Option<Candidate>>> = if config.parallel_evaluation {
        drivers
            .par_iter()
            .enumerate()
            .map(|(ind, driver)| evaluate_driver(ind, driver, load, legs, config))
            .collect()
    } else {
        drivers
            .iter()
            .enumerate()
            .map(|(ind, driver)| evaluate_driver(ind, driver, load, legs, config))
            .collect()
    };

    let mut best: Option<Candidate> = None;
    for candidate in evaluated {
        let Some(candidate) = candidate? else {
            continue;
        };
        match best {
            Some(current) if candidate.dropoff_to_pickup >= current.dropoff_to_pickup => {}
            _ => best = Some(candidate),
        }
    }

    Ok(best)
}
