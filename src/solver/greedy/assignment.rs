use tracing::{debug, info, span, warn, Level};

use crate::config::DispatchConfig;
use crate::domain::driver::Driver;
use crate::domain::solution::Assignment;
use crate::domain::types::Load;
use crate::error::Result;
use crate::solver::greedy::candidate::{find_best_candidate, Candidate, LegCosts};
use crate::solver::greedy::ordering::LoadQueue;

/// Where a load ended up after evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Decision {
    Reuse(Candidate),
    NewDriver(LegCosts),
}

/// Greedy single-pass assignment of loads to drivers.
#[derive(Debug, Clone, Copy)]
pub struct AssignmentEngine {
    config: DispatchConfig,
}

impl AssignmentEngine {
    pub fn new(config: DispatchConfig) -> Self {
        Self { config }
    }

    /// Pure evaluation step: decides where `load` goes without mutating any driver.
    pub fn decide(&self, drivers: &[Driver], load: &Load) -> Result<Decision> {
        let legs = LegCosts::of(load, &self.config);
        let decision = match find_best_candidate(drivers, load, legs, &self.config)? {
            Some(candidate) => Decision::Reuse(candidate),
            None => Decision::NewDriver(legs),
        };
        Ok(decision)
    }

    /// Applies a decision to the ledger and returns the index of the driver that took the load.
    pub fn commit(&self, drivers: &mut Vec<Driver>, load: Load, decision: Decision) -> usize {
        match decision {
            Decision::Reuse(candidate) => {
                drivers[candidate.driver_index].commit(load, candidate.added_working_time());
                candidate.driver_index
            }
            Decision::NewDriver(legs) => {
                let initial = legs.new_driver_time();
                if initial > self.config.max_working_time {
                    warn!(
                        load = load.id,
                        working_time = initial,
                        budget = self.config.max_working_time,
                        "load alone exceeds the working-time budget, assigning a dedicated driver"
                    );
                }
                drivers.push(Driver::with_first_load(load, initial));
                drivers.len() - 1
            }
        }
    }

    pub fn assign(&self, loads: Vec<Load>) -> Result<Assignment> {
        let assign_span = span!(Level::INFO, "assignment", loads = loads.len());
        let _guard = assign_span.enter();

        let queue = LoadQueue::new(self.config.depot, loads);
        if queue.is_empty() {
            warn!("No loads to assign");
            return Ok(Assignment::NoLoadsToAssign);
        }

        let mut drivers: Vec<Driver> = Vec::new();
        for load in queue {
            let decision = self.decide(&drivers, &load)?;
            let driver_index = self.commit(&mut drivers, load, decision);
            match decision {
                Decision::Reuse(candidate) => debug!(
                    load = load.id,
                    driver = driver_index,
                    detour = candidate.dropoff_to_pickup,
                    working_time = drivers[driver_index].working_time(),
                    "reused driver"
                ),
                Decision::NewDriver(_) => debug!(
                    load = load.id,
                    driver = driver_index,
                    working_time = drivers[driver_index].working_time(),
                    "commissioned new driver"
                ),
            }
        }

        info!("Assigned loads to {} drivers", drivers.len());
        Ok(Assignment::Assigned(drivers))
    }
}
