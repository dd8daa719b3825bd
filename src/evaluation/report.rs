use serde::Serialize;
use tracing::info;

use crate::config::DispatchConfig;
use crate::domain::driver::Driver;
use crate::evaluation::route_cost::{driver_cost, loaded_distance, route_distance};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DriverReport {
    /// 1-based position in the assignment result.
    pub driver: usize,
    pub load_ids: Vec<usize>,
    /// Working time as tracked by the engine while assigning.
    pub working_time: f64,
    pub route_distance: f64,
    pub loaded_distance: f64,
    pub cost: f64,
    pub over_budget: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DispatchReport {
    pub config: DispatchConfig,
    pub load_count: usize,
    pub driver_count: usize,
    pub total_distance: f64,
    pub total_cost: f64,
    pub drivers: Vec<DriverReport>,
}

/// Recomputes distances from the final route order. These figures, not the
/// engine's incremental working time, are the cost of the assignment.
pub fn build_report(drivers: &[Driver], config: &DispatchConfig) -> DispatchReport {
    let driver_reports: Vec<DriverReport> = drivers
        .iter()
        .enumerate()
        .map(|(ind, driver)| {
            let route_distance = route_distance(driver.loads(), config.depot);
            DriverReport {
                driver: ind + 1,
                load_ids: driver.load_ids(),
                working_time: driver.working_time(),
                route_distance,
                loaded_distance: loaded_distance(driver.loads()),
                cost: driver_cost(driver.loads(), config.depot, config.fixed_driver_cost),
                over_budget: driver.working_time() > config.max_working_time,
            }
        })
        .collect();

    let total_distance: f64 = driver_reports.iter().map(|d| d.route_distance).sum();
    let total_cost: f64 = driver_reports.iter().map(|d| d.cost).sum();
    let load_count: usize = driver_reports.iter().map(|d| d.load_ids.len()).sum();

    info!(
        "Drivers: {}, Total distance: {:.2}, Total cost: {:.2}",
        driver_reports.len(),
        total_distance,
        total_cost
    );

    DispatchReport {
        config: *config,
        load_count,
        driver_count: driver_reports.len(),
        total_distance,
        total_cost,
        drivers: driver_reports,
    }
}

impl DriverReport {
    /// Load ids as a bracketed list, e.g. `[3, 1, 2]`.
    pub fn manifest(&self) -> String {
        format!("{:?}", self.load_ids)
    }
}
