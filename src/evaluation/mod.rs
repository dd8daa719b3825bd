pub mod report;
pub mod route_cost;

pub use report::{build_report, DispatchReport, DriverReport};
pub use route_cost::{driver_cost, loaded_distance, route_distance};
