use serde::Serialize;

use crate::domain::types::Point;
use crate::error::{DispatchError, Result};

pub mod constant {
    pub(crate) const FIXED_DRIVER_COST: f64 = 500.0;
    pub(crate) const MAX_WORKING_TIME: f64 = 12.0 * 60.0;
    pub(crate) const DEPOT_X: f64 = 0.0;
    pub(crate) const DEPOT_Y: f64 = 0.0;
}

/// Immutable parameters of a dispatch run, passed into the engine and the report builder.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DispatchConfig {
    pub depot: Point,
    pub fixed_driver_cost: f64,
    pub max_working_time: f64,
    #[serde(skip)]
    pub parallel_evaluation: bool,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            depot: Point::new(constant::DEPOT_X, constant::DEPOT_Y),
            fixed_driver_cost: constant::FIXED_DRIVER_COST,
            max_working_time: constant::MAX_WORKING_TIME,
            parallel_evaluation: false,
        }
    }
}

impl DispatchConfig {
    pub fn validate(self) -> Result<Self> {
        if !self.depot.is_finite() {
            return Err(DispatchError::InvalidConfig(format!(
                "depot must have finite coordinates, got {}",
                self.depot
            )));
        }
        if !self.fixed_driver_cost.is_finite() || self.fixed_driver_cost < 0.0 {
            return Err(DispatchError::InvalidConfig(format!(
                "fixed driver cost must be a non-negative number, got {}",
                self.fixed_driver_cost
            )));
        }
        if !self.max_working_time.is_finite() || self.max_working_time <= 0.0 {
            return Err(DispatchError::InvalidConfig(format!(
                "max working time must be a positive number, got {}",
                self.max_working_time
            )));
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_twelve_hour_shift() {
        let config = DispatchConfig::default();
        assert_eq!(config.max_working_time, 720.0);
        assert_eq!(config.fixed_driver_cost, 500.0);
        assert_eq!(config.depot, Point::new(0.0, 0.0));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_non_positive_budget() {
        let config = DispatchConfig {
            max_working_time: 0.0,
            ..DispatchConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(DispatchError::InvalidConfig(_))
        ));
    }

    #[test]
    fn rejects_negative_driver_cost_and_nan_depot() {
        let negative = DispatchConfig {
            fixed_driver_cost: -1.0,
            ..DispatchConfig::default()
        };
        assert!(negative.validate().is_err());

        let nan_depot = DispatchConfig {
            depot: Point::new(f64::NAN, 0.0),
            ..DispatchConfig::default()
        };
        assert!(nan_depot.validate().is_err());
    }
}
