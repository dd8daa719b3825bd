use crate::domain::driver::Driver;
use crate::error::{DispatchError, Result};

/// Outcome of an assignment run. An empty load set is its own variant rather
/// than an empty driver list.
#[derive(Debug, Clone, PartialEq)]
pub enum Assignment {
    Assigned(Vec<Driver>),
    NoLoadsToAssign,
}

impl Assignment {
    pub fn drivers(&self) -> Option<&[Driver]> {
        match self {
            Assignment::Assigned(drivers) => Some(drivers),
            Assignment::NoLoadsToAssign => None,
        }
    }

    pub fn into_drivers(self) -> Result<Vec<Driver>> {
        match self {
            Assignment::Assigned(drivers) => Ok(drivers),
            Assignment::NoLoadsToAssign => Err(DispatchError::NoLoadsToAssign),
        }
    }
}
