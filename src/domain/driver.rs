use crate::domain::types::{Load, Point};

/// A driver's ledger: loads in assignment order and the working time attributed so far.
///
/// Fields are private so working time can only grow through [`Driver::commit`].
#[derive(Debug, Clone, PartialEq)]
pub struct Driver {
    loads: Vec<Load>,
    working_time: f64,
}

impl Driver {
    /// Starts a driver with its first load and the time of the depot leg plus the load itself.
    pub fn with_first_load(load: Load, initial_working_time: f64) -> Self {
        debug_assert!(initial_working_time >= 0.0);
        Self {
            loads: vec![load],
            working_time: initial_working_time,
        }
    }

    pub fn commit(&mut self, load: Load, added_working_time: f64) {
        debug_assert!(added_working_time >= 0.0);
        self.loads.push(load);
        self.working_time += added_working_time;
    }

    pub fn loads(&self) -> &[Load] {
        &self.loads
    }

    pub fn working_time(&self) -> f64 {
        self.working_time
    }

    pub fn load_ids(&self) -> Vec<usize> {
        self.loads.iter().map(|load| load.id).collect()
    }

    pub fn dropoffs(&self) -> impl Iterator<Item = Point> + '_ {
        self.loads.iter().map(|load| load.dropoff)
    }
}
