use std::path::Path;

use tracing::debug;

use crate::domain::types::{Load, LoadRecord};
use crate::error::Result;
use crate::setup::reader::read_load_file;

/// Turns parsed records into loads, numbering them from 1 in record order.
pub fn build_loads(records: Vec<LoadRecord>) -> Vec<Load> {
    records
        .into_iter()
        .enumerate()
        .map(|(ind, record)| Load::new(ind + 1, record.pickup, record.dropoff))
        .collect()
}

/// Reads the input file and returns its loads ready for assignment.
pub fn setup(path: &Path) -> Result<Vec<Load>> {
    let loads = build_loads(read_load_file(path)?);
    debug!(
        "Load ids: {:?}",
        loads.iter().map(|load| load.id).collect::<Vec<_>>()
    );
    Ok(loads)
}
