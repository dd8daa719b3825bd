pub mod driver;
pub mod solution;
pub mod types;

pub use driver::Driver;
pub use solution::Assignment;
pub use types::{Load, LoadRecord, Point};
