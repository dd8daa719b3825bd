pub mod assignment;
pub mod candidate;
pub mod ordering;

pub use assignment::*;
pub use candidate::*;
pub use ordering::*;
