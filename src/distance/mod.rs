pub mod euclidean;
pub mod nearest;

pub use euclidean::distance;
pub use nearest::{nearest, nearest_index};
