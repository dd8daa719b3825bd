pub mod cli;
pub mod config;
pub mod distance;
pub mod domain;
pub mod error;
pub mod evaluation;
pub mod fixtures;
pub mod runner;
pub mod setup;
pub mod solver;

pub use config::DispatchConfig;
pub use error::{DispatchError, Result};
