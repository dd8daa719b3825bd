pub mod data_generator;

pub use data_generator::{generate_random_loads, render_load_file};
