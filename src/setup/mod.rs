pub mod init;
pub mod reader;

pub use init::{build_loads, setup};
pub use reader::{parse_loads, read_load_file};
