mod commands;

pub use commands::{Cli, Commands, parse_attribute};
