pub mod commands;
pub mod protocol;

pub use commands::execute;
pub use protocol::{CliCommand, ListOptions, Response};
