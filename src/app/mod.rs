//! the themegen command line app
pub mod cli;
pub mod logging;

pub use cli::Cli;
