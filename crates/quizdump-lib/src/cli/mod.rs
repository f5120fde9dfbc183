mod args;
mod dump;
mod params;
mod progress;
mod resolved_command;

pub use args::{Args, DumpCommand, parse_args};
pub use dump::run_dump;
pub use params::DumpParams;
pub use progress::{make_spinner, make_sync_progress_bar, print_summary};
pub use resolved_command::resolve_command;
