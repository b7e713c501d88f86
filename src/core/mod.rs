//! Process-wide state shared by the CLI commands.

mod state;

pub use state::{is_healthy, is_shutdown, register_server, set_healthy, setup_shutdown_handler};
