pub mod application;
pub mod presentation;

pub use presentation::bootstrap::{assemble, build_app_state};
pub use presentation::cli::Cli;
pub use presentation::state::AppState;
