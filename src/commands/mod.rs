//! CLI command handlers.
//!
//! Each submodule handles a specific CLI command:
//! - `package` - Run the full packaging pipeline
//! - `clean` - Remove produced artifacts
//! - `show` - Display configuration, metadata and archive contents
//! - `preflight` - Run preflight checks

pub mod clean;
pub mod package;
mod preflight;
pub mod show;

pub use clean::cmd_clean;
pub use package::cmd_package;
pub use preflight::cmd_preflight;
pub use show::cmd_show;
