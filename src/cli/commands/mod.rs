//! CLI command implementations
//!
//! Each subcommand has its own module with:
//! - Args struct for command-line arguments
//! - `run()` function to execute the command

use crate::app::AppContext;
use crate::cli::Commands;
use crate::error::Result;

pub mod outline;
pub mod present;
pub mod show;
pub mod validate;

/// Dispatch a command to its handler
pub fn run(ctx: &AppContext, command: &Commands) -> Result<()> {
    match command {
        Commands::Present(args) => present::run(ctx, args),
        Commands::Show(args) => show::run(ctx, args),
        Commands::Outline(args) => outline::run(ctx, args),
        Commands::Validate(args) => validate::run(ctx, args),
    }
}
