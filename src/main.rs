/// Main entry point for the tournament-teams application
///
/// This serves as a thin wrapper that delegates to the interfaces layer.
/// The actual application logic is implemented in `interfaces::cli`.

use std::process::ExitCode;
use tournament_teams::interfaces::cli;

fn main() -> ExitCode {
    cli::run()
}
