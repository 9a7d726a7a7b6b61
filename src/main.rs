//! oslex - Export OSRS Leagues task progress for osleague.tools

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = osleague_export::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
