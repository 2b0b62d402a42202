//! Formatted output helpers for CLI commands.
//!
//! Progress and errors go to stderr; stdout is reserved for dry-run
//! command lines.

#![allow(clippy::print_stderr)]

use edna_common::error::EdnaError;
use edna_common::exit;

pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";
pub const GREEN: &str = "\x1b[32m";
pub const RED: &str = "\x1b[31m";
pub const YELLOW: &str = "\x1b[33m";
pub const RESET: &str = "\x1b[0m";

/// Prints a progress line.
pub fn step(message: &str) {
    eprintln!("  {DIM}→{RESET} {message}");
}

/// Prints a completion line.
pub fn done(message: &str) {
    eprintln!("  {GREEN}✓{RESET} {message}");
}

/// Prints an error with a hint for categories the user can fix.
pub fn report_error(err: &anyhow::Error) {
    eprintln!("  {RED}{BOLD}error:{RESET} {err:#}");
    if let Some(hint) = err.downcast_ref::<EdnaError>().and_then(hint_for) {
        eprintln!("  {YELLOW}hint:{RESET} {hint}");
    }
}

/// Returns the exit status for an error, falling back to the generic
/// failure status for errors outside the taxonomy.
pub fn exit_code_of(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<EdnaError>()
        .map_or(exit::FAILURE, EdnaError::exit_code)
}

/// Maps a session's exit status onto a process exit status.
pub fn session_exit_code(code: i32) -> u8 {
    u8::try_from(code).unwrap_or(exit::FAILURE)
}

fn hint_for(err: &EdnaError) -> Option<&'static str> {
    match err {
        EdnaError::MalformedMountSpec { .. } => {
            Some("mounts take the form HOST or HOST:CONTAINER, both parts non-empty")
        }
        EdnaError::ProtectedMountTarget { .. } => {
            Some("the application is installed there; mount below it or elsewhere, e.g. HOST:/data")
        }
        EdnaError::MissingArtifact { .. } => {
            Some("place both installer archives in the build context or pass --artifact-a/--artifact-b")
        }
        EdnaError::MissingDirectory { .. } => {
            Some("create the BLAST database directory or pass --blastdb HOST[:CONTAINER]")
        }
        EdnaError::EngineNotFound { .. } => Some("install Docker or Podman, or pass --engine"),
        EdnaError::EngineUnreachable { .. } => Some("start the engine daemon and retry"),
        _ => None,
    }
}
