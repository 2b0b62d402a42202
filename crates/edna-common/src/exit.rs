//! Process exit statuses reported by `ednactl`.
//!
//! | Code | Meaning                       |
//! |------|-------------------------------|
//! | 0    | success                       |
//! | 1    | engine command or I/O failure |
//! | 2    | unknown argument              |
//! | 10   | engine not found              |
//! | 11   | engine unreachable            |
//! | 12   | missing build artifact        |
//! | 13   | malformed mount spec          |
//! | 14   | protected mount target        |
//! | 15   | missing BLAST-DB directory    |

/// The action completed.
pub const SUCCESS: u8 = 0;
/// An engine command or I/O operation failed after preconditions passed.
pub const FAILURE: u8 = 1;
/// The command line could not be parsed. Matches clap's usage status.
pub const UNKNOWN_ARGUMENT: u8 = 2;
/// The engine binary is not on `PATH`.
pub const ENGINE_NOT_FOUND: u8 = 10;
/// The engine binary exists but its daemon does not answer.
pub const ENGINE_UNREACHABLE: u8 = 11;
/// A build artifact is missing from the build context.
pub const MISSING_ARTIFACT: u8 = 12;
/// A mount string could not be parsed.
pub const MALFORMED_MOUNT_SPEC: u8 = 13;
/// A mount targets a protected container path.
pub const PROTECTED_MOUNT_TARGET: u8 = 14;
/// The BLAST database host directory does not exist.
pub const MISSING_BLASTDB_DIRECTORY: u8 = 15;
