//! ghsecrets - manage GitHub Actions repository secrets from the command line.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── secrets       # list/create/get/delete command handlers
//! │   └── output        # Terminal + JSON output helpers
//! ├── github            # Blocking API client and secret operations
//! ├── crypto            # Sealed-box encryption of secret values
//! └── error             # Error types
//! ```
//!
//! Secret values are sealed on the caller's machine against the repository's
//! current public key (libsodium sealed-box layout) before anything is sent,
//! so the plaintext never leaves the process. Each invocation performs one
//! operation: a single request, or the fetch-key → seal → submit chain for
//! create/update.

pub mod cli;
pub mod crypto;
pub mod error;
pub mod github;
