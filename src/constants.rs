//! Global constants for testlab
//!
//! Centralized location for application-wide constants

/// Session storage key written by the access gate after a successful login
pub const SESSION_KEY: &str = "testlab_auth";

/// Opaque marker value stored under [`SESSION_KEY`]
pub const SESSION_MARKER: &str = "authenticated";

/// The one valid access code. The gate is a cosmetic deterrent for draft
/// content, not a security boundary; shipping the code alongside its digest
/// check is intentional.
pub const DEFAULT_ACCESS_CODE: &str = "gT6@Qp!R1Z$uN9e#X^cD2sL%hY&vJm*W+K7B~A=F4q-Uo_rP)k8S]3C0{I?E";

/// Default lower bound for the simulated per-case execution delay
pub const DEFAULT_DELAY_MIN_MS: u64 = 600;

/// Default upper bound for the simulated per-case execution delay
pub const DEFAULT_DELAY_MAX_MS: u64 = 1000;

/// Default probability that a simulated case passes
pub const DEFAULT_PASS_PROBABILITY: f64 = 0.9;

/// File name used for the session marker when no explicit path is given
pub const DEFAULT_SESSION_FILE_NAME: &str = "session";
