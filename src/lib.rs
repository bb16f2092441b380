//! testlab - Simulated Test Runner Library
//!
//! This library exposes the two logical cores of the TestLab learning
//! playground: the suite runner that walks canned test cases with simulated
//! outcomes, and the passcode gate backed by a session-scoped marker.

#![forbid(unsafe_code)]

pub mod auth;
pub mod cli;
pub mod config;
pub mod constants;
pub mod content;
pub mod models;
pub mod output;
pub mod runner;
