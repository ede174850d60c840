//! Latest release of every minor line for a list of GitHub repositories
//!
//! - [`version`]: version parsing, selection and release sources
//! - [`scan`]: target list parsing, scanning and reporting
//! - [`config`]: layered runtime configuration
//! - [`logging`]: tracing setup

pub mod config;
pub mod logging;
pub mod scan;
pub mod version;
