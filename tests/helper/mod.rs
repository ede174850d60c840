//! Shared test utilities

pub mod registry;
pub mod reporter;

pub use registry::MockRegistry;
pub use reporter::CapturingReporter;
