//! Version layer: parsing, selection and release sources
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Registry   │────▶│   Semver    │────▶│  Selector   │
//! │   (fetch)   │     │   (parse)   │     │  (choose)   │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │ Registries  │
//! │  (GitHub)   │
//! └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`registry`]: Registry trait for fetching release tags from remote sources
//! - [`registries`]: Concrete registry implementations (GitHub Releases)
//! - [`semver`]: `SemanticVersion` and tag parsing
//! - [`selector`]: Latest version of every minor line
//! - [`error`]: Error types for registry and parse failures

pub mod error;
pub mod registries;
pub mod registry;
pub mod selector;
pub mod semver;
