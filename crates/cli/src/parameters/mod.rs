//! Parameter registration and value processing for the unitset CLI.
//!
//! This module plays the part of a parameter framework: setters are
//! registered under a name (and checked once as they are registered), then
//! fed the raw strings collected from the command line.

// Export public items from submodules
pub mod processing;
pub mod registry;

// Re-exports for convenience
pub use processing::{parse_named, split_named};
pub use registry::Parameters;

/// Parameter selecting the unit family
pub const FAMILY: &str = "family";
/// Parameter selecting the unit
pub const UNIT: &str = "unit";
/// Parameter selecting a tag the unit must carry
pub const REQUIRE_TAG: &str = "require-tag";
/// Parameter collecting a list of tags
pub const TAG: &str = "tag";

/// Every parameter name the CLI understands
pub const ALL: [&str; 4] = [FAMILY, UNIT, REQUIRE_TAG, TAG];
