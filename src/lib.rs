/// Handles argument parsing and the command-line workflow.
pub mod cli;

/// Optional settings files.
pub mod config;

/// Constants shared across modules.
pub mod constants;

/// Defines custom error types.
pub mod error;

/// Extension traits for standard library types.
pub mod ext;

/// A set of helpers for working with the file system.
pub mod ioutils;

/// The enumerated placeholders a template may contain.
pub mod marker;

/// Architecture, accelerator and board parameters.
pub mod params;

/// Parameter set to snippet resolution table.
pub mod resolver;

/// Replacement snippet data.
pub mod snippets;

/// Core variant generation.
pub mod template;

pub use template::generate;
