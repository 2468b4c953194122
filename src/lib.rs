//! synqgen scaffolds classes and unit tests for the SynqClient library.
//! A class is generated as a public type plus a hidden private type, either
//! standalone or derived from an existing library class, and every file of
//! the set agrees on names, include guards and inheritance.

/// Command-line interface of the `new-class` and `new-test` binaries
pub mod cli;

/// Naming conventions of the library source tree
pub mod constants;

/// Error types and handling
pub mod error;

/// Logger setup shared by both binaries
pub mod logger;

/// Case variants derived from a class name
pub mod ident;

/// Root or derived class layout
pub mod variant;

/// Library conventions used in generated code and output paths
pub mod profile;

/// License preamble of generated sources
pub mod license;

/// Template loading and rendering
pub mod renderer;

/// Artifact sets and their rendering
pub mod catalog;

/// Writing rendered files into the repository
pub mod emitter;

/// Class and test scaffold pipelines
pub mod generator;
