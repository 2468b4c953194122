//! Library conventions shared by every generated file.

use std::path::PathBuf;

use serde::Serialize;

use crate::constants;

/// Describes the library the scaffolding is generated for.
///
/// The default profile matches the SynqClient tree. Every name that ends up
/// in generated code or in an output path comes from here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LibraryProfile {
    pub namespace: String,
    pub export_macro: String,
    pub global_header: String,
    pub root_base: String,
    pub guard_prefix: String,
    pub library_dir: String,
    pub tests_dir: String,
    pub test_registration_macro: String,
    pub copyright_holder: String,
}

impl Default for LibraryProfile {
    fn default() -> Self {
        Self {
            namespace: constants::NAMESPACE.to_string(),
            export_macro: constants::EXPORT_MACRO.to_string(),
            global_header: constants::GLOBAL_HEADER.to_string(),
            root_base: constants::ROOT_BASE.to_string(),
            guard_prefix: constants::GUARD_PREFIX.to_string(),
            library_dir: constants::LIBRARY_DIR.to_string(),
            tests_dir: constants::TESTS_DIR.to_string(),
            test_registration_macro: constants::TEST_REGISTRATION_MACRO.to_string(),
            copyright_holder: constants::COPYRIGHT_HOLDER.to_string(),
        }
    }
}

impl LibraryProfile {
    /// Public headers: `<library>/inc/<namespace>`
    pub fn include_dir(&self) -> PathBuf {
        PathBuf::from(&self.library_dir).join("inc").join(&self.namespace)
    }

    /// Implementation files: `<library>/src`
    pub fn source_dir(&self) -> PathBuf {
        PathBuf::from(&self.library_dir).join("src")
    }

    /// Directory of one test project: `<tests>/<name>`
    pub fn test_dir(&self, lower_name: &str) -> PathBuf {
        PathBuf::from(&self.tests_dir).join(lower_name)
    }
}
