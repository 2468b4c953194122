//! Class and test scaffold pipelines.
//!
//! Each pipeline validates its input, derives identifiers, renders the full
//! artifact set in memory and only then touches the filesystem. A rendering
//! failure therefore never leaves files behind; a write failure can.

use std::path::PathBuf;

use log::debug;

use crate::catalog::{render_class, render_test, FileArtifact};
use crate::emitter::OutputLayout;
use crate::error::Result;
use crate::ident::Identifiers;
use crate::license::LicenseHeader;
use crate::profile::LibraryProfile;
use crate::renderer::TemplateRenderer;
use crate::variant::Variant;

/// Input of the class generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub class_name: String,
    pub base_class_name: Option<String>,
}

impl GenerationRequest {
    pub fn new<S: Into<String>>(class_name: S, base_class_name: Option<S>) -> Self {
        Self { class_name: class_name.into(), base_class_name: base_class_name.map(Into::into) }
    }
}

/// Validates `request` and renders its five class artifacts.
///
/// # Errors
/// * `Error::ValidationError` if a name is not an identifier or the class
///   names itself as its base
/// * `Error::TemplateError` if rendering fails
pub fn plan_class(
    renderer: &dyn TemplateRenderer,
    profile: &LibraryProfile,
    license: &LicenseHeader,
    request: &GenerationRequest,
) -> Result<Vec<FileArtifact>> {
    let class = Identifiers::parse(&request.class_name)?;
    let variant = Variant::select(&class, request.base_class_name.as_deref())?;
    debug!("Generating '{}' as {}", class.pascal, variant);
    render_class(renderer, profile, license, &class, &variant)
}

/// Renders and writes the class artifacts. Returns the written paths.
pub fn generate_class(
    renderer: &dyn TemplateRenderer,
    profile: &LibraryProfile,
    license: &LicenseHeader,
    layout: &OutputLayout,
    request: &GenerationRequest,
) -> Result<Vec<PathBuf>> {
    let artifacts = plan_class(renderer, profile, license, request)?;
    layout.write_all(&artifacts)
}

/// Validates `class_name` and renders its three test scaffold artifacts.
pub fn plan_test(
    renderer: &dyn TemplateRenderer,
    profile: &LibraryProfile,
    class_name: &str,
) -> Result<Vec<FileArtifact>> {
    let class = Identifiers::parse(class_name)?;
    debug!("Generating test scaffold for '{}'", class.pascal);
    render_test(renderer, profile, &class)
}

/// Creates the per-class test directory if needed, then writes the test
/// scaffold into it. Returns the written paths.
pub fn generate_test(
    renderer: &dyn TemplateRenderer,
    profile: &LibraryProfile,
    layout: &OutputLayout,
    class_name: &str,
) -> Result<Vec<PathBuf>> {
    let artifacts = plan_test(renderer, profile, class_name)?;
    let class = Identifiers::derive(class_name);
    layout.ensure_dir(profile.test_dir(&class.lower))?;
    layout.write_all(&artifacts)
}
