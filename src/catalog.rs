//! The set of artifacts produced per request and how each one is rendered.
//!
//! Both class variants share one list of artifacts and one render context.
//! The variant reaches the templates only as the `variant` tag, so the five
//! files of a request can never disagree about their shape.

use std::path::{Path, PathBuf};

use log::debug;
use serde::Serialize;

use crate::error::Result;
use crate::ident::Identifiers;
use crate::license::LicenseHeader;
use crate::profile::LibraryProfile;
use crate::renderer::TemplateRenderer;
use crate::variant::{Variant, VariantTag};

/// One logical output file of a generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Artifact {
    PublicHeader,
    IncludeShim,
    PublicSource,
    PrivateHeader,
    PrivateSource,
    TestProject,
    TestRegistration,
    TestSource,
}

impl Artifact {
    /// Artifacts of the class generator, in write order.
    pub const CLASS_SET: [Artifact; 5] = [
        Artifact::PublicHeader,
        Artifact::IncludeShim,
        Artifact::PublicSource,
        Artifact::PrivateHeader,
        Artifact::PrivateSource,
    ];

    /// Artifacts of the test scaffold generator, in write order.
    pub const TEST_SET: [Artifact; 3] =
        [Artifact::TestProject, Artifact::TestRegistration, Artifact::TestSource];

    pub fn template_name(self) -> &'static str {
        match self {
            Artifact::PublicHeader => "class/public_header.h",
            Artifact::IncludeShim => "class/include_shim",
            Artifact::PublicSource => "class/public_source.cpp",
            Artifact::PrivateHeader => "class/private_header.h",
            Artifact::PrivateSource => "class/private_source.cpp",
            Artifact::TestProject => "test/project.pro",
            Artifact::TestRegistration => "test/CMakeLists.txt",
            Artifact::TestSource => "test/test_source.cpp",
        }
    }

    /// Whether the license preamble goes in front of the rendered body.
    pub fn is_licensed(self) -> bool {
        matches!(
            self,
            Artifact::PublicHeader
                | Artifact::PublicSource
                | Artifact::PrivateHeader
                | Artifact::PrivateSource
        )
    }

    /// Output path relative to the repository root.
    pub fn relative_path(self, profile: &LibraryProfile, class: &Identifiers) -> PathBuf {
        let lower = &class.lower;
        match self {
            Artifact::PublicHeader => profile.include_dir().join(format!("{lower}.h")),
            Artifact::IncludeShim => profile.include_dir().join(&class.pascal),
            Artifact::PublicSource => profile.source_dir().join(format!("{lower}.cpp")),
            Artifact::PrivateHeader => profile.source_dir().join(format!("{lower}private.h")),
            Artifact::PrivateSource => profile.source_dir().join(format!("{lower}private.cpp")),
            Artifact::TestProject => profile.test_dir(lower).join(format!("{lower}.pro")),
            Artifact::TestRegistration => profile.test_dir(lower).join("CMakeLists.txt"),
            Artifact::TestSource => profile.test_dir(lower).join(format!("tst_{lower}.cpp")),
        }
    }
}

/// A rendered file, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileArtifact {
    pub kind: Artifact,
    pub relative_path: PathBuf,
    pub content: String,
}

impl FileArtifact {
    pub fn path(&self) -> &Path {
        &self.relative_path
    }
}

/// Variables visible to every template.
#[derive(Debug, Serialize)]
struct RenderContext<'a> {
    class: &'a Identifiers,
    base: Option<&'a Identifiers>,
    variant: VariantTag,
    profile: &'a LibraryProfile,
}

/// Renders the five class artifacts for one variant.
///
/// # Errors
/// * `Error::TemplateError` if any template fails to render
pub fn render_class(
    renderer: &dyn TemplateRenderer,
    profile: &LibraryProfile,
    license: &LicenseHeader,
    class: &Identifiers,
    variant: &Variant,
) -> Result<Vec<FileArtifact>> {
    let context = RenderContext { class, base: variant.base(), variant: variant.tag(), profile };
    render_set(renderer, &Artifact::CLASS_SET, profile, Some(license), class, &context)
}

/// Renders the three test scaffold artifacts. They never carry a license.
pub fn render_test(
    renderer: &dyn TemplateRenderer,
    profile: &LibraryProfile,
    class: &Identifiers,
) -> Result<Vec<FileArtifact>> {
    let context = RenderContext { class, base: None, variant: VariantTag::Root, profile };
    render_set(renderer, &Artifact::TEST_SET, profile, None, class, &context)
}

fn render_set(
    renderer: &dyn TemplateRenderer,
    set: &[Artifact],
    profile: &LibraryProfile,
    license: Option<&LicenseHeader>,
    class: &Identifiers,
    context: &RenderContext<'_>,
) -> Result<Vec<FileArtifact>> {
    let context = serde_json::to_value(context)?;

    let mut artifacts = Vec::with_capacity(set.len());
    for &kind in set {
        debug!("Rendering {}", kind.template_name());
        let body = renderer.render(kind.template_name(), &context)?;
        let content = match license {
            Some(license) if kind.is_licensed() => license.prefix(&body),
            _ => body,
        };
        artifacts.push(FileArtifact {
            kind,
            relative_path: kind.relative_path(profile, class),
            content,
        });
    }
    Ok(artifacts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_paths() {
        let profile = LibraryProfile::default();
        let class = Identifiers::derive("JobQueue");
        let paths: Vec<PathBuf> =
            Artifact::CLASS_SET.iter().map(|a| a.relative_path(&profile, &class)).collect();
        assert_eq!(
            paths,
            vec![
                PathBuf::from("libsynqclient/inc/SynqClient/jobqueue.h"),
                PathBuf::from("libsynqclient/inc/SynqClient/JobQueue"),
                PathBuf::from("libsynqclient/src/jobqueue.cpp"),
                PathBuf::from("libsynqclient/src/jobqueueprivate.h"),
                PathBuf::from("libsynqclient/src/jobqueueprivate.cpp"),
            ]
        );
    }

    #[test]
    fn test_test_paths() {
        let profile = LibraryProfile::default();
        let class = Identifiers::derive("JobQueue");
        let paths: Vec<PathBuf> =
            Artifact::TEST_SET.iter().map(|a| a.relative_path(&profile, &class)).collect();
        assert_eq!(
            paths,
            vec![
                PathBuf::from("tests/jobqueue/jobqueue.pro"),
                PathBuf::from("tests/jobqueue/CMakeLists.txt"),
                PathBuf::from("tests/jobqueue/tst_jobqueue.cpp"),
            ]
        );
    }

    #[test]
    fn test_only_shim_is_unlicensed_in_class_set() {
        let unlicensed: Vec<Artifact> =
            Artifact::CLASS_SET.into_iter().filter(|a| !a.is_licensed()).collect();
        assert_eq!(unlicensed, vec![Artifact::IncludeShim]);
        assert!(Artifact::TEST_SET.iter().all(|a| !a.is_licensed()));
    }
}
