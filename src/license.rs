//! License preamble prefixed to generated sources.

use chrono::Datelike;
use log::debug;
use serde_json::json;

use crate::error::Result;
use crate::profile::LibraryProfile;
use crate::renderer::TemplateRenderer;

/// Rendered license preamble for one invocation.
///
/// Resolved once at startup and shared by every artifact, so all files of a
/// run carry the same year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LicenseHeader {
    year: i32,
    text: String,
}

impl LicenseHeader {
    /// Renders the preamble for an explicit copyright year.
    pub fn for_year(
        renderer: &dyn TemplateRenderer,
        profile: &LibraryProfile,
        year: i32,
    ) -> Result<Self> {
        let text = renderer.render("license", &json!({ "year": year, "profile": profile }))?;
        Ok(Self { year, text })
    }

    /// Renders the preamble for the current local year.
    pub fn current(renderer: &dyn TemplateRenderer, profile: &LibraryProfile) -> Result<Self> {
        let year = chrono::Local::now().year();
        debug!("Using copyright year {year}");
        Self::for_year(renderer, profile, year)
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns `body` with the preamble in front of it.
    pub fn prefix(&self, body: &str) -> String {
        let mut content = String::with_capacity(self.text.len() + body.len());
        content.push_str(&self.text);
        content.push_str(body);
        content
    }
}
