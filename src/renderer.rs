//! Template rendering for synqgen.
//! The template sources are compiled into the binary and rendered with
//! MiniJinja.
use crate::error::Result;
use minijinja::{AutoEscape, Environment, UndefinedBehavior};

/// Every template shipped with the generator, keyed by name.
pub const TEMPLATES: [(&str, &str); 9] = [
    ("license", include_str!("../templates/license.j2")),
    ("class/public_header.h", include_str!("../templates/class/public_header.h.j2")),
    ("class/include_shim", include_str!("../templates/class/include_shim.j2")),
    ("class/public_source.cpp", include_str!("../templates/class/public_source.cpp.j2")),
    ("class/private_header.h", include_str!("../templates/class/private_header.h.j2")),
    ("class/private_source.cpp", include_str!("../templates/class/private_source.cpp.j2")),
    ("test/project.pro", include_str!("../templates/test/project.pro.j2")),
    ("test/CMakeLists.txt", include_str!("../templates/test/CMakeLists.txt.j2")),
    ("test/test_source.cpp", include_str!("../templates/test/test_source.cpp.j2")),
];

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders the named template with the given context.
    ///
    /// # Arguments
    /// * `name` - Name of a template from [`TEMPLATES`]
    /// * `context` - Context variables for rendering
    ///
    /// # Returns
    /// * `Result<String>` - Rendered text
    fn render(&self, name: &str, context: &serde_json::Value) -> Result<String>;
}

/// MiniJinja-based template rendering engine.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment with all templates loaded
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a renderer with every template from [`TEMPLATES`] loaded.
    ///
    /// # Errors
    /// * `Error::TemplateError` if a template fails to parse
    pub fn new() -> Result<Self> {
        let mut env = Environment::new();
        // Generated sources are not markup, and they must end exactly as the
        // template file does.
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.set_keep_trailing_newline(true);
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_undefined_behavior(UndefinedBehavior::Strict);

        for (name, source) in TEMPLATES {
            env.add_template(name, source)?;
        }
        Ok(Self { env })
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    /// Renders a loaded template using MiniJinja.
    ///
    /// # Errors
    /// * `Error::TemplateError` if:
    ///   - No template with this name exists
    ///   - The template references a variable missing from `context`
    fn render(&self, name: &str, context: &serde_json::Value) -> Result<String> {
        let tmpl = self.env.get_template(name)?;
        Ok(tmpl.render(context)?)
    }
}
