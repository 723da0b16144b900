//! Template rendering for cli-init.
//! Evaluates registry templates against the application context.
use crate::error::{Error, Result};
use crate::template::{TemplateName, TemplateRegistry};

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a named template with the given context.
    ///
    /// # Arguments
    /// * `template` - Template to render
    /// * `context` - Context variables for rendering
    ///
    /// # Returns
    /// * `Result<String>` - Rendered template string
    fn render(&self, template: TemplateName, context: &serde_json::Value) -> Result<String>;
}

impl TemplateRenderer for TemplateRegistry {
    /// Renders a registered template using MiniJinja.
    ///
    /// # Errors
    /// * `Error::TemplateRenderError` if:
    ///   - The template is not registered
    ///   - The context lacks a value the template references
    fn render(&self, template: TemplateName, context: &serde_json::Value) -> Result<String> {
        let render_error = |source| Error::TemplateRenderError { name: template.to_string(), source };

        let tmpl = self.env().get_template(template.as_str()).map_err(render_error)?;

        tmpl.render(context).map_err(render_error)
    }
}

/// A file to generate: its name inside the output directory and the
/// template producing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    pub name: String,
    pub template: TemplateName,
}

impl Source {
    pub fn new<S: Into<String>>(name: S, template: TemplateName) -> Self {
        Self { name: name.into(), template }
    }
}
