//! Template rendering for the HTML pages.

use std::path::Path;

use minijinja::{path_loader, Environment};
use serde::Serialize;

/// Failure while producing a page. The display text is shown to the visitor.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The template could not be found or parsed.
    #[error("Template error: {0}")]
    Template(String),

    /// The template failed while rendering the context.
    #[error("Render error: {0}")]
    Render(String),
}

/// Renders a named template against a JSON context.
pub trait TemplateRenderer: Send + Sync {
    fn render(&self, name: &str, context: &serde_json::Value) -> Result<String, RenderError>;
}

/// Serialize `page` and render it through `renderer`.
pub fn render_page<T: Serialize>(
    renderer: &dyn TemplateRenderer,
    name: &str,
    page: &T,
) -> Result<String, RenderError> {
    let context = serde_json::to_value(page).map_err(|e| RenderError::Render(e.to_string()))?;
    renderer.render(name, &context)
}

/// Templates loaded from a directory on disk. HTML auto-escaping is on for
/// `.html` templates.
pub struct FileTemplates {
    env: Environment<'static>,
}

impl FileTemplates {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        let mut env = Environment::new();
        env.set_loader(path_loader(dir.as_ref().to_path_buf()));
        Self { env }
    }
}

impl TemplateRenderer for FileTemplates {
    fn render(&self, name: &str, context: &serde_json::Value) -> Result<String, RenderError> {
        let template = self
            .env
            .get_template(name)
            .map_err(|e| RenderError::Template(e.to_string()))?;
        template
            .render(context)
            .map_err(|e| RenderError::Render(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;

    fn webview() -> FileTemplates {
        FileTemplates::new(concat!(env!("CARGO_MANIFEST_DIR"), "/../../webview"))
    }

    #[test]
    fn missing_template_is_a_template_error() {
        let err = webview().render("missing.html", &json!({})).unwrap_err();
        assert_matches!(err, RenderError::Template(_));
        assert!(err.to_string().starts_with("Template error: "));
    }

    #[test]
    fn html_output_is_escaped() {
        let html = webview()
            .render(
                "portfolio.html",
                &json!({"projects": [{"id": 1, "name": "<b>x</b>", "description": "d", "image_url": "", "link": ""}]}),
            )
            .unwrap();
        assert!(html.contains("&lt;b&gt;x"));
        assert!(!html.contains("<b>x</b>"));
    }
}
