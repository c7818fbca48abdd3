use minijinja::{Environment, ErrorKind, UndefinedBehavior};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use thiserror::Error;

/// Failure to render a templated default
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("undefined value '{0}'")]
    Unresolved(String),

    #[error("{0}")]
    Syntax(String),
}

/// Renders Jinja-style defaults against the values resolved so far.
///
/// Variables are addressed through the namespace, e.g.
/// `{{ cookiecutter.project_name|lower|replace(' ', '') }}`.
///
/// The minijinja environment is configured once and reused for every
/// template rendered; templates must outlive the renderer.
pub struct TemplateRenderer<'source> {
    env: Environment<'source>,
    namespace: String,
}

impl<'source> TemplateRenderer<'source> {
    /// Create a renderer exposing bindings under `namespace`
    pub fn new(namespace: &str) -> Self {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_keep_trailing_newline(true);

        Self {
            env,
            namespace: namespace.to_string(),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Render `template` with `bindings` visible as `<namespace>.<name>`
    pub fn render(&self, template: &'source str, bindings: &Map<String, Value>) -> Result<String, RenderError> {
        if !has_template_markers(template) {
            return Ok(template.to_string());
        }

        let compiled = self
            .env
            .template_from_str(template)
            .map_err(|e| RenderError::Syntax(e.to_string()))?;

        let mut referenced: Vec<String> = compiled.undeclared_variables(true).into_iter().collect();
        referenced.sort();
        if let Some(missing) = referenced
            .into_iter()
            .find(|reference| !self.is_bound(reference, bindings))
        {
            return Err(RenderError::Unresolved(missing));
        }

        let ctx = BTreeMap::from([(self.namespace.as_str(), bindings)]);
        compiled.render(ctx).map_err(|e| match e.kind() {
            ErrorKind::UndefinedError => RenderError::Unresolved(e.to_string()),
            _ => RenderError::Syntax(e.to_string()),
        })
    }

    /// Whether a dotted reference into the namespace names a bound value.
    ///
    /// References outside the namespace are left to strict undefined
    /// handling at render time.
    fn is_bound(&self, reference: &str, bindings: &Map<String, Value>) -> bool {
        let mut parts = reference.split('.');
        if parts.next() != Some(self.namespace.as_str()) {
            return true;
        }
        match parts.next() {
            Some(name) => bindings.contains_key(name),
            None => true,
        }
    }
}

impl Default for TemplateRenderer<'_> {
    fn default() -> Self {
        Self::new(crate::prompt::ROOT_KEY)
    }
}

fn has_template_markers(text: &str) -> bool {
    text.contains("{{") || text.contains("{%") || text.contains("{#")
}
