use super::coerce::coerce;
use super::context::{Context, Declared, ResolvedContext, VariableSpec};
use super::env::{lookup_override, override_key};
use super::error::PromptError;
use super::read::{read_choice, read_response};
use crate::app::AppContext;
use crate::template::{RenderError, TemplateRenderer};
use crate::traits::{EnvironmentSource, UserInput};
use log::{debug, info};
use serde_json::Value;
use std::sync::Arc;

/// Resolves every declared variable to its final value.
///
/// Precedence per variable: environment override, then the rendered default
/// when `no_input` is set, then an interactive answer.
pub struct ContextResolver {
    input: Arc<dyn UserInput>,
    env: Arc<dyn EnvironmentSource>,
}

impl ContextResolver {
    pub fn new(input: Arc<dyn UserInput>, env: Arc<dyn EnvironmentSource>) -> Self {
        Self { input, env }
    }

    /// Resolver wired to the application's input and environment
    pub fn from_app(app: &AppContext) -> Self {
        Self::new(Arc::clone(&app.input), Arc::clone(&app.env))
    }

    /// Resolve `context` in declaration order.
    ///
    /// Each value is visible to the templated defaults declared after it.
    pub fn resolve(&self, context: &Context, no_input: bool) -> Result<ResolvedContext, PromptError> {
        let renderer = TemplateRenderer::new(context.root());
        let mut resolved = ResolvedContext::new();

        info!(
            "Resolving {} variable(s) under '{}'{}",
            context.len(),
            context.root(),
            if no_input { " without prompting" } else { "" }
        );

        for (name, spec) in context.variables() {
            let value = self.resolve_variable(&renderer, name, spec, &resolved, no_input)?;
            debug!("Resolved '{}' = {}", name, value);
            resolved.insert(name, value);
        }

        Ok(resolved)
    }

    fn resolve_variable<'s>(
        &self,
        renderer: &TemplateRenderer<'s>,
        name: &'s str,
        spec: &'s VariableSpec,
        resolved: &ResolvedContext,
        no_input: bool,
    ) -> Result<Value, PromptError> {
        match spec.normalize(name)? {
            Declared::Text {
                default,
                prompt,
                type_tag,
            } => {
                let default = render_default(renderer, name, default, resolved)?;

                let raw = match self.environment_override(name) {
                    Some(value) => value,
                    None if no_input => default,
                    None => read_response(&*self.input, prompt, &default)
                        .map_err(|e| e.for_variable(name))?,
                };

                coerce(&raw, type_tag).map_err(|e| PromptError::InvalidBooleanLiteral {
                    variable: name.to_string(),
                    value: e.value,
                })
            }
            Declared::Choice { options } => {
                let options = options
                    .iter()
                    .map(|option| render_default(renderer, name, option, resolved))
                    .collect::<Result<Vec<_>, _>>()?;

                let choice = match self.environment_override(name) {
                    Some(value) if options.contains(&value) => value,
                    Some(value) => {
                        return Err(PromptError::InvalidChoice {
                            variable: name.to_string(),
                            value,
                            options,
                        });
                    }
                    None if no_input => options[0].clone(),
                    None => read_choice(&*self.input, name, &options)
                        .map_err(|e| e.for_variable(name))?,
                };

                Ok(Value::String(choice))
            }
        }
    }

    fn environment_override(&self, name: &str) -> Option<String> {
        let value = lookup_override(&*self.env, name)?;
        debug!("Using {} for '{}'", override_key(name), name);
        Some(value)
    }
}

/// Resolve `context` with the application's input and environment
pub fn prompt_for_config(app: &AppContext, context: &Context, no_input: bool) -> Result<ResolvedContext, PromptError> {
    ContextResolver::from_app(app).resolve(context, no_input)
}

fn render_default<'s>(
    renderer: &TemplateRenderer<'s>,
    name: &str,
    template: &'s str,
    resolved: &ResolvedContext,
) -> Result<String, PromptError> {
    renderer
        .render(template, resolved.as_map())
        .map_err(|e| match e {
            RenderError::Unresolved(reference) => PromptError::UnresolvedReference {
                variable: name.to_string(),
                reference,
            },
            RenderError::Syntax(message) => PromptError::InvalidTemplate {
                variable: name.to_string(),
                message,
            },
        })
}
