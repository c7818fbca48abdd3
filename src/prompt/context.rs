use super::error::PromptError;
use anyhow::Context as _;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::Path;

/// Conventional root key wrapping the variable declarations
pub const ROOT_KEY: &str = "cookiecutter";

/// Declaration of one template variable
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum VariableSpec {
    /// Bare string: the default value, possibly templated
    Simple(String),

    /// List of options; the first one is the default
    Choice(Vec<String>),

    /// Record with a default, prompt text and optional type tag
    Rich(RichSpec),
}

/// Record-shaped variable declaration
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct RichSpec {
    /// Default value, possibly templated
    #[serde(default)]
    pub default: Option<String>,

    /// Text shown when prompting (defaults to the variable name)
    #[serde(default)]
    pub prompt: Option<String>,

    /// Type tag controlling coercion of the answer
    #[serde(default, rename = "type")]
    pub type_tag: Option<String>,
}

impl RichSpec {
    pub fn new(default: &str) -> Self {
        Self {
            default: Some(default.to_string()),
            ..Self::default()
        }
    }

    pub fn with_prompt(mut self, prompt: &str) -> Self {
        self.prompt = Some(prompt.to_string());
        self
    }

    pub fn with_type(mut self, type_tag: &str) -> Self {
        self.type_tag = Some(type_tag.to_string());
        self
    }
}

/// A variable declaration normalised for resolution
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Declared<'a> {
    Text {
        default: &'a str,
        prompt: &'a str,
        type_tag: Option<&'a str>,
    },
    Choice {
        options: &'a [String],
    },
}

impl VariableSpec {
    /// Normalise either shape into what the resolver needs
    pub(crate) fn normalize<'a>(&'a self, name: &'a str) -> Result<Declared<'a>, PromptError> {
        match self {
            VariableSpec::Simple(default) => Ok(Declared::Text {
                default: default.as_str(),
                prompt: name,
                type_tag: None,
            }),
            VariableSpec::Rich(rich) => {
                let default = rich.default.as_deref().ok_or_else(|| PromptError::MissingDefault {
                    variable: name.to_string(),
                })?;
                Ok(Declared::Text {
                    default,
                    prompt: rich.prompt.as_deref().unwrap_or(name),
                    type_tag: rich.type_tag.as_deref(),
                })
            }
            VariableSpec::Choice(options) if options.is_empty() => Err(PromptError::InvalidContext(
                format!("variable '{}' has an empty list of choices", name),
            )),
            VariableSpec::Choice(options) => Ok(Declared::Choice {
                options: options.as_slice(),
            }),
        }
    }
}

impl From<&str> for VariableSpec {
    fn from(default: &str) -> Self {
        VariableSpec::Simple(default.to_string())
    }
}

impl From<RichSpec> for VariableSpec {
    fn from(rich: RichSpec) -> Self {
        VariableSpec::Rich(rich)
    }
}

/// Ordered declaration of a template's variables under a root namespace
#[derive(Debug, Clone, PartialEq)]
pub struct Context {
    root: String,
    variables: Vec<(String, VariableSpec)>,
}

impl Context {
    /// Create an empty context under `root`
    pub fn new(root: &str) -> Self {
        Self {
            root: root.to_string(),
            variables: Vec::new(),
        }
    }

    /// Append a variable, replacing an earlier declaration of the same name in place
    pub fn with_variable(mut self, name: &str, spec: impl Into<VariableSpec>) -> Self {
        let spec = spec.into();
        match self.variables.iter_mut().find(|(n, _)| n == name) {
            Some((_, existing)) => *existing = spec,
            None => self.variables.push((name.to_string(), spec)),
        }
        self
    }

    /// Build a context from a document with exactly one top-level key
    pub fn from_value(value: Value) -> Result<Self, PromptError> {
        let Value::Object(top) = value else {
            return Err(PromptError::InvalidContext(
                "context must be a mapping".to_string(),
            ));
        };

        if top.len() != 1 {
            return Err(PromptError::InvalidContext(format!(
                "context must have exactly one top-level key, found {}",
                top.len()
            )));
        }

        let Some((root, inner)) = top.into_iter().next() else {
            return Err(PromptError::InvalidContext("context is empty".to_string()));
        };

        let Value::Object(declarations) = inner else {
            return Err(PromptError::InvalidContext(format!(
                "'{}' must map variable names to declarations",
                root
            )));
        };

        let mut variables = Vec::with_capacity(declarations.len());
        for (name, raw) in declarations {
            if name.is_empty() {
                return Err(PromptError::InvalidContext(
                    "variable names must not be empty".to_string(),
                ));
            }
            let spec: VariableSpec = serde_json::from_value(raw).map_err(|e| {
                PromptError::InvalidContext(format!("variable '{}': {}", name, e))
            })?;
            variables.push((name, spec));
        }

        Ok(Self { root, variables })
    }

    /// Parse a JSON context document
    pub fn from_json_str(source: &str) -> Result<Self, PromptError> {
        let value: Value = serde_json::from_str(source)
            .map_err(|e| PromptError::InvalidContext(format!("invalid JSON: {}", e)))?;
        Self::from_value(value)
    }

    /// Parse a YAML context document
    pub fn from_yaml_str(source: &str) -> Result<Self, PromptError> {
        let value: Value = serde_yaml::from_str(source)
            .map_err(|e| PromptError::InvalidContext(format!("invalid YAML: {}", e)))?;
        Self::from_value(value)
    }

    /// Load a context file, YAML for `.yaml`/`.yml` and JSON otherwise
    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read context file: {:?}", path))?;

        let is_yaml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));

        let context = if is_yaml {
            Self::from_yaml_str(&source)
        } else {
            Self::from_json_str(&source)
        };

        context.with_context(|| format!("Failed to parse context file: {:?}", path))
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    /// Variables in declaration order
    pub fn variables(&self) -> impl Iterator<Item = (&str, &VariableSpec)> {
        self.variables.iter().map(|(name, spec)| (name.as_str(), spec))
    }

    pub fn get(&self, name: &str) -> Option<&VariableSpec> {
        self.variables
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, spec)| spec)
    }

    pub(crate) fn get_mut(&mut self, name: &str) -> Option<&mut VariableSpec> {
        self.variables
            .iter_mut()
            .find(|(n, _)| n == name)
            .map(|(_, spec)| spec)
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}

/// Final values for every declared variable, in declaration order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ResolvedContext {
    values: Map<String, Value>,
}

impl ResolvedContext {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, name: &str, value: Value) {
        self.values.insert(name.to_string(), value);
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.values.get(name).and_then(Value::as_str)
    }

    pub fn get_bool(&self, name: &str) -> Option<bool> {
        self.values.get(name).and_then(Value::as_bool)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Resolved values in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.values.iter()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.values
    }
}

impl From<ResolvedContext> for Value {
    fn from(resolved: ResolvedContext) -> Self {
        Value::Object(resolved.values)
    }
}
