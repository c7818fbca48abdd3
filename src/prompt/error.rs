use thiserror::Error;

/// Errors raised while resolving a template context
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("Variable '{variable}' has no default value")]
    MissingDefault { variable: String },

    #[error("Variable '{variable}' references undefined value '{reference}'")]
    UnresolvedReference { variable: String, reference: String },

    #[error("Variable '{variable}' has an invalid template: {message}")]
    InvalidTemplate { variable: String, message: String },

    #[error("Variable '{variable}' expects a boolean, got '{value}'")]
    InvalidBooleanLiteral { variable: String, value: String },

    #[error("Variable '{variable}' must be one of [{}], got '{value}'", .options.join(", "))]
    InvalidChoice {
        variable: String,
        value: String,
        options: Vec<String>,
    },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid context: {0}")]
    InvalidContext(String),

    #[error(
        "Failed to read answer for '{prompt}'{}: {reason}",
        .variable.as_deref().map(|v| format!(" (variable '{}')", v)).unwrap_or_default()
    )]
    Input {
        prompt: String,
        variable: Option<String>,
        reason: String,
    },
}

impl PromptError {
    /// Wrap a failure from an input source
    pub(crate) fn input(prompt: &str, err: anyhow::Error) -> Self {
        PromptError::Input {
            prompt: prompt.to_string(),
            variable: None,
            reason: format!("{:#}", err),
        }
    }

    /// Attribute an input failure to the variable being resolved
    pub(crate) fn for_variable(self, name: &str) -> Self {
        match self {
            PromptError::Input { prompt, reason, .. } => PromptError::Input {
                prompt,
                variable: Some(name.to_string()),
                reason,
            },
            other => other,
        }
    }

    /// The variable this error is attributed to, if any
    pub fn variable(&self) -> Option<&str> {
        match self {
            PromptError::MissingDefault { variable }
            | PromptError::UnresolvedReference { variable, .. }
            | PromptError::InvalidTemplate { variable, .. }
            | PromptError::InvalidBooleanLiteral { variable, .. }
            | PromptError::InvalidChoice { variable, .. } => Some(variable),
            PromptError::Input { variable, .. } => variable.as_deref(),
            _ => None,
        }
    }
}
