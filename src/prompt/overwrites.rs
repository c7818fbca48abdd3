use super::context::{Context, VariableSpec};
use super::error::PromptError;
use log::debug;

/// Split a `KEY=VALUE` argument
pub fn parse_overwrite(token: &str) -> Result<(String, String), PromptError> {
    match token.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(PromptError::InvalidArgument(format!(
            "expected KEY=VALUE, got '{}'",
            token
        ))),
    }
}

/// Replace declared defaults with caller-supplied values before resolution.
///
/// Choice variables move the given option to the front. Names that are not
/// declared are ignored.
pub fn apply_overwrites(context: &mut Context, overwrites: &[(String, String)]) -> Result<(), PromptError> {
    for (name, value) in overwrites {
        let Some(spec) = context.get_mut(name) else {
            debug!("Ignoring overwrite for undeclared variable '{}'", name);
            continue;
        };

        match spec {
            VariableSpec::Simple(default) => *default = value.clone(),
            VariableSpec::Rich(rich) => rich.default = Some(value.clone()),
            VariableSpec::Choice(options) => {
                let Some(position) = options.iter().position(|o| o == value) else {
                    return Err(PromptError::InvalidChoice {
                        variable: name.clone(),
                        value: value.clone(),
                        options: options.clone(),
                    });
                };
                let chosen = options.remove(position);
                options.insert(0, chosen);
            }
        }
    }

    Ok(())
}
