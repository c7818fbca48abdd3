use crate::traits::EnvironmentSource;

/// Prefix of environment variables that override declared defaults
pub const ENV_PREFIX: &str = "COOKIECUTTER_";

/// Environment variable consulted for `name`, e.g. `repo_name` -> `COOKIECUTTER_REPO_NAME`
pub fn override_key(name: &str) -> String {
    format!("{}{}", ENV_PREFIX, name.to_uppercase())
}

/// Raw override value for `name`, if one is set
pub fn lookup_override(env: &dyn EnvironmentSource, name: &str) -> Option<String> {
    env.var(&override_key(name))
}
