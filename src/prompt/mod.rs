//! Resolution of template variables from prompts, environment overrides and defaults

pub mod coerce;
pub mod context;
pub mod engine;
pub mod env;
pub mod error;
pub mod overwrites;
pub mod read;
pub mod yes_no;

pub use coerce::{CoercionError, VariableType, coerce, parse_bool};
pub use context::{Context, ROOT_KEY, ResolvedContext, RichSpec, VariableSpec};
pub use engine::{ContextResolver, prompt_for_config};
pub use env::{ENV_PREFIX, lookup_override, override_key};
pub use error::PromptError;
pub use overwrites::{apply_overwrites, parse_overwrite};
pub use read::{read_choice, read_response};
pub use yes_no::query_yes_no;
