//! Template variable resolution for project scaffolding.
//!
//! A template declares its variables in a context document such as
//!
//! ```json
//! {"cookiecutter": {"project_name": "A New Project",
//!                   "pkg_name": "{{ cookiecutter.project_name|lower|replace(' ', '') }}"}}
//! ```
//!
//! and [`prompt::ContextResolver`] turns it into final values, taking each
//! one from a `COOKIECUTTER_<NAME>` environment variable, the rendered
//! default, or an interactive answer.

pub mod app;
pub mod commands;
pub mod output;
pub mod prompt;
pub mod template;
pub mod traits;

pub use app::AppContext;
pub use prompt::{Context, ContextResolver, PromptError, ResolvedContext, prompt_for_config, query_yes_no};
