use crate::app::AppContext;
use crate::prompt::{Context, ContextResolver, ResolvedContext, apply_overwrites, parse_overwrite};
use anyhow::{Context as _, Result};
use clap::ValueEnum;
use log::info;
use serde_json::Value;
use std::path::Path;

/// How the resolved context is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
    Table,
}

/// Handles the 'resolve' command - resolves a context file to final values
pub struct ResolveCommand;

impl ResolveCommand {
    /// Execute the resolve command
    pub fn execute(
        ctx: &AppContext,
        context_file: &Path,
        overwrites: &[String],
        no_input: bool,
        format: OutputFormat,
    ) -> Result<ResolvedContext> {
        let mut context = Context::from_path(context_file)?;
        info!("Loaded {} variable(s) from {:?}", context.len(), context_file);

        let overwrites = overwrites
            .iter()
            .map(|token| parse_overwrite(token))
            .collect::<Result<Vec<_>, _>>()?;
        for (name, _) in &overwrites {
            if context.get(name).is_none() {
                ctx.output.warning(&format!(
                    "Ignoring extra context for undeclared variable '{}'",
                    name
                ));
            }
        }
        apply_overwrites(&mut context, &overwrites).context("Failed to apply extra context")?;

        let resolved = ContextResolver::from_app(ctx)
            .resolve(&context, no_input)
            .context("Failed to resolve template variables")?;

        Self::print(ctx, &resolved, format)?;

        Ok(resolved)
    }

    fn print(ctx: &AppContext, resolved: &ResolvedContext, format: OutputFormat) -> Result<()> {
        match format {
            OutputFormat::Json => {
                let text = serde_json::to_string_pretty(resolved)
                    .context("Failed to serialize resolved context")?;
                ctx.output.plain(&text);
            }
            OutputFormat::Yaml => {
                let text = serde_yaml::to_string(resolved)
                    .context("Failed to serialize resolved context")?;
                ctx.output.plain(text.trim_end());
            }
            OutputFormat::Table => {
                ctx.output.section("Resolved context");
                for (name, value) in resolved.iter() {
                    let shown = match value {
                        Value::String(s) => s.clone(),
                        other => other.to_string(),
                    };
                    ctx.output.key_value(name, &shown);
                }
                ctx.output.blank();
                ctx.output.success(&format!("Resolved {} variable(s)", resolved.len()));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::{MockEnvironment, MockOutput, MockUserInput, OutputMessage};
    use std::sync::Arc;

    fn write_context(dir: &tempfile::TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    fn create_test_context(
        input: MockUserInput,
        env: MockEnvironment,
        output: Arc<MockOutput>,
    ) -> AppContext {
        AppContext::test_with(Arc::new(input), Arc::new(env), output)
    }

    #[test]
    fn test_resolve_json_with_no_input() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_context(
            &dir,
            "cookiecutter.json",
            r#"{"cookiecutter": {"project_name": "A New Project", "pkg_name": "{{ cookiecutter.project_name|lower|replace(' ', '') }}"}}"#,
        );
        let output = Arc::new(MockOutput::new());
        let ctx = create_test_context(MockUserInput::new(), MockEnvironment::new(), output.clone());

        let resolved = ResolveCommand::execute(&ctx, &path, &[], true, OutputFormat::Json).unwrap();

        assert_eq!(resolved.get_str("pkg_name"), Some("anewproject"));
        let printed = output.to_text();
        let parsed: Value = serde_json::from_str(&printed).unwrap();
        assert_eq!(
            parsed,
            serde_json::json!({"project_name": "A New Project", "pkg_name": "anewproject"})
        );
    }

    #[test]
    fn test_resolve_applies_overwrites_before_prompting() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_context(
            &dir,
            "cookiecutter.yaml",
            "cookiecutter:\n  full_name: Your Name\n  email: you@example.com\n",
        );
        let output = Arc::new(MockOutput::new());
        let ctx = create_test_context(MockUserInput::always("\n"), MockEnvironment::new(), output.clone());

        let resolved = ResolveCommand::execute(
            &ctx,
            &path,
            &["full_name=Audrey Roy".to_string()],
            false,
            OutputFormat::Yaml,
        )
        .unwrap();

        assert_eq!(resolved.get_str("full_name"), Some("Audrey Roy"));
        assert_eq!(resolved.get_str("email"), Some("you@example.com"));
        assert!(!output.to_text().contains("Ignoring"));
    }

    #[test]
    fn test_resolve_warns_about_undeclared_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_context(&dir, "cookiecutter.json", r#"{"cookiecutter": {"name": "demo"}}"#);
        let output = Arc::new(MockOutput::new());
        let ctx = create_test_context(MockUserInput::new(), MockEnvironment::new(), output.clone());

        ResolveCommand::execute(&ctx, &path, &["nmae=typo".to_string()], true, OutputFormat::Json)
            .unwrap();

        assert!(output.contains_message(&OutputMessage::Warning(
            "Ignoring extra context for undeclared variable 'nmae'".to_string()
        )));
    }

    #[test]
    fn test_resolve_table_output() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_context(
            &dir,
            "cookiecutter.json",
            r#"{"cookiecutter": {"name": "demo", "use_ci": {"default": "yes", "type": "boolean"}}}"#,
        );
        let output = Arc::new(MockOutput::new());
        let env = MockEnvironment::with_vars(&[("COOKIECUTTER_USE_CI", "no")]);
        let ctx = create_test_context(MockUserInput::new(), env, output.clone());

        ResolveCommand::execute(&ctx, &path, &[], true, OutputFormat::Table).unwrap();

        assert_eq!(
            output.get_key_values(),
            vec![
                ("name".to_string(), "demo".to_string()),
                ("use_ci".to_string(), "false".to_string())
            ]
        );
        assert!(output.contains_message(&OutputMessage::Success("Resolved 2 variable(s)".to_string())));
    }

    #[test]
    fn test_resolve_rejects_malformed_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_context(&dir, "cookiecutter.json", r#"{"cookiecutter": {"name": "demo"}}"#);
        let ctx = create_test_context(
            MockUserInput::new(),
            MockEnvironment::new(),
            Arc::new(MockOutput::new()),
        );

        let err = ResolveCommand::execute(&ctx, &path, &["name".to_string()], true, OutputFormat::Json)
            .unwrap_err();
        assert!(err.to_string().contains("expected KEY=VALUE"));
    }

    #[test]
    fn test_resolve_reports_offending_variable() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_context(
            &dir,
            "cookiecutter.json",
            r#"{"cookiecutter": {"slug": "{{ cookiecutter.missing }}"}}"#,
        );
        let ctx = AppContext::test();

        let err = ResolveCommand::execute(&ctx, &path, &[], true, OutputFormat::Json).unwrap_err();
        assert!(format!("{:#}", err).contains("Variable 'slug'"));
    }
}
