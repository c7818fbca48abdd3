use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use cookiecutter::AppContext;
use cookiecutter::commands::{ConfirmCommand, OutputFormat, ResolveCommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cookiecutter")]
#[command(about = "Resolve project template variables from prompts, environment overrides and defaults", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve the variables declared in a context file
    Resolve {
        /// Context file (JSON, or YAML with a .yaml/.yml extension)
        context_file: PathBuf,

        /// Extra context as KEY=VALUE, replacing declared defaults
        extra_context: Vec<String>,

        /// Do not prompt; use environment overrides and defaults
        #[arg(long)]
        no_input: bool,

        /// Output format for the resolved values
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },

    /// Ask a yes/no question; exits non-zero on "no"
    Confirm {
        /// Question to ask
        question: String,

        /// Answer used on an empty line ("yes" or "no")
        #[arg(short, long)]
        default: Option<String>,
    },
}

fn setup_logging(verbose: bool) -> Result<()> {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .try_init()
        .context("Failed to setup logging")?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose)?;

    let ctx = AppContext::new();

    match cli.command {
        Commands::Resolve {
            context_file,
            extra_context,
            no_input,
            format,
        } => {
            ResolveCommand::execute(&ctx, &context_file, &extra_context, no_input, format)?;
        }
        Commands::Confirm { question, default } => {
            if !ConfirmCommand::execute(&ctx, &question, default.as_deref())? {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
