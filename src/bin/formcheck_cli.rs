//! formcheck CLI - bridge interface for host tooling
//!
//! Commands: rules, check, validate
//! Outputs JSON to stdout
//! Returns non-zero on validation failure

use clap::{Parser, Subcommand};
use std::collections::HashMap;
use std::path::PathBuf;
use std::process::ExitCode;

use formcheck_core::{
    rules::ConditionKind,
    spec::lint_scope,
    FormDefinition, ValidationEngine,
};

#[derive(Parser)]
#[command(name = "formcheck-cli")]
#[command(about = "formcheck CLI - form field validation")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log engine internals to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List known rule names
    Rules,

    /// Lint a form definition for configuration problems
    Check {
        /// Path to the form definition (JSON)
        #[arg(short, long)]
        form: PathBuf,
    },

    /// Run a whole-form validation pass
    Validate {
        /// Path to the form definition (JSON)
        #[arg(short, long)]
        form: PathBuf,

        /// JSON object of field values overriding the definition,
        /// e.g. '{"mail": "a@b.co"}'
        #[arg(long)]
        values: Option<String>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.verbose {
        let _ = simplelog::TermLogger::init(
            simplelog::LevelFilter::Debug,
            simplelog::Config::default(),
            simplelog::TerminalMode::Stderr,
            simplelog::ColorChoice::Auto,
        );
    }

    match cli.command {
        Commands::Rules => {
            let names = ConditionKind::known_names();
            println!("{}", serde_json::to_string_pretty(&names).unwrap());
            ExitCode::SUCCESS
        }

        Commands::Check { form } => {
            let definition = match FormDefinition::load_from_path(&form) {
                Ok(d) => d,
                Err(e) => {
                    eprintln!(r#"{{"error": "Failed to load form: {}"}}"#, e);
                    return ExitCode::FAILURE;
                }
            };
            let engine = ValidationEngine::from_definition(definition);
            let findings = lint_scope(engine.scope());
            let clean = findings.is_empty();
            let output = serde_json::json!({
                "clean": clean,
                "findings": findings,
            });
            println!("{}", serde_json::to_string_pretty(&output).unwrap());
            if clean {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(2)
            }
        }

        Commands::Validate { form, values } => {
            let definition = match FormDefinition::load_from_path(&form) {
                Ok(d) => d,
                Err(e) => {
                    eprintln!(r#"{{"error": "Failed to load form: {}"}}"#, e);
                    return ExitCode::FAILURE;
                }
            };
            let mut engine = ValidationEngine::from_definition(definition);

            if let Some(values) = values {
                let overrides: HashMap<String, String> = match serde_json::from_str(&values) {
                    Ok(v) => v,
                    Err(e) => {
                        println!(r#"{{"valid": false, "error": "Invalid values payload: {}"}}"#, e);
                        return ExitCode::FAILURE;
                    }
                };
                for (vid, value) in overrides {
                    if let Err(e) = engine.set_text(&vid, value) {
                        println!(r#"{{"valid": false, "error": "{}"}}"#, e);
                        return ExitCode::FAILURE;
                    }
                }
            }

            let valid = engine.validate_form();
            let errors: Vec<&str> = engine.errors().active_keys().collect();
            let output = serde_json::json!({
                "valid": valid,
                "errors": errors,
            });
            println!("{}", serde_json::to_string_pretty(&output).unwrap());
            if valid {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(2) // validation failure
            }
        }
    }
}
