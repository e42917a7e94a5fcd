//! Command-line interface of the `zodgen` binary.

use clap::{ArgAction, Parser};
use std::path::PathBuf;
use zodgen_codegen::{
    ActionDescriptor, CodegenError, GeneratorConfig, load_actions, output_path_for,
};

/// Generate Zod validators from a GraphQL SDL schema.
#[derive(Parser, Debug)]
#[command(name = "zodgen", version, about)]
pub struct Cli {
    /// GraphQL SDL schema file
    pub schema: PathBuf,

    /// Output TypeScript file (defaults to `<schema stem>-zod-schemas.ts`)
    #[arg(short, long, conflicts_with = "stdout")]
    pub out: Option<PathBuf>,

    /// JSON file holding an array of action descriptors
    #[arg(long, value_name = "FILE")]
    pub actions: Option<PathBuf>,

    /// Action given inline, applied after those from `--actions`
    #[arg(long = "action", value_name = "VERB:SCOPE:INPUT", value_parser = parse_action)]
    pub inline_actions: Vec<ActionDescriptor>,

    /// Property name of the action tag literal
    #[arg(long, value_name = "NAME", default_value = "tag")]
    pub tag_field: String,

    /// Skip the inferred `export type` aliases
    #[arg(long)]
    pub no_type_aliases: bool,

    /// Skip catalog validation; unresolved types then accept any value
    #[arg(long)]
    pub no_validate: bool,

    /// Print the module to stdout instead of writing a file
    #[arg(long)]
    pub stdout: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Where the generated module goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    /// Standard output.
    Stdout,
    /// A file path.
    File(PathBuf),
}

impl Cli {
    /// Builds the generator configuration, loading the action file if given.
    ///
    /// # Errors
    /// Returns `CodegenError` if the action file cannot be read or decoded.
    pub fn config(&self) -> Result<GeneratorConfig, CodegenError> {
        let mut config = GeneratorConfig::new()
            .tag_field(self.tag_field.as_str())
            .type_aliases(!self.no_type_aliases)
            .validate(!self.no_validate);

        if let Some(path) = &self.actions {
            config = config.actions(load_actions(path)?);
        }

        Ok(config.actions(self.inline_actions.iter().cloned()))
    }

    /// Resolves the output destination.
    #[must_use]
    pub fn output(&self) -> Output {
        if self.stdout {
            Output::Stdout
        } else {
            Output::File(
                self.out
                    .clone()
                    .unwrap_or_else(|| output_path_for(&self.schema)),
            )
        }
    }

    /// Default log filter when `RUST_LOG` is unset.
    #[must_use]
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

fn parse_action(arg: &str) -> Result<ActionDescriptor, String> {
    ActionDescriptor::from_arg(arg).map_err(|e| e.to_string())
}
