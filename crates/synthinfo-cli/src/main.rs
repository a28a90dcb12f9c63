//! synthinfo CLI - inspect the synth and FX catalog
//!
//! This binary lists definitions, shows their arguments, validates argument
//! values, previews trigger messages and renders the catalog documentation.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use synthinfo_cli::commands;

/// synthinfo - Synth and FX definition catalog
#[derive(Parser)]
#[command(name = "synthinfo")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List registered synths, studio players and effects
    List {
        /// Only list definitions of this kind (synth, studio, fx)
        #[arg(long, value_parser = ["synth", "studio", "fx"])]
        kind: Option<String>,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Show a definition's arguments, engine name and kill delay
    Info {
        /// Registry key (e.g. beep, fx_echo)
        key: String,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Validate arguments for a synth or effect
    Validate {
        /// Registry key (e.g. beep, fx_echo)
        key: String,

        /// Arguments as name=value pairs (e.g. note=60 amp=0.5)
        args: Vec<String>,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,

        /// Turn validation off for this definition before checking
        #[arg(long)]
        no_validate: bool,
    },

    /// Show the message that would start a synth or effect
    Trigger {
        /// Registry key (e.g. beep, fx_echo)
        key: String,

        /// Arguments as name=value pairs (e.g. note=60 amp=0.5)
        args: Vec<String>,

        /// Multiplier for tempo-scaled arguments (60 / bpm)
        #[arg(long, default_value_t = 1.0)]
        tempo: f64,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Render catalog documentation
    Docs {
        /// Catalog section (synths, fx, samples)
        #[arg(value_parser = ["synths", "fx", "samples"])]
        section: String,

        /// Output format (html, markdown, json)
        #[arg(short, long, default_value = "markdown", value_parser = ["html", "markdown", "json"])]
        format: String,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// List bundled sample groups, or the samples in one group
    Samples {
        /// Sample group key (e.g. drum, ambi)
        category: Option<String>,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::List { kind, json } => commands::list::run(kind.as_deref(), json),
        Commands::Info { key, json } => commands::info::run(&key, json),
        Commands::Validate {
            key,
            args,
            json,
            no_validate,
        } => commands::validate::run(&key, &args, json, no_validate),
        Commands::Trigger {
            key,
            args,
            tempo,
            json,
        } => commands::trigger::run(&key, &args, tempo, json),
        Commands::Docs {
            section,
            format,
            output,
        } => commands::docs::run(&section, &format, output.as_deref()),
        Commands::Samples { category, json } => commands::samples::run(category.as_deref(), json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
