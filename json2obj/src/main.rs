//! Binary to generate Java classes or Go structs from a sample JSON file.
//!
//! Usage: `json2obj [--lang java|go] [--output PATH] [--package NAME] <FILE>`
//!
//! Writes the generated source to `--output` when given, otherwise to stdout.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use json2obj::{GenerateSettings, Json2ObjError, TargetLanguage, generate_from_file};

#[derive(Parser, Debug)]
#[command(name = "json2obj", version)]
#[command(about = "converts json to code")]
#[command(
    long_about = "Reads a JSON object and generates the matching Java classes or Go structs. \
Nested objects and arrays of objects become their own declarations."
)]
struct Cli {
    /// JSON file to convert
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Target language (java or go)
    #[arg(short, long, default_value = "go")]
    lang: String,

    /// Write the generated code to this file instead of stdout; its name
    /// becomes the root declaration name
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Package clause for the generated file
    #[arg(short, long, value_name = "NAME")]
    package: Option<String>,
}

fn main() {
    let filter: EnvFilter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli: Cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Json2ObjError> {
    let target_language: TargetLanguage = cli.lang.parse()?;
    let settings: GenerateSettings = GenerateSettings {
        target_language,
        output_name: None,
        package: cli.package.clone(),
    };
    generate_from_file(&cli.file, cli.output.as_deref(), &settings)
}
