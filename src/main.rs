//! certbind CLI - build and inspect cert binding files

use certbind::{BindingBuilder, CertBinding, CertBindError, FixSuggestion};
use clap::builder::NonEmptyStringValueParser;
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::{Path, PathBuf};
use tracing::level_filters::LevelFilter;

#[derive(Parser)]
#[command(name = "certbind")]
#[command(about = "Bind a hostname to a certificate and private key as a JSON file")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a JSON cert binding file
    Create {
        /// Hostname to bind the cert to
        #[arg(long, value_parser = NonEmptyStringValueParser::new())]
        host: String,

        /// Certificate file
        #[arg(short, long)]
        cert: PathBuf,

        /// Key file
        #[arg(short, long)]
        key: PathBuf,

        /// Output JSON file (overwritten if it exists)
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Check a binding file and summarize its contents
    Inspect {
        /// Path to the binding JSON file
        file: PathBuf,
    },
}

fn main() {
    // Logs go to stderr; stdout is reserved for command output
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Create {
            host,
            cert,
            key,
            output,
        } => create_binding(&host, cert, key, &output),
        Commands::Inspect { file } => inspect_binding(&file),
    };

    if let Err(e) = result {
        eprintln!("{} {}", "Error:".red().bold(), e);
        if let Some(suggestion) = e.fix_suggestion() {
            eprintln!("  {} {}", "Fix:".yellow(), suggestion);
        }
        std::process::exit(1);
    }
}

fn create_binding(
    host: &str,
    cert: PathBuf,
    key: PathBuf,
    output: &Path,
) -> Result<(), CertBindError> {
    let binding = BindingBuilder::new(host, cert, key).write(output)?;

    println!(
        "{} Wrote binding for '{}' to {}",
        "✓".green(),
        binding.host,
        output.display()
    );
    Ok(())
}

fn inspect_binding(file: &Path) -> Result<(), CertBindError> {
    let binding = CertBinding::load(file)?;

    println!("{} Binding '{}' is valid", "✓".green(), file.display());
    println!("  Host: {}", binding.host);
    println!(
        "  Cert: {} bytes, {} lines",
        binding.cert.len(),
        binding.cert.lines().count()
    );
    println!(
        "  Key: {} bytes, {} lines",
        binding.key.len(),
        binding.key.lines().count()
    );
    Ok(())
}
