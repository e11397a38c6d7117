use std::str::FromStr;

use clap::{Parser, Subcommand};
use extforge_lib::FitMode;
use tracing_subscriber::EnvFilter;

mod cmd;
mod output;
mod prompts;

use output::{OutputFormat, print_error};

/// extforge - Browser extension skeleton generator
#[derive(Parser)]
#[command(name = "extforge")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Enable verbose output
  #[arg(short, long, global = true)]
  verbose: bool,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Create a starter extension.json and popup template
  Init {
    /// Project directory (default: current directory)
    #[arg(default_value = ".")]
    path: String,
  },

  /// Print the manifest.json a config would produce
  Manifest {
    /// Path to the config file
    #[arg(default_value = "extension.json")]
    config: String,
  },

  /// Render icon previews into a directory
  Icons {
    /// Path to the config file
    #[arg(default_value = "extension.json")]
    config: String,

    /// Directory to write the PNGs to
    #[arg(short, long, default_value = "icons")]
    out_dir: String,

    /// Override the configured fit mode (fill, contain or cover)
    #[arg(long, value_name = "MODE", value_parser = FitMode::from_str)]
    fit: Option<FitMode>,
  },

  /// Export the extension project as a zip archive
  Build {
    /// Path to the config file
    #[arg(default_value = "extension.json")]
    config: String,

    /// Directory to write the archive to
    #[arg(short, long, default_value = ".")]
    out_dir: String,

    /// Overwrite an existing archive without asking
    #[arg(short, long)]
    force: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
  },
}

fn init_tracing(verbose: bool) {
  let default_level = if verbose { "debug" } else { "warn" };
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .without_time()
    .init();
}

fn main() {
  let cli = Cli::parse();
  init_tracing(cli.verbose);

  let result = match cli.command {
    Commands::Init { path } => cmd::cmd_init(&path),
    Commands::Manifest { config } => cmd::cmd_manifest(&config),
    Commands::Icons { config, out_dir, fit } => cmd::cmd_icons(&config, &out_dir, fit),
    Commands::Build {
      config,
      out_dir,
      force,
      format,
    } => cmd::cmd_build(&config, &out_dir, force, format),
  };

  if let Err(err) = result {
    print_error(&format!("{:#}", err));
    std::process::exit(1);
  }
}
