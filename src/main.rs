use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use focus_chat::app::{AppError, ConfigResolver, Configuration, CustomizationBundle, PageSelectors};

#[derive(Parser)]
#[command(name = "focuschat", version, about = "Render FocusChat customizations for WhatsApp Web")]
struct Cli {
    /// Configuration file (defaults to the platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the stylesheet
    Css,
    /// Print the page script
    Script,
    /// Write the stylesheet and script into a directory
    Bundle {
        #[arg(long)]
        out: PathBuf,
    },
    /// Print the resolved configuration
    Config,
    /// Write the default configuration file
    InitConfig {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> ExitCode {
    // Logs go to stderr so printed artifacts stay clean on stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let resolver = match cli.config {
        Some(path) => ConfigResolver::new(path),
        None => ConfigResolver::default(),
    };

    match cli.command {
        Command::InitConfig { force } => {
            let path = resolver.path();
            if path.exists() && !force {
                return Err(AppError::Config(format!(
                    "{} already exists (use --force to overwrite)",
                    path.display()
                )));
            }
            Configuration::default().save(path)?;
            info!(path = %path.display(), "wrote default configuration");
        }
        Command::Config => {
            let config = resolver.resolve();
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        Command::Css => {
            let bundle = CustomizationBundle::derive(&resolver.resolve(), &PageSelectors::default())?;
            print!("{}", bundle.stylesheet);
        }
        Command::Script => {
            let bundle = CustomizationBundle::derive(&resolver.resolve(), &PageSelectors::default())?;
            print!("{}", bundle.script);
        }
        Command::Bundle { out } => {
            let bundle = CustomizationBundle::derive(&resolver.resolve(), &PageSelectors::default())?;
            let (css_path, js_path) = bundle.write_to_dir(&out)?;
            println!("{}", css_path.display());
            println!("{}", js_path.display());
        }
    }

    Ok(())
}
