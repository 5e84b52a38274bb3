//! Main entry point for the Babel command-line tool.

use anyhow::Context;
use babel_cli::{init_logging, parse_variables, App};
use babel_config::ConfigLoader;
use clap::{Parser, Subcommand};
use tracing::{info, warn};

#[derive(Parser)]
#[command(
    name = "babel",
    version,
    about = "Look up text in flat-file translation catalogs"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to config file (TOML, YAML, or JSON).
    #[arg(short, long, default_value = "babel.toml")]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a translation key in the active language.
    Lookup {
        /// The translation key.
        key: String,

        /// Language to resolve in, instead of the configured one.
        #[arg(short, long)]
        lang: Option<String>,

        /// Placeholder value as NAME=VALUE; may be repeated.
        #[arg(short, long = "var", value_name = "NAME=VALUE")]
        vars: Vec<String>,
    },
    /// List loaded languages and their entry counts.
    Languages,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let mut config = ConfigLoader::new(&cli.config)
        .load_or_default()
        .with_context(|| format!("failed to load configuration from {}", cli.config))?;
    config.apply_env_overrides();

    let _guard = init_logging(&config.logging)?;
    info!("Starting Babel");

    let app = App::new(config)?;
    let summary = app.load();
    if summary.failures > 0 {
        warn!(
            "{} translation sources failed to load from {:?}",
            summary.failures,
            app.config().translations.directory
        );
    }

    match cli.command {
        Commands::Lookup { key, lang, vars } => {
            let variables = parse_variables(&vars)?;
            println!("{}", app.lookup(&key, lang.as_deref(), &variables));
        }
        Commands::Languages => {
            for (code, entries) in app.languages() {
                println!("{code}\t{entries}");
            }
        }
    }

    Ok(())
}
