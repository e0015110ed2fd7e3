//! Taleforge CLI - storage and configuration commands.
//!
//! Commands:
//! - `init` - create the local store and print its schema version
//! - `routes` - print the route table, or resolve one path
//! - `library list|add|remove` - manage files recorded in the store
//! - `config show|path` - print the effective config or its location

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use taleforge_core::{AppConfig, Route, RouteMatch, Store, ROUTES};

#[derive(Parser)]
#[command(name = "taleforge", about = "Taleforge CLI - local storage and routes")]
struct Cli {
    /// Config file. Defaults to config.toml under the user config dir.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the storage directory from the config.
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the local store if needed and report its schema version.
    Init,

    /// Print the route table.
    Routes {
        /// Resolve this path instead of listing all routes.
        #[arg(long)]
        resolve: Option<String>,
    },

    /// Manage files recorded in the library.
    Library {
        #[command(subcommand)]
        action: LibraryAction,
    },

    /// Inspect configuration.
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum LibraryAction {
    /// List recorded files, newest first.
    List,
    /// Record one or more files.
    Add {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Remove a record by id. The file itself is left alone.
    Remove { id: String },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective config as TOML.
    Show,
    /// Print the config file location.
    Path,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_env("TALEFORGE_LOG").unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config_path = cli.config.clone().unwrap_or_else(AppConfig::default_path);
    let mut config = AppConfig::load(&config_path)?;
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }

    match cli.command {
        Commands::Init => cmd_init(&config),
        Commands::Routes { resolve } => cmd_routes(resolve.as_deref()),
        Commands::Library { action } => match action {
            LibraryAction::List => cmd_library_list(&config),
            LibraryAction::Add { files } => cmd_library_add(&config, &files),
            LibraryAction::Remove { id } => cmd_library_remove(&config, &id),
        },
        Commands::Config { action } => match action {
            ConfigAction::Show => {
                print!("{}", config.to_toml()?);
                Ok(())
            }
            ConfigAction::Path => {
                println!("{}", config_path.display());
                Ok(())
            }
        },
    }
}

fn open_store(config: &AppConfig) -> Result<Store> {
    let path = config.db_path();
    Store::open(&path).with_context(|| format!("opening store at {}", path.display()))
}

fn cmd_init(config: &AppConfig) -> Result<()> {
    let store = open_store(config)?;
    println!(
        "Store ready at {} (schema v{})",
        config.db_path().display(),
        store.schema_version()?
    );
    Ok(())
}

fn cmd_routes(resolve: Option<&str>) -> Result<()> {
    if let Some(path) = resolve {
        match Route::resolve(path) {
            RouteMatch::Found(route) => println!("{} -> {}", path, route.label()),
            RouteMatch::NotFound(_) => bail!("no route for {:?}", path),
        }
        return Ok(());
    }

    println!("{:<4} {:<12} LABEL", "#", "PATH");
    for route in ROUTES {
        println!("{:<4} {:<12} {}", route.index() + 1, route.path(), route.label());
    }
    Ok(())
}

fn cmd_library_list(config: &AppConfig) -> Result<()> {
    let store = open_store(config)?;
    let entries = store.list_library_files()?;
    if entries.is_empty() {
        println!("Library is empty.");
        return Ok(());
    }

    println!("{:<36}  {:<6} {:>10}  {:<16}  NAME", "ID", "KIND", "BYTES", "ADDED");
    for e in &entries {
        println!(
            "{:<36}  {:<6} {:>10}  {:<16}  {}",
            e.id,
            e.kind.as_str(),
            e.size_bytes,
            e.added_at.format("%Y-%m-%d %H:%M"),
            e.name
        );
    }
    Ok(())
}

fn cmd_library_add(config: &AppConfig, files: &[PathBuf]) -> Result<()> {
    let store = open_store(config)?;
    for file in files {
        let entry = store
            .add_library_file(file)
            .with_context(|| format!("adding {}", file.display()))?;
        println!("Added {} ({}) as {}", entry.name, entry.kind.as_str(), entry.id);
    }
    Ok(())
}

fn cmd_library_remove(config: &AppConfig, id: &str) -> Result<()> {
    let store = open_store(config)?;
    if !store.remove_library_file(id)? {
        bail!("no library entry with id {id}");
    }
    println!("Removed {id}");
    Ok(())
}
