//! b3 configuration CLI
//!
//! Entry point for the `b3-config` command-line tool.

use b3_config::config::DEFAULT_SITE_FILE;
use b3_config::logging::init_logging;
use b3_config::{Config, LoadedConfig};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "b3-config")]
#[command(about = "Inspect and validate the b3 blog configuration", version)]
struct Cli {
    /// Path to the site file
    #[arg(long, short = 'c', global = true, default_value = DEFAULT_SITE_FILE)]
    config: PathBuf,

    /// JSON object merged over the site file
    #[arg(long, global = true)]
    set: Option<String>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the effective configuration
    Show {
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Validate the configuration and report data-quality warnings
    Check,

    /// List social links in display order
    Socials {
        /// Only list links the site shows
        #[arg(long)]
        active: bool,

        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Print the configured locale tags
    Locales,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let loaded = match load(&cli) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            process::exit(1);
        }
    };

    match cli.command {
        Commands::Show { json } => run_show(&loaded, json),
        Commands::Check => run_check(&loaded),
        Commands::Socials { active, json } => run_socials(&loaded.config, active, json),
        Commands::Locales => run_locales(&loaded.config),
    }
}

fn load(cli: &Cli) -> Result<LoadedConfig, String> {
    let overrides = match &cli.set {
        Some(raw) => Some(
            serde_json::from_str(raw).map_err(|e| format!("Invalid --set value: {}", e))?,
        ),
        None => None,
    };
    LoadedConfig::build(Some(cli.config.as_path()), overrides).map_err(|e| e.to_string())
}

fn run_show(loaded: &LoadedConfig, json: bool) {
    if json {
        print_json(&loaded.config);
        return;
    }

    let site = loaded.config.site();
    println!("{} by {}", site.title, site.author);
    println!("  Website: {}", site.website);
    if !site.desc.is_empty() {
        println!("  Description: {}", site.desc);
    }
    println!("  Posts per page: {}", site.post_per_page);
    println!(
        "  Theme switcher: {}",
        if site.light_and_dark_mode { "on" } else { "off" }
    );
    println!("  Locales: {}", describe_locales(&loaded.config));
    println!(
        "  Social links: {} ({} active)",
        loaded.config.socials().len(),
        loaded.config.active_socials().count()
    );
    println!();
    for source in &loaded.sources {
        match &source.path {
            Some(path) => println!("  Layer {:?}: {}", source.origin, path),
            None => println!("  Layer {:?}", source.origin),
        }
    }
}

fn run_check(loaded: &LoadedConfig) {
    let warnings = loaded.config.lint();
    println!("Configuration valid");
    for warning in &warnings {
        println!("  warning: {}", warning);
    }
}

fn run_socials(config: &Config, active_only: bool, json: bool) {
    let links: Vec<_> = if active_only {
        config.active_socials().collect()
    } else {
        config.socials().iter().collect()
    };

    if json {
        print_json(&links);
        return;
    }

    for link in links {
        let marker = if link.active { "*" } else { " " };
        println!("{} {:<10} {}  ({})", marker, link.name, link.href, link.link_title);
    }
}

fn run_locales(config: &Config) {
    if config.locales().is_empty() {
        println!("(environment default)");
    }
    for tag in config.locales() {
        println!("{}", tag);
    }
}

fn describe_locales(config: &Config) -> String {
    if config.locales().is_empty() {
        "environment default".to_string()
    } else {
        config.locales().join(", ")
    }
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error serializing output: {}", e);
            process::exit(1);
        }
    }
}
