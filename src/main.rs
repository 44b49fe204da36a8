//! CLI entry point for ledgerline-shell
//!
//! Provides command-line interface for listing and checking the document
//! catalog, and launching the GUI.

use clap::{Parser, Subcommand};
use colored::*;
use ledgerline_shell::{
    config::{
        ShellConfig, DEFAULT_BRAND, DEFAULT_COMPACT_BREAKPOINT, DEFAULT_HEIGHT, DEFAULT_WIDTH,
    },
    core::Catalog,
    ui::App,
};

#[derive(Parser)]
#[command(name = "ledgerline-shell")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the GTK shell
    Gui {
        /// Initial window width in pixels
        #[arg(long, default_value_t = DEFAULT_WIDTH)]
        width: i32,

        /// Initial window height in pixels
        #[arg(long, default_value_t = DEFAULT_HEIGHT)]
        height: i32,

        /// Window width below which the mobile layout is used
        #[arg(long, default_value_t = DEFAULT_COMPACT_BREAKPOINT)]
        compact_breakpoint: i32,

        /// Brand name shown in the header
        #[arg(long, default_value = DEFAULT_BRAND)]
        brand: String,
    },

    /// List the document catalog
    Catalog,

    /// Check the catalog for duplicate ids
    Check,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Gui {
            width,
            height,
            compact_breakpoint,
            brand,
        } => {
            let config = ShellConfig {
                brand,
                default_width: width,
                default_height: height,
                compact_breakpoint,
            };
            launch_gui(config)?
        }
        Commands::Catalog => list_catalog(Catalog::standard()),
        Commands::Check => check_catalog(Catalog::standard()),
    }

    Ok(())
}

/// Validate config and run the GTK main loop
fn launch_gui(config: ShellConfig) -> anyhow::Result<()> {
    let app = App::new(config).map_err(|e| anyhow::anyhow!("Invalid configuration: {}", e))?;

    let exit_code = app.run();
    if exit_code != glib::ExitCode::SUCCESS {
        anyhow::bail!("GTK application exited with {:?}", exit_code);
    }

    Ok(())
}

/// Print every section and item in catalog order
fn list_catalog(catalog: &Catalog) {
    println!("{}", "Document catalog\n".bold());

    for section in catalog.sections() {
        println!(
            "{} {}",
            section.title.cyan().bold(),
            format!("({}, {})", section.id, section.icon).dimmed()
        );

        for item in section.items {
            println!("  {} → {}", item.id.green(), item.display_name);
        }
        println!();
    }

    println!(
        "{} Total: {} sections, {} items",
        "✓".green(),
        catalog.len(),
        catalog.items().count()
    );
}

/// Check catalog uniqueness invariants
fn check_catalog(catalog: &Catalog) {
    println!("{} Checking {} sections", "→".cyan(), catalog.len());

    match catalog.validate() {
        Ok(()) => {
            println!("{} {}", "✓".green().bold(), "Catalog is valid!".bold());
        }
        Err(e) => {
            println!("{} {}", "✗".red().bold(), e.to_string().red());
            std::process::exit(1);
        }
    }
}
