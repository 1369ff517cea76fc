#![forbid(unsafe_code)]

mod cmd;
mod output;
mod tui;

use carrinho_core::config;
use clap::{CommandFactory, Parser, Subcommand};
use output::OutputMode;
use std::env;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "carrinho: terminal storefront and shopping cart",
    long_about = None
)]
struct Cli {
    /// Enable verbose logging.
    #[arg(short, long)]
    verbose: bool,

    /// Emit JSON output instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// Suppress non-essential output.
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Catalog file to sell from (TOML). Defaults to the user catalog,
    /// then the built-in course list.
    #[arg(long, global = true, value_name = "PATH")]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Derive the output mode from flags.
    fn output_mode(&self) -> OutputMode {
        output::resolve_output_mode(None, self.json)
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        about = "Browse the catalog and build a cart interactively",
        long_about = "Open the full-screen shop view: catalog on the left, cart on the right.",
        after_help = "EXAMPLES:\n    # Shop from the built-in catalog\n    carrinho shop\n\n    # Shop from a custom catalog\n    carrinho --catalog loja.toml shop"
    )]
    Shop(cmd::shop::ShopArgs),

    #[command(
        about = "List the items for sale",
        long_about = "List catalog items with id, title, and price.",
        after_help = "EXAMPLES:\n    # Human-readable listing\n    carrinho catalog\n\n    # Only the cheaper courses\n    carrinho catalog --max-price 250\n\n    # Emit machine-readable output\n    carrinho catalog --json"
    )]
    Catalog(cmd::catalog::CatalogArgs),

    #[command(
        about = "Build a cart from item ids and print the nota fiscal",
        long_about = "Replay add intents in argument order (repeat an id to raise its quantity), apply any --drop removals, and print the resulting receipt. Ids not in the catalog are ignored.",
        after_help = "EXAMPLES:\n    # Two of course 1, one of course 2\n    carrinho receipt --item 1 --item 1 --item 2\n\n    # Emit machine-readable output\n    carrinho receipt --item 1 --json"
    )]
    Receipt(cmd::receipt::ReceiptArgs),

    #[command(
        about = "Generate shell completion scripts",
        after_help = "EXAMPLES:\n    # Generate bash completions\n    carrinho completions bash"
    )]
    Completions(cmd::completions::CompletionsArgs),
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("CARRINHO_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if env::var("DEBUG").is_ok() {
            "carrinho=debug,info"
        } else {
            "carrinho=info,warn"
        })
    });

    let format = env::var("CARRINHO_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry.with(fmt::layer().json().with_ansi(false)).init();
        }
        _ => {
            registry.with(fmt::layer().compact()).init();
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let output = cli.output_mode();

    match cli.command {
        Commands::Shop(ref args) => {
            let catalog = config::load_catalog(cli.catalog.as_deref())?;
            cmd::shop::run_shop(args, &catalog)
        }
        Commands::Catalog(ref args) => {
            let catalog = config::load_catalog(cli.catalog.as_deref())?;
            cmd::catalog::run_catalog(args, &catalog, output, cli.quiet)
        }
        Commands::Receipt(ref args) => {
            let catalog = config::load_catalog(cli.catalog.as_deref())?;
            cmd::receipt::run_receipt(args, &catalog, output)
        }
        Commands::Completions(args) => {
            let mut command = Cli::command();
            cmd::completions::run_completions(args.shell, &mut command)
        }
    }
}
