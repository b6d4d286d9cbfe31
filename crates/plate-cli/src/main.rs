mod commands;

use clap::{Parser, Subcommand};
use std::env;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "plate", about = "Browse menus and price configured orders", version)]
struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    json: bool,

    /// Menu file (TOML); falls back to $PLATE_MENU, then built-in sample data
    #[arg(long, global = true)]
    menu: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List restaurants
    Restaurants {
        /// Case-insensitive name filter
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Show a restaurant's menu
    Menu {
        /// Restaurant ID
        restaurant: String,

        /// Menu tab (food, drinks)
        #[arg(long, default_value = "food")]
        tab: String,

        /// Quick-add an item (repeatable)
        #[arg(long)]
        add: Vec<String>,
    },

    /// List sauce and extras catalogs
    Catalog,

    /// Price a configured menu item
    Quote {
        #[command(flatten)]
        order: OrderArgs,

        /// Reject a zero quantity instead of pricing one unit
        #[arg(long)]
        strict: bool,
    },

    /// Confirm a configured menu item as an order line
    Checkout {
        #[command(flatten)]
        order: OrderArgs,
    },
}

#[derive(clap::Args)]
struct OrderArgs {
    /// Restaurant ID
    restaurant: String,

    /// Menu item ID
    item: String,

    /// Sauce ID
    #[arg(long)]
    sauce: Option<String>,

    /// Toggle an extra (repeatable; naming one twice deselects it)
    #[arg(long)]
    extra: Vec<String>,

    /// Number of units
    #[arg(short, long, default_value = "1")]
    quantity: u32,

    /// Free-text note for the kitchen
    #[arg(long)]
    note: Option<String>,
}

impl From<OrderArgs> for commands::OrderRequest {
    fn from(a: OrderArgs) -> Self {
        Self {
            restaurant: a.restaurant,
            item: a.item,
            sauce: a.sauce,
            extras: a.extra,
            quantity: a.quantity,
            note: a.note,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(env::var("PLATE_LOG").ok().as_deref());

    let menu = cli.menu.or_else(|| env::var_os("PLATE_MENU").map(PathBuf::from));

    let result = match cli.command {
        Commands::Restaurants { search } => commands::restaurants::run(menu, search, cli.json),
        Commands::Menu {
            restaurant,
            tab,
            add,
        } => commands::menu::run(menu, restaurant, tab, add, cli.json),
        Commands::Catalog => commands::catalog::run(menu, cli.json),
        Commands::Quote { order, strict } => {
            commands::quote::run(menu, order.into(), strict, cli.json)
        }
        Commands::Checkout { order } => commands::checkout::run(menu, order.into(), cli.json),
    };

    if let Err(e) = result {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn init_tracing(log_override: Option<&str>) {
    let filter = resolve_log_filter(log_override);
    let env_filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn resolve_log_filter(env_override: Option<&str>) -> String {
    match env_override.map(str::trim) {
        Some(value) if !value.is_empty() => value.to_owned(),
        _ => "warn".to_owned(),
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn log_filter_defaults_to_warn() {
        assert_eq!(super::resolve_log_filter(None), "warn");
        assert_eq!(super::resolve_log_filter(Some("  ")), "warn");
    }

    #[test]
    fn log_filter_uses_override() {
        assert_eq!(
            super::resolve_log_filter(Some("plate_core=debug")),
            "plate_core=debug"
        );
    }
}
