//! Trolley CLI - drive the cart widget from a terminal.
//!
//! A thin host around [`trolley_widget::CartStore`]: the cart is persisted
//! under `--data-dir` between invocations, the terminal stands in for the
//! panel, and each invocation advances the widget's logical clock far enough
//! for every scheduled toast, reveal and checkout timer to resolve before
//! the process exits.
//!
//! # Usage
//!
//! ```bash
//! # Add one unit of a product
//! trolley add p1 "Shake" 9.50 img/shake.webp
//!
//! # Change quantity by a signed delta
//! trolley qty p1 -1
//!
//! # Remove a line, print the cart, run the checkout stub
//! trolley remove p1
//! trolley show
//! trolley checkout
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use trolley_core::{Price, ProductId};
use trolley_widget::{CartStore, FileStorage, StoreConfig};

mod terminal;

use terminal::{TerminalNotifier, TerminalRender};

/// Longest delay the widget ever schedules, with headroom; advancing by this
/// much settles every pending timer.
const SETTLE: Duration = Duration::from_secs(5);

#[derive(Parser)]
#[command(name = "trolley")]
#[command(author, version, about = "Shopping cart widget demo shell")]
struct Cli {
    /// Directory the cart is persisted under
    #[arg(long, default_value = ".trolley")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add one unit of a product to the cart
    Add {
        /// Product id
        id: String,
        /// Display name
        name: String,
        /// Unit price in euros, e.g. 9.50
        price: Decimal,
        /// Image URL or path
        image: String,
    },
    /// Remove a product from the cart entirely
    Remove {
        /// Product id
        id: String,
    },
    /// Change a product's quantity by a signed delta
    Qty {
        /// Product id
        id: String,
        /// Signed quantity change, e.g. 1 or -1
        #[arg(allow_negative_numbers = true)]
        delta: i64,
    },
    /// Print the cart
    Show,
    /// Open or close the cart panel
    Toggle,
    /// Run the checkout stub
    Checkout,
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let storage = FileStorage::new(cli.data_dir)?;
    let mut store = CartStore::open(
        storage,
        TerminalRender,
        TerminalNotifier,
        StoreConfig::default(),
    );

    match cli.command {
        Commands::Add {
            id,
            name,
            price,
            image,
        } => store.add_item(ProductId::new(id), &name, Price::new(price), &image),
        Commands::Remove { id } => {
            let id = ProductId::new(id);
            store.remove_item(&id);
        }
        Commands::Qty { id, delta } => {
            let id = ProductId::new(id);
            store.change_quantity(&id, delta);
        }
        Commands::Show => {}
        Commands::Toggle => store.toggle_open(),
        Commands::Checkout => store.checkout(),
    }

    // Let every pending toast, reveal and gateway timer resolve before exit.
    store.advance(SETTLE);

    Ok(())
}
